// Conversation log and reply pacing.
// Replies are computed by the advisor after an artificial delay.

pub mod handlers;
pub mod log;
pub mod pacing;
