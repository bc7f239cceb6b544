// Chat advice engine: keyword topics, canned templates, random defaults.
// Pure string matching, no model calls.

pub mod handlers;
pub mod random;
pub mod selector;
pub mod templates;
pub mod topics;
