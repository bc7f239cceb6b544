// Static career recommendations keyed by interest area.
// No scoring against the profile; the display percentages are positional.

pub mod catalog;
pub mod handlers;
pub mod report;
