/// Output-target resolution and statement writing.
pub mod formatter;
