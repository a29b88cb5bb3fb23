// ============================================================================
// STATE MODULE - plain state types; hooks own them and trigger re-renders
// ============================================================================

pub mod blog_list;
pub mod notification;

pub use blog_list::*;
pub use notification::*;
