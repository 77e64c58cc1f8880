mod comment;
mod sloc;

pub use comment::{CommentState, CommentTracker, LineKind};
pub use sloc::{ClassCounter, LineCounter, LogicalLineCounter, MethodLineCounter, PhysicalLineCounter};
