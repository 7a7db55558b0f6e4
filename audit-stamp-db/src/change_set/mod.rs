pub mod change_kind;
pub mod change_entry;
pub mod detect;

// Re-exports
pub use change_kind::*;
pub use change_entry::*;
pub use detect::*;
