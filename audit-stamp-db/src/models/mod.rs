pub mod auditable;
pub mod identifiable;
pub mod tracked;
pub mod document;
pub mod category;

// Models modules will be added here as needed
// For example:
// pub mod attachment;

// Re-exports
pub use auditable::*;
pub use identifiable::*;
pub use tracked::*;
pub use document::*;
pub use category::*;
// pub use attachment::*;
