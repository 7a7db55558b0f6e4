pub mod actor;
pub mod policy;
pub mod error;

pub use error::*;
pub use actor::*;
pub use policy::*;
