mod queries;
pub mod roster;
mod status;
mod types;

pub use queries::*;
pub use status::*;
pub use types::*;
