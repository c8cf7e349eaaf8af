pub mod errors;
pub mod logger;
pub mod types;
pub mod version;

pub use errors::*;
pub use logger::*;
pub use types::*;
pub use version::*;
