pub mod base;
pub mod dither;
pub mod logging;
pub mod output;
pub mod volume;

pub use base::*;
pub use dither::*;
pub use logging::*;
pub use output::*;
pub use volume::*;
