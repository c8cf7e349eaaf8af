pub mod constants;
pub mod dither;
pub mod format;
pub mod pcm;
pub mod silence;
pub mod volume;

pub use dither::DitherSource;
pub use format::{FormatLayout, SampleFormat};
pub use pcm::{decode_sample, encode_sample};
pub use silence::{Continuation, SilenceGenerator, generate_zero_frames};
pub use volume::{LogicalVolume, VolumeProfile, VolumeRange};
