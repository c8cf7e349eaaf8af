use serde::{Deserialize, Serialize};

use crate::audio::constants::DEFAULT_FRAMES_PER_BUFFER;
use crate::audio::format::SampleFormat;
use crate::common::errors::{Error, Result};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: SampleFormat,
    #[serde(default = "default_true")]
    pub dither: bool,
    #[serde(default = "default_frames_per_buffer")]
    pub frames_per_buffer: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            dither: true,
            frames_per_buffer: default_frames_per_buffer(),
        }
    }
}

impl OutputConfig {
    /// The configured format, provided it can actually be written.
    pub fn concrete_format(&self) -> Result<SampleFormat> {
        if self.format.is_valid() {
            Ok(self.format)
        } else {
            Err(Error::UnusableFormat(self.format.to_string()))
        }
    }
}

fn default_format() -> SampleFormat {
    SampleFormat::S16
}

fn default_true() -> bool {
    true
}

fn default_frames_per_buffer() -> usize {
    DEFAULT_FRAMES_PER_BUFFER
}
