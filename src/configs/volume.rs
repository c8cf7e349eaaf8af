use serde::{Deserialize, Serialize};

use crate::audio::constants::{DEFAULT_MAX_DB, DEFAULT_MIN_DB};
use crate::audio::volume::{VolumeProfile, VolumeRange};
use crate::common::errors::Result;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct VolumeConfig {
    #[serde(default)]
    pub profile: VolumeProfile,
    /// Hundredths of a dB.
    #[serde(default = "default_max_db")]
    pub max_db: i64,
    #[serde(default = "default_min_db")]
    pub min_db: i64,
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            profile: VolumeProfile::default(),
            max_db: DEFAULT_MAX_DB,
            min_db: DEFAULT_MIN_DB,
        }
    }
}

impl VolumeConfig {
    pub fn range(&self) -> Result<VolumeRange> {
        VolumeRange::new(self.max_db, self.min_db)
    }
}

fn default_max_db() -> i64 {
    DEFAULT_MAX_DB
}

fn default_min_db() -> i64 {
    DEFAULT_MIN_DB
}
