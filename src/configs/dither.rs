use serde::{Deserialize, Serialize};

use crate::audio::dither::DitherSource;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct DitherConfig {
    /// Fixed seed for reproducible output; entropy-seeded when unset.
    pub seed: Option<u64>,
}

impl DitherConfig {
    pub fn build_source(&self) -> DitherSource {
        match self.seed {
            Some(seed) => DitherSource::new(seed),
            None => DitherSource::from_entropy(),
        }
    }
}
