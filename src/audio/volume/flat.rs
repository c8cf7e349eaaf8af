//! Linear profile: a given change in logical volume always moves the output by
//! the same number of dB, wherever on the travel it happens.

use tracing::debug;

use super::LogicalVolume;
use crate::audio::constants::{VOLUME_MAX, VOLUME_MIN};

pub fn flat_attenuation(vol: f64, max_db: i64, min_db: i64) -> f64 {
    match LogicalVolume::from_wire(vol) {
        Ok(LogicalVolume::Audible(v)) => {
            (max_db - min_db) as f64 * (v - VOLUME_MIN) / (VOLUME_MAX - VOLUME_MIN)
                + min_db as f64
        }
        Ok(LogicalVolume::Muted) => min_db as f64,
        Err(err) => {
            debug!("Flat volume curve: {}", err);
            min_db as f64
        }
    }
}
