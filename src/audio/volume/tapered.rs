//! "dasl_tapered" profile.
//!
//! Halving the logical volume fraction drops the output by 10 dB, which is
//! roughly a halving of perceived loudness: 0 → -15 costs 10 dB, -15 → -22.5
//! another 10 dB, and so on.
//!
//! A device with a narrow attenuation range would bottom out well before the
//! control does, leaving a dead zone at the low end of travel. Wherever the
//! flat profile gives a louder result than the taper, the flat value is used
//! instead. Above roughly 50 dB of range the fallback is hardly ever hit.

use tracing::{debug, trace};

use super::LogicalVolume;
use crate::audio::constants::{TAPER_DB_PER_HALVING, VOLUME_MIN};

pub fn tapered_attenuation(vol: f64, max_db: i64, min_db: i64) -> f64 {
    let v = match LogicalVolume::from_wire(vol) {
        Ok(LogicalVolume::Audible(v)) => v,
        Ok(LogicalVolume::Muted) => return min_db as f64,
        Err(err) => {
            debug!("Tapered volume curve: {}", err);
            return min_db as f64;
        }
    };

    let (max, min) = (max_db as f64, min_db as f64);
    let fraction = 1.0 - v / VOLUME_MIN;
    if fraction <= 0.0 {
        return min;
    }

    let flat = min + (max - min) * fraction;
    let tapered = max + TAPER_DB_PER_HALVING * fraction.log2();
    if tapered < flat {
        trace!(
            "Tapered volume curve using flat setting {} for volume {} instead of {} (range {} to {})",
            flat, v, tapered, min, max
        );
        return flat;
    }
    tapered.min(max)
}
