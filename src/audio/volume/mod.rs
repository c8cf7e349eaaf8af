//! Logical volume → device attenuation.
//!
//! Remote controls send a volume in `[-30.0, 0.0]`, or `-144.0` for mute.
//! Each curve maps that onto a device's attenuation range, expressed in
//! hundredths of a dB. All curves are pure and need no locking.

pub mod flat;
pub mod segmented;
pub mod tapered;

pub use flat::flat_attenuation;
pub use segmented::segmented_attenuation;
pub use tapered::tapered_attenuation;

use serde::{Deserialize, Serialize};

use crate::audio::constants::{VOLUME_MAX, VOLUME_MIN, VOLUME_MUTED};
use crate::common::errors::{Error, Result};

/// A volume request after the mute sentinel has been recognised.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogicalVolume {
    /// Somewhere on the control's travel, `VOLUME_MIN..=VOLUME_MAX`.
    Audible(f64),
    Muted,
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("volume request value {0} is out of range: should be from 0.0 to -30.0 or -144.0")]
pub struct VolumeOutOfRange(pub f64);

impl LogicalVolume {
    /// Classify a volume as received from the sender.
    pub fn from_wire(raw: f64) -> std::result::Result<Self, VolumeOutOfRange> {
        if (VOLUME_MIN..=VOLUME_MAX).contains(&raw) {
            Ok(Self::Audible(raw))
        } else if raw == VOLUME_MUTED {
            Ok(Self::Muted)
        } else {
            Err(VolumeOutOfRange(raw))
        }
    }

    pub fn to_wire(self) -> f64 {
        match self {
            Self::Audible(v) => v,
            Self::Muted => VOLUME_MUTED,
        }
    }
}

/// Attenuation range of an output device's mixer, hundredths of a dB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeRange {
    pub max_db: i64,
    pub min_db: i64,
}

impl VolumeRange {
    pub fn new(max_db: i64, min_db: i64) -> Result<Self> {
        if min_db > max_db {
            return Err(Error::InvalidVolumeRange { max_db, min_db });
        }
        Ok(Self { max_db, min_db })
    }

    pub fn span(&self) -> i64 {
        self.max_db - self.min_db
    }
}

/// Which transfer function a device uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeProfile {
    /// Three-segment piecewise curve.
    #[default]
    Standard,
    /// Equal volume steps give equal dB steps.
    Flat,
    /// Halving the volume drops the level by 10 dB.
    DaslTapered,
}

impl VolumeProfile {
    pub fn attenuation(self, volume: f64, range: VolumeRange) -> f64 {
        let f: fn(f64, i64, i64) -> f64 = match self {
            Self::Standard => segmented_attenuation,
            Self::Flat => flat_attenuation,
            Self::DaslTapered => tapered_attenuation,
        };
        f(volume, range.max_db, range.min_db)
    }
}

/// Run `f` with a scoped subscriber and return everything it logged.
#[cfg(test)]
pub(crate) fn capture_logs(f: impl FnOnce()) -> String {
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Sink(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Sink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let sink = Sink::default();
    let writer = sink.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);

    let bytes = sink.0.lock().unwrap().clone();
    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_wire_values() {
        assert_eq!(LogicalVolume::from_wire(0.0), Ok(LogicalVolume::Audible(0.0)));
        assert_eq!(
            LogicalVolume::from_wire(-30.0),
            Ok(LogicalVolume::Audible(-30.0))
        );
        assert_eq!(LogicalVolume::from_wire(-144.0), Ok(LogicalVolume::Muted));
        assert_eq!(LogicalVolume::from_wire(-31.0), Err(VolumeOutOfRange(-31.0)));
        assert_eq!(LogicalVolume::from_wire(0.5), Err(VolumeOutOfRange(0.5)));
        assert!(LogicalVolume::from_wire(f64::NAN).is_err());
        assert_eq!(LogicalVolume::Muted.to_wire(), -144.0);
    }

    #[test]
    fn range_rejects_inverted_bounds() {
        assert!(VolumeRange::new(0, -6000).is_ok());
        assert!(VolumeRange::new(-100, -100).is_ok());
        assert!(matches!(
            VolumeRange::new(-6000, 0),
            Err(Error::InvalidVolumeRange { .. })
        ));
        assert_eq!(VolumeRange::new(-500, -4500).unwrap().span(), 4000);
    }

    #[test]
    fn profile_dispatches_to_its_curve() {
        let range = VolumeRange::new(0, -6000).unwrap();
        for v in [0.0, -7.5, -15.0, -29.0] {
            assert_eq!(
                VolumeProfile::Standard.attenuation(v, range),
                segmented_attenuation(v, 0, -6000)
            );
            assert_eq!(
                VolumeProfile::Flat.attenuation(v, range),
                flat_attenuation(v, 0, -6000)
            );
            assert_eq!(
                VolumeProfile::DaslTapered.attenuation(v, range),
                tapered_attenuation(v, 0, -6000)
            );
        }
    }

    #[test]
    fn every_profile_spans_the_device_range() {
        let range = VolumeRange::new(-250, -5250).unwrap();
        for profile in [
            VolumeProfile::Standard,
            VolumeProfile::Flat,
            VolumeProfile::DaslTapered,
        ] {
            assert_eq!(profile.attenuation(0.0, range), -250.0, "{:?}", profile);
            assert_eq!(profile.attenuation(-30.0, range), -5250.0, "{:?}", profile);
            assert_eq!(profile.attenuation(-144.0, range), -5250.0, "{:?}", profile);
        }
    }
}
