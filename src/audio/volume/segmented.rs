//! Standard profile: a three-line transfer function shaped like a good
//! audio-taper potentiometer.
//!
//! Each line is given by the logical volume at which it leaves 0 (its knee)
//! and the attenuation it reaches at the bottom of travel. For a 60 dB range
//! the lines are a gentle one from 0 down to -30 dB, a steeper one from -5 down
//! to -45 dB, and a steep one from -17 down to the full -60 dB. The output
//! follows whichever applicable line is lowest.

use tracing::debug;

use super::LogicalVolume;
use crate::audio::constants::VOLUME_MIN;

#[derive(Debug, Clone, Copy)]
struct Segment {
    knee: f64,
    floor: f64,
}

fn segments(range_db: i64) -> [Segment; 3] {
    let range = range_db as f64;
    let mut first_floor = (-range_db / 2) as f64;
    if -range > first_floor {
        first_floor = range;
    }
    [
        Segment {
            knee: 0.0,
            floor: first_floor,
        },
        Segment {
            knee: -5.0,
            floor: first_floor - (range + first_floor) / 2.0,
        },
        Segment {
            knee: -17.0,
            floor: -range,
        },
    ]
}

/// Lowest value of the lines that apply at `v`, relative to the top of range.
fn transfer(v: f64, lines: &[Segment]) -> f64 {
    let mut setting = 0.0;
    for (i, line) in lines.iter().enumerate() {
        if v > line.knee {
            continue;
        }
        let run = VOLUME_MIN - line.knee;
        if run == 0.0 {
            panic!(
                "volume curve segment {} has its knee at the bottom of travel ({}); slope undefined",
                i, line.knee
            );
        }
        let t = line.floor * (v - line.knee) / run;
        if t < setting {
            setting = t;
        }
    }
    setting
}

pub fn segmented_attenuation(vol: f64, max_db: i64, min_db: i64) -> f64 {
    match LogicalVolume::from_wire(vol) {
        Ok(LogicalVolume::Audible(v)) => transfer(v, &segments(max_db - min_db)) + max_db as f64,
        Ok(LogicalVolume::Muted) => min_db as f64,
        Err(err) => {
            debug!("Standard volume curve: {}", err);
            min_db as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::volume::capture_logs;

    #[test]
    fn endpoints() {
        for (max, min) in [(0, -6000), (0, -3000), (-1000, -4000), (0, -100), (500, -9600)] {
            assert_eq!(segmented_attenuation(0.0, max, min), max as f64);
            assert_eq!(segmented_attenuation(-30.0, max, min), min as f64);
        }
    }

    #[test]
    fn midpoint_of_sixty_db_range() {
        let attn = segmented_attenuation(-15.0, 0, -6000);
        assert!(attn > -6000.0 && attn < 0.0);
        assert_eq!(attn, -1800.0);
        assert_eq!(attn.to_bits(), segmented_attenuation(-15.0, 0, -6000).to_bits());
    }

    #[test]
    fn non_increasing_down_the_travel() {
        for (max, min) in [(0, -6000), (0, -3000), (-1000, -4000), (0, -100), (0, -1)] {
            let mut last = segmented_attenuation(0.0, max, min);
            for i in 1..=300 {
                let v = -(i as f64) / 10.0;
                let attn = segmented_attenuation(v, max, min);
                assert!(attn <= last, "rose at {v} for {max}..{min}: {last} -> {attn}");
                last = attn;
            }
        }
    }

    #[test]
    fn empty_range_is_flat() {
        assert_eq!(segmented_attenuation(-12.0, -700, -700), -700.0);
    }

    #[test]
    fn invalid_requests_fall_back_to_min() {
        let logs = capture_logs(|| {
            assert_eq!(segmented_attenuation(1.0, 0, -6000), -6000.0);
        });
        assert!(logs.contains("out of range"), "missing diagnostic: {logs}");

        let logs = capture_logs(|| {
            assert_eq!(segmented_attenuation(-144.0, 0, -6000), -6000.0);
        });
        assert!(logs.is_empty(), "unexpected log output: {logs}");
    }

    #[test]
    #[should_panic(expected = "slope undefined")]
    fn knee_at_bottom_of_travel_is_fatal() {
        let lines = [Segment {
            knee: VOLUME_MIN,
            floor: -100.0,
        }];
        transfer(-30.0, &lines);
    }
}
