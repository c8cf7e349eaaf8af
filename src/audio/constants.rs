//! Central constants for the audio core.
//!
//! All magic numbers in `src/audio/**` live here so they can be tuned in one
//! place and remain consistent across modules.

// ── Sample / PCM ─────────────────────────────────────────────────────────────

/// Every output stream is interleaved stereo.
pub const OUTPUT_CHANNELS: usize = 2;

/// Width of the intermediate sample word the dither is computed in.
pub const HYPER_SAMPLE_BITS: u32 = 64;

/// Default frames per buffer handed to the output (one RTP packet's worth).
pub const DEFAULT_FRAMES_PER_BUFFER: usize = 352;

// ── Dither generator ─────────────────────────────────────────────────────────

/// Initial value of the first generator word on (re)seed.
pub const DITHER_SEED_WORD: u64 = 0xf1ea_5eed;

/// Draws discarded after seeding so the state is mixed before first use.
pub const DITHER_WARMUP_DRAWS: usize = 20;

// ── Volume ───────────────────────────────────────────────────────────────────

/// Lowest audible logical volume (bottom of the remote control's travel).
pub const VOLUME_MIN: f64 = -30.0;

/// Highest logical volume (no attenuation).
pub const VOLUME_MAX: f64 = 0.0;

/// Logical volume value upstream senders use to mean "muted".
pub const VOLUME_MUTED: f64 = -144.0;

/// Output drop, in hundredths of a dB, for each halving of the tapered curve's
/// volume fraction (10 dB).
pub const TAPER_DB_PER_HALVING: f64 = 1_000.0;

/// Default device attenuation range in hundredths of a dB (0 dB to -60 dB).
pub const DEFAULT_MAX_DB: i64 = 0;
pub const DEFAULT_MIN_DB: i64 = -6_000;
