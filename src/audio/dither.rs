//! Seedable 64-bit generator feeding the TPDF dither.
//!
//! Small four-word mixing generator (not cryptographic). The state is not safe
//! for unsynchronised access, so it only ever lives behind the
//! [`DitherSource`] lock.

use std::sync::OnceLock;

use parking_lot::{Mutex, MutexGuard};
use tracing::debug;

use crate::audio::constants::{DITHER_SEED_WORD, DITHER_WARMUP_DRAWS};

/// Generator words. Only reachable through a [`DitherSource`] guard.
#[derive(Debug, PartialEq, Eq)]
pub struct DitherState {
    a: u64,
    b: u64,
    c: u64,
    d: u64,
}

impl DitherState {
    fn seeded(seed: u64) -> Self {
        let mut state = Self {
            a: DITHER_SEED_WORD,
            b: seed,
            c: seed,
            d: seed,
        };
        for _ in 0..DITHER_WARMUP_DRAWS {
            state.next_u64();
        }
        state
    }

    /// Raw 64-bit draw.
    pub fn next_u64(&mut self) -> u64 {
        let e = self.a.wrapping_sub(self.b.rotate_left(7));
        self.a = self.b ^ self.c.rotate_left(13);
        self.b = self.c.wrapping_add(self.d.rotate_left(37));
        self.c = self.d.wrapping_add(e);
        self.d = e.wrapping_add(self.a);
        self.d
    }

    /// Non-negative signed draw (top 63 bits of the raw draw).
    pub fn next_i64(&mut self) -> i64 {
        (self.next_u64() >> 1) as i64
    }
}

/// Lock-guarded dither generator shared by every stream that outputs silence.
#[derive(Debug)]
pub struct DitherSource {
    state: Mutex<DitherState>,
}

static GLOBAL_DITHER: OnceLock<DitherSource> = OnceLock::new();

impl DitherSource {
    pub fn new(seed: u64) -> Self {
        Self {
            state: Mutex::new(DitherState::seeded(seed)),
        }
    }

    /// Seeded from the OS entropy source.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Process-wide instance, created on first use with an entropy seed.
    pub fn global() -> &'static DitherSource {
        GLOBAL_DITHER.get_or_init(Self::from_entropy)
    }

    /// Restart the sequence exactly as if freshly constructed with `seed`.
    pub fn reseed(&self, seed: u64) {
        debug!("Reseeding dither generator");
        *self.state.lock() = DitherState::seeded(seed);
    }

    pub fn draw_u64(&self) -> u64 {
        self.state.lock().next_u64()
    }

    pub fn draw_i64(&self) -> i64 {
        self.state.lock().next_i64()
    }

    /// Hold the generator for a run of draws. Do not block while holding it.
    pub fn lock(&self) -> MutexGuard<'_, DitherState> {
        self.state.lock()
    }
}
