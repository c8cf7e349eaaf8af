//! Dithered silence for keeping the output device fed between tracks.
//!
//! The base signal is always zero. With dither enabled each sample carries a
//! triangular-PDF offset built from the difference of two consecutive
//! rectangular draws, so it lands on either 0 or -1 LSB once scaled down.
//! The last draw of one buffer is threaded into the next as a continuation,
//! which keeps the dither sequence seamless across buffer boundaries.

use std::sync::Arc;

use tracing::trace;

use crate::audio::dither::DitherSource;
use crate::audio::format::SampleFormat;
use crate::audio::pcm::pack;

/// Last raw draw of a previous call, fed into the next one for the same stream.
pub type Continuation = i64;

/// Fill `out` with `frames` interleaved stereo frames of silence.
///
/// Returns the continuation to pass to the next call for this stream. With
/// zero frames nothing is drawn and `continuation` comes back unchanged.
/// Bytes past the frames written are left untouched.
///
/// # Panics
///
/// On a placeholder `format` or when `out` is too small for `frames`.
pub fn generate_zero_frames(
    source: &DitherSource,
    out: &mut [u8],
    frames: usize,
    format: SampleFormat,
    with_dither: bool,
    continuation: Continuation,
) -> Continuation {
    let layout = format.layout();
    let needed = required_len(frames, format);
    assert!(
        out.len() >= needed,
        "silence buffer of {} bytes cannot hold {} {} frames ({} bytes)",
        out.len(),
        frames,
        format,
        needed
    );
    if frames == 0 {
        return continuation;
    }

    let mask = layout.dither_mask();
    let shift = layout.dither_shift();
    let mut previous = continuation;

    let mut rng = source.lock();
    for slot in out[..needed].chunks_exact_mut(layout.byte_width) {
        let r = rng.next_i64();
        let tpdf = (r & mask) - (previous & mask);
        let hyper_sample = if with_dither { tpdf } else { 0 };
        pack(slot, hyper_sample >> shift, layout);
        previous = r;
    }
    drop(rng);

    trace!(frames, %format, with_dither, "Generated silence");
    previous
}

/// Bytes needed for `frames` frames of `format`.
///
/// Panics when the size does not fit in `usize`; no buffer could hold it.
fn required_len(frames: usize, format: SampleFormat) -> usize {
    match format.bytes_for_frames(frames) {
        Some(len) => len,
        None => panic!(
            "silence buffer cannot hold {} {} frames (size overflows usize)",
            frames, format
        ),
    }
}

/// Per-stream silence source: remembers the format, dither setting and the
/// continuation between buffers.
pub struct SilenceGenerator {
    source: Arc<DitherSource>,
    format: SampleFormat,
    with_dither: bool,
    continuation: Continuation,
}

impl SilenceGenerator {
    /// Panics if `format` is a placeholder, so the mistake surfaces at stream
    /// setup rather than on the first buffer.
    pub fn new(source: Arc<DitherSource>, format: SampleFormat, with_dither: bool) -> Self {
        format.layout();
        Self {
            source,
            format,
            with_dither,
            continuation: 0,
        }
    }

    pub fn format(&self) -> SampleFormat {
        self.format
    }

    pub fn set_dither(&mut self, with_dither: bool) {
        self.with_dither = with_dither;
    }

    pub fn continuation(&self) -> Continuation {
        self.continuation
    }

    /// Bytes needed for `frames` frames in this stream's format.
    pub fn buffer_len(&self, frames: usize) -> usize {
        required_len(frames, self.format)
    }

    /// Write `frames` frames into `out`, returning the bytes written.
    pub fn fill(&mut self, out: &mut [u8], frames: usize) -> usize {
        self.continuation = generate_zero_frames(
            &self.source,
            out,
            frames,
            self.format,
            self.with_dither,
            self.continuation,
        );
        self.buffer_len(frames)
    }
}
