//! PCM sample format registry.
//!
//! One table row per `SampleFormat` variant, indexed by discriminant. The
//! encoder, decoder and silence generator all read their bit depth, width and
//! byte order from here instead of switching on the format themselves.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::audio::constants::HYPER_SAMPLE_BITS;
use crate::common::errors::Error;

/// Output sample encodings, in the order the wire tags were historically
/// numbered. `Unknown`, `Auto` and `Invalid` are negotiation placeholders and
/// have no layout.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[repr(u8)]
pub enum SampleFormat {
    #[default]
    Unknown = 0,
    S8,
    U8,
    S16,
    S16Le,
    S16Be,
    S24,
    S24Le,
    S24Be,
    S24_3Le,
    S24_3Be,
    S32,
    S32Le,
    S32Be,
    Auto,
    Invalid,
}

/// Byte order of a sample inside the output buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    Little,
    Big,
    /// Whatever the host CPU uses.
    Native,
}

/// How the unused high byte of a 24-bit sample in a 4-byte slot is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    /// Slot width equals the bit depth.
    None,
    /// Written as a full sign-extended 32-bit word.
    SignExtend,
    /// Three significant bytes plus a zero byte at the most significant end.
    Zero,
}

/// Physical layout of one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatLayout {
    pub bit_depth: u32,
    pub byte_width: usize,
    pub byte_order: ByteOrder,
    pub signed: bool,
    pub padding: Padding,
}

impl FormatLayout {
    /// Right shift that moves a 64-bit hyper sample into this format's range.
    pub const fn dither_shift(&self) -> u32 {
        HYPER_SAMPLE_BITS - self.bit_depth
    }

    /// Mask selecting the bits of a draw that fall below this format's LSB.
    pub const fn dither_mask(&self) -> i64 {
        (1_i64 << self.dither_shift()) - 1
    }

    /// Offset added before storing; non-zero only for unsigned formats.
    pub const fn bias(&self) -> i64 {
        if self.signed {
            0
        } else {
            1_i64 << (self.bit_depth - 1)
        }
    }
}

struct FormatRow {
    name: &'static str,
    layout: Option<FormatLayout>,
}

const fn row(
    name: &'static str,
    bit_depth: u32,
    byte_width: usize,
    byte_order: ByteOrder,
    signed: bool,
    padding: Padding,
) -> FormatRow {
    FormatRow {
        name,
        layout: Some(FormatLayout {
            bit_depth,
            byte_width,
            byte_order,
            signed,
            padding,
        }),
    }
}

const fn placeholder(name: &'static str) -> FormatRow {
    FormatRow { name, layout: None }
}

use ByteOrder::{Big, Little, Native};

static FORMAT_TABLE: [FormatRow; 16] = [
    placeholder("unknown"),
    row("S8", 8, 1, Native, true, Padding::None),
    row("U8", 8, 1, Native, false, Padding::None),
    row("S16", 16, 2, Native, true, Padding::None),
    row("S16_LE", 16, 2, Little, true, Padding::None),
    row("S16_BE", 16, 2, Big, true, Padding::None),
    row("S24", 24, 4, Native, true, Padding::SignExtend),
    row("S24_LE", 24, 4, Little, true, Padding::Zero),
    row("S24_BE", 24, 4, Big, true, Padding::Zero),
    row("S24_3LE", 24, 3, Little, true, Padding::None),
    row("S24_3BE", 24, 3, Big, true, Padding::None),
    row("S32", 32, 4, Native, true, Padding::None),
    row("S32_LE", 32, 4, Little, true, Padding::None),
    row("S32_BE", 32, 4, Big, true, Padding::None),
    placeholder("auto"),
    placeholder("invalid"),
];

impl SampleFormat {
    /// Every variant, placeholders included, in table order.
    pub const ALL: [SampleFormat; 16] = [
        Self::Unknown,
        Self::S8,
        Self::U8,
        Self::S16,
        Self::S16Le,
        Self::S16Be,
        Self::S24,
        Self::S24Le,
        Self::S24Be,
        Self::S24_3Le,
        Self::S24_3Be,
        Self::S32,
        Self::S32Le,
        Self::S32Be,
        Self::Auto,
        Self::Invalid,
    ];

    fn row(self) -> &'static FormatRow {
        &FORMAT_TABLE[self as usize]
    }

    /// Layout of a concrete format, `None` for the placeholders.
    pub fn describe(self) -> Option<&'static FormatLayout> {
        self.row().layout.as_ref()
    }

    /// Layout of a concrete format.
    ///
    /// # Panics
    ///
    /// A placeholder format here means negotiation upstream never settled on a
    /// real encoding; there is nothing sensible to write, so this panics.
    pub fn layout(self) -> &'static FormatLayout {
        match self.describe() {
            Some(layout) => layout,
            None => panic!(
                "sample format \"{}\" reached the PCM encoder; it has no byte layout",
                self.name()
            ),
        }
    }

    pub fn is_valid(self) -> bool {
        self.describe().is_some()
    }

    /// Canonical tag, e.g. `S24_3LE`.
    pub fn name(self) -> &'static str {
        self.row().name
    }

    /// Bytes one interleaved stereo frame occupies in the output buffer.
    /// At most 8, so this cannot overflow; use `bytes_for_frames` for runs.
    pub fn frame_bytes(self) -> usize {
        self.layout().byte_width * crate::audio::constants::OUTPUT_CHANNELS
    }

    /// Bytes `frames` interleaved stereo frames occupy, `None` on overflow.
    pub fn bytes_for_frames(self, frames: usize) -> Option<usize> {
        frames
            .checked_mul(crate::audio::constants::OUTPUT_CHANNELS)?
            .checked_mul(self.layout().byte_width)
    }

    /// Concrete formats only.
    pub fn concrete() -> impl Iterator<Item = SampleFormat> {
        Self::ALL.into_iter().filter(|f| f.is_valid())
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SampleFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownFormat(wanted.to_string()))
    }
}

impl TryFrom<String> for SampleFormat {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SampleFormat> for String {
    fn from(format: SampleFormat) -> Self {
        format.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_indexed_by_discriminant() {
        for (i, format) in SampleFormat::ALL.iter().enumerate() {
            assert_eq!(*format as usize, i, "{} out of place", format);
        }
    }

    #[test]
    fn placeholders_have_no_layout() {
        assert!(!SampleFormat::Unknown.is_valid());
        assert!(!SampleFormat::Auto.is_valid());
        assert!(!SampleFormat::Invalid.is_valid());
        assert_eq!(SampleFormat::concrete().count(), 13);
    }

    #[test]
    fn widths_and_depths() {
        let s24 = SampleFormat::S24.layout();
        assert_eq!((s24.bit_depth, s24.byte_width), (24, 4));
        let packed = SampleFormat::S24_3Be.layout();
        assert_eq!((packed.bit_depth, packed.byte_width), (24, 3));
        assert_eq!(packed.byte_order, ByteOrder::Big);
        let unsigned = SampleFormat::U8.layout();
        assert!(!unsigned.signed);
        assert_eq!(unsigned.bias(), 128);
        assert_eq!(SampleFormat::S16Le.frame_bytes(), 4);
    }

    #[test]
    fn run_sizes_are_checked() {
        assert_eq!(SampleFormat::S24_3Le.bytes_for_frames(10), Some(60));
        assert_eq!(SampleFormat::S8.bytes_for_frames(0), Some(0));
        assert_eq!(SampleFormat::S16Le.bytes_for_frames(usize::MAX / 4 + 1), None);
        assert_eq!(SampleFormat::S32.bytes_for_frames(usize::MAX / 2), None);
    }

    #[test]
    fn dither_mask_tracks_bit_depth() {
        assert_eq!(SampleFormat::S16.layout().dither_shift(), 48);
        assert_eq!(SampleFormat::S16.layout().dither_mask(), (1_i64 << 48) - 1);
        assert_eq!(SampleFormat::S8.layout().dither_mask(), (1_i64 << 56) - 1);
        assert_eq!(SampleFormat::S32Be.layout().dither_mask(), 0xFFFF_FFFF);
    }

    #[test]
    fn only_unpadded_rows_fill_their_slot() {
        for format in SampleFormat::concrete() {
            let layout = format.layout();
            let exact = layout.byte_width * 8 == layout.bit_depth as usize;
            assert_eq!(exact, layout.padding == Padding::None, "{}", format);
        }
    }

    #[test]
    fn parse_names_case_insensitively() {
        for format in SampleFormat::ALL {
            assert_eq!(format.name().parse::<SampleFormat>().unwrap(), format);
        }
        assert_eq!(
            "s24_3le".parse::<SampleFormat>().unwrap(),
            SampleFormat::S24_3Le
        );
        assert!(matches!(
            "S20_LE".parse::<SampleFormat>(),
            Err(Error::UnknownFormat(_))
        ));
    }

    #[test]
    #[should_panic(expected = "reached the PCM encoder")]
    fn layout_of_placeholder_panics() {
        SampleFormat::Auto.layout();
    }
}
