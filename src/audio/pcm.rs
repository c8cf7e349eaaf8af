//! Single-sample PCM packing driven by the format table.

use byteorder::{BigEndian, ByteOrder as _, LittleEndian, NativeEndian};

use crate::audio::format::{ByteOrder, FormatLayout, Padding, SampleFormat};

fn low_bits(bits: u32) -> u64 {
    if bits >= 64 {
        u64::MAX
    } else {
        (1_u64 << bits) - 1
    }
}

fn sign_extend(raw: u64, bits: u32) -> i64 {
    let shift = 64 - bits;
    ((raw << shift) as i64) >> shift
}

/// Write `value` (already in the format's natural range) into the start of
/// `out`. Returns the number of bytes written.
///
/// Panics on a placeholder format or when `out` is shorter than one sample.
pub fn encode_sample(out: &mut [u8], value: i64, format: SampleFormat) -> usize {
    pack(out, value, format.layout())
}

pub(crate) fn pack(out: &mut [u8], value: i64, layout: &FormatLayout) -> usize {
    let width = layout.byte_width;

    let word = layout.bias().wrapping_add(value) as u64;
    let word = match layout.padding {
        Padding::SignExtend => word,
        Padding::None | Padding::Zero => word & low_bits(layout.bit_depth),
    } & low_bits(width as u32 * 8);

    let slot = &mut out[..width];
    match layout.byte_order {
        ByteOrder::Little => LittleEndian::write_uint(slot, word, width),
        ByteOrder::Big => BigEndian::write_uint(slot, word, width),
        ByteOrder::Native => NativeEndian::write_uint(slot, word, width),
    }
    width
}

/// Read one sample from the start of `bytes`, undoing any bias and padding.
pub fn decode_sample(bytes: &[u8], format: SampleFormat) -> i64 {
    let layout = format.layout();
    let width = layout.byte_width;

    let slot = &bytes[..width];
    let raw = match layout.byte_order {
        ByteOrder::Little => LittleEndian::read_uint(slot, width),
        ByteOrder::Big => BigEndian::read_uint(slot, width),
        ByteOrder::Native => NativeEndian::read_uint(slot, width),
    } & low_bits(layout.bit_depth);

    let value = if layout.signed {
        sign_extend(raw, layout.bit_depth)
    } else {
        raw as i64
    };
    value - layout.bias()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(value: i64, format: SampleFormat) -> Vec<u8> {
        let mut buf = vec![0xAA; format.layout().byte_width];
        let n = encode_sample(&mut buf, value, format);
        assert_eq!(n, buf.len());
        buf
    }

    #[test]
    fn minus_one_in_each_24_bit_layout() {
        assert_eq!(encoded(-1, SampleFormat::S24Le), [0xFF, 0xFF, 0xFF, 0x00]);
        assert_eq!(encoded(-1, SampleFormat::S24Be), [0x00, 0xFF, 0xFF, 0xFF]);
        assert_eq!(encoded(-1, SampleFormat::S24_3Le), [0xFF, 0xFF, 0xFF]);
        assert_eq!(encoded(-1, SampleFormat::S24_3Be), [0xFF, 0xFF, 0xFF]);
        // native S24 is a sign-extended 32-bit word
        assert_eq!(encoded(-1, SampleFormat::S24), [0xFF, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn byte_order_is_respected() {
        assert_eq!(encoded(0x1234, SampleFormat::S16Le), [0x34, 0x12]);
        assert_eq!(encoded(0x1234, SampleFormat::S16Be), [0x12, 0x34]);
        assert_eq!(
            encoded(0x0012_3456, SampleFormat::S24_3Be),
            [0x12, 0x34, 0x56]
        );
        assert_eq!(
            encoded(i32::MIN as i64, SampleFormat::S32Le),
            [0x00, 0x00, 0x00, 0x80]
        );
        assert_eq!(
            encoded(0x0102_0304, SampleFormat::S32),
            0x0102_0304_i32.to_ne_bytes()
        );
    }

    #[test]
    fn unsigned_eight_bit_is_offset() {
        assert_eq!(encoded(0, SampleFormat::U8), [0x80]);
        assert_eq!(encoded(-1, SampleFormat::U8), [0x7F]);
        assert_eq!(encoded(-128, SampleFormat::U8), [0x00]);
        assert_eq!(encoded(-1, SampleFormat::S8), [0xFF]);
    }

    #[test]
    fn decode_undoes_padding_and_bias() {
        assert_eq!(decode_sample(&[0xFF, 0xFF, 0xFF, 0x00], SampleFormat::S24Le), -1);
        assert_eq!(decode_sample(&[0x00, 0x80, 0x00, 0x00], SampleFormat::S24Be), -0x80_0000);
        assert_eq!(decode_sample(&[0x7F], SampleFormat::U8), -1);
        assert_eq!(decode_sample(&[0x80], SampleFormat::U8), 0);
        assert_eq!(decode_sample(&[0x12, 0x34], SampleFormat::S16Be), 0x1234);
        assert_eq!(
            decode_sample(&encoded(-12_345, SampleFormat::S24), SampleFormat::S24),
            -12_345
        );
    }

    #[test]
    #[should_panic(expected = "no byte layout")]
    fn placeholder_format_is_fatal() {
        let mut buf = [0u8; 4];
        encode_sample(&mut buf, 0, SampleFormat::Unknown);
    }
}
