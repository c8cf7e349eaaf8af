/// Signed distance from `b` to `a` on a wrapping 32-bit counter.
///
/// Valid while the two are within 2^31 - 1 of each other: positive when `a`
/// is at or after `b`, negative when it is before.
pub fn wrapping_difference(a: u32, b: u32) -> i32 {
    a.wrapping_sub(b) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinary_distances() {
        assert_eq!(wrapping_difference(10, 3), 7);
        assert_eq!(wrapping_difference(3, 10), -7);
        assert_eq!(wrapping_difference(5, 5), 0);
    }

    #[test]
    fn across_the_wrap() {
        assert_eq!(wrapping_difference(2, u32::MAX - 1), 4);
        assert_eq!(wrapping_difference(u32::MAX, 0), -1);
    }
}
