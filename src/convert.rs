// src/convert.rs

//! Integer to digit string and leading-number parsing, allocation free

use core::fmt;

/// Longest digit string [`to_digits`] produces
pub const MAX_DIGITS: usize = 16;

/// Digits of an unsigned value, most significant first
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Digits {
    buf: [u8; MAX_DIGITS],
    len: usize,
}

impl Digits {
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Never true: zero renders as `"0"`.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        for &byte in self.as_bytes() {
            f.write_char(char::from(byte))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digits(\"{}\")", self)
    }
}

/// Render `value` in `base`.
///
/// A base below 2 is treated as 10. Remainders of 10 and up use `A`, `B`,
/// ... so bases past 36 run beyond `Z`. Output is capped at
/// [`MAX_DIGITS`], which a `u16` never reaches.
pub fn to_digits(value: u16, base: u8) -> Digits {
    let base = if base < 2 { 10 } else { u16::from(base) };
    let mut scratch = [0u8; MAX_DIGITS];
    let mut count = 0;
    let mut rest = value;
    loop {
        let remainder = (rest % base) as u8;
        scratch[count] = if remainder < 10 {
            b'0' + remainder
        } else {
            b'A'.wrapping_add(remainder - 10)
        };
        count += 1;
        rest /= base;
        if rest == 0 || count == MAX_DIGITS {
            break;
        }
    }

    let mut digits = Digits {
        buf: [0; MAX_DIGITS],
        len: count,
    };
    for (slot, &digit) in digits.buf.iter_mut().zip(scratch[..count].iter().rev()) {
        *slot = digit;
    }
    digits
}

/// Integer value of the leading decimal digits of `text`.
///
/// Stops at the first byte that is not a digit, which includes `.` and NUL,
/// so `"123.45"` yields 123. Accumulates modulo 2^16.
pub fn parse_leading_number(text: &[u8]) -> u16 {
    text.iter()
        .take_while(|byte| byte.is_ascii_digit())
        .fold(0u16, |value, &digit| {
            value.wrapping_mul(10).wrapping_add(u16::from(digit - b'0'))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_digits_known_values() {
        assert_eq!(to_digits(0, 10).as_bytes(), b"0");
        assert_eq!(to_digits(255, 16).as_bytes(), b"FF");
        assert_eq!(to_digits(8, 2).as_bytes(), b"1000");
        assert_eq!(to_digits(65535, 10).as_bytes(), b"65535");
        assert_eq!(to_digits(35, 36).as_bytes(), b"Z");
    }

    #[test]
    fn test_to_digits_small_base_falls_back_to_decimal() {
        assert_eq!(to_digits(42, 0).as_bytes(), b"42");
        assert_eq!(to_digits(42, 1).as_bytes(), b"42");
    }

    #[test]
    fn test_to_digits_widest_binary() {
        let digits = to_digits(u16::MAX, 2);
        assert_eq!(digits.len(), MAX_DIGITS);
        assert!(digits.as_bytes().iter().all(|&b| b == b'1'));
    }

    #[test]
    fn test_to_digits_display() {
        assert_eq!(format!("{}", to_digits(4096, 16)), "1000");
        assert_eq!(format!("{:?}", to_digits(7, 10)), "Digits(\"7\")");
    }

    #[test]
    fn test_parse_leading_number() {
        assert_eq!(parse_leading_number(b"123.45"), 123);
        assert_eq!(parse_leading_number(b"abc"), 0);
        assert_eq!(parse_leading_number(b"7"), 7);
        assert_eq!(parse_leading_number(b""), 0);
        assert_eq!(parse_leading_number(b".5"), 0);
        assert_eq!(parse_leading_number(b"42abc"), 42);
        assert_eq!(parse_leading_number(b"19\08"), 19);
    }

    #[test]
    fn test_parse_leading_number_wraps_at_16_bits() {
        assert_eq!(parse_leading_number(b"65535"), 65535);
        assert_eq!(parse_leading_number(b"65536"), 0);
        assert_eq!(parse_leading_number(b"70000"), 4464);
    }
}
