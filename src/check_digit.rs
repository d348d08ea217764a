use std::fmt::{Display, Formatter};

/// The trailing character of a RUT. `K` stands for the value 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CheckDigit {
    Digit(u8),
    K,
}

const K_VALUE: u32 = 10;

impl CheckDigit {
    /// Maps a checksum value (0..=10) to its check digit
    pub(crate) fn from_value(value: u32) -> Option<Self> {
        match value {
            0..=9 => Some(CheckDigit::Digit(value as u8)),
            K_VALUE => Some(CheckDigit::K),
            _ => None,
        }
    }

    /// Case-insensitive, so `K` and `k` are the same check digit.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'k' | 'K' => Some(CheckDigit::K),
            _ => c.to_digit(10).and_then(Self::from_value),
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            CheckDigit::Digit(d) => (b'0' + d) as char,
            CheckDigit::K => 'k',
        }
    }
}

impl Display for CheckDigit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl PartialEq<char> for CheckDigit {
    fn eq(&self, other: &char) -> bool {
        CheckDigit::from_char(*other) == Some(*self)
    }
}

impl PartialEq<&str> for CheckDigit {
    fn eq(&self, other: &&str) -> bool {
        let mut chars = other.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self == &c,
            _ => false,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_char() {
        assert_eq!(CheckDigit::from_char('0'), Some(CheckDigit::Digit(0)));
        assert_eq!(CheckDigit::from_char('9'), Some(CheckDigit::Digit(9)));
        assert_eq!(CheckDigit::from_char('k'), Some(CheckDigit::K));
        assert_eq!(CheckDigit::from_char('K'), Some(CheckDigit::K));
        assert_eq!(CheckDigit::from_char('x'), None);
        assert_eq!(CheckDigit::from_char('-'), None);
        // non ascii digits are not check digits
        assert_eq!(CheckDigit::from_char('٣'), None);
    }

    #[test]
    fn test_display_is_lowercase() {
        assert_eq!(CheckDigit::K.to_string(), "k");
        assert_eq!(CheckDigit::Digit(7).to_string(), "7");
    }

    #[test]
    fn test_compare_with_text() {
        assert_eq!(CheckDigit::K, 'K');
        assert_eq!(CheckDigit::K, "k");
        assert_eq!(CheckDigit::Digit(0), "0");
        assert_ne!(CheckDigit::Digit(0), "00");
        assert_ne!(CheckDigit::Digit(1), "");
    }

    #[test]
    fn test_from_value() {
        assert_eq!(CheckDigit::from_value(0), Some(CheckDigit::Digit(0)));
        assert_eq!(CheckDigit::from_value(10), Some(CheckDigit::K));
        assert_eq!(CheckDigit::from_value(11), None);
    }
}
