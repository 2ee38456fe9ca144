//! Vietnamese number rendering
//!
//! Converts numeric literals into their spoken Vietnamese form:
//! grouped cardinals ("hai nghìn không trăm hai mươi lăm"), decimals
//! ("ba phẩy năm"), fractions, signed values, Roman numerals, and
//! digit-by-digit sequences for codes and phone numbers.

/// Spoken form of each decimal digit.
pub(crate) const DIGITS: [&str; 10] = [
    "không", "một", "hai", "ba", "bốn", "năm", "sáu", "bảy", "tám", "chín",
];

/// Scale words for 3-digit groups, low to high.
const SCALES: [&str; 7] = ["", "nghìn", "triệu", "tỷ", "nghìn tỷ", "triệu tỷ", "tỷ tỷ"];

/// Renders numeric strings as spoken Vietnamese.
pub struct NumberReader;

impl NumberReader {
    /// Spoken form of a single decimal digit.
    pub(crate) fn digit_word(d: usize) -> &'static str {
        DIGITS[d]
    }

    /// Full grouped cardinal rendering of a value.
    pub fn cardinal(value: u64) -> String {
        if value == 0 {
            return DIGITS[0].to_string();
        }
        let mut groups = Vec::new();
        let mut v = value;
        while v > 0 {
            groups.push((v % 1000) as u16);
            v /= 1000;
        }
        let top = groups.len() - 1;
        let mut parts = Vec::new();
        for (i, &g) in groups.iter().enumerate().rev() {
            if g == 0 {
                continue;
            }
            let mut piece = Self::triple(g, i == top);
            if !SCALES[i].is_empty() {
                piece.push(' ');
                piece.push_str(SCALES[i]);
            }
            parts.push(piece);
        }
        parts.join(" ")
    }

    /// Renders a 3-digit group. Non-leading groups with an empty
    /// hundreds place read "không trăm"; remainders 1-9 read "lẻ X".
    fn triple(n: u16, leading: bool) -> String {
        let hundreds = n / 100;
        let rem = n % 100;
        let tens = rem / 10;
        let units = rem % 10;
        let mut parts: Vec<String> = Vec::new();

        if hundreds > 0 {
            parts.push(format!("{} trăm", DIGITS[hundreds as usize]));
        } else if !leading && rem > 0 {
            parts.push("không trăm".to_string());
        }

        match tens {
            0 => {
                if units > 0 {
                    if parts.is_empty() {
                        parts.push(DIGITS[units as usize].to_string());
                    } else {
                        parts.push(format!("lẻ {}", DIGITS[units as usize]));
                    }
                }
            }
            1 => {
                parts.push("mười".to_string());
                match units {
                    0 => {}
                    5 => parts.push("lăm".to_string()),
                    u => parts.push(DIGITS[u as usize].to_string()),
                }
            }
            t => {
                parts.push(format!("{} mươi", DIGITS[t as usize]));
                match units {
                    0 => {}
                    1 => parts.push("mốt".to_string()),
                    5 => parts.push("lăm".to_string()),
                    u => parts.push(DIGITS[u as usize].to_string()),
                }
            }
        }
        parts.join(" ")
    }

    /// Reads an unsigned digit string. Up to 9 digits parse directly;
    /// longer strings are chunked from the right in 9-digit slices with
    /// "tỷ" repeated per recursion level. Non-digit input falls back to
    /// digit-by-digit rendering.
    pub fn read_grouped(digits: &str) -> String {
        let trimmed = digits.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Self::digit_sequence(trimmed);
        }
        if trimmed.len() <= 9 {
            return match trimmed.parse::<u64>() {
                Ok(v) => Self::cardinal(v),
                Err(_) => Self::digit_sequence(trimmed),
            };
        }
        Self::chunked(trimmed, 1)
    }

    fn chunked(digits: &str, depth: usize) -> String {
        if digits.len() <= 9 {
            return match digits.parse::<u64>() {
                Ok(v) => Self::cardinal(v),
                Err(_) => Self::digit_sequence(digits),
            };
        }
        let (high, low) = digits.split_at(digits.len() - 9);
        let mut out = Self::chunked(high, depth + 1);
        for _ in 0..depth {
            out.push_str(" tỷ");
        }
        if low.bytes().any(|b| b != b'0') {
            out.push(' ');
            out.push_str(&Self::read_grouped(low));
        }
        out
    }

    /// Reads a numeric literal with separators and signs.
    ///
    /// When both `.` and `,` appear, `,` is the decimal point and `.`
    /// is digit grouping. A single separator is disambiguated by the
    /// trailing-group length: exactly 3 digits means grouping,
    /// anything else means decimal (a known approximation for genuine
    /// three-decimal values). `/` reads "phần" for a plain fraction
    /// and "trên" otherwise.
    pub fn read_number(input: &str, is_decimal: bool) -> String {
        let s = input.trim();
        if s.is_empty() {
            return String::new();
        }
        if let Some(rest) = s.strip_prefix('-') {
            return format!("âm {}", Self::read_number(rest, is_decimal));
        }
        if s.contains('+') || s.contains('-') {
            let replaced = s.replace('-', " trừ ").replace('+', " cộng ");
            return replaced
                .split_whitespace()
                .map(|p| match p {
                    "cộng" | "trừ" => p.to_string(),
                    other => Self::read_number(other, true),
                })
                .collect::<Vec<_>>()
                .join(" ");
        }
        if s.contains('.') && s.contains(',') {
            return s
                .split(',')
                .map(|p| Self::read_number(p, false))
                .collect::<Vec<_>>()
                .join(" phẩy ");
        }
        for sep in [',', '.'] {
            if s.contains(sep) {
                let groups: Vec<&str> = s.split(sep).collect();
                if is_decimal && groups.len() == 2 && groups[1].len() != 3 {
                    return format!(
                        "{} phẩy {}",
                        Self::read_number(groups[0], false),
                        Self::read_number(groups[1], false)
                    );
                }
                let stripped: String = s.chars().filter(|&c| c != sep).collect();
                return Self::read_number(&stripped, is_decimal);
            }
        }
        if s.contains('/') {
            let parts: Vec<&str> = s.split('/').filter(|p| !p.is_empty()).collect();
            if is_decimal && parts.len() == 2 {
                return format!(
                    "{} phần {}",
                    Self::read_number(parts[0], true),
                    Self::read_number(parts[1], true)
                );
            }
            return parts
                .iter()
                .map(|p| Self::read_number(p, true))
                .collect::<Vec<_>>()
                .join(" trên ");
        }
        Self::read_grouped(s)
    }

    /// Numeric value of a Roman numeral string, parsed greedily with a
    /// two-character lookahead for the subtractive pairs.
    pub fn roman_value(input: &str) -> Option<u64> {
        let chars: Vec<char> = input.chars().collect();
        if chars.is_empty() {
            return None;
        }
        let mut total = 0u64;
        let mut i = 0;
        while i < chars.len() {
            if i + 1 < chars.len() {
                if let Some(v) = Self::roman_pair(chars[i], chars[i + 1]) {
                    total += v;
                    i += 2;
                    continue;
                }
            }
            total += Self::roman_single(chars[i])?;
            i += 1;
        }
        Some(total)
    }

    fn roman_single(c: char) -> Option<u64> {
        match c {
            'I' => Some(1),
            'V' => Some(5),
            'X' => Some(10),
            'L' => Some(50),
            'C' => Some(100),
            'D' => Some(500),
            'M' => Some(1000),
            _ => None,
        }
    }

    fn roman_pair(a: char, b: char) -> Option<u64> {
        match (a, b) {
            ('I', 'V') => Some(4),
            ('I', 'X') => Some(9),
            ('X', 'L') => Some(40),
            ('X', 'C') => Some(90),
            ('C', 'D') => Some(400),
            ('C', 'M') => Some(900),
            _ => None,
        }
    }

    /// Spoken cardinal of a Roman numeral, if it parses.
    pub fn read_roman(input: &str) -> Option<String> {
        Self::roman_value(input).map(Self::cardinal)
    }

    /// Digit-by-digit rendering. A leading `+` reads "cộng"; every
    /// other non-digit character is skipped.
    pub fn digit_sequence(input: &str) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if input.starts_with('+') {
            parts.push("cộng");
        }
        for ch in input.chars() {
            if let Some(d) = ch.to_digit(10) {
                parts.push(DIGITS[d as usize]);
            }
        }
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn cardinal_basic() {
        assert_eq!(NumberReader::cardinal(0), "không");
        assert_eq!(NumberReader::cardinal(5), "năm");
        assert_eq!(NumberReader::cardinal(10), "mười");
        assert_eq!(NumberReader::cardinal(15), "mười lăm");
        assert_eq!(NumberReader::cardinal(21), "hai mươi mốt");
        assert_eq!(NumberReader::cardinal(24), "hai mươi bốn");
        assert_eq!(NumberReader::cardinal(25), "hai mươi lăm");
        assert_eq!(NumberReader::cardinal(100), "một trăm");
    }

    #[test]
    fn cardinal_le_convention() {
        assert_eq!(NumberReader::cardinal(105), "một trăm lẻ năm");
        assert_eq!(NumberReader::cardinal(101), "một trăm lẻ một");
        // remainders 10 and up use the normal tens reading
        assert_eq!(NumberReader::cardinal(110), "một trăm mười");
        assert_eq!(NumberReader::cardinal(115), "một trăm mười lăm");
    }

    #[test]
    fn cardinal_empty_hundreds() {
        assert_eq!(
            NumberReader::cardinal(2025),
            "hai nghìn không trăm hai mươi lăm"
        );
        assert_eq!(NumberReader::cardinal(1005), "một nghìn không trăm lẻ năm");
        // leading group never gets the filler
        assert_eq!(NumberReader::cardinal(25), "hai mươi lăm");
    }

    #[test]
    fn cardinal_large_values() {
        assert_eq!(
            NumberReader::cardinal(22_500),
            "hai mươi hai nghìn năm trăm"
        );
        assert_eq!(
            NumberReader::cardinal(4_680_000),
            "bốn triệu sáu trăm tám mươi nghìn"
        );
        assert_eq!(
            NumberReader::cardinal(1_000_000_000),
            "một tỷ"
        );
        assert_eq!(
            NumberReader::cardinal(1_234_567),
            "một triệu hai trăm ba mươi bốn nghìn năm trăm sáu mươi bảy"
        );
    }

    #[test]
    fn cardinal_multiples_of_one_hundred() {
        for n in (100..=900).step_by(100) {
            let spoken = NumberReader::cardinal(n);
            assert!(spoken.ends_with("trăm"), "{n} -> {spoken}");
            assert!(!spoken.contains("lẻ"), "{n} -> {spoken}");
        }
    }

    #[test]
    fn read_grouped_leading_zeros() {
        assert_eq!(NumberReader::read_grouped("05"), "năm");
        assert_eq!(NumberReader::read_grouped("007"), "bảy");
    }

    #[test]
    fn read_grouped_beyond_nine_digits() {
        // 1_000_000_000 as a 10-digit string goes through the chunker
        assert_eq!(NumberReader::read_grouped("1000000000"), "một tỷ");
        assert_eq!(
            NumberReader::read_grouped("2500000000"),
            "hai tỷ năm trăm triệu"
        );
    }

    #[test]
    fn read_number_grouping_separators() {
        assert_eq!(
            NumberReader::read_number("22.500", true),
            "hai mươi hai nghìn năm trăm"
        );
        assert_eq!(
            NumberReader::read_number("4,680,000", true),
            "bốn triệu sáu trăm tám mươi nghìn"
        );
        assert_eq!(
            NumberReader::read_number("1.234.567", true),
            "một triệu hai trăm ba mươi bốn nghìn năm trăm sáu mươi bảy"
        );
    }

    #[test]
    fn read_number_decimals() {
        assert_eq!(NumberReader::read_number("3.5", true), "ba phẩy năm");
        assert_eq!(NumberReader::read_number("1,5", true), "một phẩy năm");
        assert_eq!(
            NumberReader::read_number("12,25", true),
            "mười hai phẩy hai mươi lăm"
        );
    }

    #[test]
    fn read_number_both_separators() {
        // ',' is the decimal point when '.' also appears
        assert_eq!(
            NumberReader::read_number("1.234,5", true),
            "một nghìn hai trăm ba mươi bốn phẩy năm"
        );
    }

    // The trailing-group heuristic cannot tell "1.234" the decimal
    // from "1.234" the grouped integer; grouping wins.
    #[test]
    fn known_approximation_three_digit_decimal() {
        assert_eq!(
            NumberReader::read_number("1.234", true),
            "một nghìn hai trăm ba mươi bốn"
        );
    }

    #[test]
    fn read_number_signs() {
        assert_eq!(NumberReader::read_number("-5", true), "âm năm");
        assert_eq!(NumberReader::read_number("5-3", true), "năm trừ ba");
        assert_eq!(NumberReader::read_number("5+3", true), "năm cộng ba");
    }

    #[test]
    fn read_number_fractions() {
        assert_eq!(NumberReader::read_number("1/2", true), "một phần hai");
        assert_eq!(NumberReader::read_number("1/2", false), "một trên hai");
        assert_eq!(
            NumberReader::read_number("1/2/3", true),
            "một trên hai trên ba"
        );
    }

    #[test]
    fn roman_numerals() {
        assert_eq!(NumberReader::roman_value("I"), Some(1));
        assert_eq!(NumberReader::roman_value("IV"), Some(4));
        assert_eq!(NumberReader::roman_value("IX"), Some(9));
        assert_eq!(NumberReader::roman_value("XIV"), Some(14));
        assert_eq!(NumberReader::roman_value("XXI"), Some(21));
        assert_eq!(NumberReader::roman_value("MCMXCIV"), Some(1994));
        assert_eq!(NumberReader::roman_value("A"), None);
        assert_eq!(NumberReader::read_roman("XI"), Some("mười một".to_string()));
    }

    #[test]
    fn digit_sequences() {
        assert_eq!(
            NumberReader::digit_sequence("0123"),
            "không một hai ba"
        );
        assert_eq!(
            NumberReader::digit_sequence("+84"),
            "cộng tám bốn"
        );
        assert_eq!(NumberReader::digit_sequence("1900 1234"), "một chín không không một hai ba bốn");
    }

    proptest! {
        #[test]
        fn cardinal_contains_no_digit(n in 0u64..10_000_000_000_000) {
            let spoken = NumberReader::cardinal(n);
            prop_assert!(!spoken.chars().any(|c| c.is_ascii_digit()));
            prop_assert!(!spoken.is_empty());
        }

        #[test]
        fn read_number_contains_no_digit(n in 0u64..1_000_000_000) {
            let spoken = NumberReader::read_number(&n.to_string(), true);
            prop_assert!(!spoken.chars().any(|c| c.is_ascii_digit()));
        }
    }
}
