//! Date and time rendering
//!
//! Date components split on `/`, `-` or `.`; month 4 always reads
//! "tư". Times accept `H:MM[:SS]` and the letter shapes (`14h30`,
//! `9h15m30s`); zero minutes and seconds are elided.

use super::number::NumberReader;

/// First of `/`, `-`, `.` found in the string, if any.
pub(crate) fn separator(s: &str) -> Option<char> {
    ['/', '-', '.'].into_iter().find(|&c| s.contains(c))
}

/// Renders calendar dates.
pub struct DateReader;

impl DateReader {
    /// Full `DD/MM/YYYY` date (any of the three separators).
    pub fn full(input: &str) -> String {
        let s = input.trim();
        let Some(sep) = separator(s) else {
            return NumberReader::read_grouped(s);
        };
        let parts: Vec<&str> = s.split(sep).collect();
        if parts.len() != 3 {
            return NumberReader::digit_sequence(s);
        }
        format!(
            "{} {} năm {}",
            NumberReader::read_grouped(parts[0]),
            Self::month_word(parts[1]),
            NumberReader::read_grouped(parts[2])
        )
    }

    /// Day-led form: a bare day, `D/M`, or a full date.
    pub fn day(input: &str) -> String {
        let s = input.trim();
        if s.bytes().all(|b| b.is_ascii_digit()) {
            return NumberReader::read_grouped(s);
        }
        let Some(sep) = separator(s) else {
            return NumberReader::digit_sequence(s);
        };
        if s.matches(sep).count() >= 2 {
            return Self::full(s);
        }
        let parts: Vec<&str> = s.split(sep).collect();
        if parts.len() != 2 {
            return NumberReader::digit_sequence(s);
        }
        format!(
            "{} {}",
            NumberReader::read_grouped(parts[0]),
            Self::month_word(parts[1])
        )
    }

    /// Month-led form: a bare month, `M/YYYY`, or a Roman quarter.
    /// The caller supplies the leading cue word ("tháng", "quý").
    pub fn month(input: &str, is_quarter: bool) -> String {
        let s = input.trim();
        if s.bytes().all(|b| b.is_ascii_digit()) {
            return Self::month_number(s);
        }
        if !s.chars().any(|c| c.is_ascii_digit()) {
            return NumberReader::read_roman(&s.to_uppercase())
                .unwrap_or_else(|| NumberReader::digit_sequence(s));
        }
        let Some(sep) = separator(s) else {
            return NumberReader::digit_sequence(s);
        };
        let parts: Vec<&str> = s.split(sep).collect();
        if parts.len() != 2 {
            return NumberReader::digit_sequence(s);
        }
        let month = if is_quarter {
            NumberReader::read_roman(&parts[0].to_uppercase())
                .unwrap_or_else(|| NumberReader::read_grouped(parts[0]))
        } else {
            Self::month_number(parts[0])
        };
        format!("{} năm {}", month, NumberReader::read_grouped(parts[1]))
    }

    /// "tháng X" with the month-4 exception.
    fn month_word(m: &str) -> String {
        format!("tháng {}", Self::month_number(m))
    }

    fn month_number(m: &str) -> String {
        if m.trim().parse::<u32>() == Ok(4) {
            "tư".to_string()
        } else {
            NumberReader::read_grouped(m)
        }
    }
}

/// Renders clock times.
pub struct TimeReader;

impl TimeReader {
    /// Spoken form of a time token.
    pub fn time(input: &str) -> String {
        let s: String = input.trim().chars().filter(|c| !c.is_whitespace()).collect();
        if s.contains(':') {
            return Self::colon_time(&s);
        }
        Self::letter_time(&s)
    }

    fn colon_time(s: &str) -> String {
        let parts: Vec<&str> = s.split(':').collect();
        match parts.as_slice() {
            [h, m] => {
                let mut out = format!("{} giờ", NumberReader::read_grouped(h));
                if m.parse::<u64>() != Ok(0) {
                    out.push_str(&format!(" {} phút", NumberReader::read_grouped(m)));
                }
                out
            }
            [h, m, sec] => {
                let mut out = format!("{} giờ", NumberReader::read_grouped(h));
                if m.parse::<u64>() != Ok(0) {
                    out.push_str(&format!(" {} phút", NumberReader::read_grouped(m)));
                }
                if sec.parse::<u64>() != Ok(0) {
                    out.push_str(&format!(" {} giây", NumberReader::read_grouped(sec)));
                }
                out
            }
            _ => NumberReader::digit_sequence(s),
        }
    }

    /// `14h30`, `14h30m`, `9h15m30s` and friends. A trailing zero
    /// component is dropped ("14h00" reads like "14h").
    fn letter_time(s: &str) -> String {
        let expanded = s
            .to_lowercase()
            .replace('h', " giờ ")
            .replace('m', " phút ")
            .replace('s', " giây ");
        let tokens: Vec<&str> = expanded.split_whitespace().collect();
        if tokens.is_empty() {
            return String::new();
        }
        let mut spoken: Vec<String> = Vec::new();
        let complete = tokens.len() % 2 == 0;
        let body = if complete { &tokens[..] } else { &tokens[..tokens.len() - 1] };
        for t in body {
            spoken.push(Self::read_component(t));
        }
        if !complete {
            let last = tokens[tokens.len() - 1];
            let keep = last.parse::<u64>().map(|v| v != 0).unwrap_or(true) || tokens.len() == 1;
            if keep {
                spoken.push(Self::read_component(last));
            }
        }
        spoken.join(" ")
    }

    fn read_component(t: &str) -> String {
        if t.bytes().all(|b| b.is_ascii_digit()) {
            NumberReader::read_grouped(t)
        } else {
            t.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_dates() {
        assert_eq!(
            DateReader::full("23/03/2025"),
            "hai mươi ba tháng ba năm hai nghìn không trăm hai mươi lăm"
        );
        assert_eq!(
            DateReader::full("1-12-2020"),
            "một tháng mười hai năm hai nghìn không trăm hai mươi"
        );
    }

    #[test]
    fn month_four_reads_tu_in_every_path() {
        assert_eq!(
            DateReader::full("30/4/1975"),
            "ba mươi tháng tư năm một nghìn chín trăm bảy mươi lăm"
        );
        assert_eq!(DateReader::day("30/4"), "ba mươi tháng tư");
        assert_eq!(
            DateReader::month("4/2025", false),
            "tư năm hai nghìn không trăm hai mươi lăm"
        );
        assert_eq!(DateReader::month("04", false), "tư");
    }

    #[test]
    fn day_shapes() {
        assert_eq!(DateReader::day("5"), "năm");
        assert_eq!(DateReader::day("5/3"), "năm tháng ba");
        assert_eq!(DateReader::day("05/03"), "năm tháng ba");
    }

    #[test]
    fn month_shapes() {
        assert_eq!(
            DateReader::month("10/2025", false),
            "mười năm hai nghìn không trăm hai mươi lăm"
        );
        assert_eq!(
            DateReader::month("II/2025", true),
            "hai năm hai nghìn không trăm hai mươi lăm"
        );
        assert_eq!(DateReader::month("III", true), "ba");
    }

    #[test]
    fn colon_times() {
        assert_eq!(TimeReader::time("14:30"), "mười bốn giờ ba mươi phút");
        assert_eq!(TimeReader::time("14:00"), "mười bốn giờ");
        assert_eq!(
            TimeReader::time("9:05:30"),
            "chín giờ năm phút ba mươi giây"
        );
        assert_eq!(TimeReader::time("10:00:30"), "mười giờ ba mươi giây");
    }

    #[test]
    fn letter_times() {
        assert_eq!(TimeReader::time("14h30"), "mười bốn giờ ba mươi");
        assert_eq!(TimeReader::time("14h30m"), "mười bốn giờ ba mươi phút");
        assert_eq!(TimeReader::time("14h"), "mười bốn giờ");
        assert_eq!(TimeReader::time("14h00"), "mười bốn giờ");
        assert_eq!(
            TimeReader::time("9h15m30s"),
            "chín giờ mười lăm phút ba mươi giây"
        );
    }
}
