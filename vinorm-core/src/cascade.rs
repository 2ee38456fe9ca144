//! Entity rewrite cascade
//!
//! Regex-driven rewriting of multi-token entities before word
//! segmentation. Categories run in a fixed order (website, email,
//! date, time, score, location, currency, measurement, Roman ordinal,
//! phone, numeric range, reverted currency); each category is retried
//! until its output is stable before the next one runs.

use std::sync::Arc;

use regex::{Captures, Regex};

use crate::dictionary::DictionarySet;
use crate::reader::{DateReader, NumberReader, TimeReader};

/// Upper bound on per-category retries; rewrites converge long before
/// this because every rule consumes the digits it matched.
const MAX_PASSES: usize = 8;

pub struct RewriteCascade {
    dict: Arc<DictionarySet>,
    website: Vec<Regex>,
    email: Regex,
    date_range_day: Vec<Regex>,
    date_range_bare: Regex,
    date_range_month: Regex,
    date_full: Vec<Regex>,
    date_quarter: Regex,
    date_day_cue: Regex,
    date_month_cue: Regex,
    time_range: Vec<Regex>,
    time_single: Vec<Regex>,
    score_lineup: Regex,
    score_result: Regex,
    score_under: Regex,
    loc_political: Regex,
    loc_street: Regex,
    loc_license: Regex,
    currency: Regex,
    currency_reverted: Regex,
    measure: Regex,
    roman: Regex,
    phone: Vec<Regex>,
    range: Vec<Regex>,
}

impl RewriteCascade {
    pub fn new(dict: Arc<DictionarySet>) -> Self {
        // letter codes ("VNĐ", "đ") need a trailing word boundary so
        // "đ" cannot eat the first letter of a word; symbol codes
        // ("$", "₫") sit next to non-word characters where \b fails
        let word_codes = alternation(dict.currency.keys().filter(|k| k.chars().all(char::is_alphanumeric)));
        let symbol_codes = alternation(dict.currency.keys().filter(|k| !k.chars().all(char::is_alphanumeric)));
        Self {
            dict,
            website: vec![
                compile(r"(?i)\bhttps?://[\w.-]+(?:\.[\w-]+)+[-\w._~:/?#\[\]@!$&()*+,;=%]*"),
                compile(r"(?i)\bwww\.[\w-]+(?:\.[\w-]+)+[-\w._~:/?#=&%]*"),
            ],
            email: compile(r"(?i)\b[\w.+-]+@[\w-]+(?:\.[\w-]+)+\b"),
            date_range_day: vec![
                // cue + D/M + joiner + D/M
                compile(
                    r"(?i)\b(từ|ngày|sáng|trưa|chiều|tối|đêm|hôm|đến)\s+([0-3]?\d\s?[/.]\s?[01]?\d)\s?(-|đến|và)\s?([0-3]?\d\s?[/.]\s?[01]?\d)\b",
                ),
                // cue + D + joiner + D/M
                compile(
                    r"(?i)\b(từ|ngày|đến)\s+([0-3]?\d)\s?(-|đến|và)\s?([0-3]?\d\s?[/.]\s?[01]?\d)\b",
                ),
            ],
            // bare D/M - D/M
            date_range_bare: compile(
                r"(?i)\b([0-3]?\d\s?/\s?[01]?\d)\s?(-|đến|và)\s?([0-3]?\d\s?/\s?[01]?\d)\b",
            ),
            // cue + M/Y or M + joiner + M/Y
            date_range_month: compile(
                r"(?i)\b(từ|tháng)\s+([01]?\d(?:\s?/\s?[12]\d{3})?)\s?(-|đến|và)\s?([01]?\d\s?/\s?[12]\d{3})\b",
            ),
            date_full: vec![
                compile(
                    r"(?i)\b(?:(ngày|sáng|trưa|chiều|tối|đêm|hôm|lúc)\s+)?([0-3]?\d)\s?/\s?([01]?\d)\s?/\s?([12]\d{3})\b",
                ),
                compile(
                    r"(?i)\b(?:(ngày|sáng|trưa|chiều|tối|đêm|hôm|lúc)\s+)?([0-3]?\d)\s?-\s?([01]?\d)\s?-\s?([12]\d{3})\b",
                ),
                compile(
                    r"(?i)\b(?:(ngày|sáng|trưa|chiều|tối|đêm|hôm|lúc)\s+)?([0-3]?\d)\.([01]?\d)\.([12]\d{3})\b",
                ),
            ],
            date_quarter: compile(r"(?i)\b(quý|giai đoạn)\s+([IVX]{1,4}\s?[-/]\s?[12]\d{3})\b"),
            date_day_cue: compile(
                r"(?i)\b(ngày|sáng|trưa|chiều|tối|đêm|hôm|mùng|mồng)\s+([0-3]?\d\s?[/.]\s?[01]?\d)\b",
            ),
            date_month_cue: compile(r"(?i)\b(tháng|quý)\s+(\d{1,2}\s?[/.-]\s?[12]\d{3})\b"),
            time_range: vec![
                compile(r"(?i)\b(\d{1,2}:[0-5]\d)\s?-\s?(\d{1,2}:[0-5]\d)\b"),
                compile(r"(?i)\b(\d{1,2}h(?:\d{1,2})?)\s?-\s?(\d{1,2}h(?:\d{1,2})?)\b"),
            ],
            time_single: vec![
                compile(r"\b(?:2[0-3]|[01]?\d):[0-5]\d(?::[0-5]\d)?\b"),
                compile(r"(?i)\b\d{1,2}h\d{1,2}(?:m(?:\d{1,2}s?)?)?\b"),
                compile(r"(?i)\b\d{1,2}h\b"),
            ],
            score_lineup: compile(r"(?i)\b(đội hình)\s+(\d(?:\s?-\s?\d){1,3})\b"),
            score_result: compile(
                r"(?i)\b(tỉ số|tỷ số|dẫn|thắng|thua|hòa)\s+(\d{1,2})\s?-\s?(\d{1,2})\b",
            ),
            score_under: compile(r"(?i)\b[uU]\.?(\d{2})\b"),
            loc_political: compile(r"(?i)\b(kp|tp|tx|q|p|h|x)\s?\.\s?(\d+)\b"),
            loc_street: compile(
                r"(?i)\b(đường|số nhà|nhà|địa chỉ|xã|thôn|ấp|khu phố|căn hộ|ngõ|hẻm)\s+(\d+(?:/\d+)*)\b",
            ),
            loc_license: compile(r"\b(\d{2})([A-Z])\s?-\s?(\d{3}\.?\d{2})\b"),
            currency: compile(&format!(
                r"(?i)(\d+(?:[.,]\d+)*)\s?(?:({word_codes})\b|({symbol_codes}))(?:\s?/\s?(\p{{L}}+))?"
            )),
            currency_reverted: compile(&format!(
                r"(?P<currency>{symbol_codes})\s?(?P<amount>\d+(?:[.,]\d+)*)"
            )),
            // unit codes ending in a word character need a trailing
            // boundary so "m" cannot match inside "mét"
            measure: compile(
                r"(?i)\b(\d+(?:[.,]\d+)*)\s?(%|°(?:[a-z]{1,2}\b)?|[a-zµ]+[23]?\b)(?:\s?/\s?([a-z]+[23]?)\b)?",
            ),
            roman: compile(
                r"(?i)\b(thứ|lần|kỷ|kỉ|kì|kỳ|khóa|khoá|cấp|độ|giai đoạn|quý)\s+([IVX]{1,5})\b",
            ),
            phone: vec![
                compile(r"(\D|^)((?:\+\d{1,3}|0)[-\s.]?\d{1,3}[-\s.]?\d{3}[-\s.]?\d{4})\b"),
                compile(
                    r"(\D|^)((?:\+\d{1,3}|0)[-\s.]?\d{2,3}[-\s.]?\d{2}[-\s.]?\d{2}[-\s.]?\d{2})\b",
                ),
                compile(r"\b(1[89]00[\s.]?\d{4,8})\b"),
            ],
            range: vec![
                compile(r"\b(\d+[.,]\d+)\s?-\s?(\d+(?:[.,]\d+)?)\b"),
                compile(r"\b(\d+)\s?-\s?(\d+)\b"),
            ],
        }
    }

    /// Applies every category in the fixed order.
    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        out = self.rewrite_website(out);
        out = self.rewrite_email(out);
        out = self.rewrite_date(out);
        out = self.rewrite_time(out);
        out = self.rewrite_score(out);
        out = self.rewrite_location(out);
        out = self.rewrite_currency(out);
        out = self.rewrite_measure(out);
        out = self.rewrite_roman(out);
        out = self.rewrite_phone(out);
        out = self.rewrite_range(out);
        out = self.rewrite_reverted_currency(out);
        collapse(&out)
    }

    fn rewrite_website(&self, text: String) -> String {
        stable(text, |t| {
            let mut t = t.to_string();
            for re in &self.website {
                t = re
                    .replace_all(&t, |caps: &Captures| {
                        format!(" {} ", caps[0].replace("://", " hai chấm gạch gạch "))
                    })
                    .into_owned();
            }
            t
        })
    }

    fn rewrite_email(&self, text: String) -> String {
        stable(text, |t| {
            self.email.replace_all(t, " link đính kèm ").into_owned()
        })
    }

    fn rewrite_date(&self, text: String) -> String {
        stable(text, |t| {
            let mut t = t.to_string();
            for re in &self.date_range_day {
                t = re
                    .replace_all(&t, |caps: &Captures| {
                        let cue = caps[1].to_lowercase();
                        let first = clean_date(&caps[2]);
                        let joiner = if &caps[3] == "-" { "đến" } else { &caps[3] };
                        let second = clean_date(&caps[4]);
                        let lead = if cue == "từ" { "từ ngày" } else { &cue };
                        format!(
                            " {} {} {} ngày {} ",
                            lead,
                            DateReader::day(&first),
                            joiner,
                            DateReader::day(&second)
                        )
                    })
                    .into_owned();
            }
            t = self
                .date_range_bare
                .replace_all(&t, |caps: &Captures| {
                    let joiner = if &caps[2] == "-" { "đến" } else { &caps[2] };
                    format!(
                        " ngày {} {} ngày {} ",
                        DateReader::day(&clean_date(&caps[1])),
                        joiner,
                        DateReader::day(&clean_date(&caps[3]))
                    )
                })
                .into_owned();
            t = self
                .date_range_month
                .replace_all(&t, |caps: &Captures| {
                    let cue = caps[1].to_lowercase();
                    let joiner = if &caps[3] == "-" { "đến" } else { &caps[3] };
                    let lead = if cue == "từ" { "từ tháng" } else { &cue };
                    format!(
                        " {} {} {} tháng {} ",
                        lead,
                        DateReader::month(&clean_date(&caps[2]), false),
                        joiner,
                        DateReader::month(&clean_date(&caps[4]), false)
                    )
                })
                .into_owned();
            for re in &self.date_full {
                t = re
                    .replace_all(&t, |caps: &Captures| {
                        let cue = caps
                            .get(1)
                            .map(|m| m.as_str().to_lowercase())
                            .unwrap_or_else(|| "ngày".to_string());
                        let date = format!("{}/{}/{}", &caps[2], &caps[3], &caps[4]);
                        format!(" {} {} ", cue_with_day(&cue), DateReader::full(&date))
                    })
                    .into_owned();
            }
            t = self
                .date_quarter
                .replace_all(&t, |caps: &Captures| {
                    format!(
                        " {} {} ",
                        caps[1].to_lowercase(),
                        DateReader::month(&clean_date(&caps[2]), true)
                    )
                })
                .into_owned();
            t = self
                .date_day_cue
                .replace_all(&t, |caps: &Captures| {
                    format!(
                        " {} {} ",
                        caps[1].to_lowercase(),
                        DateReader::day(&clean_date(&caps[2]))
                    )
                })
                .into_owned();
            t = self
                .date_month_cue
                .replace_all(&t, |caps: &Captures| {
                    format!(
                        " {} {} ",
                        caps[1].to_lowercase(),
                        DateReader::month(&clean_date(&caps[2]), false)
                    )
                })
                .into_owned();
            t
        })
    }

    fn rewrite_time(&self, text: String) -> String {
        stable(text, |t| {
            let mut t = t.to_string();
            for re in &self.time_range {
                t = re
                    .replace_all(&t, |caps: &Captures| {
                        format!(
                            " {} đến {} ",
                            TimeReader::time(&caps[1]),
                            TimeReader::time(&caps[2])
                        )
                    })
                    .into_owned();
            }
            for re in &self.time_single {
                t = re
                    .replace_all(&t, |caps: &Captures| {
                        format!(" {} ", TimeReader::time(&caps[0]))
                    })
                    .into_owned();
            }
            t
        })
    }

    fn rewrite_score(&self, text: String) -> String {
        stable(text, |t| {
            let mut t = self
                .score_lineup
                .replace_all(t, |caps: &Captures| {
                    let numbers = caps[2]
                        .chars()
                        .filter(|c| c.is_ascii_digit())
                        .map(|c| NumberReader::digit_sequence(&c.to_string()))
                        .collect::<Vec<_>>()
                        .join(" ");
                    format!(" {} {} ", caps[1].to_lowercase(), numbers)
                })
                .into_owned();
            t = self
                .score_result
                .replace_all(&t, |caps: &Captures| {
                    format!(
                        " {} {} {} ",
                        caps[1].to_lowercase(),
                        NumberReader::read_grouped(&caps[2]),
                        NumberReader::read_grouped(&caps[3])
                    )
                })
                .into_owned();
            t = self
                .score_under
                .replace_all(&t, |caps: &Captures| {
                    format!(" U {} ", NumberReader::read_grouped(&caps[1]))
                })
                .into_owned();
            t
        })
    }

    fn rewrite_location(&self, text: String) -> String {
        stable(text, |t| {
            let mut t = self
                .loc_political
                .replace_all(t, |caps: &Captures| {
                    match self.dict.locations.get(&caps[1].to_uppercase()) {
                        Some(expansion) => {
                            format!(" {} {} ", expansion, NumberReader::read_grouped(&caps[2]))
                        }
                        None => caps[0].to_string(),
                    }
                })
                .into_owned();
            t = self
                .loc_street
                .replace_all(&t, |caps: &Captures| {
                    format!(
                        " {} {} ",
                        caps[1].to_lowercase(),
                        NumberReader::read_number(&caps[2], false)
                    )
                })
                .into_owned();
            t = self
                .loc_license
                .replace_all(&t, |caps: &Captures| {
                    format!(
                        " {} {} {} ",
                        NumberReader::read_grouped(&caps[1]),
                        &caps[2],
                        NumberReader::read_grouped(&caps[3].replace('.', ""))
                    )
                })
                .into_owned();
            t
        })
    }

    fn rewrite_currency(&self, text: String) -> String {
        stable(text, |t| {
            self.currency
                .replace_all(t, |caps: &Captures| {
                    let code = match caps.get(2).or_else(|| caps.get(3)) {
                        Some(m) => m.as_str(),
                        None => return caps[0].to_string(),
                    };
                    let Some(reading) = self.dict.currency_reading(code) else {
                        return caps[0].to_string();
                    };
                    let amount = NumberReader::read_number(&caps[1], true);
                    match caps.get(4) {
                        Some(unit) => {
                            let unit = unit.as_str();
                            let spoken = self.dict.unit_reading(unit).unwrap_or(unit);
                            format!(" {amount} {reading} một {spoken} ")
                        }
                        None => format!(" {amount} {reading} "),
                    }
                })
                .into_owned()
        })
    }

    fn rewrite_measure(&self, text: String) -> String {
        stable(text, |t| {
            self.measure
                .replace_all(t, |caps: &Captures| {
                    let Some(unit) = self.dict.unit_reading(&caps[2]) else {
                        return caps[0].to_string();
                    };
                    let amount = NumberReader::read_number(&caps[1], true);
                    match caps.get(3) {
                        Some(denom) => {
                            let denom = denom.as_str();
                            let spoken = self.dict.unit_reading(denom).unwrap_or(denom);
                            format!(" {amount} {unit} trên {spoken} ")
                        }
                        None => format!(" {amount} {unit} "),
                    }
                })
                .into_owned()
        })
    }

    fn rewrite_roman(&self, text: String) -> String {
        stable(text, |t| {
            self.roman
                .replace_all(t, |caps: &Captures| {
                    match NumberReader::read_roman(&caps[2].to_uppercase()) {
                        Some(value) => format!(" {} {} ", caps[1].to_lowercase(), value),
                        None => caps[0].to_string(),
                    }
                })
                .into_owned()
        })
    }

    fn rewrite_phone(&self, text: String) -> String {
        stable(text, |t| {
            let mut t = t.to_string();
            for re in &self.phone {
                t = re
                    .replace_all(&t, |caps: &Captures| {
                        match caps.get(2) {
                            Some(number) => format!(
                                "{} {} ",
                                &caps[1],
                                NumberReader::digit_sequence(number.as_str())
                            ),
                            None => format!(" {} ", NumberReader::digit_sequence(&caps[1])),
                        }
                    })
                    .into_owned();
            }
            t
        })
    }

    fn rewrite_range(&self, text: String) -> String {
        stable(text, |t| {
            let mut t = t.to_string();
            for re in &self.range {
                t = re
                    .replace_all(&t, |caps: &Captures| {
                        format!(
                            " {} đến {} ",
                            NumberReader::read_number(&caps[1], true),
                            NumberReader::read_number(&caps[2], true)
                        )
                    })
                    .into_owned();
            }
            t
        })
    }

    fn rewrite_reverted_currency(&self, text: String) -> String {
        stable(text, |t| {
            self.currency_reverted
                .replace_all(t, |caps: &Captures| {
                    match self.dict.currency_reading(&caps["currency"]) {
                        Some(reading) => format!(
                            " {} {} ",
                            NumberReader::read_number(&caps["amount"], true),
                            reading
                        ),
                        None => caps[0].to_string(),
                    }
                })
                .into_owned()
        })
    }
}

/// Re-applies `step` until the text stops changing.
fn stable(mut text: String, step: impl Fn(&str) -> String) -> String {
    for _ in 0..MAX_PASSES {
        let next = step(&text);
        if next == text {
            break;
        }
        text = next;
    }
    text
}

fn compile(pattern: &str) -> Regex {
    // patterns are compile-time constants, a failure is a programming error
    match Regex::new(pattern) {
        Ok(re) => re,
        Err(e) => unreachable!("invalid built-in pattern {pattern}: {e}"),
    }
}

/// Longest-first alternation of escaped dictionary keys.
fn alternation<'a>(keys: impl Iterator<Item = &'a String>) -> String {
    let mut keys: Vec<&String> = keys.collect();
    keys.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
    keys.iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|")
}

fn clean_date(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == '.' { '/' } else { c })
        .collect()
}

fn cue_with_day(cue: &str) -> String {
    if cue == "ngày" {
        cue.to_string()
    } else {
        format!("{cue} ngày")
    }
}

fn collapse(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DictionarySet;

    fn cascade() -> RewriteCascade {
        RewriteCascade::new(DictionarySet::embedded().unwrap())
    }

    #[test]
    fn full_date_with_and_without_cue() {
        let c = cascade();
        assert_eq!(
            c.apply("hôm nay là 23/03/2025 ."),
            "hôm nay là ngày hai mươi ba tháng ba năm hai nghìn không trăm hai mươi lăm ."
        );
        assert_eq!(
            c.apply("ngày 23/03/2025 ."),
            "ngày hai mươi ba tháng ba năm hai nghìn không trăm hai mươi lăm ."
        );
    }

    #[test]
    fn date_ranges() {
        let c = cascade();
        assert_eq!(
            c.apply("từ 23/3 - 25/3"),
            "từ ngày hai mươi ba tháng ba đến ngày hai mươi lăm tháng ba"
        );
        assert_eq!(
            c.apply("từ 20 đến 25/3"),
            "từ ngày hai mươi đến ngày hai mươi lăm tháng ba"
        );
    }

    #[test]
    fn quarters_and_month_cues() {
        let c = cascade();
        assert_eq!(
            c.apply("quý II/2025"),
            "quý hai năm hai nghìn không trăm hai mươi lăm"
        );
        assert_eq!(
            c.apply("tháng 4/2025"),
            "tháng tư năm hai nghìn không trăm hai mươi lăm"
        );
    }

    #[test]
    fn times() {
        let c = cascade();
        assert_eq!(c.apply("lúc 14:30"), "lúc mười bốn giờ ba mươi phút");
        assert_eq!(c.apply("lúc 14h00"), "lúc mười bốn giờ");
        assert_eq!(
            c.apply("9:00 - 10:30"),
            "chín giờ đến mười giờ ba mươi phút"
        );
    }

    #[test]
    fn scores_only_after_cues() {
        let c = cascade();
        assert_eq!(c.apply("tỉ số 2-1"), "tỉ số hai một");
        assert_eq!(c.apply("đội hình 4-4-2"), "đội hình bốn bốn hai");
        // without a cue the range rule takes over
        assert_eq!(c.apply("trang 2-1"), "trang hai đến một");
        assert_eq!(c.apply("vòng loại U23 châu Á"), "vòng loại U hai mươi ba châu Á");
    }

    #[test]
    fn locations() {
        let c = cascade();
        assert_eq!(c.apply("Q.7"), "quận bảy");
        assert_eq!(c.apply("TP.3"), "thành phố ba");
        assert_eq!(c.apply("đường 30/4"), "đường ba mươi trên bốn");
        assert_eq!(
            c.apply("xe 59A-123.45"),
            "xe năm mươi chín A mười hai nghìn ba trăm bốn mươi lăm"
        );
    }

    #[test]
    fn currency_amounts() {
        let c = cascade();
        assert_eq!(
            c.apply("22.500 VNĐ/lít"),
            "hai mươi hai nghìn năm trăm việt nam đồng một lít"
        );
        assert_eq!(
            c.apply("4,680,000 VNĐ ."),
            "bốn triệu sáu trăm tám mươi nghìn việt nam đồng ."
        );
        assert_eq!(c.apply("$100"), "một trăm đô la");
    }

    #[test]
    fn measurements() {
        let c = cascade();
        assert_eq!(c.apply("nặng 5 kg"), "nặng năm ki lô gam");
        assert_eq!(c.apply("tốc độ 100 km/h"), "tốc độ một trăm ki lô mét trên giờ");
        assert_eq!(c.apply("nhiệt độ 25°C"), "nhiệt độ hai mươi lăm độ xê");
        assert_eq!(c.apply("giảm 20 %"), "giảm hai mươi phần trăm");
        // unknown unit codes are left for the classifier
        assert_eq!(c.apply("5 con"), "5 con");
        // a unit code that is only the prefix of a longer word does
        // not match
        assert_eq!(c.apply("dài 5 mét"), "dài 5 mét");
        assert_eq!(c.apply("cao 1m80"), "cao 1m80");
    }

    #[test]
    fn roman_ordinals() {
        let c = cascade();
        assert_eq!(c.apply("lần thứ XI"), "lần thứ mười một");
        assert_eq!(c.apply("thế kỷ XXI"), "thế kỷ hai mươi mốt");
    }

    #[test]
    fn phones() {
        let c = cascade();
        assert_eq!(
            c.apply("gọi 0912345678"),
            "gọi không chín một hai ba bốn năm sáu bảy tám"
        );
        assert_eq!(
            c.apply("tổng đài 1900 1234"),
            "tổng đài một chín không không một hai ba bốn"
        );
    }

    #[test]
    fn numeric_ranges() {
        let c = cascade();
        assert_eq!(c.apply("5 - 7 ngày"), "năm đến bảy ngày");
        assert_eq!(c.apply("2024-2025"), "hai nghìn không trăm hai mươi bốn đến hai nghìn không trăm hai mươi lăm");
    }

    #[test]
    fn idempotent_over_rewritten_text() {
        let c = cascade();
        let once = c.apply("hôm nay là 23/03/2025 , giá 22.500 VNĐ/lít lúc 14:30 .");
        let twice = c.apply(&once);
        assert_eq!(once, twice);
    }
}
