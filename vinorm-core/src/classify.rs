//! Word classifier
//!
//! Resolves each token of a segmented sentence to its spoken form
//! through a fixed precedence chain: punctuation, vocabulary, entity
//! dictionaries, abbreviations, numeric readings, case-shape rules,
//! and a total fallback. Multi-token abbreviations consume the tokens
//! they absorb through a skip list, so consumed slots render nothing.

use std::sync::Arc;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::dictionary::{
    is_duration_punct, is_punct_char, letter_name, DictionarySet, DOUBLE_CONSONANTS,
};
use crate::reader::{DateReader, NumberReader};

/// One token position: either still active or absorbed by an earlier
/// multi-token match.
enum Slot {
    Active(String),
    Consumed,
}

pub struct WordClassifier {
    dict: Arc<DictionarySet>,
    re_day_month: Regex,
    re_month_year: Regex,
}

impl WordClassifier {
    pub fn new(dict: Arc<DictionarySet>) -> Self {
        Self {
            dict,
            re_day_month: compile(r"^(3[01]|[12]\d|0?[1-9])/(1[0-2]|0?[1-9])$"),
            re_month_year: compile(r"^(1[0-2]|0?[1-9])/([12]\d{3})$"),
        }
    }

    /// Renders one sentence worth of tokens as a spoken string, with
    /// `.` and `,` attached to the preceding word.
    pub fn read_sentence(&self, tokens: &[String]) -> String {
        join_spoken(&self.read_tokens(tokens))
    }

    /// Re-classifies an expansion string produced mid-chain.
    fn read_fragment(&self, text: &str) -> String {
        let tokens: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        self.read_tokens(&tokens).join(" ")
    }

    fn read_tokens(&self, tokens: &[String]) -> Vec<String> {
        let mut slots: Vec<Slot> = tokens.iter().map(|t| Slot::Active(t.clone())).collect();
        let len = slots.len();
        let mut out: Vec<String> = Vec::new();

        for idx in 0..len {
            let word = match &slots[idx] {
                Slot::Active(w) => w.clone(),
                Slot::Consumed => continue,
            };
            let lower = word.to_lowercase();

            // 1. punctuation tokens
            if self.is_punct_token(&word) {
                let spoken = self.read_punct(&word, idx, len);
                if !spoken.is_empty() {
                    out.push(spoken);
                }
                continue;
            }

            // 2. vocabulary and special respellings
            if self.dict.is_word(&lower) {
                out.push(lower);
                continue;
            }
            if let Some(respelled) = self.dict.special.get(&lower) {
                out.push(respelled.clone());
                continue;
            }

            // 3. entity dictionaries
            if let Some(v) = self.dict.artists.get(&lower) {
                out.push(v.clone());
                continue;
            }
            if let Some(v) = self.dict.banks.get(&lower) {
                out.push(v.clone());
                continue;
            }
            if let Some(v) = self.dict.loans.get(&lower) {
                out.push(v.clone());
                continue;
            }
            if let Some(v) = self.dict.mixed.get(&lower) {
                // mixed expansions are themselves classifier input
                out.push(self.read_fragment(&v.clone()));
                continue;
            }
            if let Some(spoken) = self.read_symbol_split(&word) {
                out.push(spoken);
                continue;
            }
            if let Some(v) = self.dict.websites.get(&lower) {
                out.push(v.clone());
                continue;
            }
            if let Some(v) = self.dict.domains.get(&lower) {
                out.push(v.clone());
                continue;
            }
            if self.has_domain_suffix(&lower) {
                out.push(self.read_fragment(&lower.replace('.', " chấm ")));
                continue;
            }
            if let Some(v) = self.dict.currency.get(&word.to_uppercase()) {
                out.push(v.clone());
                continue;
            }

            // 4. dotted initialisms ("P.V", single letters)
            if is_short_name(&word) {
                out.push(self.read_upper(&word, true));
                continue;
            }

            // 5. administrative prefix + numeral ("Q.7" leftovers)
            if let Some(spoken) = self.read_location_prefix(&word) {
                out.push(spoken);
                continue;
            }

            // 6. anything containing a digit
            if word.chars().any(|c| c.is_ascii_digit()) {
                out.push(self.read_numeric(&word));
                continue;
            }

            // 7. trailing period
            if lower.len() > 1 {
                if let Some(stem) = word.strip_suffix('.') {
                    out.push(format!("{} .", self.read_fragment(stem)));
                    continue;
                }
            }

            // 8. hyphenated tokens
            if word.contains('-') {
                out.push(self.read_hyphenated(&word));
                continue;
            }

            // 9. bare unit codes
            if let Some(unit) = self.dict.unit_reading(&word) {
                out.push(unit.to_string());
                continue;
            }

            // 10. slash-joined tokens
            if word.contains('/') {
                out.push(self.read_fragment(&word.replace('/', " / ")));
                continue;
            }

            // 11. uppercase tokens
            if is_all_upper(&word) {
                out.push(self.read_uppercase(&word, idx, &mut slots));
                continue;
            }

            // 12. lowercase or title-case words
            if is_lower(&word) || is_title(&word) {
                out.push(self.read_plain_word(&lower, idx, tokens));
                continue;
            }

            // 13. mixed-case letter runs ("VinFast")
            if word.chars().all(char::is_alphabetic) {
                out.push(self.read_camel(&word));
                continue;
            }

            // 14. total fallback
            out.push(self.read_fallback(&word));
        }
        out
    }

    fn is_punct_token(&self, word: &str) -> bool {
        self.dict.punctuation.contains_key(word)
            || word.chars().all(is_punct_char)
    }

    fn read_punct(&self, word: &str, idx: usize, len: usize) -> String {
        if idx == 0 {
            return String::new();
        }
        if word.chars().count() > 1 && !self.dict.punctuation.contains_key(word) {
            return ",".to_string();
        }
        if is_duration_punct(word) {
            return if idx == len - 1 { "." } else { "," }.to_string();
        }
        self.dict.punctuation.get(word).cloned().unwrap_or_default()
    }

    /// Splits a word at readable symbols ("B&B" -> "bê và bê").
    fn read_symbol_split(&self, word: &str) -> Option<String> {
        if !word
            .chars()
            .any(|c| self.dict.symbols.contains_key(c.to_string().as_str()))
        {
            return None;
        }
        let mut pieces: Vec<String> = Vec::new();
        let mut current = String::new();
        for c in word.chars() {
            let key = c.to_string();
            if let Some(spoken) = self.dict.symbols.get(&key) {
                if !current.is_empty() {
                    pieces.push(self.read_fragment(&current));
                    current.clear();
                }
                pieces.push(spoken.clone());
            } else {
                current.push(c);
            }
        }
        if !current.is_empty() {
            pieces.push(self.read_fragment(&current));
        }
        Some(pieces.join(" "))
    }

    fn has_domain_suffix(&self, lower: &str) -> bool {
        lower.rsplit_once('.').is_some_and(|(head, tail)| {
            !head.is_empty() && self.dict.domains.contains_key(tail)
        })
    }

    fn read_location_prefix(&self, word: &str) -> Option<String> {
        let (head, rest) = word.split_once('.')?;
        let expansion = self.dict.locations.get(&head.to_uppercase())?;
        if !rest.chars().any(|c| c.is_ascii_digit()) {
            return None;
        }
        Some(format!("{} {}", expansion, self.read_fragment(rest)))
    }

    /// Uppercase branch: Roman numerals, single letters, multi-token
    /// abbreviations via lookahead, then the single-token reader.
    fn read_uppercase(&self, word: &str, idx: usize, slots: &mut Vec<Slot>) -> String {
        if word.chars().count() > 1 && word.chars().all(|c| matches!(c, 'I' | 'V' | 'X')) {
            if let Some(spoken) = NumberReader::read_roman(word) {
                return spoken;
            }
        }
        if self.dict.double_abbr_starts.contains(word) {
            // "GD & ĐT" / "VH , TT và DL": partner tokens sit at
            // idx+2 and idx+4, with separators between them
            if idx + 4 < slots.len() {
                if let (Some(second), Some(third)) =
                    (active_at(slots, idx + 2), active_at(slots, idx + 4))
                {
                    let key = format!("{word}#{second}#{third}");
                    if let Some(v) = self.dict.double_abbr.get(&key) {
                        consume(slots, idx + 1, 4);
                        return v.clone();
                    }
                }
            }
            if idx + 2 < slots.len() {
                if let Some(second) = active_at(slots, idx + 2) {
                    let key = format!("{word}#{second}");
                    if let Some(v) = self.dict.double_abbr.get(&key) {
                        consume(slots, idx + 1, 2);
                        return v.clone();
                    }
                }
            }
        }
        self.read_upper(word, true)
    }

    /// Single uppercase token reader. `use_dict` is false when called
    /// on fragments of an already-matched abbreviation.
    fn read_upper(&self, word: &str, use_dict: bool) -> String {
        if use_dict {
            if let Some(v) = self.dict.single_abbr.get(word) {
                return v.clone();
            }
        }
        if self.dict.abbr_exceptions.contains(word) {
            return self.read_lower(&word.to_lowercase());
        }
        let lower = word.to_lowercase();
        if self.dict.is_word(&lower) {
            return lower;
        }
        if word.contains('.') {
            let folded = ascii_fold(word);
            return folded
                .split('.')
                .filter(|s| !s.is_empty())
                .map(|s| self.read_upper(s, true))
                .collect::<Vec<_>>()
                .join(" ");
        }
        // short tokens, tokens with no plain vowel, and Ư-bearing
        // tokens are spelled out; the rest read as an ordinary word
        let spell = word.chars().count() <= 6
            || word.contains('Ư')
            || !word.chars().any(|c| "AEIOU".contains(c));
        if spell {
            spell_letters(word)
        } else {
            self.read_lower(&lower)
        }
    }

    /// Lowercase word reader with diacritic folding for unknowns.
    fn read_lower(&self, word: &str) -> String {
        if word.len() > 1 {
            if let Some(stem) = word.strip_suffix('.') {
                return format!("{} .", self.read_lower(stem));
            }
        }
        if word.contains('-') {
            return word
                .split('-')
                .filter(|p| !p.is_empty())
                .map(|p| self.read_lower(p))
                .collect::<Vec<_>>()
                .join(" ");
        }
        if let Some(stem) = word.strip_suffix("bank") {
            if stem.is_empty() {
                return "banh".to_string();
            }
            return format!("{} banh", self.read_lower(stem));
        }
        // native syllables outside the vocabulary keep their
        // diacritics; the fold respells foreign material only
        if is_vietnamese_word(word) {
            return word.to_string();
        }
        ascii_fold(word)
    }

    /// Digit-bearing token reader.
    fn read_numeric(&self, word: &str) -> String {
        if word.len() > 1 {
            if let Some(stem) = word.strip_suffix('.') {
                return format!("{} .", self.read_numeric(stem));
            }
        }
        if let Some(first) = word.chars().next() {
            if (first == '+' || first == '-') && word.chars().count() > 1 {
                let op = if first == '+' { "cộng" } else { "trừ" };
                let rest: String = word.chars().skip(1).collect();
                return format!("{op} {}", self.read_numeric(&rest));
            }
        }
        if word.len() > 1 && word.starts_with('0') && word.bytes().all(|b| b.is_ascii_digit()) {
            // leading zero marks a code, not a quantity
            return NumberReader::digit_sequence(word);
        }
        if is_number(word) {
            return NumberReader::read_number(word, true);
        }
        if word.contains('-') || word.contains(':') {
            return word
                .split(['-', ':'])
                .filter(|p| !p.is_empty())
                .map(|p| self.read_numeric(p))
                .collect::<Vec<_>>()
                .join(" ");
        }
        if word.contains('/') {
            if self.re_day_month.is_match(word) {
                return DateReader::day(word);
            }
            if self.re_month_year.is_match(word) {
                return DateReader::month(word, false);
            }
            return word
                .split('/')
                .filter(|p| !p.is_empty())
                .map(|p| self.read_numeric(p))
                .collect::<Vec<_>>()
                .join(" trên ");
        }
        // single-character currency marks attached to the amount
        if let Some(last) = word.chars().last() {
            if let Some(reading) = self.dict.currency.get(last.to_string().as_str()) {
                let amount: String = word.chars().take(word.chars().count() - 1).collect();
                return format!("{} {}", self.read_numeric(&amount), reading);
            }
        }
        if let Some(first) = word.chars().next() {
            if let Some(reading) = self.dict.currency.get(first.to_string().as_str()) {
                let amount: String = word.chars().skip(1).collect();
                return format!("{} {}", self.read_numeric(&amount), reading);
            }
        }
        // mixed digit/letter token: split at the boundaries
        let spaced = split_num_word(word);
        spaced
            .split_whitespace()
            .map(|piece| self.read_numeric_piece(piece))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn read_numeric_piece(&self, piece: &str) -> String {
        if piece.bytes().all(|b| b.is_ascii_digit()) {
            // leading zeros signal a code, read digit by digit
            if piece.len() > 1 && piece.starts_with('0') {
                return NumberReader::digit_sequence(piece);
            }
            return NumberReader::read_number(piece, true);
        }
        let lower = piece.to_lowercase();
        if self.dict.is_word(&lower) {
            return lower;
        }
        if let Some(unit) = self.dict.unit_reading(piece) {
            return unit.to_string();
        }
        if is_all_upper(piece) {
            return self.read_upper(piece, false);
        }
        self.read_lower(&lower)
    }

    fn read_hyphenated(&self, word: &str) -> String {
        if is_all_upper(word) {
            let key = word.replace('-', "#");
            if let Some(v) = self.dict.double_abbr.get(&key) {
                return v.clone();
            }
        }
        word.split('-')
            .filter(|p| !p.is_empty())
            .map(|p| self.read_fragment(p))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn read_plain_word(&self, lower: &str, idx: usize, tokens: &[String]) -> String {
        if lower == "x"
            && idx > 0
            && idx + 1 < tokens.len()
            && starts_with_digit(&tokens[idx - 1])
            && starts_with_digit(&tokens[idx + 1])
        {
            return "nhân".to_string();
        }
        if DOUBLE_CONSONANTS.contains(&lower) {
            return format!("{lower}ờ");
        }
        self.read_lower(lower)
    }

    /// Splits a camel-case run at its uppercase letters and reads each
    /// piece as a plain word.
    fn read_camel(&self, word: &str) -> String {
        let mut segments: Vec<String> = Vec::new();
        for c in word.chars() {
            if c.is_uppercase() || segments.is_empty() {
                segments.push(String::new());
            }
            if let Some(last) = segments.last_mut() {
                last.push(c);
            }
        }
        segments
            .iter()
            .map(|s| self.read_fragment(&s.to_lowercase()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Last resort: split at punctuation, read what is known, and
    /// collapse leftover punctuation to at most one pause.
    fn read_fallback(&self, word: &str) -> String {
        let mut spaced = split_punc_char(word).replace('-', " ");
        if self.has_domain_suffix(&word.to_lowercase()) {
            spaced = spaced.replace('.', " chấm ");
        }
        let parts: Vec<&str> = spaced.split_whitespace().collect();
        let all_known = parts.iter().all(|p| {
            self.dict.is_word(&p.to_lowercase()) || p.chars().all(is_punct_char)
        });
        let mut out: Vec<String> = Vec::new();
        for part in parts {
            let lower = part.to_lowercase();
            if self.dict.is_word(&lower) {
                out.push(lower);
            } else if part.chars().all(is_punct_char) {
                if all_known && out.last().map(String::as_str) != Some(",") {
                    out.push(",".to_string());
                }
            } else if is_all_upper(part) {
                out.push(self.read_upper(part, false));
            } else {
                out.push(self.read_lower(&lower));
            }
        }
        out.join(" ")
    }
}

fn active_at<'a>(slots: &'a [Slot], idx: usize) -> Option<&'a str> {
    match slots.get(idx) {
        Some(Slot::Active(w)) => Some(w.as_str()),
        _ => None,
    }
}

fn consume(slots: &mut [Slot], from: usize, count: usize) {
    for slot in slots.iter_mut().skip(from).take(count) {
        *slot = Slot::Consumed;
    }
}

/// Uppercase token whose dot-separated segments are all single
/// letters ("P.V", "A"). Digit segments ("Q.7") stay out so the
/// administrative-prefix branch can claim them.
fn is_short_name(word: &str) -> bool {
    is_all_upper(word)
        && word.split('.').filter(|s| !s.is_empty()).all(|s| {
            let mut chars = s.chars();
            matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
        })
}

fn is_all_upper(word: &str) -> bool {
    let mut has_alpha = false;
    for c in word.chars() {
        if c.is_alphabetic() {
            has_alpha = true;
            if !c.is_uppercase() {
                return false;
            }
        }
    }
    has_alpha
}

fn is_lower(word: &str) -> bool {
    word.chars().any(char::is_lowercase) && !word.chars().any(char::is_uppercase)
}

fn is_title(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => {
            let rest = chars.as_str();
            is_lower(rest)
        }
        _ => false,
    }
}

fn starts_with_digit(token: &str) -> bool {
    token.chars().next().is_some_and(|c| c.is_ascii_digit())
}

fn is_number(word: &str) -> bool {
    !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == ',')
        && word.chars().any(|c| c.is_ascii_digit())
}

fn spell_letters(word: &str) -> String {
    word.chars()
        .filter_map(letter_name)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercase Vietnamese letters outside ASCII.
const VIETNAMESE_LETTERS: &str =
    "àáảãạăằắẳẵặâầấẩẫậđèéẻẽẹêềếểễệìíỉĩịòóỏõọôồốổỗộơờớởỡợùúủũụưừứửữựỳýỷỹỵ";

/// Letters only, at least one of them a Vietnamese letter.
fn is_vietnamese_word(word: &str) -> bool {
    let mut has_vietnamese = false;
    for c in word.chars().flat_map(char::to_lowercase) {
        if VIETNAMESE_LETTERS.contains(c) {
            has_vietnamese = true;
        } else if !c.is_ascii_alphabetic() {
            return false;
        }
    }
    has_vietnamese
}

/// NFD fold to ASCII, with đ mapped by hand since U+0111 carries no
/// decomposition.
fn ascii_fold(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'đ' => 'd',
            'Đ' => 'D',
            _ => c,
        })
        .collect::<String>()
        .nfd()
        .filter(char::is_ascii)
        .collect()
}

/// Inserts spaces at digit/non-digit boundaries ("5km" -> "5 km").
fn split_num_word(word: &str) -> String {
    let mut out = String::with_capacity(word.len() + 4);
    let mut prev: Option<char> = None;
    for c in word.chars() {
        if let Some(p) = prev {
            if p.is_ascii_digit() != c.is_ascii_digit() {
                out.push(' ');
            }
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

/// Pads every punctuation character with spaces.
fn split_punc_char(word: &str) -> String {
    let mut out = String::with_capacity(word.len() + 4);
    for c in word.chars() {
        if is_punct_char(c) {
            out.push(' ');
            out.push(c);
            out.push(' ');
        } else {
            out.push(c);
        }
    }
    out
}

/// Joins spoken pieces, attaching `.` and `,` to the previous word
/// and collapsing runs of pauses.
fn join_spoken(pieces: &[String]) -> String {
    let mut words: Vec<String> = Vec::new();
    for piece in pieces {
        for w in piece.split_whitespace() {
            match w {
                "." | "," => {
                    if let Some(last) = words.last_mut() {
                        if last.ends_with(',') || last.ends_with('.') {
                            if w == "." {
                                last.pop();
                                last.push('.');
                            }
                        } else {
                            last.push_str(w);
                        }
                    }
                }
                _ => words.push(w.to_string()),
            }
        }
    }
    words.join(" ")
}

fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(re) => re,
        Err(e) => unreachable!("invalid built-in pattern {pattern}: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DictionarySet;

    fn classifier() -> WordClassifier {
        WordClassifier::new(DictionarySet::embedded().unwrap())
    }

    fn read(tokens: &[&str]) -> String {
        classifier().read_sentence(
            &tokens.iter().map(|t| t.to_string()).collect::<Vec<_>>(),
        )
    }

    #[test]
    fn vocabulary_words_lowercase() {
        assert_eq!(read(&["Tôi", "có", "con", "mèo"]), "tôi có con mèo");
    }

    #[test]
    fn sentence_final_punctuation() {
        assert_eq!(read(&["xin", "chào", "."]), "xin chào.");
        assert_eq!(read(&["một", ",", "hai", "."]), "một, hai.");
        // leading punctuation renders nothing
        assert_eq!(read(&["(", "hai", ")", "."]), "hai.");
    }

    #[test]
    fn interior_pause_punctuation() {
        assert_eq!(read(&["một", ";", "hai"]), "một, hai");
        assert_eq!(read(&["một", ":", "hai"]), "một, hai");
    }

    #[test]
    fn readable_symbols() {
        assert_eq!(read(&["20", "%"]), "hai mươi phần trăm");
        assert_eq!(read(&["a", "&", "b"]), "a và b");
    }

    #[test]
    fn plain_numbers() {
        assert_eq!(read(&["5"]), "năm");
        assert_eq!(read(&["22.500"]), "hai mươi hai nghìn năm trăm");
        assert_eq!(read(&["-5"]), "trừ năm");
    }

    #[test]
    fn bare_day_month_shapes() {
        assert_eq!(read(&["5/3"]), "năm tháng ba");
        assert_eq!(read(&["10/2025"]), "mười năm hai nghìn không trăm hai mươi lăm");
        assert_eq!(read(&["3/7/2"]), "ba trên bảy trên hai");
    }

    #[test]
    fn leading_zero_codes() {
        assert_eq!(read(&["0123"]), "không một hai ba");
    }

    #[test]
    fn single_abbreviations() {
        assert_eq!(read(&["UBND"]), "ủy ban nhân dân");
        assert_eq!(
            read(&["TP.HCM", "là", "thành", "phố", "lớn", "."]),
            "Thành phố Hồ Chí Minh là thành phố lớn."
        );
    }

    #[test]
    fn spelled_acronyms() {
        assert_eq!(read(&["VTV"]), "vê tê vê");
        assert_eq!(read(&["P.V"]), "pê vê");
    }

    #[test]
    fn abbreviation_exceptions_read_as_words() {
        assert_eq!(read(&["OBAMA"]), "obama");
    }

    #[test]
    fn hyphenated_double_abbreviation() {
        assert_eq!(read(&["bộ", "GD-ĐT"]), "bộ giáo dục và đào tạo");
    }

    #[test]
    fn spaced_double_abbreviation_consumes_partners() {
        assert_eq!(
            read(&["sở", "GD", "&", "ĐT", "Hà", "Nội"]),
            "sở giáo dục và đào tạo hà nội"
        );
        assert_eq!(
            read(&["bộ", "VH", ",", "TT", "và", "DL"]),
            "bộ văn hóa thể thao và du lịch"
        );
    }

    #[test]
    fn roman_numeral_tokens() {
        assert_eq!(read(&["XIV"]), "mười bốn");
    }

    #[test]
    fn location_prefix_with_numeral() {
        assert_eq!(read(&["Q.7"]), "quận bảy");
        // no numeral: falls through to the abbreviation machinery
        assert_eq!(
            read(&["TP.HCM"]),
            "Thành phố Hồ Chí Minh"
        );
    }

    #[test]
    fn multiplication_sign() {
        assert_eq!(read(&["3", "x", "4"]), "ba nhân bốn");
    }

    #[test]
    fn double_consonant_clusters() {
        assert_eq!(read(&["ch"]), "chờ");
        assert_eq!(read(&["tr"]), "trờ");
    }

    #[test]
    fn bank_suffix() {
        assert_eq!(read(&["vpbank"]), "vp banh");
        assert_eq!(read(&["vietcombank"]), "viết côm banh");
    }

    #[test]
    fn unknown_native_words_keep_diacritics() {
        assert_eq!(
            read(&["Bé", "đã", "sáu", "tháng", "tuổi"]),
            "bé đã sáu tháng tuổi"
        );
        // non-Vietnamese diacritics still fold
        assert_eq!(read(&["Zürich"]), "zurich");
    }

    #[test]
    fn loan_words_and_mixed() {
        assert_eq!(read(&["internet"]), "in tơ nét");
        assert_eq!(read(&["wifi"]), "oai phai");
        assert_eq!(read(&["3g"]), "ba gờ");
    }

    #[test]
    fn domains_read_with_cham() {
        assert_eq!(read(&["google.com"]), "gu gồ chấm com");
        assert_eq!(read(&["vnexpress.vn"]), "vnexpress chấm vi en");
    }

    #[test]
    fn camel_case_splits() {
        assert_eq!(read(&["VinFast"]), "vin fast");
        assert_eq!(read(&["HàNội"]), "hà nội");
    }

    #[test]
    fn unknown_words_fold_diacritics() {
        assert_eq!(read(&["xyz"]), "xyz");
    }

    #[test]
    fn trailing_period_stays_attached() {
        assert_eq!(read(&["mèo."]), "mèo.");
        assert_eq!(read(&["lớn."]), "lớn.");
    }
}
