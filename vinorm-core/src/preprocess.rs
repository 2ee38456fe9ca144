//! Input canonicalization
//!
//! Runs once per line before the rewrite cascade: Unicode NFC, dash
//! and quote variants folded, zero-width characters stripped,
//! structural punctuation padded with spaces, whitespace collapsed.
//! Total and idempotent.

use unicode_normalization::UnicodeNormalization;

/// Line-level canonicalizer.
pub struct Preprocessor;

impl Preprocessor {
    /// Canonicalizes one line of raw input.
    pub fn run(line: &str) -> String {
        let composed: String = line.nfc().collect();
        let mut out = String::with_capacity(composed.len() + 16);
        for ch in composed.chars() {
            match ch {
                '–' | '—' | '―' => out.push('-'),
                '‘' | '’' | '´' | '`' | '\'' => out.push(' '),
                '“' | '”' | '"' => out.push(' '),
                '\u{200b}' | '\u{200c}' | '\u{feff}' => {}
                '\u{a0}' => out.push(' '),
                // always split off structure and terminal characters;
                // the built-in whitespace segmenter never detaches
                // them. ':' stays attached to its word.
                '(' | ')' | '*' | '=' | '%' | '+' | '!' | '?' | ';' | '…' => {
                    out.push(' ');
                    out.push(ch);
                    out.push(' ');
                }
                _ => out.push(ch),
            }
        }
        // '.' and ',' split off only when already next to a space, so
        // "TP.HCM", "22.500" and "4,680,000" stay intact. Detaching
        // one can expose the next (",." after a word), so the padding
        // runs to a fixed point; every changing pass fully detaches
        // at least one more dot or comma, so it terminates.
        let mut out = collapse_whitespace(&out);
        loop {
            let next = collapse_whitespace(
                &out.replace(". ", " . ")
                    .replace(" .", " . ")
                    .replace(", ", " , ")
                    .replace(" ,", " , "),
            );
            if next == out {
                return next;
            }
            out = next;
        }
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
