//! Driving the Thai mark repositioning over a stream of text.
//!
//! `ThaiPreprocessor` pulls characters from a `PushbackSource`, passes anything outside the
//! Thai block straight through, and looks one character ahead for tone marks and down-tail
//! consonants. Create one preprocessor per run of text, or `reset` it between runs.
//!
//! ```
//! use thai_marks::preprocess::preprocess_str;
//! use thai_marks::thai::HistoryMode;
//!
//! // PO PLA, SARA I: the vowel moves clear of the consonant's ascender
//! let fixed = preprocess_str("\u{0E1B}\u{0E34}", HistoryMode::RawInput);
//! assert_eq!(fixed, "\u{0E1B}\u{F701}");
//! ```

use encoding_rs::Encoding;
use log::{debug, trace};

use crate::error::DecodeError;
use crate::source::{CodepointSource, EncodedSource, PushbackSource, Utf16Source, Utf8Source};
use crate::thai::{is_down_tail, is_thai_letter, is_upper_level_2, History, HistoryMode};

#[derive(Clone, Debug, Default)]
pub struct ThaiPreprocessor {
    history: History,
    mode: HistoryMode,
}

impl ThaiPreprocessor {
    pub fn new(mode: HistoryMode) -> Self {
        ThaiPreprocessor {
            history: History::new(),
            mode,
        }
    }

    pub fn mode(&self) -> HistoryMode {
        self.mode
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Discard history so the preprocessor can be used for an unrelated run of text.
    pub fn reset(&mut self) {
        self.history.clear();
    }

    /// Read the next character from `source` and return the character to render in its place.
    ///
    /// Returns `Ok(None)` at the end of input. Exactly one character is consumed from `source`
    /// per call; any lookahead is pushed back.
    pub fn next_codepoint<S: CodepointSource>(
        &mut self,
        source: &mut PushbackSource<S>,
    ) -> Result<Option<char>, DecodeError> {
        let ch = match source.next_char()? {
            Some(ch) => ch,
            None => return Ok(None),
        };
        let result = self.fix(ch, || match source.peek() {
            Ok(next) => next,
            Err(err) => {
                // Left in the source to be reported by the next read
                debug!("no lookahead for U+{:04X}: {}", ch as u32, err);
                None
            }
        });
        Ok(Some(result))
    }

    /// `next_codepoint` for UTF-8 encoded text.
    pub fn fix_thai_vowel_8(
        &mut self,
        source: &mut PushbackSource<Utf8Source>,
    ) -> Result<Option<char>, DecodeError> {
        self.next_codepoint(source)
    }

    /// `next_codepoint` for UTF-16 encoded text.
    pub fn fix_thai_vowel_16(
        &mut self,
        source: &mut PushbackSource<Utf16Source>,
    ) -> Result<Option<char>, DecodeError> {
        self.next_codepoint(source)
    }

    /// Repositions marks in `chars` in place, treating the slice as one complete run of text.
    ///
    /// History is discarded on entry, since the character after the end of the slice is never
    /// available as lookahead. Split text must be streamed through `next_codepoint` or `iter`
    /// instead.
    pub fn fix_chars(&mut self, chars: &mut [char]) {
        self.reset();
        for i in 0..chars.len() {
            let result = self.fix(chars[i], || chars.get(i + 1).copied());
            chars[i] = result;
        }
    }

    /// An iterator over the preprocessed characters of `source`.
    ///
    /// The iterator ends after yielding the first decoding error.
    pub fn iter<S: CodepointSource>(&mut self, source: S) -> Preprocess<'_, S> {
        Preprocess {
            preprocessor: self,
            source: PushbackSource::new(source),
            failed: false,
        }
    }

    fn fix<F>(&mut self, ch: char, lookahead: F) -> char
    where
        F: FnOnce() -> Option<char>,
    {
        // Nothing outside the Thai block takes part, not even as history
        if !is_thai_letter(ch) {
            return ch;
        }

        let lookahead = if is_down_tail(ch) || is_upper_level_2(ch) {
            lookahead()
        } else {
            None
        };
        let decision = self.history.step(ch, lookahead, self.mode);
        if let Some(variant) = decision.variant {
            trace!(
                "{}: U+{:04X} -> U+{:04X}",
                variant,
                ch as u32,
                decision.result as u32
            );
        }
        decision.result
    }
}

/// Iterator returned by `ThaiPreprocessor::iter`.
pub struct Preprocess<'p, S: CodepointSource> {
    preprocessor: &'p mut ThaiPreprocessor,
    source: PushbackSource<S>,
    failed: bool,
}

impl<S: CodepointSource> Iterator for Preprocess<'_, S> {
    type Item = Result<char, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.preprocessor.next_codepoint(&mut self.source) {
            Ok(ch) => ch.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

/// Preprocess every character from `source` as one run of text.
pub fn preprocess_source<S: CodepointSource>(
    source: S,
    mode: HistoryMode,
) -> Result<Vec<char>, DecodeError> {
    ThaiPreprocessor::new(mode).iter(source).collect()
}

pub fn preprocess_chars(chars: &mut [char], mode: HistoryMode) {
    ThaiPreprocessor::new(mode).fix_chars(chars)
}

pub fn preprocess_str(text: &str, mode: HistoryMode) -> String {
    let mut chars = text.chars().collect::<Vec<_>>();
    preprocess_chars(&mut chars, mode);
    chars.into_iter().collect()
}

pub fn preprocess_utf8(data: &[u8], mode: HistoryMode) -> Result<Vec<char>, DecodeError> {
    preprocess_source(Utf8Source::new(data), mode)
}

pub fn preprocess_utf16le(data: &[u8], mode: HistoryMode) -> Result<Vec<char>, DecodeError> {
    preprocess_source(Utf16Source::le(data), mode)
}

pub fn preprocess_utf16be(data: &[u8], mode: HistoryMode) -> Result<Vec<char>, DecodeError> {
    preprocess_source(Utf16Source::be(data), mode)
}

/// Preprocess text in a legacy encoding such as `encoding_rs::WINDOWS_874`.
pub fn preprocess_encoded(
    data: &[u8],
    encoding: &'static Encoding,
    mode: HistoryMode,
) -> Result<Vec<char>, DecodeError> {
    preprocess_source(EncodedSource::new(data, encoding), mode)
}
