//! The decision procedure choosing a glyph variant for each Thai character.
//!
//! Decisions look back at the two preceding Thai characters and, for tone marks and down-tail
//! consonants, ahead at the following character. Callers own the `History` for a run of text
//! and must start each unrelated run with a fresh one.

use std::fmt;
use std::str::FromStr;

use super::*;
use crate::error::ParseError;

/// Selects what "previous character" means for the checks that look for an earlier
/// repositioned glyph.
///
/// Those checks (a left shifted upper level 1 mark under a tone mark, and a cut tail consonant
/// above a lower level mark) can only ever succeed against emitted output, because raw input
/// never contains Private Use Area variants. Both behaviours exist in deployed renderers and
/// produce different glyphs for text such as THO THAN followed by SARA U.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum HistoryMode {
    /// Compare against the previous input characters.
    #[default]
    RawInput,
    /// Compare against the previously emitted characters.
    EmittedResult,
}

impl FromStr for HistoryMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raw-input" => Ok(HistoryMode::RawInput),
            "emitted-result" => Ok(HistoryMode::EmittedResult),
            _ => Err(ParseError::BadValue),
        }
    }
}

impl fmt::Display for HistoryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryMode::RawInput => f.write_str("raw-input"),
            HistoryMode::EmittedResult => f.write_str("emitted-result"),
        }
    }
}

/// The two most recent Thai characters seen in a run, both as read and as emitted.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct History {
    prev1: Option<char>,
    prev2: Option<char>,
    emitted1: Option<char>,
    emitted2: Option<char>,
}

/// The outcome of `decide`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Decision {
    /// The character to emit.
    pub result: char,
    /// The repositioning that produced `result`, `None` when the input is emitted as is.
    pub variant: Option<Variant>,
}

impl Decision {
    fn unchanged(ch: char) -> Self {
        Decision {
            result: ch,
            variant: None,
        }
    }

    /// Applies `variant` to `ch`, recording it only when it changed something.
    fn apply(ch: char, variant: Variant) -> Self {
        let result = variant.apply(ch);
        Decision {
            result,
            variant: (result != ch).then_some(variant),
        }
    }
}

impl History {
    pub fn new() -> Self {
        History::default()
    }

    /// The previous input character.
    pub fn prev(&self) -> Option<char> {
        self.prev1
    }

    /// The previously emitted character.
    pub fn prev_emitted(&self) -> Option<char> {
        self.emitted1
    }

    pub fn is_empty(&self) -> bool {
        self.prev1.is_none()
    }

    /// Forget everything, ready for a new run of text.
    pub fn clear(&mut self) {
        *self = History::default();
    }

    /// Record that `ch` was read and `result` emitted in its place.
    pub fn advance(&mut self, ch: char, result: char) {
        self.prev2 = self.prev1;
        self.prev1 = Some(ch);
        self.emitted2 = self.emitted1;
        self.emitted1 = Some(result);
    }

    /// Decide what to emit for `ch` and record it.
    pub fn step(&mut self, ch: char, lookahead: Option<char>, mode: HistoryMode) -> Decision {
        let decision = decide(ch, lookahead, self, mode);
        self.advance(ch, decision.result);
        decision
    }
}

fn is(ch: Option<char>, pred: fn(char) -> bool) -> bool {
    ch.is_some_and(pred)
}

/// Choose the glyph variant for `ch`.
///
/// `lookahead` is the character following `ch`. It is only consulted when `ch` is a tone mark
/// or a down-tail consonant, so callers need only fetch it in those cases. `ch` is expected to
/// be in the Thai block (see `is_thai_letter`); anything else is returned unchanged.
pub fn decide(
    ch: char,
    lookahead: Option<char>,
    history: &History,
    mode: HistoryMode,
) -> Decision {
    if is_upper_level_1(ch) {
        // Look through a tone mark to the character beneath it
        let base = if is(history.prev1, is_upper_level_2) {
            history.prev2
        } else {
            history.prev1
        };
        if is(base, is_up_tail) {
            Decision::apply(ch, Variant::ShiftLeft)
        } else {
            Decision::unchanged(ch)
        }
    } else if is_upper_level_2(ch) {
        // Look through a lower level mark to the character it's attached to
        let (base, emitted_base) = if is(history.prev1, is_lower_level) {
            (history.prev2, history.emitted2)
        } else {
            (history.prev1, history.emitted1)
        };
        let shifted_base = match mode {
            HistoryMode::RawInput => base,
            HistoryMode::EmittedResult => emitted_base,
        };

        if lookahead == Some(SARA_AM) {
            if is(base, is_up_tail) {
                Decision::apply(ch, Variant::ShiftLeft)
            } else {
                Decision::unchanged(ch)
            }
        } else if is(base, is_up_tail) {
            Decision::apply(ch, Variant::PullDownAndShiftLeft)
        } else if is(shifted_base, is_left_shifted_upper_level_1) {
            Decision::apply(ch, Variant::ShiftLeft)
        } else if !is(base, is_upper_level_1) {
            Decision::apply(ch, Variant::PullDown)
        } else {
            Decision::unchanged(ch)
        }
    } else if is_down_tail(ch) {
        if is(lookahead, is_lower_level) {
            Decision::apply(ch, Variant::CutTail)
        } else {
            Decision::unchanged(ch)
        }
    } else if is_lower_level(ch) {
        let guard = match mode {
            HistoryMode::RawInput => history.prev1,
            HistoryMode::EmittedResult => history.emitted1,
        };
        if is(guard, is_cut_tail) {
            Decision::unchanged(ch)
        } else {
            Decision::apply(ch, Variant::PullDown)
        }
    } else {
        Decision::unchanged(ch)
    }
}
