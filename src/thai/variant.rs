//! Mapping of Thai characters to their repositioned Private Use Area glyph variants.
//!
//! Each mapping returns its argument unchanged when the character has no such variant.

use std::fmt;

use super::*;

/// A repositioning applied to a character.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Variant {
    ShiftLeft,
    PullDown,
    PullDownAndShiftLeft,
    CutTail,
}

impl Variant {
    pub fn apply(self, ch: char) -> char {
        match self {
            Variant::ShiftLeft => shift_left(ch),
            Variant::PullDown => pull_down(ch),
            Variant::PullDownAndShiftLeft => pull_down_and_shift_left(ch),
            Variant::CutTail => cut_tail(ch),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::ShiftLeft => write!(f, "shift left"),
            Variant::PullDown => write!(f, "pull down"),
            Variant::PullDownAndShiftLeft => write!(f, "pull down and shift left"),
            Variant::CutTail => write!(f, "cut tail"),
        }
    }
}

#[rustfmt::skip]
pub fn shift_left(ch: char) -> char {
    match ch {
        MAI_EK => MAI_EK_LEFT_SHIFT,
        MAI_THO => MAI_THO_LEFT_SHIFT,
        MAI_TRI => MAI_TRI_LEFT_SHIFT,
        MAI_CHATTAWA => MAI_CHATTAWA_LEFT_SHIFT,
        MAI_HAN_AKAT => MAI_HAN_AKAT_LEFT_SHIFT,
        SARA_I => SARA_I_LEFT_SHIFT,
        SARA_II => SARA_II_LEFT_SHIFT,
        SARA_UE => SARA_UE_LEFT_SHIFT,
        SARA_UEE => SARA_UEE_LEFT_SHIFT,
        MAI_TAI_KHU => MAI_TAI_KHU_LEFT_SHIFT,
        NIKHAHIT => NIKHAHIT_LEFT_SHIFT,
        SARA_AM => SARA_AM_LEFT_SHIFT,
        _ => ch,
    }
}

#[rustfmt::skip]
pub fn pull_down(ch: char) -> char {
    match ch {
        MAI_EK => MAI_EK_DOWN,
        MAI_THO => MAI_THO_DOWN,
        MAI_TRI => MAI_TRI_DOWN,
        MAI_CHATTAWA => MAI_CHATTAWA_DOWN,
        THANTHAKHAT => THANTHAKHAT_DOWN,
        SARA_U => SARA_U_DOWN,
        SARA_UU => SARA_UU_DOWN,
        PHINTHU => PHINTHU_DOWN,
        _ => ch,
    }
}

/// Tone marks lowered into the space left by an absent upper level 1 mark and moved clear of
/// an ascender.
///
/// MAI HAN AKAT has no combined form and maps to its left shifted glyph.
#[rustfmt::skip]
pub fn pull_down_and_shift_left(ch: char) -> char {
    match ch {
        MAI_EK => MAI_EK_PULL_DOWN_AND_LEFT_SHIFT,
        MAI_THO => MAI_THO_PULL_DOWN_AND_LEFT_SHIFT,
        MAI_TRI => MAI_TRI_PULL_DOWN_AND_LEFT_SHIFT,
        MAI_CHATTAWA => MAI_CHATTAWA_PULL_DOWN_AND_LEFT_SHIFT,
        MAI_HAN_AKAT => MAI_HAN_AKAT_LEFT_SHIFT,
        THANTHAKHAT => THANTHAKHAT_PULL_DOWN_AND_LEFT_SHIFT,
        _ => ch,
    }
}

pub fn cut_tail(ch: char) -> char {
    match ch {
        THO_THAN => THO_THAN_CUT_TAIL,
        YO_YING => YO_YING_CUT_TAIL,
        _ => ch,
    }
}
