//! Classification of Thai characters by how their glyphs stack.
//!
//! The sets are disjoint. Anything not in a set is a plain character as far as mark
//! repositioning is concerned.

use super::*;

/// Consonants with an ascender that collides with marks above.
pub fn is_up_tail(ch: char) -> bool {
    matches!(ch, PO_PLA | FO_FA | FO_FAN | LO_CHULA)
}

/// Consonants with a descender that collides with marks below.
pub fn is_down_tail(ch: char) -> bool {
    matches!(ch, THO_THAN | YO_YING | DO_CHADA | TO_PATAK | RU | LU)
}

/// Vowel signs and marks that sit directly above the base.
pub fn is_upper_level_1(ch: char) -> bool {
    matches!(
        ch,
        MAI_HAN_AKAT
            | SARA_I
            | SARA_II
            | SARA_UE
            | SARA_UEE
            | MAI_TAI_KHU
            | NIKHAHIT
            | SARA_AM
    )
}

/// Left shifted forms of the upper level 1 marks.
///
/// These only ever appear as output of the preprocessor.
pub fn is_left_shifted_upper_level_1(ch: char) -> bool {
    matches!(
        ch,
        MAI_HAN_AKAT_LEFT_SHIFT
            | SARA_I_LEFT_SHIFT
            | SARA_II_LEFT_SHIFT
            | SARA_UE_LEFT_SHIFT
            | SARA_UEE_LEFT_SHIFT
            | MAI_TAI_KHU_LEFT_SHIFT
            | NIKHAHIT_LEFT_SHIFT
            | SARA_AM_LEFT_SHIFT
    )
}

/// Tone marks, which stack above any upper level 1 mark.
pub fn is_upper_level_2(ch: char) -> bool {
    matches!(ch, MAI_EK | MAI_THO | MAI_TRI | MAI_CHATTAWA | THANTHAKHAT)
}

pub fn is_lower_level(ch: char) -> bool {
    matches!(ch, SARA_U | SARA_UU | PHINTHU)
}

/// Consonants with their descender removed.
///
/// These only ever appear as output of the preprocessor.
pub fn is_cut_tail(ch: char) -> bool {
    matches!(ch, THO_THAN_CUT_TAIL | YO_YING_CUT_TAIL)
}
