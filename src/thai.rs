//! Thai dependent-mark repositioning.
//!
//! Fonts built for the legacy Thai rendering model carry extra glyphs in the Private Use Area
//! (U+F700..=U+F71F) for marks that would otherwise collide with a tall consonant, a consonant
//! descender, or another stacked mark. The functions here pick those glyphs from the
//! surrounding text.

pub mod classify;
pub mod rules;
pub mod variant;

pub use classify::*;
pub use rules::{decide, Decision, History, HistoryMode};
pub use variant::{cut_tail, pull_down, pull_down_and_shift_left, shift_left, Variant};

// Consonants
pub const KO_KAI: char = '\u{0E01}';
pub const YO_YING: char = '\u{0E0D}';
pub const DO_CHADA: char = '\u{0E0E}';
pub const TO_PATAK: char = '\u{0E0F}';
pub const THO_THAN: char = '\u{0E10}';
pub const PO_PLA: char = '\u{0E1B}';
pub const FO_FA: char = '\u{0E1D}';
pub const FO_FAN: char = '\u{0E1F}';
pub const RU: char = '\u{0E24}';
pub const LU: char = '\u{0E26}';
pub const LO_CHULA: char = '\u{0E2C}';

// Upper level 1
pub const MAI_HAN_AKAT: char = '\u{0E31}';
pub const SARA_AM: char = '\u{0E33}';
pub const SARA_I: char = '\u{0E34}';
pub const SARA_II: char = '\u{0E35}';
pub const SARA_UE: char = '\u{0E36}';
pub const SARA_UEE: char = '\u{0E37}';
pub const MAI_TAI_KHU: char = '\u{0E47}';
pub const NIKHAHIT: char = '\u{0E4D}';

// Lower level
pub const SARA_U: char = '\u{0E38}';
pub const SARA_UU: char = '\u{0E39}';
pub const PHINTHU: char = '\u{0E3A}';

// Upper level 2
pub const MAI_EK: char = '\u{0E48}';
pub const MAI_THO: char = '\u{0E49}';
pub const MAI_TRI: char = '\u{0E4A}';
pub const MAI_CHATTAWA: char = '\u{0E4B}';
pub const THANTHAKHAT: char = '\u{0E4C}';

/// First codepoint the preprocessor inspects.
pub const FIRST_GUARDED_CHAR: char = KO_KAI;
/// Last codepoint the preprocessor inspects.
///
/// U+0EB5 is LAO VOWEL SIGN II, not a Thai character (THAI CHARACTER KHOMUT is U+0E5B). The
/// range runs past the Thai block into Lao; no Lao character has a variant, but they are
/// remembered as history like any Thai character.
pub const LAST_GUARDED_CHAR: char = '\u{0EB5}';

// Private Use Area variants
pub const THO_THAN_CUT_TAIL: char = '\u{F700}';
pub const SARA_I_LEFT_SHIFT: char = '\u{F701}';
pub const SARA_II_LEFT_SHIFT: char = '\u{F702}';
pub const SARA_UE_LEFT_SHIFT: char = '\u{F703}';
pub const SARA_UEE_LEFT_SHIFT: char = '\u{F704}';
pub const MAI_EK_PULL_DOWN_AND_LEFT_SHIFT: char = '\u{F705}';
pub const MAI_THO_PULL_DOWN_AND_LEFT_SHIFT: char = '\u{F706}';
pub const MAI_TRI_PULL_DOWN_AND_LEFT_SHIFT: char = '\u{F707}';
pub const MAI_CHATTAWA_PULL_DOWN_AND_LEFT_SHIFT: char = '\u{F708}';
pub const THANTHAKHAT_PULL_DOWN_AND_LEFT_SHIFT: char = '\u{F709}';
pub const MAI_EK_DOWN: char = '\u{F70A}';
pub const MAI_THO_DOWN: char = '\u{F70B}';
pub const MAI_TRI_DOWN: char = '\u{F70C}';
pub const MAI_CHATTAWA_DOWN: char = '\u{F70D}';
pub const THANTHAKHAT_DOWN: char = '\u{F70E}';
pub const YO_YING_CUT_TAIL: char = '\u{F70F}';
pub const MAI_HAN_AKAT_LEFT_SHIFT: char = '\u{F710}';
pub const NIKHAHIT_LEFT_SHIFT: char = '\u{F711}';
pub const MAI_TAI_KHU_LEFT_SHIFT: char = '\u{F712}';
pub const MAI_EK_LEFT_SHIFT: char = '\u{F713}';
pub const MAI_THO_LEFT_SHIFT: char = '\u{F714}';
pub const MAI_TRI_LEFT_SHIFT: char = '\u{F715}';
pub const MAI_CHATTAWA_LEFT_SHIFT: char = '\u{F716}';
pub const THANTHAKHAT_LEFT_SHIFT: char = '\u{F717}';
pub const SARA_U_DOWN: char = '\u{F718}';
pub const SARA_UU_DOWN: char = '\u{F719}';
pub const PHINTHU_DOWN: char = '\u{F71A}';
pub const SARA_AM_LEFT_SHIFT: char = '\u{F71F}';

/// Returns `true` if `ch` lies in the range the preprocessor inspects, U+0E01..=U+0EB5.
///
/// Everything else, including the Private Use Area variants produced by the preprocessor, is
/// passed through untouched.
pub fn is_thai_letter(ch: char) -> bool {
    (FIRST_GUARDED_CHAR..=LAST_GUARDED_CHAR).contains(&ch)
}

/// Returns `true` if `ch` is one of the Private Use Area glyph variants.
pub fn is_pua_variant(ch: char) -> bool {
    ('\u{F700}'..='\u{F71F}').contains(&ch)
}
