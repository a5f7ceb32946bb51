mod common;

use proptest::prelude::*;

use thai_marks::preprocess::ThaiPreprocessor;
use thai_marks::source::{PushbackSource, Utf16Source, Utf8Source};
use thai_marks::thai::{is_pua_variant, is_thai_letter};
use thai_marks::{
    preprocess_chars, preprocess_str, preprocess_utf16be, preprocess_utf16le, preprocess_utf8,
    DecodeError, HistoryMode,
};

const MODES: [HistoryMode; 2] = [HistoryMode::RawInput, HistoryMode::EmittedResult];

fn test(input: &[char], mode: HistoryMode, expected: &[char]) {
    let text = input.iter().collect::<String>();
    let actual = preprocess_utf8(text.as_bytes(), mode).unwrap();
    assert_eq!(expected, actual.as_slice());

    let actual = preprocess_utf16le(&common::utf16le(&text), mode).unwrap();
    assert_eq!(expected, actual.as_slice());
}

fn preprocess(input: &[char], mode: HistoryMode) -> Vec<char> {
    let mut chars = input.to_vec();
    preprocess_chars(&mut chars, mode);
    chars
}

fn thai_text() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(
        prop_oneof![
            4 => proptest::char::range('\u{0E00}', '\u{0EB6}'),
            1 => proptest::char::range('\u{F700}', '\u{F71F}'),
            1 => any::<char>(),
        ],
        0..48,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    mod scenarios {
        use super::*;

        #[test]
        fn test_upper_level_1_after_up_tail() {
            for mode in MODES {
                test(&['\u{0E1B}', '\u{0E34}'], mode, &['\u{0E1B}', '\u{F701}']);
            }
        }

        #[test]
        fn test_upper_level_2_after_up_tail() {
            for mode in MODES {
                test(
                    &['\u{0E1B}', '\u{0E48}', '\u{0E38}'],
                    mode,
                    &['\u{0E1B}', '\u{F705}', '\u{F718}'],
                );
            }
        }

        #[test]
        fn test_down_tail_raw_input() {
            test(
                &['\u{0E10}', '\u{0E38}'],
                HistoryMode::RawInput,
                &['\u{F700}', '\u{F718}'],
            );
        }

        #[test]
        fn test_down_tail_emitted_result() {
            test(
                &['\u{0E10}', '\u{0E38}'],
                HistoryMode::EmittedResult,
                &['\u{F700}', '\u{0E38}'],
            );
        }

        #[test]
        fn test_plain_consonant() {
            for mode in MODES {
                test(&['\u{0E01}'], mode, &['\u{0E01}']);
            }
        }

        #[test]
        fn test_guard_boundaries() {
            // U+0E01 and U+0EB5 are classified but have no variants
            for ch in ['\u{0E00}', '\u{0E01}', '\u{0EB5}', '\u{0EB6}'] {
                test(&[ch], HistoryMode::RawInput, &[ch]);
            }
            // Just outside the block, the character is not remembered as history
            test(
                &['\u{0E1B}', '\u{0EB6}', '\u{0E34}'],
                HistoryMode::RawInput,
                &['\u{0E1B}', '\u{0EB6}', '\u{F701}'],
            );
            // Inside the block, it is
            test(
                &['\u{0E1B}', '\u{0EB5}', '\u{0E34}'],
                HistoryMode::RawInput,
                &['\u{0E1B}', '\u{0EB5}', '\u{0E34}'],
            );
        }

        #[test]
        fn test_second_pass_sees_different_history() {
            // The left shifted SARA I is skipped on a second pass, so the tone mark now sits
            // directly on PO PLA. Substituted characters themselves are never touched again.
            let input = ['\u{0E1B}', '\u{0E34}', '\u{0E48}'];
            let first = preprocess(&input, HistoryMode::RawInput);
            assert_eq!(first, vec!['\u{0E1B}', '\u{F701}', '\u{0E48}']);
            let second = preprocess(&first, HistoryMode::RawInput);
            assert_eq!(second, vec!['\u{0E1B}', '\u{F701}', '\u{F705}']);
        }
    }

    mod fixture {
        use super::*;

        #[test]
        fn test_sample_raw_input() {
            let text = common::read_fixture("tests/text/sample.txt");
            let expected = [
                '\u{0E1B}', '\u{F702}', '\u{0E48}', '\u{0E19}', '\u{F70B}', '\u{0E2D}', '\u{0E07}',
                '\u{0020}', '\u{0E1F}', '\u{F706}', '\u{0E32}', '\u{0E1D}', '\u{0E19}', '\u{000A}',
                '\u{F700}', '\u{F718}', '\u{0020}', '\u{F70F}', '\u{F719}', '\u{0020}', '\u{0E1B}',
                '\u{F713}', '\u{F71F}', '\u{0020}', '\u{0E1D}', '\u{F710}', '\u{0E48}', '\u{0E07}',
                '\u{000A}',
            ];
            let actual = preprocess_str(&text, HistoryMode::RawInput);
            assert_eq!(actual.chars().collect::<Vec<_>>(), expected);
        }

        #[test]
        fn test_sample_emitted_result() {
            let text = common::read_fixture("tests/text/sample.txt");
            let expected = [
                '\u{0E1B}', '\u{F702}', '\u{F713}', '\u{0E19}', '\u{F70B}', '\u{0E2D}', '\u{0E07}',
                '\u{0020}', '\u{0E1F}', '\u{F706}', '\u{0E32}', '\u{0E1D}', '\u{0E19}', '\u{000A}',
                '\u{F700}', '\u{0E38}', '\u{0020}', '\u{F70F}', '\u{0E39}', '\u{0020}', '\u{0E1B}',
                '\u{F713}', '\u{F71F}', '\u{0020}', '\u{0E1D}', '\u{F710}', '\u{F713}', '\u{0E07}',
                '\u{000A}',
            ];
            let actual = preprocess_utf16be(&common::utf16be(&text), HistoryMode::EmittedResult);
            assert_eq!(actual, Ok(expected.to_vec()));
        }

        #[test]
        fn test_sample_line_by_line() {
            // Each line is its own run, but no decision depends on the previous line
            let text = common::read_fixture("tests/text/sample.txt");
            let mut preprocessor = ThaiPreprocessor::new(HistoryMode::RawInput);
            let mut actual = String::new();
            for line in text.split_inclusive('\n') {
                preprocessor.reset();
                let mut source = PushbackSource::new(Utf8Source::new(line.as_bytes()));
                while let Some(ch) = preprocessor.fix_thai_vowel_8(&mut source).unwrap() {
                    actual.push(ch);
                }
            }
            assert_eq!(actual, preprocess_str(&text, HistoryMode::RawInput));
        }
    }

    mod errors {
        use super::*;

        #[test]
        fn test_malformed_utf8() {
            let result = preprocess_utf8(b"\xE0\xB8\x9B\xC0", HistoryMode::RawInput);
            assert_eq!(result, Err(DecodeError::Malformed { offset: 3 }));
        }

        #[test]
        fn test_output_before_error() {
            // PO PLA, MAI EK, then a lone high surrogate
            let data = [0x0E, 0x1B, 0x0E, 0x48, 0xD8, 0x00];
            let mut preprocessor = ThaiPreprocessor::default();
            let mut source = PushbackSource::new(Utf16Source::be(&data));
            assert_eq!(
                preprocessor.fix_thai_vowel_16(&mut source),
                Ok(Some('\u{0E1B}'))
            );
            assert_eq!(
                preprocessor.fix_thai_vowel_16(&mut source),
                Ok(Some('\u{F705}'))
            );
            assert_eq!(
                preprocessor.fix_thai_vowel_16(&mut source),
                Err(DecodeError::Truncated { offset: 4 })
            );
        }
    }

    proptest! {
        #[test]
        fn length_is_preserved(input in thai_text()) {
            for mode in MODES {
                prop_assert_eq!(preprocess(&input, mode).len(), input.len());
            }
        }

        #[test]
        fn non_thai_passes_through(input in thai_text()) {
            for mode in MODES {
                let output = preprocess(&input, mode);
                for (ch, out) in input.iter().zip(&output) {
                    if !is_thai_letter(*ch) {
                        prop_assert_eq!(ch, out);
                    }
                }
            }
        }

        #[test]
        fn substitutions_are_final(input in thai_text()) {
            for mode in MODES {
                let first = preprocess(&input, mode);
                let second = preprocess(&first, mode);
                for (a, b) in first.iter().zip(&second) {
                    if is_pua_variant(*a) {
                        prop_assert_eq!(a, b);
                    }
                }
                // Anything substituted ends up in the Private Use Area
                for (ch, out) in input.iter().zip(&first) {
                    if ch != out {
                        prop_assert!(is_pua_variant(*out));
                    }
                }
            }
        }

        #[test]
        fn encodings_agree(input in thai_text()) {
            let text = input.iter().collect::<String>();
            for mode in MODES {
                let utf8 = preprocess_utf8(text.as_bytes(), mode).unwrap();
                let utf16le = preprocess_utf16le(&common::utf16le(&text), mode).unwrap();
                let utf16be = preprocess_utf16be(&common::utf16be(&text), mode).unwrap();
                prop_assert_eq!(&utf8, &utf16le);
                prop_assert_eq!(&utf8, &utf16be);
                prop_assert_eq!(utf8, preprocess(&input, mode));
            }
        }

        #[test]
        fn text_without_thai_is_unchanged(text in "[^\u{0E01}-\u{0EB5}]*") {
            prop_assert_eq!(preprocess_str(&text, HistoryMode::RawInput), text.clone());
            prop_assert_eq!(preprocess_str(&text, HistoryMode::EmittedResult), text);
        }
    }
}
