//! Canonical steno key order and stroke index computation

/// The steno keys in canonical left-to-right order.
pub const STENO_ORDER: &str = "#STKPWHRAO*EUFRPBLGTSDZ";

/// Keys pressed together with `#` for the digits 0-9, by digit.
pub const NUMBER_KEYS: &str = "OSTPHAFPLT";

/// Index of the `*` pivot in [`STENO_ORDER`]; a `-` in a raw key skips the
/// minimum search position to just past it.
const MIDDLE: usize = 10;

/// Replaces digits with the corresponding steno characters.
///
/// Works per stroke, recursing over `/`. A leading `#` is stripped while the
/// digits are substituted; any digit marks the stroke as numeric and the `#`
/// is put back in front.
pub fn process_numbers(key: &str) -> String {
    if key.contains('/') {
        return key
            .split('/')
            .map(process_numbers)
            .collect::<Vec<_>>()
            .join("/");
    }

    let (mut is_number, stroke) = match key.strip_prefix('#') {
        Some(rest) => (true, rest),
        None => (false, key),
    };

    let mut processed = String::with_capacity(key.len() + 1);
    for c in stroke.chars() {
        if let Some(digit) = c.to_digit(10) {
            processed.push(NUMBER_KEYS.as_bytes()[digit as usize] as char);
            is_number = true;
        } else {
            processed.push(c);
        }
    }

    if is_number {
        processed.insert(0, '#');
    }
    processed
}

/// Returns the canonical-order index of each character in the given key.
///
/// Characters are looked up left to right with a non-decreasing minimum
/// search position, so a character out of steno order (or not in the
/// alphabet at all) yields `None`. A `-` skips the minimum past the `*`
/// pivot without contributing an index; a `/` resets the minimum for the
/// next stroke (and contributes `None`, since it is not a steno key).
pub fn steno_indices(key: &str) -> Vec<Option<usize>> {
    let key = process_numbers(key);

    let mut min_index = 0;
    let mut indices = Vec::with_capacity(key.len());
    for c in key.chars() {
        if c == '-' {
            min_index = MIDDLE + 1;
            continue;
        }

        if c == '/' {
            min_index = 0;
        }

        let index = STENO_ORDER[min_index..].find(c).map(|i| i + min_index);
        if let Some(found) = index {
            min_index = found + 1;
        }
        indices.push(index);
    }

    indices
}

/// Returns true if the stroke is in steno order.
pub fn is_steno_stroke(stroke: &str) -> bool {
    steno_indices(stroke).iter().all(Option::is_some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_middle_is_the_pivot() {
        assert_eq!(STENO_ORDER.find('*'), Some(MIDDLE));
    }

    #[test]
    fn test_process_numbers_plain_stroke() {
        assert_eq!(process_numbers("WHAGSD"), "WHAGSD");
        assert_eq!(process_numbers("H-L"), "H-L");
        assert_eq!(process_numbers(""), "");
    }

    #[test]
    fn test_process_numbers_substitutes_digits() {
        // Digit d becomes NUMBER_KEYS[d] and forces the # marker
        assert_eq!(process_numbers("1"), "#S");
        assert_eq!(process_numbers("0"), "#O");
        assert_eq!(process_numbers("123"), "#STK");
        assert_eq!(process_numbers("1-9"), "#S-T");
    }

    #[test]
    fn test_process_numbers_keeps_explicit_marker() {
        assert_eq!(process_numbers("#S"), "#S");
        assert_eq!(process_numbers("#1"), "#S");
    }

    #[test]
    fn test_process_numbers_multi_stroke() {
        assert_eq!(process_numbers("1/2"), "#S/#T");
        assert_eq!(process_numbers("WHAGSD/1"), "WHAGSD/#S");
    }

    #[test]
    fn test_steno_indices_in_order() {
        assert_eq!(steno_indices("STK"), vec![Some(1), Some(2), Some(3)]);
        assert_eq!(
            steno_indices("WHAGSD"),
            vec![Some(5), Some(6), Some(8), Some(18), Some(20), Some(21)]
        );
    }

    #[test]
    fn test_steno_indices_dash_skips_to_right_bank() {
        // H is on the left bank, L only on the right; the dash jumps the
        // minimum past the pivot so L resolves there
        assert_eq!(steno_indices("H-L"), vec![Some(6), Some(17)]);
    }

    #[test]
    fn test_steno_indices_out_of_order() {
        // L comes after R on the right bank, so R cannot follow L
        assert_eq!(steno_indices("WOLRD"), vec![Some(5), Some(9), Some(17), None, Some(21)]);
    }

    #[test]
    fn test_steno_indices_slash_resets() {
        // Both strokes start from the left bank again; the slash itself is
        // not a steno key and contributes None
        assert_eq!(
            steno_indices("TK/TK"),
            vec![Some(2), Some(3), None, Some(2), Some(3)]
        );
    }

    #[test]
    fn test_is_steno_stroke() {
        assert!(is_steno_stroke("H-L"));
        assert!(is_steno_stroke("WORLD"));
        assert!(is_steno_stroke("WHAGSD"));
        assert!(is_steno_stroke(""));

        assert!(!is_steno_stroke("HI"));
        assert!(!is_steno_stroke("WOLRD"));
        assert!(!is_steno_stroke("hello"));
    }

    #[test]
    fn test_digits_index_like_their_substitutions() {
        assert_eq!(steno_indices("1-9"), steno_indices("#S-T"));
        assert!(is_steno_stroke("1-9"));
    }

    #[test]
    fn test_every_maori_chord_is_a_valid_stroke() {
        use crate::maori::{steno_key, CONSONANT_CHORDS, VOWEL_CHORDS};

        for (consonant, _) in CONSONANT_CHORDS {
            for (vowel, _) in VOWEL_CHORDS {
                let key = steno_key(&format!("{}{}", consonant, vowel)).unwrap();
                assert!(is_steno_stroke(&key), "{} out of steno order", key);
            }
        }
    }
}
