//! Phoneme sequence -> Plover steno key encoding

use std::collections::HashMap;

use lazy_static::lazy_static;

use super::phoneme::{split_phonemes, Phoneme, CONSONANT_CHORDS, VOWEL_CHORDS};
use super::ConvertError;

/// Chord appended to every stroke so Māori outlines never collide with the
/// main English theory.
pub const SUFFIX: &str = "GSD";

lazy_static! {
    static ref CONSONANT_MAP: HashMap<&'static str, &'static str> =
        CONSONANT_CHORDS.iter().copied().collect();
    static ref VOWEL_MAP: HashMap<&'static str, &'static str> =
        VOWEL_CHORDS.iter().copied().collect();
}

/// Generates the key for the given Māori phrase in a Plover dictionary.
///
/// Walks the phoneme sequence as syllables: a consonant must be immediately
/// followed by a vowel (CV), a vowel on its own stands alone (V). Each
/// syllable becomes one stroke `consonant chord + vowel chord + "GSD"`, and
/// strokes are joined with `/`.
pub fn steno_key(phrase: &str) -> Result<String, ConvertError> {
    let mut strokes = Vec::new();

    let mut phonemes = split_phonemes(phrase)?.into_iter();
    while let Some(first) = phonemes.next() {
        let (consonant, vowel) = match first {
            Phoneme::Consonant(c) => match phonemes.next() {
                // Māori syllables always take the form CV or V
                Some(Phoneme::Vowel(v)) => (CONSONANT_MAP[c], VOWEL_MAP[v]),
                _ => return Err(ConvertError::MalformedSyllable(phrase.to_string())),
            },
            Phoneme::Vowel(v) => ("", VOWEL_MAP[v]),
        };

        strokes.push(format!("{}{}{}", consonant, vowel, SUFFIX));
    }

    Ok(strokes.join("/"))
}
