//! Māori word -> steno key conversion
//!
//! Turns Māori text into Plover dictionary keys in two steps:
//!
//! 1. **Phoneme splitting**: normalise the text and decompose it into
//!    tagged consonant/vowel phonemes ([`split_phonemes`]).
//! 2. **Encoding**: pair the phonemes into CV / V syllables and emit one
//!    stroke per syllable ([`steno_key`]).
//!
//! # Usage
//!
//! ```
//! use plover_maori::maori::steno_key;
//!
//! assert_eq!(steno_key("Whare kai").unwrap(), "WHAGSD/REGSD/KAEUGSD");
//! assert_eq!(steno_key("WHĀNGAREI").unwrap(), "WHAGSD/TKPWAGSD/REGSD/EUGSD");
//! ```

mod encoder;
mod phoneme;

pub use encoder::{steno_key, SUFFIX};
pub use phoneme::{normalise, split_phonemes, Phoneme, CONSONANT_CHORDS, VOWEL_CHORDS};

/// Conversion errors
#[derive(Debug)]
pub enum ConvertError {
    /// No consonant or vowel table entry matches the remaining input
    UnrecognizedPhoneme(String),
    /// A consonant phoneme is not followed by a vowel phoneme
    MalformedSyllable(String),
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertError::UnrecognizedPhoneme(rest) => {
                write!(f, "unknown phoneme: {}", rest)
            }
            ConvertError::MalformedSyllable(phrase) => {
                write!(f, "consonant without a following vowel in: {}", phrase)
            }
        }
    }
}

impl std::error::Error for ConvertError {}
