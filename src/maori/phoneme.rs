//! Māori phoneme model and text-to-phoneme splitting

use super::ConvertError;

/// A single Māori phoneme, tagged consonant or vowel.
///
/// The payload is the canonical lower-case spelling, always one of the
/// entries in [`CONSONANT_CHORDS`] / [`VOWEL_CHORDS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phoneme {
    /// Consonant (single letter or digraph: "wh", "ng", ...)
    Consonant(&'static str),
    /// Vowel (single letter or diphthong: "a", "ai", ...)
    Vowel(&'static str),
}

impl Phoneme {
    /// Canonical spelling of the phoneme
    pub fn text(&self) -> &'static str {
        match self {
            Phoneme::Consonant(text) => text,
            Phoneme::Vowel(text) => text,
        }
    }

    /// True for consonants
    pub fn is_consonant(&self) -> bool {
        matches!(self, Phoneme::Consonant(_))
    }

    /// True for vowels
    pub fn is_vowel(&self) -> bool {
        matches!(self, Phoneme::Vowel(_))
    }
}

/// Consonant spelling -> steno chord, in match-priority order.
///
/// The digraphs "ng" and "wh" must come before any single letter they share
/// a prefix with; `split_phonemes` takes the first entry that matches.
pub const CONSONANT_CHORDS: [(&str, &str); 10] = [
    ("ng", "TKPW"),
    ("wh", "WH"),
    ("h", "H"),
    ("k", "K"),
    ("m", "PH"),
    ("n", "TPH"),
    ("p", "P"),
    ("r", "R"),
    ("t", "T"),
    ("w", "W"),
];

/// Vowel spelling -> steno chord, in match-priority order.
///
/// Diphthongs before the single vowels they start with.
pub const VOWEL_CHORDS: [(&str, &str); 10] = [
    ("ae", "AE"),
    ("ai", "AEU"),
    ("ao", "AO"),
    ("au", "AU"),
    ("ou", "OU"),
    ("a", "A"),
    ("e", "E"),
    ("i", "EU"),
    ("o", "O"),
    ("u", "U"),
];

/// Replaces all characters with ASCII letters or spaces.
///
/// Lower-cases the input, folds macron vowels (ā ē ī ō ū) to plain vowels,
/// and collapses every run of non-`a-z` characters into a single space.
pub fn normalise(phrase: &str) -> String {
    let mut result = String::with_capacity(phrase.len());

    for c in phrase.chars().flat_map(char::to_lowercase) {
        let c = match c {
            'ā' => 'a',
            'ē' => 'e',
            'ī' => 'i',
            'ō' => 'o',
            'ū' => 'u',
            other => other,
        };

        if c.is_ascii_lowercase() {
            result.push(c);
        } else if !result.ends_with(' ') {
            // Run of separators collapses to one space
            result.push(' ');
        }
    }

    result
}

/// Splits a Māori phrase into consonant and vowel phonemes.
///
/// Consonants are tried before vowels at each position, each table in
/// declaration order, so digraphs and diphthongs win over their single-letter
/// prefixes. Whitespace between words is skipped. Any other leftover text
/// means the phrase is not Māori as far as the tables know, and splitting
/// fails with [`ConvertError::UnrecognizedPhoneme`].
pub fn split_phonemes(phrase: &str) -> Result<Vec<Phoneme>, ConvertError> {
    let phrase = normalise(phrase.trim());
    let mut rest = phrase.as_str();

    let mut phonemes = Vec::new();
    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            break;
        }

        if let Some((spelling, _)) = CONSONANT_CHORDS
            .iter()
            .copied()
            .find(|(spelling, _)| rest.starts_with(spelling))
        {
            phonemes.push(Phoneme::Consonant(spelling));
            rest = &rest[spelling.len()..];
        } else if let Some((spelling, _)) = VOWEL_CHORDS
            .iter()
            .copied()
            .find(|(spelling, _)| rest.starts_with(spelling))
        {
            phonemes.push(Phoneme::Vowel(spelling));
            rest = &rest[spelling.len()..];
        } else {
            return Err(ConvertError::UnrecognizedPhoneme(rest.to_string()));
        }
    }

    Ok(phonemes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalise_macrons() {
        assert_eq!(normalise("WHĀNGAREI"), "whangarei");
        assert_eq!(normalise("Māori"), "maori");
        assert_eq!(normalise("pūkeko"), "pukeko");
    }

    #[test]
    fn test_normalise_separators() {
        assert_eq!(
            normalise("Te Ahi-kai-kōura-a-Tama-ki-te-rangi"),
            "te ahi kai koura a tama ki te rangi"
        );
        // Runs of separators collapse to a single space
        assert_eq!(normalise("kia -- ora"), "kia ora");
        assert_eq!(normalise("a1b"), "a b");
    }

    #[test]
    fn test_split_basic() {
        assert_eq!(
            split_phonemes("Whare kai").unwrap(),
            vec![
                Phoneme::Consonant("wh"),
                Phoneme::Vowel("a"),
                Phoneme::Consonant("r"),
                Phoneme::Vowel("e"),
                Phoneme::Consonant("k"),
                Phoneme::Vowel("ai"),
            ]
        );
    }

    #[test]
    fn test_split_digraph_and_macron() {
        assert_eq!(
            split_phonemes("WHĀNGAREI").unwrap(),
            vec![
                Phoneme::Consonant("wh"),
                Phoneme::Vowel("a"),
                Phoneme::Consonant("ng"),
                Phoneme::Vowel("a"),
                Phoneme::Consonant("r"),
                Phoneme::Vowel("e"),
                Phoneme::Vowel("i"),
            ]
        );
    }

    #[test]
    fn test_split_empty() {
        assert_eq!(split_phonemes("").unwrap(), vec![]);
        assert_eq!(split_phonemes("   ").unwrap(), vec![]);
    }

    #[test]
    fn test_split_trailing_separator() {
        // Punctuation becomes a trailing space, which ends the sequence
        assert_eq!(
            split_phonemes("kai!").unwrap(),
            vec![Phoneme::Consonant("k"), Phoneme::Vowel("ai")]
        );
    }

    #[test]
    fn test_split_unrecognized() {
        let err = split_phonemes("whale").unwrap_err();
        match err {
            ConvertError::UnrecognizedPhoneme(rest) => assert_eq!(rest, "le"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_every_table_entry_splits_to_itself() {
        // Match priority contract: each spelling round-trips as one phoneme
        for (spelling, _) in CONSONANT_CHORDS {
            assert_eq!(
                split_phonemes(spelling).unwrap(),
                vec![Phoneme::Consonant(spelling)],
                "consonant {:?} shadowed by an earlier table entry",
                spelling
            );
        }
        for (spelling, _) in VOWEL_CHORDS {
            assert_eq!(
                split_phonemes(spelling).unwrap(),
                vec![Phoneme::Vowel(spelling)],
                "vowel {:?} shadowed by an earlier table entry",
                spelling
            );
        }
    }

    #[test]
    fn test_phoneme_accessors() {
        let consonant = Phoneme::Consonant("ng");
        assert_eq!(consonant.text(), "ng");
        assert!(consonant.is_consonant());
        assert!(!consonant.is_vowel());

        let vowel = Phoneme::Vowel("au");
        assert_eq!(vowel.text(), "au");
        assert!(vowel.is_vowel());
        assert!(!vowel.is_consonant());
    }
}
