//! Batch generator for the Māori Plover dictionaries

use plover_maori::config::load_config;
use plover_maori::dict::{read_dict, read_words, save_dict, Dictionary};
use plover_maori::maori::{steno_key, CONSONANT_CHORDS, VOWEL_CHORDS};
use plover_maori::steno::{sort_dictionary, validate_dictionary};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging (warn and up; invalid keys are reported as warnings)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = load_config();

    // Regular Māori words
    let mut dictionary = Dictionary::new();
    for word in read_words(&config.words_file)? {
        dictionary.insert(steno_key(&word)?, word.into());
    }

    // Hand-picked briefs override generated entries
    for (key, value) in read_dict(&config.briefs_file)? {
        dictionary.insert(key, value);
    }

    // Include all possible syllables to avoid conflicts
    for (consonant, _) in CONSONANT_CHORDS {
        for (vowel, _) in VOWEL_CHORDS {
            let syllable = format!("{}{}", consonant, vowel);
            let key = steno_key(&syllable)?;
            if !dictionary.contains_key(&key) {
                dictionary.insert(key, syllable.into());
            }
        }
    }

    validate_dictionary(&dictionary);
    let dictionary = sort_dictionary(dictionary);
    save_dict(&config.maori_output, &dictionary)?;

    // Māori place names
    let mut dictionary = Dictionary::new();
    for name in read_words(&config.place_names_file)? {
        dictionary.insert(steno_key(&name)?, name.into());
    }

    validate_dictionary(&dictionary);
    let dictionary = sort_dictionary(dictionary);
    save_dict(&config.place_names_output, &dictionary)?;

    // English place names are maintained by hand; validate and re-sort in place
    let dictionary = read_dict(&config.english_place_names_file)?;

    validate_dictionary(&dictionary);
    let dictionary = sort_dictionary(dictionary);
    save_dict(&config.english_place_names_file, &dictionary)?;

    Ok(())
}
