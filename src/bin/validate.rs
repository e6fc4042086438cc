//! Validates steno dictionary files and rewrites them in steno order

use std::env;
use std::process;

use plover_maori::dict::{read_dict, save_dict, DictError};
use plover_maori::steno::{sort_dictionary, validate_dictionary};

/// Validates and sorts one dictionary file in place.
fn validate_file(filename: &str) -> Result<(), DictError> {
    println!("Validating {}", filename);

    let dictionary = read_dict(filename)?;
    validate_dictionary(&dictionary);

    let dictionary = sort_dictionary(dictionary);
    save_dict(filename, &dictionary)
}

fn main() -> Result<(), DictError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let filenames: Vec<String> = env::args().skip(1).collect();
    if filenames.is_empty() {
        eprintln!("Usage: validate <filename> ...");
        process::exit(1);
    }

    for filename in &filenames {
        validate_file(filename)?;
    }

    Ok(())
}
