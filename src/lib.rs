pub mod config;
pub mod dict;
pub mod maori;
pub mod steno;

pub use dict::{read_dict, read_words, save_dict, Dictionary};
pub use maori::{steno_key, ConvertError};
pub use steno::{is_steno_stroke, sort_dictionary, steno_indices, validate_dictionary};
