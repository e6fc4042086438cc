//! Canonical steno order, stroke validation, and dictionary sorting
//!
//! Steno keys are not compared as plain strings: each character maps to a
//! position in the fixed left-to-right key order `#STKPWHRAO*EUFRPBLGTSDZ`,
//! and a well-formed stroke visits those positions in non-decreasing order.
//! This module computes those positions, checks strokes against them, and
//! sorts whole dictionaries by them.
//!
//! # Usage
//!
//! ```
//! use plover_maori::steno::{is_steno_stroke, steno_indices};
//!
//! assert!(is_steno_stroke("H-L"));
//! assert!(!is_steno_stroke("HI"));
//!
//! // Digits substitute to number-bar chords before indexing
//! assert_eq!(steno_indices("1"), steno_indices("#S"));
//! ```

mod order;
mod validator;

pub use order::{is_steno_stroke, process_numbers, steno_indices, NUMBER_KEYS, STENO_ORDER};
pub use validator::{sort_dictionary, validate_dictionary};
