//! FuzzyJaro - Jaro and Jaro-Winkler string similarity
//!
//! Scores how alike two strings are on a scale from 0.0 (nothing in common)
//! to 1.0 (identical). Suited to names and short identifiers in record
//! linkage and fuzzy deduplication.
//!
//! # Example
//! ```
//! use fuzzyjaro::{jaro_similarity, jaro_winkler_similarity};
//!
//! assert!((jaro_similarity("MARTHA", "MARHTA") - 17.0 / 18.0).abs() < 1e-9);
//! assert!((jaro_winkler_similarity("MARTHA", "MARHTA") - 173.0 / 180.0).abs() < 1e-9);
//! ```
//!
//! Inputs may be `&str` (per `char`), `&[u8]` (per byte) or any slice of
//! `PartialEq` units. Tokenization, batching and thresholding are left to
//! the caller.

pub mod algorithms;
pub mod error;

pub use algorithms::jaro::{
    jaro_distance, jaro_similarity, jaro_similarity_bytes, jaro_similarity_slice,
    jaro_winkler_distance, jaro_winkler_similarity, jaro_winkler_similarity_bytes,
    jaro_winkler_similarity_params, jaro_winkler_similarity_slice, Jaro, JaroWinkler,
    JaroWinklerConfig, DEFAULT_MAX_PREFIX_LENGTH, DEFAULT_PREFIX_WEIGHT, MAX_PREFIX_WEIGHT,
};
pub use algorithms::Similarity;
pub use error::{JaroError, Result};
