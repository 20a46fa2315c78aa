//! Jaro and Jaro-Winkler similarity implementations
//!
//! Excellent for name matching and short strings.
//! Jaro-Winkler gives extra weight to common prefixes.
//!
//! Three input shapes share one matching core:
//! - `&str` compares `char`s, with an ASCII fast path over bytes
//! - `&[u8]` compares raw bytes, so multi-byte UTF-8 counts per byte
//! - `&[T]` compares any `PartialEq` units supplied by the caller
//!
//! # Score formula
//!
//! The textbook definition averages three ratios:
//! `(m/|a| + m/|b| + (m-t)/m) / 3`. This module collects the terms over a
//! common denominator and performs a single division:
//!
//! ```text
//! (m² (|a| + |b|) + |a| |b| (m - t)) / (3 |a| |b| m)
//! ```
//!
//! Numerator and denominator are exact integers, so the only rounding step
//! is the final division.

use super::Similarity;
use crate::error::{JaroError, Result};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Winkler's standard prefix scaling factor
pub const DEFAULT_PREFIX_WEIGHT: f64 = 0.1;

/// Winkler's standard cap on the rewarded prefix length
pub const DEFAULT_MAX_PREFIX_LENGTH: usize = 4;

/// Largest prefix weight that keeps `prefix_weight * 4 <= 1`
pub const MAX_PREFIX_WEIGHT: f64 = 0.25;

// ============================================================================
// Public API
// ============================================================================

/// Jaro similarity calculator
///
/// # Complexity
/// - Time: O(m*n) worst case, bounded by the match window
/// - Space: O(m+n) for match flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Jaro;

impl Jaro {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Similarity for Jaro {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        jaro_similarity(a, b)
    }

    fn name(&self) -> &'static str {
        "jaro"
    }
}

/// Configuration for Jaro-Winkler similarity
///
/// Missing fields fall back to the standard `(0.1, 4)` parameters when
/// deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JaroWinklerConfig {
    /// Prefix weight (typically 0.1, max 0.25)
    pub prefix_weight: f64,
    /// Maximum prefix length to consider (typically 4)
    pub max_prefix_length: usize,
}

impl Default for JaroWinklerConfig {
    fn default() -> Self {
        Self {
            prefix_weight: DEFAULT_PREFIX_WEIGHT,
            max_prefix_length: DEFAULT_MAX_PREFIX_LENGTH,
        }
    }
}

impl JaroWinklerConfig {
    /// Check that the parameters keep scores inside [0.0, 1.0].
    ///
    /// The largest possible bonus is `prefix_weight * max_prefix_length`,
    /// which must not exceed 1.0.
    pub fn validate(&self) -> Result<()> {
        let weight = self.prefix_weight;
        let outcome = if !weight.is_finite() {
            Err(JaroError::NonFiniteWeight(weight))
        } else if !(0.0..=MAX_PREFIX_WEIGHT).contains(&weight) {
            Err(JaroError::WeightOutOfRange(weight))
        } else if self.max_prefix_length == 0 {
            Err(JaroError::ZeroPrefixLength)
        } else if weight * self.max_prefix_length as f64 > 1.0 {
            Err(JaroError::PrefixBonusTooLarge {
                weight,
                length: self.max_prefix_length,
            })
        } else {
            Ok(())
        };

        if let Err(err) = &outcome {
            tracing::debug!(error = %err, "rejected jaro-winkler config");
        }
        outcome
    }
}

/// Jaro-Winkler similarity calculator
///
/// Extends Jaro similarity by giving extra weight to common prefixes.
/// Best for names and short identifiers.
///
/// # Parameters
/// - `prefix_weight`: How much to boost prefix matches (0.0-0.25, typically 0.1)
/// - `max_prefix_length`: Maximum prefix length to consider (typically 4)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JaroWinkler {
    prefix_weight: f64,
    max_prefix_length: usize,
}

impl Default for JaroWinkler {
    fn default() -> Self {
        Self::from_config(JaroWinklerConfig::default())
    }
}

impl JaroWinkler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from configuration, clamping the weight into range and
    /// shortening the prefix cap until the bonus fits.
    #[must_use]
    pub fn from_config(config: JaroWinklerConfig) -> Self {
        Self::default_params()
            .with_prefix_weight(config.prefix_weight)
            .with_max_prefix_length(config.max_prefix_length)
    }

    /// Create from configuration, rejecting out-of-range parameters.
    pub fn try_from_config(config: JaroWinklerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            prefix_weight: config.prefix_weight,
            max_prefix_length: config.max_prefix_length,
        })
    }

    /// Get current configuration
    #[must_use]
    pub fn config(&self) -> JaroWinklerConfig {
        JaroWinklerConfig {
            prefix_weight: self.prefix_weight,
            max_prefix_length: self.max_prefix_length,
        }
    }

    #[must_use]
    pub fn prefix_weight(&self) -> f64 {
        self.prefix_weight
    }

    #[must_use]
    pub fn max_prefix_length(&self) -> usize {
        self.max_prefix_length
    }

    #[must_use]
    pub fn with_prefix_weight(mut self, weight: f64) -> Self {
        let clamped = clamp_prefix_weight(weight);
        if clamped != weight {
            tracing::warn!(
                requested = weight,
                applied = clamped,
                "prefix_weight clamped to [0.0, 0.25]"
            );
        }
        self.prefix_weight = clamped;
        self.fit_prefix_length();
        self
    }

    #[must_use]
    pub fn with_max_prefix_length(mut self, length: usize) -> Self {
        self.max_prefix_length = length;
        self.fit_prefix_length();
        self
    }

    fn fit_prefix_length(&mut self) {
        let fitted = fit_prefix_length(self.max_prefix_length, self.prefix_weight);
        if fitted != self.max_prefix_length {
            tracing::warn!(
                requested = self.max_prefix_length,
                applied = fitted,
                prefix_weight = self.prefix_weight,
                "max_prefix_length shortened so prefix_weight * max_prefix_length <= 1.0"
            );
            self.max_prefix_length = fitted;
        }
    }

    fn default_params() -> Self {
        Self {
            prefix_weight: DEFAULT_PREFIX_WEIGHT,
            max_prefix_length: DEFAULT_MAX_PREFIX_LENGTH,
        }
    }
}

impl Similarity for JaroWinkler {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        jaro_winkler_similarity_params(a, b, self.prefix_weight, self.max_prefix_length)
    }

    fn name(&self) -> &'static str {
        "jaro_winkler"
    }
}

/// Calculate Jaro similarity between two strings.
/// Returns a value between 0.0 and 1.0.
///
/// Strings are compared per `char`. When both strings are ASCII the bytes
/// are compared directly, which gives the same result without collecting
/// `char` buffers.
#[inline]
#[must_use]
pub fn jaro_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }

    if a.is_ascii() && b.is_ascii() {
        return jaro_core(a.as_bytes(), b.as_bytes());
    }

    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    jaro_core(&a_chars, &b_chars)
}

/// Jaro similarity over raw bytes.
///
/// Multi-byte UTF-8 sequences count as several units, so results can differ
/// from [`jaro_similarity`] on non-ASCII text.
#[inline]
#[must_use]
pub fn jaro_similarity_bytes(a: &[u8], b: &[u8]) -> f64 {
    jaro_core(a, b)
}

/// Jaro similarity over arbitrary comparable units, e.g. pre-split tokens.
#[inline]
#[must_use]
pub fn jaro_similarity_slice<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    jaro_core(a, b)
}

/// Calculate Jaro-Winkler similarity with default parameters.
#[inline]
#[must_use]
pub fn jaro_winkler_similarity(a: &str, b: &str) -> f64 {
    jaro_winkler_similarity_params(a, b, DEFAULT_PREFIX_WEIGHT, DEFAULT_MAX_PREFIX_LENGTH)
}

/// Jaro-Winkler similarity over raw bytes with default parameters.
#[inline]
#[must_use]
pub fn jaro_winkler_similarity_bytes(a: &[u8], b: &[u8]) -> f64 {
    jaro_winkler_similarity_slice(a, b)
}

/// Jaro-Winkler similarity over arbitrary comparable units with default parameters.
#[must_use]
pub fn jaro_winkler_similarity_slice<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    let jaro_sim = jaro_core(a, b);
    let prefix_len = common_prefix_len(a.iter(), b.iter(), DEFAULT_MAX_PREFIX_LENGTH);
    winkler_boost(jaro_sim, prefix_len, DEFAULT_PREFIX_WEIGHT)
}

/// Calculate Jaro-Winkler similarity with custom parameters.
/// Note: prefix_weight is clamped to [0.0, 0.25], and max_prefix_len is
/// shortened until `prefix_weight * max_prefix_len <= 1.0`, so the result
/// stays in [0.0, 1.0].
#[inline]
#[must_use]
pub fn jaro_winkler_similarity_params(
    a: &str,
    b: &str,
    prefix_weight: f64,
    max_prefix_len: usize,
) -> f64 {
    let jaro_sim = jaro_similarity(a, b);

    if jaro_sim == 0.0 {
        return 0.0;
    }

    let prefix_weight = clamp_prefix_weight(prefix_weight);
    let max_prefix_len = fit_prefix_length(max_prefix_len, prefix_weight);
    let prefix_len = common_prefix_len(a.chars(), b.chars(), max_prefix_len);
    winkler_boost(jaro_sim, prefix_len, prefix_weight)
}

/// Distance version (1.0 - similarity)
#[inline]
#[must_use]
pub fn jaro_distance(a: &str, b: &str) -> f64 {
    1.0 - jaro_similarity(a, b)
}

#[inline]
#[must_use]
pub fn jaro_winkler_distance(a: &str, b: &str) -> f64 {
    1.0 - jaro_winkler_similarity(a, b)
}

// ============================================================================
// Core algorithm
// ============================================================================

/// Shared Jaro computation for every input shape.
fn jaro_core<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    if a == b {
        return 1.0;
    }

    let a_len = a.len();
    let b_len = b.len();
    if a_len == 0 || b_len == 0 {
        return 0.0;
    }

    // floor(max/2) - 1 only goes negative when max == 1, where the inputs
    // are two unequal single units and a zero radius still finds nothing.
    let match_distance = (a_len.max(b_len) / 2).saturating_sub(1);

    let mut a_matches: SmallVec<[bool; 64]> = smallvec::smallvec![false; a_len];
    let mut b_matches: SmallVec<[bool; 64]> = smallvec::smallvec![false; b_len];
    let mut matches = 0usize;

    // Greedy first fit: each unit of `a` claims the leftmost unclaimed
    // equal unit of `b` inside its window.
    for (i, unit) in a.iter().enumerate() {
        let start = i.saturating_sub(match_distance);
        let end = (i + match_distance + 1).min(b_len);

        for j in start..end {
            if b_matches[j] || *unit != b[j] {
                continue;
            }
            a_matches[i] = true;
            b_matches[j] = true;
            matches += 1;
            break;
        }
    }

    if matches == 0 {
        return 0.0;
    }

    let a_matched = matched_units(a, &a_matches);
    let b_matched = matched_units(b, &b_matches);
    let half_transpositions = a_matched
        .zip(b_matched)
        .filter(|(x, y)| x != y)
        .count();

    combined_score(matches, half_transpositions / 2, a_len, b_len)
}

/// Units whose match flag is set, in positional order.
fn matched_units<'a, T>(units: &'a [T], flags: &'a [bool]) -> impl Iterator<Item = &'a T> + 'a {
    units
        .iter()
        .zip(flags)
        .filter_map(|(unit, &matched)| matched.then_some(unit))
}

/// `(m² (la + lb) + la lb (m - t)) / (3 la lb m)` with an exact integer
/// numerator and denominator.
fn combined_score(matches: usize, transpositions: usize, a_len: usize, b_len: usize) -> f64 {
    let m = matches as u128;
    let t = transpositions as u128;
    let la = a_len as u128;
    let lb = b_len as u128;

    let numerator = m * m * (la + lb) + la * lb * (m - t);
    let denominator = 3 * la * lb * m;
    numerator as f64 / denominator as f64
}

fn common_prefix_len<I, T>(a: I, b: I, limit: usize) -> usize
where
    I: Iterator<Item = T>,
    T: PartialEq,
{
    a.zip(b).take(limit).take_while(|(x, y)| x == y).count()
}

#[inline]
fn winkler_boost(jaro_sim: f64, prefix_len: usize, prefix_weight: f64) -> f64 {
    jaro_sim + prefix_weight * prefix_len as f64 * (1.0 - jaro_sim)
}

/// NaN maps to no boost; everything else is clamped into [0.0, 0.25].
#[inline]
fn clamp_prefix_weight(weight: f64) -> f64 {
    if weight.is_nan() {
        0.0
    } else {
        weight.clamp(0.0, MAX_PREFIX_WEIGHT)
    }
}

/// Longest prefix cap for which `prefix_weight * length <= 1.0`.
#[inline]
fn fit_prefix_length(length: usize, prefix_weight: f64) -> usize {
    if prefix_weight <= 0.0 {
        return length;
    }
    let mut limit = (1.0 / prefix_weight).floor() as usize;
    if prefix_weight * limit as f64 > 1.0 {
        limit -= 1;
    }
    length.min(limit)
}
