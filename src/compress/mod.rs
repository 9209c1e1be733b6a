//! Geohash prefix-set compression.
//!
//! Replaces any complete group of 32 sibling cells with their parent,
//! bottom-up, after dropping entries already covered by a present
//! ancestor. The compressed set names exactly the same locations as the
//! input (modulo truncation above the maximum level).

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::{
    codec::{base32, MAX_PRECISION, MIN_PRECISION},
    error::{CompressError, CompressResult},
};

pub const DEFAULT_MIN_LEVEL: usize = MIN_PRECISION;
pub const DEFAULT_MAX_LEVEL: usize = MAX_PRECISION;

/// Compresses a collection of geohash strings with the default level
/// bounds (1 and 12). The result is sorted lexicographically.
///
/// ```rust
/// let compressed = geocover::compress(["y0", "y01", "z2"]).unwrap();
/// assert_eq!(compressed, vec!["y0", "z2"]);
/// ```
pub fn compress<I, S>(hashes: I) -> CompressResult<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    compress_with_levels(hashes, DEFAULT_MIN_LEVEL, DEFAULT_MAX_LEVEL)
}

/// Compresses with explicit precision bounds.
///
/// Entries longer than `max_level` are truncated to their `max_level`
/// prefix before merging; entries at `min_level` are never merged
/// further, and entries shorter than `min_level` pass through untouched.
pub fn compress_with_levels<I, S>(
    hashes: I,
    min_level: usize,
    max_level: usize,
) -> CompressResult<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if min_level < MIN_PRECISION || max_level > MAX_PRECISION || min_level > max_level {
        return Err(CompressError::InvalidLevelRange {
            min: min_level,
            max: max_level,
        });
    }

    // Normalize: drop empties, truncate over-deep entries, deduplicate.
    let mut normalized: HashSet<String> = HashSet::new();
    let mut input_len = 0usize;
    for hash in hashes {
        input_len += 1;
        let hash = hash.as_ref();
        if hash.is_empty() {
            continue;
        }
        for c in hash.chars() {
            base32::value_of(c)?;
        }
        let truncated = if hash.len() > max_level {
            &hash[..max_level]
        } else {
            hash
        };
        normalized.insert(truncated.to_string());
    }

    // Prune: with an ancestor present, its descendants are redundant.
    // Shortest first, so ancestors are considered before their children.
    let mut candidates: Vec<String> = normalized.into_iter().collect();
    candidates.sort_by_key(|hash| hash.len());

    let mut kept: HashSet<String> = HashSet::with_capacity(candidates.len());
    for hash in candidates {
        let covered = (1..hash.len()).any(|n| kept.contains(&hash[..n]));
        if !covered {
            kept.insert(hash);
        }
    }

    // Merge complete 32-sibling groups bottom-up; a freshly inserted
    // parent is eligible again at the next (shorter) level.
    let mut level = kept.iter().map(|hash| hash.len()).max().unwrap_or(0);
    while level > min_level {
        let mut by_parent: HashMap<String, usize> = HashMap::new();
        for hash in kept.iter().filter(|hash| hash.len() == level) {
            *by_parent.entry(hash[..level - 1].to_string()).or_insert(0) += 1;
        }

        for (parent, siblings) in by_parent {
            if siblings != 32 {
                continue;
            }
            for &b in base32::ALPHABET.iter() {
                let mut child = parent.clone();
                child.push(b as char);
                kept.remove(&child);
            }
            kept.insert(parent);
        }
        level -= 1;
    }

    let mut result: Vec<String> = kept.into_iter().collect();
    result.sort();
    debug!(
        input = input_len,
        output = result.len(),
        "compressed geohash set"
    );

    Ok(result)
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
