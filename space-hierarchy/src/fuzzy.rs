// SPDX-License-Identifier: GPL-3.0-only

//! Case-insensitive subsequence matching
//!
//! A pattern matches a text when every pattern character appears in the text
//! in order, ignoring case. The scan is greedy: each pattern character takes
//! the first unused position that fits.
//!
//! Scoring rewards runs of consecutive matches. A running bonus starts at 0,
//! becomes `1 + 2 * bonus` on every matched character and drops back to 0 on
//! every skipped one; the score is the sum of the bonus after each character.
//! A text equal to the pattern (ignoring case) scores `u64::MAX`.

/// Outcome of a successful match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyMatch {
    pub score: u64,

    /// Char positions in the text that matched pattern characters
    pub indices: Vec<usize>,
}

/// Match `pattern` against `text`, returning `None` when it is not a subsequence.
pub fn fuzzy_match(pattern: &str, text: &str) -> Option<FuzzyMatch> {
    let pattern: Vec<char> = pattern.chars().collect();
    let mut next = 0;
    let mut bonus: u64 = 0;
    let mut score: u64 = 0;
    let mut indices = Vec::with_capacity(pattern.len());

    for (position, ch) in text.chars().enumerate() {
        if next < pattern.len() && same_ignoring_case(ch, pattern[next]) {
            next += 1;
            bonus = bonus.saturating_mul(2).saturating_add(1);
            indices.push(position);
        } else {
            bonus = 0;
        }
        score = score.saturating_add(bonus);
    }

    if next < pattern.len() {
        return None;
    }

    let whole: String = pattern.iter().collect();
    if !whole.is_empty() && text.to_lowercase() == whole.to_lowercase() {
        score = u64::MAX;
    }

    Some(FuzzyMatch { score, indices })
}

fn same_ignoring_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// A candidate that matched in [`fuzzy_filter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterMatch<'a, T> {
    pub item: &'a T,

    /// Position of the item in the candidate slice
    pub index: usize,

    pub score: u64,
}

/// Keep the candidates whose `key` matches `pattern`, best score first.
///
/// Candidates with equal scores keep their original relative order.
pub fn fuzzy_filter<'a, T, F>(pattern: &str, candidates: &'a [T], key: F) -> Vec<FilterMatch<'a, T>>
where
    F: Fn(&T) -> &str,
{
    let mut matches: Vec<_> = candidates
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            fuzzy_match(pattern, key(item)).map(|m| FilterMatch {
                item,
                index,
                score: m.score,
            })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}
