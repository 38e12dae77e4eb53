//! Fuzzy ranking of mention candidates.
//!
//! Each present field of a candidate (alias, display name, auxiliary value)
//! is scored with an fzf-style subsequence matcher. The best field score is
//! the candidate's score, with shorter fields winning ties.

mod types;

pub use types::{Candidate, FieldHighlight, MatchField, RankedMatch, Suggestion};

use std::ops::Range;

use nucleo_matcher::pattern::{Atom, AtomKind, CaseMatching, Normalization};
use nucleo_matcher::{Config, Matcher, Utf32Str};

/// Rank `candidates` against `query`.
///
/// An empty query returns every candidate in reverse input order with score
/// zero. Otherwise only candidates with at least one matching field are
/// returned, sorted by descending score with ties kept in input order.
/// The query is used verbatim, whitespace included.
pub fn rank<'a>(candidates: &'a [Candidate], query: &str) -> Vec<RankedMatch<'a>> {
    if query.is_empty() {
        return candidates
            .iter()
            .enumerate()
            .rev()
            .map(|(position, candidate)| RankedMatch {
                candidate,
                position,
                score: 0,
                highlights: Vec::new(),
            })
            .collect();
    }

    let mut config = Config::DEFAULT;
    config.prefer_prefix = true;
    let mut matcher = Matcher::new(config);
    let atom = Atom::new(query, CaseMatching::Ignore, Normalization::Smart, AtomKind::Fuzzy, false);

    let mut chars: Vec<char> = Vec::new();
    let mut indices = Vec::new();

    let mut matches: Vec<RankedMatch<'a>> = candidates
        .iter()
        .enumerate()
        .filter_map(|(position, candidate)| {
            let mut best: Option<u32> = None;
            let mut highlights = Vec::new();

            for (field, text) in candidate.fields() {
                indices.clear();
                // One entry per char, so combining marks are not folded
                // into graphemes and indices stay character offsets.
                chars.clear();
                chars.extend(text.chars());
                let haystack = Utf32Str::Unicode(&chars);
                let Some(raw) = atom.indices(haystack, &mut matcher, &mut indices) else {
                    continue;
                };

                let score = field_score(raw, chars.len());
                best = Some(best.map_or(score, |b| b.max(score)));
                highlights.push(FieldHighlight { field, ranges: to_ranges(&mut indices) });
            }

            best.map(|score| RankedMatch { candidate, position, score, highlights })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}

/// Combine the matcher score with a length bonus so that, all else equal,
/// shorter fields rank higher.
fn field_score(raw: u16, len: usize) -> u32 {
    let length_bonus = 255 - len.min(255) as u32;
    ((raw as u32) << 8) | length_bonus
}

/// Collapse sorted character indices into half-open ranges.
fn to_ranges(indices: &mut Vec<u32>) -> Vec<Range<usize>> {
    indices.sort_unstable();
    indices.dedup();

    let mut ranges: Vec<Range<usize>> = Vec::new();
    for &i in indices.iter() {
        let i = i as usize;
        match ranges.last_mut() {
            Some(last) if last.end == i => last.end = i + 1,
            _ => ranges.push(i..i + 1),
        }
    }
    ranges
}
