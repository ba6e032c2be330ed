//! Edit-distance auto-correction over the word model vocabulary.
//!
//! Stateless: every query scans the vocabulary and keeps the closest
//! candidate within the distance and length thresholds. The vocabulary set
//! has no canonical order, so ties between equally distant candidates go to
//! whichever the scan encounters first.

use crate::word_model::WordModel;

/// Maximum edit distance a correction may be from the typed word.
const MAX_DISTANCE: usize = 2;
/// Maximum length difference (in chars) between typo and correction.
const MAX_LENGTH_DIFF: usize = 2;

/// Find the best correction for `typo`, or `None` when no correction should
/// be applied: the word is too short to judge, already known, or nothing in
/// the vocabulary is close enough.
pub fn best_match(model: &WordModel, typo: &str) -> Option<String> {
    let target: Vec<char> = typo.to_lowercase().chars().collect();
    if target.len() < 3 {
        return None;
    }
    if model.contains(typo) {
        return None;
    }

    let mut best: Option<&str> = None;
    let mut min_distance = usize::MAX;
    for word in model.vocabulary() {
        let candidate: Vec<char> = word.to_lowercase().chars().collect();
        if candidate.len().abs_diff(target.len()) > MAX_LENGTH_DIFF {
            continue;
        }
        let distance = distance_chars(&target, &candidate);
        if distance < min_distance && distance <= MAX_DISTANCE {
            min_distance = distance;
            best = Some(word);
        }
    }

    // A zero-distance hit would echo the typo back as a fix.
    if min_distance == 0 {
        return None;
    }
    best.map(str::to_string)
}

/// Classic Levenshtein distance: unit-cost insert, delete, substitute.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    distance_chars(&a, &b)
}

fn distance_chars(a: &[char], b: &[char]) -> usize {
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
