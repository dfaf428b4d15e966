use std::collections::HashSet;
use crate::core::NEUTRAL_SCORE;

/// Calculate interest overlap as Jaccard similarity (0-1)
///
/// A missing or empty set on either side scores neutral.
pub fn interest_score(a: Option<&HashSet<String>>, b: Option<&HashSet<String>>) -> f64 {
    let (Some(a), Some(b)) = (a, b) else {
        return NEUTRAL_SCORE;
    };
    if a.is_empty() || b.is_empty() {
        return NEUTRAL_SCORE;
    }

    jaccard_similarity(a, b)
}

/// |A ∩ B| / |A ∪ B|, 1.0 when both sets are empty
#[inline]
pub fn jaccard_similarity(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;

    if union == 0 {
        return 1.0;
    }

    intersection as f64 / union as f64
}

/// Interests present on both sides, sorted
pub fn shared_interests(a: Option<&HashSet<String>>, b: Option<&HashSet<String>>) -> Vec<String> {
    let (Some(a), Some(b)) = (a, b) else {
        return Vec::new();
    };

    let mut shared: Vec<String> = a.intersection(b).cloned().collect();
    shared.sort();
    shared
}
