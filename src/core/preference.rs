use crate::models::{GenderPreference, ProfileSnapshot};
use crate::core::{mutual_score, NEUTRAL_SCORE};

/// Score when only one side accepts the other's gender
pub const ONE_WAY_PREFERENCE_SCORE: f64 = 0.3;

/// Check whether a gender preference accepts the target's gender
///
/// A missing or "ANY" preference accepts everyone; otherwise the target
/// gender must match ignoring case. A missing target gender only passes
/// an unrestricted preference.
#[inline]
pub fn is_gender_accepted(target_gender: Option<&str>, preference: Option<&GenderPreference>) -> bool {
    match preference {
        None => true,
        Some(pref) if pref.is_any() => true,
        Some(pref) => target_gender.is_some_and(|gender| gender.to_lowercase() == pref.as_str().to_lowercase()),
    }
}

/// Calculate gender preference score: 1.0 mutual, 0.3 one-way, 0.0 neither
pub fn preference_score(a: &ProfileSnapshot, b: &ProfileSnapshot) -> f64 {
    let (Some(a_prefs), Some(b_prefs)) = (a.preferences.as_ref(), b.preferences.as_ref()) else {
        return NEUTRAL_SCORE;
    };

    let a_accepts_b = is_gender_accepted(b.gender.as_deref(), a_prefs.preferred_gender.as_ref());
    let b_accepts_a = is_gender_accepted(a.gender.as_deref(), b_prefs.preferred_gender.as_ref());

    mutual_score(a_accepts_b, b_accepts_a, ONE_WAY_PREFERENCE_SCORE)
}
