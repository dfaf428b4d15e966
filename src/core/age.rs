use crate::models::{AgeRange, ProfileSnapshot};
use crate::core::{mutual_score, NEUTRAL_SCORE};

/// Score when only one side's age range accepts the other
pub const ONE_WAY_AGE_SCORE: f64 = 0.5;

/// Check whether an age falls within a preference record's age range
///
/// `range` is `None` when the preference record itself is missing; that
/// fails closed. A present range with no bounds accepts any age.
/// A missing age is never in range.
#[inline]
pub fn is_age_in_range(age: Option<i32>, range: Option<&AgeRange>) -> bool {
    let (Some(age), Some(range)) = (age, range) else {
        return false;
    };
    if range.is_unrestricted() {
        return true;
    }

    range.min_age.map_or(true, |min| age >= min) && range.max_age.map_or(true, |max| age <= max)
}

/// Calculate age score: 1.0 mutual, 0.5 one-way, 0.0 neither
pub fn age_score(a: &ProfileSnapshot, b: &ProfileSnapshot) -> f64 {
    if a.age.is_none() || b.age.is_none() {
        return NEUTRAL_SCORE;
    }

    let a_fits_b = is_age_in_range(a.age, b.age_range());
    let b_fits_a = is_age_in_range(b.age, a.age_range());

    mutual_score(a_fits_b, b_fits_a, ONE_WAY_AGE_SCORE)
}
