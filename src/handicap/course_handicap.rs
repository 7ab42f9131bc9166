use crate::model::CourseTee;

/// Slope rating of a course of standard difficulty.
pub const STANDARD_SLOPE: f64 = 113.0;

/// Course handicap for a golfer playing `tee`, normalized against the event's
/// `reference` tee.
///
/// `index * slope / 113 + (rating - par) - (ref_rating - ref_par)`, rounded half
/// away from zero. When only one tee is known it serves as both; with no course
/// data the index itself is rounded.
#[must_use]
pub fn course_handicap(index: f64, tee: Option<&CourseTee>, reference: Option<&CourseTee>) -> i32 {
    let (tee, reference) = match (tee, reference) {
        (Some(tee), Some(reference)) => (tee, reference),
        (Some(only), None) | (None, Some(only)) => (only, only),
        (None, None) => return round_to_i32(index),
    };

    let raw = index * (tee.slope_rating / STANDARD_SLOPE)
        + (tee.course_rating - f64::from(tee.par))
        - (reference.course_rating - f64::from(reference.par));
    round_to_i32(raw)
}

// f64::round already rounds half away from zero
pub(crate) fn round_to_i32(value: f64) -> i32 {
    value.round() as i32
}
