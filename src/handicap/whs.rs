use tracing::debug;

use crate::HOLES;
use crate::handicap::{STANDARD_SLOPE, allocate_strokes, course_handicap::round_to_i32};
use crate::model::{CourseTee, Scorecard};

/// Differentials considered when computing a handicap index.
pub const DIFFERENTIAL_WINDOW: usize = 20;

/// Course handicap straight from a single tee's numbers, never below zero.
#[must_use]
pub fn course_handicap_standalone(index: f64, slope: f64, course_rating: f64, par: i32) -> i32 {
    round_to_i32(index * (slope / STANDARD_SLOPE) + course_rating - f64::from(par)).max(0)
}

#[must_use]
pub fn score_differential(adjusted_gross: i32, course_rating: f64, slope: f64) -> f64 {
    round1((f64::from(adjusted_gross) - course_rating) * STANDARD_SLOPE / slope)
}

/// Equitable stroke control: a hole counts for at most par + 2 + strokes received.
#[must_use]
pub fn esc_cap(gross: i32, par: i32, handicap_strokes_on_hole: i32) -> i32 {
    gross.min(par + 2 + handicap_strokes_on_hole)
}

/// ESC-capped total of a finished round. `None` if any hole is unplayed or the
/// tee does not describe all 18 holes.
#[must_use]
pub fn adjusted_gross_score(card: &Scorecard, tee: &CourseTee, course_handicap: i32) -> Option<i32> {
    let pars = tee.hole_pars()?;
    let strokes = allocate_strokes(course_handicap, &tee.stroke_indexes());
    let gross = card.strokes_by_hole();

    let mut total = 0;
    for hole in 0..HOLES {
        total += esc_cap(gross[hole]?, pars[hole], strokes[hole]);
    }
    Some(total)
}

#[must_use]
pub fn round_differential(card: &Scorecard, tee: &CourseTee, course_handicap: i32) -> Option<f64> {
    let adjusted = adjusted_gross_score(card, tee, course_handicap)?;
    Some(score_differential(adjusted, tee.course_rating, tee.slope_rating))
}

/// How many of the lowest differentials count, given how many rounds exist.
#[must_use]
pub fn best_differential_count(rounds: usize) -> Option<usize> {
    match rounds {
        0..=2 => None,
        3..=5 => Some(1),
        6..=8 => Some(2),
        9..=11 => Some(3),
        12..=14 => Some(4),
        15..=16 => Some(5),
        17..=18 => Some(6),
        19 => Some(7),
        _ => Some(8),
    }
}

/// Handicap index from a differential history ordered oldest first.
///
/// Only the 20 most recent rounds count. Returns `None` with fewer than 3.
#[must_use]
pub fn handicap_index_from_differentials(differentials: &[f64]) -> Option<f64> {
    let recent = &differentials[differentials.len().saturating_sub(DIFFERENTIAL_WINDOW)..];
    let Some(count) = best_differential_count(recent.len()) else {
        debug!(rounds = recent.len(), "not enough rounds for a handicap index");
        return None;
    };

    // work in whole tenths so 9.05 rounds up instead of drifting to 9.0
    let mut tenths: Vec<i64> = recent.iter().map(|d| (d * 10.0).round() as i64).collect();
    tenths.sort_unstable();
    let sum: i64 = tenths.iter().take(count).sum();
    let average = (sum as f64 / count as f64).round();
    Some(average / 10.0)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_table_edges() {
        assert_eq!(best_differential_count(2), None);
        assert_eq!(best_differential_count(3), Some(1));
        assert_eq!(best_differential_count(8), Some(2));
        assert_eq!(best_differential_count(20), Some(8));
        assert_eq!(best_differential_count(35), Some(8));
    }

    #[test]
    fn round1_half_up() {
        assert!((round1(18.04) - 18.0).abs() < 1e-9);
        assert!((round1(18.06) - 18.1).abs() < 1e-9);
    }
}
