use crate::HOLES;

/// Handicap strokes received on each hole, indexed by `hole - 1`.
///
/// Negative course handicaps receive nothing. Each hole gets `hcap / 18` strokes,
/// plus one more where its stroke index is within `hcap % 18`. With unique
/// stroke indexes 1..=18 the strokes always sum to `max(0, hcap)`.
#[must_use]
pub fn allocate_strokes(course_handicap: i32, stroke_indexes: &[u8; HOLES]) -> [i32; HOLES] {
    let hcap = course_handicap.max(0);
    let holes = HOLES as i32;
    let base = hcap / holes;
    let remainder = hcap % holes;

    let mut strokes = [0; HOLES];
    for (allocated, &si) in strokes.iter_mut().zip(stroke_indexes) {
        *allocated = base + i32::from(i32::from(si) <= remainder);
    }
    strokes
}
