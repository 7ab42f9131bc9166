use serde::{Deserialize, Serialize};

use crate::HOLES;
use crate::model::GolferIdentity;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoleScore {
    pub hole: u8,
    /// `None` until the hole is played.
    #[serde(default)]
    pub strokes: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Scorecard {
    pub golfer: GolferIdentity,
    #[serde(default)]
    pub holes: Vec<HoleScore>,
    #[serde(default)]
    pub pinkies: u32,
    #[serde(default)]
    pub greenies: u32,
}

impl Scorecard {
    /// Gross strokes indexed by `hole - 1`. Holes outside 1..=18 are ignored.
    #[must_use]
    pub fn strokes_by_hole(&self) -> [Option<i32>; HOLES] {
        let mut strokes = [None; HOLES];
        for score in &self.holes {
            if (1..=HOLES).contains(&usize::from(score.hole)) {
                strokes[usize::from(score.hole) - 1] = score.strokes;
            }
        }
        strokes
    }
}
