use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::model::GolferIdentity;

/// A configured game, tagged by `"game"` in JSON.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "game", rename_all = "snake_case")]
pub enum WagerConfig {
    Nassau(NassauConfig),
    Skins(SkinsConfig),
    Pinky(SideBetConfig),
    Greenie(SideBetConfig),
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    Front,
    Back,
    Total,
}

impl Segment {
    pub const ALL: [Segment; 3] = [Segment::Front, Segment::Back, Segment::Total];

    /// Hole numbers (1-based) covered by the segment.
    #[must_use]
    pub fn holes(self) -> RangeInclusive<usize> {
        match self {
            Self::Front => 1..=9,
            Self::Back => 10..=18,
            Self::Total => 1..=18,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SegmentFees {
    #[serde(alias = "out")]
    pub front: f64,
    #[serde(alias = "in")]
    pub back: f64,
    pub total: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Team {
    pub name: String,
    #[serde(default)]
    pub members: Vec<GolferIdentity>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct NassauConfig {
    #[serde(default)]
    pub group_id: Option<String>,
    /// Fee per segment.
    #[serde(default)]
    pub fee: Option<f64>,
    #[serde(default)]
    pub segment_fees: Option<SegmentFees>,
    /// Per-player total for the whole Nassau, split evenly over the three segments.
    #[serde(default)]
    pub buy_in: Option<f64>,
    #[serde(default)]
    pub net: bool,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub team_best_count: Option<usize>,
    #[serde(default)]
    pub participants: Option<Vec<GolferIdentity>>,
}

impl NassauConfig {
    #[must_use]
    pub fn segment_fee(&self, segment: Segment) -> f64 {
        if let Some(fees) = &self.segment_fees {
            return match segment {
                Segment::Front => fees.front,
                Segment::Back => fees.back,
                Segment::Total => fees.total,
            };
        }
        if let Some(buy_in) = self.buy_in {
            return buy_in / 3.0;
        }
        self.fee.unwrap_or(0.0)
    }

    #[must_use]
    pub fn is_team_game(&self) -> bool {
        self.teams.len() >= 2
    }

    #[must_use]
    pub fn best_count(&self) -> usize {
        self.team_best_count.unwrap_or(1).max(1)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SkinsConfig {
    pub fee: f64,
    #[serde(default)]
    pub net: bool,
    #[serde(default)]
    pub carryover: bool,
    #[serde(default)]
    pub participants: Option<Vec<GolferIdentity>>,
}

/// Shared by Pinky and Greenie.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SideBetConfig {
    pub fee: f64,
    #[serde(default)]
    pub participants: Option<Vec<GolferIdentity>>,
}

impl WagerConfig {
    /// Participant subset, if the wager restricts one.
    #[must_use]
    pub fn participants(&self) -> Option<&[GolferIdentity]> {
        match self {
            Self::Nassau(c) => c.participants.as_deref(),
            Self::Skins(c) => c.participants.as_deref(),
            Self::Pinky(c) | Self::Greenie(c) => c.participants.as_deref(),
        }
    }
}
