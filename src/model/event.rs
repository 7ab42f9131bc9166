use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::HOLES;
use crate::error::WagerError;
use crate::model::{GUEST_PREFIX, Golfer, GolferId, GolferIdentity, Scorecard, WagerConfig};

/// Read-only view of an event handed over by the surrounding application.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct EventSnapshot {
    #[serde(default)]
    pub event_id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub course_id: Option<String>,
    /// Tee every golfer's course handicap is normalized against.
    #[serde(default)]
    pub reference_tee: Option<String>,
    pub golfers: Vec<Golfer>,
    #[serde(default)]
    pub scorecards: Vec<Scorecard>,
    #[serde(default)]
    pub wagers: Vec<WagerConfig>,
}

impl EventSnapshot {
    /// Parse and validate an event snapshot.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or the snapshot is inconsistent.
    pub fn from_json(json: &str) -> Result<Self, WagerError> {
        let event: Self = serde_json::from_str(json)?;
        event.validate()?;
        Ok(event)
    }

    #[must_use]
    pub fn golfer_ids(&self) -> Vec<GolferId> {
        self.golfers.iter().map(Golfer::id).collect()
    }

    /// # Errors
    /// Returns `WagerError::InvalidEvent` for duplicate golfers, profile ids using
    /// the reserved `guest:` prefix, scorecards or wagers naming golfers outside
    /// the event, and out-of-range hole numbers.
    pub fn validate(&self) -> Result<(), WagerError> {
        let mut known: HashSet<GolferId, RandomState> = HashSet::default();
        for golfer in &self.golfers {
            if let GolferIdentity::Profile { profile_id } = &golfer.identity {
                if profile_id.trim().starts_with(GUEST_PREFIX) {
                    return Err(WagerError::InvalidEvent(format!(
                        "profile id '{profile_id}' uses the reserved guest prefix"
                    )));
                }
            }
            if !known.insert(golfer.id()) {
                return Err(WagerError::InvalidEvent(format!(
                    "golfer {} listed more than once",
                    golfer.id()
                )));
            }
        }

        let mut carded: HashSet<GolferId, RandomState> = HashSet::default();
        for card in &self.scorecards {
            let id = card.golfer.id();
            if !known.contains(&id) {
                return Err(WagerError::InvalidEvent(format!(
                    "scorecard for unknown golfer {id}"
                )));
            }
            if !carded.insert(id.clone()) {
                return Err(WagerError::InvalidEvent(format!(
                    "more than one scorecard for golfer {id}"
                )));
            }
            let mut seen = [false; HOLES];
            for score in &card.holes {
                let hole = usize::from(score.hole);
                if !(1..=HOLES).contains(&hole) || seen[hole - 1] {
                    return Err(WagerError::InvalidEvent(format!(
                        "scorecard for {id} has invalid or repeated hole {}",
                        score.hole
                    )));
                }
                seen[hole - 1] = true;
            }
        }

        for wager in &self.wagers {
            check_known(&known, wager.participants().unwrap_or_default())?;
            if let WagerConfig::Nassau(nassau) = wager {
                if nassau.team_best_count == Some(0) {
                    return Err(WagerError::InvalidEvent(
                        "team_best_count must be at least 1".into(),
                    ));
                }
                let mut assigned: HashSet<GolferId, RandomState> = HashSet::default();
                let mut team_names: HashSet<&str, RandomState> = HashSet::default();
                for team in &nassau.teams {
                    if !team_names.insert(team.name.as_str()) {
                        return Err(WagerError::InvalidEvent(format!(
                            "team name '{}' used more than once",
                            team.name
                        )));
                    }
                    check_known(&known, &team.members)?;
                    for member in &team.members {
                        if !assigned.insert(member.id()) {
                            return Err(WagerError::InvalidEvent(format!(
                                "golfer {} assigned to more than one team",
                                member.id()
                            )));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

fn check_known(
    known: &HashSet<GolferId, RandomState>,
    identities: &[GolferIdentity],
) -> Result<(), WagerError> {
    match identities.iter().map(GolferIdentity::id).find(|id| !known.contains(id)) {
        Some(id) => Err(WagerError::InvalidEvent(format!(
            "wager references unknown golfer {id}"
        ))),
        None => Ok(()),
    }
}
