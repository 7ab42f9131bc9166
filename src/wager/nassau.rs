use ahash::RandomState;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, warn};

use super::{MoneyMap, credit};
use crate::model::{Game, GolferId, NassauConfig, Segment};
use crate::score::{Participant, RoundContext};

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NassauMode {
    Individual,
    Team,
}

/// A side's score for one segment. `side` is a golfer id in individual mode
/// and a team name in team mode.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SideScore {
    pub side: String,
    /// `None` when a required hole is missing; such a side can neither win nor lose.
    pub score: Option<i32>,
    pub to_par: Option<i32>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SegmentResult {
    pub segment: Segment,
    pub winners: Vec<String>,
    pub scores: Vec<SideScore>,
    pub pot: f64,
    pub mode: NassauMode,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct NassauResult {
    pub group_id: Option<String>,
    pub mode: NassauMode,
    pub segments: Vec<SegmentResult>,
    /// Gross winnings, not netted against the stake.
    pub winnings_by_golfer: MoneyMap,
    pub stakes_by_golfer: MoneyMap,
}

struct Side<'a> {
    name: String,
    members: Vec<&'a Participant>,
}

/// Settle a Nassau over front, back and total.
///
/// Returns `None` when fewer than two golfers are paying in.
#[must_use]
pub fn calculate_nassau(ctx: &RoundContext, config: &NassauConfig) -> Option<NassauResult> {
    let eligible: Vec<&Participant> = ctx
        .eligible(Game::Nassau, config.participants.as_deref())
        .into_iter()
        .filter(|p| {
            config
                .group_id
                .as_ref()
                .is_none_or(|group| p.group_id.as_ref() == Some(group))
        })
        .collect();

    let (mode, sides) = if config.is_team_game() {
        (NassauMode::Team, team_sides(ctx, config, &eligible))
    } else {
        let sides: Vec<Side> = eligible
            .iter()
            .map(|p| Side {
                name: p.id.to_string(),
                members: vec![*p],
            })
            .collect();
        (NassauMode::Individual, sides)
    };

    let paying: Vec<&Participant> = sides
        .iter()
        .flat_map(|s| s.members.iter().copied())
        .collect();
    if paying.len() < 2 {
        debug!(
            group = ?config.group_id,
            players = paying.len(),
            "nassau needs at least two players"
        );
        return None;
    }

    let mut winnings_by_golfer = MoneyMap::new();
    let mut stakes_by_golfer = MoneyMap::new();
    for p in &paying {
        winnings_by_golfer.insert(p.id.clone(), 0.0);
        stakes_by_golfer.insert(p.id.clone(), 0.0);
    }

    let mut segments = Vec::with_capacity(Segment::ALL.len());
    for segment in Segment::ALL {
        let fee = config.segment_fee(segment);
        let pot = paying.len() as f64 * fee;
        for p in &paying {
            credit(&mut stakes_by_golfer, &p.id, fee);
        }

        let scores: Vec<SideScore> = sides
            .iter()
            .map(|side| {
                let (score, to_par) = match mode {
                    NassauMode::Individual => {
                        individual_score(ctx, side.members[0], segment, config.net)
                    }
                    NassauMode::Team => team_score(ctx, &side.members, segment, config),
                };
                SideScore {
                    side: side.name.clone(),
                    score,
                    to_par,
                }
            })
            .collect();

        let winners = segment_winners(&scores);
        if winners.is_empty() {
            debug!(?segment, "no side finished the segment, pot unclaimed");
        } else {
            let share = pot / winners.len() as f64;
            for side in sides.iter().filter(|s| winners.contains(&s.name)) {
                let per_member = share / side.members.len() as f64;
                for member in &side.members {
                    credit(&mut winnings_by_golfer, &member.id, per_member);
                }
            }
        }

        segments.push(SegmentResult {
            segment,
            winners,
            scores,
            pot,
            mode,
        });
    }

    Some(NassauResult {
        group_id: config.group_id.clone(),
        mode,
        segments,
        winnings_by_golfer,
        stakes_by_golfer,
    })
}

/// Teams restricted to eligible members. Only golfers on a team pay in.
fn team_sides<'a>(
    ctx: &RoundContext,
    config: &NassauConfig,
    eligible: &[&'a Participant],
) -> Vec<Side<'a>> {
    let mut assigned: HashSet<GolferId, RandomState> = HashSet::default();
    config
        .teams
        .iter()
        .map(|team| {
            let mut members = Vec::with_capacity(team.members.len());
            for identity in &team.members {
                let id = identity.id();
                if !ctx.contains(&id) {
                    warn!(team = %team.name, golfer = %id, "team member not in event");
                    continue;
                }
                if !assigned.insert(id.clone()) {
                    warn!(team = %team.name, golfer = %id, "golfer already on another team");
                    continue;
                }
                if let Some(p) = eligible.iter().find(|p| p.id == id) {
                    members.push(*p);
                }
            }
            Side {
                name: team.name.clone(),
                members,
            }
        })
        .collect()
}

fn individual_score(
    ctx: &RoundContext,
    golfer: &Participant,
    segment: Segment,
    net: bool,
) -> (Option<i32>, Option<i32>) {
    let mut total = 0;
    let mut par = Some(0);
    for hole in segment.holes() {
        let Some(value) = golfer.score(hole, net) else {
            return (None, None);
        };
        total += value;
        par = par.zip(ctx.hole_par(hole)).map(|(acc, p)| acc + p);
    }
    (Some(total), par.map(|p| total - p))
}

/// Best ball: per hole, the sum of the lowest `best_count` member scores.
/// A hole nobody on the team has played leaves the team without a score.
fn team_score(
    ctx: &RoundContext,
    members: &[&Participant],
    segment: Segment,
    config: &NassauConfig,
) -> (Option<i32>, Option<i32>) {
    let best = config.best_count();
    let mut total = 0;
    let mut par = Some(0);
    for hole in segment.holes() {
        let mut values: Vec<i32> = members
            .iter()
            .filter_map(|m| m.score(hole, config.net))
            .collect();
        if values.is_empty() {
            return (None, None);
        }
        values.sort_unstable();
        let used = values.len().min(best);
        total += values[..used].iter().sum::<i32>();
        par = par
            .zip(ctx.hole_par(hole))
            .map(|(acc, p)| acc + p * used as i32);
    }
    (Some(total), par.map(|p| total - p))
}

fn segment_winners(scores: &[SideScore]) -> Vec<String> {
    let Some(low) = scores.iter().filter_map(|s| s.score).min() else {
        return Vec::new();
    };
    scores
        .iter()
        .filter(|s| s.score == Some(low))
        .map(|s| s.side.clone())
        .collect()
}
