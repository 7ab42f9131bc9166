use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use super::{MoneyMap, credit};
use crate::HOLES;
use crate::model::{Game, GolferId, SkinsConfig};
use crate::score::{Participant, RoundContext};

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct HoleResult {
    pub hole: u8,
    pub winners: Vec<GolferId>,
    /// The hole's stake rolls into the next hole.
    pub carry_into_next: bool,
    /// Amount at stake on the hole (paid out unless carried).
    pub pot_value: f64,
    pub winning_score: Option<i32>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SkinsResult {
    pub net: bool,
    pub carryover: bool,
    pub pot: f64,
    pub hole_results: Vec<HoleResult>,
    /// Gross winnings, not netted against the stake.
    pub winnings_by_golfer: MoneyMap,
    pub winning_holes_by_golfer: BTreeMap<GolferId, Vec<u8>>,
    pub stakes_by_golfer: MoneyMap,
}

/// Settle skins. Returns `None` with fewer than two participants.
#[must_use]
pub fn calculate_skins(ctx: &RoundContext, config: &SkinsConfig) -> Option<SkinsResult> {
    let players = ctx.eligible(Game::Skins, config.participants.as_deref());
    if players.len() < 2 {
        debug!(players = players.len(), "skins needs at least two players");
        return None;
    }

    let pot = players.len() as f64 * config.fee;
    let mut result = SkinsResult {
        net: config.net,
        carryover: config.carryover,
        pot,
        hole_results: Vec::with_capacity(HOLES),
        winnings_by_golfer: players.iter().map(|p| (p.id.clone(), 0.0)).collect(),
        winning_holes_by_golfer: BTreeMap::new(),
        stakes_by_golfer: players.iter().map(|p| (p.id.clone(), config.fee)).collect(),
    };

    if config.carryover {
        settle_with_carryover(&players, config.net, pot, &mut result);
    } else {
        settle_flat(&players, config.net, pot, &mut result);
    }
    Some(result)
}

/// Every skin is worth the same: the pot over the number of skins won.
fn settle_flat(players: &[&Participant], net: bool, pot: f64, result: &mut SkinsResult) {
    let lows: Vec<(Option<i32>, Vec<&Participant>)> =
        (1..=HOLES).map(|hole| low_scorers(players, hole, net)).collect();
    let skins = lows.iter().filter(|(_, winners)| winners.len() == 1).count();
    let skin_value = if skins == 0 { 0.0 } else { pot / skins as f64 };

    for (hole, (winning_score, low)) in (1..=HOLES).zip(lows) {
        let winners: Vec<GolferId> = if low.len() == 1 {
            vec![low[0].id.clone()]
        } else {
            Vec::new()
        };
        for id in &winners {
            award(result, id, hole, skin_value);
        }
        result.hole_results.push(HoleResult {
            hole: hole_number(hole),
            pot_value: if winners.is_empty() { 0.0 } else { skin_value },
            winners,
            carry_into_next: false,
            winning_score,
        });
    }
}

/// The pot is released one eighteenth per hole; ties carry the stake forward
/// and the last hole splits whatever is left among its low scorers.
fn settle_with_carryover(players: &[&Participant], net: bool, pot: f64, result: &mut SkinsResult) {
    let increment = pot / HOLES as f64;
    let mut carry_pot = increment;

    for hole in 1..=HOLES {
        let (winning_score, low) = low_scorers(players, hole, net);
        let last_hole = hole == HOLES;

        let winners: Vec<GolferId> = if low.len() == 1 {
            vec![low[0].id.clone()]
        } else if last_hole && low.is_empty() {
            debug!("nobody finished the last hole, splitting the carry among all players");
            players.iter().map(|p| p.id.clone()).collect()
        } else if last_hole {
            low.iter().map(|p| p.id.clone()).collect()
        } else {
            Vec::new()
        };

        let pot_value = carry_pot;
        if winners.is_empty() {
            carry_pot += increment;
        } else {
            let share = carry_pot / winners.len() as f64;
            for id in &winners {
                award(result, id, hole, share);
            }
            carry_pot = increment;
        }

        result.hole_results.push(HoleResult {
            hole: hole_number(hole),
            carry_into_next: winners.is_empty(),
            winners,
            pot_value,
            winning_score,
        });
    }
}

/// Lowest finite score on a hole and everyone who shot it.
fn low_scorers<'a>(
    players: &[&'a Participant],
    hole: usize,
    net: bool,
) -> (Option<i32>, Vec<&'a Participant>) {
    let Some(low) = players.iter().filter_map(|p| p.score(hole, net)).min() else {
        return (None, Vec::new());
    };
    let winners = players
        .iter()
        .copied()
        .filter(|p| p.score(hole, net) == Some(low))
        .collect();
    (Some(low), winners)
}

fn award(result: &mut SkinsResult, id: &GolferId, hole: usize, amount: f64) {
    credit(&mut result.winnings_by_golfer, id, amount);
    result
        .winning_holes_by_golfer
        .entry(id.clone())
        .or_default()
        .push(hole_number(hole));
}

fn hole_number(hole: usize) -> u8 {
    u8::try_from(hole).unwrap_or(u8::MAX)
}
