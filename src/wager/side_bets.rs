use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use super::{MoneyMap, credit};
use crate::model::{Game, GolferId, SideBetConfig};
use crate::score::{Participant, RoundContext};

/// Declared-count side bets settled after the round.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SideBet {
    /// The declarer pays everyone else.
    Pinky,
    /// Everyone else pays the declarer.
    Greenie,
}

impl SideBet {
    fn game(self) -> Game {
        match self {
            Self::Pinky => Game::Pinky,
            Self::Greenie => Game::Greenie,
        }
    }

    fn declared(self, golfer: &Participant) -> u32 {
        match self {
            Self::Pinky => golfer.pinkies,
            Self::Greenie => golfer.greenies,
        }
    }

    /// Sign applied to the declarer's side of each transfer.
    fn declarer_sign(self) -> f64 {
        match self {
            Self::Pinky => -1.0,
            Self::Greenie => 1.0,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SideBetResult {
    pub kind: SideBet,
    pub fee: f64,
    pub counts_by_golfer: BTreeMap<GolferId, u32>,
    /// Signed balances. Sums to exactly zero when `fee` is exactly representable
    /// as an f64 (whole or power-of-two fractions); otherwise to within rounding.
    pub owings_by_golfer: MoneyMap,
}

/// Settle a Pinky or Greenie.
///
/// Each declared occurrence moves `fee` between the declarer and every other
/// eligible golfer, so a declarer with count `c` and `k` opponents moves
/// `c * fee * k` in total. Returns `None` with fewer than two participants.
#[must_use]
pub fn calculate_side_bet(
    ctx: &RoundContext,
    kind: SideBet,
    config: &SideBetConfig,
) -> Option<SideBetResult> {
    let players = ctx.eligible(kind.game(), config.participants.as_deref());
    if players.len() < 2 {
        debug!(?kind, players = players.len(), "side bet needs at least two players");
        return None;
    }

    let mut counts_by_golfer = BTreeMap::new();
    let mut owings_by_golfer: MoneyMap = players.iter().map(|p| (p.id.clone(), 0.0)).collect();
    for declarer in &players {
        let count = kind.declared(declarer);
        counts_by_golfer.insert(declarer.id.clone(), count);
        if count == 0 {
            continue;
        }

        let amount = f64::from(count) * config.fee * kind.declarer_sign();
        for other in players.iter().filter(|p| p.id != declarer.id) {
            credit(&mut owings_by_golfer, &declarer.id, amount);
            credit(&mut owings_by_golfer, &other.id, -amount);
        }
    }

    Some(SideBetResult {
        kind,
        fee: config.fee,
        counts_by_golfer,
        owings_by_golfer,
    })
}
