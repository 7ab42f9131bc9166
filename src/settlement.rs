use serde::Serialize;
use tracing::warn;

use crate::model::{CourseLookup, EventSnapshot, Profile};
use crate::score::RoundContext;
use crate::wager::{MoneyMap, WagerResults, run_wagers};

/// One balance per golfer across every wager.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct Settlement {
    /// Nassau and Skins gross winnings plus signed Pinky and Greenie owings.
    pub total_by_golfer: MoneyMap,
    /// What each golfer put into Nassau and Skins pots.
    pub stakes_by_golfer: MoneyMap,
    /// `total - stakes`.
    pub net_by_golfer: MoneyMap,
}

/// Merge wager results into per-golfer totals. Every golfer in the event gets
/// an entry, starting from zero.
#[must_use]
pub fn settle(ctx: &RoundContext, results: &WagerResults) -> Settlement {
    let zeroed: MoneyMap = ctx
        .participants()
        .iter()
        .map(|p| (p.id.clone(), 0.0))
        .collect();
    let mut total_by_golfer = zeroed.clone();
    let mut stakes_by_golfer = zeroed;

    let winnings = results
        .nassau
        .iter()
        .map(|r| &r.winnings_by_golfer)
        .chain(results.skins.iter().map(|r| &r.winnings_by_golfer))
        .chain(results.pinky.iter().map(|r| &r.owings_by_golfer))
        .chain(results.greenie.iter().map(|r| &r.owings_by_golfer));
    for map in winnings {
        add_into(&mut total_by_golfer, map);
    }

    let stakes = results
        .nassau
        .iter()
        .map(|r| &r.stakes_by_golfer)
        .chain(results.skins.iter().map(|r| &r.stakes_by_golfer));
    for map in stakes {
        add_into(&mut stakes_by_golfer, map);
    }

    let net_by_golfer = total_by_golfer
        .iter()
        .map(|(id, total)| (id.clone(), total - stakes_by_golfer.get(id).copied().unwrap_or(0.0)))
        .collect();

    Settlement {
        total_by_golfer,
        stakes_by_golfer,
        net_by_golfer,
    }
}

/// Build the round context, run every configured wager and settle them.
#[must_use]
pub fn settle_event(
    event: &EventSnapshot,
    profiles: &[Profile],
    courses: &dyn CourseLookup,
) -> (WagerResults, Settlement) {
    let ctx = RoundContext::build(event, profiles, courses);
    let results = run_wagers(&ctx, &event.wagers);
    let settlement = settle(&ctx, &results);
    (results, settlement)
}

fn add_into(balances: &mut MoneyMap, amounts: &MoneyMap) {
    for (id, amount) in amounts {
        match balances.get_mut(id) {
            Some(balance) => *balance += amount,
            None => warn!(golfer = %id, "wager result names a golfer outside the event"),
        }
    }
}
