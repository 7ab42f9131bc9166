pub mod nassau;
pub mod side_bets;
pub mod skins;

pub use nassau::*;
pub use side_bets::*;
pub use skins::*;

use serde::Serialize;
use std::collections::BTreeMap;

use crate::model::{GolferId, WagerConfig};
use crate::score::RoundContext;

/// Signed amounts per golfer, in the fee currency.
pub type MoneyMap = BTreeMap<GolferId, f64>;

/// Every configured wager that produced a result, grouped by game.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct WagerResults {
    pub nassau: Vec<NassauResult>,
    pub skins: Vec<SkinsResult>,
    pub pinky: Vec<SideBetResult>,
    pub greenie: Vec<SideBetResult>,
}

/// Run each configured wager against the context. Wagers without enough
/// participants are left out rather than failing.
#[must_use]
pub fn run_wagers(ctx: &RoundContext, wagers: &[WagerConfig]) -> WagerResults {
    let mut results = WagerResults::default();
    for wager in wagers {
        match wager {
            WagerConfig::Nassau(config) => {
                results.nassau.extend(calculate_nassau(ctx, config));
            }
            WagerConfig::Skins(config) => {
                results.skins.extend(calculate_skins(ctx, config));
            }
            WagerConfig::Pinky(config) => {
                results
                    .pinky
                    .extend(calculate_side_bet(ctx, SideBet::Pinky, config));
            }
            WagerConfig::Greenie(config) => {
                results
                    .greenie
                    .extend(calculate_side_bet(ctx, SideBet::Greenie, config));
            }
        }
    }
    results
}

fn credit(map: &mut MoneyMap, id: &GolferId, amount: f64) {
    *map.entry(id.clone()).or_insert(0.0) += amount;
}
