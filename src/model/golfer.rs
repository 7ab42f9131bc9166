use serde::{Deserialize, Serialize};
use std::fmt;

/// Map key for a golfer, resolved once per snapshot.
///
/// Profile-backed golfers use their profile id; guests use `guest:<name>`.
/// The `guest:` prefix is reserved, so profile ids may not start with it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct GolferId(String);

pub const GUEST_PREFIX: &str = "guest:";

impl GolferId {
    #[must_use]
    pub fn profile(profile_id: &str) -> Self {
        Self(profile_id.trim().to_string())
    }

    #[must_use]
    pub fn guest(name: &str) -> Self {
        Self(format!("{GUEST_PREFIX}{}", name.trim()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GolferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who a golfer is, as supplied by the event.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GolferIdentity {
    Profile { profile_id: String },
    Guest { name: String },
}

impl GolferIdentity {
    #[must_use]
    pub fn id(&self) -> GolferId {
        match self {
            Self::Profile { profile_id } => GolferId::profile(profile_id),
            Self::Guest { name } => GolferId::guest(name),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Game {
    Nassau,
    Skins,
    Pinky,
    Greenie,
}

/// Which games a golfer has opted into.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum GamePreference {
    #[default]
    All,
    NassauOnly,
    SkinsOnly,
    None,
}

impl GamePreference {
    /// Pinky and Greenie only admit `All`; a skins-only golfer stays out of them.
    #[must_use]
    pub fn admits(self, game: Game) -> bool {
        match self {
            Self::All => true,
            Self::NassauOnly => game == Game::Nassau,
            Self::SkinsOnly => game == Game::Skins,
            Self::None => false,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Golfer {
    pub identity: GolferIdentity,
    #[serde(default)]
    pub handicap_override: Option<f64>,
    #[serde(default)]
    pub tee: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub games: GamePreference,
}

impl Golfer {
    #[must_use]
    pub fn id(&self) -> GolferId {
        self.identity.id()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Profile {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub handicap_index: Option<f64>,
}
