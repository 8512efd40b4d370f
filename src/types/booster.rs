use crate::GameType;
use time::OffsetDateTime;

/// The active and queued network boosters
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Boosters {
    /// The boosters
    pub boosters: Vec<Booster>,

    /// The booster queue state
    #[serde(rename = "boosterState")]
    pub booster_state: BoosterState,
}

impl Boosters {
    /// Whether the active boosters are currently counting down
    pub fn decrementing(&self) -> bool {
        self.booster_state.decrementing
    }
}

/// The booster queue state
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct BoosterState {
    /// Whether the active boosters are currently counting down
    pub decrementing: bool,
}

/// A network booster
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Booster {
    /// The booster id
    #[serde(rename = "_id")]
    pub id: String,

    /// The uuid of the player that bought the booster
    #[serde(rename = "purchaserUuid")]
    pub purchaser_uuid: String,

    /// The coin multiplier
    pub amount: f64,

    /// The original length, in seconds
    #[serde(rename = "originalLength")]
    pub original_length: i64,

    /// The remaining length, in seconds
    pub length: i64,

    /// The numeric game type id
    #[serde(rename = "gameType")]
    pub game_type: u32,

    /// When the booster was activated
    #[serde(rename = "dateActivated", with = "crate::types::unix_millis")]
    pub date_activated: OffsetDateTime,

    /// Who stacked onto this booster
    #[serde(default)]
    pub stacked: Stacked,
}

impl Booster {
    /// Look up metadata for the game this booster is for.
    pub fn game(&self) -> Option<&'static GameType> {
        GameType::from_id(self.game_type)
    }

    /// Whether this booster is stacked.
    pub fn is_stacked(&self) -> bool {
        self.stacked.is_stacked()
    }
}

/// The stacked state of a booster.
///
/// The api sends either a flag or the list of players that stacked.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum Stacked {
    /// A plain flag
    Flag(bool),

    /// The uuids of the players that stacked
    Players(Vec<String>),
}

impl Stacked {
    /// Whether this is stacked.
    pub fn is_stacked(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Players(players) => !players.is_empty(),
        }
    }
}

impl Default for Stacked {
    fn default() -> Self {
        Self::Flag(false)
    }
}
