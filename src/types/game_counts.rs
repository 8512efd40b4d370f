use indexmap::IndexMap;

/// Player counts for every game
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct GameCounts {
    /// Counts by game, like `SKYBLOCK`
    pub games: IndexMap<String, GameCount>,

    /// The total # of players online
    #[serde(rename = "playerCount")]
    pub player_count: u64,
}

/// Player counts for one game
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct GameCount {
    /// The # of players in the game
    pub players: u64,

    /// The # of players per mode
    #[serde(default)]
    pub modes: IndexMap<String, u64>,
}
