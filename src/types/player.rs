use std::collections::HashMap;
use time::OffsetDateTime;

/// A player
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Player {
    /// The database id
    #[serde(rename = "_id")]
    pub id: String,

    /// The undashed uuid
    pub uuid: String,

    /// The name as it should be displayed
    pub displayname: String,

    /// The lowercase name
    #[serde(default)]
    pub playername: Option<String>,

    /// The first time the player joined
    #[serde(rename = "firstLogin", with = "crate::types::unix_millis")]
    pub first_login: OffsetDateTime,

    /// The last time the player joined.
    ///
    /// Players may hide this.
    #[serde(
        rename = "lastLogin",
        default,
        with = "crate::types::unix_millis::option"
    )]
    pub last_login: Option<OffsetDateTime>,

    /// The last time the player left.
    ///
    /// Players may hide this.
    #[serde(
        rename = "lastLogout",
        default,
        with = "crate::types::unix_millis::option"
    )]
    pub last_logout: Option<OffsetDateTime>,

    /// Names this player has used
    #[serde(rename = "knownAliases", default)]
    pub known_aliases: Vec<String>,

    /// Lowercase names this player has used
    #[serde(rename = "knownAliasesLower", default)]
    pub known_aliases_lower: Vec<String>,

    /// Completed one time achievements
    #[serde(rename = "achievementsOneTime", default)]
    pub achievements_one_time: Vec<String>,

    /// The resource pack version
    #[serde(rename = "mcVersionRp", default)]
    pub mc_version_rp: Option<String>,

    /// The network experience
    #[serde(rename = "networkExp", default)]
    pub network_exp: f64,

    /// Karma
    #[serde(default)]
    pub karma: u64,

    /// Whether the player always flies while spectating
    #[serde(default)]
    pub spec_always_flying: Option<bool>,

    /// The last time an ad was generated
    #[serde(
        rename = "lastAdsenseGenerateTime",
        default,
        with = "crate::types::unix_millis::option"
    )]
    pub last_adsense_generate_time: Option<OffsetDateTime>,

    /// The last time a daily reward was claimed
    #[serde(
        rename = "lastClaimedReward",
        default,
        with = "crate::types::unix_millis::option"
    )]
    pub last_claimed_reward: Option<OffsetDateTime>,

    /// The total # of rewards claimed
    #[serde(rename = "totalRewards", default)]
    pub total_rewards: u64,

    /// The total # of daily rewards claimed
    #[serde(rename = "totalDailyRewards", default)]
    pub total_daily_rewards: u64,

    /// The current daily reward streak
    #[serde(rename = "rewardStreak", default)]
    pub reward_streak: u64,

    /// The current daily reward score
    #[serde(rename = "rewardScore", default)]
    pub reward_score: u64,

    /// The best daily reward streak
    #[serde(rename = "rewardHighScore", default)]
    pub reward_high_score: u64,

    /// Uuids of players with pending friend requests
    #[serde(rename = "friendRequestsUuid", default)]
    pub friend_requests_uuid: Vec<String>,

    /// The last network update book seen
    #[serde(default)]
    pub network_update_book: Option<String>,

    /// Tracked achievements
    #[serde(rename = "achievementTracking", default)]
    pub achievement_tracking: Vec<String>,

    /// Achievement points
    #[serde(rename = "achievementPoints", default)]
    pub achievement_points: u64,

    /// The selected gadget
    #[serde(rename = "currentGadget", default)]
    pub current_gadget: Option<String>,

    /// The chat channel
    #[serde(default)]
    pub channel: Option<String>,

    /// The last game type played, like `BEDWARS`
    #[serde(rename = "mostRecentGameType", default)]
    pub most_recent_game_type: Option<String>,

    /// Unknown fields, like stats
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

impl Player {
    /// Get the network level.
    pub fn level(&self) -> u64 {
        crate::calc_player_level(self.network_exp)
    }

    /// Look up metadata for the last game type played.
    pub fn most_recent_game(&self) -> Option<&'static crate::GameType> {
        crate::GameType::from_type_name(self.most_recent_game_type.as_deref()?)
    }

    /// Get the stats object for a game, by database name.
    pub fn stats(&self, database_name: &str) -> Option<&serde_json::Value> {
        self.unknown.get("stats")?.get(database_name)
    }
}
