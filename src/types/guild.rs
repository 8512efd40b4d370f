use indexmap::IndexMap;
use std::collections::HashMap;
use time::OffsetDateTime;

/// A guild
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Guild {
    /// The guild id
    #[serde(rename = "_id")]
    pub id: String,

    /// When the guild was created
    #[serde(with = "crate::types::unix_millis")]
    pub created: OffsetDateTime,

    /// The name
    pub name: String,

    /// The lowercase name
    pub name_lower: String,

    /// The description
    #[serde(default)]
    pub description: Option<String>,

    /// The tag shown next to member names
    #[serde(default)]
    pub tag: Option<String>,

    /// The color of the tag, like `GRAY`
    #[serde(rename = "tagColor", default)]
    pub tag_color: Option<String>,

    /// Guild experience
    pub exp: u64,

    /// The members
    pub members: Vec<GuildMember>,

    /// Guild achievements, by name
    #[serde(default)]
    pub achievements: IndexMap<String, u64>,

    /// Custom ranks
    #[serde(default)]
    pub ranks: Vec<GuildRank>,

    /// Whether players may join without an invite
    #[serde(default)]
    pub joinable: Option<bool>,

    /// The legacy guild ranking
    #[serde(rename = "legacyRanking", default)]
    pub legacy_ranking: Option<u64>,

    /// Whether the guild is publicly listed
    #[serde(rename = "publiclyListed", default)]
    pub publicly_listed: Option<bool>,

    /// Whether the guild master tag is hidden
    #[serde(rename = "hideGmTag", default)]
    pub hide_gm_tag: Option<bool>,

    /// Preferred game types
    #[serde(rename = "preferredGames", default)]
    pub preferred_games: Vec<String>,

    /// When guild chat gets unmuted
    #[serde(rename = "chatMute", default, with = "crate::types::unix_millis::option")]
    pub chat_mute: Option<OffsetDateTime>,

    /// Experience earned per game type
    #[serde(rename = "guildExpByGameType", default)]
    pub guild_exp_by_game_type: IndexMap<String, u64>,

    /// The banner
    #[serde(default)]
    pub banner: Option<Banner>,

    /// Unknown fields
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

impl Guild {
    /// Find a member by uuid.
    pub fn member(&self, uuid: &str) -> Option<&GuildMember> {
        let uuid = crate::normalize_uuid(uuid);
        self.members.iter().find(|member| member.uuid == uuid)
    }

    /// Find a rank by name.
    pub fn rank(&self, name: &str) -> Option<&GuildRank> {
        self.ranks.iter().find(|rank| rank.name == name)
    }
}

/// A guild member
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct GuildMember {
    /// The player uuid
    pub uuid: String,

    /// The rank name
    pub rank: String,

    /// When the member joined
    #[serde(with = "crate::types::unix_millis")]
    pub joined: OffsetDateTime,

    /// Experience earned for the guild, by day, like `2021-01-31`
    #[serde(rename = "expHistory", default)]
    pub exp_history: IndexMap<String, u64>,

    /// The # of guild quests participated in
    #[serde(rename = "questParticipation", default)]
    pub quest_participation: Option<u64>,

    /// When the member gets unmuted
    #[serde(rename = "mutedTill", default, with = "crate::types::unix_millis::option")]
    pub muted_till: Option<OffsetDateTime>,
}

impl GuildMember {
    /// Get the experience earned over the days in the history.
    pub fn weekly_exp(&self) -> u64 {
        self.exp_history.values().sum()
    }
}

/// A custom guild rank
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct GuildRank {
    /// The name
    pub name: String,

    /// Whether new members get this rank
    pub default: bool,

    /// When the rank was created
    #[serde(with = "crate::types::unix_millis")]
    pub created: OffsetDateTime,

    /// The sort priority
    pub priority: u64,

    /// The tag shown next to member names
    #[serde(default)]
    pub tag: Option<String>,
}

/// A guild banner
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Banner {
    /// The base color
    #[serde(rename = "Base")]
    pub base: BannerValue,

    /// The pattern layers
    #[serde(rename = "Patterns", default)]
    pub patterns: Vec<BannerPattern>,
}

/// A guild banner pattern layer
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct BannerPattern {
    /// The pattern code, like `bs`
    #[serde(rename = "Pattern")]
    pub pattern: String,

    /// The color
    #[serde(rename = "Color")]
    pub color: BannerValue,
}

/// A banner value.
///
/// The api is not consistent about whether these are numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum BannerValue {
    /// A number
    Int(i64),

    /// A string
    String(String),
}

impl BannerValue {
    /// Try to get this as a number, parsing it if it is a string.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::String(s) => s.parse().ok(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const GUILD: &str = include_str!("../../test_data/guild.json");

    #[derive(serde::Deserialize)]
    struct Response {
        guild: Guild,
    }

    #[test]
    fn parse() {
        let guild = serde_json::from_str::<Response>(GUILD)
            .expect("failed to parse")
            .guild;

        assert_eq!(guild.id, "553490650cf26f12ae5bac8f");
        assert_eq!(guild.name, "Mini Squid");
        assert_eq!(guild.tag.as_deref(), Some("MS"));
        assert_eq!(guild.members.len(), 2);
        assert_eq!(guild.ranks.len(), 2);
        assert_eq!(guild.achievements["WINNERS"], 1_221);
        assert_eq!(guild.guild_exp_by_game_type["BEDWARS"], 20_000);
        assert!(guild.chat_mute.is_none());

        let member = guild
            .member("f7c77d99-9f15-4a66-a87d-c4a51ef30d19")
            .expect("missing member");
        assert_eq!(member.rank, "Guild Master");
        assert_eq!(member.joined.unix_timestamp(), 1_430_425_192);
        assert_eq!(member.weekly_exp(), 1_500);
        assert_eq!(
            member.exp_history.keys().collect::<Vec<_>>(),
            ["2021-01-31", "2021-01-30", "2021-01-29"]
        );

        let officer = guild.rank("Officer").expect("missing rank");
        assert!(!officer.default);
        assert_eq!(officer.priority, 3);

        let banner = guild.banner.as_ref().expect("missing banner");
        assert_eq!(banner.base.as_i64(), Some(15));
        assert_eq!(banner.patterns.len(), 2);
        assert_eq!(banner.patterns[0].pattern, "bs");
        assert_eq!(banner.patterns[0].color, BannerValue::String("0".into()));
        assert_eq!(banner.patterns[1].color, BannerValue::Int(4));
    }
}
