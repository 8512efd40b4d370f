use indexmap::IndexMap;
use std::collections::HashMap;
use time::OffsetDateTime;

/// A SkyBlock profile
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Profile {
    /// The profile id
    pub profile_id: String,

    /// The fruit name of the profile, like `Banana`
    #[serde(default)]
    pub cute_name: Option<String>,

    /// The members, by uuid
    pub members: IndexMap<String, ProfileMember>,

    /// Unknown fields
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

impl Profile {
    /// Get a member by uuid.
    pub fn member(&self, uuid: &str) -> Option<&ProfileMember> {
        self.members.get(&crate::normalize_uuid(uuid))
    }
}

/// A member of a SkyBlock profile
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ProfileMember {
    /// The last time the profile was saved
    #[serde(default, with = "crate::types::unix_millis::option")]
    pub last_save: Option<OffsetDateTime>,

    /// Equipped armor
    #[serde(default)]
    pub inv_armor: Option<InvArmor>,

    /// The first time the member joined
    #[serde(default, with = "crate::types::unix_millis::option")]
    pub first_join: Option<OffsetDateTime>,

    /// The first time the member joined the hub, in SkyBlock time
    #[serde(default)]
    pub first_join_hub: Option<i64>,

    /// Stats, by name
    #[serde(default)]
    pub stats: IndexMap<String, f64>,

    /// Objectives, by name
    #[serde(default)]
    pub objectives: IndexMap<String, Objective>,

    /// Completed tutorial steps
    #[serde(default)]
    pub tutorial: Vec<String>,

    /// Quests, by name
    #[serde(default)]
    pub quests: IndexMap<String, Quest>,

    /// Coins in the purse
    #[serde(default)]
    pub coin_purse: f64,

    /// The last time the member died, in SkyBlock time
    #[serde(default)]
    pub last_death: Option<i64>,

    /// Crafted minion generators, like `WHEAT_1`
    #[serde(default)]
    pub crafted_generators: Vec<String>,

    /// Visited zones
    #[serde(default)]
    pub visited_zones: Vec<String>,

    /// Fairy souls collected in total
    #[serde(default)]
    pub fairy_souls_collected: u64,

    /// Fairy souls not yet exchanged
    #[serde(default)]
    pub fairy_souls: u64,

    /// The # of deaths
    #[serde(default)]
    pub death_count: u64,

    /// Slayer boss progress, by boss
    #[serde(default)]
    pub slayer_bosses: IndexMap<String, serde_json::Value>,

    /// Pets
    #[serde(default)]
    pub pets: Vec<serde_json::Value>,

    /// Unknown fields
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

/// Equipped armor
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct InvArmor {
    /// The nbt type
    #[serde(rename = "type")]
    pub kind: u64,

    /// Gzipped, base64-encoded nbt
    pub data: String,
}

/// A SkyBlock objective
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Objective {
    /// The status, like `COMPLETE`
    pub status: String,

    /// The progress
    #[serde(default)]
    pub progress: f64,

    /// When the objective was completed
    #[serde(default, with = "crate::types::unix_millis::option")]
    pub completed_at: Option<OffsetDateTime>,
}

/// A SkyBlock quest
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Quest {
    /// The status, like `ACTIVE`
    pub status: String,

    /// When the quest was activated
    #[serde(default, with = "crate::types::unix_millis::option")]
    pub activated_at: Option<OffsetDateTime>,

    /// When the quest was activated, in SkyBlock time
    #[serde(default)]
    pub activated_at_sb: Option<i64>,

    /// When the quest was completed
    #[serde(default, with = "crate::types::unix_millis::option")]
    pub completed_at: Option<OffsetDateTime>,

    /// When the quest was completed, in SkyBlock time
    #[serde(default)]
    pub completed_at_sb: Option<i64>,
}

impl Quest {
    /// Whether the quest is complete
    pub fn is_complete(&self) -> bool {
        self.status == "COMPLETE"
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const PROFILE: &str = include_str!("../../test_data/profile.json");

    #[derive(serde::Deserialize)]
    struct Response {
        profile: Profile,
    }

    #[test]
    fn parse() {
        let profile = serde_json::from_str::<Response>(PROFILE)
            .expect("failed to parse")
            .profile;

        assert_eq!(profile.profile_id, "f7c77d999f154a66a87dc4a51ef30d19");
        assert_eq!(profile.cute_name.as_deref(), Some("Banana"));
        assert_eq!(
            profile.members.keys().collect::<Vec<_>>(),
            [
                "f7c77d999f154a66a87dc4a51ef30d19",
                "20934ef9488c465180a78f861586b4cf"
            ]
        );

        let member = profile
            .member("f7c77d99-9f15-4a66-a87d-c4a51ef30d19")
            .expect("missing member");
        assert_eq!(
            member.last_save.map(|date| date.unix_timestamp()),
            Some(1_590_000_000)
        );
        assert_eq!(member.inv_armor.as_ref().map(|armor| armor.kind), Some(0));
        assert_eq!(member.stats["deaths"], 12.0);
        assert_eq!(member.objectives["collect_log"].status, "COMPLETE");
        assert!(member.objectives["collect_log"].completed_at.is_some());
        assert!(member.quests["explore_hub"].is_complete());
        assert!(!member.quests["talk_to_banker"].is_complete());
        assert!(member.quests["talk_to_banker"].completed_at.is_none());
        assert_eq!(member.coin_purse, 1_234.5);
        assert_eq!(member.fairy_souls_collected, 20);
        assert_eq!(member.death_count, 12);
        assert_eq!(member.visited_zones, ["village", "farm"]);

        // A coop member that never saved anything.
        let other = profile
            .member("20934ef9488c465180a78f861586b4cf")
            .expect("missing member");
        assert!(other.last_save.is_none());
        assert!(other.quests.is_empty());
        assert_eq!(other.coin_purse, 0.0);
    }
}
