use crate::GameType;

/// A player's online status
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Status {
    /// Whether the player is online
    pub online: bool,

    /// The game type the player is in, like `SKYWARS`.
    ///
    /// Only present when online.
    #[serde(rename = "gameType", default)]
    pub game_type: Option<String>,

    /// The mode of the game
    #[serde(default)]
    pub mode: Option<String>,

    /// The map of the game
    #[serde(default)]
    pub map: Option<String>,
}

impl Status {
    /// Look up metadata for the game type the player is in.
    pub fn game(&self) -> Option<&'static GameType> {
        GameType::from_type_name(self.game_type.as_deref()?)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_online() {
        let status: Status = serde_json::from_str(
            r#"{"online": true, "gameType": "BEDWARS", "mode": "EIGHT_ONE", "map": "Lighthouse"}"#,
        )
        .expect("failed to parse status");

        assert!(status.online);
        assert_eq!(status.mode.as_deref(), Some("EIGHT_ONE"));
        assert_eq!(status.map.as_deref(), Some("Lighthouse"));
        assert_eq!(status.game().map(|game| game.id), Some(58));
    }

    #[test]
    fn parse_offline() {
        let status: Status =
            serde_json::from_str(r#"{"online": false}"#).expect("failed to parse status");

        assert!(!status.online);
        assert!(status.game_type.is_none());
        assert!(status.mode.is_none());
        assert!(status.map.is_none());
        assert!(status.game().is_none());
    }
}
