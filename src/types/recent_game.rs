use crate::GameType;
use time::OffsetDateTime;

/// A game a player recently played
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct RecentGame {
    /// When the game started
    #[serde(with = "crate::types::unix_millis")]
    pub date: OffsetDateTime,

    /// The game type, like `BEDWARS`
    #[serde(rename = "gameType")]
    pub game_type: String,

    /// The mode
    #[serde(alias = "Mode", default)]
    pub mode: Option<String>,

    /// The map
    #[serde(default)]
    pub map: Option<String>,

    /// When the game ended.
    ///
    /// Missing if the game is still in progress.
    #[serde(default, with = "crate::types::unix_millis::option")]
    pub ended: Option<OffsetDateTime>,
}

impl RecentGame {
    /// Look up metadata for this game type.
    pub fn game(&self) -> Option<&'static GameType> {
        GameType::from_type_name(&self.game_type)
    }

    /// Whether this game is still being played.
    pub fn in_progress(&self) -> bool {
        self.ended.is_none()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const RECENT_GAMES: &str = include_str!("../../test_data/recent_games.json");

    #[derive(serde::Deserialize)]
    struct Response {
        games: Vec<RecentGame>,
    }

    #[test]
    fn parse() {
        let response: Response = serde_json::from_str(RECENT_GAMES).expect("failed to parse");
        let games = response.games;
        assert_eq!(games.len(), 2);

        let finished = &games[0];
        assert_eq!(finished.game_type, "BEDWARS");
        assert_eq!(finished.mode.as_deref(), Some("EIGHT_TWO"));
        assert_eq!(finished.map.as_deref(), Some("Aquarium"));
        assert_eq!(finished.date.unix_timestamp(), 1_609_459_200);
        assert_eq!(
            finished.ended.map(|ended| ended.unix_timestamp()),
            Some(1_609_460_100)
        );
        assert!(!finished.in_progress());
        assert_eq!(finished.game().map(|game| game.clean_name), Some("Bed Wars"));

        let in_progress = &games[1];
        assert_eq!(in_progress.game_type, "SKYWARS");
        assert!(in_progress.in_progress());
    }
}
