mod client;
mod game_type;
pub mod types;

pub use crate::{
    client::{
        Client,
        Resource,
    },
    game_type::GameType,
    types::{
        AuctionItem,
        AuctionPage,
        Bazaar,
        BazaarItem,
        Booster,
        Boosters,
        Friend,
        GameCounts,
        Guild,
        Key,
        Leaderboard,
        News,
        Player,
        Profile,
        RecentGame,
        Status,
        WatchDog,
    },
};
pub use indexmap::IndexMap;
pub use reqwest::StatusCode;
pub use time::OffsetDateTime;
pub use url::Url;

/// The base url of the api.
pub const BASE_URL: &str = "https://api.hypixel.net/";

/// The `cause` the api sends when the api key is rejected.
const INVALID_API_KEY_CAUSE: &str = "Invalid API key";

/// Result type
pub type HypixelResult<T> = Result<T, Error>;

/// Error Type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reqwest HTTP error
    #[error("{0}")]
    Reqwest(#[from] reqwest::Error),

    /// Json Error
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    /// Url Parse Error
    #[error("{0}")]
    Url(#[from] url::ParseError),

    /// The ratelimit of the given source was reached
    #[error("the {0} api ratelimit was reached")]
    RateLimit(&'static str),

    /// The api key was rejected
    #[error("invalid api key")]
    InvalidApiKey,

    /// The api reported that the request was not successful
    #[error("the api request was not successful{}", DisplayCause(.cause.as_deref()))]
    ApiFailure {
        /// The reason the api gave, if any
        cause: Option<Box<str>>,
    },

    /// A field the response must have is missing
    #[error("the response is missing the \"{0}\" field")]
    MissingField(&'static str),
}

struct DisplayCause<'a>(Option<&'a str>);

impl std::fmt::Display for DisplayCause<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(cause) => write!(f, " ({cause})"),
            None => Ok(()),
        }
    }
}

/// Strip the hyphens from a uuid.
///
/// The api only accepts the undashed form.
pub fn normalize_uuid(uuid: &str) -> String {
    uuid.replace('-', "")
}

/// Calculate a player's network level from their network experience.
///
/// Levels start at 1.
#[allow(clippy::suboptimal_flops)]
pub fn calc_player_level(xp: f64) -> u64 {
    // Fused ops would change the rounding at level boundaries.
    let level = 1.0 + (-8750.0 + (8750.0 * 8750.0 + 5000.0 * xp).sqrt()) / 2500.0;

    // `as` truncates toward zero.
    level as u64
}
