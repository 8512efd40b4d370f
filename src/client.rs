use crate::{
    types::{
        AuctionItem,
        AuctionPage,
        Bazaar,
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
    Error,
    HypixelResult,
};
use indexmap::IndexMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::{
    Map,
    Value,
};
use std::sync::Arc;
use url::Url;

/// A resource endpoint.
///
/// These do not need an api key.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Resource {
    /// Achievements
    Achievements,
    /// Challenges
    Challenges,
    /// Quests
    Quests,
    /// Guild achievements
    GuildAchievements,
    /// Guild permissions
    GuildPermissions,
    /// SkyBlock collections
    SkyBlockCollections,
    /// SkyBlock skills
    SkyBlockSkills,
}

impl Resource {
    /// Get the path of this resource, relative to the api base url.
    pub fn path(self) -> &'static str {
        match self {
            Self::Achievements => "resources/achievements",
            Self::Challenges => "resources/challenges",
            Self::Quests => "resources/quests",
            Self::GuildAchievements => "resources/guilds/achievements",
            Self::GuildPermissions => "resources/guilds/permissions",
            Self::SkyBlockCollections => "resources/skyblock/collections",
            Self::SkyBlockSkills => "resources/skyblock/skills",
        }
    }
}

/// Hypixel api client
#[derive(Debug, Clone)]
pub struct Client {
    /// The inner http client
    pub client: reqwest::Client,

    /// The api key
    api_key: Option<Arc<str>>,

    /// The url paths are joined onto
    base_url: Url,
}

impl Client {
    /// Make a new client.
    ///
    /// Only the resource endpoints work without an api key.
    pub fn new(api_key: Option<&str>) -> Self {
        Self::with_client(reqwest::Client::new(), api_key)
    }

    /// Make a new client that uses the given http client.
    pub fn with_client(client: reqwest::Client, api_key: Option<&str>) -> Self {
        Self {
            client,
            api_key: api_key.map(Arc::from),
            base_url: Url::parse(crate::BASE_URL).expect("invalid base url"),
        }
    }

    /// Send requests to a different host.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Get the configured api key.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Release this client's handle on the http session.
    ///
    /// Dropping the client does the same.
    /// The session stays open while clones of this client or an injected http client remain.
    pub fn close(self) {
        tracing::debug!("closing hypixel client");
        drop(self);
    }

    /// Get the raw json object for an api path.
    ///
    /// The api key is attached if one is configured.
    ///
    /// # Errors
    /// This fails, in order, if:
    /// 1. The api responds with 429 Too Many Requests
    /// 2. The api rejects the api key
    /// 3. The api reports that the request was not successful
    pub async fn get(&self, path: &str, params: &[(&str, &str)]) -> HypixelResult<Map<String, Value>> {
        self.get_with_key(path, params, self.api_key.as_deref())
            .await
    }

    async fn get_with_key(
        &self,
        path: &str,
        params: &[(&str, &str)],
        api_key: Option<&str>,
    ) -> HypixelResult<Map<String, Value>> {
        let mut url = self.base_url.join(path)?;
        {
            let mut query_pairs = url.query_pairs_mut();
            query_pairs.extend_pairs(params);
            if let Some(api_key) = api_key {
                query_pairs.append_pair("key", api_key);
            }
        }

        tracing::debug!(path, "sending hypixel api request");
        let res = self.client.get(url.as_str()).send().await?;
        let status = res.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            tracing::warn!(path, "hypixel api ratelimit reached");
            return Err(Error::RateLimit("Hypixel"));
        }

        let text = res.text().await?;
        let data: Map<String, Value> = serde_json::from_str(&text)?;

        let cause = data.get("cause").and_then(Value::as_str);
        if cause == Some(crate::INVALID_API_KEY_CAUSE) {
            tracing::warn!(path, "hypixel api key rejected");
            return Err(Error::InvalidApiKey);
        }

        match data.get("success") {
            Some(Value::Bool(true)) => {}
            Some(Value::Bool(false)) => {
                tracing::debug!(path, %status, ?cause, "hypixel api request failed");
                return Err(Error::ApiFailure {
                    cause: cause.map(Into::into),
                });
            }
            _ => return Err(Error::MissingField("success")),
        }

        Ok(data)
    }

    /// Get an api path and decode the whole object.
    async fn get_json<T>(&self, path: &str, params: &[(&str, &str)]) -> HypixelResult<T>
    where
        T: DeserializeOwned,
    {
        let data = self.get(path, params).await?;
        Ok(serde_json::from_value(Value::Object(data))?)
    }

    /// Get an api path and decode the given field.
    async fn get_field<T>(
        &self,
        path: &str,
        params: &[(&str, &str)],
        field: &'static str,
    ) -> HypixelResult<T>
    where
        T: DeserializeOwned,
    {
        let data = self.get(path, params).await?;
        take_field(data, field)
    }

    /// Get watchdog ban stats.
    pub async fn get_watchdog_stats(&self) -> HypixelResult<WatchDog> {
        self.get_json("watchdogstats", &[]).await
    }

    /// Get information about an api key.
    ///
    /// Uses the configured key if `key` is `None`.
    pub async fn get_key_data(&self, key: Option<&str>) -> HypixelResult<Key> {
        let key = key
            .filter(|key| !key.is_empty())
            .or(self.api_key.as_deref());
        let data = self.get_with_key("key", &[], key).await?;
        take_field(data, "record")
    }

    /// Get the active and queued network boosters.
    pub async fn get_boosters(&self) -> HypixelResult<Boosters> {
        self.get_json("boosters", &[]).await
    }

    /// Get the # of players online.
    pub async fn get_player_count(&self) -> HypixelResult<u64> {
        self.get_field("playerCount", &[], "playerCount").await
    }

    /// Get SkyBlock news.
    pub async fn get_news(&self) -> HypixelResult<Vec<News>> {
        self.get_field("skyblock/news", &[], "items").await
    }

    /// Get a player's online status.
    pub async fn get_player_status(&self, uuid: &str) -> HypixelResult<Status> {
        let uuid = crate::normalize_uuid(uuid);
        self.get_field("status", &[("uuid", uuid.as_str())], "session")
            .await
    }

    /// Get a player's friends.
    pub async fn get_player_friends(&self, uuid: &str) -> HypixelResult<Vec<Friend>> {
        let uuid = crate::normalize_uuid(uuid);
        self.get_field("friends", &[("uuid", uuid.as_str())], "records")
            .await
    }

    /// Get the SkyBlock bazaar.
    pub async fn get_bazaar(&self) -> HypixelResult<Bazaar> {
        self.get_json("skyblock/bazaar", &[]).await
    }

    /// Get a page of active SkyBlock auctions.
    ///
    /// Pages start at 0.
    pub async fn get_auctions(&self, page: u64) -> HypixelResult<AuctionPage> {
        let mut page_buffer = itoa::Buffer::new();
        self.get_json("skyblock/auctions", &[("page", page_buffer.format(page))])
            .await
    }

    /// Get the games a player recently played, newest first.
    pub async fn get_recent_games(&self, uuid: &str) -> HypixelResult<Vec<RecentGame>> {
        let uuid = crate::normalize_uuid(uuid);
        self.get_field("recentGames", &[("uuid", uuid.as_str())], "games")
            .await
    }

    /// Get a player.
    pub async fn get_player(&self, uuid: &str) -> HypixelResult<Player> {
        let uuid = crate::normalize_uuid(uuid);
        self.get_field("player", &[("uuid", uuid.as_str())], "player")
            .await
    }

    /// Find the id of a guild by name.
    ///
    /// Returns `None` if there is no such guild.
    pub async fn find_guild_by_name(&self, name: &str) -> HypixelResult<Option<String>> {
        self.get_field("findGuild", &[("byName", name)], "guild")
            .await
    }

    /// Find the id of the guild a player is in.
    ///
    /// Returns `None` if the player is not in a guild.
    pub async fn find_guild_by_uuid(&self, uuid: &str) -> HypixelResult<Option<String>> {
        let uuid = crate::normalize_uuid(uuid);
        self.get_field("findGuild", &[("byUuid", uuid.as_str())], "guild")
            .await
    }

    /// Get a guild by name.
    pub async fn get_guild_by_name(&self, name: &str) -> HypixelResult<Guild> {
        self.get_field("guild", &[("name", name)], "guild").await
    }

    /// Get a guild by id.
    pub async fn get_guild_by_id(&self, id: &str) -> HypixelResult<Guild> {
        self.get_field("guild", &[("id", id)], "guild").await
    }

    /// Get the guild a player is in.
    pub async fn get_guild_by_player(&self, uuid: &str) -> HypixelResult<Guild> {
        let uuid = crate::normalize_uuid(uuid);
        self.get_field("guild", &[("player", uuid.as_str())], "guild")
            .await
    }

    /// Get a SkyBlock auction by its uuid.
    pub async fn get_auction_from_uuid(&self, uuid: &str) -> HypixelResult<Vec<AuctionItem>> {
        let uuid = crate::normalize_uuid(uuid);
        self.get_field("skyblock/auction", &[("uuid", uuid.as_str())], "auctions")
            .await
    }

    /// Get the SkyBlock auctions of a player.
    pub async fn get_auction_from_player(&self, uuid: &str) -> HypixelResult<Vec<AuctionItem>> {
        let uuid = crate::normalize_uuid(uuid);
        self.get_field("skyblock/auction", &[("player", uuid.as_str())], "auctions")
            .await
    }

    /// Get the SkyBlock auctions of a profile.
    pub async fn get_auction_from_profile(
        &self,
        profile_id: &str,
    ) -> HypixelResult<Vec<AuctionItem>> {
        let profile_id = crate::normalize_uuid(profile_id);
        self.get_field("skyblock/auction", &[("profile", profile_id.as_str())], "auctions")
            .await
    }

    /// Get a SkyBlock profile by id.
    pub async fn get_profile(&self, profile_id: &str) -> HypixelResult<Profile> {
        let profile_id = crate::normalize_uuid(profile_id);
        self.get_field("skyblock/profile", &[("profile", profile_id.as_str())], "profile")
            .await
    }

    /// Get all SkyBlock profiles of a player.
    pub async fn get_profiles(&self, uuid: &str) -> HypixelResult<Vec<Profile>> {
        let uuid = crate::normalize_uuid(uuid);
        let profiles: Option<Vec<Profile>> = self
            .get_field("skyblock/profiles", &[("uuid", uuid.as_str())], "profiles")
            .await?;

        // The api sends null for players that never played SkyBlock.
        Ok(profiles.unwrap_or_default())
    }

    /// Get the player counts of every game.
    pub async fn get_game_counts(&self) -> HypixelResult<GameCounts> {
        self.get_json("gameCounts", &[]).await
    }

    /// Get the lobby leaderboards, by game.
    pub async fn get_leaderboards(&self) -> HypixelResult<IndexMap<String, Vec<Leaderboard>>> {
        self.get_field("leaderboards", &[], "leaderboards").await
    }

    /// Get a resource.
    ///
    /// The shape of each resource is left to the caller.
    pub async fn get_resource(&self, resource: Resource) -> HypixelResult<Map<String, Value>> {
        let mut data = self.get(resource.path(), &[]).await?;
        data.remove("success");
        Ok(data)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Decode the given field of a response.
fn take_field<T>(mut data: Map<String, Value>, field: &'static str) -> HypixelResult<T>
where
    T: DeserializeOwned,
{
    let value = data.remove(field).ok_or(Error::MissingField(field))?;
    Ok(serde_json::from_value(value)?)
}
