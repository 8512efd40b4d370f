/// Watchdog (anticheat) ban stats
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct WatchDog {
    /// Watchdog bans in the last minute
    #[serde(rename = "watchdog_lastMinute")]
    pub watchdog_last_minute: u64,

    /// Staff bans in the last day
    #[serde(rename = "staff_rollingDaily")]
    pub staff_rolling_daily: u64,

    /// Total watchdog bans
    pub watchdog_total: u64,

    /// Watchdog bans in the last day
    #[serde(rename = "watchdog_rollingDaily")]
    pub watchdog_rolling_daily: u64,

    /// Total staff bans
    pub staff_total: u64,
}
