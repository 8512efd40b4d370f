pub mod auction;
pub mod bazaar;
pub mod booster;
pub mod friend;
pub mod game_counts;
pub mod guild;
pub mod key;
pub mod leaderboard;
pub mod news;
pub mod player;
pub mod profile;
pub mod recent_game;
pub mod status;
pub(crate) mod unix_millis;
pub mod watchdog;

pub use self::{
    auction::{
        AuctionItem,
        AuctionPage,
        Bid,
        ItemBytes,
    },
    bazaar::{
        Bazaar,
        BazaarItem,
        BazaarQuickStatus,
        BazaarSummary,
    },
    booster::{
        Booster,
        Boosters,
        Stacked,
    },
    friend::Friend,
    game_counts::{
        GameCount,
        GameCounts,
    },
    guild::{
        Banner,
        BannerPattern,
        BannerValue,
        Guild,
        GuildMember,
        GuildRank,
    },
    key::Key,
    leaderboard::Leaderboard,
    news::News,
    player::Player,
    profile::{
        InvArmor,
        Objective,
        Profile,
        ProfileMember,
        Quest,
    },
    recent_game::RecentGame,
    status::Status,
    watchdog::WatchDog,
};
