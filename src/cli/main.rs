mod commands;
mod config;
mod logger;

use self::config::{
    Config,
    Severity,
};
use anyhow::{
    ensure,
    Context,
};
use std::path::{
    Path,
    PathBuf,
};

/// The config file loaded if none is given and it exists.
const DEFAULT_CONFIG_PATH: &str = "hypixel.toml";

/// The env var checked for an api key if none is given.
const API_KEY_ENV_VAR: &str = "HYPIXEL_API_KEY";

#[derive(argh::FromArgs)]
#[argh(description = "a tool to interact with the hypixel api")]
struct Options {
    #[argh(
        option,
        long = "config",
        short = 'c',
        description = "the config file, defaults to ./hypixel.toml if it exists"
    )]
    config: Option<PathBuf>,

    #[argh(
        option,
        long = "key",
        short = 'k',
        description = "the api key, overriding the config and HYPIXEL_API_KEY"
    )]
    key: Option<String>,

    #[argh(subcommand)]
    subcommand: SubCommand,
}

#[derive(argh::FromArgs)]
#[argh(subcommand)]
enum SubCommand {
    Key(self::commands::key::Options),
    Player(self::commands::player::Options),
    Status(self::commands::status::Options),
    Friends(self::commands::friends::Options),
    RecentGames(self::commands::recent_games::Options),
    Guild(self::commands::guild::Options),
    Boosters(self::commands::boosters::Options),
    Bazaar(self::commands::bazaar::Options),
    Auctions(self::commands::auctions::Options),
    Profile(self::commands::profile::Options),
    Watchdog(self::commands::watchdog::Options),
    Counts(self::commands::counts::Options),
    Leaderboards(self::commands::leaderboards::Options),
    News(self::commands::news::Options),
    Resource(self::commands::resource::Options),
    GameType(self::commands::game_type::Options),
}

fn main() -> anyhow::Result<()> {
    let options: Options = argh::from_env();
    let config = load_config(options.config.as_deref())?;

    logger::setup().context("failed to initialize logger")?;

    let tokio_rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start tokio runtime")?;
    tokio_rt.block_on(async_main(options, config))?;

    Ok(())
}

/// Load and validate the config.
///
/// This prints to the stderr directly, as it runs before the logger is set up.
fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::load_from_path(path)?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            Config::load_from_path(Path::new(DEFAULT_CONFIG_PATH))?
        }
        None => Config::default(),
    };

    let errors = config.validate();
    let mut error_count = 0;
    for e in errors {
        match e.severity() {
            Severity::Warn => {
                eprintln!("validation warning: {}", e.error());
            }
            Severity::Error => {
                eprintln!("validation error: {}", e.error());
                error_count += 1;
            }
        }
    }

    ensure!(
        error_count == 0,
        "config validation failed with {error_count} errors."
    );

    Ok(config)
}

async fn async_main(options: Options, config: Config) -> anyhow::Result<()> {
    let key = config.resolve_key(options.key, std::env::var(API_KEY_ENV_VAR).ok());
    if key.is_none() {
        tracing::warn!("no api key set, only resource endpoints will work");
    }

    let mut client = hypixel::Client::new(key.as_deref());
    if let Some(base_url) = config.base_url()? {
        tracing::info!("using base url \"{base_url}\"");
        client = client.with_base_url(base_url);
    }

    match options.subcommand {
        SubCommand::Key(options) => self::commands::key::exec(&client, options).await?,
        SubCommand::Player(options) => self::commands::player::exec(&client, options).await?,
        SubCommand::Status(options) => self::commands::status::exec(&client, options).await?,
        SubCommand::Friends(options) => self::commands::friends::exec(&client, options).await?,
        SubCommand::RecentGames(options) => {
            self::commands::recent_games::exec(&client, options).await?
        }
        SubCommand::Guild(options) => self::commands::guild::exec(&client, options).await?,
        SubCommand::Boosters(options) => self::commands::boosters::exec(&client, options).await?,
        SubCommand::Bazaar(options) => self::commands::bazaar::exec(&client, options).await?,
        SubCommand::Auctions(options) => self::commands::auctions::exec(&client, options).await?,
        SubCommand::Profile(options) => self::commands::profile::exec(&client, options).await?,
        SubCommand::Watchdog(options) => self::commands::watchdog::exec(&client, options).await?,
        SubCommand::Counts(options) => self::commands::counts::exec(&client, options).await?,
        SubCommand::Leaderboards(options) => {
            self::commands::leaderboards::exec(&client, options).await?
        }
        SubCommand::News(options) => self::commands::news::exec(&client, options).await?,
        SubCommand::Resource(options) => self::commands::resource::exec(&client, options).await?,
        SubCommand::GameType(options) => self::commands::game_type::exec(options)?,
    }

    client.close();

    Ok(())
}
