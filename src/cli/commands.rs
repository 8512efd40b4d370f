pub mod auctions;
pub mod bazaar;
pub mod boosters;
pub mod counts;
pub mod friends;
pub mod game_type;
pub mod guild;
pub mod key;
pub mod leaderboards;
pub mod news;
pub mod player;
pub mod profile;
pub mod recent_games;
pub mod resource;
pub mod status;
pub mod watchdog;

use std::str::FromStr;

#[derive(Debug)]
pub struct OutputTypeParseError(String);

impl std::fmt::Display for OutputTypeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "'{}' is not valid. Try 'human' or 'json'.", self.0)
    }
}

/// The output type
#[derive(Debug, Clone, Copy)]
pub enum OutputType {
    Human,
    Json,
}

impl FromStr for OutputType {
    type Err = OutputTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "h" | "human" => Ok(Self::Human),
            "j" | "json" => Ok(Self::Json),
            s => Err(OutputTypeParseError(s.into())),
        }
    }
}

/// Print a value as pretty json
pub fn print_json<T>(value: &T) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
