use super::OutputType;
use anyhow::Context;

#[derive(argh::FromArgs)]
#[argh(subcommand, name = "player", description = "get a player")]
pub struct Options {
    #[argh(positional, description = "the player uuid")]
    uuid: String,

    #[argh(
        option,
        long = "stats",
        short = 's',
        description = "print the stats of a game, by database name, like 'Bedwars'"
    )]
    stats: Option<String>,

    #[argh(
        option,
        long = "output-type",
        short = 't',
        default = "OutputType::Human",
        description = "the output type"
    )]
    output_type: OutputType,
}

pub async fn exec(client: &hypixel::Client, options: Options) -> anyhow::Result<()> {
    let player = client
        .get_player(&options.uuid)
        .await
        .with_context(|| format!("failed to get player '{}'", options.uuid))?;

    if let Some(database_name) = options.stats.as_deref() {
        let stats = player
            .stats(database_name)
            .with_context(|| format!("'{}' has no {database_name} stats", player.displayname))?;
        return super::print_json(stats);
    }

    match options.output_type {
        OutputType::Human => {
            println!("Name: {}", player.displayname);
            println!("Uuid: {}", player.uuid);
            println!("Level: {}", player.level());
            println!("First Login: {}", player.first_login);
            if let Some(last_login) = player.last_login {
                println!("Last Login: {last_login}");
            }
            if let Some(game) = player.most_recent_game() {
                println!("Most Recent Game: {game}");
            }
            if !player.known_aliases.is_empty() {
                println!("Known Aliases: {}", player.known_aliases.join(", "));
            }
            println!("Karma: {}", player.karma);
            println!("Achievement Points: {}", player.achievement_points);
        }
        OutputType::Json => super::print_json(&player)?,
    }

    Ok(())
}
