use super::OutputType;

#[derive(argh::FromArgs)]
#[argh(
    subcommand,
    name = "recent-games",
    description = "list the games a player recently played"
)]
pub struct Options {
    #[argh(positional, description = "the player uuid")]
    uuid: String,

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
    let games = client.get_recent_games(&options.uuid).await?;

    match options.output_type {
        OutputType::Human => {
            if games.is_empty() {
                println!("No Recent Games");
            }

            for (i, game) in games.iter().enumerate() {
                match game.game() {
                    Some(game_type) => println!("{}) {game_type}", i + 1),
                    None => println!("{}) {}", i + 1, game.game_type),
                }
                if let Some(mode) = game.mode.as_deref() {
                    println!("Mode: {mode}");
                }
                if let Some(map) = game.map.as_deref() {
                    println!("Map: {map}");
                }
                println!("Started: {}", game.date);
                match game.ended {
                    Some(ended) => println!("Ended: {ended}"),
                    None => println!("In Progress"),
                }
                println!();
            }
        }
        OutputType::Json => super::print_json(&games)?,
    }

    Ok(())
}
