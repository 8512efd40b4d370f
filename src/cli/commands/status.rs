use super::OutputType;

#[derive(argh::FromArgs)]
#[argh(subcommand, name = "status", description = "get the online status of a player")]
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
    let status = client.get_player_status(&options.uuid).await?;

    match options.output_type {
        OutputType::Human => {
            if !status.online {
                println!("Offline");
                return Ok(());
            }

            println!("Online");
            match (status.game(), status.game_type.as_deref()) {
                (Some(game), _) => println!("Game: {game}"),
                (None, Some(game_type)) => println!("Game: {game_type}"),
                (None, None) => {}
            }
            if let Some(mode) = status.mode.as_deref() {
                println!("Mode: {mode}");
            }
            if let Some(map) = status.map.as_deref() {
                println!("Map: {map}");
            }
        }
        OutputType::Json => super::print_json(&status)?,
    }

    Ok(())
}
