use super::OutputType;

#[derive(argh::FromArgs)]
#[argh(subcommand, name = "counts", description = "get the # of players online")]
pub struct Options {
    #[argh(
        switch,
        long = "total",
        description = "only get the total # of players"
    )]
    total: bool,

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
    if options.total {
        let player_count = client.get_player_count().await?;
        match options.output_type {
            OutputType::Human => println!("Players: {player_count}"),
            OutputType::Json => super::print_json(&player_count)?,
        }

        return Ok(());
    }

    let counts = client.get_game_counts().await?;
    match options.output_type {
        OutputType::Human => {
            println!("Players: {}", counts.player_count);
            println!();

            for (name, count) in counts.games.iter() {
                println!("{name}: {}", count.players);
                for (mode, players) in count.modes.iter() {
                    println!("  {mode}: {players}");
                }
            }
        }
        OutputType::Json => super::print_json(&counts)?,
    }

    Ok(())
}
