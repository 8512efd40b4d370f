use super::OutputType;

#[derive(argh::FromArgs)]
#[argh(subcommand, name = "leaderboards", description = "get the lobby leaderboards")]
pub struct Options {
    #[argh(
        positional,
        description = "only show the leaderboards of this game type, like 'BEDWARS'"
    )]
    game_type: Option<String>,

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
    let mut leaderboards = client.get_leaderboards().await?;
    if let Some(game_type) = options.game_type.as_deref() {
        leaderboards.retain(|name, _| name.eq_ignore_ascii_case(game_type));
    }

    match options.output_type {
        OutputType::Human => {
            if leaderboards.is_empty() {
                println!("No Leaderboards");
            }

            for (name, leaderboards) in leaderboards.iter() {
                println!("{name}");
                for leaderboard in leaderboards.iter() {
                    let [x, y, z] = leaderboard.location;
                    println!(
                        "  {} {} ({} at {x}, {y}, {z})",
                        leaderboard.prefix, leaderboard.title, leaderboard.path
                    );
                    for (i, uuid) in leaderboard.leaders.iter().enumerate() {
                        println!("    {}) {uuid}", i + 1);
                    }
                }
                println!();
            }
        }
        OutputType::Json => super::print_json(&leaderboards)?,
    }

    Ok(())
}
