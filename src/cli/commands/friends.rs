use super::OutputType;

#[derive(argh::FromArgs)]
#[argh(subcommand, name = "friends", description = "list the friends of a player")]
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
    let friends = client.get_player_friends(&options.uuid).await?;

    match options.output_type {
        OutputType::Human => {
            if friends.is_empty() {
                println!("No Friends");
            }

            for (i, friend) in friends.iter().enumerate() {
                println!("{}) {}", i + 1, friend.other(&options.uuid));
                println!("Since: {}", friend.started);
                println!();
            }
        }
        OutputType::Json => super::print_json(&friends)?,
    }

    Ok(())
}
