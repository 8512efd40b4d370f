use super::OutputType;

#[derive(argh::FromArgs)]
#[argh(subcommand, name = "boosters", description = "list the network boosters")]
pub struct Options {
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
    let boosters = client.get_boosters().await?;

    match options.output_type {
        OutputType::Human => {
            println!("Decrementing: {}", boosters.decrementing());
            println!();

            for (i, booster) in boosters.boosters.iter().enumerate() {
                match booster.game() {
                    Some(game) => println!("{}) {game}", i + 1),
                    None => println!("{}) Game Type {}", i + 1, booster.game_type),
                }
                println!("Purchaser: {}", booster.purchaser_uuid);
                println!("Multiplier: {}x", booster.amount);
                println!(
                    "Length: {}s / {}s",
                    booster.length, booster.original_length
                );
                println!("Activated: {}", booster.date_activated);
                println!("Stacked: {}", booster.is_stacked());
                println!();
            }
        }
        OutputType::Json => super::print_json(&boosters)?,
    }

    Ok(())
}
