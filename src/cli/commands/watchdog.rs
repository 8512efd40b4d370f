use super::OutputType;

#[derive(argh::FromArgs)]
#[argh(subcommand, name = "watchdog", description = "get watchdog ban stats")]
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
    let stats = client.get_watchdog_stats().await?;

    match options.output_type {
        OutputType::Human => {
            println!("Last Minute: {}", stats.watchdog_last_minute);
            println!("Staff Rolling Daily: {}", stats.staff_rolling_daily);
            println!("Watchdog Total: {}", stats.watchdog_total);
            println!("Watchdog Rolling Daily: {}", stats.watchdog_rolling_daily);
            println!("Staff Total: {}", stats.staff_total);
        }
        OutputType::Json => super::print_json(&stats)?,
    }

    Ok(())
}
