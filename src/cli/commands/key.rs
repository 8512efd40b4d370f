use super::OutputType;

#[derive(argh::FromArgs)]
#[argh(subcommand, name = "key", description = "get information about an api key")]
pub struct Options {
    #[argh(positional, description = "the key to look up, instead of the configured key")]
    key: Option<String>,

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
    let key = client.get_key_data(options.key.as_deref()).await?;

    match options.output_type {
        OutputType::Human => {
            println!("Key: {}", key.key);
            println!("Owner: {}", key.owner);
            println!("Limit: {} queries/min", key.limit);
            println!("Queries in the past minute: {}", key.queries_in_past_min);
            println!("Total queries: {}", key.total_queries);
        }
        OutputType::Json => super::print_json(&key)?,
    }

    Ok(())
}
