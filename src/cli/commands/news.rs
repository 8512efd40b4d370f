use super::OutputType;

#[derive(argh::FromArgs)]
#[argh(subcommand, name = "news", description = "get skyblock news")]
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
    let news = client.get_news().await?;

    match options.output_type {
        OutputType::Human => {
            if news.is_empty() {
                println!("No News");
            }

            for (i, news) in news.iter().enumerate() {
                println!("{}) {}", i + 1, news.title);
                println!("{}", news.text);
                println!("Link: {}", news.link);
                println!();
            }
        }
        OutputType::Json => super::print_json(&news)?,
    }

    Ok(())
}
