use super::OutputType;
use anyhow::Context;

#[derive(argh::FromArgs)]
#[argh(subcommand, name = "bazaar", description = "get the skyblock bazaar")]
pub struct Options {
    #[argh(
        positional,
        description = "the product to show, like 'ENCHANTED_SNOW_BLOCK'"
    )]
    product: Option<String>,

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
    let bazaar = client.get_bazaar().await?;

    let product_id = match options.product.as_deref() {
        Some(product_id) => product_id,
        None => {
            match options.output_type {
                OutputType::Human => {
                    if let Some(last_updated) = bazaar.last_updated {
                        println!("Last Updated: {last_updated}");
                    }
                    for item in bazaar.items() {
                        let status = &item.quick_status;
                        println!(
                            "{}: buy {:.1}, sell {:.1}",
                            item.product_id, status.buy_price, status.sell_price
                        );
                    }
                }
                OutputType::Json => super::print_json(&bazaar)?,
            }

            return Ok(());
        }
    };

    let item = bazaar
        .get(product_id)
        .with_context(|| format!("unknown product '{product_id}'"))?;

    match options.output_type {
        OutputType::Human => {
            let status = &item.quick_status;
            println!("Product: {}", item.product_id);
            println!(
                "Buy: {:.1} ({} orders, {} items)",
                status.buy_price, status.buy_orders, status.buy_volume
            );
            println!(
                "Sell: {:.1} ({} orders, {} items)",
                status.sell_price, status.sell_orders, status.sell_volume
            );
            println!("Margin: {:.1}", status.margin());
            println!();

            println!("Top Buy Orders");
            for summary in item.buy_summary.iter() {
                println!(
                    "{} x {:.1} ({} orders)",
                    summary.amount, summary.price_per_unit, summary.orders
                );
            }
            println!();

            println!("Top Sell Orders");
            for summary in item.sell_summary.iter() {
                println!(
                    "{} x {:.1} ({} orders)",
                    summary.amount, summary.price_per_unit, summary.orders
                );
            }
        }
        OutputType::Json => super::print_json(item)?,
    }

    Ok(())
}
