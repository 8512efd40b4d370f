use super::OutputType;
use hypixel::types::AuctionItem;

#[derive(argh::FromArgs)]
#[argh(subcommand, name = "auctions", description = "list skyblock auctions")]
pub struct Options {
    #[argh(
        option,
        long = "page",
        short = 'p',
        default = "0",
        description = "the page #, starting at 0"
    )]
    page: u64,

    #[argh(option, long = "uuid", description = "look up one auction by its uuid")]
    uuid: Option<String>,

    #[argh(option, long = "player", description = "list the auctions of a player")]
    player: Option<String>,

    #[argh(
        option,
        long = "profile",
        description = "list the auctions of a skyblock profile"
    )]
    profile: Option<String>,

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
    let auctions = match (
        options.uuid.as_deref(),
        options.player.as_deref(),
        options.profile.as_deref(),
    ) {
        (None, None, None) => {
            let page = client.get_auctions(options.page).await?;
            match options.output_type {
                OutputType::Human => {
                    println!(
                        "Page {} of {} ({} auctions)",
                        page.page + 1,
                        page.total_pages,
                        page.total_auctions
                    );
                    println!("Last Updated: {}", page.last_updated);
                    println!();
                    print_auctions(&page.auctions);
                }
                OutputType::Json => super::print_json(&page)?,
            }

            return Ok(());
        }
        (Some(uuid), None, None) => client.get_auction_from_uuid(uuid).await?,
        (None, Some(player), None) => client.get_auction_from_player(player).await?,
        (None, None, Some(profile)) => client.get_auction_from_profile(profile).await?,
        _ => anyhow::bail!("only one of --uuid, --player, or --profile may be used"),
    };

    match options.output_type {
        OutputType::Human => print_auctions(&auctions),
        OutputType::Json => super::print_json(&auctions)?,
    }

    Ok(())
}

fn print_auctions(auctions: &[AuctionItem]) {
    if auctions.is_empty() {
        println!("No Auctions");
    }

    for (i, auction) in auctions.iter().enumerate() {
        println!("{}) {}", i + 1, auction.item_name);
        println!("Uuid: {}", auction.uuid);
        println!("Tier: {}", auction.tier);
        println!("Starting Bid: {}", auction.starting_bid);
        if let Some(bid) = auction.highest_bid() {
            println!("Highest Bid: {} by {}", bid.amount, bid.bidder);
        }
        println!("Bin: {}", auction.bin);
        println!("Ends: {}", auction.end);
        println!();
    }
}
