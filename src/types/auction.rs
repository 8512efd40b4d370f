use time::OffsetDateTime;

/// A page of active SkyBlock auctions
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct AuctionPage {
    /// The page #, starting at 0
    pub page: u64,

    /// The total # of pages
    #[serde(rename = "totalPages")]
    pub total_pages: u64,

    /// The total # of auctions over all pages
    #[serde(rename = "totalAuctions")]
    pub total_auctions: u64,

    /// When the auction list was last updated
    #[serde(rename = "lastUpdated", with = "crate::types::unix_millis")]
    pub last_updated: OffsetDateTime,

    /// The auctions on this page
    pub auctions: Vec<AuctionItem>,
}

impl AuctionPage {
    /// Whether there is a page after this one.
    pub fn has_next_page(&self) -> bool {
        self.page + 1 < self.total_pages
    }
}

/// A SkyBlock auction
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct AuctionItem {
    /// The database id.
    ///
    /// Only sent by some endpoints.
    #[serde(rename = "_id", default)]
    pub id: Option<String>,

    /// The auction uuid
    pub uuid: String,

    /// The uuid of the player that created the auction
    pub auctioneer: String,

    /// The profile the auction was created from
    pub profile_id: String,

    /// The profile members that can access the auction
    #[serde(default)]
    pub coop: Vec<String>,

    /// When the auction started
    #[serde(with = "crate::types::unix_millis")]
    pub start: OffsetDateTime,

    /// When the auction ends
    #[serde(with = "crate::types::unix_millis")]
    pub end: OffsetDateTime,

    /// The item name, with formatting codes
    pub item_name: String,

    /// The item lore, with formatting codes
    pub item_lore: String,

    /// Extra searchable text
    #[serde(default)]
    pub extra: String,

    /// The item category, like `weapon`
    pub category: String,

    /// The item rarity, like `LEGENDARY`
    pub tier: String,

    /// The starting bid, in coins
    pub starting_bid: u64,

    /// The item nbt data
    pub item_bytes: ItemBytes,

    /// Whether the auction was claimed
    pub claimed: bool,

    /// The bidders that claimed their coins back
    #[serde(default)]
    pub claimed_bidders: Vec<String>,

    /// The highest bid, in coins
    pub highest_bid_amount: u64,

    /// The bids, oldest first
    #[serde(default)]
    pub bids: Vec<Bid>,

    /// Whether this is a buy it now auction
    #[serde(default)]
    pub bin: bool,
}

impl AuctionItem {
    /// Get the highest bid, if there are any.
    pub fn highest_bid(&self) -> Option<&Bid> {
        self.bids.iter().max_by_key(|bid| bid.amount)
    }

    /// Whether the auction has ended at the given time.
    pub fn has_ended(&self, now: OffsetDateTime) -> bool {
        self.end <= now
    }
}

/// The nbt data of an auctioned item.
///
/// The auction list endpoint sends the base64 data directly,
/// the auction lookup endpoint wraps it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum ItemBytes {
    /// Gzipped, base64-encoded nbt
    Data(String),

    /// The same, wrapped with a type tag
    Tagged {
        /// The nbt type
        #[serde(rename = "type")]
        kind: u64,

        /// Gzipped, base64-encoded nbt
        data: String,
    },
}

impl ItemBytes {
    /// Get the base64 data
    pub fn data(&self) -> &str {
        match self {
            Self::Data(data) | Self::Tagged { data, .. } => data,
        }
    }
}

/// A bid on an auction
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Bid {
    /// The auction uuid
    pub auction_id: String,

    /// The uuid of the bidder
    pub bidder: String,

    /// The profile the bid was made from
    pub profile_id: String,

    /// The bid, in coins
    pub amount: u64,

    /// When the bid was made
    #[serde(with = "crate::types::unix_millis")]
    pub timestamp: OffsetDateTime,
}

#[cfg(test)]
mod test {
    use super::*;

    const AUCTIONS: &str = include_str!("../../test_data/auctions.json");
    const AUCTION: &str = include_str!("../../test_data/auction.json");

    #[derive(serde::Deserialize)]
    struct Response {
        auctions: Vec<AuctionItem>,
    }

    #[test]
    fn parse_page() {
        let page: AuctionPage = serde_json::from_str(AUCTIONS).expect("failed to parse");
        assert_eq!(page.page, 0);
        assert_eq!(page.total_pages, 32);
        assert_eq!(page.total_auctions, 31_267);
        assert_eq!(page.last_updated.unix_timestamp(), 1_571_065_561);
        assert!(page.has_next_page());
        assert_eq!(page.auctions.len(), 1);

        let auction = &page.auctions[0];
        assert_eq!(auction.uuid, "e7ae8bd1b6f24545a55a6e1b7a7e6b36");
        assert_eq!(auction.tier, "RARE");
        assert_eq!(auction.coop.len(), 2);
        assert_eq!(auction.item_bytes.data(), "H4sIAAAAAAAAAA==");
        assert_eq!(auction.bids.len(), 2);
        assert_eq!(auction.highest_bid().map(|bid| bid.amount), Some(7_000));
        assert_eq!(auction.highest_bid_amount, 7_000);
        assert!(auction.has_ended(auction.end));
        assert!(!auction.has_ended(auction.start));
    }

    #[test]
    fn parse_lookup() {
        let auctions = serde_json::from_str::<Response>(AUCTION)
            .expect("failed to parse")
            .auctions;
        assert_eq!(auctions.len(), 1);

        let auction = &auctions[0];
        assert_eq!(auction.id.as_deref(), Some("5d8e2eb0a8a2c7c9a4a4fa1b"));
        assert!(auction.claimed);
        assert_eq!(
            auction.item_bytes,
            ItemBytes::Tagged {
                kind: 0,
                data: "H4sIAAAAAAAAAA==".into(),
            }
        );
        assert!(auction.bids.is_empty());
    }
}
