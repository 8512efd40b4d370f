use indexmap::IndexMap;
use time::OffsetDateTime;

/// The SkyBlock bazaar
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Bazaar {
    /// When the bazaar data was last updated.
    ///
    /// Older responses do not include this.
    #[serde(
        rename = "lastUpdated",
        default,
        with = "crate::types::unix_millis::option"
    )]
    pub last_updated: Option<OffsetDateTime>,

    /// Products, by product id, in the order the api sent them
    pub products: IndexMap<String, BazaarItem>,
}

impl Bazaar {
    /// Get a product by id.
    pub fn get(&self, product_id: &str) -> Option<&BazaarItem> {
        self.products.get(product_id)
    }

    /// Iterate over the products in the order the api sent them
    pub fn items(&self) -> impl Iterator<Item = &BazaarItem> {
        self.products.values()
    }
}

/// A bazaar product
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct BazaarItem {
    /// The product id, like `ENCHANTED_SNOW_BLOCK`
    pub product_id: String,

    /// The top sell orders
    pub sell_summary: Vec<BazaarSummary>,

    /// The top buy orders
    pub buy_summary: Vec<BazaarSummary>,

    /// An overview of all orders
    pub quick_status: BazaarQuickStatus,
}

/// The orders at one price
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct BazaarSummary {
    /// The total # of items
    pub amount: u64,

    /// The price of one item
    #[serde(rename = "pricePerUnit")]
    pub price_per_unit: f64,

    /// The # of orders
    pub orders: u64,
}

/// An overview of all orders for a product
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct BazaarQuickStatus {
    /// The product id
    #[serde(rename = "productId")]
    pub product_id: String,

    /// The weighted sell price
    #[serde(rename = "sellPrice")]
    pub sell_price: f64,

    /// The # of items in sell orders
    #[serde(rename = "sellVolume")]
    pub sell_volume: u64,

    /// The # of items sold over the last week
    #[serde(rename = "sellMovingWeek")]
    pub sell_moving_week: u64,

    /// The # of sell orders
    #[serde(rename = "sellOrders")]
    pub sell_orders: u64,

    /// The weighted buy price
    #[serde(rename = "buyPrice")]
    pub buy_price: f64,

    /// The # of items in buy orders
    #[serde(rename = "buyVolume")]
    pub buy_volume: u64,

    /// The # of items bought over the last week
    #[serde(rename = "buyMovingWeek")]
    pub buy_moving_week: u64,

    /// The # of buy orders
    #[serde(rename = "buyOrders")]
    pub buy_orders: u64,
}

impl BazaarQuickStatus {
    /// The difference between the buy and sell price
    pub fn margin(&self) -> f64 {
        self.buy_price - self.sell_price
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const BAZAAR: &str = include_str!("../../test_data/bazaar.json");

    #[test]
    fn parse() {
        let bazaar: Bazaar = serde_json::from_str(BAZAAR).expect("failed to parse");
        assert_eq!(
            bazaar.last_updated.map(|date| date.unix_timestamp()),
            Some(1_590_854_517)
        );
        assert_eq!(
            bazaar.products.keys().collect::<Vec<_>>(),
            ["INK_SACK:3", "BROWN_MUSHROOM"]
        );

        let cocoa = bazaar.get("INK_SACK:3").expect("missing cocoa beans");
        assert_eq!(cocoa.product_id, "INK_SACK:3");
        assert_eq!(cocoa.sell_summary.len(), 2);
        assert_eq!(cocoa.sell_summary[0].price_per_unit, 2.1);
        assert_eq!(cocoa.sell_summary[1].price_per_unit, 2.0);
        assert_eq!(cocoa.buy_summary.len(), 1);
        assert_eq!(cocoa.quick_status.sell_moving_week, 4_124_530);
        assert_eq!(cocoa.quick_status.buy_orders, 38);

        let mushroom = bazaar.get("BROWN_MUSHROOM").expect("missing mushroom");
        assert!(mushroom.sell_summary.is_empty());
        assert!(mushroom.quick_status.margin() > 0.0);
    }

    #[test]
    fn parse_without_last_updated() {
        let bazaar: Bazaar =
            serde_json::from_str(r#"{"success": true, "products": {}}"#).expect("failed to parse");
        assert!(bazaar.last_updated.is_none());
        assert_eq!(bazaar.items().count(), 0);
    }

    #[test]
    fn parse_is_pure() {
        let first: Bazaar = serde_json::from_str(BAZAAR).expect("failed to parse");
        let second: Bazaar = serde_json::from_str(BAZAAR).expect("failed to parse");
        assert_eq!(first, second);
    }
}
