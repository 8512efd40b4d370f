/// A SkyBlock news entry
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct News {
    /// The item shown next to the entry
    pub item: NewsItem,

    /// A link to the full post
    pub link: String,

    /// The summary
    pub text: String,

    /// The title
    pub title: String,
}

impl News {
    /// Get the material of the item shown next to the entry
    pub fn material(&self) -> &str {
        &self.item.material
    }
}

/// The item shown next to a news entry
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct NewsItem {
    /// A minecraft material name
    pub material: String,
}
