/// Information about an api key
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Key {
    /// The key
    pub key: String,

    /// The uuid of the owner
    pub owner: String,

    /// The max # of queries per minute
    pub limit: u64,

    /// The # of queries made in the last minute
    #[serde(rename = "queriesInPastMin")]
    pub queries_in_past_min: u64,

    /// The total # of queries made with this key
    #[serde(rename = "totalQueries")]
    pub total_queries: u64,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse() {
        let key: Key = serde_json::from_str(
            r#"{
                "key": "e1513542-f4c7-483d-bf1b-3b29d4e59903",
                "owner": "8ffb79fa-620e-45fe-8d62-381abd5bc60f",
                "limit": 120,
                "queriesInPastMin": 3,
                "totalQueries": 4242
            }"#,
        )
        .expect("failed to parse key");

        assert_eq!(key.key, "e1513542-f4c7-483d-bf1b-3b29d4e59903");
        assert_eq!(key.owner, "8ffb79fa-620e-45fe-8d62-381abd5bc60f");
        assert_eq!(key.limit, 120);
        assert_eq!(key.queries_in_past_min, 3);
        assert_eq!(key.total_queries, 4242);
    }
}
