use serde::{
    Deserialize,
    Deserializer,
    Serializer,
};

/// A lobby leaderboard
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Leaderboard {
    /// The stat path, like `wins`
    pub path: String,

    /// The time span, like `Overall`
    pub prefix: String,

    /// The title
    pub title: String,

    /// Where the hologram is in the lobby
    #[serde(deserialize_with = "deserialize_location")]
    #[serde(serialize_with = "serialize_location")]
    pub location: [i64; 3],

    /// The # of leaders
    pub count: u64,

    /// The uuids of the leaders, best first
    pub leaders: Vec<String>,
}

/// The api sends the location as `"x,y,z"`.
fn deserialize_location<'de, D>(deserializer: D) -> Result<[i64; 3], D::Error>
where
    D: Deserializer<'de>,
{
    let location = String::deserialize(deserializer)?;
    parse_location(&location).ok_or_else(|| {
        serde::de::Error::custom(format!("\"{location}\" is not a valid location"))
    })
}

fn parse_location(location: &str) -> Option<[i64; 3]> {
    let mut iter = location.split(',').map(|n| n.trim().parse().ok());
    let x = iter.next()??;
    let y = iter.next()??;
    let z = iter.next()??;

    if iter.next().is_some() {
        return None;
    }

    Some([x, y, z])
}

fn serialize_location<S>(location: &[i64; 3], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let [x, y, z] = location;
    serializer.collect_str(&format_args!("{x},{y},{z}"))
}

#[cfg(test)]
mod test {
    use super::*;
    use indexmap::IndexMap;

    const LEADERBOARDS: &str = include_str!("../../test_data/leaderboards.json");

    #[derive(serde::Deserialize)]
    struct Response {
        leaderboards: IndexMap<String, Vec<Leaderboard>>,
    }

    #[test]
    fn parse() {
        let leaderboards = serde_json::from_str::<Response>(LEADERBOARDS)
            .expect("failed to parse")
            .leaderboards;
        assert_eq!(
            leaderboards.keys().collect::<Vec<_>>(),
            ["ARENA", "BEDWARS"]
        );

        let arena = &leaderboards["ARENA"];
        assert_eq!(arena.len(), 2);
        assert_eq!(arena[0].path, "rating");
        assert_eq!(arena[0].location, [-2, 70, 8]);
        assert_eq!(arena[0].leaders.len(), 2);
        assert_eq!(arena[1].prefix, "Overall");
    }

    #[test]
    fn locations() {
        assert_eq!(parse_location("-2,70,8"), Some([-2, 70, 8]));
        assert_eq!(parse_location(" 1, 2 ,3"), Some([1, 2, 3]));
        assert_eq!(parse_location("1,2"), None);
        assert_eq!(parse_location("1,2,3,4"), None);
        assert_eq!(parse_location("a,b,c"), None);
    }

    #[test]
    fn invalid_location() {
        let error = serde_json::from_str::<Leaderboard>(
            r#"{"path": "wins", "prefix": "Overall", "title": "Wins", "location": "1,2", "count": 0, "leaders": []}"#,
        )
        .expect_err("parsed an invalid location");
        assert!(error.to_string().contains("not a valid location"), "{error}");
    }
}
