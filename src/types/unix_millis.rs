//! (De)serialize an [`OffsetDateTime`] as a millisecond unix timestamp.
//!
//! Use with `#[serde(with = "unix_millis")]`.

use serde::{
    Deserialize,
    Deserializer,
    Serializer,
};
use time::OffsetDateTime;

const NANOS_PER_MILLI: i128 = 1_000_000;

/// Make an [`OffsetDateTime`] from a millisecond unix timestamp.
pub(crate) fn from_millis(millis: i64) -> Result<OffsetDateTime, time::error::ComponentRange> {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * NANOS_PER_MILLI)
}

/// Get the millisecond unix timestamp of an [`OffsetDateTime`].
pub(crate) fn to_millis(date: OffsetDateTime) -> Option<i64> {
    i64::try_from(date.unix_timestamp_nanos() / NANOS_PER_MILLI).ok()
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let millis = i64::deserialize(deserializer)?;
    from_millis(millis).map_err(serde::de::Error::custom)
}

pub(crate) fn serialize<S>(date: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let millis = to_millis(*date)
        .ok_or_else(|| serde::ser::Error::custom("timestamp does not fit in an i64"))?;
    serializer.serialize_i64(millis)
}

/// The same, for optional fields.
///
/// Pair with `#[serde(default)]` so a missing key becomes `None`.
pub(crate) mod option {
    use super::*;

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<OffsetDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<i64>::deserialize(deserializer)?
            .map(from_millis)
            .transpose()
            .map_err(serde::de::Error::custom)
    }

    pub(crate) fn serialize<S>(
        date: &Option<OffsetDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => super::serialize(date, serializer),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn millis_keep_precision() {
        let date = from_millis(1_590_854_517_479).expect("invalid timestamp");
        assert_eq!(date.unix_timestamp(), 1_590_854_517);
        assert_eq!(date.millisecond(), 479);
        assert_eq!(to_millis(date), Some(1_590_854_517_479));
    }

    #[test]
    fn negative_millis() {
        let date = from_millis(-1).expect("invalid timestamp");
        assert_eq!(date.unix_timestamp(), -1);
        assert_eq!(date.millisecond(), 999);
    }
}
