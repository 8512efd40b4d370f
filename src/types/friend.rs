use time::OffsetDateTime;

/// A friendship between two players
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Friend {
    /// The record id
    #[serde(rename = "_id")]
    pub id: String,

    /// The player that sent the request
    #[serde(rename = "uuidSender")]
    pub uuid_sender: String,

    /// The player that accepted the request
    #[serde(rename = "uuidReceiver")]
    pub uuid_receiver: String,

    /// When the friendship started
    #[serde(with = "crate::types::unix_millis")]
    pub started: OffsetDateTime,
}

impl Friend {
    /// Given one side of the friendship, get the other.
    ///
    /// Uuids are compared without hyphens.
    pub fn other(&self, uuid: &str) -> &str {
        if crate::normalize_uuid(uuid) == self.uuid_sender {
            &self.uuid_receiver
        } else {
            &self.uuid_sender
        }
    }
}
