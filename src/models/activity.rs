use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;

/// Snapshot of one activity as it is handed out to callers.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    pub participants: Vec<String>,
}

/// All activities in catalog order. Serializes as a JSON object keyed by
/// display name; key order follows catalog order.
#[derive(Debug, Clone, Default)]
pub struct ActivityListing(pub Vec<Activity>);

impl Serialize for ActivityListing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for activity in &self.0 {
            map.serialize_entry(&activity.name, activity)?;
        }
        map.end()
    }
}

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SignupReceipt {
    pub message: String,
    pub current_participants: usize,
}
