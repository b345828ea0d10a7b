use serde::{Deserialize, Serialize};

/// An extracurricular activity. The name is the key in the activity store and
/// is not repeated inside the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRow {
    pub description: String,
    pub schedule: String,
    // Advisory only; signup does not check it.
    pub max_participants: i64,
    pub participants: Vec<String>,
}

impl ActivityRow {
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}
