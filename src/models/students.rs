use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRow {
    pub name: String,
    pub email: String,
    pub grade: String,
}

/// Partial update body. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub grade: Option<String>,
}
