use serde::{Deserialize, Serialize};

use crate::domain::TeamRecord;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { error: message.into() }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ResetRequest {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamOption {
    pub id: String,
    pub name: String,
}

impl From<TeamRecord> for TeamOption {
    fn from(team: TeamRecord) -> Self {
        Self {
            id: team.id,
            name: team.name,
        }
    }
}
