//! JSON bodies for operations that take named fields.
//!
//! Optional fields are omitted when unset rather than sent as `null`.

use serde::Serialize;

/// Body of `persongroup create` and `persongroup update`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonGroupBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
}

/// Body of `person create` and `person update`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub face_ids: Vec<String>,
}

/// Body of `personface add` and `personface update`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonFaceBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifyBody {
    pub face_ids: Vec<String>,
    pub person_group_id: String,
    pub max_num_of_candidates_returned: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindSimilarBody {
    pub face_id: String,
    pub face_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupBody {
    pub face_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyBody {
    #[serde(rename = "faceId1")]
    pub face_id1: String,
    #[serde(rename = "faceId2")]
    pub face_id2: String,
}
