use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One catalog entry.
///
/// Every field is optional on the wire: `movie_id` is assigned by the server
/// and must be absent on create requests, and update requests carry only the
/// fields to change. Absent fields are omitted from request bodies entirely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Movie {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cast: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    /// Serialized as `yyyy-mm-dd`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<NaiveDate>,
}
