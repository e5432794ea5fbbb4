//! Client reviews.

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Review row joined with the reviewing client's name.
#[derive(Debug, Clone, FromRow, PartialEq)]
pub struct ReviewRecord {
    pub id: Uuid,
    pub client_id: Uuid,
    pub client_name: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: NaiveDateTime,
}

/// Review entry in the business dashboard feed.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecentReview {
    pub client_name: String,
    pub rating: i32,
    pub comment: String,
}

impl From<ReviewRecord> for RecentReview {
    fn from(r: ReviewRecord) -> Self {
        Self {
            client_name: r.client_name,
            rating: r.rating,
            comment: r.comment,
        }
    }
}
