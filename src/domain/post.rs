//! Post domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
