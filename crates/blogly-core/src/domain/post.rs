use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::User;

/// Display format for post timestamps, e.g. `Fri Jun 12 2020, 1:34 PM`.
const FRIENDLY_DATE_FORMAT: &str = "%a %b %-d %Y, %-I:%M %p";

/// Post entity - a blog post written by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub fn friendly_date(&self) -> String {
        self.created_at.format(FRIENDLY_DATE_FORMAT).to_string()
    }
}

/// A post that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl NewPost {
    /// Create a new post draft stamped with the current time.
    pub fn new(user_id: i32, title: String, content: String) -> Self {
        Self {
            user_id,
            title,
            content,
            created_at: Utc::now(),
        }
    }
}

/// A post paired with the user who wrote it, as listed on the homepage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthoredPost {
    pub post: Post,
    pub author: User,
}
