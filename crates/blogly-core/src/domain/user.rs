use serde::{Deserialize, Serialize};

/// Placeholder avatar used when a user has no image of their own.
pub const DEFAULT_IMAGE_URL: &str = "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcRH-woMrLOEbaHBX9Kwlcbos9pMnd5VDqyckw&usqp=CAU";

/// User entity - an author who owns posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub image_url: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Overwrite every editable field, resolving a blank image URL to the default.
    pub fn apply(&mut self, first_name: String, last_name: String, image_url: &str) {
        self.first_name = first_name;
        self.last_name = last_name;
        self.image_url = resolve_image_url(image_url);
    }
}

/// A user that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub image_url: String,
}

impl NewUser {
    pub fn new(first_name: String, last_name: String, image_url: &str) -> Self {
        Self {
            first_name,
            last_name,
            image_url: resolve_image_url(image_url),
        }
    }
}

/// Empty or whitespace-only URLs fall back to [`DEFAULT_IMAGE_URL`].
/// Anything else is stored as submitted.
pub fn resolve_image_url(image_url: &str) -> String {
    if image_url.trim().is_empty() {
        DEFAULT_IMAGE_URL.to_string()
    } else {
        image_url.to_string()
    }
}
