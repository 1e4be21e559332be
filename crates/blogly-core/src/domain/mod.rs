//! Domain entities - the core business objects.

mod post;
mod tag;
mod user;

pub use post::{AuthoredPost, NewPost, Post};
pub use tag::{NewTag, Tag};
pub use user::{DEFAULT_IMAGE_URL, NewUser, User, resolve_image_url};
