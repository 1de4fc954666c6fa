/// HTTP request handlers
pub mod auth;
pub mod likes;
pub mod posts;
pub mod replies;
pub mod summary;

pub use auth::login;
pub use likes::create_like;
pub use posts::{create_post, get_feed};
pub use replies::create_reply;
pub use summary::get_summary;
