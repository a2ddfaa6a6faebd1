pub mod about;
pub mod auth_callback;
pub mod blog;
pub mod blog_detail;
pub mod category;
pub mod login;
pub mod my_likes;
pub mod not_found;
pub mod profile;
pub mod search;
pub mod write_blog;
