//! Data models and pure normalization helpers shared between the portfolio
//! frontend and server-side tooling.

pub mod models;
pub mod normalize;

pub use models::{AuthProvider, Category, LikeStatus, Post, PostStatus, User, UserRole};
