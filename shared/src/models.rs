//! Frontend-facing data models.
//!
//! These are the normalized shapes the views consume. The backend's own JSON
//! layout (`postId`, comma-separated tags, nested author objects) never
//! crosses the HTTP client boundary; see [`crate::normalize`].

use serde::{Deserialize, Serialize};

/// Publication state of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PostStatus {
    /// Visible to everyone.
    Published,
    /// Only visible to its author in the editor.
    Draft,
}

impl Default for PostStatus {
    fn default() -> Self {
        PostStatus::Published
    }
}

impl PostStatus {
    /// Stable identifier used in request bodies and select inputs.
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Published => "PUBLISHED",
            PostStatus::Draft => "DRAFT",
        }
    }
}

/// The fixed set of post categories the site publishes under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Aerial filming sessions and gear.
    Filming,
    /// Video production notes.
    Production,
    /// Running logs.
    Running,
    /// Travel write-ups.
    Travel,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 4] =
        [Category::Filming, Category::Production, Category::Running, Category::Travel];

    /// Slug used in URLs and request bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Filming => "filming",
            Category::Production => "production",
            Category::Running => "running",
            Category::Travel => "travel",
        }
    }

    /// Parse a slug, ignoring case. Unknown slugs yield `None`.
    pub fn parse(value: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.as_str().eq_ignore_ascii_case(value.trim()))
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Filming => "Filming",
            Category::Production => "Production",
            Category::Running => "Running",
            Category::Travel => "Travel",
        }
    }
}

/// One blog entry, fully normalized for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Server-assigned identity, stable across fetches.
    pub id: i64,
    /// Non-empty title.
    pub title: String,
    /// Short teaser; derived from content when the server omits it.
    pub excerpt: String,
    /// Full HTML body. Absent in list responses.
    pub content: Option<String>,
    /// Category slug (one of [`Category`]); kept as a string so unknown
    /// server values still render instead of failing deserialization.
    pub category: String,
    /// Server timestamp the post was published at.
    pub date: String,
    /// Estimated reading time, e.g. `"5 min"`.
    pub read_time: String,
    /// Author display name.
    pub author: String,
    /// Ordered tag list; order is display-relevant.
    pub tags: Vec<String>,
    /// Featured posts sort before everything else.
    pub featured: bool,
    /// Hero image URL (a generated placeholder when the server has none).
    pub image: String,
    /// Publication state.
    pub status: PostStatus,
    /// Like count as last reported by the server.
    pub likes: u32,
    /// Whether the current viewer likes this post. Always `false` for
    /// anonymous viewers.
    pub is_liked: bool,
    /// Server-maintained view counter.
    pub view_count: u32,
}

impl Post {
    /// Replace the like fields with a server response, the only code path
    /// allowed to change them.
    pub fn apply_like_status(&mut self, status: LikeStatus) {
        self.likes = status.like_count;
        self.is_liked = status.is_liked;
    }
}

/// Authoritative like state for one post, as returned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeStatus {
    /// Whether the current viewer likes the post.
    #[serde(rename = "isLiked")]
    pub is_liked: bool,
    /// Absolute like count.
    #[serde(rename = "likeCount")]
    pub like_count: u32,
}

/// Role attached to a user account; gates editor affordances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    /// Regular reader.
    Public,
    /// May write and publish posts.
    Admin,
    /// Site owner; everything Admin can, plus unpublish.
    Root,
}

impl UserRole {
    /// Whether this role may open the post editor.
    pub fn can_write(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::Root)
    }
}

/// How the account authenticates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// Email + password.
    Password,
    /// Google OAuth2 social login.
    Google,
}

impl Default for AuthProvider {
    fn default() -> Self {
        AuthProvider::Password
    }
}

/// The authenticated viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned numeric id.
    #[serde(rename = "userId")]
    pub user_id: i64,
    /// Identity key; immutable after registration.
    pub email: String,
    /// Given name, mutable via the profile page.
    #[serde(rename = "firstName", default)]
    pub first_name: String,
    /// Family name, mutable via the profile page.
    #[serde(rename = "lastName", default)]
    pub last_name: String,
    /// Role gating UI affordances.
    #[serde(rename = "userRole", default = "default_role")]
    pub role: UserRole,
    /// Whether the address has been confirmed.
    #[serde(rename = "emailVerified", default)]
    pub email_verified: bool,
    /// Social-login provider; password accounts get [`AuthProvider::Password`].
    #[serde(default)]
    pub provider: AuthProvider,
}

fn default_role() -> UserRole {
    UserRole::Public
}

impl User {
    /// Display name for the header: both names trimmed and joined, falling
    /// back to the email's local part.
    pub fn display_name(&self) -> String {
        let joined = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let joined = joined.trim();
        if joined.is_empty() {
            self.email.split('@').next().unwrap_or(&self.email).to_string()
        } else {
            joined.to_string()
        }
    }

    /// Password-change UI is only offered to password accounts.
    pub fn has_password(&self) -> bool {
        self.provider == AuthProvider::Password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parse_ignores_case_and_whitespace() {
        assert_eq!(Category::parse(" Filming "), Some(Category::Filming));
        assert_eq!(Category::parse("TRAVEL"), Some(Category::Travel));
        assert_eq!(Category::parse("cooking"), None);
    }

    #[test]
    fn apply_like_status_replaces_both_fields() {
        let mut post = sample_post();
        post.likes = 10;
        post.is_liked = false;

        post.apply_like_status(LikeStatus { is_liked: true, like_count: 11 });

        assert_eq!(post.likes, 11);
        assert!(post.is_liked);
    }

    #[test]
    fn user_deserializes_backend_shape() {
        let user: User = serde_json::from_str(
            r#"{
                "userId": 7,
                "email": "pilot@example.com",
                "firstName": "Him",
                "lastName": "Dol",
                "userRole": "ADMIN",
                "emailVerified": true
            }"#,
        )
        .expect("deserialize user");

        assert_eq!(user.user_id, 7);
        assert_eq!(user.role, UserRole::Admin);
        assert!(user.role.can_write());
        assert_eq!(user.provider, AuthProvider::Password);
        assert!(user.has_password());
        assert_eq!(user.display_name(), "Him Dol");
    }

    #[test]
    fn display_name_falls_back_to_email_local_part() {
        let mut user: User = serde_json::from_str(
            r#"{"userId": 1, "email": "pilot@example.com"}"#,
        )
        .expect("deserialize user");
        user.first_name = "  ".into();
        assert_eq!(user.display_name(), "pilot");
    }

    fn sample_post() -> Post {
        Post {
            id: 1,
            title: "First flight".into(),
            excerpt: "Short teaser".into(),
            content: None,
            category: "filming".into(),
            date: "2024-01-15".into(),
            read_time: "2 min".into(),
            author: "Admin".into(),
            tags: vec!["fpv".into()],
            featured: false,
            image: String::new(),
            status: PostStatus::Published,
            likes: 0,
            is_liked: false,
            view_count: 0,
        }
    }
}
