// Re-export the shared data models plus the built-in fixture set.
//
// The fixtures serve two jobs: they are the whole data source for `mock`
// builds (run the app with no backend), and the live build's fallback for
// the bulk post list when the backend is unreachable.

pub use hfpv_shared::{AuthProvider, Category, LikeStatus, Post, PostStatus, User, UserRole};

use crate::api::PostPage;

/// Deterministic sample posts, one page worth.
pub fn fixture_page() -> PostPage {
    let posts = fixture_posts();
    PostPage {
        total_elements: posts.len(),
        current_page: 1,
        total_pages: 1,
        success: true,
        posts,
    }
}

/// The sample post set. Covers every category, a featured post, and posts
/// with and without hero images so the listing renders realistically.
pub fn fixture_posts() -> Vec<Post> {
    let seeds: [(i64, &str, &str, Category, &str, &[&str], bool); 6] = [
        (
            1,
            "Welcome to THE H FPV",
            "A quick tour of what gets posted here: flight footage, build logs, and the occasional trail run.",
            Category::Filming,
            "2024-01-15",
            &["welcome", "fpv", "blog"],
            true,
        ),
        (
            2,
            "Cinewhoop build log, part one",
            "Frame choice, motor math, and why the first prop order was wrong.",
            Category::Production,
            "2024-01-12",
            &["build", "cinewhoop"],
            false,
        ),
        (
            3,
            "Chasing sunrise over the ridge",
            "Long-range pack at 6am. The footage almost made the cold worth it.",
            Category::Filming,
            "2024-01-10",
            &["longrange", "mountains"],
            false,
        ),
        (
            4,
            "10k training week three",
            "Legs are complaining but the pace chart finally bends the right way.",
            Category::Running,
            "2024-01-08",
            &["running", "training"],
            false,
        ),
        (
            5,
            "Flying spots around Jeju",
            "Where the wind is manageable and the coastline does the work for you.",
            Category::Travel,
            "2024-01-05",
            &["travel", "jeju", "spots"],
            false,
        ),
        (
            6,
            "Editing drone footage without a color science degree",
            "A minimal grading workflow that survives contact with real projects.",
            Category::Production,
            "2024-01-03",
            &["editing", "color"],
            false,
        ),
    ];

    seeds
        .into_iter()
        .map(|(id, title, excerpt, category, date, tags, featured)| Post {
            id,
            title: title.to_string(),
            excerpt: excerpt.to_string(),
            content: Some(format!("<p>{excerpt}</p>")),
            category: category.as_str().to_string(),
            date: date.to_string(),
            read_time: "2 min".to_string(),
            author: "Admin".to_string(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            featured,
            image: crate::config::placeholder_image(title),
            status: PostStatus::Published,
            likes: 0,
            is_liked: false,
            view_count: 0,
        })
        .collect()
}

/// Sample user for `mock` builds.
#[allow(dead_code)]
pub fn fixture_user(email: &str) -> User {
    User {
        user_id: 1,
        email: email.to_string(),
        first_name: "Him".to_string(),
        last_name: "Dol".to_string(),
        role: UserRole::Admin,
        email_verified: true,
        provider: AuthProvider::Password,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_posts_cover_every_category() {
        let posts = fixture_posts();
        for category in Category::ALL {
            assert!(
                posts.iter().any(|post| post.category == category.as_str()),
                "missing fixture for {}",
                category.as_str()
            );
        }
    }

    #[test]
    fn fixture_page_counts_match() {
        let page = fixture_page();
        assert!(page.success);
        assert_eq!(page.total_elements, page.posts.len());
    }
}
