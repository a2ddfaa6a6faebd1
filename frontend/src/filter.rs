//! Client-side listing pipeline: filter, then sort.
//!
//! The blog page fetches one bulk page of posts and runs this pipeline on
//! every filter change, so typing in the search box never costs a network
//! round trip. The pipeline is a pure function of its inputs.

use hfpv_shared::{Category, Post};

use crate::utils::parse_timestamp_ms;

/// Active listing filters. All three are independent and composable:
/// selecting a category does not clear the search term.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Free-text search over title, excerpt, and tags.
    pub search_term: String,
    /// Exact category match when set.
    pub category: Option<Category>,
    /// Only featured posts when set.
    pub featured_only: bool,
}

impl FilterState {
    /// Whether any filter is active.
    pub fn is_active(&self) -> bool {
        !self.search_term.trim().is_empty() || self.category.is_some() || self.featured_only
    }

    /// Reset every field at once. The empty-state "clear filters" action
    /// goes through here so a partial reset can never leave a stale field.
    pub fn clear(&mut self) {
        *self = FilterState::default();
    }
}

/// Run the full pipeline: every active predicate must match, then sort
/// featured-first and date-descending.
pub fn apply(posts: &[Post], filter: &FilterState) -> Vec<Post> {
    let mut matched: Vec<Post> =
        posts.iter().filter(|post| matches(post, filter)).cloned().collect();
    sort(&mut matched);
    matched
}

/// Whether one post passes every active predicate.
pub fn matches(post: &Post, filter: &FilterState) -> bool {
    let term = filter.search_term.trim().to_lowercase();
    if !term.is_empty() && !matches_search(post, &term) {
        return false;
    }

    if let Some(category) = filter.category {
        if !post.category.eq_ignore_ascii_case(category.as_str()) {
            return false;
        }
    }

    if filter.featured_only && !post.featured {
        return false;
    }

    true
}

fn matches_search(post: &Post, term_lower: &str) -> bool {
    post.title.to_lowercase().contains(term_lower)
        || post.excerpt.to_lowercase().contains(term_lower)
        || post.tags.iter().any(|tag| tag.to_lowercase().contains(term_lower))
}

/// Sort featured posts before non-featured ones; within each group, most
/// recent first. The sort is stable, so posts with equal dates keep their
/// fetched order.
pub fn sort(posts: &mut [Post]) {
    posts.sort_by(|a, b| {
        b.featured
            .cmp(&a.featured)
            .then_with(|| date_key(&b.date).cmp(&date_key(&a.date)))
    });
}

// Unparsable dates sort last within their group.
fn date_key(date: &str) -> i64 {
    parse_timestamp_ms(date).unwrap_or(i64::MIN)
}

#[cfg(test)]
mod tests {
    use hfpv_shared::PostStatus;

    use super::*;

    fn post(id: i64, title: &str, tags: &[&str], category: &str, featured: bool, date: &str) -> Post {
        Post {
            id,
            title: title.into(),
            excerpt: format!("{title} excerpt"),
            content: None,
            category: category.into(),
            date: date.into(),
            read_time: "1 min".into(),
            author: "Admin".into(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            featured,
            image: String::new(),
            status: PostStatus::Published,
            likes: 0,
            is_liked: false,
            view_count: 0,
        }
    }

    fn sample() -> Vec<Post> {
        vec![
            post(1, "Mountain flight", &["drone", "fpv"], "filming", true, "2024-01-01"),
            post(2, "Race day", &["running"], "running", false, "2024-02-01"),
            post(3, "TypeScript Patterns", &["React"], "production", false, "2024-01-20"),
            post(4, "Seoul trip", &["travel", "food"], "travel", false, "2024-01-20"),
        ]
    }

    #[test]
    fn search_matches_title_excerpt_or_tag_case_insensitively() {
        let posts = sample();
        let filter = FilterState { search_term: "react".into(), ..Default::default() };
        let out = apply(&posts, &filter);
        assert_eq!(out.iter().map(|p| p.id).collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn filters_compose_instead_of_clearing_each_other() {
        let posts = sample();
        let filter = FilterState {
            search_term: "flight".into(),
            category: Some(Category::Filming),
            featured_only: true,
        };
        let out = apply(&posts, &filter);
        assert_eq!(out.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1]);

        // Same search with a non-matching category: intersection is empty.
        let filter = FilterState {
            search_term: "flight".into(),
            category: Some(Category::Travel),
            featured_only: false,
        };
        assert!(apply(&posts, &filter).is_empty());
    }

    #[test]
    fn apply_is_idempotent() {
        let posts = sample();
        let filter = FilterState { category: Some(Category::Travel), ..Default::default() };
        let once = apply(&posts, &filter);
        let twice = apply(&once, &filter);
        assert_eq!(once, twice);
    }

    #[test]
    fn featured_wins_despite_older_date() {
        let posts = vec![
            post(1, "Old but featured", &[], "filming", true, "2024-01-01"),
            post(2, "New regular", &[], "filming", false, "2024-02-01"),
        ];
        let out = apply(&posts, &FilterState::default());
        assert_eq!(out.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn dates_are_non_increasing_within_each_group() {
        let out = apply(&sample(), &FilterState::default());
        let featured_split = out.iter().position(|p| !p.featured).unwrap_or(out.len());
        for group in [&out[..featured_split], &out[featured_split..]] {
            for pair in group.windows(2) {
                let first = parse_timestamp_ms(&pair[0].date).unwrap_or(i64::MIN);
                let second = parse_timestamp_ms(&pair[1].date).unwrap_or(i64::MIN);
                assert!(first >= second);
            }
        }
    }

    #[test]
    fn equal_dates_keep_fetched_order() {
        let out = apply(&sample(), &FilterState::default());
        // Posts 3 and 4 share a date; stable sort keeps 3 before 4.
        let ids: Vec<i64> = out.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn clear_resets_every_field_atomically() {
        let mut filter = FilterState {
            search_term: "fpv".into(),
            category: Some(Category::Filming),
            featured_only: true,
        };
        filter.clear();
        assert!(!filter.is_active());
        assert_eq!(filter, FilterState::default());
    }
}
