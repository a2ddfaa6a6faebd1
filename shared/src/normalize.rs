//! Pure helpers for shaping backend JSON into [`crate::models::Post`] fields.
//!
//! The backend stores tags as one comma-separated column, leaves the excerpt
//! empty for most posts, and reports authors as separate name fields. All of
//! the massaging lives here so the HTTP client stays a thin mapping layer.

/// Reading speed assumed when estimating read time.
const WORDS_PER_MINUTE: usize = 200;

/// Number of characters of content used for a derived excerpt.
const EXCERPT_CHARS: usize = 150;

/// Server-provided excerpt when non-empty, else the first 150 characters
/// of the content followed by an ellipsis. Counts characters, not bytes,
/// so multi-byte content never splits mid code point.
pub fn excerpt_or_derive(excerpt: Option<&str>, content: Option<&str>) -> String {
    if let Some(excerpt) = excerpt {
        let trimmed = excerpt.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let content = content.unwrap_or_default().trim();
    if content.is_empty() {
        return String::new();
    }

    let mut derived: String = content.chars().take(EXCERPT_CHARS).collect();
    if content.chars().count() > EXCERPT_CHARS {
        derived.push_str("...");
    }
    derived
}

/// Read-time label from word count at [`WORDS_PER_MINUTE`], rounded up,
/// never below one minute: `"<n> min"`.
pub fn read_time_label(content: Option<&str>) -> String {
    let words = content.unwrap_or_default().split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{minutes} min")
}

/// Split the backend's comma-separated tag column into a trimmed,
/// order-preserving list. Empty segments are dropped; an empty or
/// whitespace-only column yields an empty list.
pub fn split_tags(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Author display name from the backend's separate name fields: trimmed
/// concatenation, `"Unknown"` when both are absent or blank.
pub fn author_display_name(first: Option<&str>, last: Option<&str>) -> String {
    let first = first.unwrap_or_default().trim();
    let last = last.unwrap_or_default().trim();
    match (first.is_empty(), last.is_empty()) {
        (true, true) => "Unknown".to_string(),
        (false, true) => first.to_string(),
        (true, false) => last.to_string(),
        (false, false) => format!("{first} {last}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excerpt_prefers_server_value() {
        let excerpt = excerpt_or_derive(Some("A teaser"), Some("Full content body"));
        assert_eq!(excerpt, "A teaser");
    }

    #[test]
    fn excerpt_derived_from_content_gets_ellipsis() {
        let content = "word ".repeat(60);
        let excerpt = excerpt_or_derive(None, Some(&content));
        assert_eq!(excerpt.chars().count(), 150 + 3);
        assert!(excerpt.ends_with("..."));
    }

    #[test]
    fn short_content_is_not_truncated() {
        assert_eq!(excerpt_or_derive(Some("  "), Some("Tiny post")), "Tiny post");
    }

    #[test]
    fn excerpt_respects_char_boundaries() {
        let content = "é".repeat(200);
        let excerpt = excerpt_or_derive(None, Some(&content));
        assert_eq!(excerpt.chars().count(), 153);
    }

    #[test]
    fn read_time_rounds_up_and_floors_at_one_minute() {
        assert_eq!(read_time_label(Some("one short line")), "1 min");
        assert_eq!(read_time_label(None), "1 min");

        let content = "word ".repeat(201);
        assert_eq!(read_time_label(Some(&content)), "2 min");
    }

    #[test]
    fn split_tags_trims_and_preserves_order() {
        assert_eq!(
            split_tags(Some(" drone, fpv ,  travel")),
            vec!["drone".to_string(), "fpv".to_string(), "travel".to_string()]
        );
        assert_eq!(split_tags(Some("  ")), Vec::<String>::new());
        assert_eq!(split_tags(None), Vec::<String>::new());
    }

    #[test]
    fn author_name_joins_and_falls_back() {
        assert_eq!(author_display_name(Some("Him"), Some("Dol")), "Him Dol");
        assert_eq!(author_display_name(Some(" Him "), None), "Him");
        assert_eq!(author_display_name(None, Some("Dol")), "Dol");
        assert_eq!(author_display_name(None, None), "Unknown");
        assert_eq!(author_display_name(Some(""), Some("  ")), "Unknown");
    }
}
