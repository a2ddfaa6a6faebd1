/// Configuration for the frontend application
use base64::Engine as _;

/// Backend base URL. Read from the environment at compile time so deploy
/// workflows can point a build at production; defaults to the local dev
/// server.
pub const API_BASE: &str = match option_env!("HFPV_API_BASE") {
    Some(url) => url,
    None => "http://localhost:8080",
};

/// Site label stamped onto generated placeholder images.
pub const SITE_LABEL: &str = "THE H FPV";

/// Persistent-storage keys. All values are plain strings with no schema
/// versioning; a failed parse is treated as absent.
pub mod storage_keys {
    /// JWT bearer token.
    pub const AUTH_TOKEN: &str = "hfpv:auth:token";
    /// Cached user JSON; a cache only, never the source of truth.
    pub const USER: &str = "hfpv:auth:user";
    /// `"dark"` or `"light"`.
    pub const THEME: &str = "hfpv:theme";
    /// Route path of the last visited page.
    pub const LAST_PAGE: &str = "hfpv:last-page";
}

/// Placeholder hero image for posts the server has no image for: a
/// fixed-size gradient with the site label and the post title, inlined as
/// an SVG data URL so it needs no asset pipeline.
pub fn placeholder_image(title: &str) -> String {
    let title = xml_escape(title);
    let svg = format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="800" height="400" viewBox="0 0 800 400"><defs><linearGradient id="g" x1="0" y1="0" x2="1" y2="1"><stop offset="0" stop-color="#667eea"/><stop offset="1" stop-color="#764ba2"/></linearGradient></defs><rect width="800" height="400" fill="url(#g)"/><text x="400" y="200" fill="#fff" font-family="sans-serif" font-size="48" font-weight="bold" text-anchor="middle">{SITE_LABEL}</text><text x="400" y="252" fill="#fff" font-family="sans-serif" font-size="24" text-anchor="middle">{title}</text></svg>"##
    );
    let encoded = base64::engine::general_purpose::STANDARD.encode(svg);
    format!("data:image/svg+xml;base64,{encoded}")
}

fn xml_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_image_is_a_data_url() {
        let url = placeholder_image("First flight");
        assert!(url.starts_with("data:image/svg+xml;base64,"));
    }

    #[test]
    fn titles_are_escaped_before_embedding() {
        assert_eq!(xml_escape(r#"<a & "b">"#), "&lt;a &amp; &quot;b&quot;&gt;");
    }
}
