#[cfg(not(feature = "mock"))]
use gloo_net::http::{Request, RequestBuilder, Response};
use hfpv_shared::{normalize, LikeStatus, Post, PostStatus, User};
use serde::{Deserialize, Serialize};
#[cfg(not(feature = "mock"))]
use web_sys::RequestCredentials;

#[cfg(not(feature = "mock"))]
use crate::config::API_BASE;
use crate::likes::LikeError;
use crate::models;

/// Bulk page size used by views that filter client-side.
pub const BULK_PAGE_SIZE: usize = 100;

// ---------- backend wire shapes ----------

/// A post as the backend serves it. Field names and the comma-separated tag
/// column follow the server's JSON; [`BackendPost::into_post`] is the only
/// place that layout is known.
#[derive(Debug, Deserialize)]
pub struct BackendPost {
    #[serde(rename = "postId")]
    id: i64,
    title: String,
    #[serde(default)]
    excerpt: Option<String>,
    #[serde(default)]
    content: Option<String>,
    category: String,
    #[serde(rename = "createdAt")]
    created_at: String,
    #[serde(default)]
    author: Option<BackendAuthor>,
    #[serde(default)]
    tags: Option<String>,
    #[serde(default)]
    featured: bool,
    #[serde(rename = "featuredImageUrl", default)]
    featured_image_url: Option<String>,
    #[serde(default)]
    status: Option<PostStatus>,
    #[serde(rename = "likeCount", default)]
    like_count: u32,
    #[serde(rename = "isLiked", default)]
    is_liked: bool,
    #[serde(rename = "viewCount", default)]
    view_count: u32,
}

#[derive(Debug, Deserialize)]
struct BackendAuthor {
    #[serde(rename = "firstName", default)]
    first_name: Option<String>,
    #[serde(rename = "lastName", default)]
    last_name: Option<String>,
}

impl BackendPost {
    /// Normalize into the shape the views consume: derived excerpt,
    /// read-time estimate, split tags, joined author name, placeholder
    /// image. Like fields pass through verbatim.
    pub fn into_post(self) -> Post {
        let excerpt = normalize::excerpt_or_derive(self.excerpt.as_deref(), self.content.as_deref());
        let read_time = normalize::read_time_label(self.content.as_deref());
        let tags = normalize::split_tags(self.tags.as_deref());
        let author = match &self.author {
            Some(author) => normalize::author_display_name(
                author.first_name.as_deref(),
                author.last_name.as_deref(),
            ),
            None => "Unknown".to_string(),
        };
        let image = self
            .featured_image_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| crate::config::placeholder_image(&self.title));

        Post {
            id: self.id,
            title: self.title,
            excerpt,
            content: self.content,
            category: self.category,
            date: self.created_at,
            read_time,
            author,
            tags,
            featured: self.featured,
            image,
            status: self.status.unwrap_or_default(),
            likes: self.like_count,
            is_liked: self.is_liked,
            view_count: self.view_count,
        }
    }
}

#[cfg(not(feature = "mock"))]
#[derive(Debug, Deserialize)]
struct PaginatedPostsResponse {
    #[serde(default)]
    posts: Vec<BackendPost>,
    #[serde(rename = "currentPage", default)]
    current_page: Option<usize>,
    #[serde(rename = "totalPages", default)]
    total_pages: Option<usize>,
    #[serde(rename = "totalElements", default)]
    total_elements: Option<usize>,
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

#[cfg(not(feature = "mock"))]
#[derive(Debug, Deserialize)]
struct LikeToggleResponse {
    #[serde(rename = "isLiked", default)]
    is_liked: bool,
    #[serde(rename = "likeCount", default)]
    like_count: u32,
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

/// One page of normalized posts.
#[derive(Debug, Clone, PartialEq)]
pub struct PostPage {
    /// Normalized posts in server order.
    pub posts: Vec<Post>,
    /// 1-based page index.
    pub current_page: usize,
    /// Total pages for this query.
    pub total_pages: usize,
    /// Total matching posts across all pages.
    pub total_elements: usize,
    /// Whether the backend actually answered; fallback data reports `true`
    /// for the bulk list (the views can still render) and `false` for
    /// narrower queries.
    pub success: bool,
}

impl PostPage {
    fn empty(success: bool) -> PostPage {
        PostPage { posts: Vec::new(), current_page: 1, total_pages: 0, total_elements: 0, success }
    }
}

/// Login / registration response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    /// Bearer token for subsequent requests.
    pub token: String,
    /// The authenticated user.
    pub user: User,
    /// Server message, displayed verbatim on failure paths.
    #[serde(default)]
    pub message: Option<String>,
}

/// Answer from the OAuth session probe.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionUser {
    /// Whether the backend holds an authenticated session.
    #[serde(default)]
    pub authenticated: bool,
    /// The session's user, when authenticated.
    #[serde(default)]
    pub user: Option<User>,
    /// Token minted for this session, when authenticated.
    #[serde(rename = "jwtToken", default)]
    pub jwt_token: Option<String>,
}

/// Editor submission body. Serializes to exactly the create/update payload
/// the backend expects (tags re-joined into its comma-separated column).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostDraft {
    /// Post title; validated non-empty before submit.
    pub title: String,
    /// Full HTML body from the editor.
    pub content: String,
    /// Category slug.
    pub category: String,
    /// Comma-separated tags.
    pub tags: String,
    /// Promote to the top of the default sort.
    pub featured: bool,
    /// `PUBLISHED` or `DRAFT`.
    pub status: PostStatus,
}

/// Profile update body; email is immutable and therefore absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileUpdate {
    /// New given name.
    #[serde(rename = "firstName")]
    pub first_name: String,
    /// New family name.
    #[serde(rename = "lastName")]
    pub last_name: String,
}

/// Site visit counters shown in the footer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VisitorStats {
    /// Visitors counted today.
    #[serde(rename = "todayVisitors", default)]
    pub today_visitors: u64,
    /// All-time visitor count.
    #[serde(rename = "totalVisitors", default)]
    pub total_visitors: u64,
}

// ---------- request plumbing ----------

#[cfg(not(feature = "mock"))]
fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    // Cookies always ride along for the session-based OAuth flow; the
    // bearer header only when a token is stored.
    let builder = builder.credentials(RequestCredentials::Include);
    match crate::storage::auth_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

#[cfg(not(feature = "mock"))]
async fn send(builder: RequestBuilder) -> Result<Response, String> {
    let response = builder
        .build()
        .map_err(|e| format!("Request error: {e:?}"))?
        .send()
        .await
        .map_err(|e| format!("Network error: {e:?}"))?;
    Ok(response)
}

#[cfg(not(feature = "mock"))]
fn log_error(context: &str, message: &str) {
    web_sys::console::error_1(&format!("{context}: {message}").into());
}

#[cfg(not(feature = "mock"))]
fn is_auth_status(status: u16) -> bool {
    status == 401 || status == 403
}

// ---------- blog read endpoints ----------

/// Fetch one page of posts (`GET /blog/posts`).
///
/// This is the only call with a fixture fallback: when the backend is
/// unreachable the built-in sample set is returned with `success = true`,
/// so the listing still renders something meaningful.
pub async fn fetch_posts(page: usize, size: usize) -> PostPage {
    #[cfg(feature = "mock")]
    {
        let _ = (page, size);
        return models::fixture_page();
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{API_BASE}/blog/posts?page={page}&size={size}");
        match fetch_post_page(&url).await {
            Ok(page) => page,
            Err(err) => {
                log_error("Failed to fetch posts", &err);
                models::fixture_page()
            },
        }
    }
}

/// Fetch one page of posts in a category
/// (`GET /blog/posts/category/{category}`). Failures yield an empty page.
pub async fn fetch_posts_by_category(category: &str, page: usize, size: usize) -> PostPage {
    #[cfg(feature = "mock")]
    {
        let _ = (page, size);
        let mut fixture = models::fixture_page();
        fixture.posts.retain(|post| post.category.eq_ignore_ascii_case(category));
        fixture.total_elements = fixture.posts.len();
        return fixture;
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!(
            "{API_BASE}/blog/posts/category/{}?page={page}&size={size}",
            urlencoding::encode(category)
        );
        match fetch_post_page(&url).await {
            Ok(page) => page,
            Err(err) => {
                log_error("Failed to fetch category posts", &err);
                PostPage::empty(false)
            },
        }
    }
}

/// Server-side keyword search (`GET /blog/posts/search`). Failures yield an
/// empty page.
pub async fn search_posts(keyword: &str, page: usize, size: usize) -> PostPage {
    if keyword.trim().is_empty() {
        return PostPage::empty(true);
    }

    #[cfg(feature = "mock")]
    {
        let _ = (page, size);
        let needle = keyword.trim().to_lowercase();
        let mut fixture = models::fixture_page();
        fixture.posts.retain(|post| post.title.to_lowercase().contains(&needle));
        fixture.total_elements = fixture.posts.len();
        return fixture;
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!(
            "{API_BASE}/blog/posts/search?keyword={}&page={page}&size={size}",
            urlencoding::encode(keyword.trim())
        );
        match fetch_post_page(&url).await {
            Ok(page) => page,
            Err(err) => {
                log_error("Failed to search posts", &err);
                PostPage::empty(false)
            },
        }
    }
}

#[cfg(not(feature = "mock"))]
async fn fetch_post_page(url: &str) -> Result<PostPage, String> {
    let response = send(with_auth(Request::get(url))).await?;
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let body: PaginatedPostsResponse =
        response.json().await.map_err(|e| format!("Parse error: {e:?}"))?;
    if !body.success {
        return Err(body.message.unwrap_or_else(|| "Request failed".to_string()));
    }

    let total_elements = body.total_elements.unwrap_or(body.posts.len());
    Ok(PostPage {
        posts: body.posts.into_iter().map(BackendPost::into_post).collect(),
        current_page: body.current_page.unwrap_or(1),
        total_pages: body.total_pages.unwrap_or(1),
        total_elements,
        success: true,
    })
}

/// Fetch a single post (`GET /blog/posts/{id}`). `None` covers both a 404
/// and any transport failure, so callers render the not-found state.
pub async fn fetch_post(id: i64) -> Option<Post> {
    #[cfg(feature = "mock")]
    {
        return models::fixture_page().posts.into_iter().find(|post| post.id == id);
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{API_BASE}/blog/posts/{id}");
        let response = match send(with_auth(Request::get(&url))).await {
            Ok(response) => response,
            Err(err) => {
                log_error("Failed to fetch post", &err);
                return None;
            },
        };

        if !response.ok() {
            if response.status() != 404 {
                log_error("Failed to fetch post", &format!("HTTP error: {}", response.status()));
            }
            return None;
        }

        match response.json::<BackendPost>().await {
            Ok(post) => Some(post.into_post()),
            Err(err) => {
                log_error("Failed to parse post", &format!("{err:?}"));
                None
            },
        }
    }
}

/// Related posts for the detail page: a small random sample of other
/// published posts, never including the one being read.
pub async fn fetch_related_posts(current_id: i64, count: usize) -> Vec<Post> {
    let page = fetch_posts(1, BULK_PAGE_SIZE).await;
    let mut candidates: Vec<Post> =
        page.posts.into_iter().filter(|post| post.id != current_id).collect();

    #[cfg(not(feature = "mock"))]
    shuffle(&mut candidates);

    candidates.truncate(count);
    candidates
}

// Fisher-Yates with the browser's RNG; sampling quality is irrelevant here.
#[cfg(not(feature = "mock"))]
fn shuffle(posts: &mut [Post]) {
    for i in (1..posts.len()).rev() {
        let j = (js_sys::Math::random() * (i + 1) as f64) as usize;
        posts.swap(i, j.min(i));
    }
}

// ---------- likes ----------

/// Toggle the viewer's like (`POST /blog/posts/{id}/like`). The response
/// carries the authoritative count; authentication-class answers map to
/// [`LikeError::LoginRequired`].
pub async fn toggle_like(post_id: i64) -> Result<LikeStatus, LikeError> {
    #[cfg(feature = "mock")]
    {
        let _ = post_id;
        return Ok(LikeStatus { is_liked: true, like_count: 1 });
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{API_BASE}/blog/posts/{post_id}/like");
        let response =
            send(with_auth(Request::post(&url))).await.map_err(LikeError::Request)?;

        if is_auth_status(response.status()) {
            return Err(LikeError::LoginRequired);
        }
        if !response.ok() {
            return Err(LikeError::Request(format!("HTTP error: {}", response.status())));
        }

        let body: LikeToggleResponse = response
            .json()
            .await
            .map_err(|e| LikeError::Request(format!("Parse error: {e:?}")))?;
        if !body.success {
            return Err(LikeError::Request(
                body.message.unwrap_or_else(|| "Failed to toggle like".to_string()),
            ));
        }

        Ok(LikeStatus { is_liked: body.is_liked, like_count: body.like_count })
    }
}

/// Current like state for one post (`GET /blog/posts/{id}/like-status`).
pub async fn fetch_like_status(post_id: i64) -> Result<LikeStatus, String> {
    #[cfg(feature = "mock")]
    {
        let _ = post_id;
        return Ok(LikeStatus { is_liked: false, like_count: 0 });
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{API_BASE}/blog/posts/{post_id}/like-status");
        let response = send(with_auth(Request::get(&url))).await?;
        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        let body: LikeToggleResponse =
            response.json().await.map_err(|e| format!("Parse error: {e:?}"))?;
        Ok(LikeStatus { is_liked: body.is_liked, like_count: body.like_count })
    }
}

/// Posts the session user has liked (`GET /blog/posts/my-likes`).
pub async fn fetch_my_likes() -> Result<Vec<Post>, String> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::fixture_page().posts.into_iter().filter(|p| p.is_liked).collect());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{API_BASE}/blog/posts/my-likes");
        let page = fetch_post_page(&url).await?;
        Ok(page.posts)
    }
}

// ---------- editor ----------

/// Create a post (`POST /blog/posts`).
pub async fn create_post(draft: &PostDraft) -> Result<Post, String> {
    submit_post(draft, None).await
}

/// Replace a post's content and metadata (`PUT /blog/posts/{id}`).
pub async fn update_post(id: i64, draft: &PostDraft) -> Result<Post, String> {
    submit_post(draft, Some(id)).await
}

async fn submit_post(draft: &PostDraft, id: Option<i64>) -> Result<Post, String> {
    #[cfg(feature = "mock")]
    {
        let mut post = models::fixture_page()
            .posts
            .into_iter()
            .next()
            .ok_or_else(|| "no fixture posts".to_string())?;
        post.id = id.unwrap_or(999);
        post.title = draft.title.clone();
        return Ok(post);
    }

    #[cfg(not(feature = "mock"))]
    {
        let builder = match id {
            Some(id) => Request::put(&format!("{API_BASE}/blog/posts/{id}")),
            None => Request::post(&format!("{API_BASE}/blog/posts")),
        };
        let response = with_auth(builder)
            .header("Content-Type", "application/json")
            .json(draft)
            .map_err(|e| format!("Serialize error: {e:?}"))?
            .send()
            .await
            .map_err(|e| format!("Network error: {e:?}"))?;

        if !response.ok() {
            // Write-path errors surface the server's message when it sends
            // one, else the status line.
            let status = response.status();
            let message = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|value| value.get("message")?.as_str().map(str::to_string));
            return Err(message.unwrap_or_else(|| format!("HTTP error: {status}")));
        }

        let body: BackendPost =
            response.json().await.map_err(|e| format!("Parse error: {e:?}"))?;
        Ok(body.into_post())
    }
}

// ---------- auth ----------

/// Password login (`POST /auth/login`).
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, String> {
    auth_submit("login", &serde_json::json!({ "email": email, "password": password })).await
}

/// Account registration (`POST /auth/register`).
pub async fn register(
    email: &str,
    password: &str,
    first_name: &str,
    last_name: &str,
) -> Result<AuthResponse, String> {
    auth_submit(
        "register",
        &serde_json::json!({
            "email": email,
            "password": password,
            "firstName": first_name,
            "lastName": last_name,
        }),
    )
    .await
}

#[cfg(feature = "mock")]
async fn auth_submit(action: &str, body: &serde_json::Value) -> Result<AuthResponse, String> {
    let _ = action;
    let email = body.get("email").and_then(|v| v.as_str()).unwrap_or("mock@example.com");
    Ok(AuthResponse { token: "mock-token".to_string(), user: models::fixture_user(email), message: None })
}

#[cfg(not(feature = "mock"))]
async fn auth_submit(action: &str, body: &serde_json::Value) -> Result<AuthResponse, String> {
    let url = format!("{API_BASE}/auth/{action}");
    let response = with_auth(Request::post(&url))
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|e| format!("Serialize error: {e:?}"))?
        .send()
        .await
        .map_err(|e| format!("Network error: {e:?}"))?;

    let status = response.status();
    let value: serde_json::Value =
        response.json().await.map_err(|e| format!("Parse error: {e:?}"))?;

    if status >= 400 {
        let message = value
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP error: {status}"));
        return Err(message);
    }

    serde_json::from_value(value).map_err(|e| format!("Parse error: {e:?}"))
}

/// Update the profile names (`PUT /auth/profile`). Returns the refreshed
/// user.
pub async fn update_profile(update: &ProfileUpdate) -> Result<User, String> {
    #[cfg(feature = "mock")]
    {
        let mut user = models::fixture_user("mock@example.com");
        user.first_name = update.first_name.clone();
        user.last_name = update.last_name.clone();
        return Ok(user);
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{API_BASE}/auth/profile");
        let response = with_auth(Request::put(&url))
            .header("Content-Type", "application/json")
            .json(update)
            .map_err(|e| format!("Serialize error: {e:?}"))?
            .send()
            .await
            .map_err(|e| format!("Network error: {e:?}"))?;

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        response.json().await.map_err(|e| format!("Parse error: {e:?}"))
    }
}

/// Probe the cookie session after an OAuth redirect (`GET /session/user`).
pub async fn fetch_session_user() -> Result<SessionUser, String> {
    #[cfg(feature = "mock")]
    {
        return Ok(SessionUser {
            authenticated: true,
            user: Some(models::fixture_user("mock@example.com")),
            jwt_token: Some("mock-token".to_string()),
        });
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{API_BASE}/session/user");
        let response = send(with_auth(Request::get(&url))).await?;
        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }
        response.json().await.map_err(|e| format!("Parse error: {e:?}"))
    }
}

/// Fetch the OAuth account's profile (`GET /auth/profile`).
pub async fn fetch_oauth_profile() -> Result<User, String> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::fixture_user("mock@example.com"));
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{API_BASE}/auth/profile");
        let response = send(with_auth(Request::get(&url))).await?;
        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }
        response.json().await.map_err(|e| format!("Parse error: {e:?}"))
    }
}

// ---------- visitor counters ----------

/// Site visit counters (`GET /api/visitor/stats`). On failure the footer
/// simply renders without counters.
pub async fn fetch_visitor_stats() -> Option<VisitorStats> {
    #[cfg(feature = "mock")]
    {
        return Some(VisitorStats { today_visitors: 12, total_visitors: 3_456 });
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{API_BASE}/api/visitor/stats");
        let response = send(with_auth(Request::get(&url))).await.ok()?;
        if !response.ok() {
            return None;
        }
        response.json().await.ok()
    }
}

/// Count one visit (`POST /api/visitor/track`). Fire-and-forget.
pub async fn track_visit() {
    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{API_BASE}/api/visitor/track");
        if let Err(err) = send(with_auth(Request::post(&url))).await {
            log_error("Failed to track visit", &err);
        }
    }
}
