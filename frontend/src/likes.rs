//! Like-toggle reconciliation.
//!
//! The server owns like state. The client may show an optimistic value while
//! a toggle is in flight, but whatever the server answers replaces it, so
//! two viewers hammering the same post can never drift apart.

use hfpv_shared::{LikeStatus, Post};

/// Why a like action did not produce a server status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LikeError {
    /// No session, or the backend answered with an authentication-class
    /// status mid-flight. The caller surfaces the login prompt.
    LoginRequired,
    /// Transport or server failure; message is user-displayable.
    Request(String),
}

/// Toggle the viewer's like on a post.
///
/// Without a session this rejects locally — zero network calls — so the
/// login prompt appears immediately.
pub async fn toggle(post_id: i64, logged_in: bool) -> Result<LikeStatus, LikeError> {
    if !logged_in {
        return Err(LikeError::LoginRequired);
    }
    crate::api::toggle_like(post_id).await
}

/// Copy a server like response over the matching post in a fetched list.
/// Posts with other ids are untouched; an unknown id is a no-op (the list
/// may have been refetched since the toggle started).
pub fn reconcile(posts: &mut [Post], post_id: i64, status: LikeStatus) {
    if let Some(post) = posts.iter_mut().find(|post| post.id == post_id) {
        post.apply_like_status(status);
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use hfpv_shared::PostStatus;

    use super::*;

    fn post(id: i64, likes: u32, is_liked: bool) -> Post {
        Post {
            id,
            title: format!("post {id}"),
            excerpt: String::new(),
            content: None,
            category: "filming".into(),
            date: "2024-01-01".into(),
            read_time: "1 min".into(),
            author: "Admin".into(),
            tags: vec![],
            featured: false,
            image: String::new(),
            status: PostStatus::Published,
            likes,
            is_liked,
            view_count: 0,
        }
    }

    #[test]
    fn toggle_without_session_rejects_before_any_network_call() {
        // `toggle` returns before touching the HTTP layer, which would
        // panic off-browser; completing at all proves no request was made.
        let result = block_on(toggle(1, false));
        assert_eq!(result, Err(LikeError::LoginRequired));
    }

    #[test]
    fn reconcile_takes_the_server_count_verbatim() {
        let mut posts = vec![post(1, 10, false), post(2, 4, true)];

        reconcile(&mut posts, 1, LikeStatus { is_liked: true, like_count: 11 });

        assert_eq!(posts[0].likes, 11);
        assert!(posts[0].is_liked);
        // Neighbouring posts are untouched.
        assert_eq!(posts[1].likes, 4);
        assert!(posts[1].is_liked);
    }

    #[test]
    fn reconcile_overwrites_any_optimistic_value() {
        // A client that optimistically bumped 10 -> 11 must still accept a
        // contradicting server answer (say another viewer unliked first).
        let mut posts = vec![post(1, 11, true)];
        reconcile(&mut posts, 1, LikeStatus { is_liked: true, like_count: 12 });
        assert_eq!(posts[0].likes, 12);
    }

    #[test]
    fn reconcile_with_unknown_id_is_a_no_op() {
        let mut posts = vec![post(1, 10, false)];
        reconcile(&mut posts, 99, LikeStatus { is_liked: true, like_count: 1 });
        assert_eq!(posts[0].likes, 10);
        assert!(!posts[0].is_liked);
    }
}
