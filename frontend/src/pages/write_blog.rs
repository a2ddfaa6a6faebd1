use hfpv_shared::{Category, PostStatus};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api::{self, PostDraft},
    auth_context::use_auth,
    components::{error_banner::ErrorBanner, loading_spinner::LoadingSpinner},
    router::Route,
    utils::set_document_title,
};

#[derive(Properties, PartialEq)]
pub struct WriteBlogProps {
    /// `Some` puts the editor in edit mode for that post.
    pub id: Option<i64>,
}

#[derive(Clone, PartialEq)]
struct EditorFields {
    title: String,
    content: String,
    category: Category,
    tags: String,
    featured: bool,
    status: PostStatus,
}

impl Default for EditorFields {
    fn default() -> Self {
        EditorFields {
            title: String::new(),
            content: String::new(),
            category: Category::Filming,
            tags: String::new(),
            featured: false,
            status: PostStatus::Published,
        }
    }
}

impl EditorFields {
    fn to_draft(&self) -> PostDraft {
        PostDraft {
            title: self.title.trim().to_string(),
            content: self.content.clone(),
            category: self.category.as_str().to_string(),
            tags: self.tags.trim().to_string(),
            featured: self.featured,
            status: self.status,
        }
    }
}

/// Post editor: create and update, including the publish/unpublish
/// transition. Only Admin/Root accounts get past the gate.
#[function_component(WriteBlogPage)]
pub fn write_blog_page(props: &WriteBlogProps) -> Html {
    let auth = use_auth();
    let navigator = use_navigator();
    let fields = use_state(EditorFields::default);
    let loading_existing = use_state(|| props.id.is_some());
    let submitting = use_state(|| false);
    let error = use_state(String::new);
    let validation = use_state(|| None::<&'static str>);
    let alive = use_mut_ref(|| true);

    let editing = props.id;
    let can_write = auth.user.as_ref().is_some_and(|user| user.role.can_write());
    let can_unpublish = auth
        .user
        .as_ref()
        .is_some_and(|user| user.role == hfpv_shared::UserRole::Root);

    use_effect_with((), |_| set_document_title("Write"));

    // Edit mode prefills from the existing post.
    {
        let fields = fields.clone();
        let loading_existing = loading_existing.clone();
        let error = error.clone();
        let alive = alive.clone();
        use_effect_with(editing, move |id| {
            let id = *id;
            let alive_for_cleanup = alive.clone();
            if let Some(id) = id {
                spawn_local(async move {
                    let fetched = api::fetch_post(id).await;
                    if !*alive.borrow() {
                        return;
                    }
                    match fetched {
                        Some(post) => fields.set(EditorFields {
                            title: post.title,
                            content: post.content.unwrap_or_default(),
                            category: Category::parse(&post.category)
                                .unwrap_or(Category::Filming),
                            tags: post.tags.join(", "),
                            featured: post.featured,
                            status: post.status,
                        }),
                        None => error.set("Could not load the post for editing.".to_string()),
                    }
                    loading_existing.set(false);
                });
            }
            move || {
                *alive_for_cleanup.borrow_mut() = false;
            }
        });
    }

    if !can_write {
        return html! {
            <main class={classes!("write-page")}>
                <div class={classes!("access-denied")}>
                    <h2>{ "Writing is restricted" }</h2>
                    <p>{ "Only site authors can create posts." }</p>
                    {
                        if auth.is_logged_in() {
                            html! {
                                <Link<Route> to={Route::Blog} classes={classes!("back-link")}>
                                    { "← Back to blog" }
                                </Link<Route>>
                            }
                        } else {
                            html! {
                                <Link<Route> to={Route::Login} classes={classes!("back-link")}>
                                    { "Log in" }
                                </Link<Route>>
                            }
                        }
                    }
                </div>
            </main>
        };
    }

    if *loading_existing {
        return html! {
            <main class={classes!("write-page")}>
                <LoadingSpinner />
            </main>
        };
    }

    let on_title_input = {
        let fields = fields.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*fields).clone();
                next.title = input.value();
                fields.set(next);
            }
        })
    };

    let on_content_input = {
        let fields = fields.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                let mut next = (*fields).clone();
                next.content = area.value();
                fields.set(next);
            }
        })
    };

    let on_tags_input = {
        let fields = fields.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*fields).clone();
                next.tags = input.value();
                fields.set(next);
            }
        })
    };

    let on_category_change = {
        let fields = fields.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                let mut next = (*fields).clone();
                next.category = Category::parse(&select.value()).unwrap_or(next.category);
                fields.set(next);
            }
        })
    };

    let on_featured_toggle = {
        let fields = fields.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*fields).clone();
                next.featured = input.checked();
                fields.set(next);
            }
        })
    };

    let on_status_toggle = {
        let fields = fields.clone();
        Callback::from(move |_| {
            let mut next = (*fields).clone();
            next.status = match next.status {
                PostStatus::Published => PostStatus::Draft,
                PostStatus::Draft => PostStatus::Published,
            };
            fields.set(next);
        })
    };

    let on_submit = {
        let fields = fields.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        let validation = validation.clone();
        let navigator = navigator.clone();
        let alive = alive.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *submitting {
                return;
            }

            let current = (*fields).clone();
            if current.title.trim().is_empty() {
                validation.set(Some("A title is required."));
                return;
            }
            if current.content.trim().is_empty() {
                validation.set(Some("The post body is empty."));
                return;
            }
            validation.set(None);

            submitting.set(true);
            let draft = current.to_draft();
            let submitting = submitting.clone();
            let error = error.clone();
            let navigator = navigator.clone();
            let alive = alive.clone();
            spawn_local(async move {
                let result = match editing {
                    Some(id) => api::update_post(id, &draft).await,
                    None => api::create_post(&draft).await,
                };
                if !*alive.borrow() {
                    return;
                }
                match result {
                    Ok(post) => {
                        if let Some(navigator) = navigator.as_ref() {
                            navigator.push(&Route::BlogDetail { id: post.id });
                        }
                    },
                    Err(message) => {
                        error.set(message);
                        submitting.set(false);
                    },
                }
            });
        })
    };

    let heading = if editing.is_some() { "Edit post" } else { "Write a post" };
    let is_draft = fields.status == PostStatus::Draft;
    let status_label = match fields.status {
        PostStatus::Published => "Published",
        PostStatus::Draft => "Draft",
    };

    html! {
        <main class={classes!("write-page")}>
            <h1>{ heading }</h1>

            {
                if error.is_empty() {
                    html! {}
                } else {
                    html! { <ErrorBanner message={(*error).clone()} auto_dismiss={false} /> }
                }
            }
            {
                match *validation {
                    Some(message) => html! {
                        <p class={classes!("field-error")} role="alert">{ message }</p>
                    },
                    None => html! {},
                }
            }

            <form class={classes!("editor-form")} onsubmit={on_submit}>
                <label class={classes!("form-field")}>
                    { "Title" }
                    <input
                        type="text"
                        value={fields.title.clone()}
                        oninput={on_title_input}
                        placeholder="Post title"
                    />
                </label>

                <div class={classes!("editor-row")}>
                    <label class={classes!("form-field")}>
                        { "Category" }
                        <select onchange={on_category_change}>
                            { for Category::ALL.iter().map(|category| html! {
                                <option
                                    value={category.as_str()}
                                    selected={fields.category == *category}
                                >
                                    { category.label() }
                                </option>
                            }) }
                        </select>
                    </label>

                    <label class={classes!("form-field")}>
                        { "Tags" }
                        <input
                            type="text"
                            value={fields.tags.clone()}
                            oninput={on_tags_input}
                            placeholder="comma, separated, tags"
                        />
                    </label>

                    <label class={classes!("form-field", "form-checkbox")}>
                        <input
                            type="checkbox"
                            checked={fields.featured}
                            onchange={on_featured_toggle}
                        />
                        { "Featured" }
                    </label>
                </div>

                <label class={classes!("form-field")}>
                    { "Body" }
                    <textarea
                        class={classes!("editor-body")}
                        value={fields.content.clone()}
                        oninput={on_content_input}
                        rows="18"
                        placeholder="Write in HTML; the rich editor mounts here in the browser build."
                    />
                </label>

                <div class={classes!("editor-actions")}>
                    {
                        // Unpublishing an already-published post is a Root
                        // affordance; drafts and new posts are fair game
                        // for any author.
                        if can_unpublish || is_draft || editing.is_none() {
                            html! {
                                <button
                                    type="button"
                                    class={classes!("status-toggle")}
                                    onclick={on_status_toggle}
                                >
                                    { format!("Status: {status_label}") }
                                </button>
                            }
                        } else {
                            html! {
                                <span class={classes!("status-toggle", "status-fixed")}>
                                    { format!("Status: {status_label}") }
                                </span>
                            }
                        }
                    }
                    <button type="submit" class={classes!("submit-btn")} disabled={*submitting}>
                        { if editing.is_some() { "Save changes" } else { "Publish" } }
                    </button>
                </div>
            </form>
        </main>
    }
}
