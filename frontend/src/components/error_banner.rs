use yew::prelude::*;
use yew::use_effect_with;
use yew_hooks::prelude::use_timeout;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
    /// Banners for transient read errors dismiss themselves; write-path
    /// errors should pass `false` so the message stays until acted on.
    #[prop_or(true)]
    pub auto_dismiss: bool,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let is_open = use_state(|| true);

    let dismiss = {
        let is_open = is_open.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            if !*is_open {
                return;
            }
            is_open.set(false);
            if let Some(cb) = on_close.as_ref() {
                cb.emit(());
            }
        })
    };

    let auto_timeout = {
        let dismiss = dismiss.clone();
        use_timeout(move || dismiss.emit(()), if props.auto_dismiss { 4000 } else { 0 })
    };

    // A new message re-opens a previously dismissed banner.
    {
        let is_open = is_open.clone();
        use_effect_with(props.message.clone(), move |_| {
            is_open.set(true);
        });
    }

    {
        let auto_timeout = auto_timeout.clone();
        use_effect_with(
            (*is_open, props.auto_dismiss, props.message.clone()),
            move |(visible, auto_dismiss, _message)| {
                if *auto_dismiss && *visible {
                    auto_timeout.reset();
                } else {
                    auto_timeout.cancel();
                }
            },
        );
    }

    if props.message.trim().is_empty() || !*is_open {
        return Html::default();
    }

    let close = {
        let dismiss = dismiss.clone();
        Callback::from(move |_| dismiss.emit(()))
    };

    html! {
        <div class={classes!("error-banner")} role="alert" aria-live="assertive">
            <span class={classes!("error-banner-icon")} aria-hidden="true">{ "⚠" }</span>
            <p class={classes!("error-banner-message")}>{ props.message.clone() }</p>
            <button
                type="button"
                class={classes!("error-banner-close")}
                aria-label="Dismiss error"
                onclick={close}
            >
                { "×" }
            </button>
        </div>
    }
}
