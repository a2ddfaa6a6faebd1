use yew::prelude::*;

use crate::theme_context::{use_theme, Theme};

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let theme = use_theme();
    let is_dark = theme.theme == Theme::Dark;

    let onclick = {
        let toggle = theme.toggle.clone();
        Callback::from(move |_| toggle.emit(()))
    };

    let label = if is_dark { "Switch to light mode" } else { "Switch to dark mode" };
    let icon = if is_dark { "☀" } else { "☾" };

    html! {
        <button
            type="button"
            class={classes!("theme-toggle", props.class.clone())}
            {onclick}
            aria-label={label}
            title={label}
            aria-pressed={is_dark.to_string()}
        >
            <span aria-hidden="true">{ icon }</span>
            <span class={classes!("sr-only")}>{ label }</span>
        </button>
    }
}
