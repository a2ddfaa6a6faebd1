//! Dark/light theme as an explicit context: read the stored preference at
//! startup, persist every change, and mirror the value onto the document
//! element's `data-theme` attribute for the stylesheet.

use yew::prelude::*;

use crate::config::storage_keys;
use crate::storage;

/// The two supported color schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Light scheme (default).
    #[default]
    Light,
    /// Dark scheme.
    Dark,
}

impl Theme {
    /// Value stored and written to `data-theme`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value; anything unrecognized falls back to light.
    pub fn parse(value: &str) -> Theme {
        if value.eq_ignore_ascii_case("dark") {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// The other scheme.
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

fn apply_to_document(theme: Theme) {
    if let Some(root) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
    {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

/// Shared theme handle: current value plus a toggle callback.
#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    /// Active theme.
    pub theme: Theme,
    /// Flip between light and dark.
    pub toggle: Callback<()>,
}

/// Properties for [`ThemeProvider`].
#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    /// Subtree with access to the theme context.
    #[prop_or_default]
    pub children: Children,
}

/// Mounts the theme context.
#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_state(|| {
        storage::get(storage_keys::THEME).map(|raw| Theme::parse(&raw)).unwrap_or_default()
    });

    {
        let current = *theme;
        use_effect_with(current, move |theme| {
            apply_to_document(*theme);
            storage::set(storage_keys::THEME, theme.as_str());
            || ()
        });
    }

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_| theme.set(theme.toggled()))
    };

    let handle = ThemeHandle { theme: *theme, toggle };

    html! {
        <ContextProvider<ThemeHandle> context={handle}>
            { props.children.clone() }
        </ContextProvider<ThemeHandle>>
    }
}

/// Convenience hook; panics outside [`ThemeProvider`].
#[hook]
pub fn use_theme() -> ThemeHandle {
    use_context::<ThemeHandle>().expect("ThemeProvider missing above this component")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_forgiving() {
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("DARK"), Theme::Dark);
        assert_eq!(Theme::parse("light"), Theme::Light);
        assert_eq!(Theme::parse("solarized"), Theme::Light);
    }

    #[test]
    fn toggled_flips_both_ways() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
