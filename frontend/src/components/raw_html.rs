use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct RawHtmlProps {
    /// Server-provided HTML. Sanitized before it touches the DOM.
    pub html: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Render backend HTML (editor output) into a host element Yew does not
/// diff. The markup is sanitized first; post bodies come from the server,
/// but they originate in a rich-text editor and are not trusted blindly.
#[function_component(RawHtml)]
pub fn raw_html(props: &RawHtmlProps) -> Html {
    let host_ref = use_node_ref();

    {
        let host_ref = host_ref.clone();
        use_effect_with(props.html.clone(), move |next_html| {
            if let Some(host) = host_ref.cast::<Element>() {
                host.set_inner_html(&sanitize(next_html.as_str()));
            }
            || ()
        });
    }

    html! {
        <div ref={host_ref} class={props.class.clone()} />
    }
}

fn sanitize(html: &str) -> String {
    ammonia::clean(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripts_are_stripped_but_formatting_survives() {
        let cleaned = sanitize(r#"<p>hello <b>world</b></p><script>alert(1)</script>"#);
        assert!(cleaned.contains("<b>world</b>"));
        assert!(!cleaned.contains("script"));
    }

    #[test]
    fn event_handlers_are_stripped() {
        let cleaned = sanitize(r#"<img src="x.png" onerror="steal()">"#);
        assert!(!cleaned.contains("onerror"));
    }
}
