use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
    Large,
}

impl SpinnerSize {
    fn dimension(&self) -> u32 {
        match self {
            SpinnerSize::Small => 20,
            SpinnerSize::Medium => 36,
            SpinnerSize::Large => 52,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or(SpinnerSize::Medium)]
    pub size: SpinnerSize,
    /// Visually-hidden status text for screen readers.
    #[prop_or(AttrValue::Static("Loading..."))]
    pub label: AttrValue,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let style = format!("--spinner-size:{}px;", props.size.dimension());

    html! {
        <div
            class={classes!("spinner-host")}
            role="status"
            aria-live="polite"
            aria-busy="true"
        >
            <div class={classes!("spinner")} {style} />
            <span class={classes!("sr-only")}>{ props.label.clone() }</span>
        </div>
    }
}
