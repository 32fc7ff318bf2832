use yew::{AttrValue, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or(AttrValue::Static("Checking your session"))]
    pub label: AttrValue,
}

/// Placeholder shown while the session is being resolved.
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex items-center justify-center min-h-screen" role="status" aria-live="polite">
            <div class="flex flex-col items-center gap-3">
                <div class="animate-spin rounded-full h-32 w-32 border-b-2 border-primary"></div>
                <span class="text-sm text-base-content/70">{props.label.clone()}</span>
            </div>
        </div>
    }
}
