use crate::actions::use_auth_actions;
use crate::routes::{MainRoute, switch};
use yew::{Html, function_component, html, use_effect_with};
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let actions = use_auth_actions();

    // Hydrate the store from whatever session survived the last visit.
    use_effect_with((), move |()| {
        actions.load_user();
        || ()
    });

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={switch} />
        </BrowserRouter>
    }
}
