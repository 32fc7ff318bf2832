use crate::components::AuthStatus;
use crate::models::AuthState;
use crate::routes::MainRoute;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

/// Home page component
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let signed_in = use_selector(AuthState::is_authenticated);

    html! {
        <div class="p-8 space-y-6">
            <h1 class="text-2xl font-bold">{"Recipe Log"}</h1>
            <AuthStatus />
            <div class="flex gap-2">
                if *signed_in {
                    <>
                    <Link<MainRoute> to={MainRoute::Recipes} classes="btn btn-primary">
                        {"My recipes"}
                    </Link<MainRoute>>
                    <Link<MainRoute> to={MainRoute::Search} classes="btn">
                        {"Search"}
                    </Link<MainRoute>>
                    </>
                } else {
                    <>
                    <Link<MainRoute> to={MainRoute::Login} classes="btn btn-primary">
                        {"Sign in"}
                    </Link<MainRoute>>
                    <Link<MainRoute> to={MainRoute::Register} classes="btn">
                        {"Create account"}
                    </Link<MainRoute>>
                    </>
                }
            </div>
        </div>
    }
}
