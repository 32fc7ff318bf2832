use crate::actions::use_auth_actions;
use crate::models::AuthState;
use crate::routes::MainRoute;
use wasm_bindgen_futures::spawn_local;
use yew::{Callback, Html, MouseEvent, function_component, html};
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store_value;

/// Session summary with a sign-out button.
#[function_component(AuthStatus)]
pub fn auth_status() -> Html {
    let state = use_store_value::<AuthState>();
    let actions = use_auth_actions();
    let navigator = use_navigator();

    if state.is_loading {
        return html! { <div>{"Loading authentication status..."}</div> };
    }

    let on_logout = Callback::from(move |_: MouseEvent| {
        let actions = actions.clone();
        let navigator = navigator.clone();
        spawn_local(async move {
            actions.logout().await;
            if let Some(navigator) = navigator {
                navigator.push(&MainRoute::Login);
            }
        });
    });

    html! {
        <div class="card bg-base-200 p-4">
            <h3 class="text-lg font-semibold mb-2">{"Authentication Status"}</h3>
            if let Some(error) = &state.error {
                <div class="text-error mb-2">{format!("Error: {error}")}</div>
            }
            <div class="space-y-2">
                <p>
                    <strong>{"Authenticated: "}</strong>
                    {if state.is_authenticated() { "Yes" } else { "No" }}
                </p>
                if let Some(user) = &state.user {
                    <>
                    <div>
                        <p><strong>{"User: "}</strong>{user.username.clone()}</p>
                        <p><strong>{"Email: "}</strong>{user.email.clone()}</p>
                        <p><strong>{"Name: "}</strong>{user.full_name()}</p>
                    </div>
                    <button class="btn btn-error mt-2" onclick={on_logout}>{"Logout"}</button>
                    </>
                }
            </div>
        </div>
    }
}
