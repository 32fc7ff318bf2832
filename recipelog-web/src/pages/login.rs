use crate::actions::use_auth_actions;
use crate::models::{AuthState, LoginDraft, keeps_draft};
use crate::routes::MainRoute;
use crate::validation::{Field, FieldErrors, validate_login};
use log::debug;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::{use_dispatch, use_store, use_store_value};
use yewdux::{Dispatch, Store};

/// Text-input callback writing into one field of a draft store.
pub(crate) fn bind_input<S: Store + Clone>(
    dispatch: &Dispatch<S>,
    write: fn(&mut S, String),
) -> Callback<InputEvent> {
    let dispatch = dispatch.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            let value = input.value();
            dispatch.reduce_mut(move |draft| write(draft, value));
        }
    })
}

/// Unmount cleanup shared by the forms: drop the store error, and the draft
/// unless the guard is only swapping the form out for a request.
#[hook]
pub(crate) fn use_form_cleanup<S: Store + Default>(draft: &Dispatch<S>) {
    let actions = use_auth_actions();
    let auth = use_dispatch::<AuthState>();
    let draft = draft.clone();
    use_effect_with((), move |()| {
        move || {
            if !keeps_draft(&auth.get()) {
                draft.set(S::default());
            }
            actions.clear_error();
        }
    });
}

/// Inline message for `field`, if any.
pub(crate) fn field_error(errors: &FieldErrors, field: Field) -> Html {
    match errors.get(&field) {
        Some(err) => html! { <p class="text-error text-sm mt-1">{err.to_string()}</p> },
        None => html! {},
    }
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let state = use_store_value::<AuthState>();
    let actions = use_auth_actions();
    let (draft, dispatch) = use_store::<LoginDraft>();
    let field_errors = use_state(FieldErrors::new);
    let submitting = use_state(|| false);

    use_form_cleanup(&dispatch);

    let onsubmit = {
        let draft = draft.clone();
        let field_errors = field_errors.clone();
        let submitting = submitting.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let errors = validate_login(&draft.email, &draft.password);
            if !errors.is_empty() {
                field_errors.set(errors);
                return;
            }
            field_errors.set(FieldErrors::new());
            submitting.set(true);

            let actions = actions.clone();
            let draft = draft.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                let outcome = actions.login(&draft.email, &draft.password).await;
                debug!("Login finished, success: {}", outcome.success);
                submitting.set(false);
            });
        })
    };

    let is_busy = *submitting;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" {onsubmit}>
                    <h2 class="card-title text-2xl">{"Sign in to your account"}</h2>
                    <p class="text-sm">
                        {"Or "}
                        <Link<MainRoute> to={MainRoute::Register} classes="link link-primary">
                            {"create a new account"}
                        </Link<MainRoute>>
                    </p>
                    if let Some(message) = &state.error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{"Email"}</span>
                        </label>
                        <input
                            id="email"
                            class="input input-bordered"
                            type="email"
                            autocomplete="email"
                            value={draft.email.clone()}
                            oninput={bind_input(&dispatch, |draft, value| draft.email = value)}
                        />
                        {field_error(&field_errors, Field::Email)}
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{"Password"}</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            autocomplete="current-password"
                            value={draft.password.clone()}
                            oninput={bind_input(&dispatch, |draft, value| draft.password = value)}
                        />
                        {field_error(&field_errors, Field::Password)}
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={is_busy}>
                            {if is_busy { "Signing in..." } else { "Sign in" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
