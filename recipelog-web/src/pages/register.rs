use super::login::{bind_input, field_error, use_form_cleanup};
use crate::actions::use_auth_actions;
use crate::models::{AuthState, RegisterDraft};
use crate::routes::MainRoute;
use crate::validation::{Field, FieldErrors, validate_registration};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::{Link, use_navigator};
use yewdux::prelude::{use_store, use_store_value};

#[derive(Properties, PartialEq)]
struct TextFieldProps {
    id: AttrValue,
    label: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    kind: AttrValue,
    value: AttrValue,
    oninput: Callback<InputEvent>,
    error: Html,
}

#[function_component(TextField)]
fn text_field(props: &TextFieldProps) -> Html {
    html! {
        <div class="form-control">
            <label class="label" for={props.id.clone()}>
                <span class="label-text">{props.label.clone()}</span>
            </label>
            <input
                id={props.id.clone()}
                name={props.id.clone()}
                class="input input-bordered"
                type={props.kind.clone()}
                value={props.value.clone()}
                oninput={props.oninput.clone()}
            />
            {props.error.clone()}
        </div>
    }
}

fn clearing_errors(
    oninput: Callback<InputEvent>,
    field_errors: &UseStateHandle<FieldErrors>,
) -> Callback<InputEvent> {
    let field_errors = field_errors.clone();
    Callback::from(move |event: InputEvent| {
        oninput.emit(event);
        if !field_errors.is_empty() {
            field_errors.set(FieldErrors::new());
        }
    })
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let state = use_store_value::<AuthState>();
    let actions = use_auth_actions();
    let navigator = use_navigator();
    let (draft, dispatch) = use_store::<RegisterDraft>();
    let field_errors = use_state(FieldErrors::new);
    let submitting = use_state(|| false);

    use_form_cleanup(&dispatch);

    // Any edit dismisses the previous round of field errors.
    let bind = |write: fn(&mut RegisterDraft, String)| {
        clearing_errors(bind_input(&dispatch, write), &field_errors)
    };

    let onsubmit = {
        let request = draft.to_request();
        let field_errors = field_errors.clone();
        let submitting = submitting.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let errors = validate_registration(&request);
            if !errors.is_empty() {
                field_errors.set(errors);
                return;
            }
            submitting.set(true);

            let actions = actions.clone();
            let navigator = navigator.clone();
            let request = request.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                let outcome = actions.register(request).await;
                if outcome.success {
                    if let Some(navigator) = navigator {
                        navigator.replace(&MainRoute::Home);
                    }
                }
                submitting.set(false);
            });
        })
    };

    let is_busy = *submitting;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200 py-12">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" {onsubmit}>
                    <h2 class="card-title text-2xl">{"Create your account"}</h2>
                    <p class="text-sm">
                        {"Or "}
                        <Link<MainRoute> to={MainRoute::Login} classes="link link-primary">
                            {"sign in to your existing account"}
                        </Link<MainRoute>>
                    </p>
                    if let Some(message) = &state.error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="grid grid-cols-2 gap-4">
                        <TextField
                            id="first_name"
                            label="First name"
                            value={draft.first_name.clone()}
                            oninput={bind(|draft, value| draft.first_name = value)}
                            error={field_error(&field_errors, Field::FirstName)}
                        />
                        <TextField
                            id="last_name"
                            label="Last name"
                            value={draft.last_name.clone()}
                            oninput={bind(|draft, value| draft.last_name = value)}
                            error={field_error(&field_errors, Field::LastName)}
                        />
                    </div>
                    <TextField
                        id="email"
                        label="Email address"
                        kind="email"
                        value={draft.email.clone()}
                        oninput={bind(|draft, value| draft.email = value)}
                        error={field_error(&field_errors, Field::Email)}
                    />
                    <TextField
                        id="username"
                        label="Username (optional)"
                        value={draft.username.clone()}
                        oninput={bind(|draft, value| draft.username = value)}
                        error={field_error(&field_errors, Field::Username)}
                    />
                    <TextField
                        id="password"
                        label="Password"
                        kind="password"
                        value={draft.password.clone()}
                        oninput={bind(|draft, value| draft.password = value)}
                        error={field_error(&field_errors, Field::Password)}
                    />
                    <TextField
                        id="password_confirm"
                        label="Confirm password"
                        kind="password"
                        value={draft.password_confirm.clone()}
                        oninput={bind(|draft, value| draft.password_confirm = value)}
                        error={field_error(&field_errors, Field::PasswordConfirm)}
                    />
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={is_busy}>
                            {if is_busy { "Creating account..." } else { "Create account" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
