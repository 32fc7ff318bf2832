//! Route guards.
//!
//! Both guards show the loading placeholder while the session is hydrating,
//! then either render their children or replace the current history entry
//! with a redirect. The decision itself lives in plain functions so it can be
//! checked without a browser.

use crate::components::Loading;
use crate::models::AuthState;
use crate::navigation::RedirectFrom;
use crate::routes::MainRoute;
use yew::{Html, Properties, function_component, html, use_effect_with};
use yew_router::hooks::{use_location, use_navigator, use_route};
use yewdux::prelude::use_store_value;

/// What a guard does for the current state.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardOutcome {
    /// Session not known yet; show a placeholder and wait.
    Pending,
    /// Show the guarded content.
    Render,
    /// Leave for `to`, remembering `from` when set.
    Redirect {
        to: MainRoute,
        from: Option<RedirectFrom>,
    },
}

/// Decision for content that needs a signed-in user.
pub fn protected_outcome(state: &AuthState, current: Option<MainRoute>) -> GuardOutcome {
    if state.is_loading {
        GuardOutcome::Pending
    } else if state.is_authenticated() {
        GuardOutcome::Render
    } else {
        GuardOutcome::Redirect {
            to: MainRoute::Login,
            from: current.map(RedirectFrom::new),
        }
    }
}

/// Decision for content meant for signed-out visitors.
///
/// A signed-in user goes back to where the protected guard found them, or to
/// `fallback` when they arrived directly.
pub fn public_outcome(
    state: &AuthState,
    origin: Option<&RedirectFrom>,
    fallback: &MainRoute,
) -> GuardOutcome {
    if state.is_loading {
        GuardOutcome::Pending
    } else if state.is_authenticated() {
        let to = origin.map_or_else(|| fallback.clone(), |origin| origin.route.clone());
        GuardOutcome::Redirect { to, from: None }
    } else {
        GuardOutcome::Render
    }
}

#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ProtectedRoute)]
pub fn protected_route(props: &ProtectedRouteProps) -> Html {
    let state = use_store_value::<AuthState>();
    let current = use_route::<MainRoute>();
    let outcome = protected_outcome(&state, current);
    render_outcome(outcome, &props.children)
}

#[derive(Properties, PartialEq)]
pub struct PublicRouteProps {
    #[prop_or_default]
    pub children: Html,
    /// Where signed-in users go when no origin was carried.
    #[prop_or(MainRoute::Home)]
    pub redirect_to: MainRoute,
}

#[function_component(PublicRoute)]
pub fn public_route(props: &PublicRouteProps) -> Html {
    let state = use_store_value::<AuthState>();
    let origin = use_location().and_then(|location| location.state::<RedirectFrom>());
    let outcome = public_outcome(&state, origin.as_deref(), &props.redirect_to);
    render_outcome(outcome, &props.children)
}

#[derive(Properties, PartialEq)]
struct GuardRedirectProps {
    to: MainRoute,
    from: Option<RedirectFrom>,
}

/// Replace-navigates once mounted, carrying `from` as location state.
#[function_component(GuardRedirect)]
fn guard_redirect(props: &GuardRedirectProps) -> Html {
    let navigator = use_navigator();
    use_effect_with((props.to.clone(), props.from.clone()), move |(to, from)| {
        match (navigator, from) {
            (Some(navigator), Some(from)) => navigator.replace_with_state(to, from.clone()),
            (Some(navigator), None) => navigator.replace(to),
            (None, _) => log::warn!("Guard redirect to {to:?} outside a router"),
        }
        || ()
    });
    html! {}
}

fn render_outcome(outcome: GuardOutcome, children: &Html) -> Html {
    match outcome {
        GuardOutcome::Pending => html! { <Loading /> },
        GuardOutcome::Render => children.clone(),
        GuardOutcome::Redirect { to, from } => html! { <GuardRedirect {to} {from} /> },
    }
}
