//! Router and store scaffolding for rendering the guards in tests.

use super::{ProtectedRoute, PublicRoute};
use crate::models::{AuthAction, AuthState};
use crate::routes::{MainRoute, RouteAccess};
use serde_json::json;
use shared::models::User;
use yew::prelude::*;
use yew_router::Router;
use yew_router::history::{AnyHistory, History, MemoryHistory};
use yew_router::prelude::Switch;
use yewdux::YewduxRoot;
use yewdux::prelude::use_dispatch;

pub const OPEN_PAGE: &str = "Open page";
pub const FORM_PAGE: &str = "Visitor form";
pub const GUARDED_PAGE: &str = "Guarded page";
pub const LOADING_LABEL: &str = "Checking your session";

pub fn signed_in() -> AuthState {
    let user: User = serde_json::from_value(json!({
        "id": 1,
        "username": "julia",
        "email": "julia@example.com",
        "date_joined": "2024-03-01T09:30:00Z"
    }))
    .unwrap();
    AuthState::default().reduce(AuthAction::LoadUser(Some(user)))
}

pub fn signed_out() -> AuthState {
    AuthState::default().reduce(AuthAction::LoadUser(None))
}

pub fn history_at(path: &str) -> AnyHistory {
    let history = MemoryHistory::new();
    history.push(path);
    history.into()
}

#[derive(Properties, PartialEq)]
pub struct GuardHarnessProps {
    pub state: AuthState,
    pub history: AnyHistory,
}

/// Every route renders a marker behind the guard its access level picks.
/// Signed-in visitors of a public route without an origin go to `/search`.
#[function_component(GuardHarness)]
pub fn guard_harness(props: &GuardHarnessProps) -> Html {
    html! {
        <YewduxRoot>
            <SeedStore state={props.state.clone()}>
                <Router history={props.history.clone()}>
                    <Switch<MainRoute> render={guarded_switch} />
                </Router>
            </SeedStore>
        </YewduxRoot>
    }
}

fn guarded_switch(route: MainRoute) -> Html {
    match route.access() {
        RouteAccess::Open => html! { <p>{OPEN_PAGE}</p> },
        RouteAccess::Public => html! {
            <PublicRoute redirect_to={MainRoute::Search}>
                <p>{FORM_PAGE}</p>
            </PublicRoute>
        },
        RouteAccess::Protected => html! {
            <ProtectedRoute>
                <p>{GUARDED_PAGE}</p>
            </ProtectedRoute>
        },
    }
}

#[derive(Properties, PartialEq)]
struct SeedStoreProps {
    state: AuthState,
    children: Html,
}

/// Puts `state` into the store before any child reads it.
#[function_component(SeedStore)]
fn seed_store(props: &SeedStoreProps) -> Html {
    let dispatch = use_dispatch::<AuthState>();
    let state = props.state.clone();
    let _seeded = use_memo((), move |_| dispatch.set(state));
    props.children.clone()
}
