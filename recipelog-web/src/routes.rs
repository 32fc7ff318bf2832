use crate::components::{ProtectedRoute, PublicRoute};
use crate::pages::*;
use log::debug;
use strum::EnumIter;
use yew::prelude::*;
use yew_router::prelude::*;

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/recipes")]
    Recipes,
    #[at("/recipes/create")]
    RecipeCreate,
    #[at("/recipes/:id")]
    RecipeDetail { id: u64 },
    #[at("/recipes/:id/edit")]
    RecipeEdit { id: u64 },
    #[at("/search")]
    Search,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Which guard, if any, wraps a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// Rendered for everyone.
    Open,
    /// Only for signed-out visitors; signed-in users are sent on.
    Public,
    /// Only for signed-in users; everyone else is sent to login.
    Protected,
}

impl MainRoute {
    pub fn access(&self) -> RouteAccess {
        match self {
            Self::Home | Self::NotFound => RouteAccess::Open,
            Self::Login | Self::Register => RouteAccess::Public,
            Self::Recipes
            | Self::RecipeCreate
            | Self::RecipeDetail { .. }
            | Self::RecipeEdit { .. }
            | Self::Search => RouteAccess::Protected,
        }
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    debug!("Switching to main route: {route:?}");
    let page = match route.clone() {
        MainRoute::Home => html! { <HomePage /> },
        MainRoute::Login => html! { <LoginPage /> },
        MainRoute::Register => html! { <RegisterPage /> },
        MainRoute::Recipes => html! { <RecipesPage /> },
        MainRoute::RecipeCreate => html! { <RecipeCreatePage /> },
        MainRoute::RecipeDetail { id } => html! { <RecipeDetailPage {id} /> },
        MainRoute::RecipeEdit { id } => html! { <RecipeEditPage {id} /> },
        MainRoute::Search => html! { <SearchPage /> },
        MainRoute::NotFound => html! { <ErrorPage /> },
    };

    match route.access() {
        RouteAccess::Open => page,
        RouteAccess::Public => html! { <PublicRoute>{page}</PublicRoute> },
        RouteAccess::Protected => html! { <ProtectedRoute>{page}</ProtectedRoute> },
    }
}
