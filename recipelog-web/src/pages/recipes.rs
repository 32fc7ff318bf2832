//! Recipe views. Only the routing and access rules exist so far.

use crate::routes::MainRoute;
use yew::{Html, Properties, function_component, html};
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct RecipeProps {
    pub id: u64,
}

#[function_component(RecipesPage)]
pub fn recipes_page() -> Html {
    html! {
        <div class="p-4 space-y-4">
            <h1 class="text-2xl font-bold">{"Recipes"}</h1>
            <Link<MainRoute> to={MainRoute::RecipeCreate} classes="btn btn-primary">
                {"New recipe"}
            </Link<MainRoute>>
        </div>
    }
}

#[function_component(RecipeCreatePage)]
pub fn recipe_create_page() -> Html {
    html! {
        <div class="p-4">
            <h1 class="text-2xl font-bold">{"New recipe"}</h1>
        </div>
    }
}

#[function_component(RecipeDetailPage)]
pub fn recipe_detail_page(props: &RecipeProps) -> Html {
    html! {
        <div class="p-4 space-y-4">
            <h1 class="text-2xl font-bold">{format!("Recipe #{}", props.id)}</h1>
            <Link<MainRoute> to={MainRoute::RecipeEdit { id: props.id }} classes="btn">
                {"Edit"}
            </Link<MainRoute>>
        </div>
    }
}

#[function_component(RecipeEditPage)]
pub fn recipe_edit_page(props: &RecipeProps) -> Html {
    html! {
        <div class="p-4">
            <h1 class="text-2xl font-bold">{format!("Edit recipe #{}", props.id)}</h1>
        </div>
    }
}
