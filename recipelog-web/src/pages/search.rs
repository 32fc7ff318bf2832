use yew::{Html, function_component, html};

/// `SearchPage` page component
#[function_component(SearchPage)]
pub fn search_page() -> Html {
    html! {
        <div class="p-4">
            <h1 class="text-2xl font-bold">{"Search recipes"}</h1>
        </div>
    }
}
