mod actions;
mod api;
mod app;
mod components;
mod config;
mod models;
mod navigation;
mod pages;
mod routes;
mod services;
mod storage;
mod validation;





#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_support;

use app::App;
use wasm_bindgen::JsValue;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[function_component(RecipeLogApp)]
fn recipe_log_app() -> Html {
    html! {
        <YewduxRoot>
            <App />
        </YewduxRoot>
    }
}

fn console(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

#[cfg(target_arch = "wasm32")]
fn init_logging() {
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        console(&format!("Logger unavailable: {err}"));
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {}

fn main() {
    // Disable truncation of panic payloads to debug any panics
    std::panic::set_hook(Box::new(|info| {
        if let Some(s) = info.payload().downcast_ref::<String>() {
            console(&format!("Panic: {s}"));
        } else if let Some(s) = info.payload().downcast_ref::<&str>() {
            console(&format!("Panic: {s}"));
        } else {
            console("Unknown panic");
        }
        if let Some(location) = info.location() {
            console(&format!(
                "  at {}:{}:{}",
                location.file(),
                location.line(),
                location.column()
            ));
        }
    }));

    init_logging();
    log::info!("Starting Recipe Log");

    Renderer::<RecipeLogApp>::new().render();
}
