mod error;
mod home;
pub mod login;
mod recipes;
mod register;
mod search;

pub use error::ErrorPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use recipes::{RecipeCreatePage, RecipeDetailPage, RecipeEditPage, RecipesPage};
pub use register::RegisterPage;
pub use search::SearchPage;
