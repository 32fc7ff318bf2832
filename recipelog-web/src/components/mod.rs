pub(crate) mod auth_status;
pub(crate) mod guards;
pub(crate) mod loading;

#[cfg(test)]
pub(crate) mod guard_harness;


pub use auth_status::AuthStatus;
pub use guards::{ProtectedRoute, PublicRoute};
pub use loading::Loading;
