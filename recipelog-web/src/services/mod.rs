pub mod auth;


pub use auth::{AuthOutcome, AuthService};
