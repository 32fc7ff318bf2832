//! # Models
//!
//! Request and response bodies exchanged with the `/auth` endpoints, plus the
//! user record the client caches between page loads.

pub mod auth;
pub mod errors;
pub mod user;

pub use auth::{
    AuthResponse, ChangePasswordRequest, LoginRequest, LogoutRequest, MessageResponse,
    ProfileUpdateResponse, RegisterRequest, RegistrationPayload, TokenRefreshRequest,
    TokenRefreshResponse,
};
pub use errors::{first_validation_error, message_field};
pub use user::{ProfileUpdate, User, UserProfile};
