pub mod auth_state;
pub mod form_drafts;

pub use auth_state::{AuthAction, AuthState};
pub use form_drafts::{LoginDraft, RegisterDraft, keeps_draft};
