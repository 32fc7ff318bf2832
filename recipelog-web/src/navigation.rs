//! Browser location access and the redirect payload carried between guards.

use crate::routes::MainRoute;
use log::warn;
use std::fmt;

/// Read and replace the page location outside the router.
///
/// The HTTP layer uses this to force a full reload of the login view once a
/// session can no longer be refreshed.
pub trait PageLocation: fmt::Debug {
    /// The path part of the current URL, e.g. `/recipes`.
    fn pathname(&self) -> String;

    /// Navigate the whole page to `href`.
    fn assign(&self, href: &str);
}

/// `window.location`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserLocation;

impl PageLocation for BrowserLocation {
    fn pathname(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .unwrap_or_default()
    }

    fn assign(&self, href: &str) {
        let Some(window) = web_sys::window() else {
            warn!("No window available to navigate to {href}");
            return;
        };
        if window.location().set_href(href).is_err() {
            warn!("Navigation to {href} was rejected");
        }
    }
}

/// Where the user was headed when the protected guard sent them to login.
///
/// Stored as router location state on the redirect so the public guard can
/// send the user back after a successful sign-in.
#[derive(Debug, Clone, PartialEq)]
pub struct RedirectFrom {
    pub route: MainRoute,
}

impl RedirectFrom {
    pub fn new(route: MainRoute) -> Self {
        Self { route }
    }
}
