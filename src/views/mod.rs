//! Web interface components for Udacitrivia
//!
//! The header is the only component. It reads its navigator from the context, the
//! web root installs the browser one.

/// Navigation header component
mod header;
pub use header::Header;

#[cfg(feature = "web")]
use dioxus::prelude::*;

/// Root of the web build
#[cfg(feature = "web")]
#[component]
pub fn App() -> Element {
    use crate::navigator::{BrowserNavigator, Navigation};

    use_context_provider(|| Navigation::new(BrowserNavigator));

    rsx! {
        Header {}
    }
}
