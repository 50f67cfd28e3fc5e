//! Navigation targets of the Udacitrivia header
//!
//! The header links to three fixed paths under the current page origin. This module
//! holds those paths, the header layout, and the origin + path concatenation.

#[cfg(any(feature = "prerender", test))]
use serde::Serialize;

/// Title shown at the left of the header
pub const TITLE: &str = "Udacitrivia";

/// A page the header can send the browser to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    List,
    Add,
    Play,
}

impl Destination {
    pub const fn label(self) -> &'static str {
        match self {
            Destination::List => "List",
            Destination::Add => "Add",
            Destination::Play => "Play",
        }
    }

    /// Path appended to the origin, the list page lives at the root
    pub const fn path(self) -> &'static str {
        match self {
            Destination::List => "",
            Destination::Add => "/add",
            Destination::Play => "/play",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Title,
    Tab,
}

/// One clickable element of the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLink {
    pub label: &'static str,
    pub destination: Destination,
    pub kind: LinkKind,
}

/// Header entries in render order
pub const HEADER_LINKS: [HeaderLink; 4] = [
    HeaderLink {
        label: TITLE,
        destination: Destination::List,
        kind: LinkKind::Title,
    },
    HeaderLink {
        label: Destination::List.label(),
        destination: Destination::List,
        kind: LinkKind::Tab,
    },
    HeaderLink {
        label: Destination::Add.label(),
        destination: Destination::Add,
        kind: LinkKind::Tab,
    },
    HeaderLink {
        label: Destination::Play.label(),
        destination: Destination::Play,
        kind: LinkKind::Tab,
    },
];

/// Builds the full page URL for `path`. Plain concatenation, the origin is not normalised.
pub fn target_url(origin: &str, path: &str) -> String {
    format!("{}{}", origin, path)
}

/// A header entry resolved against a concrete origin
#[cfg(any(feature = "prerender", test))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLink {
    pub label: &'static str,
    pub path: &'static str,
    pub target: String,
}

#[cfg(any(feature = "prerender", test))]
pub fn resolve_all(origin: &str) -> Vec<ResolvedLink> {
    HEADER_LINKS
        .iter()
        .map(|link| {
            let path = link.destination.path();
            ResolvedLink {
                label: link.label,
                path,
                target: target_url(origin, path),
            }
        })
        .collect()
}
