use crate::nav::{HeaderLink, LinkKind, HEADER_LINKS};
use crate::navigator::Navigation;
use dioxus::prelude::*;

// every entry triggers a full page load, not a router change
#[component]
pub fn Header() -> Element {
    let navigation = use_context::<Navigation>();
    let on_click = move |link: HeaderLink| {
        let navigation = navigation.clone();
        move |_: MouseEvent| navigation.follow(&link)
    };

    rsx! {
        div { class: "App-header",
            for link in HEADER_LINKS {
                match link.kind {
                    LinkKind::Title => rsx! {
                        h1 { class: "pointer", onclick: on_click(link), "{link.label}" }
                    },
                    LinkKind::Tab => rsx! {
                        h2 { class: "pointer scale", onclick: on_click(link), "{link.label}" }
                    },
                }
            }
        }
    }
}
