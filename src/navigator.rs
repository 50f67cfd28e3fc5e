//! Full page navigation, injected into the header through the Dioxus context

use std::rc::Rc;

use crate::nav::{target_url, HeaderLink};

/// Access to the page location
pub trait Navigator {
    /// Scheme, host and port of the current page
    fn origin(&self) -> String;
    /// Replaces the current document with `url`
    fn navigate(&self, url: &str);
}

/// Shared handle to the active navigator, provided as context
#[derive(Clone)]
pub struct Navigation(Rc<dyn Navigator>);

impl Navigation {
    pub fn new(navigator: impl Navigator + 'static) -> Self {
        Navigation(Rc::new(navigator))
    }

    /// Sends the browser to `origin + path`. The origin is read at call time.
    pub fn navigate_to(&self, path: &str) {
        let target = target_url(&self.0.origin(), path);
        log::debug!("Navigating to {}", target);
        self.0.navigate(&target);
    }

    pub fn follow(&self, link: &HeaderLink) {
        self.navigate_to(link.destination.path());
    }
}

/// Navigator backed by `window.location`
#[cfg(feature = "web")]
pub struct BrowserNavigator;

#[cfg(feature = "web")]
impl Navigator for BrowserNavigator {
    fn origin(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_default()
    }

    fn navigate(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("No window, cannot navigate to {}", url);
            return;
        };
        if let Err(e) = window.location().set_href(url) {
            log::warn!("Browser rejected navigation to {}: {:?}", url, e);
        }
    }
}

/// Navigator with a fixed origin, used when rendering outside a browser
#[cfg(any(feature = "prerender", test))]
pub struct StaticNavigator {
    origin: String,
}

#[cfg(any(feature = "prerender", test))]
impl StaticNavigator {
    pub fn new(origin: impl Into<String>) -> Self {
        StaticNavigator {
            origin: origin.into(),
        }
    }
}

#[cfg(any(feature = "prerender", test))]
impl Navigator for StaticNavigator {
    fn origin(&self) -> String {
        self.origin.clone()
    }

    fn navigate(&self, url: &str) {
        log::info!("Ignoring navigation to {} outside the browser", url);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::nav::{Destination, HEADER_LINKS};
    use std::cell::RefCell;

    /// Records every navigation instead of performing it
    #[derive(Clone, Default)]
    pub(crate) struct RecordingNavigator {
        pub origin: String,
        pub visited: Rc<RefCell<Vec<String>>>,
    }

    impl RecordingNavigator {
        pub fn with_origin(origin: &str) -> Self {
            RecordingNavigator {
                origin: origin.to_string(),
                visited: Rc::default(),
            }
        }

        pub fn visited(&self) -> Vec<String> {
            self.visited.borrow().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn origin(&self) -> String {
            self.origin.clone()
        }

        fn navigate(&self, url: &str) {
            self.visited.borrow_mut().push(url.to_string());
        }
    }

    fn link_for(label: &str) -> HeaderLink {
        *HEADER_LINKS
            .iter()
            .find(|l| l.label == label)
            .expect("header link exists")
    }

    #[test]
    fn test_each_link_navigates_to_origin_plus_suffix() {
        let recorder = RecordingNavigator::with_origin("https://example.com");
        let navigation = Navigation::new(recorder.clone());

        for (label, suffix) in [("List", ""), ("Add", "/add"), ("Play", "/play")] {
            navigation.follow(&link_for(label));
            let last = recorder.visited().last().cloned();
            assert_eq!(last, Some(format!("https://example.com{}", suffix)));
        }
        assert_eq!(recorder.visited().len(), 3);
    }

    #[test]
    fn test_title_navigates_home() {
        let recorder = RecordingNavigator::with_origin("https://example.com");
        let navigation = Navigation::new(recorder.clone());

        navigation.follow(&link_for("Udacitrivia"));
        assert_eq!(recorder.visited(), vec!["https://example.com".to_string()]);
    }

    #[test]
    fn test_click_add_on_example_origin() {
        let recorder = RecordingNavigator::with_origin("https://example.com");
        Navigation::new(recorder.clone()).navigate_to(Destination::Add.path());
        assert_eq!(recorder.visited(), vec!["https://example.com/add".to_string()]);
    }

    #[test]
    fn test_click_play_on_localhost() {
        let recorder = RecordingNavigator::with_origin("http://localhost:3000");
        Navigation::new(recorder.clone()).follow(&link_for("Play"));
        assert_eq!(
            recorder.visited(),
            vec!["http://localhost:3000/play".to_string()]
        );
    }

    #[test]
    fn test_origin_is_read_at_navigation_time() {
        struct Moving(RefCell<u32>, Rc<RefCell<Vec<String>>>);
        impl Navigator for Moving {
            fn origin(&self) -> String {
                let mut n = self.0.borrow_mut();
                *n += 1;
                format!("http://host{}", n)
            }
            fn navigate(&self, url: &str) {
                self.1.borrow_mut().push(url.to_string());
            }
        }

        let visited = Rc::new(RefCell::new(Vec::new()));
        let navigation = Navigation::new(Moving(RefCell::new(0), visited.clone()));
        navigation.navigate_to("/add");
        navigation.navigate_to("/play");
        assert_eq!(
            *visited.borrow(),
            vec!["http://host1/add".to_string(), "http://host2/play".to_string()]
        );
    }

    #[test]
    fn test_static_navigator_origin() {
        let navigator = StaticNavigator::new("http://localhost:3000");
        assert_eq!(navigator.origin(), "http://localhost:3000");
    }
}
