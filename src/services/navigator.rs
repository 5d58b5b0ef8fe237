use gloo::utils::window;

/// Page-level navigation.
pub trait Navigator {
    fn go_to(&self, url: &str);
    fn reload(&self);
}

/// Navigates the current window.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn go_to(&self, url: &str) {
        if let Err(e) = window().location().set_href(url) {
            crate::log_err!("Navigation failed", &format!("{url}: {e:?}"));
        }
    }

    fn reload(&self) {
        if let Err(e) = window().location().reload() {
            crate::log_err!("Reload failed", &format!("{e:?}"));
        }
    }
}
