use wasm_bindgen::{closure::Closure, JsCast};

/// The fragment part of the address bar. The app navigates by rewriting it;
/// changes made outside the app (typed URLs, bookmarks) arrive as
/// `hashchange` events.
pub trait UrlFragment {
    fn read(&self) -> String;
    fn write(&self, path: &str);
}

/// `window.location.hash` backend. An address bar without a fragment reads
/// as the root path.
pub struct BrowserFragment;

impl UrlFragment for BrowserFragment {
    fn read(&self) -> String {
        let hash = web_sys::window()
            .and_then(|window| window.location().hash().ok())
            .unwrap_or_default();
        let path = hash.trim_start_matches('#');
        if path.is_empty() {
            "/".to_string()
        } else {
            path.to_string()
        }
    }

    fn write(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            // The browser echoes this back as a hashchange event; resolving
            // the same path a second time lands on the same route.
            let _ = window.location().set_hash(path);
        }
    }
}

/// Runs `callback` on every `hashchange` until the page unloads.
pub fn on_hash_change(callback: impl FnMut() + 'static) {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };
    let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
    window.set_onhashchange(Some(closure.as_ref().unchecked_ref::<js_sys::Function>()));
    closure.forget();
}
