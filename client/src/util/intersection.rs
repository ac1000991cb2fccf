//! One-shot viewport proximity observer for the board's tail poster.
//!
//! Wraps `IntersectionObserver` so the callback fires at most once: the
//! observer disconnects itself before invoking it. Dropping the handle also
//! disconnects. Requires a browser environment.

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Root margin that counts a poster as "near" the viewport.
pub const NEAR_VIEWPORT_MARGIN: &str = "0px 0px 200px 0px";

/// Live observation of one element.
#[cfg(feature = "hydrate")]
pub struct TailObserver {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

#[cfg(feature = "hydrate")]
impl TailObserver {
    /// Observe `target` and call `on_enter` the first time it nears the viewport.
    ///
    /// Returns `None` if the browser refuses to construct the observer.
    pub fn observe(target: &web_sys::Element, on_enter: impl FnOnce() + 'static) -> Option<Self> {
        let mut on_enter = Some(on_enter);
        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                let intersecting = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<web_sys::IntersectionObserverEntry>().ok())
                    .any(|entry| entry.is_intersecting());
                if !intersecting {
                    return;
                }
                observer.disconnect();
                if let Some(on_enter) = on_enter.take() {
                    on_enter();
                }
            },
        );

        let init = web_sys::IntersectionObserverInit::new();
        init.set_root_margin(NEAR_VIEWPORT_MARGIN);
        let observer =
            web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
        observer.observe(target);
        Some(Self { observer, _callback: callback })
    }
}

#[cfg(feature = "hydrate")]
impl Drop for TailObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
