use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::layout;

#[derive(Debug, Error)]
pub enum ObserverError {
    #[error("intersection observer unavailable: {0}")]
    Unavailable(String),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    /// Pixels trimmed off the bottom of the viewport before testing.
    pub bottom_shrink_px: u32,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: layout::REVEAL_THRESHOLD,
            bottom_shrink_px: layout::VIEWPORT_BOTTOM_SHRINK_PX,
        }
    }
}

impl ObserverOptions {
    /// Options for plain "has it shown up at all" checks such as lazy
    /// images.
    pub fn any_visibility() -> Self {
        Self {
            threshold: 0.0,
            bottom_shrink_px: 0,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn root_margin(&self) -> String {
        if self.bottom_shrink_px == 0 {
            "0px".to_string()
        } else {
            format!("0px 0px -{}px 0px", self.bottom_shrink_px)
        }
    }
}

/// Owns a browser `IntersectionObserver` and the closure it calls back into.
/// Dropping it disconnects the observer, so a component keeps one alive for
/// as long as it wants the callbacks.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ViewportObserver {
    /// `on_enter` runs for every entry that is intersecting, with the
    /// observer so the handler may stop watching its target.
    pub fn new<F>(options: ObserverOptions, mut on_enter: F) -> Result<Self, ObserverError>
    where
        F: FnMut(Element, &IntersectionObserver) + 'static,
    {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        on_enter(entry.target(), &observer);
                    }
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin());

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| ObserverError::Unavailable(format!("{:?}", e)))?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }

    pub fn unobserve(&self, element: &Element) {
        self.observer.unobserve(element);
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observes `node` until the returned guard is dropped. Failures are logged
/// and leave the element inert.
pub fn watch<F>(node: Option<Element>, options: ObserverOptions, on_enter: F) -> Option<ViewportObserver>
where
    F: FnMut(Element, &IntersectionObserver) + 'static,
{
    let element = node?;
    match ViewportObserver::new(options, on_enter) {
        Ok(observer) => {
            observer.observe(&element);
            Some(observer)
        }
        Err(e) => {
            log::warn!("{}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_shrink_viewport_bottom() {
        let options = ObserverOptions::default();
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin(), "0px 0px -50px 0px");
    }

    #[test]
    fn any_visibility_has_no_margin() {
        let options = ObserverOptions::any_visibility();
        assert_eq!(options.threshold, 0.0);
        assert_eq!(options.root_margin(), "0px");
    }

    #[test]
    fn threshold_override_keeps_margin() {
        let options = ObserverOptions::default().with_threshold(0.2);
        assert_eq!(options.threshold, 0.2);
        assert_eq!(options.root_margin(), "0px 0px -50px 0px");
    }
}
