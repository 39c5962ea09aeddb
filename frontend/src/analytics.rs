//! Conversion tracking.
//!
//! Components never look for tracking globals themselves. They receive an
//! [`Analytics`] handle from context, which wraps whatever sink the app was
//! started with and defaults to dropping every event.

use std::rc::Rc;

use serde::Serialize;
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    pub name: String,
    pub category: String,
    pub label: String,
    pub value: Option<u32>,
    pub data: Value,
}

impl AnalyticsEvent {
    pub fn form_submission(data: Value) -> Self {
        Self {
            name: "form_submission".to_string(),
            category: "conversion".to_string(),
            label: "consultation_request".to_string(),
            value: Some(2000),
            data,
        }
    }

    pub fn button_click(button_text: &str, location: &str) -> Self {
        Self {
            name: "button_click".to_string(),
            category: "engagement".to_string(),
            label: location.to_string(),
            value: None,
            data: json!({
                "button_text": button_text.trim(),
                "location": location,
            }),
        }
    }

    pub fn is_lead(&self) -> bool {
        self.name == "form_submission"
    }
}

pub trait AnalyticsSink {
    fn track(&self, event: &AnalyticsEvent);
}

pub struct NoopSink;

impl AnalyticsSink for NoopSink {
    fn track(&self, _event: &AnalyticsEvent) {}
}

pub struct ConsoleSink;

impl AnalyticsSink for ConsoleSink {
    fn track(&self, event: &AnalyticsEvent) {
        log::info!("Conversion tracked: {} {}", event.name, event.data);
    }
}

/// Forwards events to `gtag` / `fbq` when the page loaded them. Missing
/// globals are skipped silently.
pub struct GlobalTagSink;

impl GlobalTagSink {
    fn global_function(name: &str) -> Option<js_sys::Function> {
        let window = web_sys::window()?;
        js_sys::Reflect::get(&window, &JsValue::from_str(name))
            .ok()?
            .dyn_into::<js_sys::Function>()
            .ok()
    }

    fn to_js(value: &Value) -> JsValue {
        serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::UNDEFINED)
    }
}

impl AnalyticsSink for GlobalTagSink {
    fn track(&self, event: &AnalyticsEvent) {
        if let Some(gtag) = Self::global_function("gtag") {
            let params = json!({
                "event_category": event.category,
                "event_label": event.label,
                "value": event.value,
                "custom_parameters": event.data,
            });
            if let Err(e) = gtag.call3(
                &JsValue::NULL,
                &JsValue::from_str("event"),
                &JsValue::from_str(&event.name),
                &Self::to_js(&params),
            ) {
                log::warn!("gtag call failed: {:?}", e);
            }
        }

        if event.is_lead() {
            if let Some(fbq) = Self::global_function("fbq") {
                let params = json!({
                    "value": event.value,
                    "currency": "USD",
                    "content_name": "Consultation Request",
                });
                if let Err(e) = fbq.call3(
                    &JsValue::NULL,
                    &JsValue::from_str("track"),
                    &JsValue::from_str("Lead"),
                    &Self::to_js(&params),
                ) {
                    log::warn!("fbq call failed: {:?}", e);
                }
            }
        }

        ConsoleSink.track(event);
    }
}

/// Shared handle passed down through a Yew context.
#[derive(Clone)]
pub struct Analytics(Rc<dyn AnalyticsSink>);

impl Analytics {
    pub fn new(sink: Rc<dyn AnalyticsSink>) -> Self {
        Self(sink)
    }

    pub fn track(&self, event: AnalyticsEvent) {
        self.0.track(&event);
    }
}

impl Default for Analytics {
    fn default() -> Self {
        Self(Rc::new(NoopSink))
    }
}

impl PartialEq for Analytics {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    pub struct RecordingSink {
        pub events: RefCell<Vec<AnalyticsEvent>>,
    }

    impl AnalyticsSink for RecordingSink {
        fn track(&self, event: &AnalyticsEvent) {
            self.events.borrow_mut().push(event.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingSink;
    use super::*;

    #[test]
    fn default_handle_drops_events() {
        Analytics::default().track(AnalyticsEvent::button_click("Book", "hero_section"));
    }

    #[test]
    fn handle_forwards_to_sink() {
        let sink = Rc::new(RecordingSink::default());
        let analytics = Analytics::new(sink.clone());
        analytics.track(AnalyticsEvent::form_submission(json!({"name": "Ada"})));

        let events = sink.events.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "form_submission");
        assert_eq!(events[0].value, Some(2000));
        assert!(events[0].is_lead());
    }

    #[test]
    fn button_click_trims_text() {
        let event = AnalyticsEvent::button_click("  Book a consultation ", "hero_section");
        assert_eq!(event.data["button_text"], "Book a consultation");
        assert!(!event.is_lead());
    }

    #[test]
    fn handles_compare_by_sink_identity() {
        let sink: Rc<dyn AnalyticsSink> = Rc::new(NoopSink);
        let a = Analytics::new(sink.clone());
        let b = Analytics::new(sink);
        assert!(a == b);
        assert!(a != Analytics::default());
    }
}
