use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys;

use super::event::{AnalyticsEvent, SiteEvent};

/// Somewhere analytics events go. Delivery is best effort; implementations
/// swallow their own failures.
pub trait AnalyticsSink {
    fn dispatch(&self, event: &AnalyticsEvent);
}

/// Pushes onto `window.dataLayer` for the tag manager and, when the page
/// has loaded gtag, reports the event there too.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DataLayerSink;

impl DataLayerSink {
    fn push(&self, event: &AnalyticsEvent) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();

        let key = JsValue::from_str("dataLayer");
        let mut layer = js_sys::Reflect::get(&window, &key)?;
        if !js_sys::Array::is_array(&layer) {
            layer = js_sys::Array::new().into();
            js_sys::Reflect::set(&window, &key, &layer)?;
        }
        let entry = event.serialize(&serializer)?;
        layer.unchecked_ref::<js_sys::Array>().push(&entry);

        let gtag = js_sys::Reflect::get(&window, &JsValue::from_str("gtag"))?;
        if let Some(gtag) = gtag.dyn_ref::<js_sys::Function>() {
            let params = event.params.serialize(&serializer)?;
            gtag.call3(&JsValue::NULL, &JsValue::from_str("event"), &JsValue::from_str(&event.name), &params)?;
        }
        Ok(())
    }
}

impl AnalyticsSink for DataLayerSink {
    fn dispatch(&self, event: &AnalyticsEvent) {
        log::debug!("analytics: {} {:?}", event.name, event.params);
        if let Err(err) = self.push(event) {
            log::debug!("analytics sink unavailable: {:?}", err);
        }
    }
}

/// Sends a typed site event to the page's data layer.
pub fn track(event: SiteEvent) {
    track_with(&DataLayerSink, event);
}

pub fn track_with<S: AnalyticsSink + ?Sized>(sink: &S, event: SiteEvent) {
    sink.dispatch(&event.into());
}

/// Keeps every dispatched event, for assertions.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: std::cell::RefCell<Vec<AnalyticsEvent>>,
}

#[cfg(test)]
impl AnalyticsSink for RecordingSink {
    fn dispatch(&self, event: &AnalyticsEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

#[cfg(test)]
impl RecordingSink {
    pub fn names(&self) -> Vec<String> {
        self.events.borrow().iter().map(|e| e.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::event::ParamValue;

    #[test]
    fn typed_events_reach_the_sink_by_name() {
        let sink = RecordingSink::default();
        track_with(&sink, SiteEvent::FaqOpen { question: "Is our data secure?".into() });
        track_with(&sink, SiteEvent::ScrollDepth { percent: 25 });

        assert_eq!(sink.names(), vec!["faq_open", "scroll_depth"]);
        let events = sink.events.borrow();
        assert_eq!(
            events[0].param("question"),
            Some(&ParamValue::Text("Is our data secure?".into()))
        );
        assert_eq!(events[1].param("percent"), Some(&ParamValue::Number(25.0)));
    }
}
