use std::collections::BTreeMap;

use serde::Serialize;

pub mod names {
    pub const CTA_CLICK: &str = "cta_click";
    pub const CAL_OPEN: &str = "cal_open";
    pub const CAL_LOADED: &str = "cal_loaded";
    pub const CAL_CLOSE: &str = "cal_close";
    pub const CAL_TIMEOUT: &str = "cal_timeout";
    pub const CAL_BOOKED: &str = "cal_booked";
    pub const FAQ_OPEN: &str = "faq_open";
    pub const SECTION_VIEW: &str = "section_view";
    pub const SCROLL_DEPTH: &str = "scroll_depth";
}

/// `data-*` keys the click bridge forwards, without the `data-` prefix.
pub const DECLARATIVE_KEYS: [&str; 7] = ["place", "id", "method", "to", "percent", "question", "source"];

/// Keys whose values are free text and never coerced to numbers.
const TEXT_ONLY_KEYS: [&str; 1] = ["question"];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Text(String),
    Number(f64),
}

impl ParamValue {
    /// Numeric-looking strings become numbers, everything else stays text.
    pub fn coerce(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() && !trimmed.is_empty() => ParamValue::Number(n),
            _ => ParamValue::Text(raw.to_string()),
        }
    }

    #[cfg(test)]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            ParamValue::Number(_) => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<u8> for ParamValue {
    fn from(value: u8) -> Self {
        ParamValue::Number(value as f64)
    }
}

/// A named event with flat string/number parameters, the shape the tag
/// manager queue expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    #[serde(rename = "event")]
    pub name: String,
    #[serde(flatten)]
    pub params: BTreeMap<String, ParamValue>,
}

impl AnalyticsEvent {
    pub fn new(name: &str) -> Self {
        AnalyticsEvent {
            name: name.to_string(),
            params: BTreeMap::new(),
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    #[cfg(test)]
    pub fn param(&self, key: &str) -> Option<&ParamValue> {
        self.params.get(key)
    }

    /// Reads a declarative click descriptor. `attr` looks up a `data-*`
    /// attribute by its bare key (`"evt"`, `"place"`, ...). Empty values are
    /// skipped. Returns `None` when there is no event name.
    pub fn from_declarative<F>(attr: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let name = attr("evt").filter(|n| !n.trim().is_empty())?;
        let mut event = AnalyticsEvent::new(name.trim());
        for key in DECLARATIVE_KEYS {
            let Some(raw) = attr(key).filter(|v| !v.trim().is_empty()) else { continue };
            let value = if TEXT_ONLY_KEYS.contains(&key) {
                ParamValue::Text(raw)
            } else {
                ParamValue::coerce(&raw)
            };
            event.params.insert(key.to_string(), value);
        }
        Some(event)
    }
}

/// How a booking completion was recognised from the scheduler frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    /// A documented message from the provider.
    Structured,
    /// Keyword match on an undocumented message; may misfire.
    Heuristic,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Structured => "structured",
            Confidence::Heuristic => "heuristic",
        }
    }
}

/// Every event the site emits from code (as opposed to markup).
#[derive(Debug, Clone, PartialEq)]
pub enum SiteEvent {
    CalOpen { place: String },
    CalLoaded { place: String },
    CalClose { place: String },
    CalTimeout { place: String },
    CalBooked { place: String, confidence: Confidence },
    FaqOpen { question: String },
    SectionView { section: String },
    ScrollDepth { percent: u8 },
}

impl SiteEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SiteEvent::CalOpen { .. } => names::CAL_OPEN,
            SiteEvent::CalLoaded { .. } => names::CAL_LOADED,
            SiteEvent::CalClose { .. } => names::CAL_CLOSE,
            SiteEvent::CalTimeout { .. } => names::CAL_TIMEOUT,
            SiteEvent::CalBooked { .. } => names::CAL_BOOKED,
            SiteEvent::FaqOpen { .. } => names::FAQ_OPEN,
            SiteEvent::SectionView { .. } => names::SECTION_VIEW,
            SiteEvent::ScrollDepth { .. } => names::SCROLL_DEPTH,
        }
    }
}

impl From<SiteEvent> for AnalyticsEvent {
    fn from(event: SiteEvent) -> Self {
        let base = AnalyticsEvent::new(event.name());
        match event {
            SiteEvent::CalOpen { place }
            | SiteEvent::CalLoaded { place }
            | SiteEvent::CalClose { place }
            | SiteEvent::CalTimeout { place } => base.with("place", place),
            SiteEvent::CalBooked { place, confidence } => base
                .with("place", place)
                .with("confidence", confidence.as_str()),
            SiteEvent::FaqOpen { question } => base.with("question", question),
            SiteEvent::SectionView { section } => base.with("section", section),
            SiteEvent::ScrollDepth { percent } => base.with("percent", percent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn declarative_percent_becomes_a_number() {
        let event = AnalyticsEvent::from_declarative(attrs(&[("evt", "cta_click"), ("place", "hero"), ("percent", "50")])).unwrap();
        assert_eq!(event.name, "cta_click");
        assert_eq!(event.param("percent"), Some(&ParamValue::Number(50.0)));
        assert_eq!(event.param("place"), Some(&ParamValue::Text("hero".into())));
        assert_eq!(event.param("id"), None);
    }

    #[test]
    fn markup_cta_name_is_the_tracked_name() {
        let event = AnalyticsEvent::from_declarative(attrs(&[("evt", names::CTA_CLICK), ("place", "final_sticky")])).unwrap();
        assert_eq!(event.name, "cta_click");
        assert_eq!(event.param("place"), Some(&ParamValue::Text("final_sticky".into())));
    }

    #[test]
    fn question_text_is_never_coerced() {
        let event = AnalyticsEvent::from_declarative(attrs(&[("evt", "faq_open"), ("question", "2000")])).unwrap();
        assert_eq!(event.param("question"), Some(&ParamValue::Text("2000".into())));
    }

    #[test]
    fn empty_attributes_are_left_out() {
        let event = AnalyticsEvent::from_declarative(attrs(&[("evt", "cta_click"), ("place", "hero"), ("percent", ""), ("to", " ")])).unwrap();
        assert_eq!(event.param("percent"), None);
        assert_eq!(event.param("to"), None);
        assert_eq!(event.params.len(), 1);
    }

    #[test]
    fn missing_event_name_is_ignored() {
        assert!(AnalyticsEvent::from_declarative(attrs(&[("place", "hero")])).is_none());
        assert!(AnalyticsEvent::from_declarative(attrs(&[("evt", "  ")])).is_none());
    }

    #[test]
    fn coercion_rejects_non_numbers() {
        assert_eq!(ParamValue::coerce("12.5"), ParamValue::Number(12.5));
        assert_eq!(ParamValue::coerce("about"), ParamValue::Text("about".into()));
        assert_eq!(ParamValue::coerce(""), ParamValue::Text(String::new()));
        assert_eq!(ParamValue::coerce("inf"), ParamValue::Text("inf".into()));
        assert_eq!(ParamValue::coerce("NaN"), ParamValue::Text("NaN".into()));
    }

    #[test]
    fn serializes_flat_for_the_data_layer() {
        let event: AnalyticsEvent = SiteEvent::ScrollDepth { percent: 75 }.into();
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json, serde_json::json!({"event": "scroll_depth", "percent": 75.0}));
    }

    #[test]
    fn booking_event_carries_confidence() {
        let event: AnalyticsEvent = SiteEvent::CalBooked {
            place: "faq".into(),
            confidence: Confidence::Heuristic,
        }
        .into();
        assert_eq!(event.name, "cal_booked");
        assert_eq!(event.param("confidence").and_then(ParamValue::as_str), Some("heuristic"));
    }
}
