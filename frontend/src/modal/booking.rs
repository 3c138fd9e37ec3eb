//! Recognising a completed booking from messages the scheduler frame posts
//! to the page.
//!
//! Neither provider's message format is a stable contract. Known structured
//! messages are matched first; anything else falls back to a keyword match
//! that is reported as [`Confidence::Heuristic`] so downstream reports can
//! keep the two apart.

use serde_json::Value;

use crate::analytics::Confidence;

const STRUCTURED_EVENTS: [&str; 3] = ["calendly.event_scheduled", "bookingSuccessful", "bookingSuccessfulV2"];

/// Origin host suffixes accepted as the scheduling provider.
const PROVIDER_HOSTS: [&str; 2] = ["cal.com", "calendly.com"];

fn host(origin: &str) -> &str {
    let rest = origin.split("://").nth(1).unwrap_or(origin);
    let rest = rest.split('/').next().unwrap_or(rest);
    rest.split(':').next().unwrap_or(rest)
}

pub fn is_provider_origin(origin: &str) -> bool {
    let host = host(origin);
    PROVIDER_HOSTS
        .iter()
        .any(|p| host == *p || host.ends_with(&format!(".{}", p)))
}

fn structured_name(value: &Value) -> Option<&str> {
    for key in ["event", "type"] {
        if let Some(name) = value.get(key).and_then(Value::as_str) {
            return Some(name);
        }
    }
    // Cal.com wraps its embed events one level down
    value.get("data").and_then(structured_name)
}

fn keyword_match(text: &str) -> bool {
    let text = text.to_lowercase();
    let subject = text.contains("booking") || text.contains("schedul");
    let outcome = ["success", "complete", "confirm"].iter().any(|w| text.contains(w));
    subject && outcome
}

/// Classifies one cross-frame message. `data` is the message payload as
/// text (JSON-encoded when it was an object). Messages from other origins
/// and parse failures yield `None`.
pub fn classify(origin: &str, data: &str) -> Option<Confidence> {
    if !is_provider_origin(origin) {
        return None;
    }
    if let Ok(value) = serde_json::from_str::<Value>(data) {
        if let Some(name) = structured_name(&value) {
            if STRUCTURED_EVENTS.contains(&name) {
                return Some(Confidence::Structured);
            }
        }
    }
    keyword_match(data).then_some(Confidence::Heuristic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendly_scheduled_event_is_structured() {
        let data = r#"{"event":"calendly.event_scheduled","payload":{}}"#;
        assert_eq!(classify("https://calendly.com", data), Some(Confidence::Structured));
    }

    #[test]
    fn cal_com_nested_booking_is_structured() {
        let data = r#"{"originator":"CAL","data":{"type":"bookingSuccessfulV2"}}"#;
        assert_eq!(classify("https://app.cal.com", data), Some(Confidence::Structured));
    }

    #[test]
    fn keyword_match_is_flagged_heuristic() {
        assert_eq!(
            classify("https://cal.com", "Booking confirmed for Tuesday"),
            Some(Confidence::Heuristic)
        );
        assert_eq!(
            classify("https://cal.com", r#"{"type":"scheduling_complete"}"#),
            Some(Confidence::Heuristic)
        );
    }

    #[test]
    fn unrelated_messages_are_ignored() {
        assert_eq!(classify("https://cal.com", r#"{"type":"__dimensionChanged"}"#), None);
        assert_eq!(classify("https://cal.com", "booking page viewed"), None);
        assert_eq!(classify("https://cal.com", ""), None);
    }

    #[test]
    fn foreign_origins_are_ignored() {
        assert_eq!(classify("https://evil.example", "booking successful"), None);
        assert_eq!(classify("https://notcal.com", "booking successful"), None);
        assert!(is_provider_origin("https://calendly.com:443"));
    }
}
