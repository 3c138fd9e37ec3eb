//! Page analytics: typed events, the data layer sink, and the bridge that
//! turns clicks, section visibility and scroll depth into events.

pub mod bridge;
pub mod event;
pub mod sink;
pub mod tracker;

pub use bridge::AnalyticsBridge;
pub use event::{names, AnalyticsEvent, Confidence, SiteEvent};
pub use sink::track;
