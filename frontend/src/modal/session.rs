use crate::analytics::{Confidence, SiteEvent};
use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    Closed,
    /// Mounted, entrance transition running.
    Opening,
    /// Frame requested, skeleton showing.
    ContentLoading,
    Loaded,
    /// No load signal within the timeout; fallback link showing.
    TimedOut,
    Closing,
}

/// Lifecycle of one scheduling modal. Time is passed in as milliseconds
/// from any clock, so the component drives it with `Date.now()` and tests
/// with plain numbers.
#[derive(Debug, Clone)]
pub struct ModalSession {
    phase: ModalPhase,
    place: String,
    grace_ms: f64,
    timeout_ms: f64,
    reveal_at: Option<f64>,
    timeout_at: Option<f64>,
    booked: bool,
}

impl Default for ModalSession {
    fn default() -> Self {
        ModalSession::new(config::MODAL_REVEAL_GRACE_MS as f64, config::MODAL_LOAD_TIMEOUT_MS as f64)
    }
}

impl ModalSession {
    pub fn new(grace_ms: f64, timeout_ms: f64) -> Self {
        ModalSession {
            phase: ModalPhase::Closed,
            place: String::new(),
            grace_ms,
            timeout_ms,
            reveal_at: None,
            timeout_at: None,
            booked: false,
        }
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    #[cfg(test)]
    pub fn place(&self) -> &str {
        &self.place
    }

    #[cfg(test)]
    pub fn is_mounted(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.phase, ModalPhase::Closed | ModalPhase::Closing)
    }

    /// Starts a session. `tracked_elsewhere` suppresses `cal_open` when the
    /// triggering CTA already reported the click.
    pub fn open(&mut self, place: &str, tracked_elsewhere: bool) -> Option<SiteEvent> {
        if self.is_open() {
            return None;
        }
        self.phase = ModalPhase::Opening;
        self.place = place.to_string();
        self.reveal_at = None;
        self.timeout_at = None;
        self.booked = false;
        (!tracked_elsewhere).then(|| SiteEvent::CalOpen {
            place: self.place.clone(),
        })
    }

    /// The frame has been put in the document; the load timeout starts now.
    pub fn request_frame(&mut self, now: f64) {
        if self.phase == ModalPhase::Opening {
            self.phase = ModalPhase::ContentLoading;
            self.timeout_at = Some(now + self.timeout_ms);
        }
    }

    /// The frame fired `load`. Reveal happens after the grace delay, via
    /// [`poll`](Self::poll). A load after the timeout still reveals.
    pub fn frame_loaded(&mut self, now: f64) {
        if matches!(self.phase, ModalPhase::ContentLoading | ModalPhase::TimedOut) && self.reveal_at.is_none() {
            self.reveal_at = Some(now + self.grace_ms);
        }
    }

    /// When the caller should next call [`poll`](Self::poll).
    pub fn next_deadline(&self) -> Option<f64> {
        match (self.reveal_at, self.timeout_at) {
            (Some(r), _) => Some(r),
            (None, Some(t)) if self.phase == ModalPhase::ContentLoading => Some(t),
            _ => None,
        }
    }

    /// Advances time-driven transitions.
    pub fn poll(&mut self, now: f64) -> Option<SiteEvent> {
        if let Some(reveal_at) = self.reveal_at {
            if now >= reveal_at && matches!(self.phase, ModalPhase::ContentLoading | ModalPhase::TimedOut) {
                self.phase = ModalPhase::Loaded;
                self.reveal_at = None;
                self.timeout_at = None;
                return Some(SiteEvent::CalLoaded {
                    place: self.place.clone(),
                });
            }
            return None;
        }
        match self.timeout_at {
            Some(t) if now >= t && self.phase == ModalPhase::ContentLoading => {
                self.phase = ModalPhase::TimedOut;
                self.timeout_at = None;
                log::warn!("scheduler frame did not load within {} ms", self.timeout_ms);
                Some(SiteEvent::CalTimeout {
                    place: self.place.clone(),
                })
            }
            _ => None,
        }
    }

    /// A booking completion was detected inside the frame. Reported once
    /// per session.
    pub fn booked(&mut self, confidence: Confidence) -> Option<SiteEvent> {
        if !self.is_open() || self.booked {
            return None;
        }
        self.booked = true;
        Some(SiteEvent::CalBooked {
            place: self.place.clone(),
            confidence,
        })
    }

    /// Backdrop, close button or Escape.
    pub fn close(&mut self) -> Option<SiteEvent> {
        if !self.is_open() {
            return None;
        }
        self.phase = ModalPhase::Closing;
        self.reveal_at = None;
        self.timeout_at = None;
        Some(SiteEvent::CalClose {
            place: self.place.clone(),
        })
    }

    /// Teardown done; the session can be opened again.
    pub fn finish_close(&mut self) {
        if self.phase == ModalPhase::Closing {
            self.phase = ModalPhase::Closed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> ModalSession {
        ModalSession::new(250.0, 15_000.0)
    }

    #[test]
    fn faq_open_load_close_scenario() {
        let mut s = session();
        assert_eq!(s.open("faq", false), Some(SiteEvent::CalOpen { place: "faq".into() }));
        assert_eq!(s.phase(), ModalPhase::Opening);

        s.request_frame(0.0);
        assert_eq!(s.phase(), ModalPhase::ContentLoading);

        s.frame_loaded(1_000.0);
        assert_eq!(s.next_deadline(), Some(1_250.0));
        assert_eq!(s.poll(1_100.0), None);
        assert_eq!(s.phase(), ModalPhase::ContentLoading);
        assert_eq!(s.poll(1_250.0), Some(SiteEvent::CalLoaded { place: "faq".into() }));
        assert_eq!(s.phase(), ModalPhase::Loaded);
        assert_eq!(s.poll(5_000.0), None);

        assert_eq!(s.close(), Some(SiteEvent::CalClose { place: "faq".into() }));
        s.finish_close();
        assert_eq!(s.phase(), ModalPhase::Closed);
        assert!(!s.is_mounted());
    }

    #[test]
    fn open_tracked_elsewhere_is_silent() {
        let mut s = session();
        assert_eq!(s.open("hero", true), None);
        assert!(s.is_open());
    }

    #[test]
    fn reopening_while_open_is_ignored() {
        let mut s = session();
        s.open("faq", false);
        assert_eq!(s.open("hero", false), None);
        assert_eq!(s.place(), "faq");
    }

    #[test]
    fn times_out_without_load_then_late_load_reveals() {
        let mut s = session();
        s.open("final_primary", false);
        s.request_frame(0.0);
        assert_eq!(s.poll(14_999.0), None);
        assert_eq!(
            s.poll(15_000.0),
            Some(SiteEvent::CalTimeout { place: "final_primary".into() })
        );
        assert_eq!(s.phase(), ModalPhase::TimedOut);
        assert_eq!(s.poll(20_000.0), None);

        s.frame_loaded(21_000.0);
        assert_eq!(
            s.poll(21_250.0),
            Some(SiteEvent::CalLoaded { place: "final_primary".into() })
        );
    }

    #[test]
    fn pending_reveal_beats_timeout() {
        let mut s = session();
        s.open("faq", false);
        s.request_frame(0.0);
        s.frame_loaded(14_900.0);
        assert_eq!(s.poll(15_000.0), None);
        assert_eq!(s.poll(15_150.0), Some(SiteEvent::CalLoaded { place: "faq".into() }));
    }

    #[test]
    fn close_before_load_cancels_reveal() {
        let mut s = session();
        s.open("faq", false);
        s.request_frame(0.0);
        s.frame_loaded(10.0);
        s.close();
        assert_eq!(s.poll(1_000.0), None);
        assert_eq!(s.next_deadline(), None);
        assert_eq!(s.close(), None);
    }

    #[test]
    fn booking_reported_once() {
        let mut s = session();
        s.open("faq", false);
        assert_eq!(
            s.booked(Confidence::Structured),
            Some(SiteEvent::CalBooked {
                place: "faq".into(),
                confidence: Confidence::Structured
            })
        );
        assert_eq!(s.booked(Confidence::Heuristic), None);
    }

    #[test]
    fn session_can_reopen_after_close() {
        let mut s = session();
        s.open("faq", false);
        s.close();
        s.finish_close();
        assert_eq!(s.open("header", false), Some(SiteEvent::CalOpen { place: "header".into() }));
        assert_eq!(s.place(), "header");
    }
}
