use std::collections::HashSet;

use super::event::SiteEvent;

pub const SCROLL_MARKS: [u8; 4] = [25, 50, 75, 100];

/// Share of the scrollable distance covered, rounded and clamped to 0..=100.
/// A page that cannot scroll counts as fully read.
pub fn scroll_percent(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> u8 {
    let scrollable = scroll_height - viewport_height;
    if !(scrollable > 0.0) {
        return 100;
    }
    let pct = (scroll_y / scrollable * 100.0).round();
    if pct.is_nan() {
        0
    } else {
        pct.clamp(0.0, 100.0) as u8
    }
}

/// Fires each scroll mark once per pageview.
#[derive(Debug, Default)]
pub struct ScrollDepthTracker {
    fired: Vec<u8>,
}

impl ScrollDepthTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the marks newly crossed by `percent`, lowest first.
    pub fn observe(&mut self, percent: u8) -> Vec<u8> {
        let mut crossed = Vec::new();
        for mark in SCROLL_MARKS {
            if percent >= mark && !self.fired.contains(&mark) {
                self.fired.push(mark);
                crossed.push(mark);
            }
        }
        crossed
    }

    pub fn events(&mut self, percent: u8) -> Vec<SiteEvent> {
        self.observe(percent)
            .into_iter()
            .map(|percent| SiteEvent::ScrollDepth { percent })
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.fired.len() == SCROLL_MARKS.len()
    }

    #[cfg(test)]
    pub fn fired(&self) -> &[u8] {
        &self.fired
    }

    pub fn reset(&mut self) {
        self.fired.clear();
    }
}

/// Share of the observer's viewport covered by the visible part of a
/// section. Zero when the viewport height is unknown.
pub fn viewport_cover(visible_height: f64, root_height: f64) -> f64 {
    if root_height > 0.0 {
        (visible_height / root_height).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Fires `section_view` the first time a section is at least `threshold`
/// visible, or covers at least `threshold` of the viewport. The second rule
/// catches sections too tall to ever be half on screen.
#[derive(Debug)]
pub struct SectionViewTracker {
    threshold: f64,
    seen: HashSet<String>,
}

impl SectionViewTracker {
    pub fn new(threshold: f64) -> Self {
        SectionViewTracker {
            threshold,
            seen: HashSet::new(),
        }
    }

    pub fn observe(&mut self, section: &str, ratio: f64, cover: f64) -> Option<SiteEvent> {
        if section.is_empty() || (ratio < self.threshold && cover < self.threshold) {
            return None;
        }
        if !self.seen.insert(section.to_string()) {
            return None;
        }
        Some(SiteEvent::SectionView {
            section: section.to_string(),
        })
    }

    #[cfg(test)]
    pub fn has_seen(&self, section: &str) -> bool {
        self.seen.contains(section)
    }

    pub fn reset(&mut self) {
        self.seen.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn percent_of_scrollable_distance() {
        assert_eq!(scroll_percent(0.0, 3000.0, 1000.0), 0);
        assert_eq!(scroll_percent(500.0, 3000.0, 1000.0), 25);
        assert_eq!(scroll_percent(2000.0, 3000.0, 1000.0), 100);
        assert_eq!(scroll_percent(2400.0, 3000.0, 1000.0), 100);
        assert_eq!(scroll_percent(-50.0, 3000.0, 1000.0), 0);
    }

    #[test]
    fn short_page_counts_as_fully_scrolled() {
        assert_eq!(scroll_percent(0.0, 800.0, 1000.0), 100);
        assert_eq!(scroll_percent(0.0, 1000.0, 1000.0), 100);
    }

    #[test]
    fn jump_fires_every_skipped_mark_in_order() {
        let mut tracker = ScrollDepthTracker::new();
        assert_eq!(tracker.observe(10), Vec::<u8>::new());
        assert_eq!(tracker.observe(80), vec![25, 50, 75]);
        assert!(!tracker.is_complete());
        assert_eq!(tracker.observe(100), vec![100]);
        assert!(tracker.is_complete());
        assert_eq!(tracker.observe(100), Vec::<u8>::new());
    }

    #[test]
    fn reset_allows_marks_again() {
        let mut tracker = ScrollDepthTracker::new();
        tracker.observe(100);
        tracker.reset();
        assert_eq!(tracker.fired(), &[] as &[u8]);
        assert_eq!(
            tracker.events(50),
            vec![SiteEvent::ScrollDepth { percent: 25 }, SiteEvent::ScrollDepth { percent: 50 }]
        );
    }

    #[test]
    fn scrolling_back_up_never_unfires() {
        let mut tracker = ScrollDepthTracker::new();
        tracker.observe(60);
        assert_eq!(tracker.observe(5), Vec::<u8>::new());
        assert_eq!(tracker.fired(), &[25, 50]);
    }

    #[test]
    fn section_fires_once_above_threshold() {
        let mut tracker = SectionViewTracker::new(0.5);
        assert_eq!(tracker.observe("about", 0.3, 0.0), None);
        assert_eq!(
            tracker.observe("about", 0.5, 0.0),
            Some(SiteEvent::SectionView { section: "about".into() })
        );
        assert_eq!(tracker.observe("about", 0.0, 0.0), None);
        assert_eq!(tracker.observe("about", 1.0, 0.0), None);
        assert!(tracker.has_seen("about"));
        assert!(tracker.observe("faq", 0.9, 0.0).is_some());
    }

    #[test]
    fn tall_section_counts_once_it_fills_half_the_viewport() {
        // 2000px section in a 900px viewport less the 10% bottom margin
        let root = 810.0;
        let mut tracker = SectionViewTracker::new(0.5);
        assert_eq!(tracker.observe("integrations", 300.0 / 2000.0, viewport_cover(300.0, root)), None);
        assert_eq!(
            tracker.observe("integrations", 810.0 / 2000.0, viewport_cover(810.0, root)),
            Some(SiteEvent::SectionView { section: "integrations".into() })
        );
        assert_eq!(tracker.observe("integrations", 0.4, 1.0), None);
    }

    #[test]
    fn cover_is_zero_without_a_viewport() {
        assert_eq!(viewport_cover(400.0, 0.0), 0.0);
        assert_eq!(viewport_cover(400.0, 800.0), 0.5);
        assert_eq!(viewport_cover(1200.0, 800.0), 1.0);
    }

    #[test]
    fn sections_without_id_are_ignored() {
        let mut tracker = SectionViewTracker::new(0.5);
        assert_eq!(tracker.observe("", 1.0, 0.0), None);
    }

    #[test]
    fn navigation_resets_section_views() {
        let mut tracker = SectionViewTracker::new(0.5);
        tracker.observe("hero", 1.0, 0.0);
        tracker.reset();
        assert!(tracker.observe("hero", 1.0, 0.0).is_some());
    }

    proptest! {
        #[test]
        fn marks_fire_once_in_increasing_order(mut samples in prop::collection::vec(0u8..=100, 0..40)) {
            samples.sort_unstable();
            let mut tracker = ScrollDepthTracker::new();
            let mut all = Vec::new();
            for s in &samples {
                all.extend(tracker.observe(*s));
            }
            let max = samples.last().copied().unwrap_or(0);
            let expected: Vec<u8> = SCROLL_MARKS.iter().copied().filter(|m| *m <= max).collect();
            prop_assert_eq!(all, expected);
        }

        #[test]
        fn repeated_visibility_fires_at_most_once(ratios in prop::collection::vec(0.0f64..=1.0, 1..30)) {
            let mut tracker = SectionViewTracker::new(0.5);
            let fired = ratios.iter().filter_map(|r| tracker.observe("process", *r, 0.0)).count();
            prop_assert_eq!(fired, usize::from(ratios.iter().any(|r| *r >= 0.5)));
        }

        #[test]
        fn percent_is_always_in_range(y in -1e5f64..1e5, h in 0f64..1e5, v in 0f64..1e4) {
            prop_assert!(scroll_percent(y, h, v) <= 100);
        }
    }
}
