
#[cfg(debug_assertions)]
pub fn get_site_url() -> &'static str {
    "http://localhost:8080"  // Trunk dev server
}

#[cfg(not(debug_assertions))]
pub fn get_site_url() -> &'static str {
    "https://www.optimion.com"
}

pub const BRAND: &str = "Optimion";
pub const SUPPORT_EMAIL: &str = "support@optimion.com";

pub const CAL_COM_EVENT_URL: &str = "https://cal.com/optimion/30min";
pub const CALENDLY_EVENT_URL: &str = "https://calendly.com/ivan-optimion/30min";

// Brand palette, also fed into the scheduler embed theme
pub const COLOR_BACKGROUND: &str = "#0b0b0d";
pub const COLOR_TEXT: &str = "#e5e7eb";
pub const COLOR_PRIMARY: &str = "#22d3ee";

/// Time between the scheduler frame's `load` and revealing it, so the widget
/// can finish its own first paint behind the skeleton.
pub const MODAL_REVEAL_GRACE_MS: u32 = 250;
/// After this long without a `load` signal the modal swaps the skeleton for a
/// fallback link.
pub const MODAL_LOAD_TIMEOUT_MS: u32 = 15_000;

pub const SCROLL_POLL_MS: u32 = 500;
pub const SECTION_RESCAN_MS: u32 = 400;
pub const SECTION_VIEW_RATIO: f64 = 0.5;
