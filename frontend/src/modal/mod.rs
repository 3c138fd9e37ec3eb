//! Scheduling modal: session lifecycle, page scroll lock, embed URLs and
//! booking detection. The component lives in `components::scheduler_modal`.

pub mod booking;
pub mod embed;
pub mod scroll_lock;
pub mod session;

pub use embed::SchedulerEmbed;
pub use scroll_lock::{lock_body_scroll, ScrollLockGuard};
pub use session::{ModalPhase, ModalSession};
