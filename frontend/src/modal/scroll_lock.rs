use std::cell::RefCell;
use std::rc::Rc;

use web_sys::HtmlElement;

/// Inline styles touched while page scroll is locked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedStyle {
    pub overflow: String,
    pub padding_right: String,
}

/// Where the lock reads and writes page styles.
pub trait PageStyle {
    fn read(&self) -> SavedStyle;
    fn write(&self, style: &SavedStyle);
    /// Width of the vertical scrollbar that disappears with `overflow: hidden`.
    fn scrollbar_width(&self) -> f64;
}

struct LockState<S> {
    page: S,
    holders: usize,
    saved: Option<SavedStyle>,
}

/// Reference-counted scroll lock. The first guard saves the page's inline
/// styles and hides overflow; the last guard dropped puts them back exactly.
pub struct ScrollLock<S: PageStyle> {
    state: Rc<RefCell<LockState<S>>>,
}

impl<S: PageStyle> Clone for ScrollLock<S> {
    fn clone(&self) -> Self {
        ScrollLock {
            state: self.state.clone(),
        }
    }
}

impl<S: PageStyle + 'static> ScrollLock<S> {
    pub fn new(page: S) -> Self {
        ScrollLock {
            state: Rc::new(RefCell::new(LockState {
                page,
                holders: 0,
                saved: None,
            })),
        }
    }

    pub fn acquire(&self) -> ScrollLockGuard {
        let mut state = self.state.borrow_mut();
        if state.holders == 0 {
            let saved = state.page.read();
            let gap = state.page.scrollbar_width();
            let padding_right = if gap > 0.0 {
                format!("{}px", gap)
            } else {
                saved.padding_right.clone()
            };
            state.page.write(&SavedStyle {
                overflow: "hidden".to_string(),
                padding_right,
            });
            state.saved = Some(saved);
        }
        state.holders += 1;
        ScrollLockGuard {
            release: Some(Box::new(Self::releaser(self.state.clone()))),
        }
    }

    fn releaser(state: Rc<RefCell<LockState<S>>>) -> impl FnOnce() {
        move || {
            let mut state = state.borrow_mut();
            state.holders = state.holders.saturating_sub(1);
            if state.holders == 0 {
                if let Some(saved) = state.saved.take() {
                    state.page.write(&saved);
                }
            }
        }
    }

    #[cfg(test)]
    pub fn holders(&self) -> usize {
        self.state.borrow().holders
    }

    #[cfg(test)]
    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }
}

/// Held while something needs the page frozen. Dropping it releases the
/// lock on every exit path, including an unmount mid-transition.
pub struct ScrollLockGuard {
    release: Option<Box<dyn FnOnce()>>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// The document body.
#[derive(Debug, Default, Clone, Copy)]
pub struct BodyStyle;

impl BodyStyle {
    fn body() -> Option<HtmlElement> {
        web_sys::window()?.document()?.body()
    }
}

impl PageStyle for BodyStyle {
    fn read(&self) -> SavedStyle {
        let Some(body) = Self::body() else {
            return SavedStyle::default();
        };
        let style = body.style();
        SavedStyle {
            overflow: style.get_property_value("overflow").unwrap_or_default(),
            padding_right: style.get_property_value("padding-right").unwrap_or_default(),
        }
    }

    fn write(&self, saved: &SavedStyle) {
        let Some(body) = Self::body() else {
            log::debug!("no document body to lock");
            return;
        };
        let style = body.style();
        for (name, value) in [("overflow", &saved.overflow), ("padding-right", &saved.padding_right)] {
            let _ = if value.is_empty() {
                style.remove_property(name).map(|_| ())
            } else {
                style.set_property(name, value)
            };
        }
    }

    fn scrollbar_width(&self) -> f64 {
        let Some(window) = web_sys::window() else {
            return 0.0;
        };
        let inner = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
        let client = window
            .document()
            .and_then(|d| d.document_element())
            .map(|el| el.client_width() as f64)
            .unwrap_or(inner);
        (inner - client).max(0.0)
    }
}

thread_local! {
    static BODY_LOCK: ScrollLock<BodyStyle> = ScrollLock::new(BodyStyle);
}

/// Locks scrolling of the page body until the guard is dropped.
pub fn lock_body_scroll() -> ScrollLockGuard {
    BODY_LOCK.with(|lock| lock.acquire())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Clone, Default)]
    struct FakePage {
        style: Rc<RefCell<SavedStyle>>,
        gap: f64,
    }

    impl PageStyle for FakePage {
        fn read(&self) -> SavedStyle {
            self.style.borrow().clone()
        }
        fn write(&self, style: &SavedStyle) {
            *self.style.borrow_mut() = style.clone();
        }
        fn scrollbar_width(&self) -> f64 {
            self.gap
        }
    }

    fn page(overflow: &str, padding_right: &str, gap: f64) -> FakePage {
        FakePage {
            style: Rc::new(RefCell::new(SavedStyle {
                overflow: overflow.to_string(),
                padding_right: padding_right.to_string(),
            })),
            gap,
        }
    }

    #[test]
    fn locks_and_pads_for_scrollbar() {
        let page = page("", "", 15.0);
        let lock = ScrollLock::new(page.clone());
        let guard = lock.acquire();
        assert_eq!(page.read().overflow, "hidden");
        assert_eq!(page.read().padding_right, "15px");
        drop(guard);
        assert_eq!(page.read(), SavedStyle::default());
        assert!(!lock.is_locked());
    }

    #[test]
    fn nested_guards_restore_on_last_release() {
        let page = page("auto", "4px", 0.0);
        let lock = ScrollLock::new(page.clone());
        let outer = lock.acquire();
        let inner = lock.acquire();
        assert_eq!(lock.holders(), 2);
        drop(outer);
        assert_eq!(page.read().overflow, "hidden");
        assert_eq!(page.read().padding_right, "4px");
        drop(inner);
        assert_eq!(page.read(), SavedStyle { overflow: "auto".into(), padding_right: "4px".into() });
    }

    #[test]
    fn already_hidden_page_stays_hidden() {
        let page = page("hidden", "", 0.0);
        let lock = ScrollLock::new(page.clone());
        drop(lock.acquire());
        assert_eq!(page.read().overflow, "hidden");
    }

    proptest! {
        #[test]
        fn open_close_restores_prior_style(
            overflow in prop::sample::select(vec!["", "auto", "scroll", "hidden", "clip", "visible"]),
            padding in "[0-9]{0,2}(px)?",
            gap in 0f64..30.0,
            cycles in 1usize..4,
        ) {
            let page = page(overflow, &padding, gap);
            let before = page.read();
            let lock = ScrollLock::new(page.clone());
            for _ in 0..cycles {
                let guards: Vec<_> = (0..cycles).map(|_| lock.acquire()).collect();
                prop_assert_eq!(page.read().overflow, "hidden");
                drop(guards);
                prop_assert_eq!(page.read(), before.clone());
            }
        }
    }
}
