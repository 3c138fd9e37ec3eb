use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{
    AddEventListenerOptions, Document, Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};
use yew::prelude::*;
use yew_router::prelude::*;

use super::event::AnalyticsEvent;
use super::sink::{track, AnalyticsSink, DataLayerSink};
use super::tracker::{scroll_percent, viewport_cover, ScrollDepthTracker, SectionViewTracker};
use crate::config;

const WINDOW_TICKS: [&str; 4] = ["scroll", "resize", "hashchange", "pageshow"];

/// Renders nothing. Forwards declarative clicks, section views and scroll
/// depth to the data layer, starting fresh on every route change.
#[function_component(AnalyticsBridge)]
pub fn analytics_bridge() -> Html {
    let path = use_location()
        .map(|l| l.path().to_string())
        .unwrap_or_default();

    use_effect_with_deps(
        |_| {
            let listener = web_sys::window()
                .and_then(|w| w.document())
                .and_then(ClickBridge::attach);
            move || drop(listener)
        },
        (),
    );

    use_effect_with_deps(
        |path: &String| {
            log::debug!("analytics pageview: {}", path);
            let watches = web_sys::window().and_then(|window| {
                let document = window.document()?;
                Some((
                    SectionViewWatch::start(&document),
                    ScrollDepthWatch::start(window, document),
                ))
            });
            move || drop(watches)
        },
        path,
    );

    html! {}
}

/// Capture-phase document listener for `[data-evt]` elements.
struct ClickBridge {
    document: Document,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl ClickBridge {
    fn attach(document: Document) -> Option<Self> {
        let callback = Closure::wrap(Box::new(move |e: web_sys::Event| {
            let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let Ok(Some(el)) = target.closest("[data-evt]") else {
                return;
            };
            if let Some(event) = AnalyticsEvent::from_declarative(|key| el.get_attribute(&format!("data-{}", key))) {
                DataLayerSink.dispatch(&event);
            }
        }) as Box<dyn FnMut(web_sys::Event)>);

        document
            .add_event_listener_with_callback_and_bool("click", callback.as_ref().unchecked_ref(), true)
            .map_err(|err| log::warn!("click bridge not attached: {:?}", err))
            .ok()?;

        Some(ClickBridge { document, callback })
    }
}

impl Drop for ClickBridge {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback_and_bool(
            "click",
            self.callback.as_ref().unchecked_ref(),
            true,
        );
    }
}

/// Observes every `section[id]` and reports the first moment each one is
/// half visible or fills half the viewport.
struct SectionViewWatch {
    observer: Option<IntersectionObserver>,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
    _late_scan: Option<Timeout>,
}

impl SectionViewWatch {
    fn start(document: &Document) -> Self {
        let tracker = Rc::new(RefCell::new(SectionViewTracker::new(config::SECTION_VIEW_RATIO)));

        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _: IntersectionObserver| {
            let mut tracker = tracker.borrow_mut();
            for entry in entries.iter().filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok()) {
                if !entry.is_intersecting() {
                    continue;
                }
                let cover = entry
                    .root_bounds()
                    .map(|root| viewport_cover(entry.intersection_rect().height(), root.height()))
                    .unwrap_or(0.0);
                if let Some(event) = tracker.observe(&entry.target().id(), entry.intersection_ratio(), cover) {
                    track(event);
                }
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        // tenths, so tall sections keep reporting while they scroll through
        let thresholds: js_sys::Array = (0..=10).map(|i| JsValue::from(i as f64 / 10.0)).collect();
        let mut init = IntersectionObserverInit::new();
        init.threshold(&thresholds);
        init.root_margin("0px 0px -10% 0px");

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|err| log::debug!("section views disabled: {:?}", err))
            .ok();

        let late_scan = observer.as_ref().map(|observer| {
            observe_sections(observer, document);
            let observer = observer.clone();
            let document = document.clone();
            Timeout::new(config::SECTION_RESCAN_MS, move || observe_sections(&observer, &document))
        });

        SectionViewWatch {
            observer,
            _callback: callback,
            _late_scan: late_scan,
        }
    }
}

impl Drop for SectionViewWatch {
    fn drop(&mut self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
    }
}

fn observe_sections(observer: &IntersectionObserver, document: &Document) {
    let Ok(sections) = document.query_selector_all("section[id]") else {
        return;
    };
    for i in 0..sections.length() {
        if let Some(el) = sections.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            observer.observe(&el);
        }
    }
}

fn page_scroll_percent(window: &Window, document: &Document) -> Option<u8> {
    let root = document.scrolling_element().or_else(|| document.document_element())?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    let y = window.scroll_y().unwrap_or_else(|_| root.scroll_top() as f64);
    Some(scroll_percent(y, root.scroll_height() as f64, viewport))
}

#[derive(Default)]
struct DepthState {
    tracker: ScrollDepthTracker,
    tick: Option<js_sys::Function>,
    frame: Option<i32>,
    poll: Option<i32>,
}

impl DepthState {
    fn stop(&mut self, window: &Window, document: &Document) {
        if let Some(tick) = self.tick.take() {
            for name in WINDOW_TICKS {
                let _ = window.remove_event_listener_with_callback(name, &tick);
            }
            let _ = document.remove_event_listener_with_callback("visibilitychange", &tick);
        }
        if let Some(id) = self.frame.take() {
            let _ = window.cancel_animation_frame(id);
        }
        if let Some(id) = self.poll.take() {
            window.clear_interval_with_handle(id);
        }
    }
}

fn check_depth(state: &RefCell<DepthState>, window: &Window, document: &Document) {
    let Some(percent) = page_scroll_percent(window, document) else {
        return;
    };
    let mut state = state.borrow_mut();
    for event in state.tracker.events(percent) {
        track(event);
    }
    if state.tracker.is_complete() {
        state.stop(window, document);
    }
}

/// Samples scroll position at most once per animation frame, plus a slow
/// poll for browsers that throttle scroll events. Stops once every mark
/// has fired.
struct ScrollDepthWatch {
    window: Window,
    document: Document,
    state: Rc<RefCell<DepthState>>,
    _frame: Rc<Closure<dyn FnMut()>>,
    _tick: Closure<dyn FnMut()>,
    _poll: Closure<dyn FnMut()>,
}

impl ScrollDepthWatch {
    fn start(window: Window, document: Document) -> Self {
        let state = Rc::new(RefCell::new(DepthState::default()));

        let frame = {
            let state = state.clone();
            let window = window.clone();
            let document = document.clone();
            Rc::new(Closure::wrap(Box::new(move || {
                state.borrow_mut().frame = None;
                check_depth(&state, &window, &document);
            }) as Box<dyn FnMut()>))
        };

        let tick = {
            let state = state.clone();
            let window = window.clone();
            let frame = frame.clone();
            Closure::wrap(Box::new(move || {
                let mut state = state.borrow_mut();
                if state.frame.is_some() || state.tick.is_none() {
                    return;
                }
                state.frame = window
                    .request_animation_frame((*frame).as_ref().unchecked_ref())
                    .ok();
            }) as Box<dyn FnMut()>)
        };

        let poll = {
            let state = state.clone();
            let window = window.clone();
            let document = document.clone();
            Closure::wrap(Box::new(move || check_depth(&state, &window, &document)) as Box<dyn FnMut()>)
        };

        {
            let tick_fn: &js_sys::Function = tick.as_ref().unchecked_ref();
            let mut passive = AddEventListenerOptions::new();
            passive.passive(true);
            let _ = window.add_event_listener_with_callback_and_add_event_listener_options("scroll", tick_fn, &passive);
            for name in &WINDOW_TICKS[1..] {
                let _ = window.add_event_listener_with_callback(name, tick_fn);
            }
            let _ = document.add_event_listener_with_callback("visibilitychange", tick_fn);

            let mut s = state.borrow_mut();
            s.tick = Some(tick_fn.clone());
            s.poll = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    poll.as_ref().unchecked_ref(),
                    config::SCROLL_POLL_MS as i32,
                )
                .ok();
        }

        check_depth(&state, &window, &document);

        ScrollDepthWatch {
            window,
            document,
            state,
            _frame: frame,
            _tick: tick,
            _poll: poll,
        }
    }
}

impl Drop for ScrollDepthWatch {
    fn drop(&mut self) {
        self.state.borrow_mut().stop(&self.window, &self.document);
    }
}
