use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{KeyboardEvent, MessageEvent};
use yew::prelude::*;

use crate::analytics::{names, track};
use crate::modal::booking;
use crate::modal::{lock_body_scroll, ModalPhase, ModalSession, SchedulerEmbed};

fn now() -> f64 {
    js_sys::Date::now()
}

#[derive(Properties, PartialEq)]
pub struct SchedulerModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub embed: SchedulerEmbed,
    /// Which CTA opened the modal, attached to every `cal_*` event.
    #[prop_or(AttrValue::from("unknown"))]
    pub place: AttrValue,
    /// Set to false when the opening click already reported itself.
    #[prop_or(true)]
    pub track_open: bool,
    #[prop_or(AttrValue::from("Book a 30 minute consult"))]
    pub title: AttrValue,
}

/// Open flag for a section's modal, with the callbacks its CTA and the
/// modal need.
#[hook]
pub fn use_scheduler_toggle() -> (bool, Callback<MouseEvent>, Callback<()>) {
    let open = use_state(|| false);
    let show = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(true))
    };
    let hide = {
        let open = open.clone();
        Callback::from(move |_: ()| open.set(false))
    };
    (*open, show, hide)
}

/// Listeners that only exist while the modal is open.
struct OpenListeners {
    keydown: Closure<dyn FnMut(KeyboardEvent)>,
    message: Closure<dyn FnMut(MessageEvent)>,
}

impl OpenListeners {
    fn attach(on_escape: Callback<()>, session: Rc<RefCell<ModalSession>>) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;

        let keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                on_escape.emit(());
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);

        let message = Closure::wrap(Box::new(move |e: MessageEvent| {
            let data = e.data();
            let text = data
                .as_string()
                .or_else(|| js_sys::JSON::stringify(&data).ok().and_then(|s| s.as_string()));
            let Some(text) = text else {
                log::debug!("unreadable message from {}", e.origin());
                return;
            };
            if let Some(confidence) = booking::classify(&e.origin(), &text) {
                if let Some(event) = session.borrow_mut().booked(confidence) {
                    track(event);
                }
            }
        }) as Box<dyn FnMut(MessageEvent)>);

        let _ = document.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
        let _ = window.add_event_listener_with_callback("message", message.as_ref().unchecked_ref());

        Some(OpenListeners { keydown, message })
    }
}

impl Drop for OpenListeners {
    fn drop(&mut self) {
        let Some(window) = web_sys::window() else { return };
        if let Some(document) = window.document() {
            let _ = document.remove_event_listener_with_callback("keydown", self.keydown.as_ref().unchecked_ref());
        }
        let _ = window.remove_event_listener_with_callback("message", self.message.as_ref().unchecked_ref());
    }
}

#[function_component(SchedulerModal)]
pub fn scheduler_modal(props: &SchedulerModalProps) -> Html {
    let session = use_mut_ref(ModalSession::default);
    let timer = use_mut_ref(|| None::<Timeout>);
    let update = use_force_update();

    let close = {
        let session = session.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: ()| {
            if let Some(event) = session.borrow_mut().close() {
                track(event);
            }
            on_close.emit(());
        })
    };

    {
        let session = session.clone();
        let update = update.clone();
        let close = close.clone();
        let place = props.place.to_string();
        let track_open = props.track_open;
        use_effect_with_deps(
            move |open: &bool| {
                let mut held = None;
                if *open {
                    let opened = session.borrow_mut().open(&place, !track_open);
                    if let Some(event) = opened {
                        track(event);
                    }
                    session.borrow_mut().request_frame(now());
                    held = Some((lock_body_scroll(), OpenListeners::attach(close, session.clone())));
                    update.force_update();
                }
                move || {
                    drop(held);
                    let mut s = session.borrow_mut();
                    if let Some(event) = s.close() {
                        track(event);
                    }
                    s.finish_close();
                }
            },
            props.open,
        );
    }

    // Re-arm the single deadline timer (reveal or load timeout) after every render.
    {
        let session = session.clone();
        let timer = timer.clone();
        let update = update.clone();
        use_effect(move || {
            let deadline = session.borrow().next_deadline();
            *timer.borrow_mut() = deadline.map(|at| {
                let delay = (at - now()).max(0.0).ceil() as u32;
                let session = session.clone();
                Timeout::new(delay, move || {
                    let event = session.borrow_mut().poll(now());
                    if let Some(event) = event {
                        track(event);
                    }
                    update.force_update();
                })
            });
            || ()
        });
    }

    if !props.open {
        return html! {};
    }

    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        log::warn!("no document body to host the scheduler");
        return html! {};
    };

    let phase = session.borrow().phase();
    let onload = {
        let session = session.clone();
        let update = update.clone();
        Callback::from(move |_: Event| {
            session.borrow_mut().frame_loaded(now());
            update.force_update();
        })
    };
    let on_dismiss = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };

    let loaded = phase == ModalPhase::Loaded;
    let modal = html! {
        <div class="scheduler-modal" role="dialog" aria-modal="true" aria-label={props.title.clone()}>
            <div class="scheduler-backdrop" onclick={on_dismiss.clone()}></div>
            <div class="scheduler-glow" aria-hidden="true"></div>
            <div class="scheduler-panel">
                <button type="button" class="scheduler-close" aria-label="Close scheduling dialog" onclick={on_dismiss}>
                    {"✕"}
                </button>
                if phase == ModalPhase::TimedOut {
                    <div class="scheduler-fallback">
                        <p>{"The scheduler is taking longer than usual to load."}</p>
                        <a
                            href={props.embed.direct_url().to_string()}
                            target="_blank"
                            rel="noopener noreferrer"
                            data-evt={names::CTA_CLICK}
                            data-place={props.place.clone()}
                            data-source="cal_fallback"
                        >
                            {"Open the booking page in a new tab"}
                        </a>
                    </div>
                } else if !loaded {
                    <div class="scheduler-skeleton" aria-hidden="true">
                        <div class="bar wide"></div>
                        <div class="bar"></div>
                        <div class="grid"></div>
                    </div>
                }
                <iframe
                    title={props.title.clone()}
                    src={props.embed.url()}
                    class={classes!("scheduler-frame", loaded.then(|| "ready"))}
                    allow="camera; microphone; fullscreen; geolocation"
                    frameborder="0"
                    {onload}
                />
            </div>
            <style>
                {r#"
                    .scheduler-modal {
                        position: fixed;
                        inset: 0;
                        z-index: 9999;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        animation: scheduler-fade 0.2s ease-out;
                    }
                    .scheduler-backdrop {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.7);
                        backdrop-filter: blur(4px);
                    }
                    .scheduler-glow {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        background: radial-gradient(60% 60% at 50% 30%, rgba(34,211,238,.12), rgba(139,92,246,.12) 40%, rgba(236,72,153,.12) 70%, transparent 75%);
                    }
                    .scheduler-panel {
                        position: relative;
                        width: min(1000px, calc(100vw - 2rem));
                        height: min(86svh, calc(100svh - 2rem));
                        border-radius: 1rem;
                        overflow: hidden;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: #0b0b0d;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.6);
                        animation: scheduler-rise 0.25s ease-out;
                    }
                    .scheduler-close {
                        position: absolute;
                        top: 0.75rem;
                        right: 0.75rem;
                        z-index: 2;
                        width: 2.25rem;
                        height: 2.25rem;
                        border-radius: 0.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.08);
                        color: #e5e7eb;
                        cursor: pointer;
                    }
                    .scheduler-close:hover { background: rgba(255, 255, 255, 0.15); }
                    .scheduler-frame {
                        display: block;
                        width: 100%;
                        height: 100%;
                        background: transparent;
                        opacity: 0;
                        transition: opacity 0.3s ease-out;
                    }
                    .scheduler-frame.ready { opacity: 1; }
                    .scheduler-skeleton,
                    .scheduler-fallback {
                        position: absolute;
                        inset: 0;
                        padding: 3rem 2rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .scheduler-skeleton .bar,
                    .scheduler-skeleton .grid {
                        border-radius: 0.5rem;
                        background: linear-gradient(90deg, rgba(255,255,255,.04), rgba(255,255,255,.09), rgba(255,255,255,.04));
                        background-size: 200% 100%;
                        animation: scheduler-shimmer 1.2s linear infinite;
                    }
                    .scheduler-skeleton .bar { height: 1.25rem; width: 40%; }
                    .scheduler-skeleton .bar.wide { width: 65%; }
                    .scheduler-skeleton .grid { flex: 1; }
                    .scheduler-fallback {
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        color: #e5e7eb;
                        z-index: 1;
                    }
                    .scheduler-fallback a {
                        color: #22d3ee;
                        text-decoration: underline;
                    }
                    @keyframes scheduler-fade { from { opacity: 0; } to { opacity: 1; } }
                    @keyframes scheduler-rise {
                        from { opacity: 0; transform: translateY(12px) scale(0.98); }
                        to { opacity: 1; transform: none; }
                    }
                    @keyframes scheduler-shimmer { to { background-position: -200% 0; } }
                "#}
            </style>
        </div>
    };

    create_portal(modal, body.into())
}
