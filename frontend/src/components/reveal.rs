use yew::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Flips to `true` the first time the referenced element intersects the
/// viewport by at least `threshold`, then stops observing.
#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64, root_margin: &'static str) -> bool {
    let seen = use_state(|| false);

    {
        let seen = seen.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut observer = None;
                let mut callback = None;

                if let Some(el) = node.cast::<Element>() {
                    let seen_cb = seen.clone();
                    let cb = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
                        let hit = entries
                            .iter()
                            .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                            .any(|e| e.is_intersecting());
                        if hit {
                            seen_cb.set(true);
                            observer.disconnect();
                        }
                    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                    let mut init = IntersectionObserverInit::new();
                    init.threshold(&JsValue::from_f64(threshold));
                    init.root_margin(root_margin);

                    match IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init) {
                        Ok(obs) => {
                            obs.observe(&el);
                            observer = Some(obs);
                        }
                        Err(_) => {
                            log::debug!("IntersectionObserver unavailable, revealing immediately");
                            seen.set(true);
                        }
                    }
                    callback = Some(cb);
                }

                move || {
                    if let Some(obs) = observer {
                        obs.disconnect();
                    }
                    drop(callback);
                }
            },
            node,
        );
    }

    *seen
}
