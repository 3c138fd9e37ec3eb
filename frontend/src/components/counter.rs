use yew::prelude::*;
use yew_hooks::prelude::*;

use super::reveal::use_in_view;

const FRAME_MS: u32 = 16;

pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Value shown `elapsed_ms` into an animation from 0 to `target`.
pub fn counter_value(target: u64, elapsed_ms: f64, duration_ms: f64) -> u64 {
    if duration_ms <= 0.0 {
        return target;
    }
    (ease_out(elapsed_ms / duration_ms) * target as f64).round() as u64
}

/// `2000` -> `"2,000"`.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub to: u64,
    #[prop_or(AttrValue::from("+"))]
    pub suffix: AttrValue,
    #[prop_or(1400)]
    pub duration_ms: u32,
}

/// Counts up once, the first time it scrolls into view.
#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), 0.0, "0px 0px -20% 0px");
    let started = use_mut_ref(|| None::<f64>);
    let value = use_state(|| 0u64);

    let running = in_view && *value < props.to;
    {
        let value = value.clone();
        let to = props.to;
        let duration = props.duration_ms as f64;
        use_interval(
            move || {
                let now = web_sys::js_sys::Date::now();
                let start = *started.borrow_mut().get_or_insert(now);
                value.set(counter_value(to, now - start, duration));
            },
            if running { FRAME_MS } else { 0 },
        );
    }

    html! {
        <span ref={node} class="counter">
            { format_thousands(*value) }{ props.suffix.clone() }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separates_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(900), "900");
        assert_eq!(format_thousands(2000), "2,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn eases_to_target() {
        assert_eq!(counter_value(2000, 0.0, 1400.0), 0);
        assert_eq!(counter_value(2000, 1400.0, 1400.0), 2000);
        assert_eq!(counter_value(2000, 9999.0, 1400.0), 2000);
        assert_eq!(counter_value(78, 10.0, 0.0), 78);
    }

    #[test]
    fn front_loads_progress() {
        let half = counter_value(1000, 700.0, 1400.0);
        assert!(half > 500, "ease-out should be past linear at the midpoint, got {}", half);
    }
}
