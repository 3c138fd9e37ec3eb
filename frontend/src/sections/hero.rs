use std::f64::consts::PI;

use yew::prelude::*;

use crate::analytics::names;
use crate::components::scheduler_modal::{use_scheduler_toggle, SchedulerModal};

const SIZE: f64 = 520.0;
const RING_RADIUS: f64 = 235.0;
const DISC_RADIUS: f64 = 245.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Pick from the dominant axis of the chip's angle.
    Auto,
    Left,
    Right,
    Top,
    Bottom,
    Center,
}

/// A label pinned to the orbit ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chip {
    pub label: &'static str,
    /// Degrees clockwise from 12 o'clock.
    pub angle: f64,
    pub from_ring: f64,
    pub outward: f64,
    pub dx: f64,
    pub dy: f64,
    pub anchor: Anchor,
}

impl Chip {
    const fn new(label: &'static str, angle: f64, dx: f64, anchor: Anchor) -> Self {
        Chip {
            label,
            angle,
            from_ring: 12.0,
            outward: 0.0,
            dx,
            dy: 0.0,
            anchor,
        }
    }
}

pub const CHIPS: [Chip; 6] = [
    Chip::new("Assessment", 350.0, -14.0, Anchor::Top),
    Chip::new("Configuration", 50.0, -10.0, Anchor::Auto),
    Chip::new("Integration", 115.0, -6.0, Anchor::Auto),
    Chip::new("Training", 189.0, -12.0, Anchor::Bottom),
    Chip {
        from_ring: 0.0,
        dy: -2.0,
        ..Chip::new("Optimization", 245.0, -130.0, Anchor::Center)
    },
    Chip {
        outward: 4.0,
        ..Chip::new("Process Design", 310.0, -136.0, Anchor::Left)
    },
];

/// Screen angle in radians; 0 degrees points up.
fn radians(angle: f64) -> f64 {
    (angle - 90.0) * PI / 180.0
}

/// Pixel position of the chip's anchor point inside the square visual.
pub fn chip_position(chip: &Chip, center: f64) -> (f64, f64) {
    let a = radians(chip.angle);
    let r = RING_RADIUS + chip.from_ring + chip.outward;
    (center + r * a.cos() + chip.dx, center + r * a.sin() + chip.dy)
}

/// CSS translate placing the chip box relative to its anchor point.
pub fn anchor_transform(chip: &Chip) -> &'static str {
    let anchor = match chip.anchor {
        Anchor::Auto => {
            let a = radians(chip.angle);
            let (cos, sin) = (a.cos(), a.sin());
            if cos.abs() > sin.abs() {
                if cos > 0.0 { Anchor::Right } else { Anchor::Left }
            } else if sin > 0.0 {
                Anchor::Bottom
            } else {
                Anchor::Top
            }
        }
        forced => forced,
    };
    match anchor {
        Anchor::Left => "translate(-100%, -50%)",
        Anchor::Right => "translate(0, -50%)",
        Anchor::Top => "translate(-50%, -100%)",
        Anchor::Bottom => "translate(-50%, 0)",
        Anchor::Center | Anchor::Auto => "translate(-50%, -50%)",
    }
}

const NETWORK_POINTS: [(u32, u32); 7] = [(150, 180), (260, 120), (370, 180), (160, 320), (260, 380), (370, 320), (260, 260)];

#[function_component(HeroVisual)]
fn hero_visual() -> Html {
    let c = SIZE / 2.0;
    html! {
        <div id="hero-visual" aria-hidden="true">
            <svg width="100%" height="100%" viewBox={format!("0 0 {} {}", SIZE, SIZE)} role="img" aria-label="Animated system network">
                <defs>
                    <linearGradient id="hero-g1" x1="0" y1="0" x2="1" y2="1">
                        <stop offset="0%" stop-color="#22d3ee" />
                        <stop offset="50%" stop-color="#8b5cf6" />
                        <stop offset="100%" stop-color="#ec4899" />
                    </linearGradient>
                    <radialGradient id="hero-disc" cx="50%" cy="50%" r="50%">
                        <stop offset="0%" stop-color="#000" stop-opacity="0.35" />
                        <stop offset="100%" stop-color="#000" stop-opacity="0.85" />
                    </radialGradient>
                </defs>
                <circle cx={c.to_string()} cy={c.to_string()} r={DISC_RADIUS.to_string()} fill="url(#hero-disc)" />
                <circle class="orbit" cx={c.to_string()} cy={c.to_string()} r={RING_RADIUS.to_string()} fill="none" stroke="url(#hero-g1)" stroke-width="2" stroke-linecap="round" />
                <g stroke="url(#hero-g1)" stroke-width="2" stroke-linecap="round" fill="none" opacity="0.9">
                    <path class="draw" d="M150 180 L260 120 L370 180" />
                    <path class="draw d2" d="M150 180 L160 320 L260 380" />
                    <path class="draw d3" d="M370 180 L370 320 L260 380" />
                    <path class="draw d4" d="M160 320 L260 260 L370 320" />
                    <path class="draw d5" d="M260 120 L260 260" />
                </g>
                <g fill="none" stroke="url(#hero-g1)" stroke-width="2">
                    { for NETWORK_POINTS.iter().map(|(x, y)| html! {
                        <g>
                            <circle cx={x.to_string()} cy={y.to_string()} r="9" opacity="0.35" />
                            <circle class="pulse" cx={x.to_string()} cy={y.to_string()} r="4.5" />
                        </g>
                    }) }
                </g>
                <path class="tick" d="M244 262 L256 274 L280 248" stroke="url(#hero-g1)" stroke-width="3" stroke-linecap="round" fill="none" />
            </svg>
            <div class="hero-chips">
                { for CHIPS.iter().enumerate().map(|(i, chip)| {
                    let (x, y) = chip_position(chip, c);
                    let style = format!(
                        "left: {:.1}px; top: {:.1}px; transform: {}; animation-delay: {:.2}s",
                        x, y, anchor_transform(chip), 0.25 + i as f64 * 0.12
                    );
                    html! { <span class="hero-chip" {style}>{"✓ "}{chip.label}</span> }
                }) }
            </div>
        </div>
    }
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let (show_cal, open, close) = use_scheduler_toggle();

    html! {
        <section id="hero" class="section-fade hero">
            <div class="hero-copy">
                <h1><span class="gradient-text">{"Welcome to the"}</span></h1>
                <h2 class="hero-title">{"Optimion System"}</h2>
                <p>
                    {"We build custom CRMs, powerful automations, and optimized workflows for any business. Eliminate bottlenecks. Unlock growth."}
                </p>
                <button type="button" class="hero-cta" onclick={open} data-evt={names::CTA_CLICK} data-place="hero">
                    {"Book a Free Call →"}
                </button>
            </div>
            <div class="hero-visual-wrap">
                <HeroVisual />
            </div>
            <SchedulerModal open={show_cal} on_close={close} place="hero" />
            <style>
                {r#"
                    .hero {
                        position: relative;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 2.5rem 1.5rem 1.5rem;
                        color: #fff;
                    }
                    @media (min-width: 768px) {
                        .hero { min-height: 100vh; padding: 0 4rem; }
                    }
                    .hero-copy { max-width: 42rem; z-index: 1; }
                    .hero-copy h1 { font-size: 2.5rem; font-weight: 500; margin: 0 0 0.75rem; }
                    .hero-title {
                        font-size: 3rem;
                        font-weight: 800;
                        margin: 0 0 1rem;
                        background: linear-gradient(90deg, #22d3ee, #c084fc, #ec4899);
                        -webkit-background-clip: text;
                        color: transparent;
                    }
                    .hero-copy p { color: #d1d5db; font-size: 1.125rem; max-width: 32rem; margin-bottom: 1.25rem; }
                    .hero-cta {
                        padding: 0.75rem 1.25rem;
                        background: #171717;
                        color: #fff;
                        border: 1px solid #404040;
                        border-radius: 0.375rem;
                        font-size: 0.875rem;
                        cursor: pointer;
                    }
                    .hero-cta:hover { background: #262626; }
                    .hero-visual-wrap { display: none; width: 50%; justify-content: center; pointer-events: none; }
                    @media (min-width: 768px) { .hero-visual-wrap { display: flex; } }
                    #hero-visual { position: relative; width: 520px; height: 520px; }
                    #hero-visual svg { position: absolute; inset: 0; border-radius: 50%; opacity: 0.9; }
                    .hero-chips { position: absolute; inset: 0; }
                    .hero-chip {
                        position: absolute;
                        white-space: nowrap;
                        border-radius: 9999px;
                        border: 1px solid #262626;
                        background: rgba(0, 0, 0, 0.6);
                        color: #e5e7eb;
                        font-size: 0.875rem;
                        padding: 0.25rem 0.75rem;
                        opacity: 0;
                        animation: chip-in 0.35s ease-out forwards;
                    }
                    @keyframes chip-in { from { opacity: 0; } to { opacity: 1; } }
                    #hero-visual .orbit { stroke-dasharray: 280 1500; animation: hero-orbit 6s linear infinite; }
                    @keyframes hero-orbit { to { stroke-dashoffset: -1780; } }
                    #hero-visual .draw { stroke-dasharray: 400; stroke-dashoffset: 400; animation: hero-draw 2.2s ease-out infinite; }
                    #hero-visual .d2 { animation-delay: .35s; } #hero-visual .d3 { animation-delay: .7s; } #hero-visual .d4 { animation-delay: 1.05s; } #hero-visual .d5 { animation-delay: 1.4s; }
                    #hero-visual .pulse { animation: hero-pulse 2.4s ease-in-out infinite; transform-origin: center; }
                    #hero-visual .tick { stroke-dasharray: 80; stroke-dashoffset: 80; animation: hero-tick 1.2s ease-out infinite; animation-delay: 1.9s; }
                    @keyframes hero-draw { 0% { stroke-dashoffset: 400; opacity: 0; } 15% { opacity: .9; } 60% { stroke-dashoffset: 0; opacity: .9; } 100% { stroke-dashoffset: 0; opacity: .15; } }
                    @keyframes hero-pulse { 0%, 100% { r: 4.5; opacity: 1; } 50% { r: 7.5; opacity: .5; } }
                    @keyframes hero-tick { 0% { stroke-dashoffset: 80; opacity: 0; } 40% { stroke-dashoffset: 0; opacity: 1; } 100% { stroke-dashoffset: 0; opacity: .2; } }
                    @media (prefers-reduced-motion: reduce) { #hero-visual * { animation: none !important; } }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn zero_degrees_is_straight_up() {
        let chip = Chip::new("x", 0.0, 0.0, Anchor::Auto);
        assert!(close(chip_position(&chip, 260.0), (260.0, 260.0 - 247.0)));
        assert_eq!(anchor_transform(&chip), "translate(-50%, -100%)");
    }

    #[test]
    fn ninety_degrees_anchors_right() {
        let chip = Chip::new("x", 90.0, 0.0, Anchor::Auto);
        assert!(close(chip_position(&chip, 260.0), (507.0, 260.0)));
        assert_eq!(anchor_transform(&chip), "translate(0, -50%)");
    }

    #[test]
    fn auto_anchor_follows_dominant_axis() {
        assert_eq!(anchor_transform(&Chip::new("x", 180.0, 0.0, Anchor::Auto)), "translate(-50%, 0)");
        assert_eq!(anchor_transform(&Chip::new("x", 270.0, 0.0, Anchor::Auto)), "translate(-100%, -50%)");
        assert_eq!(anchor_transform(&CHIPS[1]), "translate(0, -50%)");
    }

    #[test]
    fn forced_anchor_wins() {
        assert_eq!(anchor_transform(&CHIPS[4]), "translate(-50%, -50%)");
        assert_eq!(anchor_transform(&CHIPS[5]), "translate(-100%, -50%)");
    }

    #[test]
    fn outward_push_and_nudges_apply() {
        let chip = CHIPS[5];
        let plain = chip_position(&Chip { outward: 0.0, dx: 0.0, dy: 0.0, ..chip }, 260.0);
        let (x, y) = chip_position(&chip, 260.0);
        let a = radians(chip.angle);
        assert!(close((x, y), (plain.0 + 4.0 * a.cos() - 136.0, plain.1 + 4.0 * a.sin())));
    }
}
