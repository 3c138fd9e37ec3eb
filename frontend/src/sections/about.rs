use yew::prelude::*;

use crate::analytics::names;
use crate::components::scheduler_modal::{use_scheduler_toggle, SchedulerModal};
use crate::diagram::Flowchart;

const POINTS: [&str; 5] = [
    "Automated email & SMS follow-up",
    "Abandoned cart recovery",
    "Mailchimp, ActiveCampaign, Klaviyo",
    "Drag-n-drop workflows",
    "Higher conversions, less manual work",
];

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    let (cal_open, open, close) = use_scheduler_toggle();

    html! {
        <section id="about" class="section-fade about">
            <div class="about-visual">
                <Flowchart id_prefix="about-flow" />
            </div>
            <div class="about-copy">
                <h2>{"Convert more leads"}<br />{"with smart automations"}</h2>
                <p>{"We build flows that recover lost sales, automate follow-ups, and keep your funnel working 24/7."}</p>
                <ul>
                    { for POINTS.iter().enumerate().map(|(i, point)| html! {
                        <li style={format!("animation-delay: {:.2}s", i as f64 * 0.06)}>
                            <span>{*point}</span>{" ✔"}
                        </li>
                    }) }
                </ul>
                <button
                    type="button"
                    class="about-cta"
                    onclick={open}
                    aria-haspopup="dialog"
                    aria-expanded={if cal_open { "true" } else { "false" }}
                    data-evt={names::CTA_CLICK}
                    data-place="about"
                >
                    {"Schedule Your Free Consultation"}
                </button>
            </div>
            <SchedulerModal open={cal_open} on_close={close} place="about" />
            <style>
                {r#"
                    .about {
                        display: flex;
                        flex-direction: column-reverse;
                        align-items: center;
                        justify-content: space-between;
                        padding: 3.5rem 1.5rem;
                        color: #fff;
                    }
                    @media (min-width: 768px) {
                        .about { flex-direction: row; min-height: 100vh; padding: 6rem 4rem; }
                    }
                    .about-visual { display: none; width: 50%; justify-content: center; }
                    @media (min-width: 768px) { .about-visual { display: flex; } }
                    .about-copy { width: 100%; text-align: right; z-index: 1; }
                    @media (min-width: 768px) { .about-copy { width: 50%; padding-left: 4rem; } }
                    .about-copy h2 { font-size: 2.25rem; font-weight: 700; line-height: 1.3; margin-bottom: 1rem; }
                    .about-copy p { color: #d1d5db; font-size: 1.125rem; margin-bottom: 1.5rem; }
                    .about-copy ul { list-style: none; padding: 0; margin-bottom: 1.5rem; display: grid; gap: 0.75rem; }
                    .about-copy li {
                        font-size: 0.875rem;
                        color: #e5e7eb;
                        opacity: 0;
                        animation: about-in 0.45s ease-out forwards;
                    }
                    @keyframes about-in { from { opacity: 0; transform: translateY(12px); } to { opacity: 1; transform: none; } }
                    .about-cta {
                        padding: 0.75rem 1.5rem;
                        border: none;
                        border-radius: 0.375rem;
                        background: linear-gradient(90deg, #06b6d4, #ec4899);
                        color: #fff;
                        cursor: pointer;
                    }
                    .about-cta:hover { filter: brightness(1.1); }
                "#}
            </style>
        </section>
    }
}
