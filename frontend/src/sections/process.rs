use yew::prelude::*;

use crate::analytics::names;
use crate::components::scheduler_modal::{use_scheduler_toggle, SchedulerModal};
use crate::config;
use crate::modal::SchedulerEmbed;

const STEPS: [(&str, &str, &str); 3] = [
    (
        "📞",
        "1) Book a Discovery Call",
        "We learn your goals, tech stack, and bottlenecks to map the fastest path to ROI.",
    ),
    (
        "⚙️",
        "2) Build & Integrate",
        "We design your custom CRM, automations, and integrations, then connect everything end-to-end.",
    ),
    (
        "🚀",
        "3) Launch & Scale",
        "We deploy, monitor, and optimize dashboards and workflows so your team can focus on growth.",
    ),
];

#[function_component(ProcessSection)]
pub fn process_section() -> Html {
    let (cal_open, open, close) = use_scheduler_toggle();

    html! {
        <section id="process" class="section-fade process">
            <div class="section-head">
                <p class="eyebrow">{"How It Works"}</p>
                <h2 class="gradient-text">{"From Call → System → Scale"}</h2>
                <p class="lead">{"A simple, battle-tested process that gets you real outcomes without the chaos."}</p>
            </div>
            <div class="process-steps">
                { for STEPS.iter().map(|(icon, title, desc)| html! {
                    <div class="process-card">
                        <div class="process-icon">{*icon}</div>
                        <div>
                            <h3>{*title}</h3>
                            <p>{*desc}</p>
                        </div>
                    </div>
                }) }
            </div>
            <button
                type="button"
                class="process-cta"
                onclick={open}
                aria-haspopup="dialog"
                aria-expanded={if cal_open { "true" } else { "false" }}
                data-evt={names::CTA_CLICK}
                data-place="process"
            >
                {"Schedule Your Free Consultation"}
            </button>
            <SchedulerModal
                open={cal_open}
                on_close={close}
                embed={SchedulerEmbed::calendly(config::CALENDLY_EVENT_URL)}
                place="process"
            />
            <style>
                {r#"
                    .process { padding: 6rem 1.5rem; color: #fff; }
                    @media (min-width: 768px) { .process { padding: 6rem 4rem; } }
                    .process-steps {
                        display: grid;
                        gap: 1.5rem;
                        margin-top: 3rem;
                    }
                    @media (min-width: 768px) { .process-steps { grid-template-columns: repeat(3, 1fr); } }
                    .process-card {
                        display: flex;
                        gap: 1rem;
                        padding: 1.5rem;
                        border-radius: 0.75rem;
                        border: 1px solid #262626;
                        background: rgba(0, 0, 0, 0.2);
                        transition: transform 0.2s ease-out, box-shadow 0.2s ease-out, border-color 0.2s ease-out;
                    }
                    .process-card:hover {
                        transform: translateY(-8px) scale(1.03);
                        box-shadow: 0 8px 25px rgba(0, 200, 255, 0.25);
                        border-color: rgba(34, 211, 238, 0.9);
                        transition-duration: 0s;
                    }
                    .process-icon {
                        flex-shrink: 0;
                        padding: 0.75rem;
                        border-radius: 0.75rem;
                        border: 1px solid #262626;
                        background: #0a0a0a;
                        height: fit-content;
                    }
                    .process-card h3 { font-size: 1.25rem; font-weight: 600; margin: 0; }
                    .process-card p { color: #d1d5db; margin-top: 0.5rem; line-height: 1.6; }
                    .process-cta {
                        margin-top: 3rem;
                        padding: 0.75rem 1.5rem;
                        border: none;
                        border-radius: 0.375rem;
                        background: linear-gradient(90deg, #06b6d4, #ec4899);
                        color: #fff;
                        cursor: pointer;
                    }
                "#}
            </style>
        </section>
    }
}
