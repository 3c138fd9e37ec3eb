use yew::prelude::*;

use crate::analytics::names;
use crate::components::scheduler_modal::SchedulerModal;

pub const PLACE_PRIMARY: &str = "final_primary";
pub const PLACE_STICKY: &str = "final_sticky";

const PROMISES: [&str; 3] = [
    "Fixed-scope plan with clear milestones",
    "Your tools, your accounts: you own everything",
    "Go live in weeks, not months",
];

#[function_component(FinalCtaSection)]
pub fn final_cta_section() -> Html {
    let cal_open = use_state(|| false);
    // the modal reports whichever CTA opened it
    let place = use_state(|| PLACE_PRIMARY);

    let open_from = |from: &'static str| {
        let cal_open = cal_open.clone();
        let place = place.clone();
        Callback::from(move |_: MouseEvent| {
            place.set(from);
            cal_open.set(true);
        })
    };
    let close = {
        let cal_open = cal_open.clone();
        Callback::from(move |_: ()| cal_open.set(false))
    };
    let expanded = if *cal_open { "true" } else { "false" };

    html! {
        <section id="get-started" class="final-cta">
            <div class="final-card">
                <div class="final-grid">
                    <div>
                        <p class="eyebrow">{"Let’s build your system"}</p>
                        <h2>{"Ready to stop fighting tools and start scaling?"}</h2>
                        <p class="lead">
                            {"Book a quick consult. We’ll map your stack, outline a build plan, and show you the fastest path to ROI."}
                        </p>
                        <ul class="final-promises">
                            { for PROMISES.iter().map(|p| html! { <li><span class="check">{"✓"}</span>{*p}</li> }) }
                        </ul>
                        <div class="final-actions">
                            <button
                                type="button"
                                class="final-primary"
                                onclick={open_from(PLACE_PRIMARY)}
                                aria-haspopup="dialog"
                                aria-expanded={expanded}
                                data-evt={names::CTA_CLICK}
                                data-place={PLACE_PRIMARY}
                            >
                                {"📅 Schedule Your Free Consultation"}
                            </button>
                            <span class="final-note">{"✨ First roadmap in 1–2 days."}</span>
                        </div>
                    </div>
                    <div class="final-gets">
                        <p>{"What you’ll get"}</p>
                        <ul>
                            <li><span class="dot cyan"></span>{"Stack review + bottleneck map"}</li>
                            <li><span class="dot purple"></span>{"Build plan with timeline & milestones"}</li>
                            <li><span class="dot pink"></span>{"Outcome targets (+27% booked calls, −43% manual tasks)"}</li>
                        </ul>
                    </div>
                </div>
            </div>
            <div class="final-sticky">
                <button
                    type="button"
                    onclick={open_from(PLACE_STICKY)}
                    aria-haspopup="dialog"
                    aria-expanded={expanded}
                    data-evt={names::CTA_CLICK}
                    data-place={PLACE_STICKY}
                >
                    {"Book your free consult"}
                </button>
            </div>
            <SchedulerModal open={*cal_open} on_close={close} place={*place} />
            <style>
                {r#"
                    .final-cta { position: relative; padding: 6rem 1.5rem; color: #fff; scroll-margin-top: 6rem; }
                    @media (min-width: 768px) { .final-cta { padding: 6rem 4rem; scroll-margin-top: 7rem; } }
                    .final-card {
                        padding: 2rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: linear-gradient(135deg, rgba(6,182,212,.1), rgba(168,85,247,.1), rgba(236,72,153,.1));
                        overflow: hidden;
                    }
                    .final-grid { display: grid; gap: 2rem; align-items: center; }
                    @media (min-width: 768px) { .final-grid { grid-template-columns: 1.1fr 0.9fr; } }
                    .final-card h2 { font-size: 2.25rem; font-weight: 600; line-height: 1.2; margin: 0 0 0.75rem; }
                    .final-promises { list-style: none; padding: 0; display: grid; gap: 0.5rem; color: #e5e7eb; margin-bottom: 1.5rem; }
                    .check {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 1.25rem;
                        height: 1.25rem;
                        margin-right: 0.5rem;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.1);
                        color: #67e8f9;
                        font-size: 0.75rem;
                    }
                    .final-actions { display: flex; flex-wrap: wrap; align-items: center; gap: 0.75rem; }
                    .final-primary, .final-sticky button {
                        padding: 0.75rem 1.25rem;
                        border: none;
                        border-radius: 0.375rem;
                        background: linear-gradient(90deg, #06b6d4, #ec4899);
                        color: #fff;
                        font-weight: 500;
                        cursor: pointer;
                    }
                    .final-note { font-size: 0.875rem; color: #d1d5db; }
                    .final-gets {
                        padding: 1.25rem;
                        border-radius: 0.75rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(0, 0, 0, 0.3);
                    }
                    .final-gets p { font-size: 0.875rem; color: #9ca3af; margin: 0 0 0.75rem; }
                    .final-gets ul { list-style: none; padding: 0; display: grid; gap: 0.75rem; color: #e5e7eb; margin: 0; }
                    .dot { display: inline-block; width: 0.5rem; height: 0.5rem; border-radius: 50%; margin-right: 0.75rem; }
                    .dot.cyan { background: #22d3ee; }
                    .dot.purple { background: #c084fc; }
                    .dot.pink { background: #f472b6; }
                    .final-sticky { position: sticky; bottom: 1rem; margin-top: 1.5rem; text-align: center; }
                    .final-sticky button { width: 100%; max-width: 520px; }
                    @media (min-width: 768px) { .final-sticky { display: none; } }
                "#}
            </style>
        </section>
    }
}
