use yew::prelude::*;

use crate::analytics::{names, track, SiteEvent};
use crate::components::scheduler_modal::{use_scheduler_toggle, SchedulerModal};

const FAQS: [(&str, &str, &str); 7] = [
    (
        "💳",
        "How do you price projects?",
        "Most builds are a fixed-scope, fixed-fee engagement with clear milestones. Larger or ongoing work can switch to a monthly retainer. No surprise overages: any change of scope is quoted first.",
    ),
    (
        "🔒",
        "Is our data secure?",
        "Yes. We use best-practice auth, least-privilege access, and store credentials in vaults. You keep control of accounts, and we can sign NDAs and DPAs on request.",
    ),
    (
        "📄",
        "Who owns the accounts and the IP?",
        "You do. All platforms remain in your name, and you retain full ownership of workflows, dashboards, and custom code delivered.",
    ),
    (
        "⏱️",
        "How fast can we go live?",
        "Discovery in 1–2 days, a first working slice within 1–2 weeks for most stacks, and full rollout in 3–6 weeks depending on complexity.",
    ),
    (
        "🎧",
        "What does support look like after launch?",
        "We offer a light retainer for monitoring, tweaks, and new integrations. You’ll also get runbooks and handoff videos so your team is self-sufficient.",
    ),
    (
        "⏸️",
        "Can we pause or cancel?",
        "Yes. Fixed-fee projects are milestone-based, so you can pause between milestones anytime. Retainers are month-to-month.",
    ),
    (
        "🧩",
        "Will this work with our existing tools?",
        "Almost certainly. We’ve connected 2000+ integrations. If a tool isn’t native, we can bridge through APIs or middleware.",
    ),
];

/// Accordion step: at most one item open. Returns the new open item and
/// whether `clicked` was just opened.
pub fn toggle(open: Option<usize>, clicked: usize) -> (Option<usize>, bool) {
    if open == Some(clicked) {
        (None, false)
    } else {
        (Some(clicked), true)
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let open_item = use_state(|| Some(0usize));
    let (cal_open, open, close) = use_scheduler_toggle();

    html! {
        <section id="faq" class="section-fade faq">
            <div class="section-head">
                <h2>{"Frequently asked questions"}</h2>
                <p class="lead">{"Straight answers to the things people ask before they book."}</p>
            </div>
            <div class="faq-list">
                { for FAQS.iter().enumerate().map(|(i, (icon, question, answer))| {
                    let is_open = *open_item == Some(i);
                    let onclick = {
                        let open_item = open_item.clone();
                        let question = question.to_string();
                        Callback::from(move |_: MouseEvent| {
                            let (next, opened) = toggle(*open_item, i);
                            open_item.set(next);
                            if opened {
                                track(SiteEvent::FaqOpen { question: question.clone() });
                            }
                        })
                    };
                    html! {
                        <div class="faq-item">
                            <button
                                id={format!("faq-button-{}", i)}
                                aria-controls={format!("faq-panel-{}", i)}
                                aria-expanded={if is_open { "true" } else { "false" }}
                                class="faq-question"
                                {onclick}
                            >
                                <span class="faq-icon">{*icon}</span>
                                <span class="faq-q">{*question}</span>
                                <span class="faq-toggle">{if is_open { "Hide" } else { "Show" }}</span>
                            </button>
                            if is_open {
                                <div
                                    id={format!("faq-panel-{}", i)}
                                    role="region"
                                    aria-labelledby={format!("faq-button-{}", i)}
                                    class="faq-answer"
                                >
                                    {*answer}
                                </div>
                            }
                        </div>
                    }
                }) }
            </div>
            <div class="faq-band">
                <span>{"Still have questions? We’ll walk you through your stack."}</span>
                <button
                    type="button"
                    onclick={open}
                    aria-haspopup="dialog"
                    aria-expanded={if cal_open { "true" } else { "false" }}
                    data-evt={names::CTA_CLICK}
                    data-place="faq"
                >
                    {"Ask us on a quick call"}
                </button>
            </div>
            <SchedulerModal open={cal_open} on_close={close} place="faq" />
            <style>
                {r#"
                    .faq { padding: 6rem 1.5rem; color: #fff; }
                    @media (min-width: 768px) { .faq { padding: 6rem 4rem; } }
                    .faq-list { max-width: 56rem; display: grid; gap: 0.75rem; margin-top: 2rem; }
                    .faq-item {
                        border-radius: 0.75rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(0, 0, 0, 0.2);
                    }
                    .faq-question {
                        width: 100%;
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 1rem 1.25rem;
                        border: none;
                        border-radius: 0.75rem;
                        background: transparent;
                        color: #fff;
                        text-align: left;
                        font-size: 1rem;
                        cursor: pointer;
                    }
                    .faq-question:hover { background: rgba(255, 255, 255, 0.05); }
                    .faq-icon {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 2rem;
                        height: 2rem;
                        border-radius: 0.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.05);
                    }
                    .faq-q { font-weight: 500; }
                    .faq-toggle { margin-left: auto; font-size: 0.875rem; color: #9ca3af; }
                    .faq-answer {
                        padding: 0 1.25rem 1.25rem;
                        color: #d1d5db;
                        animation: faq-open 0.28s ease-out;
                    }
                    @keyframes faq-open { from { opacity: 0; transform: translateY(-4px); } to { opacity: 1; transform: none; } }
                    .faq-band {
                        max-width: 56rem;
                        margin-top: 2rem;
                        padding: 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 0.75rem;
                        border-radius: 0.75rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.06);
                        font-size: 0.875rem;
                    }
                    .faq-band button {
                        padding: 0.5rem 1rem;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_another_item_closes_the_first() {
        assert_eq!(toggle(Some(0), 2), (Some(2), true));
    }

    #[test]
    fn clicking_the_open_item_closes_without_event() {
        assert_eq!(toggle(Some(3), 3), (None, false));
    }

    #[test]
    fn reopening_after_close_counts_as_open() {
        let (state, _) = toggle(Some(1), 1);
        assert_eq!(toggle(state, 1), (Some(1), true));
    }
}
