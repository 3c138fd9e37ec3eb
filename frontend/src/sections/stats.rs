use yew::prelude::*;

use crate::components::counter::Counter;

struct Stat {
    label: &'static str,
    value: u64,
    suffix: Option<&'static str>,
}

const STATS: [Stat; 4] = [
    Stat { label: "Integrations Connected", value: 2000, suffix: None },
    Stat { label: "Custom Workflows Implemented", value: 3000, suffix: None },
    Stat { label: "Dashboards & Reports Deployed", value: 900, suffix: None },
    Stat { label: "Average Response Time Reduction", value: 78, suffix: Some("%↓") },
];

#[function_component(StatsSection)]
pub fn stats_section() -> Html {
    html! {
        <section id="stats" class="section-fade stats">
            <div class="section-head">
                <p class="eyebrow">{"By the Numbers"}</p>
                <h2 class="gradient-text">{"Systems that scale, measurably."}</h2>
                <p class="lead">{"We connect stacks, automate the busywork, and surface the metrics that matter."}</p>
            </div>
            <div class="stats-grid">
                { for STATS.iter().map(|stat| {
                    let counter = match stat.suffix {
                        Some(suffix) => html! { <Counter to={stat.value} {suffix} /> },
                        None => html! { <Counter to={stat.value} /> },
                    };
                    html! {
                        <div class="stat-card">
                            <div class="stat-value">{counter}</div>
                            <div class="stat-label">{stat.label}</div>
                        </div>
                    }
                }) }
            </div>
            <style>
                {r#"
                    .stats { padding: 6rem 1.5rem; color: #fff; }
                    @media (min-width: 768px) { .stats { padding: 6rem 4rem; } }
                    .stats-grid { display: grid; gap: 1.5rem; margin-top: 3rem; }
                    @media (min-width: 640px) { .stats-grid { grid-template-columns: repeat(2, 1fr); } }
                    @media (min-width: 1024px) { .stats-grid { grid-template-columns: repeat(4, 1fr); } }
                    .stat-card {
                        padding: 1.5rem;
                        border-radius: 0.75rem;
                        border: 1px solid #262626;
                        background: rgba(0, 0, 0, 0.2);
                    }
                    .stat-value { font-size: 2.25rem; font-weight: 600; font-variant-numeric: tabular-nums; }
                    .stat-label { font-size: 0.875rem; color: #9ca3af; margin-top: 0.5rem; }
                "#}
            </style>
        </section>
    }
}
