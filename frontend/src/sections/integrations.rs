use yew::prelude::*;

use crate::analytics::names;
use crate::components::scheduler_modal::{use_scheduler_toggle, SchedulerModal};
use crate::config;
use crate::modal::SchedulerEmbed;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    Crm,
    Commerce,
    Messaging,
    Payments,
    Projects,
    Support,
    Analytics,
    All,
}

impl Category {
    /// Tab order: CRM first, All last.
    pub const TABS: [Category; 8] = [
        Category::Crm,
        Category::Commerce,
        Category::Messaging,
        Category::Payments,
        Category::Projects,
        Category::Support,
        Category::Analytics,
        Category::All,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Crm => "CRM",
            Category::Commerce => "E-commerce & Sites",
            Category::Messaging => "Messaging / Marketing",
            Category::Payments => "Payments",
            Category::Projects => "Projects & Ops",
            Category::Support => "Support / Helpdesk",
            Category::Analytics => "Analytics",
            Category::All => "All",
        }
    }
}

pub struct Tool {
    pub name: &'static str,
    pub category: Category,
}

const fn tool(name: &'static str, category: Category) -> Tool {
    Tool { name, category }
}

pub const TOOLS: [Tool; 39] = [
    tool("Shopify", Category::Commerce),
    tool("WooCommerce", Category::Commerce),
    tool("Webflow", Category::Commerce),
    tool("WordPress", Category::Commerce),
    tool("BigCommerce", Category::Commerce),
    tool("Magento / Adobe Commerce", Category::Commerce),
    tool("Squarespace", Category::Commerce),
    tool("Wix", Category::Commerce),
    tool("Stripe", Category::Payments),
    tool("PayPal", Category::Payments),
    tool("Square", Category::Payments),
    tool("QuickBooks", Category::Payments),
    tool("Xero", Category::Payments),
    tool("HubSpot", Category::Crm),
    tool("Salesforce", Category::Crm),
    tool("Pipedrive", Category::Crm),
    tool("Zoho CRM", Category::Crm),
    tool("Airtable", Category::Crm),
    tool("ActiveCampaign", Category::Messaging),
    tool("Klaviyo", Category::Messaging),
    tool("Mailchimp", Category::Messaging),
    tool("SendGrid", Category::Messaging),
    tool("Twilio", Category::Messaging),
    tool("Slack", Category::Messaging),
    tool("Calendly", Category::Messaging),
    tool("Zoom", Category::Messaging),
    tool("Monday.com", Category::Projects),
    tool("ClickUp", Category::Projects),
    tool("Trello", Category::Projects),
    tool("Asana", Category::Projects),
    tool("Zendesk", Category::Support),
    tool("Freshdesk", Category::Support),
    tool("GA4", Category::Analytics),
    tool("Google Ads", Category::Analytics),
    tool("Meta Ads", Category::Analytics),
    tool("Segment", Category::Analytics),
    tool("Zapier", Category::Analytics),
    tool("Make (Integromat)", Category::Analytics),
    tool("Notion", Category::Analytics),
];

pub fn filter_tools(category: Category) -> Vec<&'static Tool> {
    TOOLS
        .iter()
        .filter(|t| category == Category::All || t.category == category)
        .collect()
}

/// Two-letter placeholder mark.
fn monogram(name: &str) -> String {
    name.chars().take(2).collect()
}

#[function_component(IntegrationsSection)]
pub fn integrations_section() -> Html {
    let active = use_state(Category::default);
    let (cal_open, open, close) = use_scheduler_toggle();

    html! {
        <section id="integrations" class="section-fade integrations">
            <div class="section-head">
                <p class="eyebrow">{"Compatibility"}</p>
                <h2>{"We work with the tools you already use."}</h2>
                <p class="lead">{"You keep your data & accounts. We wire them together."}</p>
                <div role="tablist" aria-label="Tool categories" class="tool-tabs">
                    { for Category::TABS.iter().map(|cat| {
                        let selected = *cat == *active;
                        let onclick = {
                            let active = active.clone();
                            let cat = *cat;
                            Callback::from(move |_: MouseEvent| active.set(cat))
                        };
                        html! {
                            <button
                                role="tab"
                                aria-selected={if selected { "true" } else { "false" }}
                                class={classes!("tool-tab", selected.then(|| "active"))}
                                {onclick}
                            >
                                {cat.label()}
                            </button>
                        }
                    }) }
                </div>
            </div>
            <div class="tool-grid" key={active.label()}>
                { for filter_tools(*active).into_iter().enumerate().map(|(i, t)| html! {
                    <div
                        class="tool"
                        title={t.name}
                        aria-label={format!("{} logo", t.name)}
                        style={format!("animation-delay: {:.2}s", i as f64 * 0.04)}
                    >
                        <span class="tool-mark">{monogram(t.name)}</span>
                        <span class="tool-name">{t.name}</span>
                    </div>
                }) }
            </div>
            <p class="tool-note">{"Don’t see your tool? We’ve probably connected it. "}<span>{"Ask us."}</span></p>
            <div class="stack-band">
                <span>{"See your stack working together in a free consult."}</span>
                <button
                    type="button"
                    onclick={open}
                    aria-haspopup="dialog"
                    aria-expanded={if cal_open { "true" } else { "false" }}
                    data-evt={names::CTA_CLICK}
                    data-place="integrations"
                >
                    {"See your stack → Book a free consult"}
                </button>
            </div>
            <SchedulerModal
                open={cal_open}
                on_close={close}
                embed={SchedulerEmbed::calendly(config::CALENDLY_EVENT_URL)}
                place="integrations"
            />
            <style>
                {r#"
                    .integrations { padding: 5rem 1.5rem; color: #fff; }
                    @media (min-width: 768px) { .integrations { padding: 5rem 4rem; } }
                    .tool-tabs { display: flex; flex-wrap: wrap; gap: 0.5rem; margin: 2rem 0 1.5rem; }
                    .tool-tab {
                        padding: 0.5rem 0.875rem;
                        border-radius: 9999px;
                        font-size: 0.875rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: transparent;
                        color: #e5e7eb;
                        cursor: pointer;
                    }
                    .tool-tab:hover { border-color: rgba(255, 255, 255, 0.2); }
                    .tool-tab.active { background: rgba(255, 255, 255, 0.1); border-color: rgba(255, 255, 255, 0.25); color: #fff; }
                    .tool-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1rem; }
                    @media (min-width: 640px) { .tool-grid { grid-template-columns: repeat(3, 1fr); } }
                    @media (min-width: 768px) { .tool-grid { grid-template-columns: repeat(4, 1fr); } }
                    @media (min-width: 1024px) { .tool-grid { grid-template-columns: repeat(6, 1fr); } }
                    .tool {
                        height: 4rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        padding: 0 0.75rem;
                        border-radius: 0.75rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.05);
                        opacity: 0;
                        animation: tool-in 0.28s ease-out forwards;
                        transition: transform 0.15s;
                    }
                    .tool:hover { transform: translateY(-4px) scale(1.01); }
                    @keyframes tool-in { from { opacity: 0; transform: translateY(10px); } to { opacity: 1; transform: none; } }
                    .tool-mark {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 1.5rem;
                        height: 1.5rem;
                        border-radius: 0.375rem;
                        font-size: 11px;
                        background: linear-gradient(135deg, rgba(6,182,212,.3), rgba(236,72,153,.3));
                    }
                    .tool-name { font-size: 0.875rem; color: rgba(243, 244, 246, 0.9); }
                    .tool-note { font-size: 0.875rem; color: #9ca3af; margin-top: 1.5rem; }
                    .tool-note span { color: #e5e7eb; }
                    .stack-band {
                        margin-top: 2rem;
                        padding: 1rem;
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.75rem;
                        align-items: center;
                        justify-content: space-between;
                        border-radius: 0.75rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: linear-gradient(90deg, rgba(6,182,212,.1), rgba(168,85,247,.1), rgba(236,72,153,.1));
                        font-size: 0.875rem;
                    }
                    .stack-band button {
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
    fn defaults_to_crm() {
        let names: Vec<_> = filter_tools(Category::default()).iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["HubSpot", "Salesforce", "Pipedrive", "Zoho CRM", "Airtable"]);
    }

    #[test]
    fn all_shows_every_tool() {
        assert_eq!(filter_tools(Category::All).len(), TOOLS.len());
    }

    #[test]
    fn every_tool_has_a_real_tab() {
        for tab in Category::TABS.iter().filter(|c| **c != Category::All) {
            assert!(!filter_tools(*tab).is_empty(), "{} is empty", tab.label());
        }
        assert!(TOOLS.iter().all(|t| t.category != Category::All));
        assert_eq!(Category::TABS.first(), Some(&Category::Crm));
        assert_eq!(Category::TABS.last(), Some(&Category::All));
    }

    #[test]
    fn monogram_takes_two_chars() {
        assert_eq!(monogram("GA4"), "GA");
        assert_eq!(monogram("X"), "X");
    }
}
