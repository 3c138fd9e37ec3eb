use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::scheduler_modal::{use_scheduler_toggle, SchedulerModal};
use crate::config;
use crate::modal::SchedulerEmbed;
use crate::Route;

pub const NAV: [(&str, &str); 8] = [
    ("Why Optimion", "#why-optimion"),
    ("About", "#about"),
    ("Process", "#process"),
    ("Stats", "#stats"),
    ("Integrations", "#integrations"),
    ("Testimonials", "#testimonials"),
    ("FAQ", "#faq"),
    ("Get Started", "#get-started"),
];

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    /// Hide the section nav (legal pages have no anchors to jump to).
    #[prop_or(true)]
    pub show_nav: bool,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let (cal_open, open, close) = use_scheduler_toggle();

    html! {
        <>
            <a href="#main" class="skip-link">{"Skip to content"}</a>
            <header class="site-header">
                <div class="site-header-inner">
                    <Link<Route> to={Route::Home} classes="brand">
                        <span class="gradient-text">{config::BRAND}</span>
                    </Link<Route>>
                    if props.show_nav {
                        <nav class="site-nav" aria-label="Primary">
                            { for NAV.iter().map(|(label, href)| html! {
                                <a href={*href}>{ *label }</a>
                            }) }
                        </nav>
                    }
                    <button
                        type="button"
                        class="consult-button"
                        onclick={open}
                        aria-haspopup="dialog"
                        aria-expanded={if cal_open { "true" } else { "false" }}
                    >
                        {"📅 Free Consult"}
                    </button>
                </div>
            </header>
            <SchedulerModal
                open={cal_open}
                on_close={close}
                embed={SchedulerEmbed::calendly(config::CALENDLY_EVENT_URL)}
                place="header"
                title="30 Minute Meeting"
            />
            <style>
                {r#"
                    .skip-link {
                        position: absolute;
                        left: -9999px;
                    }
                    .skip-link:focus {
                        left: 0.5rem;
                        top: 0.5rem;
                        z-index: 100;
                        background: #000;
                        color: #fff;
                        padding: 0.5rem 0.75rem;
                        border-radius: 0.25rem;
                    }
                    .site-header {
                        position: sticky;
                        top: 0;
                        z-index: 50;
                        background: rgba(0, 0, 0, 0.4);
                        backdrop-filter: blur(12px);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .site-header-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        height: 3.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .brand {
                        font-weight: 600;
                        letter-spacing: -0.01em;
                        text-decoration: none;
                    }
                    .site-nav {
                        display: none;
                        gap: 1.5rem;
                        font-size: 0.875rem;
                    }
                    .site-nav a {
                        color: #d1d5db;
                        text-decoration: none;
                    }
                    .site-nav a:hover { color: #fff; }
                    @media (min-width: 768px) {
                        .site-nav { display: flex; }
                    }
                    .consult-button {
                        padding: 0.5rem 0.875rem;
                        border: none;
                        border-radius: 0.375rem;
                        background: linear-gradient(90deg, #06b6d4, #ec4899);
                        color: #fff;
                        font-size: 0.875rem;
                        font-weight: 500;
                        cursor: pointer;
                    }
                    .consult-button:hover { filter: brightness(1.1); }
                "#}
            </style>
        </>
    }
}
