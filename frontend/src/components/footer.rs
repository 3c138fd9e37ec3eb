use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="site-footer-inner">
                <div>
                    <div class="footer-brand">{config::BRAND}</div>
                    <div class="footer-tagline">{"CRM • Automation • Integration"}</div>
                </div>
                <div class="footer-links">
                    <Link<Route> to={Route::Privacy}>{"Privacy"}</Link<Route>>
                    <Link<Route> to={Route::Terms}>{"Terms"}</Link<Route>>
                    <a href="/#faq">{"FAQ"}</a>
                </div>
                <div class="footer-copy">
                    {format!("© {} {}. All rights reserved.", year, config::BRAND)}
                </div>
            </div>
            <style>
                {r#"
                    .site-footer {
                        margin-top: 4rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(0, 0, 0, 0.4);
                    }
                    .site-footer-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 2rem 1.5rem;
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        justify-content: space-between;
                        font-size: 0.875rem;
                        color: #d1d5db;
                    }
                    .footer-brand { font-weight: 600; color: #fff; }
                    .footer-tagline { color: #9ca3af; margin-top: 0.25rem; }
                    .footer-links { display: flex; gap: 1rem; }
                    .footer-links a { color: #9ca3af; text-decoration: none; }
                    .footer-links a:hover { color: #fff; }
                    .footer-copy { color: #6b7280; }
                "#}
            </style>
        </footer>
    }
}
