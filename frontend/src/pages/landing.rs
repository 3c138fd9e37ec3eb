use yew::prelude::*;
use yew_hooks::use_title;

use crate::config;
use crate::sections::{
    about::AboutSection, faq::FaqSection, final_cta::FinalCtaSection, hero::HeroSection,
    integrations::IntegrationsSection, process::ProcessSection, stats::StatsSection,
    testimonials::TestimonialsSection, why::WhySection,
};

#[function_component(Landing)]
pub fn landing() -> Html {
    use_title(format!("{} | CRM, Automations & Integrations that Scale", config::BRAND));

    html! {
        <main id="main">
            <HeroSection />
            <WhySection />
            <AboutSection />
            <ProcessSection />
            <StatsSection />
            <IntegrationsSection />
            <TestimonialsSection />
            <FaqSection />
            <FinalCtaSection />
        </main>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_title(format!("Page not found | {}", config::BRAND));

    html! {
        <main id="main" class="not-found">
            <h1>{"404"}</h1>
            <p class="lead">{"This page doesn’t exist. The consult button still works, though."}</p>
            <a href="/" class="not-found-home">{"Back to the homepage"}</a>
            <style>
                {r#"
                    .not-found { min-height: 60vh; padding: 8rem 1.5rem; text-align: center; color: #fff; }
                    .not-found h1 { font-size: 4rem; margin: 0; }
                    .not-found-home { color: #67e8f9; }
                "#}
            </style>
        </main>
    }
}
