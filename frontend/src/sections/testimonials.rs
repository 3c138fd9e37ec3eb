use yew::prelude::*;

use crate::analytics::names;
use crate::components::scheduler_modal::{use_scheduler_toggle, SchedulerModal};

struct Testimonial {
    quote: &'static str,
    name: &'static str,
    role: &'static str,
    industry: &'static str,
}

const TESTIMONIALS: [Testimonial; 6] = [
    Testimonial {
        quote: "Optimion rebuilt our CRM and automations in weeks. Our team finally trusts the data, and bookings went up immediately.",
        name: "Domini S.",
        role: "CEO",
        industry: "Professional Services",
    },
    Testimonial {
        quote: "The integrations just work. Dashboards show exactly what we need and our follow-ups run 24/7 without babysitting.",
        name: "Ryan M.",
        role: "Founder",
        industry: "E-Commerce",
    },
    Testimonial {
        quote: "We replaced spreadsheets with reliable automations. Technicians get the right jobs and customers get instant updates.",
        name: "Kayla P.",
        role: "CEO",
        industry: "Pest Control",
    },
    Testimonial {
        quote: "From leads to signed contracts, every handoff is automated. It’s cut our admin time by half.",
        name: "Miguel A.",
        role: "Founder",
        industry: "Roofing",
    },
    Testimonial {
        quote: "Pipeline, showings, and follow-ups live in one place now. Our agents move faster and close more.",
        name: "Priya N.",
        role: "CEO",
        industry: "Real Estate",
    },
    Testimonial {
        quote: "Production runs are scheduled automatically and the shop floor stays in sync. Huge step up for ops.",
        name: "Owen K.",
        role: "Founder",
        industry: "Manufacturing",
    },
];

#[function_component(TestimonialsSection)]
pub fn testimonials_section() -> Html {
    let (cal_open, open, close) = use_scheduler_toggle();

    html! {
        <section id="testimonials" class="section-fade testimonials">
            <div class="section-head">
                <p class="eyebrow">{"Trusted Across Industries"}</p>
                <h2 class="gradient-text">{"Built for the way your business runs."}</h2>
                <p class="lead">
                    {"From small businesses to enterprises, spanning Healthcare, Hospitality, SaaS, Financial Services, Real Estate, Home Services, Roofing, E-Commerce, Manufacturing, and more, we connect the stack, automate the work, and surface the metrics that matter."}
                </p>
            </div>
            <div class="testimonial-grid">
                { for TESTIMONIALS.iter().enumerate().map(|(i, t)| html! {
                    <figure class="testimonial" style={format!("animation-delay: {:.2}s", i as f64 * 0.06)}>
                        <div class="testimonial-top">
                            <span class="stars" aria-label="5 star rating">{"★★★★★"}</span>
                            <span class="industry">{t.industry}</span>
                        </div>
                        <blockquote>{format!("“{}”", t.quote)}</blockquote>
                        <figcaption><strong>{t.name}</strong>{format!(", {}", t.role)}</figcaption>
                    </figure>
                }) }
            </div>
            <button
                type="button"
                class="testimonials-cta"
                onclick={open}
                aria-haspopup="dialog"
                aria-expanded={if cal_open { "true" } else { "false" }}
                data-evt={names::CTA_CLICK}
                data-place="testimonials"
            >
                {"Book a Free Consultation"}
            </button>
            <SchedulerModal open={cal_open} on_close={close} place="testimonials" />
            <style>
                {r#"
                    .testimonials { padding: 6rem 1.5rem; color: #fff; }
                    @media (min-width: 768px) { .testimonials { padding: 6rem 4rem; } }
                    .testimonial-grid { display: grid; gap: 1.5rem; margin-top: 2.5rem; }
                    @media (min-width: 640px) { .testimonial-grid { grid-template-columns: repeat(2, 1fr); } }
                    @media (min-width: 1024px) { .testimonial-grid { grid-template-columns: repeat(3, 1fr); } }
                    .testimonial {
                        margin: 0;
                        padding: 1.25rem;
                        border-radius: 0.75rem;
                        border: 1px solid #262626;
                        background: rgba(0, 0, 0, 0.25);
                        opacity: 0;
                        animation: testimonial-in 0.45s ease-out forwards;
                        transition: transform 0.18s ease-out, border-color 0.18s ease-out, box-shadow 0.18s ease-out;
                    }
                    .testimonial:hover {
                        transform: translateY(-6px) scale(1.01);
                        border-color: #52525b;
                        box-shadow: 0 10px 20px rgba(0, 0, 0, 0.35);
                    }
                    @keyframes testimonial-in {
                        from { opacity: 0; transform: translateY(12px); filter: blur(6px); }
                        to { opacity: 1; transform: none; filter: none; }
                    }
                    .testimonial-top { display: flex; justify-content: space-between; align-items: center; margin-bottom: 0.75rem; }
                    .stars { color: #facc15; letter-spacing: 0.1em; }
                    .industry {
                        font-size: 11px;
                        padding: 0.25rem 0.5rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        color: #d1d5db;
                    }
                    .testimonial blockquote { margin: 0; font-size: 0.875rem; color: #e5e7eb; line-height: 1.6; }
                    .testimonial figcaption { margin-top: 1rem; font-size: 0.75rem; color: #9ca3af; }
                    .testimonial figcaption strong { color: #e5e7eb; font-weight: 500; }
                    .testimonials-cta {
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
