use yew::prelude::*;
use yew_hooks::use_title;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

const LAST_UPDATED: &str = "September 2025";

const TERMS: [(&str, &str); 11] = [
    (
        "Use of the Site",
        "You may use the site only for lawful purposes. We may modify or discontinue any part of the site at any time without notice.",
    ),
    (
        "Proposals, SOWs & Services",
        "Services are described in a proposal or statement of work (SOW). If there is a conflict between these Terms and a signed SOW, the SOW controls for that project.",
    ),
    (
        "Fees & Payment",
        "Fees, milestones, and payment schedules are set out in the proposal/SOW. Invoices are due upon receipt unless otherwise stated. Late amounts may accrue interest as permitted by law.",
    ),
    (
        "Client Responsibilities",
        "You agree to provide timely access, information, and approvals. Delays may affect timelines and delivery.",
    ),
    (
        "Confidentiality",
        "Each party may receive confidential information from the other. The receiving party will protect it and use it only to perform under these Terms or an SOW.",
    ),
    (
        "Intellectual Property",
        "Unless otherwise stated in an SOW, upon full payment you own the specific work product delivered for your project. Our pre-existing tools, know-how, and libraries remain ours; we may reuse generalized learnings that don’t reveal your confidential information.",
    ),
    (
        "Warranties & Disclaimers",
        "We provide the site and services “as is.” To the maximum extent permitted by law, we disclaim all warranties, express or implied, including merchantability, fitness for a particular purpose, and non-infringement.",
    ),
    (
        "Limitation of Liability",
        "To the fullest extent permitted by law, Optimion will not be liable for indirect, incidental, consequential, special, or exemplary damages. Our total liability for any claim is limited to the amounts you paid for the applicable services in the 3 months before the claim.",
    ),
    (
        "Independent Contractors",
        "The parties are independent contractors. These Terms do not create a partnership, joint venture, or employment relationship.",
    ),
    (
        "Governing Law",
        "These Terms are governed by the laws of your and our principal place of business unless otherwise stated in an SOW. Venue and jurisdiction will be in the courts of that location.",
    ),
    (
        "Changes to Terms",
        "We may update these Terms from time to time. Material changes will be posted on this page with an updated date.",
    ),
];

fn mailto() -> Html {
    html! {
        <a href={format!("mailto:{}", config::SUPPORT_EMAIL)}>{config::SUPPORT_EMAIL}</a>
    }
}

fn legal_links() -> Html {
    html! {
        <div class="legal-links">
            <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
            {" | "}
            <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
        </div>
    }
}

const LEGAL_STYLE: &str = r#"
    .legal-content { max-width: 56rem; margin: 0 auto; padding: 4rem 1.5rem; color: #fff; }
    @media (min-width: 768px) { .legal-content { padding: 4rem 4rem; } }
    .legal-content h1 { font-size: 2.25rem; font-weight: 600; margin: 0; }
    .legal-content .updated { font-size: 0.875rem; color: #9ca3af; margin-top: 0.25rem; }
    .legal-content h2 { font-size: 1.125rem; font-weight: 600; margin: 2.5rem 0 0.75rem; }
    .legal-content ol h2 { margin-top: 0; }
    .legal-content ol { padding-left: 1.5rem; display: grid; gap: 1.5rem; margin-top: 2rem; }
    .legal-content p, .legal-content li { color: #d1d5db; line-height: 1.6; }
    .legal-content ul { padding-left: 1.5rem; display: grid; gap: 0.5rem; }
    .legal-content strong { color: #fff; font-weight: 500; }
    .legal-content a { color: inherit; text-decoration: underline; }
    .legal-content a:hover { color: #fff; }
    .legal-links { margin-top: 3rem; font-size: 0.875rem; color: #9ca3af; }
"#;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    use_title(format!("Privacy Policy | {}", config::BRAND));

    html! {
        <main id="main" class="legal-content privacy-policy">
            <h1>{"Privacy Policy"}</h1>
            <p class="updated">{format!("Last updated: {}", LAST_UPDATED)}</p>
            <p>
                {"This Privacy Policy explains how "}<strong>{config::BRAND}</strong>
                {" (“we,” “us,” “our”) collects, uses, and protects information when you visit our website or work with us."}
            </p>

            <h2>{"Information We Collect"}</h2>
            <ul>
                <li><strong>{"Contact information"}</strong>{" you provide (name, email, phone) when requesting a consultation or contacting support."}</li>
                <li><strong>{"Project details"}</strong>{" you share during discovery or onboarding (goals, tech stack, requirements)."}</li>
                <li><strong>{"Usage data"}</strong>{" such as pages viewed and referrer, used to improve the site and advertising performance."}</li>
            </ul>

            <h2>{"How We Use Information"}</h2>
            <ul>
                <li>{"Respond to inquiries and schedule consultations."}</li>
                <li>{"Deliver services under a proposal, SOW, or contract."}</li>
                <li>{"Improve our website, ads, and communications."}</li>
                <li>{"Comply with legal, security, and fraud-prevention requirements."}</li>
            </ul>

            <h2>{"Analytics & Tools"}</h2>
            <p>{"We may use privacy-respecting analytics and advertising tools (e.g., Google products) to understand site performance. We don’t sell personal information."}</p>

            <h2>{"Scheduling"}</h2>
            <p>{"When you book a meeting through our scheduling provider (Cal.com or Calendly), your submission is processed by that provider per their terms and privacy policy. We use the data only to manage your appointment."}</p>

            <h2>{"Data Sharing"}</h2>
            <ul>
                <li>{"We don’t sell or rent your data."}</li>
                <li>{"We may share limited information with vendors that help us operate the site or deliver services (e.g., hosting, scheduling, analytics), bound by confidentiality and data-processing terms."}</li>
            </ul>

            <h2>{"Data Retention"}</h2>
            <p>{"We retain information only as long as needed to provide services, meet legal obligations, or resolve disputes. You can ask us to delete your data where applicable."}</p>

            <h2>{"Your Rights"}</h2>
            <ul>
                <li>{"Request access to, correction of, or deletion of your personal information."}</li>
                <li>{"Object to or restrict certain processing, where permitted by law."}</li>
                <li>{"Contact us to exercise your rights or ask questions."}</li>
            </ul>

            <h2>{"Children’s Privacy"}</h2>
            <p>{"Our services are not directed to children under 13. We do not knowingly collect personal information from children."}</p>

            <h2>{"Contact"}</h2>
            <p>{"Email: "}{mailto()}</p>
            {legal_links()}
            <style>{LEGAL_STYLE}</style>
        </main>
    }
}

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    use_title(format!("Terms of Service | {}", config::BRAND));

    html! {
        <main id="main" class="legal-content terms-of-service">
            <h1>{"Terms of Service"}</h1>
            <p class="updated">{format!("Last updated: {}", LAST_UPDATED)}</p>
            <p>
                {"These Terms of Service (“Terms”) govern your access to and use of the website and any services provided by "}
                <strong>{config::BRAND}</strong>
                {" (“we,” “us,” “our”). By using the site or engaging our services, you agree to these Terms."}
            </p>
            <ol>
                { for TERMS.iter().map(|(title, body)| html! {
                    <li>
                        <h2>{*title}</h2>
                        <p>{*body}</p>
                    </li>
                }) }
                <li>
                    <h2>{"Contact"}</h2>
                    <p>{"Questions? Email "}{mailto()}{"."}</p>
                </li>
            </ol>
            {legal_links()}
            <style>{LEGAL_STYLE}</style>
        </main>
    }
}
