use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    CalCom,
    Calendly,
}

/// Cosmetic parameters passed to the scheduling widget.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbedTheme {
    pub background: String,
    pub text: String,
    pub primary: String,
    pub layout: String,
}

impl Default for EmbedTheme {
    fn default() -> Self {
        EmbedTheme {
            background: "transparent".to_string(),
            text: config::COLOR_TEXT.to_string(),
            primary: config::COLOR_PRIMARY.to_string(),
            layout: "month_view".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SchedulerEmbed {
    pub provider: Provider,
    pub base: String,
    pub theme: EmbedTheme,
}

impl Default for SchedulerEmbed {
    fn default() -> Self {
        SchedulerEmbed::cal_com(config::CAL_COM_EVENT_URL)
    }
}

fn hex(color: &str) -> String {
    color.trim().trim_start_matches('#').to_string()
}

impl SchedulerEmbed {
    pub fn cal_com(base: &str) -> Self {
        SchedulerEmbed {
            provider: Provider::CalCom,
            base: base.to_string(),
            theme: EmbedTheme::default(),
        }
    }

    pub fn calendly(base: &str) -> Self {
        SchedulerEmbed {
            provider: Provider::Calendly,
            base: base.to_string(),
            theme: EmbedTheme {
                background: config::COLOR_BACKGROUND.to_string(),
                ..EmbedTheme::default()
            },
        }
    }

    #[cfg(test)]
    pub fn with_theme(mut self, theme: EmbedTheme) -> Self {
        self.theme = theme;
        self
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let t = &self.theme;
        match self.provider {
            Provider::CalCom => vec![
                ("embed", "true".to_string()),
                ("theme", "dark".to_string()),
                ("backgroundColor", hex(&t.background)),
                ("primaryColor", hex(&t.primary)),
                ("textColor", hex(&t.text)),
                ("layout", t.layout.clone()),
            ],
            Provider::Calendly => vec![
                ("hide_gdpr_banner", "1".to_string()),
                ("background_color", hex(&t.background)),
                ("text_color", hex(&t.text)),
                ("primary_color", hex(&t.primary)),
            ],
        }
    }

    /// The iframe `src`.
    pub fn url(&self) -> String {
        let base = self.base.trim().trim_end_matches('?');
        let sep = if base.contains('?') { '&' } else { '?' };
        let query = self
            .query()
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(&v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}{}{}", base, sep, query)
    }

    /// Plain link to the booking page, for when the embed never loads.
    pub fn direct_url(&self) -> &str {
        self.base.trim().trim_end_matches('?')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cal_com_dark_month_view() {
        let url = SchedulerEmbed::cal_com("https://cal.com/optimion/30min").url();
        assert_eq!(
            url,
            "https://cal.com/optimion/30min?embed=true&theme=dark&backgroundColor=transparent&primaryColor=22d3ee&textColor=e5e7eb&layout=month_view"
        );
    }

    #[test]
    fn calendly_strips_hashes_and_trailing_question_mark() {
        let url = SchedulerEmbed::calendly("https://calendly.com/ivan-optimion/30min?").url();
        assert_eq!(
            url,
            "https://calendly.com/ivan-optimion/30min?hide_gdpr_banner=1&background_color=0b0b0d&text_color=e5e7eb&primary_color=22d3ee"
        );
    }

    #[test]
    fn appends_to_existing_query() {
        let url = SchedulerEmbed::calendly("https://calendly.com/x/30min?month=2025-01").url();
        assert!(url.starts_with("https://calendly.com/x/30min?month=2025-01&hide_gdpr_banner=1&"));
    }

    #[test]
    fn theme_values_are_encoded() {
        let theme = EmbedTheme {
            layout: "week view".to_string(),
            ..EmbedTheme::default()
        };
        let url = SchedulerEmbed::cal_com("https://cal.com/a").with_theme(theme).url();
        assert!(url.ends_with("layout=week%20view"));
    }

    #[test]
    fn direct_link_has_no_embed_params() {
        let embed = SchedulerEmbed::default();
        assert_eq!(embed.direct_url(), "https://cal.com/optimion/30min");
    }
}
