// Page content. Text lives in the dictionary; this module only holds keys
// and the values that are not translated (numbers, assets, colours).

use crate::i18n::I18n;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Services,
    Portfolio,
    Testimonials,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Services,
        Section::Portfolio,
        Section::Testimonials,
        Section::Contact,
    ];

    /// Anchor id used for in-page navigation (`#services`, ...).
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Services => "services",
            Section::Portfolio => "portfolio",
            Section::Testimonials => "testimonials",
            Section::Contact => "contact",
        }
    }

    pub fn nav_key(self) -> &'static str {
        match self {
            Section::Home => "nav.home",
            Section::Services => "nav.services",
            Section::Portfolio => "nav.portfolio",
            Section::Testimonials => "nav.testimonials",
            Section::Contact => "nav.contact",
        }
    }

    pub fn label(self, i18n: &I18n) -> String {
        i18n.t(self.nav_key())
    }
}

pub const SERVICE_COUNT: usize = 9;

#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub index: usize,
    pub icon: &'static str,
}

impl Service {
    pub fn title_key(&self) -> String {
        format!("services.items.{}.title", self.index)
    }

    pub fn description_key(&self) -> String {
        format!("services.items.{}.description", self.index)
    }
}

const SERVICE_ICONS: [&str; SERVICE_COUNT] = [
    "/icons/seo.svg",
    "/icons/sem.svg",
    "/icons/social.svg",
    "/icons/content.svg",
    "/icons/email.svg",
    "/icons/analytics.svg",
    "/icons/video.svg",
    "/icons/mobile.svg",
    "/icons/influencer.svg",
];

pub fn services() -> Vec<Service> {
    SERVICE_ICONS
        .iter()
        .enumerate()
        .map(|(index, &icon)| Service { index, icon })
        .collect()
}

/// A portfolio case study.
#[derive(Debug, Clone, Copy)]
pub struct CaseStudy {
    pub index: usize,
    pub icon: &'static str,
    pub industry_key: &'static str,
    /// Accent gradient as (from, to) hex colours.
    pub accent: (&'static str, &'static str),
}

impl CaseStudy {
    pub const RESULT_COUNT: usize = 3;

    pub fn key(&self, field: &str) -> String {
        format!("portfolio.items.{}.{}", self.index, field)
    }

    pub fn result_keys(&self) -> Vec<String> {
        (0..Self::RESULT_COUNT)
            .map(|i| format!("portfolio.items.{}.results.{}", self.index, i))
            .collect()
    }
}

pub fn case_studies() -> Vec<CaseStudy> {
    vec![
        CaseStudy { index: 0, icon: "/icons/ecommerce.svg", industry_key: "portfolio.ecommerce", accent: ("#ec4899", "#e11d48") },
        CaseStudy { index: 1, icon: "/icons/tech-startup.svg", industry_key: "portfolio.tech", accent: ("#3b82f6", "#4f46e5") },
        CaseStudy { index: 2, icon: "/icons/restaurant.svg", industry_key: "portfolio.restaurant", accent: ("#f97316", "#dc2626") },
        CaseStudy { index: 3, icon: "/icons/healthcare.svg", industry_key: "portfolio.healthcare", accent: ("#22c55e", "#059669") },
        CaseStudy { index: 4, icon: "/icons/financial.svg", industry_key: "portfolio.financial", accent: ("#a855f7", "#7c3aed") },
        CaseStudy { index: 5, icon: "/icons/education.svg", industry_key: "portfolio.education", accent: ("#06b6d4", "#2563eb") },
    ]
}

#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub index: usize,
    pub rating: u8,
}

impl Testimonial {
    pub fn key(&self, field: &str) -> String {
        format!("testimonials.items.{}.{}", self.index, field)
    }

    pub fn stars(&self) -> String {
        "★".repeat(self.rating as usize)
    }
}

pub fn testimonials() -> Vec<Testimonial> {
    (0..6).map(|index| Testimonial { index, rating: 5 }).collect()
}

/// Headline figure shown under the testimonials.
#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: &'static str,
    pub label_key: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { value: "500+", label_key: "testimonials.stats.customers" },
    Stat { value: "98%", label_key: "testimonials.stats.success_rate" },
    Stat { value: "24/7", label_key: "testimonials.stats.support" },
    Stat { value: "5★", label_key: "testimonials.stats.rating" },
];

/// Prefixes of the `cta.benefits.<id>.{title,description}` keys.
pub const BENEFITS: [&str; 3] = ["growth", "guarantee", "support247"];

/// Options of the contact form's service select (`cta.services.<id>`).
pub const SERVICE_OPTIONS: [&str; 6] = [
    "seo",
    "social_media",
    "paid_ads",
    "content",
    "email",
    "consultation",
];

pub fn service_option_key(id: &str) -> String {
    format!("cta.services.{}", id)
}

/// Footer quick links: (label key, href).
pub const QUICK_LINKS: [(&str, &str); 6] = [
    ("footer.quicklinks.home", "#home"),
    ("footer.quicklinks.services", "#services"),
    ("footer.quicklinks.portfolio", "#portfolio"),
    ("footer.quicklinks.about", "#about"),
    ("footer.quicklinks.blog", "#blog"),
    ("footer.quicklinks.contact", "#contact"),
];

pub const BRAND: &str = "Digital Agency";
pub const PHONE: &str = "+84 123 456 789";
pub const EMAIL: &str = "hello@digitalagency.com";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Dictionary, Locale};

    #[test]
    fn every_vietnamese_content_key_exists() {
        let dictionary = Dictionary::builtin();
        let mut keys: Vec<String> = Section::ALL.iter().map(|s| s.nav_key().to_string()).collect();
        for service in services() {
            keys.push(service.title_key());
            keys.push(service.description_key());
        }
        for study in case_studies() {
            for field in ["title", "category", "description"] {
                keys.push(study.key(field));
            }
            keys.extend(study.result_keys());
            keys.push(study.industry_key.to_string());
        }
        for testimonial in testimonials() {
            for field in ["name", "position", "company", "content", "results"] {
                keys.push(testimonial.key(field));
            }
        }
        keys.extend(STATS.iter().map(|s| s.label_key.to_string()));
        keys.extend(SERVICE_OPTIONS.iter().map(|id| service_option_key(id)));
        keys.extend(QUICK_LINKS.iter().map(|(k, _)| k.to_string()));

        for key in &keys {
            assert!(dictionary.contains(Locale::Vi, key), "missing vi key {key}");
        }
    }

    #[test]
    fn anchors_match_navigation() {
        let anchors: Vec<&str> = Section::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors, ["home", "services", "portfolio", "testimonials", "contact"]);
        assert_eq!(Section::Contact.label(&I18n::new("en")), "Contact");
    }

    #[test]
    fn english_case_studies_fall_back_to_keys() {
        let i18n = I18n::new("en");
        let study = case_studies()[2];
        assert_eq!(i18n.t(&study.key("title")), "portfolio.items.2.title");
        assert_eq!(i18n.t(study.industry_key), "Restaurant");
        assert_eq!(testimonials()[0].stars(), "★★★★★");
    }
}
