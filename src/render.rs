use crate::contact::Field;
use crate::content::{self, Section, BENEFITS, QUICK_LINKS, SERVICE_OPTIONS, STATS};
use crate::hero::{HeroOptions, Visualization};
use crate::i18n::{I18n, Locale};
use anyhow::{Context, Result};
use handlebars::Handlebars;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

const HERO_WIDTH: f64 = 640.0;
const HERO_HEIGHT: f64 = 480.0;

#[derive(Serialize)]
struct PageContext<'a> {
    lang: &'static str,
    brand: &'static str,
    title: String,
    description: String,
    content_hash: String,
    languages: &'a [LanguageLink],
    body: String,
}

#[derive(Serialize)]
struct BodyContext {
    brand: &'static str,
    nav: Vec<NavItem>,
    languages: Vec<LanguageLink>,
    hero: HeroBlock,
    services: ServicesBlock,
    portfolio: PortfolioBlock,
    testimonials: TestimonialsBlock,
    contact: ContactBlock,
    footer: FooterBlock,
}

#[derive(Serialize)]
struct NavItem {
    anchor: &'static str,
    label: String,
}

#[derive(Serialize)]
struct LanguageLink {
    tag: &'static str,
    name: &'static str,
    active: bool,
}

#[derive(Serialize)]
struct HeroBlock {
    title_lines: Vec<String>,
    subtitle: String,
    cta: String,
    learn_more: String,
    svg: Option<String>,
}

#[derive(Serialize)]
struct Card {
    icon: &'static str,
    title: String,
    description: String,
}

#[derive(Serialize)]
struct ServicesBlock {
    title: String,
    subtitle: String,
    items: Vec<Card>,
    consultation: String,
}

#[derive(Serialize)]
struct CaseStudyCard {
    icon: &'static str,
    accent_from: &'static str,
    accent_to: &'static str,
    industry: String,
    title: String,
    category: String,
    description: String,
    results: Vec<String>,
    view_details: String,
}

#[derive(Serialize)]
struct PortfolioBlock {
    title: String,
    subtitle: String,
    scroll_hint: String,
    items: Vec<CaseStudyCard>,
}

#[derive(Serialize)]
struct Quote {
    rating: u8,
    stars: String,
    content: String,
    name: String,
    position: String,
    company: String,
    results: String,
}

#[derive(Serialize)]
struct StatItem {
    value: &'static str,
    label: String,
}

#[derive(Serialize)]
struct TestimonialsBlock {
    title: String,
    subtitle: String,
    items: Vec<Quote>,
    stats: Vec<StatItem>,
}

#[derive(Clone, Serialize)]
struct OptionItem {
    value: &'static str,
    label: String,
}

#[derive(Serialize)]
struct FormField {
    name: &'static str,
    label: String,
    placeholder: String,
    kind: &'static str,
    required: bool,
    multiline: bool,
    options: Vec<OptionItem>,
}

#[derive(Serialize)]
struct Benefit {
    title: String,
    description: String,
}

#[derive(Serialize)]
struct ContactBlock {
    title: String,
    subtitle: String,
    heading: String,
    description: String,
    fields: Vec<FormField>,
    submitting: String,
    success: String,
    submit: String,
    why_title: String,
    why_subtitle: String,
    benefits: Vec<Benefit>,
    contact_title: String,
    phone: &'static str,
    phone_href: String,
    email: &'static str,
}

#[derive(Serialize)]
struct LinkItem {
    href: &'static str,
    label: String,
}

#[derive(Serialize)]
struct FooterBlock {
    description: String,
    quick_links_title: String,
    quick_links: Vec<LinkItem>,
    services_title: String,
    services: Vec<String>,
    contact_info: String,
    newsletter_title: String,
    newsletter_placeholder: String,
    copyright: String,
}

#[derive(Serialize)]
struct HeroSvg {
    width: f64,
    height: f64,
    particle_count: usize,
    edge_count: usize,
    particles: Vec<Dot>,
    segments: Vec<Segment>,
    nodes: Vec<NodeDot>,
}

#[derive(Serialize)]
struct Dot {
    x: f64,
    y: f64,
    r: f64,
}

#[derive(Serialize)]
struct NodeDot {
    x: f64,
    y: f64,
    r: f64,
    fill: &'static str,
}

#[derive(Serialize)]
struct Segment {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    opacity: f64,
}

fn round(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Renders the single-page site with handlebars, one locale at a time.
pub struct SiteRenderer {
    handlebars: Handlebars<'static>,
    hero: HeroOptions,
}

impl SiteRenderer {
    pub fn new(hero: HeroOptions) -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.register_template_string("page", include_str!("templates/page.hbs"))?;
        handlebars.register_template_string("body", include_str!("templates/body.hbs"))?;
        handlebars.register_template_string("hero", include_str!("templates/hero.hbs"))?;
        Ok(Self { handlebars, hero })
    }

    /// Full HTML document for the store's active locale.
    pub fn render(&self, i18n: &I18n) -> Result<String> {
        let body_context = self.body_context(i18n)?;
        let body = self.handlebars.render("body", &body_context).context("rendering page body")?;
        let content_hash = hex::encode(Sha256::digest(body.as_bytes()));

        let page = PageContext {
            lang: i18n.locale().tag(),
            brand: content::BRAND,
            title: i18n.t("services.title"),
            description: i18n.t("hero.subtitle"),
            content_hash,
            languages: &body_context.languages,
            body,
        };
        Ok(self.handlebars.render("page", &page)?)
    }

    fn body_context(&self, i18n: &I18n) -> Result<BodyContext> {
        let t = |key: &str| i18n.t(key);
        let current = i18n.locale();

        let nav = Section::ALL
            .into_iter()
            .map(|section| NavItem { anchor: section.anchor(), label: section.label(i18n) })
            .collect();
        let languages = Locale::ALL
            .into_iter()
            .map(|locale| LanguageLink { tag: locale.tag(), name: locale.native_name(), active: locale == current })
            .collect();

        let svg = match Visualization::mount(HERO_WIDTH, HERO_HEIGHT, &self.hero) {
            Some(vis) => Some(self.hero_svg(&vis)?),
            None => {
                tracing::warn!("hero visualization unavailable, leaving container empty");
                None
            }
        };
        let hero = HeroBlock {
            title_lines: t("hero.title").lines().map(str::to_string).collect(),
            subtitle: t("hero.subtitle"),
            cta: t("hero.cta"),
            learn_more: t("hero.learn_more"),
            svg,
        };

        let services = ServicesBlock {
            title: t("services.title"),
            subtitle: t("services.subtitle"),
            items: content::services()
                .iter()
                .map(|s| Card { icon: s.icon, title: t(&s.title_key()), description: t(&s.description_key()) })
                .collect(),
            consultation: t("services.consultation_button"),
        };

        let portfolio = PortfolioBlock {
            title: t("portfolio.title"),
            subtitle: t("portfolio.subtitle"),
            scroll_hint: t("portfolio.scroll_hint"),
            items: content::case_studies()
                .iter()
                .map(|study| CaseStudyCard {
                    icon: study.icon,
                    accent_from: study.accent.0,
                    accent_to: study.accent.1,
                    industry: t(study.industry_key),
                    title: t(&study.key("title")),
                    category: t(&study.key("category")),
                    description: t(&study.key("description")),
                    results: study.result_keys().iter().map(|k| t(k)).collect(),
                    view_details: t("portfolio.view_details"),
                })
                .collect(),
        };

        let testimonials = TestimonialsBlock {
            title: t("testimonials.title"),
            subtitle: t("testimonials.subtitle"),
            items: content::testimonials()
                .iter()
                .map(|item| Quote {
                    rating: item.rating,
                    stars: item.stars(),
                    content: t(&item.key("content")),
                    name: t(&item.key("name")),
                    position: t(&item.key("position")),
                    company: t(&item.key("company")),
                    results: t(&item.key("results")),
                })
                .collect(),
            stats: STATS.iter().map(|s| StatItem { value: s.value, label: t(s.label_key) }).collect(),
        };

        let service_options: Vec<OptionItem> = SERVICE_OPTIONS
            .iter()
            .map(|&id| OptionItem { value: id, label: t(&content::service_option_key(id)) })
            .collect();
        let fields = Field::ALL
            .into_iter()
            .map(|field| FormField {
                name: field.name(),
                label: t(&field.label_key()),
                placeholder: t(&field.placeholder_key()),
                kind: match field {
                    Field::Email => "email",
                    Field::Phone => "tel",
                    _ => "text",
                },
                required: matches!(field, Field::Name | Field::Email),
                multiline: field == Field::Message,
                options: if field == Field::Service { service_options.clone() } else { Vec::new() },
            })
            .collect();

        let contact = ContactBlock {
            title: t("cta.title"),
            subtitle: t("cta.subtitle"),
            heading: t("cta.form.contact_now"),
            description: t("cta.form.contact_description"),
            fields,
            submitting: t("cta.form.submitting_text"),
            success: t("cta.form.success_message"),
            submit: t("cta.form.get_consultation"),
            why_title: t("cta.why_choose.title"),
            why_subtitle: t("cta.why_choose.subtitle"),
            benefits: BENEFITS
                .iter()
                .map(|id| Benefit {
                    title: t(&format!("cta.benefits.{}.title", id)),
                    description: t(&format!("cta.benefits.{}.description", id)),
                })
                .collect(),
            contact_title: t("cta.contact.title"),
            phone: content::PHONE,
            phone_href: content::PHONE.replace(' ', ""),
            email: content::EMAIL,
        };

        let footer = FooterBlock {
            description: t("footer.description"),
            quick_links_title: t("footer.quick_links"),
            quick_links: QUICK_LINKS.iter().map(|&(key, href)| LinkItem { href, label: t(key) }).collect(),
            services_title: t("footer.services_title"),
            services: service_options.into_iter().map(|o| o.label).collect(),
            contact_info: t("footer.contact_info"),
            newsletter_title: t("footer.newsletter.title"),
            newsletter_placeholder: t("footer.newsletter.placeholder"),
            copyright: t("footer.copyright"),
        };

        Ok(BodyContext {
            brand: content::BRAND,
            nav,
            languages,
            hero,
            services,
            portfolio,
            testimonials,
            contact,
            footer,
        })
    }

    /// First frame of the hero scene as inline SVG.
    fn hero_svg(&self, vis: &Visualization) -> Result<String> {
        let Some(scene) = vis.scene() else {
            return Ok(String::new());
        };
        let (width, height) = vis.size();
        let aspect = vis.aspect();
        let to_px = |x: f64, y: f64| (round((x + 1.0) * 0.5 * width, 1), round((1.0 - y) * 0.5 * height, 1));

        let particles = scene
            .particle_positions()
            .into_iter()
            .filter_map(|p| scene.project(p, aspect))
            .filter(|p| p.x.abs() <= 1.0 && p.y.abs() <= 1.0)
            .map(|p| {
                let (x, y) = to_px(p.x, p.y);
                Dot { x, y, r: round((8.0 / p.depth).clamp(0.5, 3.0), 2) }
            })
            .collect();

        let segments = scene
            .edge_segments()
            .into_iter()
            .filter_map(|(a, b, opacity)| {
                let (x1, y1) = {
                    let p = scene.project(a, aspect)?;
                    to_px(p.x, p.y)
                };
                let (x2, y2) = {
                    let p = scene.project(b, aspect)?;
                    to_px(p.x, p.y)
                };
                Some(Segment { x1, y1, x2, y2, opacity: round(opacity, 2) })
            })
            .collect();

        let nodes = scene
            .nodes()
            .iter()
            .zip(scene.node_positions())
            .enumerate()
            .filter_map(|(i, (node, p))| {
                let p = scene.project(p, aspect)?;
                let (x, y) = to_px(p.x, p.y);
                let base = if node.main { 0.15 } else { 0.1 };
                Some(NodeDot {
                    x,
                    y,
                    r: round(base * scene.node_scale(i) * height / p.depth, 2),
                    fill: if node.main { "#67e8f9" } else { "#7dd3fc" },
                })
            })
            .collect();

        let context = HeroSvg {
            width,
            height,
            particle_count: scene.particle_count(),
            edge_count: scene.edges().len(),
            particles,
            segments,
            nodes,
        };
        Ok(self.handlebars.render("hero", &context)?)
    }
}

/// Write `<out_dir>/<tag>/index.html` for each requested locale.
pub fn write_site(i18n: &I18n, locales: &[Locale], out_dir: &Path, hero: &HeroOptions) -> Result<Vec<PathBuf>> {
    let renderer = SiteRenderer::new(*hero)?;
    let mut written = Vec::with_capacity(locales.len());
    let mut page_i18n = i18n.clone();
    for &locale in locales {
        page_i18n.set_locale(locale);
        let dir = out_dir.join(locale.tag());
        fs::create_dir_all(&dir).with_context(|| format!("{}: {}", i18n.t("cli.error_create_out_dir"), dir.display()))?;

        let path = dir.join("index.html");
        let html = renderer.render(&page_i18n)?;
        fs::write(&path, html).with_context(|| format!("{}: {}", i18n.t("cli.error_write_page"), path.display()))?;
        tracing::info!(locale = %locale, path = %path.display(), "page written");
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(lang: &str) -> String {
        let renderer = SiteRenderer::new(HeroOptions { particles: 20, seed: 1 }).unwrap();
        renderer.render(&I18n::new(lang)).unwrap()
    }

    #[test]
    fn translated_text_is_escaped() {
        let html = page("vi");
        assert!(html.contains("Phân tích &amp; Báo cáo"));
        assert!(!html.contains("Phân tích & Báo cáo"));
    }

    #[test]
    fn page_has_anchors_and_language() {
        let html = page("vi");
        assert!(html.contains("<html lang=\"vi\">"));
        for section in Section::ALL {
            assert!(html.contains(&format!("id=\"{}\"", section.anchor())), "{}", section.anchor());
            assert!(html.contains(&format!("href=\"#{}\"", section.anchor())));
        }
        assert!(html.contains("Giải Pháp Marketing<br>Số Hóa Toàn Diện"));
        assert!(html.contains("<svg"));
        assert!(html.contains("data-edges=\"24\""));
        assert!(html.contains("content=\"sha256:"));
        assert!(html.contains("<option value=\"seo\">"));
    }

    #[test]
    fn english_page_shows_raw_keys_for_missing_case_studies() {
        let html = page("en");
        assert!(html.contains("<html lang=\"en\">"));
        assert!(html.contains("<h3>portfolio.items.0.title</h3>"));
        assert!(html.contains("Ready to Grow Your Business?"));
        assert!(!html.contains("Sẵn Sàng"));
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(page("en"), page("en"));
    }

    #[test]
    fn writes_one_page_per_locale() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let i18n = I18n::new("vi");
        let written = write_site(&i18n, &Locale::ALL, dir.path(), &HeroOptions::default())?;
        assert_eq!(written, vec![dir.path().join("vi/index.html"), dir.path().join("en/index.html")]);
        let en = fs::read_to_string(dir.path().join("en/index.html"))?;
        assert!(en.contains("href=\"../vi/index.html\""));
        assert!(en.contains("class=\"active\" hreflang=\"en\""));
        assert_eq!(i18n.locale(), Locale::Vi);
        Ok(())
    }
}
