mod carousel;
mod config;
mod contact;
mod content;
mod fuzzy_matcher;
mod hero;
mod i18n;
mod logging;
mod preview;
mod render;

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use colored::*;
use similar::{ChangeTag, TextDiff};
use std::path::PathBuf;
use std::time::Instant;

use config::Config;
use contact::ContactForm;
use fuzzy_matcher::KeyMatcher;
use i18n::{I18n, Locale};

#[derive(Parser)]
#[command(name = "agency")]
#[command(about = "")]
struct Cli {
    /// Display language (vi, en); unknown values are ignored
    #[arg(long, global = true)]
    lang: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the static site, one page per language
    Render {
        /// Output directory [default: site.output_dir from config]
        #[arg(long, short)]
        out: Option<PathBuf>,
        /// Only render the active language
        #[arg(long)]
        single: bool,
    },
    /// Interactive terminal preview
    Preview,
    /// Translate one key under the active language
    T {
        key: String,
    },
    /// List translation keys, optionally fuzzy-filtered
    Keys {
        #[arg(long, short)]
        search: Option<String>,
    },
    /// Report keys present in one language and missing in the other
    Audit {
        /// Exit with an error when any key is missing
        #[arg(long)]
        strict: bool,
    },
    /// Print the active language's table as JSON
    Export,
    /// Validate and run a (simulated) contact form submission
    Contact {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        company: Option<String>,
        /// Service option id (seo, social_media, paid_ads, content, email, consultation)
        #[arg(long)]
        service: Option<String>,
        #[arg(long)]
        message: Option<String>,
    },
}

fn main() -> Result<()> {
    logging::init();

    let config = Config::new().with_context(|| {
        let lang = std::env::var("LANG").unwrap_or_default();
        I18n::new(&lang).t("cli.error_load_config")
    })?;
    let mut i18n = I18n::new(&config.get_effective_language());

    // Help text follows the configured language.
    let matches = Cli::command().about(i18n.t("cli.about")).get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    if let Some(tag) = &cli.lang {
        if !i18n.set_locale_tag(tag) {
            eprintln!("{} {}: {}", i18n.t("cli.lang_ignored").yellow(), i18n.locale(), tag);
        }
    }

    match cli.command {
        Commands::Render { out, single } => {
            let out_dir = out.unwrap_or_else(|| config.site.output_dir.clone());
            let locales: Vec<Locale> = if single { vec![i18n.locale()] } else { Locale::ALL.to_vec() };
            let written = render::write_site(&i18n, &locales, &out_dir, &config.hero_options())?;

            let cwd = std::env::current_dir().unwrap_or_default();
            for path in &written {
                let shown = pathdiff::diff_paths(path, &cwd).unwrap_or_else(|| path.clone());
                println!("{} {}", i18n.t("cli.page_written").green(), shown.display());
            }
            println!("{}: {}", i18n.t("cli.render_done").green().bold(), written.len());
        }
        Commands::Preview => {
            preview::run(i18n, &config)?;
        }
        Commands::T { key } => {
            println!("{}", i18n.t(&key));
            if i18n.lookup(&key).is_none() {
                eprintln!("{}", i18n.t("cli.key_missing").dimmed());
            }
        }
        Commands::Keys { search } => list_keys(&i18n, search.as_deref()),
        Commands::Audit { strict } => audit(&i18n, strict)?,
        Commands::Export => {
            let entries = i18n.dictionary().entries(i18n.locale());
            let json = serde_json::to_string_pretty(&entries).with_context(|| i18n.t("cli.error_export"))?;
            println!("{}", json);
        }
        Commands::Contact { name, email, phone, company, service, message } => {
            let mut form = ContactForm::new(config.submit_delay(), config.reset_delay());
            let values = [
                ("name", name),
                ("email", email),
                ("phone", phone),
                ("company", company),
                ("service", service),
                ("message", message),
            ];
            for (field, value) in values {
                if let Some(value) = value {
                    form.set_field(field, value)?;
                }
            }
            submit_contact(&i18n, &mut form)?;
        }
    }

    Ok(())
}

fn list_keys(i18n: &I18n, search: Option<&str>) {
    let entries = i18n.dictionary().entries(i18n.locale());

    match search {
        Some(pattern) => {
            let matcher = KeyMatcher::new();
            let hits = matcher.search(pattern, entries.iter().map(|(k, v)| (*k, *v)));
            if hits.is_empty() {
                println!("{}", i18n.t("cli.no_matches").red());
                return;
            }
            for hit in &hits {
                println!("{}  {}", matcher.highlight(hit.key, &hit.key_indices).cyan(), hit.value);
            }
            println!("{}: {}/{}", i18n.t("cli.keys_total").dimmed(), hits.len(), entries.len());
        }
        None => {
            for (key, value) in &entries {
                println!("{}  {}", key.cyan(), value);
            }
            println!("{}: {}", i18n.t("cli.keys_total").dimmed(), i18n.dictionary().len(i18n.locale()));
        }
    }
}

fn audit(i18n: &I18n, strict: bool) -> Result<()> {
    let dictionary = i18n.dictionary();
    let [left, right] = Locale::ALL;
    let listing = |locale: Locale| {
        let mut text = dictionary.keys(locale).join("\n");
        text.push('\n');
        text
    };
    let left_keys = listing(left);
    let right_keys = listing(right);

    println!("{} ({} → {})", i18n.t("cli.audit_title").bold(), left, right);
    let diff = TextDiff::from_lines(&left_keys, &right_keys);
    for change in diff.iter_all_changes() {
        let key = change.value().trim_end();
        match change.tag() {
            ChangeTag::Delete => println!("{}", format!("- {}", key).red()),
            ChangeTag::Insert => println!("{}", format!("+ {}", key).green()),
            ChangeTag::Equal => {}
        }
    }

    let mut gap = 0;
    for (present_in, absent_from) in [(left, right), (right, left)] {
        let missing = dictionary.missing_keys(present_in, absent_from).len();
        gap += missing;
        println!("{} {}: {}", i18n.t("cli.audit_only_in"), present_in, missing);
    }

    if gap == 0 {
        println!("{}", i18n.t("cli.audit_symmetric").green());
    } else if strict {
        bail!("{}: {}", i18n.t("cli.audit_gap"), gap);
    }
    Ok(())
}

fn submit_contact(i18n: &I18n, form: &mut ContactForm) -> Result<()> {
    let start = Instant::now();
    if let Err(err) = form.submit(start) {
        let message = format!("{}: {}", i18n.t("cli.form_invalid"), i18n.t(err.message_key()));
        return Err(anyhow::Error::new(err).context(message));
    }
    let details = serde_json::to_string_pretty(form.details())?;
    println!("{}", details.dimmed());
    if let Some(key) = form.status_key() {
        println!("{}", i18n.t(key).yellow());
    }

    // Success is read from the transition; with a zero reset delay the form
    // is already idle again by the time this returns.
    if let Some(at) = form.wait_for_completion() {
        println!("{}", i18n.t("cta.form.success_title").green().bold());
        println!("{}", i18n.t("cta.form.success_message"));
        println!("{} {}", i18n.t("cli.form_submitted_at").dimmed(), at.format("%Y-%m-%d %H:%M:%S"));
    }
    Ok(())
}
