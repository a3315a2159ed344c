//! Replays picker clicks against a documentation page and prints the result.
//!
//! Usage:
//!   docs-lang-switcher                          # initialize the built-in page
//!   docs-lang-switcher en sr en                 # click en, sr, en in turn
//!   docs-lang-switcher --page page.json en      # start from a page file
//!
//! Prints the page state and the current-language markup as JSON.
//!
//! Optional environment variables:
//! - DOCS_DEFAULT_LOCALE (defaults to sr)
//! - DOCS_CONTENT_PREFIX (defaults to content_; a page file that names its
//!   own `content_id_prefix` keeps it)

use anyhow::{bail, Context, Result};
use docs_lang_switcher::{
    config::Config,
    i18n::PageValidator,
    page::Page,
    switcher::LanguageSwitcher,
};
use tracing::{info, warn};

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout carries only the page JSON
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("docs_lang_switcher=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;

    let mut args = std::env::args().skip(1);
    let mut page_file = None;
    let mut clicks = Vec::new();
    while let Some(arg) = args.next() {
        if arg == "--page" {
            page_file = Some(args.next().context("--page requires a file path")?);
        } else {
            clicks.push(arg);
        }
    }

    let mut page = match &page_file {
        Some(path) => Page::load(path, &config.content_id_prefix)?,
        None => Page::for_locales(&config.content_id_prefix),
    };

    let report = PageValidator::validate(&page);
    for warning in &report.warnings {
        warn!("{}", warning);
    }
    if report.has_errors() {
        bail!("Page markup is invalid:\n  {}", report.errors.join("\n  "));
    }

    let mut switcher = LanguageSwitcher::new(&mut page, config.default_locale);
    switcher.initialize();

    for code in &clicks {
        if let Err(err) = switcher.select_language(code) {
            warn!("Skipping click: {}", err);
        }
    }

    let selected = switcher.selected();
    let metrics = switcher.metrics().report();
    info!(
        selected = %selected,
        transitions = metrics.transitions,
        rejected = metrics.rejected,
        acceptance_rate = metrics.acceptance_rate,
        "Replayed {} clicks",
        clicks.len()
    );

    println!("{}", page.snapshot().to_json_pretty()?);
    Ok(())
}
