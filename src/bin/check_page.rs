//! Check page binary - validates a page description against the locale table
//!
//! Usage:
//!   cargo run --bin check-page -- page.json
//!
//! Exits with a non-zero status when the page has errors. Warnings are
//! printed but do not fail the check. DOCS_CONTENT_PREFIX applies when the
//! page file does not name its own `content_id_prefix`.

use anyhow::{bail, Context, Result};
use docs_lang_switcher::{config::Config, i18n::PageValidator, page::Page};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("docs_lang_switcher=info".parse()?),
        )
        .init();

    let _ = dotenvy::dotenv();
    let config = Config::from_env()?;

    let path = std::env::args()
        .nth(1)
        .context("Usage: check-page <page.json>")?;

    info!("Validating {}", path);
    let page = Page::load(&path, &config.content_id_prefix)?;
    let report = PageValidator::validate(&page);

    for warning in &report.warnings {
        println!("warning: {}", warning);
    }
    for error in &report.errors {
        println!("error: {}", error);
    }

    if report.has_errors() {
        bail!("{} has {} error(s)", path, report.errors.len());
    }

    println!(
        "{}: ok ({} picker entries, {} content blocks, {} warning(s))",
        path,
        page.picker.len(),
        page.content.len(),
        report.warnings.len()
    );
    Ok(())
}
