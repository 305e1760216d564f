// SPDX-License-Identifier: PMPL-1.0-or-later

//! folio-nav: inspect how the portfolio site routes, localizes and
//! navigates its catalogs.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use folio_nav::catalog::{Site, CONFIG_ENV};
use folio_nav::i18n::{t, Lang, UiText};
use folio_nav::report::{self, OutputFormat, ReportFormatter};
use folio_nav::types::CatalogKind;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "folio-nav")]
#[command(version)]
#[command(about = "Route-aware, language-aware catalog navigation for a bilingual portfolio")]
#[command(long_about = None)]
struct Cli {
    /// Site configuration (YAML or JSON). Falls back to $FOLIO_NAV_CONFIG,
    /// then to the built-in content
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a URL path the way a page mount does
    Resolve {
        /// Path such as /es/projects/2
        #[arg(value_name = "PATH")]
        path: String,
    },

    /// List a catalog in navigation order with canonical paths
    List {
        /// Catalog to list
        #[arg(short, long, value_enum, default_value = "projects")]
        kind: CatalogKind,

        /// Listing language
        #[arg(short, long, value_enum, default_value = "en")]
        lang: Lang,
    },

    /// Report localized fields missing from any entry; fails on any gap
    Check,

    /// Show where the language selector leads from a path
    Switch {
        /// Current path
        #[arg(value_name = "PATH")]
        path: String,

        /// Language code to select
        #[arg(value_name = "LANG")]
        lang: String,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "folio_nav=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            // Last-resort boundary: generic message plus a retry hint.
            let lang = Lang::DEFAULT;
            eprintln!("{}", t(lang, UiText::ErrorTitle).red().bold());
            eprintln!("{}", t(lang, UiText::ErrorBody));
            eprintln!("  {:#}", err);
            eprintln!("[{}] re-run the command after fixing the cause", t(lang, UiText::Reload));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = cli
        .config
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
    let site = Site::load(config.as_deref())?;
    let formatter = ReportFormatter::new();
    let format = cli.format;

    match cli.command {
        Commands::Resolve { path } => {
            let report = report::generate_resolve_report(&site, &path);
            match format.serialize(&report)? {
                Some(out) => println!("{}", out),
                None => formatter.print_resolve(&report),
            }
        }

        Commands::List { kind, lang } => {
            let listing = report::generate_listing(&site, kind, lang);
            match format.serialize(&listing)? {
                Some(out) => println!("{}", out),
                None => formatter.print_listing(&listing),
            }
        }

        Commands::Check => {
            let audit = report::generate_audit(&site);
            match format.serialize(&audit)? {
                Some(out) => println!("{}", out),
                None => formatter.print_audit(&audit),
            }
            if !audit.is_clean() {
                warn!(
                    gaps = audit.gaps.len(),
                    blocking = audit.blocking(),
                    "catalog has untranslated fields"
                );
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Switch { path, lang } => {
            let report = report::generate_switch_report(&path, &lang)
                .with_context(|| format!("switching language on {}", path))?;
            match format.serialize(&report)? {
                Some(out) => println!("{}", out),
                None => {
                    println!(
                        "{} ({}) -> {} ({})",
                        report.from,
                        report.from_lang,
                        report.to.cyan(),
                        report.to_lang.native_name()
                    );
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
