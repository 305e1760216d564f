// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report formatting and output

use super::generator::{AuditReport, ListingReport, ResolveOutcome, ResolveReport};
use crate::i18n::{t, Lang, UiText};
use crate::navigator::{EntryView, NavTargets};
use crate::types::CatalogKind;
use colored::*;

pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print_resolve(&self, report: &ResolveReport) {
        println!("{} {}", "PATH".bold().cyan(), report.input);
        println!("  route:     {:?}", report.route);
        println!("  language:  {} ({})", report.lang, report.lang.native_name());
        if report.canonical_path != report.input {
            println!("  canonical: {}", report.canonical_path);
        }
        println!();

        match &report.outcome {
            ResolveOutcome::Page => println!("{}", "page (no catalog lookup)".green()),
            ResolveOutcome::Redirect { to, reason } => {
                println!("{} {}", "REDIRECT".bold().yellow(), to);
                if let Some(reason) = reason {
                    println!("  reason: {}", reason);
                }
            }
            ResolveOutcome::Detail {
                kind,
                targets,
                view,
            } => {
                self.print_view(view);
                println!();
                self.print_targets(*kind, targets, report.lang);
            }
        }
    }

    fn print_view(&self, view: &EntryView) {
        let lang = view.lang;
        match view.icon {
            Some(icon) => println!("{} {}", icon.glyph().green(), view.title.bold()),
            None => println!("{}", view.title.bold()),
        }
        if let Some(brief) = &view.brief {
            println!("  {}", brief.italic());
        }
        println!("  {}", view.description);
        if let Some(date) = &view.date {
            println!("  {}: {}", t(lang, UiText::Date).dimmed(), date);
        }
        if let Some(category) = &view.category {
            println!("  {}: {}", t(lang, UiText::Category).dimmed(), category);
        }
        if let Some(years) = view.years {
            println!("  {}: {}", t(lang, UiText::YearsExperience).dimmed(), years);
        }
        if !view.skills.is_empty() {
            println!("  {}:", t(lang, UiText::SkillsTechnologies).dimmed());
            for skill in &view.skills {
                match skill.level_label {
                    Some(level) => println!("    - {} ({})", skill.name, level),
                    None => println!("    - {}", skill.name),
                }
            }
        }
        if let Some(url) = &view.live_url {
            println!("  {}: {}", t(lang, UiText::ViewLiveSite).dimmed(), url);
        }
        if let Some(url) = &view.repo_url {
            println!("  {}: {}", t(lang, UiText::ViewRepository).dimmed(), url);
        }
    }

    fn print_targets(&self, kind: CatalogKind, targets: &NavTargets, lang: Lang) {
        let back = match kind {
            CatalogKind::Projects => UiText::BackToProjects,
            CatalogKind::Experience => UiText::BackToHome,
        };
        println!("  {} {} (id {})", "#".dimmed(), targets.index + 1, targets.id);
        println!("  {:<20} {}", t(lang, back), targets.back_path.cyan());
        if let Some(path) = &targets.previous_path {
            println!("  {:<20} {}", t(lang, UiText::Previous), path.cyan());
        }
        if let Some(path) = &targets.next_path {
            println!("  {:<20} {}", t(lang, UiText::Next), path.cyan());
        }
    }

    pub fn print_listing(&self, listing: &ListingReport) {
        let heading = match listing.kind {
            CatalogKind::Projects => t(listing.lang, UiText::Projects),
            CatalogKind::Experience => t(listing.lang, UiText::ExperienceOverview),
        };
        println!("{}", heading.to_uppercase().bold().cyan());
        for row in &listing.entries {
            let title = match &row.title {
                Some(title) => title.normal(),
                None => "(untranslated)".red(),
            };
            println!("  {:>3}  {:<40} {}", row.id, title, row.path.dimmed());
        }
    }

    pub fn print_audit(&self, audit: &AuditReport) {
        println!("{}", "CATALOG AUDIT".bold().cyan());
        println!("  entries checked: {}", audit.entries_checked);
        if audit.gaps.is_empty() {
            println!("  {}", "every entry is fully translated".green());
            return;
        }
        for row in &audit.gaps {
            let label = if row.gap.is_blocking() {
                "BLOCKING".red().bold()
            } else {
                "missing".yellow()
            };
            let field = match row.gap.skill {
                Some(position) => format!("{}[{}]", row.gap.field, position),
                None => row.gap.field.to_string(),
            };
            println!(
                "  {:<8} {} {} {}: {}",
                label, row.kind, row.gap.id, row.gap.lang, field
            );
        }
        println!(
            "  {} gap(s), {} blocking",
            audit.gaps.len(),
            audit.blocking()
        );
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}
