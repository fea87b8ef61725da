//! CLI command handlers
//!
//! One handler per batch job. Each job loads its inputs, runs the pure
//! transform, writes its artifacts through a [`BatchWriter`], and maps the
//! outcome to an exit code: load and lookup faults abort before anything is
//! written, write failures are reported in aggregate after the whole batch
//! ran.

use crate::error::{Result, WeaveError};
use crate::loader::{
    self, COMPLETED_CERTIFICATIONS_DIR, MERGED_CONTROLS_FILE, PAGES_DIR, SITE_CONFIG_FILE,
};
use crate::output::{BatchWriter, WriteReport};
use crate::pipeline::{Gap, aggregate, compose, gap_analysis, link};
use crate::render::{render_page, upsert_navigation};
use colored::Colorize;
use std::collections::BTreeMap;
use std::path::Path;
use std::process::ExitCode;
use tracing::{info, warn};

/// Build completed certification bundles.
pub fn run_certs(root: &Path) -> ExitCode {
    conclude(certs_job(root))
}

/// Merge system control fragments into the base-control document.
pub fn run_controls(root: &Path) -> ExitCode {
    conclude(controls_job(root))
}

/// Render Markdown pages and update the site navigation.
pub fn run_docs(root: &Path) -> ExitCode {
    conclude(docs_job(root))
}

/// Run controls, certs, and docs in sequence, stopping at the first
/// failing job.
pub fn run_all(root: &Path) -> ExitCode {
    let jobs: [(&str, fn(&Path) -> Result<WriteReport>); 3] = [
        ("controls", controls_job),
        ("certs", certs_job),
        ("docs", docs_job),
    ];
    for (name, job) in jobs {
        info!(job = name, "running job");
        let outcome = job(root);
        let failed = match &outcome {
            Ok(report) => !report.is_clean(),
            Err(_) => true,
        };
        let code = conclude(outcome);
        if failed {
            return code;
        }
    }
    ExitCode::SUCCESS
}

/// Gap analysis: report certification references no control satisfies.
pub fn run_diff(root: &Path) -> ExitCode {
    let report = match diff_job(root) {
        Ok(report) => report,
        Err(e) => {
            print_error(&e);
            return ExitCode::FAILURE;
        }
    };

    for (certification, gaps) in &report {
        let headline = format!("{certification}: {} missing control(s)", gaps.len());
        if gaps.is_empty() {
            println!("{}", headline.green());
        } else {
            println!("{}", headline.red().bold());
        }
        for gap in gaps {
            println!("  {gap}");
        }
    }
    ExitCode::SUCCESS
}

fn certs_job(root: &Path) -> Result<WriteReport> {
    info!(root = %root.display(), "building completed certifications");
    let data = loader::load_data(root)?;
    let linked = link(data.standards, &data.controls)?;
    let (composed, unresolved) = compose(data.certifications, &linked)?;

    for reference in &unresolved {
        warn!(%reference, "unresolved certification reference");
        eprintln!("{} {reference}", "warning:".yellow().bold());
    }

    let mut writer = BatchWriter::new();
    for (name, certification) in &composed {
        let path = root
            .join(COMPLETED_CERTIFICATIONS_DIR)
            .join(format!("{name}.yaml"));
        writer.write_yaml(&path, &format!("certification {name}"), certification);
    }
    Ok(writer.finish())
}

fn controls_job(root: &Path) -> Result<WriteReport> {
    info!(root = %root.display(), "merging system control fragments");
    let template = loader::load_base_control(root)?;
    let fragments = loader::load_fragments(root)?;
    let merged = aggregate(template, fragments);

    let mut writer = BatchWriter::new();
    writer.write_yaml(
        &root.join(MERGED_CONTROLS_FILE),
        "merged control document",
        &merged,
    );
    Ok(writer.finish())
}

fn docs_job(root: &Path) -> Result<WriteReport> {
    info!(root = %root.display(), "rendering control documentation");
    let controls = loader::load_merged_controls(root)?;
    let mut config = loader::load_site_config(root)?;

    let mut writer = BatchWriter::new();
    for (key, family) in &controls {
        let page = render_page(key, family);
        writer.write_text(&root.join(PAGES_DIR).join(format!("{key}.md")), &page);
        upsert_navigation(&mut config, key);
    }
    writer.write_yaml(&root.join(SITE_CONFIG_FILE), "site configuration", &config);
    Ok(writer.finish())
}

fn diff_job(root: &Path) -> Result<BTreeMap<String, Vec<Gap>>> {
    let data = loader::load_data(root)?;
    let linked = link(data.standards, &data.controls)?;
    Ok(gap_analysis(&data.certifications, &linked))
}

fn conclude(outcome: Result<WriteReport>) -> ExitCode {
    match outcome {
        Ok(report) => {
            for path in &report.written {
                println!("wrote {}", path.display());
            }
            for failure in &report.failures {
                print_error(failure);
            }
            if report.is_clean() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn print_error(err: &WeaveError) {
    eprintln!("{} {err}", "error:".red().bold());
    if let WeaveError::LoadFailures { errors, .. } = err {
        for inner in errors {
            match std::error::Error::source(inner) {
                Some(source) => eprintln!("  {inner}: {source}"),
                None => eprintln!("  {inner}"),
            }
        }
    }
}
