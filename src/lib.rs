//! docweave: compliance documentation builder.
//!
//! Aggregates compliance documentation authored as separate YAML fragments
//! (standards, controls, certifications) into merged artifacts:
//!
//! - completed certification bundles with every referenced standard element
//!   filled in with linked control evidence,
//! - one merged base-control document built from per-system fragments,
//! - per-control Markdown pages plus an updated site-navigation config.
//!
//! Each batch job is a subcommand: load documents, run a pure in-memory
//! merge/link pass, write the artifacts, report aggregated failures.

pub mod cli;
pub mod error;
pub mod handlers;
pub mod loader;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod render;

pub use cli::{Cli, Command};
pub use error::{Result, WeaveError};
pub use loader::DocumentSet;
pub use model::{
    BaseControl, Certification, Control, ControlFamily, Justification, MergedControls, NavEntry,
    SectionEntry, SiteConfig, Standard, StandardElement,
};
pub use output::{BatchWriter, WriteReport};
pub use pipeline::{Gap, UnresolvedReference};
