use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "docweave",
    version,
    about = "Builds linked compliance documentation from standards, controls, and certifications",
    long_about = "docweave merges compliance YAML fragments into completed certification bundles, a merged base-control document, and per-control Markdown pages with updated site navigation."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose diagnostic output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build completed certification bundles from the data/ tree
    Certs {
        /// Project root holding the compliance data
        #[arg(default_value = ".")]
        root: PathBuf,
    },

    /// Merge system control fragments into the base-control document
    Controls {
        /// Project root holding the compliance data
        #[arg(default_value = ".")]
        root: PathBuf,
    },

    /// Render Markdown pages and update the site navigation
    Docs {
        /// Project root holding the compliance data
        #[arg(default_value = ".")]
        root: PathBuf,
    },

    /// Report certification references no control satisfies
    Diff {
        /// Project root holding the compliance data
        #[arg(default_value = ".")]
        root: PathBuf,
    },

    /// Run controls, certs, and docs in sequence
    All {
        /// Project root holding the compliance data
        #[arg(default_value = ".")]
        root: PathBuf,
    },
}
