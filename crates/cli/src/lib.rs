mod graph;
mod page;
mod render;
mod schema;
mod tree;

use clap::{Parser, Subcommand, ValueEnum};
use docscope_core::bundle::FactBundle;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "docscope",
    version,
    about = "Class and interface hierarchy pages for API documentation",
    long_about = "Docscope merges the supertype facts reported by independent symbol sources \
                  into one inheritance graph and derives the class-hierarchy and \
                  interface-hierarchy trees rendered on documentation tree pages."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the hierarchy trees of a fact bundle
    Tree {
        /// Path to the fact bundle (JSON)
        #[arg(value_name = "BUNDLE")]
        bundle: PathBuf,
        /// Root entity, overrides the bundle config
        #[arg(long)]
        root: Option<String>,
        /// Which view to print
        #[arg(long, value_enum, default_value_t = ViewArg::Both)]
        view: ViewArg,
    },
    /// Print the tree page payloads (overview and one per package) as JSON
    Page {
        #[arg(value_name = "BUNDLE")]
        bundle: PathBuf,
        #[arg(long)]
        root: Option<String>,
    },
    /// Print the merged inheritance graph as a table
    Graph {
        #[arg(value_name = "BUNDLE")]
        bundle: PathBuf,
    },
    /// Print the JSON schema of fact bundles
    Schema,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    Class,
    Interface,
    Both,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = docscope_core::logging::init_logging("cli", true);

    match cli.command {
        Commands::Tree { bundle, root, view } => tree::run(load(&bundle, root)?, view),
        Commands::Page { bundle, root } => page::run(load(&bundle, root)?),
        Commands::Graph { bundle } => graph::run(load(&bundle, None)?),
        Commands::Schema => schema::run(),
    }
}

fn load(path: &Path, root: Option<String>) -> docscope_core::Result<FactBundle> {
    let mut bundle = FactBundle::load(path)?;
    if let Some(root) = root {
        bundle.config = bundle.config.with_root(root);
    }
    Ok(bundle)
}
