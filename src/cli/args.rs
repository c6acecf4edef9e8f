use std::path::PathBuf;

use clap::Args;

use super::parse::parse_selector;
use shortpath_core::graph::SelectorKind;

#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    /// Graph definition file (.toml or .json)
    pub graph: PathBuf,

    /// Source node
    pub from: String,

    /// Target node
    pub to: String,

    /// Frontier strategy (linear, heap)
    #[arg(long, short, value_parser = parse_selector)]
    pub selector: Option<SelectorKind>,

    /// Register edge endpoints automatically
    #[arg(long)]
    pub permissive: bool,

    /// Also print distances to every reachable node
    #[arg(long)]
    pub all: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Graph definition file (.toml or .json)
    pub graph: PathBuf,

    /// Source node
    pub from: String,

    /// Target node
    pub to: String,

    /// Register edge endpoints automatically
    #[arg(long)]
    pub permissive: bool,
}

#[derive(Args, Debug, Clone)]
pub struct DemoArgs {
    /// Frontier strategy (linear, heap)
    #[arg(long, short, value_parser = parse_selector)]
    pub selector: Option<SelectorKind>,
}
