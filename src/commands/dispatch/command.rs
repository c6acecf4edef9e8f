//! Command trait and context for dispatching commands

use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Instant;

use crate::cli::Cli;
use shortpath_core::bail_usage;
use shortpath_core::config::SolverConfig;
use shortpath_core::error::Result;
use shortpath_core::graph::{GraphDefinition, SelectorKind, ShortestPathSolver, WeightedGraph};

use super::macros::trace_command;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
    interrupted: Arc<AtomicBool>,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant, interrupted: Arc<AtomicBool>) -> Self {
        Self {
            cli,
            start,
            interrupted,
        }
    }

    /// Effective solver configuration (explicit `--config` first)
    pub fn config(&self) -> Result<SolverConfig> {
        let config = SolverConfig::discover(self.cli.config.as_deref())?;
        trace_command!(self.cli, self.start, "load_config");
        Ok(config)
    }

    /// Solver honoring Ctrl-C, using `selector` when given and the configured one otherwise
    pub fn solver(
        &self,
        config: &SolverConfig,
        selector: Option<SelectorKind>,
    ) -> ShortestPathSolver {
        let solver = match selector {
            Some(kind) => ShortestPathSolver::new(kind),
            None => ShortestPathSolver::from_config(config),
        };
        solver.with_cancellation(Arc::clone(&self.interrupted))
    }

    /// Read and build a graph definition file.
    ///
    /// `--permissive` overrides the configured policy but may not contradict
    /// an explicit `strict = true` in the file.
    pub fn load_graph(
        &self,
        path: &Path,
        config: &SolverConfig,
        permissive: bool,
    ) -> Result<WeightedGraph> {
        let mut definition = GraphDefinition::load(path)?;
        if permissive {
            if definition.strict == Some(true) {
                bail_usage!(format!(
                    "--permissive conflicts with `strict = true` in {}",
                    path.display()
                ));
            }
            definition.strict = Some(false);
        }

        let graph = definition.build(config.registration_policy())?;
        trace_command!(self.cli, self.start, "load_graph");
        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            policy = %graph.policy(),
            "graph_built"
        );
        Ok(graph)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("shortpath {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Lowest-cost routes through undirected weighted graphs.");
        println!();
        println!("Run `shortpath --help` for usage information.");
        Ok(())
    }
}
