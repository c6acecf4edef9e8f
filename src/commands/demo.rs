//! `shortpath demo` command - solve the built-in sample networks

use std::time::{Duration, Instant};

use crate::cli::{DemoArgs, OutputFormat};
use crate::commands::dispatch::command::CommandContext;
use crate::commands::render::{path_json, path_line};
use shortpath_core::error::Result;
use shortpath_core::graph::samples::{self, SAMPLE_SOURCE, SAMPLE_TARGET};
use shortpath_core::graph::ShortestPath;
use shortpath_core::trace_time;

struct DemoRun {
    name: &'static str,
    nodes: usize,
    edges: usize,
    result: ShortestPath<String>,
    elapsed: Duration,
}

/// Execute the demo command
pub fn execute(ctx: &CommandContext, args: &DemoArgs) -> Result<()> {
    let config = ctx.config()?;
    let solver = ctx.solver(&config, args.selector);

    let mut runs = Vec::new();
    for sample in samples::all()? {
        let start = Instant::now();
        let result = solver
            .solve(&sample.graph, SAMPLE_SOURCE, SAMPLE_TARGET)?
            .into_result()?;
        trace_time!(start, "demo_solve", sample = sample.name);
        runs.push(DemoRun {
            name: sample.name,
            nodes: sample.graph.node_count(),
            edges: sample.graph.edge_count(),
            result,
            elapsed: start.elapsed(),
        });
    }

    match ctx.cli.format {
        OutputFormat::Json => {
            let output: Vec<_> = runs
                .iter()
                .map(|run| {
                    let mut json = path_json(&run.result);
                    if let Some(obj) = json.as_object_mut() {
                        obj.insert("sample".to_string(), serde_json::json!(run.name));
                        obj.insert("nodes".to_string(), serde_json::json!(run.nodes));
                        obj.insert("edges".to_string(), serde_json::json!(run.edges));
                        obj.insert(
                            "selector".to_string(),
                            serde_json::json!(solver.selector()),
                        );
                        obj.insert(
                            "elapsed_us".to_string(),
                            serde_json::json!(run.elapsed.as_micros() as u64),
                        );
                    }
                    json
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!(
                    "Solving {} -> {} with the {} frontier",
                    SAMPLE_SOURCE,
                    SAMPLE_TARGET,
                    solver.selector()
                );
                println!();
            }
            for run in &runs {
                println!("{} ({} nodes, {} edges)", run.name, run.nodes, run.edges);
                println!("  path: {}", path_line(&run.result.path));
                println!("  cost: {}", run.result.cost);
                if !ctx.cli.quiet {
                    println!("  time: {:?}", run.elapsed);
                }
            }
        }
    }

    Ok(())
}
