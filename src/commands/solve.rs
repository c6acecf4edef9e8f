//! `shortpath solve` command - lowest-cost path between two nodes of a graph file

use crate::cli::{OutputFormat, SolveArgs};
use crate::commands::dispatch::command::CommandContext;
use crate::commands::render::{path_json, path_line};
use shortpath_core::error::Result;
use shortpath_core::graph::{Cost, ShortestPath};

/// Execute the solve command
pub fn execute(ctx: &CommandContext, args: &SolveArgs) -> Result<()> {
    let config = ctx.config()?;
    let graph = ctx.load_graph(&args.graph, &config, args.permissive)?;
    let solver = ctx.solver(&config, args.selector);

    let (result, distances) = if args.all {
        let tree = solver.solve_all(&graph, args.from.as_str())?;
        let result = tree.path_to(args.to.as_str())?.into_result()?;
        let distances: Vec<(String, Cost)> = tree
            .reachable()
            .map(|(node, cost)| (node.clone(), cost))
            .collect();
        (result, Some(distances))
    } else {
        let result = solver
            .solve(&graph, args.from.as_str(), args.to.as_str())?
            .into_result()?;
        (result, None)
    };

    match ctx.cli.format {
        OutputFormat::Json => {
            output_json(&result, distances.as_deref(), solver.selector().as_str())
        }
        OutputFormat::Human => {
            output_human(ctx, &result, distances.as_deref());
            Ok(())
        }
    }
}

fn output_json(
    result: &ShortestPath<String>,
    distances: Option<&[(String, Cost)]>,
    selector: &str,
) -> Result<()> {
    let mut json = path_json(result);
    if let Some(obj) = json.as_object_mut() {
        obj.insert("source".to_string(), serde_json::json!(result.source()));
        obj.insert("target".to_string(), serde_json::json!(result.target()));
        obj.insert("selector".to_string(), serde_json::json!(selector));
        if let Some(distances) = distances {
            let entries: Vec<_> = distances
                .iter()
                .map(|(node, cost)| serde_json::json!({ "node": node, "cost": cost }))
                .collect();
            obj.insert("distances".to_string(), serde_json::json!(entries));
        }
    }
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

fn output_human(
    ctx: &CommandContext,
    result: &ShortestPath<String>,
    distances: Option<&[(String, Cost)]>,
) {
    println!("{}", path_line(&result.path));
    println!("cost: {}", result.cost);
    if !ctx.cli.quiet {
        println!("hops: {}", result.hops());
    }

    if let Some(distances) = distances {
        println!();
        let width = distances
            .iter()
            .map(|(node, _)| node.len())
            .max()
            .unwrap_or(0);
        for (node, cost) in distances {
            println!("  {:<width$}  {}", node, cost, width = width);
        }
    }
}
