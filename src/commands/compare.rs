//! `shortpath compare` command - run every frontier strategy on one query
//!
//! Reports each strategy's result and wall time. Strategies that disagree on
//! cost or path make the command fail.

use std::time::{Duration, Instant};

use crate::cli::{CompareArgs, OutputFormat};
use crate::commands::dispatch::command::CommandContext;
use crate::commands::render::{outcome_json, path_line};
use shortpath_core::error::{Result, ShortpathError};
use shortpath_core::graph::{PathOutcome, SelectorKind};
use shortpath_core::trace_time;

struct Run {
    selector: SelectorKind,
    outcome: PathOutcome<String>,
    elapsed: Duration,
}

/// Execute the compare command
pub fn execute(ctx: &CommandContext, args: &CompareArgs) -> Result<()> {
    let config = ctx.config()?;
    let graph = ctx.load_graph(&args.graph, &config, args.permissive)?;

    let mut runs = Vec::with_capacity(SelectorKind::ALL.len());
    for selector in SelectorKind::ALL {
        let solver = ctx.solver(&config, Some(selector));
        let start = Instant::now();
        let outcome = solver.solve(&graph, args.from.as_str(), args.to.as_str())?;
        trace_time!(start, "compare_run", selector = selector.as_str());
        runs.push(Run {
            selector,
            outcome,
            elapsed: start.elapsed(),
        });
    }

    let agree = runs.windows(2).all(|pair| {
        pair[0].outcome.cost() == pair[1].outcome.cost()
            && pair[0].outcome.path().map(|p| &p.path) == pair[1].outcome.path().map(|p| &p.path)
    });
    tracing::debug!(agree, "compare_complete");

    match ctx.cli.format {
        OutputFormat::Json => output_json(args, &runs, agree)?,
        OutputFormat::Human => output_human(ctx, &runs, agree),
    }

    if !agree {
        return Err(ShortpathError::Other(format!(
            "frontier strategies disagree on {} -> {}",
            args.from, args.to
        )));
    }
    Ok(())
}

fn output_json(args: &CompareArgs, runs: &[Run], agree: bool) -> Result<()> {
    let results: Vec<_> = runs
        .iter()
        .map(|run| {
            let mut json = outcome_json(&run.outcome);
            if let Some(obj) = json.as_object_mut() {
                obj.insert("selector".to_string(), serde_json::json!(run.selector));
                obj.insert(
                    "elapsed_us".to_string(),
                    serde_json::json!(run.elapsed.as_micros() as u64),
                );
            }
            json
        })
        .collect();

    let output = serde_json::json!({
        "source": args.from,
        "target": args.to,
        "results": results,
        "agree": agree,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_human(ctx: &CommandContext, runs: &[Run], agree: bool) {
    for run in runs {
        let summary = match &run.outcome {
            PathOutcome::Found(result) => {
                format!("cost {}  {}", result.cost, path_line(&result.path))
            }
            PathOutcome::Unreachable { .. } => "unreachable".to_string(),
        };
        if ctx.cli.quiet {
            println!("{:<6}  {}", run.selector.as_str(), summary);
        } else {
            println!("{:<6}  {}  ({:?})", run.selector.as_str(), summary, run.elapsed);
        }
    }
    println!("agree: {}", if agree { "yes" } else { "no" });
}
