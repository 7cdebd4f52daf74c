//! `demo`: answer every configured query

use serde::Serialize;

use friendship_core::error::Result;
use friendship_core::{Distance, Person};

use crate::cli::OutputFormat;
use crate::commands::CommandContext;

#[derive(Debug, Serialize)]
pub struct DistanceRow<'a> {
    pub from: &'a Person,
    pub to: &'a Person,
    pub distance: Distance,
}

pub fn execute(ctx: &CommandContext<'_>) -> Result<()> {
    // JSON mode keeps stderr for the error envelope only
    if !ctx.cli.quiet && ctx.cli.format == OutputFormat::Human {
        for rejected in &ctx.report.rejected {
            eprintln!("skipped: {}", rejected);
        }
    }

    let graph = &ctx.report.graph;
    let mut rows = Vec::with_capacity(ctx.queries.len());
    for (from, to) in ctx.queries {
        let (from, to) = (ctx.person(from)?, ctx.person(to)?);
        let distance = graph.get_distance(from, to)?;
        rows.push(DistanceRow { from, to, distance });
    }

    match ctx.cli.format {
        OutputFormat::Human => {
            for row in &rows {
                println!("{}", row.distance);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }

    Ok(())
}
