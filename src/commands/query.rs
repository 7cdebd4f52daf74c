//! Single-shot graph queries: `distance`, `neighbors`, `people`

use friendship_core::error::Result;

use crate::cli::OutputFormat;
use crate::commands::demo::DistanceRow;
use crate::commands::CommandContext;

pub fn execute_distance(ctx: &CommandContext<'_>, from: &str, to: &str) -> Result<()> {
    let (from, to) = (ctx.person(from)?, ctx.person(to)?);
    let distance = ctx.report.graph.get_distance(from, to)?;

    match ctx.cli.format {
        OutputFormat::Human => println!("{}", distance),
        OutputFormat::Json => {
            let row = DistanceRow { from, to, distance };
            println!("{}", serde_json::to_string_pretty(&row)?);
        }
    }
    Ok(())
}

pub fn execute_neighbors(ctx: &CommandContext<'_>, person: &str) -> Result<()> {
    let person = ctx.person(person)?;
    let neighbors = ctx.report.graph.neighbors(person)?;

    match ctx.cli.format {
        OutputFormat::Human => {
            for neighbor in neighbors {
                println!("{}", neighbor);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&neighbors)?),
    }
    Ok(())
}

pub fn execute_people(ctx: &CommandContext<'_>) -> Result<()> {
    let people = ctx.report.graph.vertices();

    match ctx.cli.format {
        OutputFormat::Human => {
            for person in people {
                println!("{}", person);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(people)?),
    }
    Ok(())
}
