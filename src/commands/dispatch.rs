//! Command dispatch logic for friendship

use std::time::Instant;

use friendship_core::config::GraphConfig;
use friendship_core::error::Result;
use friendship_core::trace_time;

use crate::cli::{Cli, Commands};
use crate::commands::{demo, query, CommandContext};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = match &cli.config {
        Some(path) => GraphConfig::load(path)?,
        None => GraphConfig::default(),
    };
    trace_time!(start, "load_config");

    let report = config.build_graph()?;
    trace_time!(start, "build_graph", people = report.graph.vertex_count());

    let ctx = CommandContext {
        cli,
        report: &report,
        queries: &config.queries,
    };

    let result = match &cli.command {
        None | Some(Commands::Demo) => demo::execute(&ctx),
        Some(Commands::Distance { from, to }) => query::execute_distance(&ctx, from, to),
        Some(Commands::Neighbors { person }) => query::execute_neighbors(&ctx, person),
        Some(Commands::People) => query::execute_people(&ctx),
    };
    trace_time!(start, "execute");
    result
}
