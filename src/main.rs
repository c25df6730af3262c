use anyhow::{Context, Result};
use dsi_progress_logger::prelude::*;
use graph_walks::adjacency::GraphAdjacency;
use graph_walks::prelude::*;
use webgraph::prelude::BvGraph;

/// Prints the walks of a traversal of a BV graph.
///
/// Usage: `graph-walks <pre|post|bfs|leaves> <basename> [root] [limit]`
fn main() -> Result<()> {
    stderrlog::new()
        .verbosity(2)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let order: Order = std::env::args()
        .nth(1)
        .context("No traversal order provided")?
        .parse()?;
    let basename = std::env::args()
        .nth(2)
        .context("No graph basename provided")?;
    let root: usize = match std::env::args().nth(3) {
        Some(root) => root.parse().context("Expected an integer root")?,
        None => 0,
    };
    // Traversals of graphs with cycles never end
    let limit: Option<usize> = std::env::args()
        .nth(4)
        .map(|limit| limit.parse())
        .transpose()
        .context("Expected an integer limit")?;

    let graph = BvGraph::with_basename(&basename).load()?;
    let traversal = Traversal::new(order, root, GraphAdjacency::new(graph));

    let mut pl = progress_logger![display_memory = true];
    let mut printed = 0;
    traversal.visit(
        |walk| {
            println!("{walk}");
            printed += 1;
            if limit.is_some_and(|limit| printed >= limit) {
                Action::Stop
            } else {
                Action::Continue
            }
        },
        &mut pl,
    )?;

    Ok(())
}
