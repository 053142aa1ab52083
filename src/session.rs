//! The blocking read → decide → write loop.

use std::io::{BufRead, Write};

use log::{debug, info};

use crate::agent;
use crate::error::ProtocolResult;
use crate::graph::DistanceGraph;
use crate::protocol::{TokenReader, read_setup, read_turn};
use crate::targeting::TargetingPolicy;

/// Play a full session against the host engine.
///
/// Reads the setup block, builds the distance graph once, then alternates
/// between reading a turn and writing exactly one action line until the
/// host closes the input stream. Generic over the stream types so tests
/// can run whole sessions against in-memory buffers.
///
/// # Errors
///
/// Returns the first [`crate::error::ProtocolError`] hit while reading or
/// writing. A clean end-of-stream at a turn boundary is not an error.
pub fn play<R: BufRead, W: Write>(input: R, mut output: W) -> ProtocolResult<()> {
    let mut reader = TokenReader::new(input);

    let setup = read_setup(&mut reader)?;
    let graph = DistanceGraph::build(setup.factory_count, &setup.links);
    let policy = TargetingPolicy::default();
    info!(
        "session start: {} factories, {} links",
        setup.factory_count,
        setup.links.len()
    );

    let mut turn = 0u32;
    while let Some(world) = read_turn(&mut reader, setup.factory_count)? {
        let action = agent::act(&graph, &world, policy);
        debug!(
            "turn {turn}: {} factories, {} troops -> {action}",
            world.factory_count(),
            world.troop_count()
        );
        writeln!(output, "{action}")?;
        output.flush()?;
        turn += 1;
    }

    info!("session end after {turn} turns");
    Ok(())
}
