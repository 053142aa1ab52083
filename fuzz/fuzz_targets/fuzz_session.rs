#![no_main]

//! Wire-protocol fuzzer.
//!
//! Feeds arbitrary bytes through the token reader, the setup parser and
//! the turn loop. Malformed streams must come back as `ProtocolError`s,
//! never as panics, and well-formed prefixes must produce a decision for
//! every complete turn.

use garrison::agent::act;
use garrison::protocol::{TokenReader, read_setup, read_turn};
use garrison::targeting::TargetingPolicy;
use garrison::DistanceGraph;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut reader = TokenReader::new(data);
    let Ok(setup) = read_setup(&mut reader) else {
        return;
    };
    // Cap the factory count; the distance table is quadratic in it
    if setup.factory_count > 64 {
        return;
    }

    let graph = DistanceGraph::build(setup.factory_count, &setup.links);
    let policy = TargetingPolicy::default();
    while let Ok(Some(world)) = read_turn(&mut reader, setup.factory_count) {
        let _ = act(&graph, &world, policy);
    }
});
