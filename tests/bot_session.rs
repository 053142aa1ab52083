//! Full-session integration tests.
//!
//! Each test scripts a complete engine conversation (setup block plus one
//! or more turns), drives it through `session::play` with in-memory
//! streams, and checks the exact action lines the bot prints.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use garrison::ProtocolError;
use garrison::session::play;

/// A triangle map: 0-1 at distance 1, 1-2 at distance 1, 0-2 at distance 2.
const TRIANGLE_SETUP: &str = "3\n3\n0 1 1\n1 2 1\n0 2 2\n";

fn run_session(input: &str) -> Vec<String> {
    let mut output = Vec::new();
    play(input.as_bytes(), &mut output).unwrap();
    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_moves_on_nearest_neutral() {
    let input = format!(
        "{TRIANGLE_SETUP}\
         3\n\
         0 FACTORY 1 10 1 0 0\n\
         1 FACTORY 0 3 1 0 0\n\
         2 FACTORY -1 5 1 0 0\n"
    );
    assert_eq!(run_session(&input), vec!["MOVE 0 1 5"]);
}

#[test]
fn test_claimed_neutral_redirects_to_opponent() {
    let input = format!(
        "{TRIANGLE_SETUP}\
         4\n\
         0 FACTORY 1 10 1 0 0\n\
         1 FACTORY 0 3 1 0 0\n\
         2 FACTORY -1 5 1 0 0\n\
         7 TROOP 1 0 1 5 1\n"
    );
    assert_eq!(run_session(&input), vec!["MOVE 0 2 5"]);
}

#[test]
fn test_no_owned_factories_waits() {
    let input = format!(
        "{TRIANGLE_SETUP}\
         3\n\
         0 FACTORY -1 10 1 0 0\n\
         1 FACTORY 0 3 1 0 0\n\
         2 FACTORY -1 5 1 0 0\n"
    );
    assert_eq!(run_session(&input), vec!["WAIT"]);
}

#[test]
fn test_lone_unlinked_factory_waits() {
    let input = "1\n0\n\
                 1\n\
                 0 FACTORY 1 10 1 0 0\n";
    assert_eq!(run_session(input), vec!["WAIT"]);
}

#[test]
fn test_one_line_per_turn_across_a_session() {
    // Turn 1: take the neutral. Turn 2: it is ours now, both factories
    // want the opponent, and the higher-id one gets the order out.
    let input = format!(
        "{TRIANGLE_SETUP}\
         3\n\
         0 FACTORY 1 10 1 0 0\n\
         1 FACTORY 0 3 1 0 0\n\
         2 FACTORY -1 5 1 0 0\n\
         3\n\
         0 FACTORY 1 5 1 0 0\n\
         1 FACTORY 1 3 1 0 0\n\
         2 FACTORY -1 6 1 0 0\n"
    );
    assert_eq!(run_session(&input), vec!["MOVE 0 1 5", "MOVE 1 2 1"]);
}

#[test]
fn test_session_ends_cleanly_with_no_turns() {
    assert_eq!(run_session(TRIANGLE_SETUP), Vec::<String>::new());
}

#[test]
fn test_truncated_setup_fails() {
    let mut output = Vec::new();
    let result = play("3\n3\n0 1".as_bytes(), &mut output);
    assert!(matches!(result, Err(ProtocolError::UnexpectedEnd)));
    assert!(output.is_empty());
}

#[test]
fn test_malformed_turn_fails_after_emitting_earlier_turns() {
    let input = format!(
        "{TRIANGLE_SETUP}\
         3\n\
         0 FACTORY 1 10 1 0 0\n\
         1 FACTORY 0 3 1 0 0\n\
         2 FACTORY -1 5 1 0 0\n\
         1\n\
         0 GHOST 1 1 1 1 1\n"
    );
    let mut output = Vec::new();
    let result = play(input.as_bytes(), &mut output);
    assert!(matches!(result, Err(ProtocolError::UnknownEntityKind(_))));
    assert_eq!(String::from_utf8(output).unwrap(), "MOVE 0 1 5\n");
}

#[test]
fn test_every_emitted_line_is_wait_or_move() {
    let input = format!(
        "{TRIANGLE_SETUP}\
         3\n\
         0 FACTORY 1 1 1 0 0\n\
         1 FACTORY 0 0 0 0 0\n\
         2 FACTORY 0 0 0 0 0\n"
    );
    for line in run_session(&input) {
        assert!(
            line == "WAIT" || line.starts_with("MOVE "),
            "unexpected output line: {line}"
        );
    }
}
