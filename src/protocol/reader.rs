//! Token-oriented input parsing.

use std::collections::VecDeque;
use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use crate::error::{ProtocolError, ProtocolResult};
use crate::graph::{FactoryId, Link};
use crate::world::{Faction, Factory, Troop, WorldState};

/// Whitespace-delimited token reader over a buffered input stream.
///
/// The engine sends one record per line, but nothing here depends on line
/// boundaries: tokens are consumed in order wherever the line breaks fall.
pub struct TokenReader<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R> fmt::Debug for TokenReader<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenReader")
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl<R: BufRead> TokenReader<R> {
    /// Wrap a buffered input stream.
    #[must_use]
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` on a clean end-of-stream.
    ///
    /// # Errors
    ///
    /// Fails when the underlying stream fails to read.
    pub fn next_token(&mut self) -> ProtocolResult<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Next token, treating end-of-stream as a truncated record.
    fn require_token(&mut self) -> ProtocolResult<String> {
        self.next_token()?.ok_or(ProtocolError::UnexpectedEnd)
    }

    /// Next token parsed as an integer.
    fn int<T: FromStr>(&mut self) -> ProtocolResult<T> {
        parse_int(&self.require_token()?)
    }
}

fn parse_int<T: FromStr>(token: &str) -> ProtocolResult<T> {
    token.parse().map_err(|_| ProtocolError::InvalidInteger {
        token: token.to_string(),
    })
}

/// The startup block: factory count and link list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setup {
    /// Number of factories on the map.
    pub factory_count: usize,
    /// All links, verbatim from the wire.
    pub links: Vec<Link>,
}

/// Read the startup block.
///
/// # Errors
///
/// Fails on I/O errors, a truncated or non-integer stream, or a link
/// endpoint outside `0..factory_count`.
pub fn read_setup<R: BufRead>(reader: &mut TokenReader<R>) -> ProtocolResult<Setup> {
    let factory_count: usize = reader.int()?;
    let link_count: usize = reader.int()?;

    let mut links = Vec::new();
    for _ in 0..link_count {
        let a: FactoryId = reader.int()?;
        let b: FactoryId = reader.int()?;
        let distance: u32 = reader.int()?;
        for factory in [a, b] {
            check_factory_id(factory, factory_count)?;
        }
        links.push(Link { a, b, distance });
    }

    Ok(Setup {
        factory_count,
        links,
    })
}

/// Read one turn's entity block into a fresh snapshot.
///
/// Returns `Ok(None)` when the stream ends cleanly at the turn boundary;
/// the host closing stdin is how a session normally terminates.
///
/// Factory row ids are checked against `factory_count` because they index
/// the distance table. Troop source/destination ids are taken as sent;
/// they are only ever compared, never used as indices.
///
/// # Errors
///
/// Fails on I/O errors, a stream truncated mid-record, non-integer tokens,
/// an unknown entity kind, an unknown faction code, or an out-of-range
/// factory id.
pub fn read_turn<R: BufRead>(
    reader: &mut TokenReader<R>,
    factory_count: usize,
) -> ProtocolResult<Option<WorldState>> {
    let Some(first) = reader.next_token()? else {
        return Ok(None);
    };
    let entity_count: usize = parse_int(&first)?;

    let mut world = WorldState::new();
    for _ in 0..entity_count {
        let id: usize = reader.int()?;
        let kind = reader.require_token()?;
        match kind.as_str() {
            "FACTORY" => {
                check_factory_id(id, factory_count)?;
                let faction = read_faction(reader)?;
                let garrison: u32 = reader.int()?;
                let production: u32 = reader.int()?;
                // args 4 and 5 are unused for factories but must be consumed
                let _: i32 = reader.int()?;
                let _: i32 = reader.int()?;
                world.insert_factory(Factory {
                    id,
                    faction,
                    garrison,
                    production,
                });
            }
            "TROOP" => {
                let faction = read_faction(reader)?;
                let source: FactoryId = reader.int()?;
                let destination: FactoryId = reader.int()?;
                let garrison: u32 = reader.int()?;
                let turns_remaining: u32 = reader.int()?;
                world.insert_troop(Troop {
                    id,
                    faction,
                    source,
                    destination,
                    garrison,
                    turns_remaining,
                });
            }
            _ => return Err(ProtocolError::UnknownEntityKind(kind)),
        }
    }

    Ok(Some(world))
}

fn read_faction<R: BufRead>(reader: &mut TokenReader<R>) -> ProtocolResult<Faction> {
    let code: i32 = reader.int()?;
    Faction::from_code(code).ok_or(ProtocolError::UnknownFaction(code))
}

fn check_factory_id(factory: FactoryId, count: usize) -> ProtocolResult<()> {
    if factory < count {
        Ok(())
    } else {
        Err(ProtocolError::FactoryOutOfRange { factory, count })
    }
}
