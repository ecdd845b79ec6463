use std::num::ParseIntError;

use thiserror::Error;

/// Errors raised while reading `"<A> to <B> = <N>"` records.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("expected `<A> to <B> = <N>`, missing ` = ` in {0:?}")]
    MissingDistance(String),
    #[error("expected `<A> to <B> = <N>`, missing ` to ` in {0:?}")]
    MissingSink(String),
    #[error("empty location name in {0:?}")]
    EmptyLocation(String),
    #[error("invalid distance {value:?}: {source}")]
    InvalidDistance {
        value: String,
        source: ParseIntError,
    },
    #[error("location {0:?} is connected to itself")]
    SelfLoop(String),
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    pub fn at_line(self, line: usize) -> Self {
        ParseError::Line {
            line,
            source: Box::new(self),
        }
    }
}

/// Errors raised by the route optimizer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("no locations to visit")]
    NoLocations,
    #[error("no route visits every location")]
    NoPathFound,
    #[error("route distance exceeds {}", usize::MAX)]
    CostOverflow,
    #[error("{count} locations exceed the supported maximum of {max}")]
    TooManyLocations { count: usize, max: usize },
}

pub type ParseResult<T> = std::result::Result<T, ParseError>;
pub type RouteResult<T> = std::result::Result<T, RouteError>;
