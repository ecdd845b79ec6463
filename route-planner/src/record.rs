//! Parsing of `"<A> to <B> = <N>"` distance records.

use std::{fmt, io::BufRead, str::FromStr};

use crate::{
    error::{ParseError, ParseResult},
    Cost,
};

/// One input line: the distance between two named locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub source: String,
    pub sink: String,
    pub distance: Cost,
}

impl Record {
    pub fn new(source: impl Into<String>, sink: impl Into<String>, distance: Cost) -> Self {
        Self {
            source: source.into(),
            sink: sink.into(),
            distance,
        }
    }

    /// The same connection with its endpoints swapped.
    pub fn reversed(&self) -> Record {
        Record::new(self.sink.clone(), self.source.clone(), self.distance)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {} = {}", self.source, self.sink, self.distance)
    }
}

impl FromStr for Record {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_record(s)
    }
}

pub fn parse_record(line: &str) -> ParseResult<Record> {
    let line = line.trim();
    let (trip, distance) = line
        .split_once(" = ")
        .ok_or_else(|| ParseError::MissingDistance(line.to_string()))?;
    let (source, sink) = trip
        .split_once(" to ")
        .ok_or_else(|| ParseError::MissingSink(line.to_string()))?;

    let (source, sink, distance) = (source.trim(), sink.trim(), distance.trim());
    if source.is_empty() || sink.is_empty() {
        return Err(ParseError::EmptyLocation(line.to_string()));
    }
    if source == sink {
        return Err(ParseError::SelfLoop(source.to_string()));
    }

    let distance = distance
        .parse::<Cost>()
        .map_err(|e| ParseError::InvalidDistance {
            value: distance.to_string(),
            source: e,
        })?;

    Ok(Record::new(source, sink, distance))
}

/// Parses every non-blank line of `reader`. The first malformed line aborts with its 1-based line number.
pub fn parse_records<R: BufRead>(reader: R) -> ParseResult<Vec<Record>> {
    let mut records = vec![];
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(parse_record(&line).map_err(|e| e.at_line(i + 1))?);
    }
    log::debug!("Parsed {} distance records.", records.len());
    Ok(records)
}

#[cfg(test)]
mod test_record {
    use super::*;

    #[test]
    fn test_parse_record() {
        let record = parse_record("London to Dublin = 464").unwrap();
        assert_eq!(record, Record::new("London", "Dublin", 464.into()));
        assert_eq!(record.to_string(), "London to Dublin = 464");

        let record: Record = "  AlphaCentauri to Snowdin = 66\n".parse().unwrap();
        assert_eq!(record.source, "AlphaCentauri");
        assert_eq!(record.sink, "Snowdin");
        assert_eq!(record.distance, 66.into());
    }

    #[test]
    fn test_parse_record_multi_word_names() {
        let record = parse_record("New York to San Francisco = 4130").unwrap();
        assert_eq!(record.source, "New York");
        assert_eq!(record.sink, "San Francisco");
    }

    #[test]
    fn test_malformed_records() {
        assert!(matches!(
            parse_record("London to Dublin 464"),
            Err(ParseError::MissingDistance(_))
        ));
        assert!(matches!(
            parse_record("London - Dublin = 464"),
            Err(ParseError::MissingSink(_))
        ));
        assert!(matches!(
            parse_record("London to  = 464"),
            Err(ParseError::EmptyLocation(_))
        ));
        assert!(matches!(
            parse_record("London to Dublin = far"),
            Err(ParseError::InvalidDistance { .. })
        ));
        assert!(matches!(
            parse_record("London to Dublin = -4"),
            Err(ParseError::InvalidDistance { .. })
        ));
        assert!(matches!(
            parse_record("London to London = 4"),
            Err(ParseError::SelfLoop(_))
        ));
    }

    #[test]
    fn test_parse_records() {
        let input = "London to Dublin = 464\n\nLondon to Belfast = 518\nDublin to Belfast = 141\n";
        let records = parse_records(input.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[2], Record::new("Dublin", "Belfast", 141.into()));
    }

    #[test]
    fn test_parse_records_reports_line() {
        let input = "London to Dublin = 464\nLondon to Belfast is 518\n";
        match parse_records(input.as_bytes()) {
            Err(ParseError::Line { line, source }) => {
                assert_eq!(line, 2);
                assert!(matches!(*source, ParseError::MissingDistance(_)));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_parse_records_empty() {
        assert!(parse_records("".as_bytes()).unwrap().is_empty());
    }
}
