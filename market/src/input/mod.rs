//! Order Input Module
//!
//! Reads the market header and yields the day's orders, either from a trace
//! list (`TL`) or from the seeded pseudo-random model (`PR`). Nothing here
//! checks domain invariants; that is the engine's job.

pub mod convert;
pub mod generator;
pub mod reader;

pub use generator::{GeneratorParams, OrderGenerator};
pub use reader::OrderReader;

use crate::config::MarketConfig;
use crate::engine::entry::OrderRequest;
use std::io::BufRead;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid header at line {line}: {reason}")]
    Header { line: usize, reason: String },

    #[error("mode must be PR or TL, found `{0}`")]
    UnknownMode(String),

    #[error("invalid order at line {line}: `{text}`")]
    Order { line: usize, text: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    TraceList,
    PseudoRandom(GeneratorParams),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub comment: String,
    pub mode: InputMode,
    pub num_traders: u32,
    pub num_equities: u32,
}

impl Header {
    pub fn market_config(&self) -> MarketConfig {
        MarketConfig::new(self.num_equities, self.num_traders)
    }

    /// Number of lines the header occupies.
    pub fn line_count(&self) -> usize {
        match self.mode {
            InputMode::TraceList => 4,
            InputMode::PseudoRandom(_) => 7,
        }
    }
}

struct HeaderLines<'a, R> {
    reader: &'a mut R,
    line: usize,
}

impl<'a, R: BufRead> HeaderLines<'a, R> {
    fn next_line(&mut self) -> Result<String, InputError> {
        let mut buf = String::new();
        self.line += 1;
        if self.reader.read_line(&mut buf)? == 0 {
            return Err(self.error("unexpected end of input"));
        }
        Ok(buf.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Reads a `LABEL: value` line.
    fn field(&mut self, label: &str) -> Result<String, InputError> {
        let text = self.next_line()?;
        let mut parts = text.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(found), Some(value), None) if found.trim_end_matches(':') == label => {
                Ok(value.to_string())
            }
            _ => Err(self.error(&format!("expected `{}: <value>`, found `{}`", label, text))),
        }
    }

    fn number<T: FromStr>(&mut self, label: &str) -> Result<T, InputError> {
        let value = self.field(label)?;
        value
            .parse()
            .map_err(|_| self.error(&format!("{} is not a valid number: `{}`", label, value)))
    }

    fn error(&self, reason: &str) -> InputError {
        InputError::Header {
            line: self.line,
            reason: reason.to_string(),
        }
    }
}

pub fn read_header<R: BufRead>(reader: &mut R) -> Result<Header, InputError> {
    let mut lines = HeaderLines { reader, line: 0 };
    let comment = lines.next_line()?;
    let mode = lines.field("MODE")?;
    let num_traders = lines.number("NUM_TRADERS")?;
    let num_equities = lines.number("NUM_STOCKS")?;

    let mode = match mode.as_str() {
        "TL" => InputMode::TraceList,
        "PR" => {
            let params = GeneratorParams {
                seed: lines.number("RANDOM_SEED")?,
                num_orders: lines.number("NUMBER_OF_ORDERS")?,
                arrival_rate: lines.number("ARRIVAL_RATE")?,
            };
            if params.arrival_rate == 0 {
                return Err(lines.error("ARRIVAL_RATE must be positive"));
            }
            InputMode::PseudoRandom(params)
        }
        other => return Err(InputError::UnknownMode(other.to_string())),
    };

    Ok(Header {
        comment,
        mode,
        num_traders,
        num_equities,
    })
}

/// The day's orders, whichever way they are produced.
pub enum OrderSource<R> {
    Trace(OrderReader<R>),
    Generated(OrderGenerator),
}

impl<R: BufRead> OrderSource<R> {
    /// Reads the header from `reader` and prepares the matching source.
    pub fn open(mut reader: R) -> Result<(Header, OrderSource<R>), InputError> {
        let header = read_header(&mut reader)?;
        let source = match header.mode {
            InputMode::TraceList => {
                OrderSource::Trace(OrderReader::new(reader, header.line_count()))
            }
            InputMode::PseudoRandom(params) => OrderSource::Generated(OrderGenerator::new(
                params,
                header.num_traders,
                header.num_equities,
            )),
        };
        Ok((header, source))
    }
}

impl<R: BufRead> Iterator for OrderSource<R> {
    type Item = Result<OrderRequest, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            OrderSource::Trace(reader) => reader.next(),
            OrderSource::Generated(generator) => generator.next().map(Ok),
        }
    }
}
