use super::InputError;
use crate::engine::entry::{OrderRequest, OrderSide};
use once_cell::sync::Lazy;
use regex::Regex;
use std::io::BufRead;
use std::str::FromStr;

static ORDER_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(-?\d+)\s+(BUY|SELL)\s+T(\d+)\s+S(\d+)\s+\$(-?\d+)\s+#(-?\d+)\s*$")
        .expect("order line pattern is valid")
});

/// Parses one trace-list line: `<timestamp> <BUY|SELL> T<trader> S<equity> $<price> #<quantity>`.
pub fn parse_order(text: &str) -> Option<OrderRequest> {
    let caps = ORDER_LINE.captures(text)?;
    let side = match &caps[2] {
        "BUY" => OrderSide::Buy,
        _ => OrderSide::Sell,
    };
    Some(OrderRequest::new(
        number(&caps[1])?,
        side,
        number(&caps[3])?,
        number(&caps[4])?,
        number(&caps[5])?,
        number(&caps[6])?,
    ))
}

fn number<T: FromStr>(text: &str) -> Option<T> {
    text.parse().ok()
}

/// Streams orders from a trace list, one line at a time.
pub struct OrderReader<R> {
    reader: R,
    line: usize,
    buf: String,
}

impl<R: BufRead> OrderReader<R> {
    /// `lines_consumed` is how many lines precede the first order, so errors
    /// can name the right line.
    pub fn new(reader: R, lines_consumed: usize) -> Self {
        Self {
            reader,
            line: lines_consumed,
            buf: String::new(),
        }
    }
}

impl<R: BufRead> Iterator for OrderReader<R> {
    type Item = Result<OrderRequest, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(InputError::Io(e))),
            }
            self.line += 1;

            let text = self.buf.trim();
            if text.is_empty() {
                continue;
            }
            return Some(parse_order(text).ok_or_else(|| InputError::Order {
                line: self.line,
                text: text.to_string(),
            }));
        }
    }
}
