use super::{Header, OrderGenerator};
use std::io::{self, Write};

/// Writes a pseudo-random day out as a trace list that replays it exactly.
pub fn write_trace_list<W: Write>(
    header: &Header,
    orders: OrderGenerator,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "{}", header.comment)?;
    writeln!(out, "MODE: TL")?;
    writeln!(out, "NUM_TRADERS: {}", header.num_traders)?;
    writeln!(out, "NUM_STOCKS: {}", header.num_equities)?;
    for order in orders {
        writeln!(out, "{}", order)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{GeneratorParams, InputMode, OrderSource};
    use std::io::Cursor;

    #[test]
    fn test_converted_trace_replays_generator() {
        let params = GeneratorParams {
            seed: 42,
            num_orders: 25,
            arrival_rate: 3,
        };
        let header = Header {
            comment: "generated day".to_string(),
            mode: InputMode::PseudoRandom(params),
            num_traders: 3,
            num_equities: 2,
        };

        let mut out = Vec::new();
        write_trace_list(&header, OrderGenerator::new(params, 3, 2), &mut out).unwrap();

        let (replayed, source) = OrderSource::open(Cursor::new(out)).unwrap();
        assert_eq!(replayed.mode, InputMode::TraceList);
        assert_eq!(replayed.comment, "generated day");
        let orders: Vec<_> = source.collect::<Result<Vec<_>, _>>().unwrap();
        let expected: Vec<_> = OrderGenerator::new(params, 3, 2).collect();
        assert_eq!(orders, expected);
    }
}
