//! Console Report
//!
//! Renders engine events and the end-of-day summary as the market's text
//! report, or the summary as JSON.

use crate::config::RuntimeConfig;
use crate::engine::data::TradeOpportunity;
use crate::engine::entry::Trade;
use crate::engine::events::MarketObserver;
use crate::engine::matchengine::DaySummary;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    pub verbose: bool,
    pub median: bool,
    pub trader_info: bool,
    pub time_travelers: bool,
    pub json: bool,
}

impl From<&RuntimeConfig> for ReportOptions {
    fn from(config: &RuntimeConfig) -> Self {
        Self {
            verbose: config.verbose,
            median: config.median,
            trader_info: config.trader_info,
            time_travelers: config.time_travelers,
            json: config.json,
        }
    }
}

pub struct ConsoleReport<W: Write> {
    out: W,
    options: ReportOptions,
    /// First write failure seen inside an observer hook.
    failure: Option<io::Error>,
}

impl<W: Write> ConsoleReport<W> {
    pub fn new(out: W, options: ReportOptions) -> Self {
        Self {
            out,
            options,
            failure: None,
        }
    }

    pub fn start(&mut self) -> io::Result<()> {
        writeln!(self.out, "Processing orders...")
    }

    pub fn end_of_day(&mut self, summary: &DaySummary) -> io::Result<()> {
        if let Some(e) = self.failure.take() {
            return Err(e);
        }
        if self.options.json {
            serde_json::to_writer_pretty(&mut self.out, summary)?;
            writeln!(self.out)?;
            return self.out.flush();
        }

        writeln!(self.out, "---End of Day---")?;
        writeln!(self.out, "Trades Completed: {}", summary.trades_completed)?;

        if self.options.trader_info {
            writeln!(self.out, "---Trader Info---")?;
            for account in &summary.traders {
                writeln!(
                    self.out,
                    "Trader {} bought {} and sold {} for a net transfer of ${}",
                    account.trader, account.bought, account.sold, account.net_transfer
                )?;
            }
        }

        if self.options.time_travelers {
            writeln!(self.out, "---Time Travelers---")?;
            for entry in &summary.opportunities {
                match entry.opportunity {
                    TradeOpportunity::Profitable { buy, sell } => writeln!(
                        self.out,
                        "A time traveler would buy Stock {} at time {} for ${} and sell it at time {} for ${}",
                        entry.equity, buy.timestamp, buy.price, sell.timestamp, sell.price
                    )?,
                    TradeOpportunity::Unprofitable => writeln!(
                        self.out,
                        "A time traveler could not make a profit on Stock {}",
                        entry.equity
                    )?,
                }
            }
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn keep(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            self.failure.get_or_insert(e);
        }
    }
}

impl<W: Write> MarketObserver for ConsoleReport<W> {
    fn on_trade(&mut self, trade: &Trade) {
        if !self.options.verbose {
            return;
        }
        let result = writeln!(
            self.out,
            "Trader {} purchased {} shares of Stock {} from Trader {} for ${}/share",
            trade.buyer, trade.quantity, trade.equity, trade.seller, trade.price
        );
        self.keep(result);
    }

    fn on_median(&mut self, equity: u32, timestamp: i64, median: i64) {
        if !self.options.median {
            return;
        }
        let result = writeln!(
            self.out,
            "Median match price of Stock {} at time {} is ${}",
            equity, timestamp, median
        );
        self.keep(result);
    }
}
