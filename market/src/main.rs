use anyhow::Context;
use clap::Parser;
use market::config::RuntimeConfig;
use market::input::{convert, InputMode, OrderSource};
use market::report::{ConsoleReport, ReportOptions};
use market::session;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// market - an electronic stock exchange simulator
///
/// Reads buy and sell orders for a set of stocks as they arrive and matches
/// buyers with sellers under price-time priority.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Print every trade as it executes
    #[arg(short, long)]
    verbose: bool,

    /// Print the median match price of each stock at every timestamp change
    #[arg(short, long)]
    median: bool,

    /// Print each trader's totals at the end of the day
    #[arg(short = 'i', long)]
    trader_info: bool,

    /// Print the best single buy-then-sell of each stock at the end of the day
    #[arg(short, long)]
    time_travelers: bool,

    /// Convert a PR input into the equivalent TL input instead of trading
    #[arg(short, long)]
    pr_to_tl: bool,

    /// Print the end-of-day summary as JSON
    #[arg(long)]
    json: bool,

    /// Runtime config file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Order file; standard input when omitted
    input: Option<PathBuf>,
}

impl Args {
    fn report_options(&self, config: &RuntimeConfig) -> ReportOptions {
        let defaults = ReportOptions::from(config);
        ReportOptions {
            verbose: self.verbose || defaults.verbose,
            median: self.median || defaults.median,
            trader_info: self.trader_info || defaults.trader_info,
            time_travelers: self.time_travelers || defaults.time_travelers,
            json: self.json || defaults.json,
        }
    }
}

fn open_input(path: Option<&PathBuf>) -> anyhow::Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open input file {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = RuntimeConfig::from_toml(&args.config);
    let options = args.report_options(&config);

    let (header, source) = OrderSource::open(open_input(args.input.as_ref())?)
        .context("failed to read the input header")?;
    log::info!(
        "{} input: {} traders, {} stocks",
        match header.mode {
            InputMode::TraceList => "TL",
            InputMode::PseudoRandom(_) => "PR",
        },
        header.num_traders,
        header.num_equities
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let source = match source {
        OrderSource::Generated(generator) if args.pr_to_tl => {
            convert::write_trace_list(&header, generator, &mut out)
                .context("failed to write the converted trace list")?;
            return Ok(());
        }
        source => {
            if args.pr_to_tl {
                log::warn!("--pr-to-tl only applies to PR input; running the market instead");
            }
            source
        }
    };

    let mut report = ConsoleReport::new(&mut out, options);
    report.start()?;
    let result = session::run_day(header.market_config(), source, &mut report)
        .and_then(|summary| report.end_of_day(&summary).map_err(anyhow::Error::from));
    // keep whatever was reported before a failure
    drop(report);
    out.flush()?;
    result
}

fn main() -> ExitCode {
    env_logger::try_init().unwrap_or_default();
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("ERROR: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
