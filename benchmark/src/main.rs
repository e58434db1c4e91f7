use anyhow::Context;
use clap::Parser;
use hdrhistogram::Histogram;
use market::engine::{MatchEngine, NoopObserver};
use market::input::{GeneratorParams, OrderGenerator};
use market::MarketConfig;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of orders to generate
    #[arg(short, long, default_value = "1000000")]
    orders: u64,

    /// Number of stocks
    #[arg(short, long, default_value = "10")]
    equities: u32,

    /// Number of traders
    #[arg(short, long, default_value = "100")]
    traders: u32,

    /// Random seed
    #[arg(short, long, default_value = "1")]
    seed: u64,

    /// Mean orders per timestamp
    #[arg(short, long, default_value = "20")]
    arrival_rate: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::try_init().unwrap_or_default();
    let args = Args::parse();
    anyhow::ensure!(args.arrival_rate > 0, "arrival rate must be positive");

    let params = GeneratorParams {
        seed: args.seed,
        num_orders: args.orders,
        arrival_rate: args.arrival_rate,
    };
    let orders: Vec<_> = OrderGenerator::new(params, args.traders, args.equities).collect();
    println!(
        "Starting benchmark with {} orders, {} stocks, {} traders",
        orders.len(),
        args.equities,
        args.traders
    );

    let mut histogram = Histogram::<u64>::new(3).context("failed to create histogram")?;
    let mut engine = MatchEngine::new(MarketConfig::new(args.equities, args.traders));
    let mut observer = NoopObserver;

    let start = Instant::now();
    for order in &orders {
        let submitted = Instant::now();
        engine
            .submit(order, &mut observer)
            .with_context(|| format!("generated order `{}` rejected", order))?;
        histogram.record(submitted.elapsed().as_nanos() as u64)?;
    }
    let elapsed = start.elapsed();
    let summary = engine.close(&mut observer);

    println!("Benchmark completed:");
    println!("Total orders: {}", summary.orders_admitted);
    println!("Total trades: {}", summary.trades_completed);
    println!("Duration: {:.2?}", elapsed);
    println!(
        "Throughput: {:.0} orders/sec",
        summary.orders_admitted as f64 / elapsed.as_secs_f64().max(f64::EPSILON)
    );
    println!("Latency statistics (ns):");
    println!("  p50: {}", histogram.value_at_quantile(0.50));
    println!("  p99: {}", histogram.value_at_quantile(0.99));
    println!("  p99.9: {}", histogram.value_at_quantile(0.999));
    println!("  max: {}", histogram.max());
    Ok(())
}
