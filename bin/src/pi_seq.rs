use clap::Parser;
use montecarlo::estimate_sequential;

/// Sequential Monte Carlo estimation of pi.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// number of random samples
    #[arg(default_value_t = 10_000_000)]
    samples: u64,

    /// base seed for the sample stream
    #[arg(long, default_value_t = 0x5eed)]
    seed: u64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let start_time = std::time::Instant::now();
    let estimate = estimate_sequential(args.samples, args.seed);
    let elapsed = start_time.elapsed();

    println!(
        "pi-seq: N={} hits={} pi≈{:.10} time={:.3}s",
        estimate.samples,
        estimate.hits,
        estimate.pi,
        elapsed.as_secs_f64()
    );
}
