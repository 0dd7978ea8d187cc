use clap::Parser;
use montecarlo::estimate_threaded;

/// Thread-team Monte Carlo estimation of pi: workers own private counters
/// and merge them into one shared accumulator with an atomic add.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// number of random samples, split across the workers
    #[arg(default_value_t = 10_000_000)]
    samples: u64,

    /// number of worker threads (defaults to the available cores)
    #[arg(long)]
    workers: Option<usize>,

    /// base seed for the per-worker sample streams
    #[arg(long, default_value_t = 0x5eed)]
    seed: u64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let workers = args.workers.unwrap_or_else(|| {
        std::thread::available_parallelism().map_or(1, |n| n.get())
    });
    if workers == 0 {
        log::error!("at least one worker required");
        std::process::exit(1);
    }

    let start_time = std::time::Instant::now();
    let estimate = estimate_threaded(args.samples, workers, args.seed);
    let elapsed = start_time.elapsed();

    println!(
        "pi-threads: N={} hits={} pi≈{:.10} time={:.3}s (workers={})",
        estimate.samples,
        estimate.hits,
        estimate.pi,
        elapsed.as_secs_f64(),
        workers
    );
}
