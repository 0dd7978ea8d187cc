use clap::Parser;
use comm::{Endpoint, Group, root_println};
use workloads::bucket_sort::{bucket_sort, random_input};

/// Distributed bucket sort with one bucket per participant.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// number of values to sort
    #[arg(default_value_t = 1_000_000)]
    count: usize,

    /// number of participants (and buckets)
    #[arg(long, default_value_t = 4)]
    np: usize,

    /// seed for the input data
    #[arg(long, default_value_t = 0x5eed)]
    seed: u64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let group = match Group::new(args.np) {
        Ok(group) => group,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    };

    group.launch(|mut ep: Endpoint<f64>| {
        let input = ep.is_root().then(|| random_input(args.count, args.seed));
        ep.barrier();
        let start_time = std::time::Instant::now();
        let sorted = match bucket_sort(&mut ep, input) {
            Ok(sorted) => sorted,
            Err(err) => {
                log::error!("rank {}: {err}", ep.world_rank());
                std::process::exit(1);
            }
        };
        let elapsed = start_time.elapsed();
        if let Some(sorted) = sorted {
            let ordered = sorted.windows(2).all(|w| w[0] <= w[1]);
            root_println!(
                ep,
                "bucket-sort: n={} ordered={} time={:.3}s (np={})",
                sorted.len(),
                ordered,
                elapsed.as_secs_f64(),
                ep.world_size()
            );
        }
    });
}
