use clap::Parser;
use comm::{Endpoint, Group, root_println};
use montecarlo::estimate_distributed;

/// Distributed Monte Carlo estimation of pi over a fixed participant group:
/// partial counts are collected at the coordinator, which computes and
/// distributes the final estimate.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// total number of samples, split across the group
    #[arg(default_value_t = 10_000_000)]
    samples: u64,

    /// number of participants
    #[arg(long, default_value_t = 4)]
    np: usize,

    /// base seed for the per-participant sample streams
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
        ep.barrier(); // wait until everyone is here
        let start_time = std::time::Instant::now();
        let estimate = match estimate_distributed(&mut ep, args.samples, args.seed) {
            Ok(estimate) => estimate,
            Err(err) => {
                log::error!("rank {}: {err}", ep.world_rank());
                std::process::exit(1);
            }
        };
        let elapsed = start_time.elapsed();
        root_println!(
            ep,
            "pi-group: N={} hits={} pi≈{:.10} time={:.3}s (np={})",
            estimate.samples,
            estimate.hits,
            estimate.pi,
            elapsed.as_secs_f64(),
            ep.world_size()
        );
    });
}
