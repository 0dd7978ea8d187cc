use clap::Parser;
use comm::{Endpoint, Group, root_println};
use workloads::life::{population, random_grid, run_distributed};

/// Toroidal game of life, rows block-partitioned across the group with ghost
/// rows exchanged between ring neighbors every generation.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// number of generations to run
    #[arg(default_value_t = 100)]
    generations: usize,

    /// number of participants
    #[arg(long, default_value_t = 4)]
    np: usize,

    /// grid width
    #[arg(long, default_value_t = 128)]
    width: usize,

    /// grid height
    #[arg(long, default_value_t = 128)]
    height: usize,

    /// seed for the initial grid
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
    if args.height < args.np || args.width == 0 {
        log::error!(
            "grid of {} rows cannot be split over {} participants",
            args.height,
            args.np
        );
        std::process::exit(1);
    }

    group.launch(|mut ep: Endpoint<u8>| {
        let grid = ep
            .is_root()
            .then(|| random_grid(args.width, args.height, args.seed));
        ep.barrier();
        let start_time = std::time::Instant::now();
        let finished = match run_distributed(&mut ep, args.width, grid, args.generations) {
            Ok(finished) => finished,
            Err(err) => {
                log::error!("rank {}: {err}", ep.world_rank());
                std::process::exit(1);
            }
        };
        let elapsed = start_time.elapsed();
        if let Some(finished) = finished {
            root_println!(
                ep,
                "life: {}x{} generations={} alive={} time={:.3}s (np={})",
                args.width,
                args.height,
                args.generations,
                population(&finished),
                elapsed.as_secs_f64(),
                ep.world_size()
            );
        }
    });
}
