use clap::Parser;
use comm::{Endpoint, Group, root_println};
use workloads::matvec::matvec_rows;

/// Row-distributed matrix-vector product: every participant computes its
/// block of rows and the full result is rebuilt everywhere with an allgather.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// matrix dimension n
    #[arg(default_value_t = 120)]
    n: usize,

    /// number of participants
    #[arg(long, default_value_t = 4)]
    np: usize,
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
        ep.barrier();
        let start_time = std::time::Instant::now();
        let v = match matvec_rows(&mut ep, args.n) {
            Ok(v) => v,
            Err(err) => {
                log::error!("rank {}: {err}", ep.world_rank());
                std::process::exit(1);
            }
        };
        let elapsed = start_time.elapsed();
        let checksum: f64 = v.iter().sum();
        root_println!(
            ep,
            "matvec: n={} checksum={:.6e} time={:.6}s (np={})",
            args.n,
            checksum,
            elapsed.as_secs_f64(),
            ep.world_size()
        );
    });
}
