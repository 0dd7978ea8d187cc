use clap::Parser;
use comm::{Endpoint, Group, ROOT_RANK, root_println};
use workloads::ring::ring_relay;

/// Token relay around a logical ring: the origin's counter comes back with
/// one increment per other participant.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
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

    group.launch(|mut ep: Endpoint<u64>| {
        ep.barrier();
        let start_time = std::time::Instant::now();
        let token = match ring_relay(&mut ep, ROOT_RANK) {
            Ok(token) => token,
            Err(err) => {
                log::error!("rank {}: {err}", ep.world_rank());
                std::process::exit(1);
            }
        };
        let elapsed = start_time.elapsed();
        if let Some(token) = token {
            root_println!(
                ep,
                "ring-token: token={} time={:.6}s (np={})",
                token,
                elapsed.as_secs_f64(),
                ep.world_size()
            );
        }
    });
}
