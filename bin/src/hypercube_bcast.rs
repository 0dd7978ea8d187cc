use clap::Parser;
use comm::{Endpoint, Group, Hypercube, ROOT_RANK, hypercube_broadcast, hypercube_reduce, root_println};

const TOKEN: u64 = 42;

/// Hypercube token exchange: propagate a token from one holder to all
/// 2^d participants in d rounds, then fold an acknowledgement back.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// hypercube dimension d; the group has 2^d participants
    #[arg(value_parser = clap::value_parser!(u32).range(0..=16))]
    dimension: u32,

    /// participant count; must equal 2^d
    #[arg(long)]
    np: Option<usize>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let cube = Hypercube::new(args.dimension);
    let np = args.np.unwrap_or_else(|| cube.world_size());
    let group = match Group::hypercube(&cube, np) {
        Ok(group) => group,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    };

    group.launch(|mut ep: Endpoint<u64>| {
        ep.barrier(); // wait until everyone is here
        let start_time = std::time::Instant::now();
        let token = match hypercube_broadcast(&mut ep, &cube, ROOT_RANK, vec![TOKEN]) {
            Ok(token) => token[0],
            Err(err) => {
                log::error!("rank {}: {err}", ep.world_rank());
                std::process::exit(1);
            }
        };
        // every rank acknowledges the copy it now holds
        let copies = match hypercube_reduce(&mut ep, &cube, ROOT_RANK, vec![1], |a, b| a + b) {
            Ok(copies) => copies,
            Err(err) => {
                log::error!("rank {}: {err}", ep.world_rank());
                std::process::exit(1);
            }
        };
        let elapsed = start_time.elapsed();
        if let Some(copies) = copies {
            root_println!(
                ep,
                "hypercube-bcast: d={} token={} copies={} time={:.6}s (np={})",
                cube.dimension(),
                token,
                copies[0],
                elapsed.as_secs_f64(),
                ep.world_size()
            );
        }
    });
}
