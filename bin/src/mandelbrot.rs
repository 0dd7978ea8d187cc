use clap::Parser;
use comm::{Endpoint, Group, root_println};
use workloads::mandelbrot::{MandelbrotSet, render_master_worker};

/// Master/worker Mandelbrot rendering: the coordinator deals out rows to the
/// workers and assembles the image.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// image width and height in pixels
    #[arg(default_value_t = 256)]
    size: usize,

    /// number of participants (one coordinator plus workers)
    #[arg(long, default_value_t = 4)]
    np: usize,

    /// escape-time iteration cap
    #[arg(long, default_value_t = 50)]
    max_iter: u32,
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

    let set = MandelbrotSet::new(args.max_iter, 10.0);

    group.launch(|mut ep: Endpoint<f64>| {
        ep.barrier();
        let start_time = std::time::Instant::now();
        let image = match render_master_worker(&mut ep, &set, args.size, args.size) {
            Ok(image) => image,
            Err(err) => {
                log::error!("rank {}: {err}", ep.world_rank());
                std::process::exit(1);
            }
        };
        let elapsed = start_time.elapsed();
        if let Some(image) = image {
            let pixels = (args.size * args.size) as f64;
            let mean: f64 = image.iter().flatten().sum::<f64>() / pixels;
            root_println!(
                ep,
                "mandelbrot: {}x{} mean-shade={:.6} time={:.3}s (np={})",
                args.size,
                args.size,
                mean,
                elapsed.as_secs_f64(),
                ep.world_size()
            );
        }
    });
}
