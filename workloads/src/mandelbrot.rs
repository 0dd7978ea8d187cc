use comm::{CommError, Endpoint, Tag, ROOT_RANK};

const TAG_WORK: Tag = 1;
const TAG_DONE: Tag = 2;
const TAG_STOP: Tag = 3;

/// Rendering window: the classic [-2, 1] x [-1.125, 1.125] view.
const X_MIN: f64 = -2.0;
const Y_MIN: f64 = -1.125;
const X_SPAN: f64 = 3.0;
const Y_SPAN: f64 = 2.25;

/// Escape-time parameters.
#[derive(Debug, Clone, Copy)]
pub struct MandelbrotSet {
    pub max_iterations: u32,
    pub escape_radius: f64,
}

impl MandelbrotSet {
    pub fn new(max_iterations: u32, escape_radius: f64) -> Self {
        Self {
            max_iterations,
            escape_radius,
        }
    }

    /// Normalized convergence in [0, 1], with smooth shading outside the set.
    pub fn convergence(&self, re: f64, im: f64) -> f64 {
        (self.count_iterations(re, im) / self.max_iterations as f64).clamp(0.0, 1.0)
    }

    fn count_iterations(&self, re: f64, im: f64) -> f64 {
        // interior shortcuts: the disk at the origin, the period-2 bulb
        // around -1, and the main cardioid
        if re * re + im * im < 0.0625 {
            return self.max_iterations as f64;
        }
        if (re + 1.0) * (re + 1.0) + im * im < 0.0625 {
            return self.max_iterations as f64;
        }
        if -0.75 < re && re < 0.5 {
            let cr = re - 0.25;
            let norm = (cr * cr + im * im).sqrt();
            if norm < 0.5 * (1.0 - cr / norm.max(1e-14)) {
                return self.max_iterations as f64;
            }
        }

        let (mut zr, mut zi) = (0.0f64, 0.0f64);
        for it in 0..self.max_iterations {
            let next_zr = zr * zr - zi * zi + re;
            zi = 2.0 * zr * zi + im;
            zr = next_zr;
            let norm = (zr * zr + zi * zi).sqrt();
            if norm > self.escape_radius {
                return it as f64 + 1.0 - norm.ln().ln() / std::f64::consts::LN_2;
            }
        }
        self.max_iterations as f64
    }

    /// One row of a `width` x `height` rendering of the window.
    pub fn render_row(&self, width: usize, height: usize, y: usize) -> Vec<f64> {
        let scale_x = X_SPAN / width as f64;
        let scale_y = Y_SPAN / height as f64;
        (0..width)
            .map(|x| self.convergence(X_MIN + scale_x * x as f64, Y_MIN + scale_y * y as f64))
            .collect()
    }

    /// Reference rendering on one rank, top row first.
    pub fn render_sequential(&self, width: usize, height: usize) -> Vec<Vec<f64>> {
        (0..height)
            .map(|y| self.render_row(width, height, y))
            .collect()
    }
}

/// Master/worker rendering: the coordinator deals out row indices with
/// `TAG_WORK`, workers answer `[y, row...]` with `TAG_DONE` (any-source
/// receive on the coordinator), and idle workers are retired with `TAG_STOP`.
/// Returns the assembled image at the coordinator, `None` on workers.
///
/// A group of one has no workers to schedule and renders directly.
pub fn render_master_worker(
    ep: &mut Endpoint<f64>,
    set: &MandelbrotSet,
    width: usize,
    height: usize,
) -> Result<Option<Vec<Vec<f64>>>, CommError> {
    if ep.world_size() == 1 {
        return Ok(Some(set.render_sequential(width, height)));
    }

    if ep.is_root() {
        let mut image = vec![Vec::new(); height];
        let mut next_row = 0usize;
        let mut active = 0usize;

        for worker in 1..ep.world_size() {
            if next_row < height {
                ep.send(worker, TAG_WORK, vec![next_row as f64])?;
                next_row += 1;
                active += 1;
            } else {
                ep.send(worker, TAG_STOP, Vec::new())?;
            }
        }

        while active > 0 {
            let (worker, mut done) = ep.recv_any(TAG_DONE)?;
            let y = done[0] as usize;
            image[y] = done.split_off(1);

            if next_row < height {
                ep.send(worker, TAG_WORK, vec![next_row as f64])?;
                next_row += 1;
            } else {
                ep.send(worker, TAG_STOP, Vec::new())?;
                active -= 1;
            }
        }

        ep.barrier();
        Ok(Some(image))
    } else {
        loop {
            let (tag, work) = ep.recv_from(ROOT_RANK)?;
            match tag {
                TAG_WORK => {
                    let y = work[0] as usize;
                    let mut reply = vec![y as f64];
                    reply.extend(set.render_row(width, height, y));
                    ep.send(ROOT_RANK, TAG_DONE, reply)?;
                }
                TAG_STOP => break,
                _ => unreachable!("unexpected tag {tag} in worker loop"),
            }
        }
        ep.barrier();
        Ok(None)
    }
}
