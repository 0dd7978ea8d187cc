use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

use comm::{block_partition, CommError, Endpoint, Ring, Tag, ROOT_RANK};

// Halo rows travel in two directions around the ring of slabs; with two
// ranks both neighbors are the same peer, so the directions need distinct tags.
const TAG_DOWN: Tag = 4;
const TAG_UP: Tag = 5;

/// Random initial grid, row-major, ~30% alive.
pub fn random_grid(width: usize, height: usize, seed: u64) -> Vec<u8> {
    let mut rng = ChaCha12Rng::seed_from_u64(seed);
    (0..width * height)
        .map(|_| u8::from(rng.gen_bool(0.3)))
        .collect()
}

pub fn population(cells: &[u8]) -> usize {
    cells.iter().map(|&c| c as usize).sum()
}

/// Conway's rule for one cell.
#[inline]
fn rule(cell: u8, neighbors: u8) -> u8 {
    match (cell, neighbors) {
        (1, 2) | (1, 3) | (0, 3) => 1,
        _ => 0,
    }
}

/// Step the interior rows of `ext`, an extended slab whose first and last
/// rows are ghost rows. Columns wrap (the grid is a torus horizontally).
fn step_interior(width: usize, ext: &[u8]) -> Vec<u8> {
    let rows = ext.len() / width - 2;
    let mut next = vec![0u8; rows * width];
    for i in 0..rows {
        let above = i * width;
        let here = (i + 1) * width;
        let below = (i + 2) * width;
        for j in 0..width {
            let left = (j + width - 1) % width;
            let right = (j + 1) % width;
            let neighbors = ext[above + left]
                + ext[above + j]
                + ext[above + right]
                + ext[here + left]
                + ext[here + right]
                + ext[below + left]
                + ext[below + j]
                + ext[below + right];
            next[i * width + j] = rule(ext[here + j], neighbors);
        }
    }
    next
}

/// Reference stepper on the full toroidal grid.
pub fn step_sequential(width: usize, cells: &[u8]) -> Vec<u8> {
    debug_assert_eq!(cells.len() % width, 0);
    let mut ext = Vec::with_capacity(cells.len() + 2 * width);
    ext.extend_from_slice(&cells[cells.len() - width..]);
    ext.extend_from_slice(cells);
    ext.extend_from_slice(&cells[..width]);
    step_interior(width, &ext)
}

/// One distributed step of a row slab: exchange boundary rows with the ring
/// neighbors (paired send/receive), then apply the rule to the slab.
pub fn step_slab(ep: &mut Endpoint<u8>, width: usize, slab: &[u8]) -> Result<Vec<u8>, CommError> {
    assert!(slab.len() >= width, "every rank needs at least one row");
    let ring = Ring::new(ep.world_size());
    let prev = ring.predecessor(ep.world_rank());
    let next = ring.successor(ep.world_rank());

    // my top ghost is the previous slab's last row, my bottom ghost the next
    // slab's first row
    let last_row = slab[slab.len() - width..].to_vec();
    let first_row = slab[..width].to_vec();
    let top_ghost = ep.sendrecv(next, prev, TAG_DOWN, last_row)?;
    let bottom_ghost = ep.sendrecv(prev, next, TAG_UP, first_row)?;

    let mut ext = Vec::with_capacity(slab.len() + 2 * width);
    ext.extend_from_slice(&top_ghost);
    ext.extend_from_slice(slab);
    ext.extend_from_slice(&bottom_ghost);
    Ok(step_interior(width, &ext))
}

/// Run `generations` distributed steps: scatter row blocks from the
/// coordinator, step every slab in lockstep, gather the final grid back.
/// Returns the final grid at the coordinator, `None` elsewhere. The grid
/// must have at least one row per rank.
pub fn run_distributed(
    ep: &mut Endpoint<u8>,
    width: usize,
    grid: Option<Vec<u8>>,
    generations: usize,
) -> Result<Option<Vec<u8>>, CommError> {
    let parts = if ep.is_root() {
        let grid = grid.expect("coordinator provides the grid");
        let height = grid.len() / width;
        assert!(
            height >= ep.world_size(),
            "grid of {height} rows cannot be split over {} ranks",
            ep.world_size()
        );
        let (counts, displs) = block_partition(height, ep.world_size());
        (0..ep.world_size())
            .map(|r| grid[displs[r] * width..(displs[r] + counts[r]) * width].to_vec())
            .collect()
    } else {
        Vec::new()
    };

    let mut slab = ep.scatter(ROOT_RANK, parts)?;
    for _ in 0..generations {
        slab = step_slab(ep, width, &slab)?;
    }
    Ok(ep.gather(ROOT_RANK, slab)?.map(|slabs| slabs.concat()))
}
