use comm::{block_partition, CommError, Endpoint};

/// Dense test matrix A[i][j] = ((i + j) mod n) + 1.
#[inline]
pub fn matrix_entry(n: usize, i: usize, j: usize) -> f64 {
    (((i + j) % n) + 1) as f64
}

/// Input vector u = (1, 2, ..., n).
pub fn input_vector(n: usize) -> Vec<f64> {
    (1..=n).map(|v| v as f64).collect()
}

/// Reference product v = A u on one rank.
pub fn matvec_sequential(n: usize) -> Vec<f64> {
    let u = input_vector(n);
    (0..n)
        .map(|i| (0..n).map(|j| matrix_entry(n, i, j) * u[j]).sum())
        .collect()
}

/// Row-block distributed product: every rank computes its block of rows
/// against the full input vector, then the full result is reconstructed on
/// every rank with an allgather. Uneven `n` follows the usual remainder rule.
pub fn matvec_rows(ep: &mut Endpoint<f64>, n: usize) -> Result<Vec<f64>, CommError> {
    let (counts, displs) = block_partition(n, ep.world_size());
    let rank = ep.world_rank();
    let u = input_vector(n);

    let first = displs[rank];
    let local: Vec<f64> = (first..first + counts[rank])
        .map(|i| (0..n).map(|j| matrix_entry(n, i, j) * u[j]).sum())
        .collect();

    let parts = ep.allgather(local)?;
    Ok(parts.concat())
}
