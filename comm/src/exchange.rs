use crate::endpoint::COLL_TAG;
use crate::{CommError, Endpoint, Hypercube};

/// Propagate `data` from `origin` to every rank of the cube in
/// `cube.dimension()` rounds of XOR-partner exchanges.
///
/// Round `s`: a rank holding the value sends a copy to its dimension-`s`
/// partner; a rank whose partner holds it blocks on the receive; every rank
/// reaches a barrier before the next round starts. Pairs where neither side
/// holds the value yet go straight to the barrier. Holder bookkeeping is
/// local: after round `s`, the holders are exactly the ranks within
/// XOR-distance `2^(s+1)` of the origin.
///
/// Non-origin callers' `data` argument is ignored. Every rank returns the
/// origin's payload.
pub fn hypercube_broadcast<M: Send + Clone>(
    ep: &mut Endpoint<M>,
    cube: &Hypercube,
    origin: usize,
    data: Vec<M>,
) -> Result<Vec<M>, CommError> {
    cube.validate(ep.world_size())?;
    let relative = ep.world_rank() ^ origin;
    let mut held = if relative == 0 { Some(data) } else { None };
    for s in 0..cube.dimension() {
        let bit = 1usize << s;
        let partner = cube.partner(ep.world_rank(), s);
        if relative < bit {
            let copy = held.as_ref().expect("holder invariant").clone();
            ep.send(partner, COLL_TAG, copy)?;
        } else if relative < bit << 1 {
            held = Some(ep.recv(partner, COLL_TAG)?);
        }
        ep.barrier();
    }
    Ok(held.expect("every rank holds the value after the last round"))
}

/// The mirror of [`hypercube_broadcast`]: fold every rank's contribution back
/// to `origin` in `cube.dimension()` rounds, pairing along the dimensions in
/// reverse order. Returns `Some` of the element-wise fold at the origin,
/// `None` everywhere else.
pub fn hypercube_reduce<M, F>(
    ep: &mut Endpoint<M>,
    cube: &Hypercube,
    origin: usize,
    data: Vec<M>,
    op: F,
) -> Result<Option<Vec<M>>, CommError>
where
    M: Send + Clone,
    F: Fn(&M, &M) -> M,
{
    cube.validate(ep.world_size())?;
    let relative = ep.world_rank() ^ origin;
    let mut acc = data;
    for s in (0..cube.dimension()).rev() {
        let bit = 1usize << s;
        let partner = cube.partner(ep.world_rank(), s);
        if relative < bit {
            let incoming = ep.recv(partner, COLL_TAG)?;
            debug_assert_eq!(acc.len(), incoming.len());
            for (a, b) in acc.iter_mut().zip(&incoming) {
                *a = op(a, b);
            }
        } else if relative < bit << 1 {
            ep.send(partner, COLL_TAG, std::mem::take(&mut acc))?;
        }
        ep.barrier();
    }
    Ok(if relative == 0 { Some(acc) } else { None })
}
