use comm::{CommError, Endpoint, Ring, Tag};

const TOKEN_TAG: Tag = 0;

/// Pass an incrementing counter strictly around the ring, visiting every
/// rank exactly once. The origin initializes the counter to zero and finally
/// receives it back as `Some(world_size - 1)`, one increment per other
/// participant. Every other rank returns `None`.
pub fn ring_relay(ep: &mut Endpoint<u64>, origin: usize) -> Result<Option<u64>, CommError> {
    let ring = Ring::new(ep.world_size());
    let next = ring.successor(ep.world_rank());
    let prev = ring.predecessor(ep.world_rank());

    if ep.world_rank() == origin {
        ep.send(next, TOKEN_TAG, vec![0])?;
        let token = ep.recv(prev, TOKEN_TAG)?;
        Ok(Some(token[0]))
    } else {
        let token = ep.recv(prev, TOKEN_TAG)?;
        ep.send(next, TOKEN_TAG, vec![token[0] + 1])?;
        Ok(None)
    }
}
