use crate::endpoint::COLL_TAG;
use crate::{CommError, Endpoint};

/// Collective operations, built from the point-to-point layer. All of them
/// must be entered by every rank of the group with the same `root`.
impl<M: Send + Clone> Endpoint<M> {
    /// Distribute `data` from `root` to every rank; non-root callers' `data`
    /// argument is ignored. Every rank returns the root's payload.
    pub fn broadcast(&mut self, root: usize, data: Vec<M>) -> Result<Vec<M>, CommError> {
        if self.world_rank() == root {
            for peer in (0..self.world_size()).filter(|&r| r != root) {
                self.send(peer, COLL_TAG, data.clone())?;
            }
            Ok(data)
        } else {
            self.recv(root, COLL_TAG)
        }
    }

    /// Collect every rank's payload at `root` by point-to-point receives in
    /// rank order. Returns `Some` of the rank-ordered payloads at the root,
    /// `None` everywhere else.
    pub fn gather(&mut self, root: usize, data: Vec<M>) -> Result<Option<Vec<Vec<M>>>, CommError> {
        if self.world_rank() == root {
            let mut data = Some(data);
            let mut parts = Vec::with_capacity(self.world_size());
            for rank in 0..self.world_size() {
                if rank == root {
                    parts.push(data.take().expect("own payload consumed once"));
                } else {
                    parts.push(self.recv(rank, COLL_TAG)?);
                }
            }
            Ok(Some(parts))
        } else {
            self.send(root, COLL_TAG, data)?;
            Ok(None)
        }
    }

    /// Gather-everywhere: every rank returns the rank-ordered payloads of the
    /// whole group. One broadcast per rank.
    pub fn allgather(&mut self, data: Vec<M>) -> Result<Vec<Vec<M>>, CommError> {
        let mut parts = Vec::with_capacity(self.world_size());
        for root in 0..self.world_size() {
            let payload = if root == self.world_rank() {
                data.clone()
            } else {
                Vec::new()
            };
            parts.push(self.broadcast(root, payload)?);
        }
        Ok(parts)
    }

    /// Deal out one payload per rank from `root`; non-root callers pass an
    /// empty `parts` and receive their share.
    pub fn scatter(&mut self, root: usize, parts: Vec<Vec<M>>) -> Result<Vec<M>, CommError> {
        if self.world_rank() == root {
            assert_eq!(
                parts.len(),
                self.world_size(),
                "scatter needs one payload per rank"
            );
            let mut own = Vec::new();
            for (rank, part) in parts.into_iter().enumerate() {
                if rank == root {
                    own = part;
                } else {
                    self.send(rank, COLL_TAG, part)?;
                }
            }
            Ok(own)
        } else {
            self.recv(root, COLL_TAG)
        }
    }

    /// Element-wise combine of every rank's payload at `root`. All payloads
    /// must have the same length. Returns `Some` at the root, `None` elsewhere.
    pub fn reduce<F>(&mut self, root: usize, data: Vec<M>, op: F) -> Result<Option<Vec<M>>, CommError>
    where
        F: Fn(&M, &M) -> M,
    {
        match self.gather(root, data)? {
            None => Ok(None),
            Some(parts) => {
                let mut parts = parts.into_iter();
                let mut acc = parts.next().expect("group is never empty");
                for part in parts {
                    debug_assert_eq!(acc.len(), part.len());
                    for (a, b) in acc.iter_mut().zip(&part) {
                        *a = op(a, b);
                    }
                }
                Ok(Some(acc))
            }
        }
    }
}
