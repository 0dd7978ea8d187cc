use std::sync::{Arc, Barrier};
use std::thread;

use crossbeam::channel;

use crate::endpoint::Packet;
use crate::{CommError, Endpoint, Hypercube};

/// Validated description of a fixed-size participant group.
///
/// Construction performs every configuration check; once a `Group` exists,
/// launching it cannot fail. The participant count is explicit (there is no
/// ambient global group).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    world_size: usize,
}

impl Group {
    pub fn new(world_size: usize) -> Result<Self, CommError> {
        if world_size == 0 {
            return Err(CommError::EmptyGroup);
        }
        Ok(Self { world_size })
    }

    /// A group shaped for `cube`: `world_size` must be the exact power of two
    /// the dimension calls for. Fails before any thread is spawned.
    pub fn hypercube(cube: &Hypercube, world_size: usize) -> Result<Self, CommError> {
        cube.validate(world_size)?;
        Self::new(world_size)
    }

    #[inline(always)]
    pub fn world_size(&self) -> usize {
        self.world_size
    }

    /// Run one participant per rank, each on its own OS thread, and return
    /// their results in rank order.
    ///
    /// Participants block on receives and barriers for unbounded time, so
    /// they get dedicated threads rather than a slot in a bounded pool.
    pub fn launch<M, T, F>(&self, per_rank: F) -> Vec<T>
    where
        M: Send,
        T: Send,
        F: Fn(Endpoint<M>) -> T + Sync,
    {
        let per_rank = &per_rank;
        thread::scope(|s| {
            let handles: Vec<_> = self
                .endpoints()
                .into_iter()
                .map(|ep| s.spawn(move || per_rank(ep)))
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().expect("participant thread panicked"))
                .collect()
        })
    }

    fn endpoints<M: Send>(&self) -> Vec<Endpoint<M>> {
        let (senders, mailboxes): (Vec<_>, Vec<_>) = (0..self.world_size)
            .map(|_| channel::unbounded::<Packet<M>>())
            .unzip();
        let barrier = Arc::new(Barrier::new(self.world_size));
        mailboxes
            .into_iter()
            .enumerate()
            .map(|(rank, mailbox)| {
                Endpoint::new(
                    self.world_size,
                    rank,
                    senders.clone(),
                    mailbox,
                    barrier.clone(),
                )
            })
            .collect()
    }
}
