use std::collections::VecDeque;
use std::sync::{Arc, Barrier};

use crossbeam::channel::{Receiver, Sender};

use crate::{CommError, ROOT_RANK};

/// Message tag, separating concurrent exchanges between the same pair.
/// `Tag::MAX` is reserved for the collective operations.
pub type Tag = u32;

pub(crate) const COLL_TAG: Tag = Tag::MAX;

pub(crate) struct Packet<M> {
    pub from: usize,
    pub tag: Tag,
    pub data: Vec<M>,
}

/// Per-participant handle to a fixed-size group.
///
/// Assumptions
/// 1. Every rank owns exactly one endpoint, on its own thread.
/// 2. Sends are buffered and return immediately; receives block until a
///    message matching (source, tag) arrives. Out-of-order arrivals are
///    parked, never dropped or reordered within a (source, tag) pair.
/// 3. The barrier releases only once every rank of the group arrives.
pub struct Endpoint<M> {
    world_size: usize,
    world_rank: usize,
    peers: Vec<Sender<Packet<M>>>,
    mailbox: Receiver<Packet<M>>,
    parked: VecDeque<Packet<M>>,
    barrier: Arc<Barrier>,
}

impl<M: Send> Endpoint<M> {
    pub(crate) fn new(
        world_size: usize,
        world_rank: usize,
        peers: Vec<Sender<Packet<M>>>,
        mailbox: Receiver<Packet<M>>,
        barrier: Arc<Barrier>,
    ) -> Self {
        Self {
            world_size,
            world_rank,
            peers,
            mailbox,
            parked: VecDeque::new(),
            barrier,
        }
    }

    #[inline(always)]
    pub fn world_size(&self) -> usize {
        self.world_size
    }

    #[inline(always)]
    pub fn world_rank(&self) -> usize {
        self.world_rank
    }

    #[inline(always)]
    pub fn is_root(&self) -> bool {
        self.world_rank == ROOT_RANK
    }

    /// Buffered send to `to`; a rank may send to itself.
    pub fn send(&self, to: usize, tag: Tag, data: Vec<M>) -> Result<(), CommError> {
        let sender = self.peers.get(to).ok_or(CommError::UnknownRank {
            rank: to,
            world_size: self.world_size,
        })?;
        sender
            .send(Packet {
                from: self.world_rank,
                tag,
                data,
            })
            .map_err(|_| CommError::Disconnected)
    }

    /// Block until a message from `from` with tag `tag` arrives.
    pub fn recv(&mut self, from: usize, tag: Tag) -> Result<Vec<M>, CommError> {
        if from >= self.world_size {
            return Err(CommError::UnknownRank {
                rank: from,
                world_size: self.world_size,
            });
        }
        self.recv_where(|p| p.from == from && p.tag == tag)
            .map(|p| p.data)
    }

    /// Block until a message with tag `tag` arrives from any rank.
    pub fn recv_any(&mut self, tag: Tag) -> Result<(usize, Vec<M>), CommError> {
        self.recv_where(|p| p.tag == tag).map(|p| (p.from, p.data))
    }

    /// Block until any message from `from` arrives, whatever its tag.
    pub fn recv_from(&mut self, from: usize) -> Result<(Tag, Vec<M>), CommError> {
        if from >= self.world_size {
            return Err(CommError::UnknownRank {
                rank: from,
                world_size: self.world_size,
            });
        }
        self.recv_where(|p| p.from == from).map(|p| (p.tag, p.data))
    }

    /// Paired exchange: send `data` to `to`, then block on a message from
    /// `from` with the same tag.
    pub fn sendrecv(
        &mut self,
        to: usize,
        from: usize,
        tag: Tag,
        data: Vec<M>,
    ) -> Result<Vec<M>, CommError> {
        self.send(to, tag, data)?;
        self.recv(from, tag)
    }

    /// Wait until every rank of the group arrives.
    pub fn barrier(&self) {
        self.barrier.wait();
    }

    fn recv_where(
        &mut self,
        matches: impl Fn(&Packet<M>) -> bool,
    ) -> Result<Packet<M>, CommError> {
        if let Some(i) = self.parked.iter().position(|p| matches(p)) {
            // parked packets keep arrival order within a (source, tag) pair
            return Ok(self.parked.remove(i).expect("index from position"));
        }
        loop {
            let packet = self.mailbox.recv().map_err(|_| CommError::Disconnected)?;
            if matches(&packet) {
                return Ok(packet);
            }
            self.parked.push_back(packet);
        }
    }
}
