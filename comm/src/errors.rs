use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommError {
    #[error("a group requires at least one participant")]
    EmptyGroup,

    #[error("group size {world_size} is not a power of two")]
    NotPowerOfTwo { world_size: usize },

    #[error("dimension {dimension} requires {expected} participants, got {actual}")]
    GroupSizeMismatch {
        dimension: u32,
        expected: usize,
        actual: usize,
    },

    #[error("rank {rank} is outside the group of size {world_size}")]
    UnknownRank { rank: usize, world_size: usize },

    #[error("a participant disconnected before the exchange completed")]
    Disconnected,
}
