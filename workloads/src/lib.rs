//! Exchange patterns over a fixed participant group: the ring token relay,
//! row-distributed matrix-vector product, master/worker mandelbrot
//! scheduling, distributed bucket sort and toroidal game of life.
//!
//! Every pattern takes the group endpoint as an argument and comes with a
//! sequential reference implementation used by the tests.

pub mod bucket_sort;
pub mod life;
pub mod mandelbrot;
pub mod matvec;
pub mod ring;
