//! Driver plumbing re-exported for hosts that implement their own store
//! adapter or wrap an existing one.

pub use skiff_core::driver::{
    operation::{self, Operation},
    Capability, Connection, Dialect, Driver, Response, Rows,
};
