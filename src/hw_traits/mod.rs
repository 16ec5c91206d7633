//! Register-level access traits the [`board`](crate::board) handles are written against.

pub mod gpio;
