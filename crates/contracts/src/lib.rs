//! Wire contracts shared by the tax advisor frontend and its HTTP backend.

pub mod domain;
pub mod shared;
