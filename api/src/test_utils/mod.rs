//! Test utilities
//!
//! Hand-written port mocks and test fixtures. The port traits take `&str`
//! parameters, which mock-generation macros handle poorly; writing the two
//! mocks by hand keeps them explicit and lets them record exactly the calls
//! a test wants to assert on.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
