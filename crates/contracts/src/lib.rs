//! Shared, target-independent core of the campaign console.
//!
//! Everything here compiles for both the host and `wasm32`, so the CRUD
//! reducer, the reference resolver and the budget evaluator are unit-tested
//! without a browser.

pub mod domain;
pub mod shared;
