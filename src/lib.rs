//! casechain - ordered test-case registry with cumulative setup replay
//!
//! Register cases in order; each case may contribute a shared setup step
//! replayed for itself and every later case, an own setup step applied only
//! to itself, and an assertion payload handed back untouched. Building the
//! fixture for a case starts from fresh `Default` values and replays the
//! setup chain up to that case.
//!
//! # Quick Start
//!
//! ```
//! use casechain::CaseRegistry;
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Flags { x: i32, y: i32 }
//!
//! let mut registry: CaseRegistry<(), Flags> = CaseRegistry::new();
//! registry.register("A").with_shared_setup(|_, _, s| s.x = 1);
//! registry
//!     .register("B")
//!     .with_shared_setup(|_, _, s| s.x = 2)
//!     .with_own_setup(|_, _, s| s.y = 10);
//!
//! assert_eq!(registry.build(0).unwrap().state, Flags { x: 1, y: 0 });
//! assert_eq!(registry.build(1).unwrap().state, Flags { x: 2, y: 10 });
//! ```
//!
//! # Architecture
//!
//! Everything lives in `casechain-core`; this crate re-exports its public
//! API. Running cases and checking assertions is left to the test runner.

// Re-export the public API from casechain-core
pub use casechain_core::*;
