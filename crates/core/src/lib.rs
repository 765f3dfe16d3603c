//! Ordered case registry with cumulative setup replay
//!
//! This crate defines the building blocks of a table-driven test suite whose
//! cases share an accumulating system under test:
//! - CaseRegistry: ordered list of cases, enumerated lazily
//! - CaseHandle: fluent setters returned by registration
//! - CaseBuilder / Fixture: deferred construction and its result
//! - StepContext: what a setup step knows about the replay it runs in
//! - ReplayPlan: the steps a replay would apply, serializable for reports
//! - ReplayConfig: TOML configuration for replay diagnostics
//! - Error: error type for positional lookups and config loading
//!
//! The registry never runs tests or checks assertions itself; a test runner
//! drives it:
//!
//! ```
//! use casechain_core::CaseRegistry;
//!
//! type Check = fn(&Vec<u32>) -> bool;
//!
//! let mut registry: CaseRegistry<(), Vec<u32>, Check> = CaseRegistry::new();
//! registry
//!     .register("one item")
//!     .with_shared_setup(|_, _, items| items.push(1))
//!     .with_assertion(|items| items.len() == 1);
//! registry
//!     .register("two items")
//!     .with_shared_setup(|_, _, items| items.push(2))
//!     .with_assertion(|items| items == &vec![1, 2]);
//!
//! for (name, builder) in &registry {
//!     let fixture = builder.build();
//!     if let Some(check) = fixture.assertion {
//!         assert!(check(&fixture.state), "{} failed", name);
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod case;
pub mod config;
pub mod error;
pub mod fixture;
pub mod iter;
pub mod registry;
pub mod step;

pub use case::{CaseDescriptor, CaseHandle};
pub use config::{ReplayConfig, CONFIG_ENV_VAR, CONFIG_FILE_NAME};
pub use error::{CaseError, CaseResult};
pub use fixture::{Fixture, PlannedStep, ReplayPlan};
pub use iter::{CaseBuilder, Cases};
pub use registry::CaseRegistry;
pub use step::{SetupStep, StepContext, StepKind};
