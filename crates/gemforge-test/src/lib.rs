//! Shared test fixtures for GemForge crates.
//!
//! - [`gems`] - gem builders with readable defaults
//! - [`slots`] - slot request and allocation request helpers
//! - [`pools`] - small sample pools with known optima
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! gemforge-test = { workspace = true }
//! ```
//!
//! ```
//! use gemforge_test::gems::GemBuilder;
//! use gemforge_core::OptionKind;
//!
//! let gem = GemBuilder::order(1).willpower(4).core_point(5).option(OptionKind::Attack, 3).build();
//! assert_eq!(gem.willpower, 4);
//! ```

pub mod gems;
pub mod pools;
pub mod slots;

pub use gems::{chaos_gem, order_gem, GemBuilder};
pub use slots::{request_for, slot};
