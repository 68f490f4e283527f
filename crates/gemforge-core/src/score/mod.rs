//! Score type for ranking gem combinations
//!
//! Efficiency is immutable and implements the arithmetic the searches need
//! (addition for running totals, total ordering for ranking).

mod efficiency;

pub use efficiency::Efficiency;
