//! Local intent detectors and the calculator.
//!
//! Every detector is a pure `&str -> matches` function, so none of them
//! touch the network or the log.

pub mod calculator;
pub mod expression;
pub mod translation;
