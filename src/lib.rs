//! Olympia Odos toll pass calculator
//!
//! This crate computes the monthly cost of toll passes with the operator's
//! tiered volume discounts, and counts the business days of a month under
//! the Greek bank holiday calendar to derive a commuter's pass count.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
