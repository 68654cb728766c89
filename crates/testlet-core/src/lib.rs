//! testlet-core — testlet validation and constrained randomization.
//!
//! A [`testlet::Testlet`] is built once from a collection of
//! [`model::Item`]s checked against a [`config::TestletConfig`], then
//! randomized any number of times without being mutated.

pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod statistics;
pub mod testlet;
