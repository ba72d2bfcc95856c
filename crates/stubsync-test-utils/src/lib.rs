//! Shared test utilities for the stubsync workspace.
//!
//! This crate provides the [`StubTree`] fixture builder to eliminate
//! duplicated stub-tree setup across crate test suites. It is a
//! dev-dependency only — never published.

pub mod tree;

pub use tree::StubTree;
