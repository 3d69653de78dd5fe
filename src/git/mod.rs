//! Git reference source abstraction
//!
//! This module provides a trait-based abstraction over reading the current
//! source-control reference, allowing for a real git2-backed implementation
//! and a mock implementation for testing.
//!
//! # Overview
//!
//! CI invocations pass the reference explicitly (or through `GITHUB_REF`),
//! so the checkout is only consulted as a fallback for local runs. The
//! primary abstraction is the [RefSource] trait:
//!
//! - [repository::Git2RefSource]: a real implementation using the `git2` crate
//! - [mock::MockRefSource]: a mock implementation for testing
//!
//! Most code should depend on the [RefSource] trait rather than concrete
//! implementations.

pub mod mock;
pub mod repository;

pub use mock::MockRefSource;
pub use repository::Git2RefSource;

use crate::error::Result;

/// Source of the current source-control reference
pub trait RefSource {
    /// Fully-qualified reference string describing the current checkout
    ///
    /// A tag pointing exactly at HEAD yields "refs/tags/<name>"; otherwise
    /// the current branch yields "refs/heads/<name>". A detached HEAD with
    /// no tag yields a string that classifies as an unknown reference.
    fn current_ref(&self) -> Result<String>;
}
