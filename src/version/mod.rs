//! Version checking layer
//!
//! This module provides the core functionality for fetching the latest
//! release of a repository and comparing it against the running version.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Current   │────▶│   Checker   │────▶│   Registry  │
//! │  (global)   │     │  (compare)  │     │   (fetch)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │                   │
//!                            ▼                   ▼
//!                     ┌─────────────┐     ┌─────────────┐
//!                     │   Semver    │     │    Pool     │
//!                     │ (parse/cmp) │     │  (clients)  │
//!                     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`checker`]: Upgrade check composing lookup and comparison
//! - [`current`]: Write-once process-wide current version
//! - [`error`]: Error types for lookup and configuration
//! - [`pool`]: Pool of reusable HTTP clients
//! - [`registry`]: Trait for fetching the latest release
//! - [`registries`]: Concrete release sources (GitHub)
//! - [`semver`]: The `Version` value, tag parsing and ordering

pub mod checker;
pub mod current;
pub mod error;
pub mod pool;
pub mod registries;
pub mod registry;
pub mod semver;
