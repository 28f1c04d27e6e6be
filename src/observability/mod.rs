//! Observability subsystem for phonedir
//!
//! This module provides:
//! - Structured logging (JSON)
//! - Operation counters
//! - Scope-based begin/complete logging
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on directory state
//! 3. No async or background threads
//! 4. Deterministic output
//!
//! # Usage
//!
//! ```ignore
//! use phonedir::observability::{Logger, MetricsRegistry, ObservationScope};
//!
//! Logger::info("SEARCH_COMPLETE", &[("matches", "42")]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.increment_searches();
//!
//! let scope = ObservationScope::new("LOAD");
//! // ... do work ...
//! scope.complete();
//! ```

mod logger;
mod metrics;
mod scope;

pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
pub use scope::{ObservationScope, Timer};
