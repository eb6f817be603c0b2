//! # Axiom-Chain Test Suite
//!
//! Unified test crate for the ledger workspace:
//!
//! ```text
//! tests/src/
//! ├── support.rs       # Realistic block and committee fixtures
//! └── integration/     # Cross-crate flows (codec + storage together)
//!     ├── lifecycle.rs    # Full epoch write/read cycles, both backends
//!     ├── durability.rs   # Rotation, caching, corruption, reopen rules
//!     └── diagnostics.rs  # Bounded diagnostic history
//! ```
//!
//! ## Running
//!
//! ```bash
//! cargo test -p ax-tests
//! cargo test -p ax-tests integration::lifecycle
//! cargo bench -p ax-tests
//! ```

pub mod integration;
pub mod support;
