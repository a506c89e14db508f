//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental data structures used throughout the
//! crate:
//! - Error types (`KimuraError`)
//! - Owned 2D grid storage (`Grid`)
//!
//! These carry no numeric logic of their own.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types.
pub mod errors;

/// Row-major 2D grid storage.
pub mod grid;
