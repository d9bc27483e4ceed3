//! jackc-util - Core Utilities and Foundation Types
//!
//! Types shared by every phase of the Jack toolchain:
//!
//! - [`span`] - source positions and spans
//! - [`diagnostic`] - severity levels and terminal rendering of diagnostics

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, Level};
pub use span::{Position, Span};
