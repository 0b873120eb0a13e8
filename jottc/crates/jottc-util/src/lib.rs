//! jottc-util - Shared infrastructure for the Jott compiler.
//!
//! This crate provides the pieces the compiler phases have in common:
//!
//! - [`span`] - Source location tracking ([`SourceLoc`])
//! - [`diagnostic`] - Error and warning reporting ([`Diagnostic`], [`Handler`])
//!
//! # Example Usage
//!
//! ```
//! use jottc_util::{Diagnostic, DiagnosticCode, Handler};
//!
//! let handler = Handler::new();
//! handler.emit_diagnostic(
//!     Diagnostic::error("unterminated string literal")
//!         .with_code(DiagnosticCode::E_LEX_UNTERMINATED_STRING),
//! );
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod diagnostic;
pub mod span;

// Re-export main types for convenience
pub use diagnostic::{Diagnostic, DiagnosticCode, Handler, Level};
pub use span::SourceLoc;
