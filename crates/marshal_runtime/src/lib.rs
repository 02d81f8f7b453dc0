//! REPL and CLI for Marshal.
//!
//! This crate provides:
//! - [`Repl`] - Interactive read-dispatch-print loop
//! - [`builtins`] - A small table of built-in methods
//! - [`init_tracing`] - Log output controlled by `RUST_LOG`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod builtins;
pub mod editor;
pub mod repl;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::{Outcome, Repl, parse_call, render, render_error};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Installs a `tracing` subscriber writing to stderr.
///
/// Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=marshal_command=debug`. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
