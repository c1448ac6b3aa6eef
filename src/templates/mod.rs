//! Output templates for png2src.
//!
//! Provides the built-in per-language templates and the alias table used to
//! pick one from the command line or `png2src.toml`.
//!
//! Available targets:
//! - `assemblyscript` (`as`): default
//! - `c`, `d`, `go`, `nim`, `odin`, `zig`
//! - `rust` (`rs`): uses the `SCREAMING_SNAKE_CASE` name variant

pub mod targets;

pub use targets::*;
