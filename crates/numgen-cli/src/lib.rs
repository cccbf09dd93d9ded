//! # numgen-cli
//!
//! Output formatting, value presentation, and shell completion for the
//! `numgen` binary.

pub mod completion;
pub mod output;
pub mod presenter;

pub use output::OutputFormat;
pub use presenter::ValuePresenter;
