//! Expose menugen's internal API for use in unit testing. While it *could* be
//! useful, we do not recommend using this API in production code; depend on
//! `menugen-nav` instead.
pub mod cli;
pub mod config;
pub mod render;
