//! Test vector suite.

#![cfg(test)]
#![expect(clippy::cargo_common_metadata, reason = "tests")]

mod basic;
mod parse;
