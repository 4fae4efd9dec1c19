//! Integration tests for documentation skeleton generation

mod cli;
mod idempotence;
mod scenarios;
mod templates;
