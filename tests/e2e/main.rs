//! End-to-end tests for the linkdeck binary

mod cli_basic;
mod storage_cli;
