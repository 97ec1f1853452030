//! Integration test suite entry point.

mod cli_tests;
mod fixture;
mod optimizer_http_tests;
mod storage_tests;
