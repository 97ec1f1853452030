//! Unit test suite entry point.

mod bundle_scenario_tests;
mod quality_tests;
