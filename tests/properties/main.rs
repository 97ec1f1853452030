//! Property test suite entry point.

mod bundle_props;
mod spec_props;
