//! Test support shared by service-level tests.


pub(crate) use context::TestContext;
