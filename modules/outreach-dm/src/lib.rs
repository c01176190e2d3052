pub mod collector;
pub mod config;
pub mod delivery_log;
pub mod dispatcher;
pub mod extractor;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;
pub mod traits;
