// tests/support/mod.rs
// Shared test doubles and builders used by multiple integration test
// binaries. Individual binaries only use a subset, so allow dead_code at
// the module level to keep CI output clean.
#[allow(dead_code, unused_imports)]
pub mod builders;

#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use builders::*;
#[allow(unused_imports)]
pub use helpers::*;
#[allow(unused_imports)]
pub use mocks::*;
