// tests/support/mod.rs
// Shared test-only support code used by multiple integration test binaries.
// Some symbols are purposely unused in individual test crates, which causes
// dead_code / unused_imports warnings; allow those at the module level.
#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use helpers::*;
#[allow(unused_imports)]
pub use mocks::*;
