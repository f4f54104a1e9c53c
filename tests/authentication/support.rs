#[path = "support/fakes.rs"]
mod fakes;

pub use harness::{AuthenticationTestHarness, create_harness};
