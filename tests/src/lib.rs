//! Test suites and benchmarks for camellia-engine
//!
//! Known-answer vectors live as JSON under `src/vectors/kat_json` and are
//! replayed through the public session API by [`suites::kat`].


pub use suites::kat::{run_all, KatError};
