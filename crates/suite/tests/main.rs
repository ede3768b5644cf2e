//! Live scenarios against a running FaceSDK web service.
//!
//! Every test here is ignored by default. Start the service, point
//! `ServiceLink` at it and run
//! `cargo test -p facesdk-suite -- --ignored --test-threads=1`.

mod person;

type TestResult = Result<(), Box<dyn std::error::Error>>;
