//! Harness for black-box tests against a running FaceSDK web service.

pub mod assertions;
pub mod fixture;
pub mod paths;
pub mod service;
