//! Structural checks on service responses.
//!
//! Every check returns an `AssertionError` naming the field that was
//! missing or mismatched, so a test can `?` it and fail with a readable
//! message. None of them touch the service.

use std::fmt::Debug;

use facesdk_core::matching::domain::detect::{DetectResponse, DetectResult, Detection};
use facesdk_core::matching::domain::face_match::MatchResponse;
use facesdk_core::matching::domain::image_source::ImageSource;
use facesdk_core::search::domain::search::{SearchPerson, SearchResult};
use facesdk_core::shared::constants::RESULT_OK;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, PartialEq)]
pub enum AssertionError {
    #[error("unexpected response code: {actual} (expected 0, FACER_OK)")]
    Code { actual: i32 },
    #[error("'{0}' field not found in response")]
    Missing(&'static str),
    #[error("'{0}' array is empty")]
    Empty(&'static str),
    #[error("expected {expected} entries in '{field}', got {actual}")]
    Count {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("expected '{field}' to be {expected}, got {actual}")]
    Mismatch {
        field: &'static str,
        expected: String,
        actual: String,
    },
    #[error("'{field}' value {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("expected person {0} in search results")]
    PersonNotFound(Uuid),
    #[error("'{0}' does not contain {1}")]
    NotContained(&'static str, String),
}

pub fn expect_eq<T: PartialEq + Debug>(
    field: &'static str,
    expected: T,
    actual: T,
) -> Result<(), AssertionError> {
    if expected == actual {
        Ok(())
    } else {
        Err(AssertionError::Mismatch {
            field,
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
        })
    }
}

pub fn expect_count(
    field: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), AssertionError> {
    if expected == actual {
        Ok(())
    } else {
        Err(AssertionError::Count {
            field,
            expected,
            actual,
        })
    }
}

pub fn expect_within(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), AssertionError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(AssertionError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

pub fn expect_contains<T: PartialEq + Debug>(
    field: &'static str,
    items: &[T],
    wanted: &T,
) -> Result<(), AssertionError> {
    if items.contains(wanted) {
        Ok(())
    } else {
        Err(AssertionError::NotContained(field, format!("{wanted:?}")))
    }
}

/// Success code, a `results` object, and at least one detection.
pub fn check_detect(response: &DetectResponse) -> Result<&DetectResult, AssertionError> {
    if response.code != RESULT_OK {
        return Err(AssertionError::Code {
            actual: response.code,
        });
    }
    let results = response
        .results
        .as_ref()
        .ok_or(AssertionError::Missing("results"))?;
    match results.detections.as_deref() {
        None => Err(AssertionError::Missing("detections")),
        Some([]) => Err(AssertionError::Empty("detections")),
        Some(_) => Ok(results),
    }
}

/// `check_detect` plus an exact detection count.
pub fn check_detection_count(
    response: &DetectResponse,
    expected: usize,
) -> Result<&DetectResult, AssertionError> {
    let results = check_detect(response)?;
    expect_count("detections", expected, results.detections().len())?;
    Ok(results)
}

/// The first detection's face crop is present and non-empty.
pub fn check_crop(detection: &Detection) -> Result<&str, AssertionError> {
    match detection.crop.as_deref() {
        None => Err(AssertionError::Missing("crop")),
        Some("") => Err(AssertionError::Empty("crop")),
        Some(crop) => Ok(crop),
    }
}

/// Success code, one detection entry per submitted image, and source tags
/// echoed on the first compared pair.
///
/// `expected_second` is skipped when `None`, as for single-image requests
/// that compare faces within one image.
pub fn check_match(
    response: &MatchResponse,
    expected_detections: usize,
    expected_first: ImageSource,
    expected_second: Option<ImageSource>,
) -> Result<(), AssertionError> {
    if response.code != RESULT_OK {
        return Err(AssertionError::Code {
            actual: response.code,
        });
    }
    let detections = response
        .detections
        .as_deref()
        .ok_or(AssertionError::Missing("detections"))?;
    expect_count("detections", expected_detections, detections.len())?;
    let pair = response
        .results
        .as_deref()
        .ok_or(AssertionError::Missing("results"))?
        .first()
        .ok_or(AssertionError::Empty("results"))?;
    expect_eq("results[0].first", Some(expected_first), pair.first)?;
    if let Some(second) = expected_second {
        expect_eq("results[0].second", Some(second), pair.second)?;
    }
    Ok(())
}

/// The enrolled person is among the hits and has at least one stored image
/// with a storage path.
pub fn check_search_hit(
    result: &SearchResult,
    person_id: Uuid,
) -> Result<&SearchPerson, AssertionError> {
    if result.persons.is_empty() {
        return Err(AssertionError::Empty("persons"));
    }
    let person = result
        .find_person(person_id)
        .ok_or(AssertionError::PersonNotFound(person_id))?;
    let image = person
        .images
        .first()
        .ok_or(AssertionError::Empty("images"))?;
    match image.path.as_deref() {
        Some(path) if !path.is_empty() => Ok(person),
        _ => Err(AssertionError::Missing("images[0].path")),
    }
}

/// The matched query face came back with a non-empty crop.
pub fn check_search_crop(person: &SearchPerson) -> Result<&str, AssertionError> {
    let detection = person
        .detection
        .as_ref()
        .ok_or(AssertionError::Missing("detection"))?;
    match detection.crop.as_deref() {
        None => Err(AssertionError::Missing("detection.crop")),
        Some("") => Err(AssertionError::Empty("detection.crop")),
        Some(crop) => Ok(crop),
    }
}
