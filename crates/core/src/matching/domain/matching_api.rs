use crate::matching::domain::detect::{DetectRequest, DetectResponse};
use crate::matching::domain::face_match::{MatchRequest, MatchResponse};
use crate::shared::api_error::ApiError;

/// Stateless face operations: detection and pairwise comparison.
pub trait MatchingApi {
    fn detect(&self, request: &DetectRequest) -> Result<DetectResponse, ApiError>;

    /// Compares every face of every submitted image against the others.
    fn match_faces(&self, request: &MatchRequest) -> Result<MatchResponse, ApiError>;
}
