//! Collaborator seams: image analysis, geolocation, image upload.
//!
//! The core consumes these services, it does not implement them. Each seam
//! is a trait plus a typed error; failures pass through to the caller
//! unchanged and nothing here retries.

use crate::issue::IssueType;
use serde::{Deserialize, Serialize};

/// A raw latitude/longitude pair from a geolocation provider.
///
/// Unlike `Location`, a coordinate carries no address and no range
/// guarantee; creation-time validation still applies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// What an image analyzer inferred from a photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub detected_type: IssueType,
    pub suggested_title: String,
    pub suggested_description: String,
}

/// Errors from the image-analysis collaborator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    #[error("image payload is empty")]
    EmptyImage,

    #[error("image analysis failed: {0}")]
    Failed(String),
}

/// Errors from the geolocation collaborator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("location unavailable")]
    Unavailable,

    #[error("location request timed out")]
    Timeout,

    #[error("location error: {0}")]
    Unknown(String),
}

/// Errors from the image-upload collaborator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UploadError {
    #[error("image payload is empty")]
    EmptyImage,

    #[error("image upload failed: {0}")]
    Failed(String),
}

/// Classifies a photo into an issue category with suggested copy.
pub trait ImageAnalyzer {
    fn analyze(&self, image: &[u8]) -> Result<Suggestion, AnalysisError>;
}

/// One-shot device position lookup.
pub trait LocationProvider {
    fn current_location(&self) -> Result<Coordinate, LocationError>;
}

/// Stores an image and returns a retrievable URL.
pub trait ImageUploader {
    fn upload(&self, image: &[u8]) -> Result<String, UploadError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedAnalyzer;

    impl ImageAnalyzer for FixedAnalyzer {
        fn analyze(&self, image: &[u8]) -> Result<Suggestion, AnalysisError> {
            if image.is_empty() {
                return Err(AnalysisError::EmptyImage);
            }
            Ok(Suggestion {
                detected_type: IssueType::Garbage,
                suggested_title: "Overflowing bin".to_string(),
                suggested_description: "Trash spilling onto the sidewalk".to_string(),
            })
        }
    }

    struct DeniedProvider;

    impl LocationProvider for DeniedProvider {
        fn current_location(&self) -> Result<Coordinate, LocationError> {
            Err(LocationError::PermissionDenied)
        }
    }

    #[test]
    fn analyzer_rejects_empty_payload() {
        assert_eq!(
            FixedAnalyzer.analyze(&[]).expect_err("empty image must fail"),
            AnalysisError::EmptyImage
        );
        let suggestion = FixedAnalyzer.analyze(&[1, 2, 3]).expect("analysis succeeds");
        assert_eq!(suggestion.detected_type, IssueType::Garbage);
    }

    #[test]
    fn location_errors_pass_through_unchanged() {
        let err = DeniedProvider
            .current_location()
            .expect_err("denied provider must fail");
        assert_eq!(err, LocationError::PermissionDenied);
        assert_eq!(err.to_string(), "location permission denied");
    }
}
