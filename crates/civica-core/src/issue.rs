//! Issue type: the civic report record and its closed vocabularies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Practical cap on report titles.
pub const TITLE_MAX_CHARS: usize = 100;
/// Practical cap on report descriptions.
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Category of a reported civic problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    Road,
    Garbage,
    Streetlight,
    Park,
    Other,
}

impl IssueType {
    /// Every category, in display order.
    pub const ALL: [IssueType; 5] = [
        IssueType::Road,
        IssueType::Garbage,
        IssueType::Streetlight,
        IssueType::Park,
        IssueType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::Road => "road",
            IssueType::Garbage => "garbage",
            IssueType::Streetlight => "streetlight",
            IssueType::Park => "park",
            IssueType::Other => "other",
        }
    }
}

impl std::fmt::Display for IssueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for IssueType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "road" => Ok(IssueType::Road),
            "garbage" => Ok(IssueType::Garbage),
            "streetlight" | "street_light" => Ok(IssueType::Streetlight),
            "park" => Ok(IssueType::Park),
            "other" => Ok(IssueType::Other),
            _ => Err(format!("unknown issue type: {s}")),
        }
    }
}

/// Lifecycle stage of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Pending,
    InProgress,
    Resolved,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::InProgress => "in_progress",
            Status::Resolved => "resolved",
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Pending
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Status::Pending),
            "in_progress" | "in-progress" => Ok(Status::InProgress),
            "resolved" => Ok(Status::Resolved),
            _ => Err(format!("unknown status: {s}")),
        }
    }
}

/// Display-only urgency classification, independent of status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(format!("unknown priority: {s}")),
        }
    }
}

/// Where the problem was reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            address: None,
        }
    }

    pub fn with_address(latitude: f64, longitude: f64, address: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            address: Some(address.into()),
        }
    }

    pub fn in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// A single reported civic problem.
///
/// Invariants the store upholds:
/// - `id` is unique across the store's lifetime, never reused after delete
/// - `resolved_at` is present iff `status == Resolved`
/// - `reported_at` and `reported_by` never change after creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,

    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub location: Location,

    #[serde(default)]
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    pub reported_by: String,
    pub reported_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Caller-supplied fields for a new report.
///
/// The store assigns `id` and `reported_at`, forces `status = Pending`,
/// and leaves `resolved_at` unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewIssueInput {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub location: Location,
    pub reported_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl NewIssueInput {
    /// Check every creation-time invariant except id/timestamp assignment.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title"));
        }
        if self.title.chars().count() > TITLE_MAX_CHARS {
            return Err(ValidationError::FieldTooLong {
                field: "title",
                max: TITLE_MAX_CHARS,
                actual: self.title.chars().count(),
            });
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::MissingField("description"));
        }
        if self.description.chars().count() > DESCRIPTION_MAX_CHARS {
            return Err(ValidationError::FieldTooLong {
                field: "description",
                max: DESCRIPTION_MAX_CHARS,
                actual: self.description.chars().count(),
            });
        }
        if self.reported_by.trim().is_empty() {
            return Err(ValidationError::MissingField("reported_by"));
        }
        if !(-90.0..=90.0).contains(&self.location.latitude) {
            return Err(ValidationError::LatitudeOutOfRange(self.location.latitude));
        }
        if !(-180.0..=180.0).contains(&self.location.longitude) {
            return Err(ValidationError::LongitudeOutOfRange(
                self.location.longitude,
            ));
        }
        Ok(())
    }

    /// Materialize the record the store commits.
    ///
    /// Does not validate; callers go through `validate()` first.
    pub fn into_issue(self, id: impl Into<String>, reported_at: DateTime<Utc>) -> Issue {
        Issue {
            id: id.into(),
            title: self.title,
            description: self.description,
            issue_type: self.issue_type,
            location: self.location,
            status: Status::Pending,
            priority: self.priority,
            reported_by: self.reported_by,
            reported_at,
            resolved_at: None,
            assigned_to: None,
            image_url: self.image_url,
        }
    }
}

/// Rejected creation input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("{field} exceeds {max} characters (got {actual})")]
    FieldTooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("latitude out of range [-90, 90]: {0}")]
    LatitudeOutOfRange(f64),

    #[error("longitude out of range [-180, 180]: {0}")]
    LongitudeOutOfRange(f64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn input() -> NewIssueInput {
        NewIssueInput {
            title: "Pothole on 5th".to_string(),
            description: "Deep pothole near the crosswalk".to_string(),
            issue_type: IssueType::Road,
            location: Location::with_address(37.77, -122.41, "5th & Mission"),
            reported_by: "user-1".to_string(),
            priority: Some(Priority::High),
            image_url: None,
        }
    }

    #[test]
    fn valid_input_passes() {
        input().validate().expect("input should validate");
    }

    #[test]
    fn blank_title_is_missing() {
        let mut bad = input();
        bad.title = "   ".to_string();
        assert_eq!(
            bad.validate().expect_err("blank title must fail"),
            ValidationError::MissingField("title")
        );
    }

    #[test]
    fn overlong_title_is_rejected() {
        let mut bad = input();
        bad.title = "x".repeat(TITLE_MAX_CHARS + 1);
        assert!(matches!(
            bad.validate().expect_err("overlong title must fail"),
            ValidationError::FieldTooLong { field: "title", .. }
        ));
    }

    #[test]
    fn latitude_200_is_rejected() {
        let mut bad = input();
        bad.location.latitude = 200.0;
        assert_eq!(
            bad.validate().expect_err("latitude 200 must fail"),
            ValidationError::LatitudeOutOfRange(200.0)
        );
    }

    #[test]
    fn into_issue_forces_pending_and_leaves_resolved_at_unset() {
        let reported_at = Utc
            .with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
            .single()
            .expect("fixed time");
        let issue = input().into_issue("issue1", reported_at);

        assert_eq!(issue.status, Status::Pending);
        assert_eq!(issue.resolved_at, None);
        assert_eq!(issue.assigned_to, None);
        assert_eq!(issue.reported_at, reported_at);
    }

    #[test]
    fn enums_use_snake_case_wire_values() {
        assert_eq!(
            serde_json::to_string(&Status::InProgress).expect("status serializes"),
            "\"in_progress\""
        );
        assert_eq!(
            serde_json::to_string(&IssueType::Streetlight).expect("type serializes"),
            "\"streetlight\""
        );
        let parsed: Status = serde_json::from_str("\"resolved\"").expect("status parses");
        assert_eq!(parsed, Status::Resolved);
    }

    #[test]
    fn enum_parsing_is_case_insensitive() {
        assert_eq!("In_Progress".parse::<Status>(), Ok(Status::InProgress));
        assert_eq!("ROAD".parse::<IssueType>(), Ok(IssueType::Road));
        assert_eq!("High".parse::<Priority>(), Ok(Priority::High));
        assert!("urgent".parse::<Priority>().is_err());
    }
}
