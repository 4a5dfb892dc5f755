//! Lifecycle policy: the status state machine and its derived timestamps.

use crate::issue::{Issue, Status};
use chrono::{DateTime, Utc};

/// Which status transitions a store accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPolicy {
    /// Only the forward edges: Pending -> InProgress, Pending -> Resolved,
    /// InProgress -> Resolved. Resolved is terminal.
    #[default]
    Forward,
    /// Any transition. Keeps the legacy anything-goes contract reachable;
    /// the `resolved_at` invariant still holds.
    Unrestricted,
}

impl TransitionPolicy {
    /// Whether `from -> to` is a legal transition.
    ///
    /// Re-asserting the current status is always legal (idempotent no-op).
    pub fn allows(&self, from: Status, to: Status) -> bool {
        if from == to {
            return true;
        }
        match self {
            TransitionPolicy::Unrestricted => true,
            TransitionPolicy::Forward => matches!(
                (from, to),
                (Status::Pending, Status::InProgress)
                    | (Status::Pending, Status::Resolved)
                    | (Status::InProgress, Status::Resolved)
            ),
        }
    }
}

/// A status change the policy refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid status transition: {from} -> {to}")]
pub struct InvalidTransition {
    pub from: Status,
    pub to: Status,
}

/// Apply a status change to an issue under `policy`.
///
/// Entering Resolved stamps `resolved_at = now`; leaving Resolved clears it,
/// so `resolved_at` stays present iff the status is Resolved. Returns whether
/// the record changed; a refused transition mutates nothing.
pub fn apply_status(
    issue: &mut Issue,
    to: Status,
    now: DateTime<Utc>,
    policy: TransitionPolicy,
) -> Result<bool, InvalidTransition> {
    let from = issue.status;
    if !policy.allows(from, to) {
        return Err(InvalidTransition { from, to });
    }
    if from == to {
        return Ok(false);
    }

    issue.status = to;
    if to == Status::Resolved {
        issue.resolved_at = Some(now);
    } else if from == Status::Resolved {
        issue.resolved_at = None;
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::{IssueType, Location, NewIssueInput};
    use chrono::TimeZone;

    fn issue(status: Status) -> Issue {
        let reported_at = Utc
            .with_ymd_and_hms(2026, 3, 1, 9, 0, 0)
            .single()
            .expect("fixed time");
        let mut item = NewIssueInput {
            title: "Broken streetlight".to_string(),
            description: "Lamp out at the corner".to_string(),
            issue_type: IssueType::Streetlight,
            location: Location::new(40.0, -74.0),
            reported_by: "user-1".to_string(),
            priority: None,
            image_url: None,
        }
        .into_issue("issue1", reported_at);
        item.status = status;
        if status == Status::Resolved {
            item.resolved_at = Some(reported_at);
        }
        item
    }

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, hour, 0, 0)
            .single()
            .expect("fixed time")
    }

    #[test]
    fn forward_policy_allows_only_forward_edges() {
        let policy = TransitionPolicy::Forward;
        assert!(policy.allows(Status::Pending, Status::InProgress));
        assert!(policy.allows(Status::Pending, Status::Resolved));
        assert!(policy.allows(Status::InProgress, Status::Resolved));
        assert!(!policy.allows(Status::InProgress, Status::Pending));
        assert!(!policy.allows(Status::Resolved, Status::Pending));
        assert!(!policy.allows(Status::Resolved, Status::InProgress));
    }

    #[test]
    fn same_status_is_a_no_op_under_both_policies() {
        for policy in [TransitionPolicy::Forward, TransitionPolicy::Unrestricted] {
            let mut item = issue(Status::InProgress);
            let changed = apply_status(&mut item, Status::InProgress, at(10), policy)
                .expect("same-status must be accepted");
            assert!(!changed);
            assert_eq!(item.status, Status::InProgress);
        }
    }

    #[test]
    fn entering_resolved_stamps_resolved_at() {
        let mut item = issue(Status::Pending);
        let changed = apply_status(&mut item, Status::Resolved, at(11), TransitionPolicy::Forward)
            .expect("forward transition must be accepted");
        assert!(changed);
        assert_eq!(item.status, Status::Resolved);
        assert_eq!(item.resolved_at, Some(at(11)));
    }

    #[test]
    fn leaving_resolved_clears_resolved_at() {
        let mut item = issue(Status::Resolved);
        apply_status(
            &mut item,
            Status::InProgress,
            at(12),
            TransitionPolicy::Unrestricted,
        )
        .expect("unrestricted policy must accept reversion");
        assert_eq!(item.status, Status::InProgress);
        assert_eq!(item.resolved_at, None);
    }

    #[test]
    fn refused_transition_mutates_nothing() {
        let mut item = issue(Status::Resolved);
        let before = item.clone();
        let err = apply_status(&mut item, Status::Pending, at(13), TransitionPolicy::Forward)
            .expect_err("reopening must be refused under Forward");
        assert_eq!(
            err,
            InvalidTransition {
                from: Status::Resolved,
                to: Status::Pending,
            }
        );
        assert_eq!(item, before);
    }
}
