//! Pure filter, search, and ordering semantics over issue collections.
//!
//! These are deterministic functions a store (or any caller holding a
//! snapshot) applies before records reach a display surface. Filters are
//! conjunctive, search is case-insensitive substring over several fields,
//! and filtering never reorders matching records.

use crate::issue::{Issue, IssueType, Status};

/// Conjunctive filter over status, type, and free text.
///
/// `None` in a dimension means "all". An empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssueFilter {
    pub status: Option<Status>,
    pub issue_type: Option<IssueType>,
    pub search: Option<String>,
}

impl IssueFilter {
    pub fn by_status(status: Status) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn by_search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            ..Self::default()
        }
    }

    /// Whether every requested dimension matches `issue`.
    pub fn matches(&self, issue: &Issue) -> bool {
        if let Some(status) = self.status
            && issue.status != status
        {
            return false;
        }
        if let Some(kind) = self.issue_type
            && issue.issue_type != kind
        {
            return false;
        }
        if let Some(term) = self.search.as_deref()
            && !search_matches(issue, term)
        {
            return false;
        }
        true
    }
}

/// Case-insensitive substring match over title, description, id, and
/// address (when present). A hit in any field is a match.
fn search_matches(issue: &Issue, term: &str) -> bool {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    contains_ci(&issue.title, &needle)
        || contains_ci(&issue.description, &needle)
        || contains_ci(&issue.id, &needle)
        || issue
            .location
            .address
            .as_deref()
            .is_some_and(|address| contains_ci(address, &needle))
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Select matching issues, preserving the input's relative order.
pub fn filter_issues<'a>(
    issues: impl IntoIterator<Item = &'a Issue>,
    filter: &IssueFilter,
) -> Vec<Issue> {
    issues
        .into_iter()
        .filter(|issue| filter.matches(issue))
        .cloned()
        .collect()
}

/// Default display order: descending `reported_at`, newest first.
///
/// Stable, so records sharing a timestamp keep their relative order.
pub fn newest_first(issues: &mut [Issue]) {
    issues.sort_by(|a, b| b.reported_at.cmp(&a.reported_at));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::{Location, NewIssueInput, Priority};
    use chrono::{TimeZone, Utc};

    fn issue(id: &str, status: Status, kind: IssueType, hour: u32, address: &str) -> Issue {
        let reported_at = Utc
            .with_ymd_and_hms(2026, 3, 1, hour, 0, 0)
            .single()
            .expect("fixed time");
        let mut item = NewIssueInput {
            title: format!("Report {id}"),
            description: format!("Details for {id}"),
            issue_type: kind,
            location: Location::with_address(40.0, -74.0, address),
            reported_by: "user-1".to_string(),
            priority: Some(Priority::Medium),
            image_url: None,
        }
        .into_issue(id, reported_at);
        item.status = status;
        if status == Status::Resolved {
            item.resolved_at = Some(reported_at);
        }
        item
    }

    fn fixture() -> Vec<Issue> {
        vec![
            issue("issue1", Status::Pending, IssueType::Road, 8, "Main St"),
            issue("issue2", Status::Pending, IssueType::Garbage, 9, "1st Ave"),
            issue("issue3", Status::InProgress, IssueType::Road, 10, "2nd Ave"),
            issue(
                "issue4",
                Status::Resolved,
                IssueType::Road,
                11,
                "Oak Ave Bus Stop",
            ),
            issue("issue5", Status::Pending, IssueType::Road, 12, "3rd Ave"),
        ]
    }

    #[test]
    fn empty_filter_matches_everything_in_order() {
        let issues = fixture();
        let selected = filter_issues(&issues, &IssueFilter::default());
        let ids: Vec<&str> = selected.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["issue1", "issue2", "issue3", "issue4", "issue5"]);
    }

    #[test]
    fn status_and_type_filters_are_conjunctive_and_stable() {
        let issues = fixture();
        let filter = IssueFilter {
            status: Some(Status::Pending),
            issue_type: Some(IssueType::Road),
            search: None,
        };
        let selected = filter_issues(&issues, &filter);
        let ids: Vec<&str> = selected.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["issue1", "issue5"]);
    }

    #[test]
    fn search_is_case_insensitive_over_address() {
        let issues = fixture();
        let selected = filter_issues(&issues, &IssueFilter::by_search("oak ave"));
        let ids: Vec<&str> = selected.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["issue4"]);
    }

    #[test]
    fn search_reaches_id_title_and_description() {
        let issues = fixture();

        let by_id = filter_issues(&issues, &IssueFilter::by_search("ISSUE3"));
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].id, "issue3");

        let by_title = filter_issues(&issues, &IssueFilter::by_search("report issue2"));
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, "issue2");

        let by_description = filter_issues(&issues, &IssueFilter::by_search("details for issue5"));
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].id, "issue5");
    }

    #[test]
    fn search_combines_with_status_filter() {
        let issues = fixture();
        let filter = IssueFilter {
            status: Some(Status::Pending),
            issue_type: None,
            search: Some("ave".to_string()),
        };
        let selected = filter_issues(&issues, &filter);
        let ids: Vec<&str> = selected.iter().map(|i| i.id.as_str()).collect();
        // issue4 has "Oak Ave" but is Resolved; conjunction drops it.
        assert_eq!(ids, ["issue2", "issue5"]);
    }

    #[test]
    fn newest_first_sorts_descending_and_is_stable() {
        let mut issues = fixture();
        // Two records share the newest timestamp; stable sort keeps
        // issue5 before issue6.
        let mut tied = issue("issue6", Status::Pending, IssueType::Park, 12, "4th Ave");
        tied.reported_at = issues[4].reported_at;
        issues.push(tied);

        newest_first(&mut issues);
        let ids: Vec<&str> = issues.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(
            ids,
            ["issue5", "issue6", "issue4", "issue3", "issue2", "issue1"]
        );
    }
}
