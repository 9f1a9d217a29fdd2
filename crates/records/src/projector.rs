//! Item → detail-record projection.
//!
//! The mapping is exhaustive over [`SearchItem`]: the four known kinds
//! produce a [`DetailRecord`], anything else produces
//! [`Projection::Unsupported`] so the caller can decide what a skip means
//! (the executor logs and counts them). Projection is pure — all nested
//! data was resolved by the transport, so there is no failure path here.

use crate::access::AccessLevel;
use crate::details::{
    DetailRecord, IssueDetail, PullRequestDetail, RepositoryDetail, UserDetail,
};
use crate::items::SearchItem;

/// Outcome of projecting one fetched item.
#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    /// The item mapped to a normalized record.
    Record(DetailRecord),
    /// The item's kind is not projected by this core.
    Unsupported,
}

/// Maps one fetched item into its detail record, gating privileged fields
/// on `access`.
pub fn project(item: &SearchItem, access: AccessLevel) -> Projection {
    match item {
        SearchItem::User(user) => {
            Projection::Record(DetailRecord::User(UserDetail::from_item(user, access)))
        }
        SearchItem::Repository(repository) => Projection::Record(DetailRecord::Repository(
            RepositoryDetail::from_item(repository, access),
        )),
        SearchItem::PullRequest(pull) => Projection::Record(DetailRecord::PullRequest(
            PullRequestDetail::from_item(pull, access),
        )),
        SearchItem::Issue(issue) => {
            Projection::Record(DetailRecord::Issue(IssueDetail::from_item(issue, access)))
        }
        SearchItem::Unsupported(_) => Projection::Unsupported,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::items::{Account, Issue, Label, RepoRef, Repository, User};

    fn repository() -> Repository {
        Repository {
            name: "widget".into(),
            full_name: "acme/widget".into(),
            html_url: "https://github.com/acme/widget".into(),
            description: Some("A widget".into()),
            forks_count: 4,
            stargazers_count: 120,
            open_issues_count: 7,
            created_at: Some(Utc.with_ymd_and_hms(2020, 1, 2, 0, 0, 0).unwrap()),
            updated_at: Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()),
            language: Some("Rust".into()),
            owner: Some(Account::new("acme")),
            open_pull_requests: Some(3),
        }
    }

    fn issue() -> Issue {
        Issue {
            number: 42,
            title: "Widget breaks".into(),
            state: "open".into(),
            state_reason: None,
            user: Account::new("reporter"),
            assignee: Some(Account::new("dev")),
            assignees: vec![Account::new("dev")],
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            closed_at: None,
            closed_by: None,
            comments: 2,
            labels: vec![Label::new("bug")],
            html_url: "https://github.com/acme/widget/issues/42".into(),
            repository: Some(RepoRef {
                name: "widget".into(),
                html_url: "https://github.com/acme/widget".into(),
            }),
        }
    }

    #[test]
    fn repository_gating_follows_access_level() {
        let item = SearchItem::Repository(repository());

        let Projection::Record(DetailRecord::Repository(anonymous)) =
            project(&item, AccessLevel::Anonymous)
        else {
            panic!("expected repository record");
        };
        assert_eq!(anonymous.owner, None);
        assert_eq!(anonymous.pull_request_count, None);
        assert_eq!(anonymous.stars_count, 120);

        let Projection::Record(DetailRecord::Repository(authenticated)) =
            project(&item, AccessLevel::Authenticated)
        else {
            panic!("expected repository record");
        };
        assert_eq!(authenticated.owner.as_deref(), Some("acme"));
        assert_eq!(authenticated.pull_request_count, Some(3));
    }

    #[test]
    fn issue_identity_fields_survive_anonymous_access() {
        let item = SearchItem::Issue(issue());

        let Projection::Record(DetailRecord::Issue(record)) =
            project(&item, AccessLevel::Anonymous)
        else {
            panic!("expected issue record");
        };
        assert_eq!(record.number, 42);
        assert_eq!(record.state, "open");
        assert_eq!(record.owner, "reporter");
        assert_eq!(record.labels, vec!["bug".to_owned()]);
        assert_eq!(record.repository_name, None);
        assert_eq!(record.repository_url, None);
    }

    #[test]
    fn issue_repository_metadata_needs_authentication() {
        let item = SearchItem::Issue(issue());

        let Projection::Record(DetailRecord::Issue(record)) =
            project(&item, AccessLevel::Authenticated)
        else {
            panic!("expected issue record");
        };
        assert_eq!(record.repository_name.as_deref(), Some("widget"));
        assert_eq!(
            record.repository_url.as_deref(),
            Some("https://github.com/acme/widget")
        );
    }

    #[test]
    fn user_profile_fields_need_authentication() {
        let user = User {
            login: "octocat".into(),
            html_url: "https://github.com/octocat".into(),
            name: Some("The Octocat".into()),
            company: Some("GitHub".into()),
            location: Some("San Francisco".into()),
            created_at: Some(Utc.with_ymd_and_hms(2011, 1, 25, 0, 0, 0).unwrap()),
            updated_at: None,
            public_repos: 8,
            total_private_repos: Some(2),
            followers: 4000,
            following: 9,
            account_type: Some("User".into()),
        };
        let item = SearchItem::User(user);

        let Projection::Record(DetailRecord::User(anonymous)) =
            project(&item, AccessLevel::Anonymous)
        else {
            panic!("expected user record");
        };
        assert_eq!(anonymous.username, "octocat");
        assert_eq!(anonymous.name, None);
        assert_eq!(anonymous.followers, 0);
        assert_eq!(anonymous.private_repositories, None);

        let Projection::Record(DetailRecord::User(authenticated)) =
            project(&item, AccessLevel::Authenticated)
        else {
            panic!("expected user record");
        };
        assert_eq!(authenticated.name.as_deref(), Some("The Octocat"));
        assert_eq!(authenticated.followers, 4000);
        assert_eq!(authenticated.private_repositories, Some(2));
    }

    #[test]
    fn unknown_kinds_are_explicitly_unsupported() {
        let item = SearchItem::Unsupported(serde_json::json!({"kind": "gist"}));
        assert_eq!(project(&item, AccessLevel::Authenticated), Projection::Unsupported);
    }
}
