//! Normalized, serialization-ready detail records.
//!
//! One record is constructed per fetched item, immediately serialized, and
//! never mutated afterward. Field names follow the wire contract of the
//! stored artifact; access-gated fields are populated in exactly one place —
//! the record's constructor — so the population table per variant stays a
//! single source of truth.
//!
//! Gating rule, uniform across variants: identity/display fields (ids,
//! titles, URLs, states, publicly visible timestamps) are always populated;
//! fields that need a privileged second call or that are invisible to
//! anonymous callers (repository ownership, private counts, full profile
//! data) are populated only under [`AccessLevel::Authenticated`]. Nothing is
//! guessed: an ungated count of zero means "zero or not fetched", a gated
//! field stays `null`.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::access::AccessLevel;
use crate::items::{Account, CodeHit, Commit, Issue, PullRequest, Repository, User};

// ---------------------------------------------------------------------------
// Record variants
// ---------------------------------------------------------------------------

/// Projection of a [`User`] search item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserDetail {
    pub username: String,
    pub url: String,
    pub name: Option<String>,
    pub followers: u32,
    pub following: u32,
    pub location: Option<String>,
    pub company: Option<String>,
    pub public_repositories: u32,
    pub private_repositories: Option<u32>,
    pub updated: Option<DateTime<Utc>>,
    pub created: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub account_type: Option<String>,
}

impl UserDetail {
    /// Builds the record; everything beyond `username`/`url` is profile data
    /// and requires authentication.
    pub fn from_item(user: &User, access: AccessLevel) -> Self {
        let mut record = Self {
            username: user.login.clone(),
            url: user.html_url.clone(),
            name: None,
            followers: 0,
            following: 0,
            location: None,
            company: None,
            public_repositories: 0,
            private_repositories: None,
            updated: None,
            created: None,
            account_type: None,
        };

        if access.is_authenticated() {
            record.name = user.name.clone();
            record.company = user.company.clone();
            record.location = user.location.clone();
            record.created = user.created_at;
            record.updated = user.updated_at;
            record.public_repositories = user.public_repos;
            record.private_repositories = user.total_private_repos;
            record.followers = user.followers;
            record.following = user.following;
            record.account_type = user.account_type.clone();
        }

        record
    }
}

/// Projection of a [`Repository`] search item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepositoryDetail {
    pub name: String,
    pub full_name: String,
    pub url: String,
    pub description: Option<String>,
    pub owner: Option<String>,
    pub forks_count: u32,
    pub stars_count: u32,
    pub pull_request_count: Option<u32>,
    pub issues_count: u32,
    pub updated: Option<DateTime<Utc>>,
    pub created: Option<DateTime<Utc>>,
    pub language: Option<String>,
}

impl RepositoryDetail {
    /// Builds the record; `owner` and `pull_request_count` both take a
    /// second API call and are only carried for authenticated runs.
    pub fn from_item(repository: &Repository, access: AccessLevel) -> Self {
        let mut record = Self {
            name: repository.name.clone(),
            full_name: repository.full_name.clone(),
            url: repository.html_url.clone(),
            description: repository.description.clone(),
            owner: None,
            forks_count: repository.forks_count,
            stars_count: repository.stargazers_count,
            pull_request_count: None,
            issues_count: repository.open_issues_count,
            updated: repository.updated_at,
            created: repository.created_at,
            language: repository.language.clone(),
        };

        if access.is_authenticated() {
            record.owner = repository.owner.as_ref().map(|o| o.login.clone());
            record.pull_request_count = repository.open_pull_requests;
        }

        record
    }
}

/// Projection of an [`Issue`] search item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueDetail {
    pub number: u64,
    pub title: String,
    pub state: String,
    pub state_reason: Option<String>,
    pub owner: String,
    pub assignee: Option<String>,
    pub assignees: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    pub closed_by: Option<String>,
    pub comments: u32,
    pub labels: Vec<String>,
    pub repository_name: Option<String>,
    pub repository_url: Option<String>,
    pub url: String,
}

impl IssueDetail {
    /// Builds the record; repository metadata leaks ownership information
    /// and is only carried for authenticated runs.
    pub fn from_item(issue: &Issue, access: AccessLevel) -> Self {
        let mut record = Self {
            number: issue.number,
            title: issue.title.clone(),
            state: issue.state.clone(),
            state_reason: issue.state_reason.clone(),
            owner: issue.user.login.clone(),
            assignee: login_of(issue.assignee.as_ref()),
            assignees: logins_of(&issue.assignees),
            created_at: issue.created_at,
            closed_at: issue.closed_at,
            closed_by: login_of(issue.closed_by.as_ref()),
            comments: issue.comments,
            labels: issue.labels.iter().map(|l| l.name.clone()).collect(),
            repository_name: None,
            repository_url: None,
            url: issue.html_url.clone(),
        };

        if access.is_authenticated() {
            record.repository_name = issue.repository.as_ref().map(|r| r.name.clone());
            record.repository_url = issue.repository.as_ref().map(|r| r.html_url.clone());
        }

        record
    }
}

/// Projection of a [`PullRequest`] search item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PullRequestDetail {
    pub number: u64,
    pub title: String,
    pub state: String,
    pub state_reason: Option<String>,
    pub owner: String,
    pub assignee: Option<String>,
    pub assignees: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    pub closed_by: Option<String>,
    pub comments: u32,
    pub labels: Vec<String>,
    pub repository_name: Option<String>,
    pub repository_url: Option<String>,
    pub base: Option<String>,
    pub head: Option<String>,
    pub url: String,
}

impl PullRequestDetail {
    /// Builds the record; same repository-metadata gating as issues.
    pub fn from_item(pull: &PullRequest, access: AccessLevel) -> Self {
        let mut record = Self {
            number: pull.number,
            title: pull.title.clone(),
            state: pull.state.clone(),
            state_reason: pull.state_reason.clone(),
            owner: pull.user.login.clone(),
            assignee: login_of(pull.assignee.as_ref()),
            assignees: logins_of(&pull.assignees),
            created_at: pull.created_at,
            closed_at: pull.closed_at,
            closed_by: login_of(pull.closed_by.as_ref()),
            comments: pull.comments,
            labels: pull.labels.iter().map(|l| l.name.clone()).collect(),
            repository_name: None,
            repository_url: None,
            base: pull.base.clone(),
            head: pull.head.clone(),
            url: pull.html_url.clone(),
        };

        if access.is_authenticated() {
            record.repository_name = pull.repository.as_ref().map(|r| r.name.clone());
            record.repository_url = pull.repository.as_ref().map(|r| r.html_url.clone());
        }

        record
    }
}

/// Projection of a [`Commit`] from commit search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommitDetail {
    pub sha: String,
    pub author: Option<String>,
    pub committer: Option<String>,
    pub authored_date: Option<DateTime<Utc>>,
    pub commit_date: Option<DateTime<Utc>>,
    pub repository: Option<String>,
    pub message: Option<String>,
    pub lines_changed: u32,
    pub lines_added: u32,
    pub lines_deleted: u32,
    pub tree_sha: Option<String>,
    pub tree_url: Option<String>,
    pub last_status: Option<String>,
    pub url: Option<String>,
}

impl CommitDetail {
    /// Builds the record; only the author login is access-gated.
    pub fn from_item(commit: &Commit, access: AccessLevel) -> Self {
        let author = if access.is_authenticated() {
            login_of(commit.author.as_ref())
        } else {
            None
        };

        Self {
            sha: commit.sha.clone(),
            author,
            committer: login_of(commit.committer.as_ref()),
            authored_date: commit.authored_date,
            commit_date: commit.commit_date,
            repository: commit.repository.clone(),
            message: commit.message.clone(),
            lines_changed: commit.lines_changed,
            lines_added: commit.lines_added,
            lines_deleted: commit.lines_deleted,
            tree_sha: commit.tree_sha.clone(),
            tree_url: commit.tree_url.clone(),
            last_status: commit.last_status.clone(),
            url: commit.html_url.clone(),
        }
    }
}

/// Projection of a [`CodeHit`] from code search. No access-gated fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeDetail {
    pub repository_name: Option<String>,
    pub repository_url: Option<String>,
    pub name: Option<String>,
    pub sha: Option<String>,
    pub target: Option<String>,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    pub download_url: Option<String>,
    pub git_url: Option<String>,
    pub encoding: Option<String>,
    pub path: Option<String>,
    pub url: Option<String>,
}

impl CodeDetail {
    /// Builds the record; everything visible in a code hit is public.
    pub fn from_item(code: &CodeHit) -> Self {
        Self {
            repository_name: code.repository.as_ref().map(|r| r.name.clone()),
            repository_url: code.repository.as_ref().map(|r| r.html_url.clone()),
            name: code.name.clone(),
            sha: code.sha.clone(),
            target: code.target.clone(),
            content_type: code.content_type.clone(),
            download_url: code.download_url.clone(),
            git_url: code.git_url.clone(),
            encoding: code.encoding.clone(),
            path: code.path.clone(),
            url: code.html_url.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// The tagged union the writer consumes
// ---------------------------------------------------------------------------

/// One normalized record, ready for the stream writer.
///
/// Serializes untagged: each written record is the flat key/value shape of
/// its variant, so readers consume an ordered sequence of self-describing
/// records without a schema registry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DetailRecord {
    User(UserDetail),
    Repository(RepositoryDetail),
    PullRequest(PullRequestDetail),
    Issue(IssueDetail),
}

// ---------------------------------------------------------------------------

fn login_of(account: Option<&Account>) -> Option<String> {
    account.map(|a| a.login.clone())
}

fn logins_of(accounts: &[Account]) -> Vec<String> {
    accounts.iter().map(|a| a.login.clone()).collect()
}
