//! Typed calls to the Gitea REST API (`/api/v1`).
//!
//! Every call performs exactly one HTTP request and returns the decoded
//! payload together with the response metadata, or an [`ApiError`] that keeps
//! whatever metadata was received.

use std::sync::Arc;

use reqwest::Url;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::http::{HttpError, HttpHeaders, HttpMethod, HttpRequest, HttpTransport, header_get};
use crate::models::{
    Commit, CreateKeyOption, CreatePullRequestOption, CreateRepoOption, DeployKey,
    EditRepoOption, MergePullRequestOption, Organization, PullRequest, Repository, Team, User,
};

/// Out-of-band information accompanying a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub headers: HttpHeaders,
}

impl Response {
    pub fn header(&self, name: &str) -> Option<&str> {
        header_get(&self.headers, name)
    }

    /// Total item count reported by list endpoints.
    pub fn total_count(&self) -> Option<u64> {
        self.header("x-total-count")?.parse().ok()
    }
}

#[derive(Debug, Error)]
#[error("{error}")]
pub struct ApiError {
    /// Missing when no response was received.
    pub response: Option<Response>,
    #[source]
    pub error: HttpError,
}

pub type ApiResult<T> = Result<(T, Response), ApiError>;

/// Page cursor. Zero values are left out of the query so the server picks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub page: u32,
    pub page_size: u32,
}

impl ListOptions {
    pub fn with_page_size(page_size: u32) -> Self {
        Self { page: 0, page_size }
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if self.page > 0 {
            query.push(("page", self.page.to_string()));
        }
        if self.page_size > 0 {
            query.push(("limit", self.page_size.to_string()));
        }
        query
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCommitOptions {
    pub list: ListOptions,
    pub sha: String,
}

#[derive(Clone)]
pub struct RestClient {
    transport: Arc<dyn HttpTransport>,
    host: String,
    token: Option<String>,
}

impl RestClient {
    pub fn new(host: &str, token: Option<String>, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            host: host.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn url(&self, segments: &[&str], query: &[(&str, String)]) -> Result<String, ApiError> {
        let invalid = |detail: String| ApiError {
            response: None,
            error: HttpError::Transport(format!("invalid host {}: {detail}", self.host)),
        };
        let mut url = Url::parse(&self.host).map_err(|e| invalid(e.to_string()))?;
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| invalid("cannot be a base URL".to_string()))?;
            path.pop_if_empty().extend(["api", "v1"]).extend(segments);
        }
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(key, value)| (*key, value.as_str())));
        }
        Ok(url.to_string())
    }

    fn send(
        &self,
        method: HttpMethod,
        segments: &[&str],
        query: &[(&str, String)],
        body: Option<Vec<u8>>,
    ) -> Result<(Vec<u8>, Response), ApiError> {
        let url = self.url(segments, query)?;
        let mut headers = vec![
            ("Accept".to_string(), "application/json".to_string()),
            ("User-Agent".to_string(), "forge-gitea".to_string()),
        ];
        if let Some(token) = &self.token {
            headers.push(("Authorization".to_string(), format!("token {token}")));
        }
        if body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        debug!(method = method.as_str(), url = %url, "gitea request");

        let response = self
            .transport
            .send(HttpRequest {
                method,
                url,
                headers,
                body: body.unwrap_or_default(),
            })
            .map_err(|error| ApiError {
                response: None,
                error,
            })?;

        let success = response.is_success();
        let meta = Response {
            status: response.status,
            headers: response.headers,
        };
        if !success {
            let message = String::from_utf8_lossy(&response.body).trim().to_string();
            return Err(ApiError {
                error: HttpError::Status {
                    status: meta.status,
                    message,
                },
                response: Some(meta),
            });
        }
        Ok((response.body, meta))
    }

    fn json<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        segments: &[&str],
        query: &[(&str, String)],
        body: Option<Vec<u8>>,
    ) -> ApiResult<T> {
        let (bytes, meta) = self.send(method, segments, query, body)?;
        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok((value, meta)),
            Err(err) => Err(ApiError {
                response: Some(meta),
                error: HttpError::Decode(err),
            }),
        }
    }

    fn empty(
        &self,
        method: HttpMethod,
        segments: &[&str],
        body: Option<Vec<u8>>,
    ) -> ApiResult<()> {
        let (_, meta) = self.send(method, segments, &[], body)?;
        Ok(((), meta))
    }

    fn encode<B: Serialize>(body: &B) -> Result<Vec<u8>, ApiError> {
        serde_json::to_vec(body).map_err(|err| ApiError {
            response: None,
            error: HttpError::Encode(err),
        })
    }

    pub fn get_org(&self, org: &str) -> ApiResult<Organization> {
        self.json(HttpMethod::Get, &["orgs", org], &[], None)
    }

    pub fn list_my_orgs(&self, opts: &ListOptions) -> ApiResult<Vec<Organization>> {
        self.json(HttpMethod::Get, &["user", "orgs"], &opts.query(), None)
    }

    pub fn list_org_teams(&self, org: &str, opts: &ListOptions) -> ApiResult<Vec<Team>> {
        self.json(HttpMethod::Get, &["orgs", org, "teams"], &opts.query(), None)
    }

    pub fn list_team_members(&self, team_id: i64, opts: &ListOptions) -> ApiResult<Vec<User>> {
        let id = team_id.to_string();
        self.json(HttpMethod::Get, &["teams", &id, "members"], &opts.query(), None)
    }

    pub fn get_repo(&self, owner: &str, repo: &str) -> ApiResult<Repository> {
        self.json(HttpMethod::Get, &["repos", owner, repo], &[], None)
    }

    pub fn list_org_repos(&self, org: &str, opts: &ListOptions) -> ApiResult<Vec<Repository>> {
        self.json(HttpMethod::Get, &["orgs", org, "repos"], &opts.query(), None)
    }

    pub fn list_user_repos(&self, user: &str, opts: &ListOptions) -> ApiResult<Vec<Repository>> {
        self.json(HttpMethod::Get, &["users", user, "repos"], &opts.query(), None)
    }

    pub fn create_repo(&self, req: &CreateRepoOption) -> ApiResult<Repository> {
        let body = Self::encode(req)?;
        self.json(HttpMethod::Post, &["user", "repos"], &[], Some(body))
    }

    pub fn create_org_repo(&self, org: &str, req: &CreateRepoOption) -> ApiResult<Repository> {
        let body = Self::encode(req)?;
        self.json(HttpMethod::Post, &["orgs", org, "repos"], &[], Some(body))
    }

    pub fn edit_repo(
        &self,
        owner: &str,
        repo: &str,
        req: &EditRepoOption,
    ) -> ApiResult<Repository> {
        let body = Self::encode(req)?;
        self.json(HttpMethod::Patch, &["repos", owner, repo], &[], Some(body))
    }

    pub fn delete_repo(&self, owner: &str, repo: &str) -> ApiResult<()> {
        self.empty(HttpMethod::Delete, &["repos", owner, repo], None)
    }

    pub fn list_deploy_keys(
        &self,
        owner: &str,
        repo: &str,
        opts: &ListOptions,
    ) -> ApiResult<Vec<DeployKey>> {
        self.json(HttpMethod::Get, &["repos", owner, repo, "keys"], &opts.query(), None)
    }

    pub fn create_deploy_key(
        &self,
        owner: &str,
        repo: &str,
        req: &CreateKeyOption,
    ) -> ApiResult<DeployKey> {
        let body = Self::encode(req)?;
        self.json(HttpMethod::Post, &["repos", owner, repo, "keys"], &[], Some(body))
    }

    pub fn delete_deploy_key(&self, owner: &str, repo: &str, id: i64) -> ApiResult<()> {
        let id = id.to_string();
        self.empty(HttpMethod::Delete, &["repos", owner, repo, "keys", &id], None)
    }

    pub fn list_repo_commits(
        &self,
        owner: &str,
        repo: &str,
        opts: &ListCommitOptions,
    ) -> ApiResult<Vec<Commit>> {
        let mut query = opts.list.query();
        if !opts.sha.is_empty() {
            query.push(("sha", opts.sha.clone()));
        }
        self.json(HttpMethod::Get, &["repos", owner, repo, "commits"], &query, None)
    }

    pub fn check_repo_team(&self, owner: &str, repo: &str, team: &str) -> ApiResult<Team> {
        self.json(HttpMethod::Get, &["repos", owner, repo, "teams", team], &[], None)
    }

    pub fn get_repo_teams(&self, owner: &str, repo: &str) -> ApiResult<Vec<Team>> {
        self.json(HttpMethod::Get, &["repos", owner, repo, "teams"], &[], None)
    }

    pub fn add_repo_team(&self, owner: &str, repo: &str, team: &str) -> ApiResult<()> {
        self.empty(HttpMethod::Put, &["repos", owner, repo, "teams", team], None)
    }

    pub fn remove_repo_team(&self, owner: &str, repo: &str, team: &str) -> ApiResult<()> {
        self.empty(HttpMethod::Delete, &["repos", owner, repo, "teams", team], None)
    }

    pub fn list_repo_pull_requests(
        &self,
        owner: &str,
        repo: &str,
        opts: &ListOptions,
    ) -> ApiResult<Vec<PullRequest>> {
        self.json(HttpMethod::Get, &["repos", owner, repo, "pulls"], &opts.query(), None)
    }

    pub fn create_pull_request(
        &self,
        owner: &str,
        repo: &str,
        req: &CreatePullRequestOption,
    ) -> ApiResult<PullRequest> {
        let body = Self::encode(req)?;
        self.json(HttpMethod::Post, &["repos", owner, repo, "pulls"], &[], Some(body))
    }

    pub fn get_pull_request(&self, owner: &str, repo: &str, index: i64) -> ApiResult<PullRequest> {
        let index = index.to_string();
        self.json(HttpMethod::Get, &["repos", owner, repo, "pulls", &index], &[], None)
    }

    pub fn merge_pull_request(
        &self,
        owner: &str,
        repo: &str,
        index: i64,
        req: &MergePullRequestOption,
    ) -> ApiResult<()> {
        let index = index.to_string();
        let body = Self::encode(req)?;
        self.empty(
            HttpMethod::Post,
            &["repos", owner, repo, "pulls", &index, "merge"],
            Some(body),
        )
    }
}
