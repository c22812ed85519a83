//! Gitea implementation of the `forge-core` provider traits.
//!
//! Layers, bottom up: [`http`] moves bytes, [`api`] speaks the Gitea v1 REST
//! API, [`client`] paginates, validates and translates errors, and the
//! provider clients convert to the domain model.

pub mod api;
pub mod auth;
pub mod client;
pub mod commits;
mod convert;
pub mod deploy_keys;
pub mod errors;
pub mod http;
pub mod models;
pub mod organizations;
pub mod paging;
pub mod provider;
pub mod pull_requests;
pub mod repositories;
pub mod team_access;
#[cfg(test)]
mod testing;
pub mod validate;

pub use client::{GiteaClient, GiteaClientImpl};
pub use errors::handle_http_error;
pub use paging::{PageLimit, all_pages, all_pages_with_limit};
pub use provider::GiteaProvider;
