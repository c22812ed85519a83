use anyhow::Context;
use clap::Parser;
use forge_core::ProviderError;
use forge_core::config::{AppConfig, default_config_path};
use forge_core::model::{OrganizationRef, RepositoryRef, UserRef};
use forge_core::provider::GitProvider;
use forge_gitea::{GiteaProvider, auth};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod args;
mod commands;
mod shared;
mod token_cmd;

use args::*;

pub use app::run;
use commands::dispatch;
use shared::{apply_overrides, map_provider_error, print_json};
use token_cmd::handle_token;
