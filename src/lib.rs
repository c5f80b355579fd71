pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::requester::{EndpointScheme, OauthTokenRequester};
pub use core::runner::{has_transport_failure, ProbeRunner};
pub use domain::model::{AccountCredentials, ProbeReport, TokenExchange};
pub use domain::ports::TokenRequester;
pub use utils::error::{ProbeError, Result};
