pub mod requester;
pub mod runner;

pub use crate::domain::model::{AccountCredentials, ProbeReport, TokenExchange};
pub use crate::domain::ports::TokenRequester;
pub use crate::utils::error::Result;
