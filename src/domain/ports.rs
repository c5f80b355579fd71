use crate::domain::model::{AccountCredentials, TokenExchange};
use crate::utils::error::Result;
use async_trait::async_trait;

/// One attempt to obtain an access token for a single account.
///
/// `Ok` means an HTTP exchange completed, whatever the status code.
/// `Err` is reserved for transport-level failures (DNS, connect, TLS,
/// timeout) where no response was received at all.
#[async_trait]
pub trait TokenRequester: Send + Sync {
    async fn request_token(&self, account: &AccountCredentials) -> Result<TokenExchange>;
}
