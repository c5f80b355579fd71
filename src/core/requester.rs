use crate::domain::model::{AccountCredentials, TokenExchange};
use crate::domain::ports::TokenRequester;
use crate::utils::error::{ProbeError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

const TOKEN_PATH: &str = "/admin/oauth/access_token";
const GRANT_TYPE: &str = "client_credentials";

/// URL scheme for the token endpoint. `Http` exists for local mock
/// endpoints; real storefronts are always reached over HTTPS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointScheme {
    Https,
    Http,
}

impl EndpointScheme {
    fn as_str(self) -> &'static str {
        match self {
            Self::Https => "https",
            Self::Http => "http",
        }
    }
}

/// Wire payload for the client-credentials grant. Exactly these three
/// fields, nothing else.
#[derive(Debug, Serialize)]
struct TokenRequestBody<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    grant_type: &'static str,
}

/// Issues one POST to a storefront's token endpoint and reports the raw
/// exchange. Does not retry, does not branch on the status code.
pub struct OauthTokenRequester {
    client: Client,
    scheme: EndpointScheme,
}

impl OauthTokenRequester {
    pub fn new(timeout: Duration) -> Result<Self> {
        Self::with_scheme(timeout, EndpointScheme::Https)
    }

    pub fn with_scheme(timeout: Duration, scheme: EndpointScheme) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProbeError::ClientBuildError {
                message: e.to_string(),
            })?;

        Ok(Self { client, scheme })
    }

    fn token_url(&self, shop_domain: &str) -> String {
        format!("{}://{}{}", self.scheme.as_str(), shop_domain, TOKEN_PATH)
    }
}

#[async_trait]
impl TokenRequester for OauthTokenRequester {
    async fn request_token(&self, account: &AccountCredentials) -> Result<TokenExchange> {
        let url = self.token_url(&account.shop_domain);
        let body = TokenRequestBody {
            client_id: &account.client_id,
            client_secret: &account.client_secret,
            grant_type: GRANT_TYPE,
        };

        tracing::debug!("Requesting token from: {}", url);
        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status().as_u16();
        tracing::debug!("Token endpoint responded with status: {}", status);

        // The body is surfaced verbatim; even a 5xx is a completed exchange.
        let body = response.text().await?;

        Ok(TokenExchange { status, body })
    }
}
