use crate::utils::error::ProbeError;

/// Credentials for one storefront account. Built once at startup from
/// CLI/environment configuration and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct AccountCredentials {
    /// Human-readable section name, e.g. "Retail" or "Trade".
    pub label: String,
    /// Bare storefront host, e.g. "example.myshopify.com". No scheme, no path.
    pub shop_domain: String,
    pub client_id: String,
    pub client_secret: String,
}

impl AccountCredentials {
    pub fn new(label: &str, shop_domain: String, client_id: String, client_secret: String) -> Self {
        Self {
            label: label.to_string(),
            shop_domain,
            client_id,
            client_secret,
        }
    }
}

/// Raw outcome of one completed HTTP exchange with the token endpoint.
/// The body is kept as opaque text; a 401 is as much a "completed exchange"
/// as a 200.
#[derive(Debug, Clone)]
pub struct TokenExchange {
    pub status: u16,
    pub body: String,
}

/// Tagged per-account result collected by the runner.
#[derive(Debug)]
pub struct ProbeReport {
    pub label: String,
    pub shop_domain: String,
    pub outcome: Result<TokenExchange, ProbeError>,
}

impl ProbeReport {
    pub fn is_transport_failure(&self) -> bool {
        self.outcome.is_err()
    }
}
