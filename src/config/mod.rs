use crate::domain::model::AccountCredentials;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_shop_domain, Validate,
};
use clap::Parser;

/// Process configuration. Credentials are never compiled in: each value comes
/// from a CLI flag or the matching environment variable.
#[derive(Debug, Clone, Parser)]
#[command(name = "shopify-token-probe")]
#[command(about = "Smoke-tests OAuth client-credentials token endpoints for two storefront accounts")]
pub struct CliConfig {
    #[arg(long, env = "SHOP_RETAIL")]
    pub retail_shop: String,

    #[arg(long, env = "CLIENT_ID_RETAIL")]
    pub retail_client_id: String,

    #[arg(long, env = "CLIENT_SECRET_RETAIL", hide_env_values = true)]
    pub retail_client_secret: String,

    #[arg(long, env = "SHOP_TRADE")]
    pub trade_shop: String,

    #[arg(long, env = "CLIENT_ID_TRADE")]
    pub trade_client_id: String,

    #[arg(long, env = "CLIENT_SECRET_TRADE", hide_env_values = true)]
    pub trade_client_secret: String,

    #[arg(long, default_value = "30", help = "Per-request timeout in seconds")]
    pub timeout_secs: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// The two account records, in the order they are probed.
    pub fn accounts(&self) -> Vec<AccountCredentials> {
        vec![
            AccountCredentials::new(
                "Retail",
                self.retail_shop.clone(),
                self.retail_client_id.clone(),
                self.retail_client_secret.clone(),
            ),
            AccountCredentials::new(
                "Trade",
                self.trade_shop.clone(),
                self.trade_client_id.clone(),
                self.trade_client_secret.clone(),
            ),
        ]
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_shop_domain("retail_shop", &self.retail_shop)?;
        validate_non_empty_string("retail_client_id", &self.retail_client_id)?;
        validate_non_empty_string("retail_client_secret", &self.retail_client_secret)?;

        validate_shop_domain("trade_shop", &self.trade_shop)?;
        validate_non_empty_string("trade_client_id", &self.trade_client_id)?;
        validate_non_empty_string("trade_client_secret", &self.trade_client_secret)?;

        validate_positive_number("timeout_secs", self.timeout_secs, 1)?;

        Ok(())
    }
}
