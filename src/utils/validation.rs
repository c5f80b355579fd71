use crate::utils::error::{ProbeError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ProbeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// A shop domain is a bare `host` or `host:port` — no scheme, no path,
/// no credentials. The token URL is derived from it later.
pub fn validate_shop_domain(field_name: &str, domain: &str) -> Result<()> {
    validate_non_empty_string(field_name, domain)?;

    if domain.contains("://") {
        return Err(ProbeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: domain.to_string(),
            reason: "Shop domain must not include a scheme".to_string(),
        });
    }

    if domain.contains('/') || domain.contains(char::is_whitespace) {
        return Err(ProbeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: domain.to_string(),
            reason: "Shop domain must be a bare host, without path or whitespace".to_string(),
        });
    }

    match Url::parse(&format!("https://{}", domain)) {
        Ok(url) if url.host_str().is_some() => Ok(()),
        Ok(_) => Err(ProbeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: domain.to_string(),
            reason: "Shop domain has no host component".to_string(),
        }),
        Err(e) => Err(ProbeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: domain.to_string(),
            reason: format!("Invalid host: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(ProbeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_shop_domain() {
        assert!(validate_shop_domain("retail_shop", "example.myshopify.com").is_ok());
        assert!(validate_shop_domain("retail_shop", "127.0.0.1:8080").is_ok());
        assert!(validate_shop_domain("retail_shop", "").is_err());
        assert!(validate_shop_domain("retail_shop", "https://example.myshopify.com").is_err());
        assert!(validate_shop_domain("retail_shop", "example.com/admin").is_err());
        assert!(validate_shop_domain("retail_shop", "has space.com").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("client_id", "abc").is_ok());
        assert!(validate_non_empty_string("client_id", "   ").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("timeout_secs", 30, 1).is_ok());
        assert!(validate_positive_number("timeout_secs", 0, 1).is_err());
    }
}
