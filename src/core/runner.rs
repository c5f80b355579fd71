use crate::domain::model::{AccountCredentials, ProbeReport};
use crate::domain::ports::TokenRequester;
use crate::utils::error::Result;
use std::io::Write;

/// Drives the token requester over a list of accounts, strictly in order,
/// and reports each raw outcome to the writer.
///
/// A transport failure on one account is recorded and reported, then the
/// runner moves on to the next account; the caller decides what the
/// collected reports mean for the exit code.
pub struct ProbeRunner<R: TokenRequester, W: Write> {
    requester: R,
    out: W,
}

impl<R: TokenRequester, W: Write> ProbeRunner<R, W> {
    pub fn new(requester: R, out: W) -> Self {
        Self { requester, out }
    }

    pub async fn run(&mut self, accounts: &[AccountCredentials]) -> Result<Vec<ProbeReport>> {
        let mut reports = Vec::with_capacity(accounts.len());

        for (i, account) in accounts.iter().enumerate() {
            if i > 0 {
                writeln!(self.out)?;
            }
            writeln!(self.out, "--- Testing {} ---", account.label)?;
            writeln!(self.out, "Testing {}...", account.shop_domain)?;

            let outcome = self.requester.request_token(account).await;

            match &outcome {
                Ok(exchange) => {
                    writeln!(self.out, "Status: {}", exchange.status)?;
                    writeln!(self.out, "Response: {}", exchange.body)?;
                }
                Err(e) => {
                    tracing::warn!("Token request for {} failed: {}", account.shop_domain, e);
                    writeln!(self.out, "Transport error: {}", e)?;
                }
            }

            reports.push(ProbeReport {
                label: account.label.clone(),
                shop_domain: account.shop_domain.clone(),
                outcome,
            });
        }

        Ok(reports)
    }
}

pub fn has_transport_failure(reports: &[ProbeReport]) -> bool {
    reports.iter().any(ProbeReport::is_transport_failure)
}
