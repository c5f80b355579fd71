use httpmock::prelude::*;
use shopify_token_probe::{
    has_transport_failure, AccountCredentials, EndpointScheme, OauthTokenRequester, ProbeRunner,
};
use std::time::Duration;

fn account(label: &str, shop: String) -> AccountCredentials {
    AccountCredentials::new(label, shop, format!("id-{}", label), format!("sec-{}", label))
}

#[tokio::test]
async fn test_end_to_end_probe_of_both_accounts() {
    let retail_server = MockServer::start();
    let trade_server = MockServer::start();

    let retail_mock = retail_server.mock(|when, then| {
        when.method(POST)
            .path("/admin/oauth/access_token")
            .json_body(serde_json::json!({
                "client_id": "id-Retail",
                "client_secret": "sec-Retail",
                "grant_type": "client_credentials"
            }));
        then.status(200)
            .header("Content-Type", "application/json")
            .body(r#"{"access_token":"tok_retail","scope":"read_products"}"#);
    });

    let trade_mock = trade_server.mock(|when, then| {
        when.method(POST).path("/admin/oauth/access_token");
        then.status(401)
            .header("Content-Type", "application/json")
            .body(r#"{"errors":"invalid_client"}"#);
    });

    let accounts = vec![
        account("Retail", retail_server.address().to_string()),
        account("Trade", trade_server.address().to_string()),
    ];

    let requester =
        OauthTokenRequester::with_scheme(Duration::from_secs(5), EndpointScheme::Http).unwrap();

    let mut out = Vec::new();
    let reports = {
        let mut runner = ProbeRunner::new(requester, &mut out);
        runner.run(&accounts).await.unwrap()
    };

    // Exactly one POST per account, nothing extra.
    retail_mock.assert();
    trade_mock.assert();

    let output = String::from_utf8(out).unwrap();
    let retail_pos = output.find("--- Testing Retail ---").unwrap();
    let trade_pos = output.find("--- Testing Trade ---").unwrap();
    assert!(retail_pos < trade_pos);

    assert!(output.contains("Status: 200"));
    assert!(output.contains(r#"Response: {"access_token":"tok_retail","scope":"read_products"}"#));
    assert!(output.contains("Status: 401"));
    assert!(output.contains(r#"Response: {"errors":"invalid_client"}"#));

    // A 401 exchange still counts as a completed probe.
    assert_eq!(reports.len(), 2);
    assert!(!has_transport_failure(&reports));
}

#[tokio::test]
async fn test_unreachable_first_account_still_probes_the_second() {
    // Grab a free port and release it so the connection is refused.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let dead_addr = listener.local_addr().unwrap();
    drop(listener);

    let trade_server = MockServer::start();
    let trade_mock = trade_server.mock(|when, then| {
        when.method(POST).path("/admin/oauth/access_token");
        then.status(200)
            .header("Content-Type", "application/json")
            .body(r#"{"access_token":"tok_trade"}"#);
    });

    let accounts = vec![
        account("Retail", dead_addr.to_string()),
        account("Trade", trade_server.address().to_string()),
    ];

    let requester =
        OauthTokenRequester::with_scheme(Duration::from_secs(5), EndpointScheme::Http).unwrap();

    let mut out = Vec::new();
    let reports = {
        let mut runner = ProbeRunner::new(requester, &mut out);
        runner.run(&accounts).await.unwrap()
    };

    trade_mock.assert();

    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("--- Testing Retail ---"));
    assert!(output.contains("Transport error:"));
    assert!(output.contains("--- Testing Trade ---"));
    assert!(output.contains(r#"Response: {"access_token":"tok_trade"}"#));

    assert!(reports[0].is_transport_failure());
    assert!(!reports[1].is_transport_failure());
    assert!(has_transport_failure(&reports));
}
