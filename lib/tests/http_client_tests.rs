//! Integration tests for the curl transport and its builder

use adyen_lib::{HttpClientBuilder, HttpRequest, Transport};

#[test]
fn test_http_client_builder_variants() {
    let test_cases: Vec<Box<dyn Fn() -> HttpClientBuilder>> = vec![
        Box::new(HttpClientBuilder::default),
        Box::new(HttpClientBuilder::new),
        Box::new(|| HttpClientBuilder::new().verbose(true)),
        Box::new(|| HttpClientBuilder::new().timeout(30)),
        Box::new(|| HttpClientBuilder::new().follow_redirects(true)),
        Box::new(|| HttpClientBuilder::new().user_agent("adyen-test/1.0")),
        Box::new(|| HttpClientBuilder::new().header("X-Request-Id", "abc")),
        Box::new(|| {
            HttpClientBuilder::new()
                .timeout(60)
                .user_agent(String::from("adyen-test/1.0"))
                .headers(&[("Accept".to_string(), "application/json".to_string())])
        }),
    ];

    for (i, builder_fn) in test_cases.iter().enumerate() {
        let client = builder_fn().build();
        assert!(client.is_ok(), "Builder test case {i} should succeed");
    }
}

#[test]
fn test_connection_refused_is_transport_error() {
    let mut client = HttpClientBuilder::new().timeout(5).build().unwrap();

    // nothing listens on port 1
    let request = HttpRequest::post("http://127.0.0.1:1/authorise")
        .basic_auth("USER", "PASSWORD")
        .header("Content-Type", "application/json;charset=utf-8")
        .body(b"{}".to_vec());

    let err = client.send(request).unwrap_err();
    assert!(err.is_transport(), "expected a transport error, got {err:?}");
}
