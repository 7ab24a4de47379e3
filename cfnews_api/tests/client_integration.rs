use cfnews_api::{Client, Error, FundFilter, OperationFilter};
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn client_for(server: &MockServer) -> Client {
    Client::with_base_url("test-key", &server.uri()).unwrap()
}

#[tokio::test]
async fn search_operations_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("operations.json");

    Mock::given(method("GET"))
        .and(path("/operation"))
        .and(query_param("page", "1"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client
        .search_operations(1, &OperationFilter::default())
        .await
        .unwrap();

    assert_eq!(result["total"], 25);
    assert_eq!(result["items"].as_array().unwrap().len(), 2);
    assert_eq!(result["items"][0]["op_nom"], "Reprise de Groupe Ventoux");
}

#[tokio::test]
async fn search_operations_nests_the_encoded_filters_in_q() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("operations.json");

    // The inner query string arrives as the literal value of `q`; the outer
    // form-encoding that wraps it is undone by the matcher.
    Mock::given(method("GET"))
        .and(path("/operation"))
        .and(query_param(
            "q",
            "op_type%5B%5D=271&sort_attribute=fiche_operation_operation_date_value_dt&sort_type=descending",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let filter = OperationFilter::default().with_operation_type("LBO");
    assert!(client.search_operations(1, &filter).await.is_ok());
}

#[tokio::test]
async fn empty_filter_omits_the_q_parameter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vehicule"))
        .and(query_param("page", "2"))
        .and(query_param_is_missing("q"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"items": []}"#))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.search_funds(2, &FundFilter::default()).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn server_error_surfaces_status_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/operation"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client
        .search_operations(1, &OperationFilter::default())
        .await;
    match result {
        Err(Error::HttpStatus { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "Internal Server Error");
        }
        other => panic!("expected HttpStatus error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn long_multibyte_error_bodies_truncate_at_a_char_boundary() {
    let mock_server = MockServer::start().await;

    // 2001 bytes: "é" is two bytes, so byte 2000 falls inside a character.
    let long_body = format!("a{}", "é".repeat(1000));
    Mock::given(method("GET"))
        .and(path("/operation"))
        .respond_with(ResponseTemplate::new(500).set_body_string(&long_body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client
        .search_operations(1, &OperationFilter::default())
        .await;
    match result {
        Err(Error::HttpStatus { status, body }) => {
            assert_eq!(status, 500);
            assert!(body.ends_with("...[truncated]"));
            assert!(body.len() <= 2000 + "...[truncated]".len());
        }
        other => panic!("expected HttpStatus error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn malformed_json_is_a_request_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/operation"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client
        .search_operations(1, &OperationFilter::default())
        .await;
    assert!(matches!(result, Err(Error::RequestFailed)));
}

#[tokio::test]
async fn portfolio_lookups_use_the_fixed_sub_paths() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("portfolio.json");

    Mock::given(method("GET"))
        .and(path("/acteur/portfolio_now/42"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/acteur/portfolio_sortie/42"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let current = client.actor_portfolio_current(42).await.unwrap();
    assert_eq!(current["acteur_nom"], "Alpha Gestion");
    let exits = client.actor_portfolio_exits(42).await.unwrap();
    assert_eq!(exits["portfolio"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn from_env_requires_the_api_key() {
    std::env::remove_var("CFNEWS_API_KEY");
    assert!(matches!(Client::from_env(), Err(Error::MissingApiKey)));

    std::env::set_var("CFNEWS_API_KEY", "");
    assert!(matches!(Client::from_env(), Err(Error::MissingApiKey)));

    std::env::set_var("CFNEWS_API_KEY", "test-key");
    assert!(Client::from_env().is_ok());
    std::env::remove_var("CFNEWS_API_KEY");
}
