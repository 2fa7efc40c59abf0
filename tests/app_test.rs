//! End-to-end startup: config file, import from a mock API, query

use players_api::{
    app::prepare, error::ImportError, import::Importer, service::GetPlayersQuery, AppError,
    Config,
};
use serde_json::json;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

fn write_config(server: &MockServer, sports: &[&str]) -> NamedTempFile {
    let config = json!({
        "inMemory": true,
        "dbFilePath": "",
        "port": "8080",
        "cbsApiUrl": format!("{}/players/{{{{SPORT}}}}", server.uri()),
        "sports": sports,
        "importBatchSize": 2
    });
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config.to_string().as_bytes()).unwrap();
    file
}

fn importer_for(config: &Config) -> Importer {
    Importer::from_config(config).with_delay(Duration::from_millis(1))
}

#[tokio::test]
async fn test_prepare_imports_and_serves_queries() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players/baseball"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "body": { "players": [
                { "firstname": "Derek", "lastname": "Jeter", "position": "SS", "age": 40 },
                { "firstname": "Cal", "lastname": "Ripken", "position": "SS", "age": 37 },
                { "firstname": "", "lastname": "Unknown", "position": "SS", "age": 50 },
                { "firstname": "Mystery", "lastname": "Man", "position": "DH" }
            ]}
        })))
        .mount(&server)
        .await;

    let file = write_config(&server, &["baseball"]);
    let config = Config::from_file(file.path()).unwrap();
    config.validate().unwrap();

    let service = prepare(&config, &importer_for(&config)).await.unwrap();
    assert_eq!(service.players().count().unwrap(), 3);

    let data = service
        .get_players(GetPlayersQuery::default())
        .data
        .unwrap();

    // The DH has age 0, so that position has no average.
    assert_eq!(data.len(), 2);
    assert_eq!(data[0].name_brief, "D. J.");
    assert_eq!(data[0].average_position_age_diff, 1);
    assert_eq!(data[1].average_position_age_diff, -2);
}

#[tokio::test]
async fn test_prepare_fails_when_api_unreachable() {
    let server = MockServer::start().await;
    let file = write_config(&server, &["football"]);
    let mut config = Config::from_file(file.path()).unwrap();
    config.cbs_api_url = "http://127.0.0.1:1/players/{{SPORT}}".to_string();

    let result = prepare(&config, &importer_for(&config)).await;

    assert!(matches!(result, Err(AppError::Import(ImportError::Http(_)))));
}

#[tokio::test]
async fn test_prepare_fails_on_missing_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "body": null })))
        .mount(&server)
        .await;

    let file = write_config(&server, &["basketball"]);
    let config = Config::from_file(file.path()).unwrap();

    let result = prepare(&config, &importer_for(&config)).await;

    assert!(matches!(
        result,
        Err(AppError::Import(ImportError::MissingBody { .. }))
    ));
}
