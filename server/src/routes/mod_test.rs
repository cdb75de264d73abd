use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn api_context_provides_config_and_transport() {
    let owner = Owner::new();
    owner.with(|| {
        let api = ApiConfig::new("https://api.example.test/");
        let transport = ReqwestTransport::with_defaults().unwrap();
        api_context(api, transport)();

        assert_eq!(use_context::<ApiConfig>().map(|c| c.base_url().to_owned()).as_deref(), Some("https://api.example.test"));
        assert!(use_context::<ReqwestTransport>().is_some());
    });
}
