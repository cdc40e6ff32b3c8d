use echobot::core::config::DeploymentMode;
use echobot::core::token::{EnvTokenSource, SsmTokenSource, TokenSource};

#[test]
fn test_deployment_mode_parse() {
    assert_eq!(
        DeploymentMode::parse(Some("production")),
        DeploymentMode::Production
    );
    assert_eq!(DeploymentMode::parse(Some("staging")), DeploymentMode::Other);
    assert_eq!(DeploymentMode::parse(Some("")), DeploymentMode::Other);
    assert_eq!(DeploymentMode::parse(None), DeploymentMode::Other);
}

#[test]
fn test_production_parameter_name() {
    // The production token lives under a fixed group/key pair
    let source = SsmTokenSource::new();
    assert_eq!(source.parameter_name(), "/prod-config/telegram/token");
}

#[tokio::test]
async fn test_env_token_source_resolves_unset_var_to_empty() {
    // An absent variable is not an error at resolution time
    let source = EnvTokenSource::with_var("ECHOBOT_TEST_TOKEN_UNSET");
    let token = source.resolve().await.unwrap();
    assert_eq!(token, "");
}

#[tokio::test]
async fn test_env_token_source_resolves_set_var() {
    // SAFETY: the variable name is unique to this test, so no other thread
    // reads or writes it concurrently
    unsafe { std::env::set_var("ECHOBOT_TEST_TOKEN_SET", "T1") };

    let source = EnvTokenSource::with_var("ECHOBOT_TEST_TOKEN_SET");
    let token = source.resolve().await.unwrap();
    assert_eq!(token, "T1");
}
