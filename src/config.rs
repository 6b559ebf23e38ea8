use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub table: String,
    pub region: String,
    /// Endpoint override, e.g. a local DynamoDB at http://localhost:8000.
    pub endpoint: Option<String>,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub store: StoreConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let store = StoreConfig {
            table: std::env::var("USERS_TABLE").unwrap_or_else(|_| "UsersTable".into()),
            region: std::env::var("AWS_REGION").unwrap_or_else(|_| "us-west-2".into()),
            endpoint: std::env::var("DYNAMODB_ENDPOINT").ok(),
            access_key: std::env::var("AWS_ACCESS_KEY_ID").ok(),
            secret_key: std::env::var("AWS_SECRET_ACCESS_KEY").ok(),
        };
        Ok(Self { store })
    }
}
