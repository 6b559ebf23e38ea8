use std::collections::HashMap;
use std::sync::RwLock;

use anyhow::Context;
use async_trait::async_trait;
use aws_config::{defaults, BehaviorVersion};
use aws_credential_types::Credentials;
use aws_sdk_dynamodb::{config::Region, types::AttributeValue, Client};

use crate::config::StoreConfig;
use crate::users::repo::UserRecord;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Upsert. Overwrites whatever is already under the key.
    async fn put_user(&self, user: &UserRecord) -> anyhow::Result<()>;
    async fn get_user(&self, user_id: &str) -> anyhow::Result<Option<UserRecord>>;
    /// Unconditional delete. Prior existence is not reported.
    async fn delete_user(&self, user_id: &str) -> anyhow::Result<()>;
}

/// DynamoDB-backed store. One table, partition key `user_id`, every
/// attribute a plain string.
#[derive(Clone)]
pub struct DynamoStore {
    client: Client,
    table: String,
}

impl DynamoStore {
    pub async fn new(cfg: &StoreConfig) -> anyhow::Result<Self> {
        let mut loader =
            defaults(BehaviorVersion::latest()).region(Region::new(cfg.region.clone()));

        // Static credentials when configured, otherwise the SDK's default
        // provider chain (env, profile, instance metadata).
        if let (Some(access_key), Some(secret_key)) = (&cfg.access_key, &cfg.secret_key) {
            loader = loader.credentials_provider(Credentials::new(
                access_key.clone(),
                secret_key.clone(),
                None,
                None,
                "static",
            ));
        }
        if let Some(endpoint) = &cfg.endpoint {
            loader = loader.endpoint_url(endpoint);
        }

        let shared = loader.load().await;
        Ok(Self {
            client: Client::new(&shared),
            table: cfg.table.clone(),
        })
    }
}

fn string_attr(item: &HashMap<String, AttributeValue>, name: &str) -> String {
    item.get(name)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .unwrap_or_default()
}

#[async_trait]
impl UserStore for DynamoStore {
    async fn put_user(&self, user: &UserRecord) -> anyhow::Result<()> {
        self.client
            .put_item()
            .table_name(&self.table)
            .item("user_id", AttributeValue::S(user.user_id.clone()))
            .item("lastname", AttributeValue::S(user.lastname.clone()))
            .item("dob", AttributeValue::S(user.dob.clone()))
            .item("address", AttributeValue::S(user.address.clone()))
            .item("gender", AttributeValue::S(user.gender.clone()))
            .item("email", AttributeValue::S(user.email.clone()))
            .item("phone_number", AttributeValue::S(user.phone_number.clone()))
            .send()
            .await
            .context("dynamodb put_item")?;
        Ok(())
    }

    async fn get_user(&self, user_id: &str) -> anyhow::Result<Option<UserRecord>> {
        let out = self
            .client
            .get_item()
            .table_name(&self.table)
            .key("user_id", AttributeValue::S(user_id.to_string()))
            .send()
            .await
            .context("dynamodb get_item")?;

        let Some(item) = out.item() else {
            return Ok(None);
        };
        Ok(Some(UserRecord {
            user_id: string_attr(item, "user_id"),
            lastname: string_attr(item, "lastname"),
            dob: string_attr(item, "dob"),
            address: string_attr(item, "address"),
            gender: string_attr(item, "gender"),
            email: string_attr(item, "email"),
            phone_number: string_attr(item, "phone_number"),
        }))
    }

    async fn delete_user(&self, user_id: &str) -> anyhow::Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table)
            .key("user_id", AttributeValue::S(user_id.to_string()))
            .send()
            .await
            .context("dynamodb delete_item")?;
        Ok(())
    }
}

/// HashMap-backed store, stands in for DynamoDB in tests.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.read().expect("users lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn put_user(&self, user: &UserRecord) -> anyhow::Result<()> {
        self.users
            .write()
            .expect("users lock poisoned")
            .insert(user.user_id.clone(), user.clone());
        Ok(())
    }

    async fn get_user(&self, user_id: &str) -> anyhow::Result<Option<UserRecord>> {
        Ok(self
            .users
            .read()
            .expect("users lock poisoned")
            .get(user_id)
            .cloned())
    }

    async fn delete_user(&self, user_id: &str) -> anyhow::Result<()> {
        self.users
            .write()
            .expect("users lock poisoned")
            .remove(user_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(id: &str) -> UserRecord {
        UserRecord {
            user_id: id.to_string(),
            lastname: "Doe".into(),
            dob: "1990-01-01".into(),
            address: String::new(),
            gender: String::new(),
            email: "doe@example.com".into(),
            phone_number: "5551234567".into(),
        }
    }

    #[tokio::test]
    async fn put_then_get_returns_record() {
        let store = MemoryStore::new();
        let user = sample_user("u-1");
        store.put_user(&user).await.unwrap();
        assert_eq!(store.get_user("u-1").await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn get_absent_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get_user("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn put_overwrites_existing_record() {
        let store = MemoryStore::new();
        store.put_user(&sample_user("u-1")).await.unwrap();
        let mut updated = sample_user("u-1");
        updated.address = "123 Main St".into();
        store.put_user(&updated).await.unwrap();
        assert_eq!(store.get_user("u-1").await.unwrap(), Some(updated));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = MemoryStore::new();
        store.put_user(&sample_user("u-1")).await.unwrap();
        store.delete_user("u-1").await.unwrap();
        store.delete_user("u-1").await.unwrap();
        assert!(store.is_empty());
    }
}
