//! User service: bearer-token authentication and out-of-band provisioning.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use uuid::Uuid;

use crate::domain::models::user::User;
use crate::storage::traits::UserStore;

#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Resolve a bearer token to its user. `None` means the token is unknown;
    /// callers translate that into a 401.
    pub async fn authenticate(&self, token: &str) -> Result<Option<User>> {
        self.store.find_by_token(token).await
    }

    /// Create a user bound to an API token. There is no signup endpoint;
    /// operators (and tests) provision users directly.
    pub async fn provision_user(&self, name: &str, token: &str) -> Result<User> {
        let user = User {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
        };
        self.store.insert_user(&user, token).await?;
        info!("Provisioned user {} ({})", user.name, user.id);
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sqlite::db::DbConnection;
    use crate::storage::sqlite::SqliteUserRepository;

    async fn setup() -> UserService {
        let db = DbConnection::init_test()
            .await
            .expect("Failed to create test database");
        UserService::new(Arc::new(SqliteUserRepository::new(db)))
    }

    #[tokio::test]
    async fn authenticate_resolves_known_tokens_only() {
        let service = setup().await;

        let user = service.provision_user("Robin", "token-robin").await.unwrap();

        let found = service.authenticate("token-robin").await.unwrap().unwrap();
        assert_eq!(found.id, user.id);
        assert_eq!(found.name, "Robin");

        assert!(service.authenticate("token-nobody").await.unwrap().is_none());
    }
}
