use std::sync::Arc;

use chrono::Utc;

use crate::models::user::User;
use crate::repositories::errors::user_repository_errors::UserRepositoryError;
use crate::repositories::user_repository::UserRepository;
use crate::services::errors::user_service_errors::UserServiceError;

pub struct UserService {
    repository: Arc<dyn UserRepository + Send + Sync>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository + Send + Sync>) -> Self {
        UserService { repository }
    }

    pub async fn register_user(
        &self,
        user_name: &str,
        password: &str,
        email: &str,
    ) -> Result<User, UserServiceError> {
        if user_name.is_empty() || password.is_empty() || email.is_empty() {
            return Err(UserServiceError::ValidationError(
                "User name, password, or email cannot be empty".to_string(),
            ));
        }
        if self
            .repository
            .name_exists(user_name)
            .await
            .map_err(|e| UserServiceError::RepositoryError(e.to_string()))?
        {
            return Err(UserServiceError::UserAlreadyExists);
        }
        let user = User::new(
            user_name.to_string(),
            password.to_string(),
            email.to_string(),
        );
        self.repository
            .create_user(&user)
            .await
            .map_err(|e| UserServiceError::RepositoryError(e.to_string()))?;
        Ok(user)
    }

    pub async fn get_user_by_id(&self, user_id: &str) -> Result<User, UserServiceError> {
        if user_id.is_empty() {
            return Err(UserServiceError::ValidationError(
                "User ID cannot be empty".to_string(),
            ));
        }
        self.repository
            .get_user_by_id(user_id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::NotFound => UserServiceError::UserNotFound,
                _ => UserServiceError::RepositoryError(e.to_string()),
            })
    }

    /// Credential-free profile lookup; secure fields are purged before the
    /// record leaves the service.
    pub async fn get_user_profile(&self, user_name: &str) -> Result<User, UserServiceError> {
        if user_name.is_empty() {
            return Err(UserServiceError::ValidationError(
                "User name cannot be empty".to_string(),
            ));
        }
        let mut user = self
            .repository
            .get_user_by_name(user_name)
            .await
            .map_err(|e| match e {
                UserRepositoryError::NotFound => UserServiceError::UserNotFound,
                _ => UserServiceError::RepositoryError(e.to_string()),
            })?;
        user.purge_secure_data();
        Ok(user)
    }

    /// Login-style lookup. A wrong password is indistinguishable from a
    /// missing account.
    pub async fn get_user_by_credentials(
        &self,
        user_name: &str,
        password: &str,
    ) -> Result<User, UserServiceError> {
        if user_name.is_empty() || password.is_empty() {
            return Err(UserServiceError::ValidationError(
                "User name or password cannot be empty".to_string(),
            ));
        }
        match self.repository.get_user_by_name(user_name).await {
            Ok(user) if user.password == password => Ok(user),
            Ok(_) => Err(UserServiceError::InvalidCredentials),
            Err(UserRepositoryError::NotFound) => Err(UserServiceError::InvalidCredentials),
            Err(e) => Err(UserServiceError::RepositoryError(e.to_string())),
        }
    }

    pub async fn update_user(&self, user: &User) -> Result<(), UserServiceError> {
        self.repository
            .update_user(user)
            .await
            .map_err(|e| UserServiceError::RepositoryError(e.to_string()))
    }

    /// Replaces the stored presets after the caller proves ownership of the
    /// account.
    pub async fn update_presets(
        &self,
        user_name: &str,
        password: &str,
        presets: serde_json::Value,
    ) -> Result<(), UserServiceError> {
        let mut user = self.get_user_by_credentials(user_name, password).await?;
        user.presets = Some(presets);
        user.updated_at = Utc::now();
        self.update_user(&user).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::user_repository::MockUserRepository;

    fn stored_user() -> User {
        User::new(
            "magnus".to_string(),
            "password123".to_string(),
            "magnus@example.com".to_string(),
        )
    }

    #[tokio::test]
    async fn test_register_user_rejects_taken_name() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_name_exists()
            .returning(|_| Box::pin(async { Ok(true) }));

        let service = UserService::new(Arc::new(mock_repo));
        let result = service
            .register_user("magnus", "password123", "magnus@example.com")
            .await;
        assert!(matches!(
            result.unwrap_err(),
            UserServiceError::UserAlreadyExists
        ));
    }

    #[tokio::test]
    async fn test_register_user_persists_new_account() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_name_exists()
            .returning(|_| Box::pin(async { Ok(false) }));
        mock_repo
            .expect_create_user()
            .withf(|user| user.user_name == "magnus" && user.rating == 800)
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));

        let service = UserService::new(Arc::new(mock_repo));
        let user = service
            .register_user("magnus", "password123", "magnus@example.com")
            .await
            .unwrap();
        assert_eq!(user.wins, 0);
        assert_eq!(user.gems, 0);
    }

    #[tokio::test]
    async fn test_register_user_rejects_empty_fields() {
        let mock_repo = MockUserRepository::new();
        let service = UserService::new(Arc::new(mock_repo));

        let result = service.register_user("", "password123", "a@example.com").await;
        assert!(matches!(
            result.unwrap_err(),
            UserServiceError::ValidationError(_)
        ));
    }

    #[tokio::test]
    async fn test_get_user_profile_purges_secure_fields() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_get_user_by_name()
            .returning(|_| Box::pin(async { Ok(stored_user()) }));

        let service = UserService::new(Arc::new(mock_repo));
        let profile = service.get_user_profile("magnus").await.unwrap();
        assert!(profile.password.is_empty());
        assert!(profile.email.is_empty());
        assert_eq!(profile.user_name, "magnus");
    }

    #[tokio::test]
    async fn test_login_with_wrong_password_looks_like_missing_account() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_get_user_by_name()
            .returning(|_| Box::pin(async { Ok(stored_user()) }));

        let service = UserService::new(Arc::new(mock_repo));
        let result = service.get_user_by_credentials("magnus", "wrong").await;
        assert!(matches!(
            result.unwrap_err(),
            UserServiceError::InvalidCredentials
        ));
    }

    #[tokio::test]
    async fn test_login_with_unknown_name_looks_like_missing_account() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_get_user_by_name()
            .returning(|_| Box::pin(async { Err(UserRepositoryError::NotFound) }));

        let service = UserService::new(Arc::new(mock_repo));
        let result = service.get_user_by_credentials("nobody", "password123").await;
        assert!(matches!(
            result.unwrap_err(),
            UserServiceError::InvalidCredentials
        ));
    }

    #[tokio::test]
    async fn test_update_presets_requires_matching_credentials() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_get_user_by_name()
            .returning(|_| Box::pin(async { Ok(stored_user()) }));

        let service = UserService::new(Arc::new(mock_repo));
        let result = service
            .update_presets("magnus", "wrong", serde_json::json!({"pieces": []}))
            .await;
        assert!(matches!(
            result.unwrap_err(),
            UserServiceError::InvalidCredentials
        ));
    }

    #[tokio::test]
    async fn test_update_presets_stores_new_blob() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_get_user_by_name()
            .returning(|_| Box::pin(async { Ok(stored_user()) }));
        mock_repo
            .expect_update_user()
            .withf(|user| user.presets == Some(serde_json::json!({"pieces": [1, 2, 3]})))
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));

        let service = UserService::new(Arc::new(mock_repo));
        service
            .update_presets(
                "magnus",
                "password123",
                serde_json::json!({"pieces": [1, 2, 3]}),
            )
            .await
            .unwrap();
    }
}
