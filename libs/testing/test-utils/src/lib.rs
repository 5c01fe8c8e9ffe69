//! Shared test utilities for domain testing
//!
//! This crate provides reusable test infrastructure for all domain crates:
//! - `TestDatabase`: PostgreSQL container with migrations applied (feature: "postgres")
//! - `TestDataBuilder`: Deterministic test data and signed tokens (always available)
//! - `assertions`: Custom assertion helpers (always available)
//!
//! # Features
//!
//! - `postgres` (default): Enables PostgreSQL test infrastructure
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let category_name = builder.name("category", "main");
//!     let admin = builder.admin_token();
//! }
//! ```

use axum_helpers::{JwtAuth, JwtConfig};

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Secret shared by [`TestDataBuilder::jwt_auth`] and the tokens it signs.
pub const TEST_JWT_SECRET: &str = "test-secret-key-for-handler-tests-only";

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by using seeded random data.
pub struct TestDataBuilder {
    seed: u64,
    auth: JwtAuth,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        let config = JwtConfig::new(TEST_JWT_SECRET).expect("test secret is long enough");
        Self {
            seed,
            auth: JwtAuth::new(&config),
        }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_category");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a unique name for testing
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.name("category", "main"), "test-category-7-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Token subject derived from the seed
    pub fn subject(&self) -> String {
        format!("user-{}", self.seed)
    }

    /// Verifier matching the tokens this builder signs
    pub fn jwt_auth(&self) -> JwtAuth {
        self.auth.clone()
    }

    /// Signed bearer token carrying `roles`
    pub fn token(&self, roles: &[&str]) -> String {
        let roles: Vec<String> = roles.iter().map(|r| r.to_string()).collect();
        self.auth
            .create_access_token(&self.subject(), "Test User", &roles)
            .expect("Failed to sign test token")
    }

    pub fn admin_token(&self) -> String {
        self.token(&["admin"])
    }

    pub fn user_token(&self) -> String {
        self.token(&["user"])
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.subject(), builder2.subject());
        assert_eq!(
            builder1.name("category", "test"),
            builder2.name("category", "test")
        );
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        assert_ne!(builder1.subject(), builder2.subject());
    }

    #[test]
    fn test_tokens_verify_with_builder_auth() {
        let builder = TestDataBuilder::new(1);

        let claims = builder.jwt_auth().verify_token(&builder.admin_token()).unwrap();
        assert!(claims.is_admin());
        assert_eq!(claims.sub, "user-1");

        let claims = builder.jwt_auth().verify_token(&builder.user_token()).unwrap();
        assert!(!claims.is_admin());
    }
}
