use super::config::JwtConfig;
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default access token lifetime in seconds (15 minutes).
pub const ACCESS_TOKEN_TTL: i64 = 900;

/// Role name that unlocks catalog mutations.
pub const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,
    pub name: String,
    pub roles: Vec<String>,
    pub exp: i64,
    pub iat: i64,
    pub jti: String,
}

impl JwtClaims {
    /// Case-insensitive role check; a `ROLE_` prefix is ignored (`ROLE_ADMIN`).
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| {
            let r = r.trim();
            let bare = match r.get(..5) {
                Some(prefix) if prefix.eq_ignore_ascii_case("role_") => &r[5..],
                _ => r,
            };
            bare.eq_ignore_ascii_case(role)
        })
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(ADMIN_ROLE)
    }
}

/// Stateless HS256 token signer and verifier.
#[derive(Clone)]
pub struct JwtAuth {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: i64,
}

impl JwtAuth {
    pub fn new(config: &JwtConfig) -> Self {
        tracing::info!(ttl_secs = config.access_token_ttl_secs, "JWT auth initialized");
        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            ttl_secs: config.access_token_ttl_secs,
        }
    }

    /// Issues a signed access token. Used by tooling and tests; the service
    /// itself exposes no login endpoint.
    pub fn create_access_token(
        &self,
        subject: &str,
        name: &str,
        roles: &[String],
    ) -> eyre::Result<String> {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: subject.to_string(),
            name: name.to_string(),
            roles: roles.to_vec(),
            exp: (now + Duration::seconds(self.ttl_secs)).timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?;
        Ok(token)
    }

    /// Checks signature and expiry, returning the decoded claims.
    pub fn verify_token(&self, token: &str) -> eyre::Result<JwtClaims> {
        let data = decode::<JwtClaims>(token, &self.decoding, &Validation::new(Algorithm::HS256))?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> JwtAuth {
        JwtAuth::new(&JwtConfig::new("unit-test-secret-that-is-long-enough!").unwrap())
    }

    fn claims_with(roles: &[&str]) -> JwtClaims {
        JwtClaims {
            sub: "42".into(),
            name: "Jo".into(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            exp: 0,
            iat: 0,
            jti: "jti".into(),
        }
    }

    #[test]
    fn test_token_round_trip_keeps_roles() {
        let auth = auth();
        let token = auth
            .create_access_token("7", "Admin", &["admin".to_string()])
            .unwrap();

        let claims = auth.verify_token(&token).unwrap();
        assert_eq!(claims.sub, "7");
        assert!(claims.is_admin());
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let other = JwtAuth::new(&JwtConfig::new("a-completely-different-secret-value!!").unwrap());
        let token = other.create_access_token("7", "Mallory", &[]).unwrap();

        assert!(auth().verify_token(&token).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let mut config = JwtConfig::new("unit-test-secret-that-is-long-enough!").unwrap();
        config.access_token_ttl_secs = -3600;
        let auth = JwtAuth::new(&config);
        let token = auth.create_access_token("7", "Late", &[]).unwrap();

        assert!(auth.verify_token(&token).is_err());
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        assert!(auth().verify_token("not-a-jwt").is_err());
    }

    #[test]
    fn test_admin_role_matching() {
        assert!(claims_with(&["ADMIN"]).is_admin());
        assert!(claims_with(&["ROLE_ADMIN"]).is_admin());
        assert!(claims_with(&["user", "role_admin"]).is_admin());
        assert!(!claims_with(&["user"]).is_admin());
        assert!(!claims_with(&["ROLE_"]).is_admin());
        assert!(!claims_with(&[]).is_admin());
    }
}
