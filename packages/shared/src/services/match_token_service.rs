use chrono::{DateTime, Duration, SecondsFormat, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::services::errors::match_token_service_errors::MatchTokenError;

pub const DEFAULT_ISSUER: &str = "skirmish-api";
pub const DEFAULT_AUDIENCE: &str = "skirmish-client";

/// How long a match token authorizes a result submission, in minutes.
pub const TOKEN_VALIDITY_MINUTES: i64 = 120;

/// Clock drift tolerated on the expiry check, in seconds. Signature, issuer
/// and audience checks get no such slack.
pub const EXPIRY_LEEWAY_SECONDS: u64 = 10;

#[derive(Debug, Clone)]
pub struct MatchTokenConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub validity_minutes: i64,
}

impl MatchTokenConfig {
    pub fn new(secret: String) -> Self {
        MatchTokenConfig {
            secret,
            issuer: DEFAULT_ISSUER.to_string(),
            audience: DEFAULT_AUDIENCE.to_string(),
            validity_minutes: TOKEN_VALIDITY_MINUTES,
        }
    }

    /// Reads the signing secret from the environment. Aborts startup when the
    /// secret is missing or empty; the service must never come up unable to
    /// sign what it issues.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET environment variable must be set");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");
        MatchTokenConfig::new(secret)
    }
}

/// Claims carried by a match session token. `start` is the RFC 3339 instant
/// the session was authorized at and drives the minimum-duration guard at
/// settlement time.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatchTokenClaims {
    pub sub: String,
    pub start: String,
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
    pub aud: String,
}

impl MatchTokenClaims {
    pub fn start_time(&self) -> Result<DateTime<Utc>, MatchTokenError> {
        DateTime::parse_from_rfc3339(&self.start)
            .map(|instant| instant.with_timezone(&Utc))
            .map_err(|_| MatchTokenError::Malformed)
    }
}

pub struct MatchTokenService {
    config: MatchTokenConfig,
}

impl MatchTokenService {
    pub fn new(config: MatchTokenConfig) -> Self {
        MatchTokenService { config }
    }

    pub fn issue_token(&self, user_id: &str) -> Result<String, MatchTokenError> {
        self.issue_token_at(user_id, Utc::now())
    }

    pub fn issue_token_at(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<String, MatchTokenError> {
        let expires_at = now + Duration::minutes(self.config.validity_minutes);
        let claims = MatchTokenClaims {
            sub: user_id.to_string(),
            start: now.to_rfc3339_opts(SecondsFormat::Micros, true),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.secret.as_ref()),
        )
        .map_err(|e| MatchTokenError::Signing(e.to_string()))
    }

    pub fn validate_token(&self, token: &str) -> Result<MatchTokenClaims, MatchTokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = EXPIRY_LEEWAY_SECONDS;
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_audience(&[&self.config.audience]);

        decode::<MatchTokenClaims>(
            token,
            &DecodingKey::from_secret(self.config.secret.as_ref()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => MatchTokenError::Expired,
            ErrorKind::InvalidSignature => MatchTokenError::BadSignature,
            ErrorKind::InvalidIssuer => MatchTokenError::IssuerMismatch,
            ErrorKind::InvalidAudience => MatchTokenError::AudienceMismatch,
            _ => MatchTokenError::Malformed,
        })
    }

    pub fn validity_seconds(&self) -> i64 {
        self.config.validity_minutes * 60
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> MatchTokenService {
        MatchTokenService::new(MatchTokenConfig::new("test-secret-key".to_string()))
    }

    #[test]
    fn test_issue_and_validate_roundtrip() {
        let service = test_service();
        let issued_at = Utc::now();

        let token = service.issue_token_at("player-42", issued_at).unwrap();
        let claims = service.validate_token(&token).unwrap();

        assert_eq!(claims.sub, "player-42");
        assert_eq!(claims.iss, DEFAULT_ISSUER);
        assert_eq!(claims.aud, DEFAULT_AUDIENCE);
        assert_eq!(claims.exp - claims.iat, TOKEN_VALIDITY_MINUTES * 60);

        let start = claims.start_time().unwrap();
        assert_eq!(start.timestamp(), issued_at.timestamp());
    }

    #[test]
    fn test_token_still_valid_just_before_expiry() {
        let service = test_service();
        // Issued almost a full window ago; one minute of validity remains.
        let issued_at = Utc::now() - Duration::minutes(TOKEN_VALIDITY_MINUTES) + Duration::minutes(1);

        let token = service.issue_token_at("player-42", issued_at).unwrap();
        assert!(service.validate_token(&token).is_ok());
    }

    #[test]
    fn test_token_expired_past_window_and_leeway() {
        let service = test_service();
        let issued_at = Utc::now()
            - Duration::minutes(TOKEN_VALIDITY_MINUTES)
            - Duration::seconds(EXPIRY_LEEWAY_SECONDS as i64 + 5);

        let token = service.issue_token_at("player-42", issued_at).unwrap();
        let err = service.validate_token(&token).unwrap_err();
        assert!(matches!(err, MatchTokenError::Expired));
    }

    #[test]
    fn test_expiry_within_leeway_is_tolerated() {
        let service = test_service();
        // Nominally expired five seconds ago, inside the ten-second leeway.
        let issued_at =
            Utc::now() - Duration::minutes(TOKEN_VALIDITY_MINUTES) - Duration::seconds(5);

        let token = service.issue_token_at("player-42", issued_at).unwrap();
        assert!(service.validate_token(&token).is_ok());
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let service = test_service();
        let other = MatchTokenService::new(MatchTokenConfig::new("other-secret".to_string()));

        let token = other.issue_token("player-42").unwrap();
        let err = service.validate_token(&token).unwrap_err();
        assert!(matches!(err, MatchTokenError::BadSignature));
    }

    #[test]
    fn test_tampered_signature_is_rejected() {
        let service = test_service();
        let now = Utc::now();

        // Same claims signed under a different key: splicing that signature
        // onto our header and payload alters only the signature bytes.
        let other = MatchTokenService::new(MatchTokenConfig::new("other-secret".to_string()));
        let token = service.issue_token_at("player-42", now).unwrap();
        let forged_sig = other
            .issue_token_at("player-42", now)
            .unwrap()
            .rsplit('.')
            .next()
            .unwrap()
            .to_string();

        let mut parts: Vec<&str> = token.split('.').collect();
        parts[2] = &forged_sig;
        let tampered = parts.join(".");

        let err = service.validate_token(&tampered).unwrap_err();
        assert!(matches!(err, MatchTokenError::BadSignature));
    }

    #[test]
    fn test_issuer_mismatch_is_rejected() {
        let service = test_service();
        let mut config = MatchTokenConfig::new("test-secret-key".to_string());
        config.issuer = "someone-else".to_string();
        let other_issuer = MatchTokenService::new(config);

        let token = other_issuer.issue_token("player-42").unwrap();
        let err = service.validate_token(&token).unwrap_err();
        assert!(matches!(err, MatchTokenError::IssuerMismatch));
    }

    #[test]
    fn test_audience_mismatch_is_rejected() {
        let service = test_service();
        let mut config = MatchTokenConfig::new("test-secret-key".to_string());
        config.audience = "someone-elses-client".to_string();
        let other_audience = MatchTokenService::new(config);

        let token = other_audience.issue_token("player-42").unwrap();
        let err = service.validate_token(&token).unwrap_err();
        assert!(matches!(err, MatchTokenError::AudienceMismatch));
    }

    #[test]
    fn test_garbage_token_is_malformed() {
        let service = test_service();
        let err = service.validate_token("not-a-token").unwrap_err();
        assert!(matches!(err, MatchTokenError::Malformed));
    }
}
