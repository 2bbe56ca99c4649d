use std::sync::Arc;

use chrono::DateTime;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;
use crate::clock::Clock;
use crate::clock::SystemClock;
use crate::config::AuthConfig;

/// Bearer token produced at login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// Signed JWT in compact serialization
    pub access_token: String,
    /// Always `"bearer"`
    pub token_type: &'static str,
    /// Lifetime in seconds
    pub expires_in: i64,
    /// Absolute expiry
    pub expires_at: DateTime<Utc>,
}

impl IssuedToken {
    pub const TOKEN_TYPE: &'static str = "bearer";
}

/// Signs and verifies time-limited access tokens.
///
/// Signature and structure are checked by `jsonwebtoken`; expiry is checked
/// against the injected clock so that it can be told apart from a bad
/// signature and so the allowed skew is explicit.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    config: AuthConfig,
    clock: Arc<dyn Clock>,
}

impl TokenCodec {
    /// Create a codec reading time from the system clock.
    pub fn new(config: AuthConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a codec with an explicit time source.
    pub fn with_clock(config: AuthConfig, clock: Arc<dyn Clock>) -> Self {
        let mut validation = Validation::new(config.algorithm());
        // Expiry and required claims are checked in `parse`
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            encoding_key: EncodingKey::from_secret(config.secret()),
            decoding_key: DecodingKey::from_secret(config.secret()),
            validation,
            config,
            clock,
        }
    }

    /// Issue a token for `subject`, expiring after the configured time-to-live.
    ///
    /// # Errors
    /// * `EncodingFailed` - Signing failed
    pub fn issue(&self, subject: &str) -> Result<IssuedToken, JwtError> {
        let issued_at = self.clock.now();
        let ttl = self.config.ttl();
        let claims = Claims::for_subject(subject, issued_at, ttl);

        let access_token = self.encode(&claims)?;

        Ok(IssuedToken {
            access_token,
            token_type: IssuedToken::TOKEN_TYPE,
            expires_in: ttl.num_seconds(),
            expires_at: issued_at + ttl,
        })
    }

    /// Verify a token and return its subject.
    ///
    /// # Errors
    /// * `InvalidToken` - Bad signature, wrong algorithm or malformed token
    /// * `MissingClaim` - `exp` or a non-empty `sub` is absent
    /// * `TokenExpired` - Signature is valid but the token is past its expiry
    pub fn parse(&self, token: &str) -> Result<String, JwtError> {
        let claims = self.decode(token)?;

        if claims.exp.is_none() {
            return Err(JwtError::MissingClaim("exp".to_string()));
        }

        let subject = claims
            .sub
            .as_deref()
            .filter(|sub| !sub.trim().is_empty())
            .map(str::to_owned)
            .ok_or_else(|| JwtError::MissingClaim("sub".to_string()))?;

        if claims.is_expired(self.clock.now().timestamp(), self.config.leeway_seconds()) {
            return Err(JwtError::TokenExpired);
        }

        Ok(subject)
    }

    /// Sign arbitrary claims with the configured key and algorithm.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(self.config.algorithm());

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        decode::<Claims>(token.trim(), &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| JwtError::InvalidToken(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use chrono::TimeZone;

    use super::*;
    use crate::clock::ManualClock;

    const SECRET: &[u8] = b"my_secret_key_at_least_32_bytes_long!";

    fn config(ttl_minutes: i64, leeway_seconds: i64) -> AuthConfig {
        AuthConfig::new(SECRET, "HS256", ttl_minutes, leeway_seconds).expect("valid config")
    }

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap()
    }

    fn codec_at(clock: &Arc<ManualClock>, ttl_minutes: i64, leeway_seconds: i64) -> TokenCodec {
        TokenCodec::with_clock(config(ttl_minutes, leeway_seconds), clock.clone())
    }

    #[test]
    fn test_issue_and_parse() {
        let codec = TokenCodec::new(config(30, 0));

        let issued = codec.issue("42").expect("Failed to issue token");
        assert!(!issued.access_token.is_empty());
        assert_eq!(issued.token_type, "bearer");
        assert_eq!(issued.expires_in, 30 * 60);

        let subject = codec.parse(&issued.access_token).expect("Failed to parse token");
        assert_eq!(subject, "42");
    }

    #[test]
    fn test_token_is_single_line_url_safe() {
        let codec = TokenCodec::new(config(30, 0));
        let issued = codec.issue("42").unwrap();

        assert_eq!(issued.access_token.split('.').count(), 3);
        assert!(issued
            .access_token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')));
    }

    #[test]
    fn test_expires_at_follows_clock() {
        let clock = Arc::new(ManualClock::new(start()));
        let codec = codec_at(&clock, 15, 0);

        let issued = codec.issue("1").unwrap();
        assert_eq!(issued.expires_at, start() + Duration::minutes(15));
    }

    #[test]
    fn test_parse_expired_token() {
        let clock = Arc::new(ManualClock::new(start()));
        let codec = codec_at(&clock, 30, 0);
        let issued = codec.issue("42").unwrap();

        clock.advance(Duration::minutes(30));
        assert_eq!(codec.parse(&issued.access_token), Ok("42".to_string()));

        clock.advance(Duration::seconds(1));
        assert_eq!(
            codec.parse(&issued.access_token),
            Err(JwtError::TokenExpired)
        );
    }

    #[test]
    fn test_parse_respects_leeway() {
        let clock = Arc::new(ManualClock::new(start()));
        let codec = codec_at(&clock, 30, 120);
        let issued = codec.issue("42").unwrap();

        clock.advance(Duration::minutes(31));
        assert!(codec.parse(&issued.access_token).is_ok());

        clock.advance(Duration::minutes(2));
        assert_eq!(
            codec.parse(&issued.access_token),
            Err(JwtError::TokenExpired)
        );
    }

    #[test]
    fn test_parse_leeway_boundary_is_inclusive() {
        let clock = Arc::new(ManualClock::new(start()));
        let codec = codec_at(&clock, 30, 45);
        let issued = codec.issue("42").unwrap();

        clock.advance(Duration::minutes(30) + Duration::seconds(45));
        assert_eq!(codec.parse(&issued.access_token), Ok("42".to_string()));

        clock.advance(Duration::seconds(1));
        assert_eq!(
            codec.parse(&issued.access_token),
            Err(JwtError::TokenExpired)
        );
    }

    #[test]
    fn test_parse_invalid_token() {
        let codec = TokenCodec::new(config(30, 0));

        assert!(matches!(
            codec.parse("invalid.token.here"),
            Err(JwtError::InvalidToken(_))
        ));
        assert!(matches!(codec.parse(""), Err(JwtError::InvalidToken(_))));
    }

    #[test]
    fn test_parse_tampered_signature() {
        let codec = TokenCodec::new(config(30, 0));
        let token = codec.issue("42").unwrap().access_token;

        let (head, signature) = token.rsplit_once('.').unwrap();
        let mut chars: Vec<char> = signature.chars().collect();
        chars[0] = if chars[0] == 'A' { 'B' } else { 'A' };
        let tampered = format!("{}.{}", head, chars.into_iter().collect::<String>());

        assert!(matches!(
            codec.parse(&tampered),
            Err(JwtError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_parse_with_wrong_secret() {
        let issuer = TokenCodec::new(config(30, 0));
        let other = TokenCodec::new(
            AuthConfig::new(b"another_secret_at_least_32_bytes_long", "HS256", 30, 0).unwrap(),
        );

        let token = issuer.issue("42").unwrap().access_token;
        assert!(matches!(other.parse(&token), Err(JwtError::InvalidToken(_))));
    }

    #[test]
    fn test_parse_rejects_other_algorithm() {
        let hs512 = TokenCodec::new(AuthConfig::new(SECRET, "HS512", 30, 0).unwrap());
        let hs256 = TokenCodec::new(config(30, 0));

        let token = hs512.issue("42").unwrap().access_token;
        assert!(matches!(hs256.parse(&token), Err(JwtError::InvalidToken(_))));
    }

    #[test]
    fn test_parse_missing_subject() {
        let codec = TokenCodec::new(config(30, 0));
        let exp = (Utc::now() + Duration::minutes(5)).timestamp();

        let no_sub = codec.encode(&Claims::new().with_expiration(exp)).unwrap();
        assert_eq!(
            codec.parse(&no_sub),
            Err(JwtError::MissingClaim("sub".to_string()))
        );

        let empty_sub = codec
            .encode(&Claims::new().with_subject("").with_expiration(exp))
            .unwrap();
        assert_eq!(
            codec.parse(&empty_sub),
            Err(JwtError::MissingClaim("sub".to_string()))
        );
    }

    #[test]
    fn test_parse_missing_expiry() {
        let codec = TokenCodec::new(config(30, 0));
        let token = codec.encode(&Claims::new().with_subject("42")).unwrap();

        assert_eq!(
            codec.parse(&token),
            Err(JwtError::MissingClaim("exp".to_string()))
        );
    }
}
