use axum::extract::FromRef;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use tracing::debug;
use uuid::Uuid;

use crate::auth::repo_types::{Role, User};
use crate::config::JwtConfig;
use crate::state::AppState;

/// JWT payload carried by every issued token.
///
/// `role` reflects the user at issuance time only; resolution always
/// re-reads the live record, so a role change takes effect on the very
/// next request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(alias = "_id")] // older tokens carried the subject as `_id`
    pub id: Uuid,
    pub username: String,
    pub role: Role,
    pub iat: usize,
    pub exp: usize,
}

/// Signing and verification keys, built once from config.
#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
    pub ttl: Duration,
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        let JwtConfig { secret, ttl_days } = state.config.jwt.clone();
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::days(ttl_days),
        }
    }
}

impl JwtKeys {
    pub fn sign(&self, user: &User) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let exp = now + self.ttl;
        let claims = Claims {
            id: user.id,
            username: user.username.clone(),
            role: user.role,
            iat: now.unix_timestamp() as usize,
            exp: exp.unix_timestamp() as usize,
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(user_id = %user.id, "jwt signed");
        Ok(token)
    }

    /// Fails closed: a bad signature, expired `exp` or broken structure all
    /// surface as one opaque error. Expiry is checked with zero leeway.
    pub fn verify(&self, token: &str) -> anyhow::Result<Claims> {
        let mut validation = Validation::default();
        validation.leeway = 0;
        let data = decode::<Claims>(token, &self.decoding, &validation)?;
        debug!(user_id = %data.claims.id, "jwt verified");
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_keys(secret: &str) -> JwtKeys {
        JwtKeys {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::days(7),
        }
    }

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            username: "alice".into(),
            email: "a@x.com".into(),
            password_hash: "irrelevant".into(),
            role: Role::Moderator,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    #[test]
    fn sign_and_verify_roundtrip_preserves_claims() {
        let keys = make_keys("dev-secret");
        let user = sample_user();
        let token = keys.sign(&user).expect("sign");
        let claims = keys.verify(&token).expect("verify");
        assert_eq!(claims.id, user.id);
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.role, Role::Moderator);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn verify_rejects_token_signed_with_different_secret() {
        let signer = make_keys("secret-a");
        let verifier = make_keys("secret-b");
        let token = signer.sign(&sample_user()).expect("sign");
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn verify_rejects_tampered_token() {
        let keys = make_keys("dev-secret");
        let token = keys.sign(&sample_user()).expect("sign");
        // flip one character inside the payload segment
        let mut bytes = token.clone().into_bytes();
        let idx = token.find('.').unwrap() + 5;
        bytes[idx] = if bytes[idx] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(bytes).unwrap();
        assert!(keys.verify(&tampered).is_err());
    }

    #[test]
    fn verify_rejects_garbage() {
        let keys = make_keys("dev-secret");
        assert!(keys.verify("").is_err());
        assert!(keys.verify("not.a.jwt").is_err());
        assert!(keys.verify("a.b").is_err());
    }

    #[test]
    fn verify_rejects_expired_token_with_zero_leeway() {
        let keys = make_keys("dev-secret");
        let now = OffsetDateTime::now_utc().unix_timestamp();
        let claims = Claims {
            id: Uuid::new_v4(),
            username: "alice".into(),
            role: Role::User,
            iat: (now - 120) as usize,
            exp: (now - 10) as usize,
        };
        let token = encode(&Header::default(), &claims, &keys.encoding).expect("encode");
        assert!(keys.verify(&token).is_err());
    }

    #[test]
    fn verify_accepts_legacy_subject_field_name() {
        #[derive(Serialize)]
        struct LegacyClaims {
            _id: Uuid,
            username: String,
            role: Role,
            iat: usize,
            exp: usize,
        }

        let keys = make_keys("dev-secret");
        let now = OffsetDateTime::now_utc().unix_timestamp();
        let id = Uuid::new_v4();
        let legacy = LegacyClaims {
            _id: id,
            username: "bob".into(),
            role: Role::User,
            iat: now as usize,
            exp: (now + 3600) as usize,
        };
        let token = encode(&Header::default(), &legacy, &keys.encoding).expect("encode");
        let claims = keys.verify(&token).expect("verify");
        assert_eq!(claims.id, id);
    }
}
