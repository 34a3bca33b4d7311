//! JSON Web Token helpers for the session tokens issued at login.
use jsonwebtoken::{
    decode, encode, errors::Error as JwtError, Algorithm, DecodingKey, EncodingKey, Header,
    TokenData, Validation,
};
use serde::{de::DeserializeOwned, Serialize};

#[inline]
pub fn encode_jwt<T: Serialize>(
    claims: &T,
    secret: &[u8],
    algorithm: Option<Algorithm>,
) -> Result<String, JwtError> {
    let header = Header::new(algorithm.unwrap_or(Algorithm::HS256));
    encode(&header, claims, &EncodingKey::from_secret(secret))
}

#[inline]
pub fn decode_jwt<T: DeserializeOwned>(
    token: &str,
    secret: &[u8],
    validation: Option<Validation>,
) -> Result<TokenData<T>, JwtError> {
    let validation = validation.unwrap_or_default();
    decode::<T>(token, &DecodingKey::from_secret(secret), &validation)
}

/// Validation used for session tokens: HS256, issuer pinned, audience unchecked.
pub fn session_validation(issuer: &str) -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_aud = false;
    validation.set_issuer(&[issuer]);
    validation
}
