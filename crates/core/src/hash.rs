//! Salted content digests.
//!
//! A digest is `hex(SHA-256(serialized ‖ salt))`. Text is hashed verbatim;
//! JSON values are serialized compactly with object keys in insertion order,
//! so `{"a":1,"b":2}` and `{"b":2,"a":1}` produce different digests.

use std::fmt;

use serde_json::Value;
use sha2::{Digest, Sha256};

/// Length of a hex-encoded digest.
pub const DIGEST_LEN: usize = 64;

/// Input accepted by [`hash_with_salt`].
#[derive(Debug, Clone, Copy)]
pub enum HashInput<'a> {
    /// Raw text, hashed byte-for-byte.
    Text(&'a str),
    /// Structured value, serialized compactly before hashing.
    ///
    /// Floats keep serde_json's formatting: `1.0` stays `1.0` and `1e20` is
    /// written as `1e20`, where `JSON.stringify` gives `1` and
    /// `100000000000000000000`. Digests of such payloads differ from ones
    /// produced by a JavaScript `JSON.stringify` hasher.
    Json(&'a Value),
}

impl<'a> From<&'a str> for HashInput<'a> {
    fn from(text: &'a str) -> Self {
        HashInput::Text(text)
    }
}

impl<'a> From<&'a String> for HashInput<'a> {
    fn from(text: &'a String) -> Self {
        HashInput::Text(text.as_str())
    }
}

impl<'a> From<&'a Value> for HashInput<'a> {
    fn from(value: &'a Value) -> Self {
        HashInput::Json(value)
    }
}

/// Compute the salted digest of `input`.
///
/// The salt is appended after the serialized input. Swapping the order would
/// change every digest ever handed out.
pub fn hash_with_salt<'a>(input: impl Into<HashInput<'a>>, salt: &str) -> String {
    let mut hasher = Sha256::new();
    match input.into() {
        HashInput::Text(text) => hasher.update(text.as_bytes()),
        HashInput::Json(value) => hasher.update(value.to_string().as_bytes()),
    }
    hasher.update(salt.as_bytes());
    hex::encode(hasher.finalize())
}

/// True iff `value` may be fed to the generic-hash operation.
///
/// Only JSON objects qualify; arrays, strings, numbers, booleans and null do not.
pub fn is_valid_payload(value: &Value) -> bool {
    value.is_object()
}

/// True iff `candidate` has the shape of a digest (`^[a-f0-9]{64}$`).
pub fn is_valid_digest(candidate: &str) -> bool {
    candidate.len() == DIGEST_LEN && candidate.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// Digest engine bound to one salt.
#[derive(Clone)]
pub struct SaltedHasher {
    salt: String,
}

impl SaltedHasher {
    pub fn new(salt: impl Into<String>) -> Self {
        Self { salt: salt.into() }
    }

    /// Digest `input` with this hasher's salt.
    pub fn digest<'a>(&self, input: impl Into<HashInput<'a>>) -> String {
        hash_with_salt(input, &self.salt)
    }
}

impl fmt::Debug for SaltedHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SaltedHasher").field("salt", &"<redacted>").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hash_stability() {
        let data = json!({ "name": "test", "value": 123 });
        let hash1 = hash_with_salt(&data, "test-salt");
        let hash2 = hash_with_salt(&data, "test-salt");
        assert_eq!(hash1, hash2);
    }

    #[test]
    fn test_hash_different_data() {
        let hash1 = hash_with_salt(&json!({ "name": "test1" }), "test-salt");
        let hash2 = hash_with_salt(&json!({ "name": "test2" }), "test-salt");
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_hash_different_salts() {
        let data = json!({ "name": "test" });
        assert_ne!(hash_with_salt(&data, "salt1"), hash_with_salt(&data, "salt2"));
    }

    #[test]
    fn test_hash_format() {
        let hash = hash_with_salt(&json!({ "test": true }), "test-salt");
        assert_eq!(hash.len(), 64);
        assert!(is_valid_digest(&hash));
    }

    #[test]
    fn test_hash_text_is_verbatim() {
        let mut hasher = Sha256::new();
        hasher.update(b"hellos");
        let expected = hex::encode(hasher.finalize());

        assert_eq!(hash_with_salt("hello", "s"), expected);
    }

    #[test]
    fn test_hash_text_differs_from_json_string() {
        let as_json = Value::String("hello".into());
        assert_ne!(hash_with_salt("hello", "s"), hash_with_salt(&as_json, "s"));
    }

    #[test]
    fn test_hash_json_uses_compact_serialization() {
        let value = json!({ "a": 1, "b": [1, 2] });
        assert_eq!(hash_with_salt(&value, "s"), hash_with_salt(r#"{"a":1,"b":[1,2]}"#, "s"));
    }

    #[test]
    fn test_hash_json_keeps_float_formatting() {
        let value: Value = serde_json::from_str(r#"{"a":1.0}"#).unwrap();
        assert_eq!(hash_with_salt(&value, "s"), hash_with_salt(r#"{"a":1.0}"#, "s"));
        assert_ne!(hash_with_salt(&value, "s"), hash_with_salt(r#"{"a":1}"#, "s"));
    }

    #[test]
    fn test_hash_key_order_matters() {
        let ab: Value = serde_json::from_str(r#"{"a":1,"b":2}"#).unwrap();
        let ba: Value = serde_json::from_str(r#"{"b":2,"a":1}"#).unwrap();
        assert_eq!(ab, ba);
        assert_ne!(hash_with_salt(&ab, "s"), hash_with_salt(&ba, "s"));
    }

    #[test]
    fn test_hash_nested_objects() {
        let data = json!({
            "user": { "name": "John", "age": 30, "address": { "city": "New York", "zip": "10001" } },
            "items": [1, 2, 3],
        });
        assert!(is_valid_digest(&hash_with_salt(&data, "test-salt")));
    }

    #[test]
    fn test_hash_empty_and_unicode_text() {
        assert!(is_valid_digest(&hash_with_salt("", "s")));
        assert_ne!(hash_with_salt("héllo wörld 🌍", "s"), hash_with_salt("hello world", "s"));
    }

    #[test]
    fn test_is_valid_payload() {
        assert!(is_valid_payload(&json!({})));
        assert!(is_valid_payload(&json!({ "key": "value" })));
        assert!(!is_valid_payload(&json!([1, 2, 3])));
        assert!(!is_valid_payload(&Value::Null));
        assert!(!is_valid_payload(&json!("string")));
        assert!(!is_valid_payload(&json!(123)));
        assert!(!is_valid_payload(&json!(true)));
    }

    #[test]
    fn test_is_valid_digest() {
        assert!(is_valid_digest(&"0".repeat(64)));
        assert!(is_valid_digest(&"af".repeat(32)));
        assert!(!is_valid_digest(&"A".repeat(64)));
        assert!(!is_valid_digest(&"0".repeat(63)));
        assert!(!is_valid_digest(&"g".repeat(64)));
        assert!(!is_valid_digest(""));
    }

    #[test]
    fn test_salted_hasher_matches_free_function() {
        let hasher = SaltedHasher::new("s");
        assert_eq!(hasher.digest("hello"), hash_with_salt("hello", "s"));
    }

    #[test]
    fn test_salted_hasher_debug_redacts_salt() {
        let hasher = SaltedHasher::new("super-secret");
        assert!(!format!("{hasher:?}").contains("super-secret"));
    }
}
