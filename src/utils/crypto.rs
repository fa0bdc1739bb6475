use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;

/// Passwords are truncated to 72 bytes before hashing and verification, a
/// compatibility limit inherited from bcrypt-era credentials. Both paths must
/// truncate identically or existing hashes stop verifying.
const PASSWORD_MAX_BYTES: usize = 72;

fn truncate(plain: &str) -> &[u8] {
    let bytes = plain.as_bytes();
    if bytes.len() > PASSWORD_MAX_BYTES {
        &bytes[..PASSWORD_MAX_BYTES]
    } else {
        bytes
    }
}

pub fn hash_password(plain: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2.hash_password(truncate(plain), &salt)?.to_string();
    Ok(password_hash)
}

pub fn verify_password(plain: &str, hashed: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hashed)?;
    let ok = Argon2::default()
        .verify_password(truncate(plain), &parsed_hash)
        .is_ok();
    Ok(ok)
}
