use crate::server::error::auth::AuthError;

/// Hashes a plaintext password with bcrypt at the default cost.
///
/// # Arguments
/// - `password` - Plaintext password from the request
///
/// # Returns
/// - `Ok(String)` - Salted bcrypt hash suitable for storage
/// - `Err(AuthError::PasswordHash)` - bcrypt failed to produce a hash
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    Ok(bcrypt::hash(password, bcrypt::DEFAULT_COST)?)
}

/// Checks a plaintext password against a stored bcrypt hash.
///
/// # Arguments
/// - `password` - Plaintext password from the request
/// - `hash` - Stored bcrypt hash
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(AuthError::PasswordHash)` - Stored hash is not a valid bcrypt hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    Ok(bcrypt::verify(password, hash)?)
}
