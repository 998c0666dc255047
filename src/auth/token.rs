use rand::Rng;

/// Generate a random 32-byte hex token for password-reset links.
pub fn generate_token() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 32] = rng.random();
    hex::encode(bytes)
}
