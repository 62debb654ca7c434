use sha2::{Digest, Sha256};

/// Length of the embedded password proof in hex characters.
pub const PROOF_LEN: usize = 8;

/// Truncated hex digest of a password, embedded ahead of the message.
///
/// Extraction recomputes the proof from the supplied password and compares;
/// the password itself is never stored. Surrounding whitespace is trimmed
/// before hashing so a trailing newline from an input field cannot lock the
/// owner out of their own data.
pub fn password_proof(password: &str) -> String {
    let digest = Sha256::digest(password.trim().as_bytes());
    let mut proof = hex::encode(digest);
    proof.truncate(PROOF_LEN);
    proof
}
