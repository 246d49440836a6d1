use sha2::{Digest, Sha256};

/// Short, opaque contact id: the first 4 bytes of
/// `sha256("{sequence}:{created_nanos}")` as lowercase hex.
pub fn new_contact_id(sequence: u64, created_nanos: i64) -> String {
    short_hash(&format!("{sequence}:{created_nanos}"))
}

fn short_hash(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let digest = hasher.finalize();
    let mut hex = String::with_capacity(8);
    for byte in digest.iter().take(4) {
        use std::fmt::Write;
        let _ = write!(&mut hex, "{byte:02x}");
    }
    hex
}
