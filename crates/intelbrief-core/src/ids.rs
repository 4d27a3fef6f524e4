//! Application-side record identifiers.
//!
//! Debrief ids are generated here rather than by the database so the value
//! is known before the insert and stable if the operation is logged or
//! re-invoked externally.

use uuid::Uuid;

const CUID_HEX_LEN: usize = 24;

/// Generate a CUID-shaped identifier: a literal `c` followed by 24 lowercase
/// hex characters drawn from a random UUIDv4 (25 characters total).
///
/// Each call returns a fresh value; collisions are negligible at 96 bits of
/// retained randomness.
#[must_use]
pub fn generate_cuid() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("c{}", &hex[..CUID_HEX_LEN])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cuid_has_fixed_prefix_and_length() {
        let id = generate_cuid();
        assert_eq!(id.len(), 25);
        assert!(id.starts_with('c'));
    }

    #[test]
    fn cuid_body_is_lowercase_hex() {
        let id = generate_cuid();
        assert!(
            id[1..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()),
            "non-hex character in id: {id}"
        );
    }

    #[test]
    fn consecutive_cuids_differ() {
        let a = generate_cuid();
        let b = generate_cuid();
        assert_ne!(a, b);
    }
}
