//! Injected capabilities: hashing and signature verification.
//!
//! The engine takes both as owned generics at construction, so fixtures
//! control exactly which signatures verify — there is no process-wide
//! registry. The mock implementations reproduce the placeholder behavior
//! of the reference system and are deterministic over all inputs.

use std::collections::HashSet;

/// Which hash an `OP_SHA256`/`OP_HASH160`/`OP_HASH256` dispatch asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashKind {
    Sha256,
    Hash160,
    Hash256,
}

impl HashKind {
    fn prefix(self) -> &'static str {
        match self {
            HashKind::Sha256 => "SHA256:",
            HashKind::Hash160 => "HASH160:",
            HashKind::Hash256 => "HASH256:",
        }
    }
}

/// Hash capability. Must be total and deterministic.
pub trait HashProvider {
    fn hash(&self, kind: HashKind, data: &[u8]) -> Vec<u8>;
}

/// Signature-verification capability.
pub trait SigVerifier {
    fn verify(&self, sig: &[u8], pub_key: &[u8]) -> bool;
}

/// Placeholder hasher: prepends an ASCII tag (`"SHA256:"` etc.) to the
/// input. Verifiable by eye in traces, and stable across runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockHasher;

impl HashProvider for MockHasher {
    fn hash(&self, kind: HashKind, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(kind.prefix().len() + data.len());
        out.extend_from_slice(kind.prefix().as_bytes());
        out.extend_from_slice(data);
        out
    }
}

/// Placeholder signature store: a (sig, pubKey) pair verifies iff it was
/// registered on this instance.
#[derive(Debug, Default, Clone)]
pub struct MockSigRegistry {
    valid: HashSet<(Vec<u8>, Vec<u8>)>,
}

impl MockSigRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a (signature, public key) pair as valid.
    pub fn register(&mut self, sig: &[u8], pub_key: &[u8]) {
        self.valid.insert((sig.to_vec(), pub_key.to_vec()));
    }

    /// Forget every registered pair.
    pub fn clear(&mut self) {
        self.valid.clear();
    }
}

impl SigVerifier for MockSigRegistry {
    fn verify(&self, sig: &[u8], pub_key: &[u8]) -> bool {
        self.valid.contains(&(sig.to_vec(), pub_key.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_hash_is_prefix_plus_data() {
        let h = MockHasher;
        assert_eq!(h.hash(HashKind::Sha256, b"abc"), b"SHA256:abc".to_vec());
        assert_eq!(h.hash(HashKind::Hash160, b""), b"HASH160:".to_vec());
        assert_eq!(h.hash(HashKind::Hash256, &[0xff]), {
            let mut v = b"HASH256:".to_vec();
            v.push(0xff);
            v
        });
    }

    #[test]
    fn mock_hash_deterministic() {
        let h = MockHasher;
        assert_eq!(
            h.hash(HashKind::Sha256, b"same"),
            h.hash(HashKind::Sha256, b"same")
        );
    }

    #[test]
    fn registry_register_and_clear() {
        let mut reg = MockSigRegistry::new();
        assert!(!reg.verify(b"sig", b"key"));
        reg.register(b"sig", b"key");
        assert!(reg.verify(b"sig", b"key"));
        assert!(!reg.verify(b"sig", b"other"));
        reg.clear();
        assert!(!reg.verify(b"sig", b"key"));
    }

    #[test]
    fn registries_are_independent() {
        let mut a = MockSigRegistry::new();
        let b = MockSigRegistry::new();
        a.register(b"s", b"k");
        assert!(a.verify(b"s", b"k"));
        assert!(!b.verify(b"s", b"k"));
    }
}
