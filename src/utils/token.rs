use rand::{rng, Rng};

#[cfg(test)]
use mockall::automock;

/// Number of random bytes in a token unless configured otherwise
pub const DEFAULT_TOKEN_BYTES: usize = 4;

/// Produces one candidate token per call
#[cfg_attr(test, automock)]
pub trait TokenGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Renders random bytes from the thread-local CSPRNG as lowercase hex.
///
/// `rand::rng()` is an OS-seeded ChaCha generator, so tokens are not
/// predictable from previously issued ones. If the OS entropy source is
/// unavailable the generator panics; there is no recoverable failure.
#[derive(Debug, Clone)]
pub struct HexTokenGenerator {
    byte_len: usize,
}

impl HexTokenGenerator {
    pub fn new(byte_len: usize) -> Self {
        Self { byte_len }
    }

    /// Length of every generated token in characters
    pub fn token_len(&self) -> usize {
        self.byte_len * 2
    }
}

impl Default for HexTokenGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_BYTES)
    }
}

impl TokenGenerator for HexTokenGenerator {
    fn generate(&self) -> String {
        let mut bytes = vec![0u8; self.byte_len];
        rng().fill(&mut bytes[..]);
        encode_hex(&bytes)
    }
}

fn encode_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
