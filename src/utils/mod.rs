pub mod token;

pub use token::{HexTokenGenerator, TokenGenerator};

#[cfg(test)]
pub use token::MockTokenGenerator;
