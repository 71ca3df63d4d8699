mod short_link;

#[cfg(test)]
pub mod memory;

pub use short_link::{ShortLinkRepository, ShortLinkRepositoryTrait};

#[cfg(test)]
pub use short_link::MockShortLinkRepositoryTrait;
