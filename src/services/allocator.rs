use std::sync::Arc;

use log::debug;

use crate::errors::ServiceError;
use crate::repositories::ShortLinkRepositoryTrait;
use crate::utils::TokenGenerator;

type Result<T> = std::result::Result<T, ServiceError>;

/// Hands out tokens that were not present in the store when checked.
///
/// Allocation only reads. The caller inserts the record afterwards, so a
/// concurrent request may still claim the same token in between; the store's
/// uniqueness constraint turns that into a duplicate-key insert failure.
#[derive(Clone)]
pub struct TokenAllocator {
    generator: Arc<dyn TokenGenerator>,
    max_attempts: u32,
}

impl TokenAllocator {
    pub fn new(generator: Arc<dyn TokenGenerator>, max_attempts: u32) -> Self {
        Self {
            generator,
            max_attempts,
        }
    }

    pub async fn allocate<R>(&self, repository: &R) -> Result<String>
    where
        R: ShortLinkRepositoryTrait + ?Sized,
    {
        for attempt in 1..=self.max_attempts {
            let candidate = self.generator.generate();

            // A failed check must abort: an unchecked token could already be taken
            if repository.find_by_token(&candidate).await?.is_none() {
                return Ok(candidate);
            }

            debug!(
                "Token '{}' already in use (attempt {}/{})",
                candidate, attempt, self.max_attempts
            );
        }

        Err(ServiceError::AllocationExhausted {
            attempts: self.max_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::Utc;
    use sqlx::Error as SqlxError;

    use super::*;
    use crate::errors::RepositoryError;
    use crate::models::ShortLink;
    use crate::repositories::memory::InMemoryShortLinkRepository;
    use crate::repositories::MockShortLinkRepositoryTrait;
    use crate::utils::{HexTokenGenerator, MockTokenGenerator};

    fn existing(token: &str) -> ShortLink {
        ShortLink {
            token: token.to_string(),
            long_url: "https://example.com".to_string(),
            short_url: format!("http://sho.rt/{}", token),
            created_at: Utc::now(),
        }
    }

    fn sequence_generator(tokens: &[&str]) -> MockTokenGenerator {
        let mut tokens = tokens
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .into_iter();
        let mut generator = MockTokenGenerator::new();
        generator
            .expect_generate()
            .returning(move || tokens.next().expect("generator sequence exhausted"));
        generator
    }

    #[tokio::test]
    async fn test_returns_first_free_candidate_after_k_collisions() {
        let taken = ["aaaaaaaa", "bbbbbbbb", "cccccccc"];
        let generator = sequence_generator(&["aaaaaaaa", "bbbbbbbb", "cccccccc", "dddddddd"]);

        let mut repository = MockShortLinkRepositoryTrait::new();
        repository
            .expect_find_by_token()
            .times(taken.len() + 1)
            .returning(move |token| {
                if taken.iter().any(|t| *t == token) {
                    Ok(Some(existing(token)))
                } else {
                    Ok(None)
                }
            });

        let allocator = TokenAllocator::new(Arc::new(generator), 10);
        let token = allocator.allocate(&repository).await.unwrap();

        assert_eq!(token, "dddddddd");
    }

    #[tokio::test]
    async fn test_free_first_candidate_needs_one_check() {
        let generator = sequence_generator(&["0a1b2c3d"]);

        let mut repository = MockShortLinkRepositoryTrait::new();
        repository
            .expect_find_by_token()
            .withf(|token| token == "0a1b2c3d")
            .times(1)
            .returning(|_| Ok(None));

        let allocator = TokenAllocator::new(Arc::new(generator), 10);
        assert_eq!(allocator.allocate(&repository).await.unwrap(), "0a1b2c3d");
    }

    #[tokio::test]
    async fn test_exhaustion_after_max_attempts() {
        let mut generator = MockTokenGenerator::new();
        generator
            .expect_generate()
            .times(5)
            .returning(|| "ffffffff".to_string());

        let mut repository = MockShortLinkRepositoryTrait::new();
        repository
            .expect_find_by_token()
            .times(5)
            .returning(|token| Ok(Some(existing(token))));

        let allocator = TokenAllocator::new(Arc::new(generator), 5);
        let err = allocator.allocate(&repository).await.unwrap_err();

        assert!(matches!(err, ServiceError::AllocationExhausted { attempts: 5 }));
    }

    #[tokio::test]
    async fn test_failed_check_aborts_allocation() {
        let mut generator = MockTokenGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .returning(|| "12345678".to_string());

        let mut repository = MockShortLinkRepositoryTrait::new();
        repository
            .expect_find_by_token()
            .times(1)
            .returning(|_| Err(RepositoryError::Unavailable(SqlxError::PoolTimedOut)));

        let allocator = TokenAllocator::new(Arc::new(generator), 10);
        let err = allocator.allocate(&repository).await.unwrap_err();

        assert!(matches!(err, ServiceError::StoreUnavailable(_)));
    }

    #[tokio::test]
    async fn test_sequential_allocations_are_unique() {
        let repository = InMemoryShortLinkRepository::new();
        let allocator = TokenAllocator::new(Arc::new(HexTokenGenerator::default()), 10);

        let mut seen = HashSet::new();
        for _ in 0..500 {
            let token = allocator.allocate(&repository).await.unwrap();
            repository.insert(&existing(&token)).await.unwrap();
            assert!(seen.insert(token));
        }

        assert_eq!(repository.len().await, 500);
    }
}
