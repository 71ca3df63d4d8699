// src/services/short_link.rs - Business logic
use std::sync::Arc;

use async_trait::async_trait;
use log::{info, warn};
use validator::Validate;

use super::allocator::TokenAllocator;
use crate::config::ShortenerConfig;
use crate::errors::ServiceError;
use crate::models::{CreateShortLinkDto, ShortLink, ShortLinkResponseDto};
use crate::repositories::ShortLinkRepositoryTrait;
use crate::validations::{is_token_shaped, validate_token};

type Result<T> = std::result::Result<T, ServiceError>;

#[async_trait]
pub trait ShortLinkServiceTrait {
    async fn create(&self, dto: CreateShortLinkDto) -> Result<ShortLinkResponseDto>;
    async fn resolve(&self, token: &str) -> Result<ShortLink>;
}

pub struct ShortLinkService {
    repository: Arc<dyn ShortLinkRepositoryTrait>,
    allocator: TokenAllocator,
    settings: ShortenerConfig,
}

impl ShortLinkService {
    pub fn new(
        repository: Arc<dyn ShortLinkRepositoryTrait>,
        allocator: TokenAllocator,
        settings: ShortenerConfig,
    ) -> Self {
        Self {
            repository,
            allocator,
            settings,
        }
    }
}

fn validation_message(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .next()
        .unwrap_or_else(|| "Invalid URL".to_string())
}

#[async_trait]
impl ShortLinkServiceTrait for ShortLinkService {
    async fn create(&self, dto: CreateShortLinkDto) -> Result<ShortLinkResponseDto> {
        if dto.long_url.trim().is_empty() {
            return Err(ServiceError::InvalidInput("No Url Entered".to_string()));
        }

        if let Err(e) = dto.validate() {
            return Err(ServiceError::InvalidInput(validation_message(&e)));
        }

        let long_url = dto.long_url.trim().to_string();

        // The pre-check in the allocator narrows the race; the store's uniqueness
        // constraint closes it, and losing it sends us back to allocation.
        for round in 1..=self.settings.max_insert_attempts {
            let token = self.allocator.allocate(self.repository.as_ref()).await?;
            let link = ShortLink::new(
                token.clone(),
                long_url.clone(),
                self.settings.short_url_for(&token),
            );

            match self.repository.insert(&link).await.map_err(ServiceError::from) {
                Ok(record) => {
                    info!("Created short link '{}' -> '{}'", record.token, record.long_url);
                    return Ok(ShortLinkResponseDto::from(record));
                }
                Err(ServiceError::DuplicateKey(reason)) => {
                    warn!(
                        "Token '{}' was claimed concurrently ({}), retrying (round {}/{})",
                        token, reason, round, self.settings.max_insert_attempts
                    );
                }
                Err(e) => return Err(e),
            }
        }

        Err(ServiceError::AllocationExhausted {
            attempts: self.settings.max_insert_attempts,
        })
    }

    async fn resolve(&self, token: &str) -> Result<ShortLink> {
        if let Err(e) = validate_token(token) {
            return Err(ServiceError::InvalidInput(
                e.message
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "No URL ID Provided".to_string()),
            ));
        }

        if !is_token_shaped(token) {
            return Err(ServiceError::NotFound("URL Not Found".to_string()));
        }

        self.repository
            .find_by_token(token)
            .await?
            .ok_or_else(|| ServiceError::NotFound("URL Not Found".to_string()))
    }
}
