use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::ShortLinkRepositoryTrait;
use crate::errors::RepositoryError;
use crate::models::ShortLink;

/// In-process store with the same uniqueness guarantee as the `short_links` primary key
#[derive(Default)]
pub struct InMemoryShortLinkRepository {
    links: RwLock<HashMap<String, ShortLink>>,
}

impl InMemoryShortLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.links.read().await.len()
    }
}

#[async_trait]
impl ShortLinkRepositoryTrait for InMemoryShortLinkRepository {
    async fn find_by_token(&self, token: &str) -> Result<Option<ShortLink>, RepositoryError> {
        Ok(self.links.read().await.get(token).cloned())
    }

    async fn insert(&self, link: &ShortLink) -> Result<ShortLink, RepositoryError> {
        let mut links = self.links.write().await;
        if links.contains_key(&link.token) {
            return Err(RepositoryError::Duplicate(format!(
                "token '{}' already exists",
                link.token
            )));
        }
        links.insert(link.token.clone(), link.clone());
        Ok(link.clone())
    }
}
