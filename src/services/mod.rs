use std::sync::Arc;

use actix_web::web;

mod allocator;
mod short_link;

pub use allocator::TokenAllocator;
pub use short_link::{ShortLinkService, ShortLinkServiceTrait};

use crate::{
    config::ShortenerConfig, db::Database, repositories::ShortLinkRepository,
    utils::HexTokenGenerator,
};

/// Builds the short link service on top of the PostgreSQL store
pub fn build_short_link_service(db: &Database, settings: &ShortenerConfig) -> ShortLinkService {
    let repository = Arc::new(ShortLinkRepository::new(db));
    let generator = Arc::new(HexTokenGenerator::new(settings.token_bytes));
    let allocator = TokenAllocator::new(generator, settings.max_allocation_attempts);
    ShortLinkService::new(repository, allocator, settings.clone())
}

/// Service Register
pub fn register(service: web::Data<ShortLinkService>, cfg: &mut web::ServiceConfig) {
    cfg.app_data(service);
}
