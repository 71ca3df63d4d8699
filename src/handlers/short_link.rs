use actix_web::{http::header::LOCATION, web, HttpResponse, Responder};
use log::{debug, info};

use crate::{
    models::{CreateShortLinkDto, ResolvedUrlDto, TokenQueryParams},
    services::{ShortLinkService, ShortLinkServiceTrait},
    types::Result,
};

/// Create short link route handler
pub async fn create_handler(
    dto: web::Json<CreateShortLinkDto>,
    service: web::Data<ShortLinkService>,
) -> Result<impl Responder> {
    let link = service.create(dto.into_inner()).await?;
    Ok(HttpResponse::Created().json(link))
}

/// Resolve a token passed as `?token=`
pub async fn resolve_by_query_handler(
    query: web::Query<TokenQueryParams>,
    service: web::Data<ShortLinkService>,
) -> Result<impl Responder> {
    let token = query.into_inner().token.unwrap_or_default();
    let link = service.resolve(&token).await?;
    Ok(HttpResponse::Ok().json(ResolvedUrlDto::from(link)))
}

/// Resolve a token passed as a path segment
pub async fn resolve_by_path_handler(
    token: web::Path<String>,
    service: web::Data<ShortLinkService>,
) -> Result<impl Responder> {
    let link = service.resolve(&token.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ResolvedUrlDto::from(link)))
}

/// Redirect route handler
pub async fn redirect_handler(
    path: web::Path<String>,
    service: web::Data<ShortLinkService>,
) -> Result<impl Responder> {
    let token = path.into_inner();
    debug!("Redirect requested for token: {}", token);

    let link = service.resolve(&token).await?;

    info!("Redirecting '{}' to '{}'", token, link.long_url);

    Ok(HttpResponse::TemporaryRedirect()
        .insert_header((LOCATION, link.long_url))
        .finish())
}
