use url::Url;
use validator::ValidationError;

/// Upper bound on accepted token length, well above any configured width
const MAX_TOKEN_LEN: usize = 64;

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// Schemes that execute or embed content instead of pointing somewhere
const BLOCKED_SCHEMES: [&str; 3] = ["javascript", "data", "vbscript"];

/// Validates that a URL string is an absolute URL with a host.
///
/// The parser silently strips tabs and newlines, so control characters are
/// rejected on the raw input; the stored value must be usable as a
/// `Location` header as-is.
pub fn validate_url(url_str: &str) -> Result<(), ValidationError> {
    if url_str.chars().any(|c| c.is_ascii_control()) {
        return Err(invalid("url", "Invalid URL"));
    }

    let url = Url::parse(url_str.trim()).map_err(|_| invalid("url", "Invalid URL"))?;

    if url.host().is_none() || BLOCKED_SCHEMES.contains(&url.scheme()) {
        return Err(invalid("url", "Invalid URL"));
    }

    Ok(())
}

/// Validates that a token was supplied at all
pub fn validate_token(token: &str) -> Result<(), ValidationError> {
    if token.trim().is_empty() {
        return Err(invalid("token_required", "No URL ID Provided"));
    }

    Ok(())
}

/// Whether a token could have been issued by the hex generator.
/// Anything else can be answered as unknown without querying the store.
pub fn is_token_shaped(token: &str) -> bool {
    !token.is_empty()
        && token.len() <= MAX_TOKEN_LEN
        && token.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}
