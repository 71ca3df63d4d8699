mod short_link;

pub use short_link::{is_token_shaped, validate_token, validate_url};
