mod short_link;

pub use short_link::{create_handler, redirect_handler, resolve_by_path_handler, resolve_by_query_handler};
