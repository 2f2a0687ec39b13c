mod http;
pub mod nominatim;
pub mod opencage;

#[cfg(test)]
mod test_server;

/// Sent as `User-Agent` with every request.
pub const DEFAULT_USER_AGENT: &str = "my_coworking_app";
