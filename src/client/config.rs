/// Base URL of the to-do backend API, without a trailing slash.
///
/// Baked in from the `API_BASE_URL` environment variable at build time, so a
/// deployment can point the client at another backend. The default matches a
/// locally running API server.
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "http://127.0.0.1:8080/api/v1",
};
