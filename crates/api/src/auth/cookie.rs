//! `auth-token` cookie construction and parsing.
//!
//! Login sets an HttpOnly cookie so browser clients stay authenticated without
//! handling the token in JavaScript; API clients may keep using the
//! `Authorization: Bearer` header instead. Both carry the same JWT.

/// Name of the authentication cookie.
pub const AUTH_COOKIE: &str = "auth-token";

/// Build the `Set-Cookie` value that stores the auth token.
///
/// HttpOnly and SameSite=Lax; `Secure` is intentionally omitted so local
/// development over plain HTTP works. Terminating TLS in front of the API is
/// expected in production.
pub fn build_auth_cookie(token: &str, max_age_secs: i64) -> String {
    format!("{AUTH_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_secs}")
}

/// Build the `Set-Cookie` value that clears the auth token on logout.
pub fn clear_auth_cookie() -> String {
    format!("{AUTH_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Extract the auth token from a `Cookie` request header value, if present.
pub fn token_from_cookie_header(header: &str) -> Option<&str> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == AUTH_COOKIE && !value.is_empty()).then_some(value)
    })
}
