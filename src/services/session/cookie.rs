use axum::http::{HeaderMap, header};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CookieError {
    #[error("cookie value is not valid UTF-8")]
    InvalidEncoding,
}

/// Find the value of cookie `name` across every `Cookie` header.
///
/// HTTP/2 clients may split cookies over several headers, so all of them are
/// scanned. Headers are read as raw bytes: an unrelated cookie holding
/// non-ASCII text must not hide the one we want. Only the matched value has
/// to decode. The first match wins. Surrounding double quotes are stripped.
pub fn find_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Result<Option<&'a str>, CookieError> {
    for value in headers.get_all(header::COOKIE) {
        let found = value
            .as_bytes()
            .split(|b| *b == b';')
            .filter_map(|pair| {
                let pair = pair.trim_ascii();
                let eq = pair.iter().position(|b| *b == b'=')?;
                Some((pair[..eq].trim_ascii(), pair[eq + 1..].trim_ascii()))
            })
            .find(|(key, _)| *key == name.as_bytes());

        if let Some((_, raw)) = found {
            let v = std::str::from_utf8(raw).map_err(|_| CookieError::InvalidEncoding)?;
            let v = v
                .strip_prefix('"')
                .and_then(|s| s.strip_suffix('"'))
                .unwrap_or(v);
            return Ok(Some(v));
        }
    }

    Ok(None)
}
