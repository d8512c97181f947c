//! Cookie-backed cart storage.
//!
//! The cart blob lives in the shopper's browser, in cookies named after the
//! cart key. Handlers extract [`CartCookies`], hand it to a
//! [`CartModel`](online_store_core::CartModel) as its storage, and return it
//! as part of the response so every write becomes `Set-Cookie` headers.
//!
//! A blob is base64url-encoded and split into chunks that each fit a single
//! browser cookie. The first cookie carries the chunk count:
//!
//! ```text
//! simpleStoreCart=3.<chunk 0>
//! simpleStoreCart.1=<chunk 1>
//! simpleStoreCart.2=<chunk 2>
//! ```

use std::collections::HashMap;
use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{
        HeaderMap, HeaderValue,
        header::{COOKIE, SET_COOKIE},
        request::Parts,
    },
    response::{IntoResponseParts, ResponseParts},
};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use online_store_core::{CartStorage, CartStorageError};

/// Cookie attributes appended to every cart write.
///
/// The cart has no expiry of its own; `Max-Age` is the 400-day ceiling
/// browsers enforce.
const COOKIE_ATTRIBUTES: &str = "Path=/; Max-Age=34560000; SameSite=Lax; HttpOnly";

/// Attributes that make a browser discard a cookie.
const DELETE_ATTRIBUTES: &str = "Path=/; Max-Age=0; SameSite=Lax; HttpOnly";

/// Encoded bytes per cookie. Keeps name, value and attributes under the
/// 4096-byte limit browsers apply to a single cookie.
pub const CHUNK_BYTES: usize = 3800;

/// Most cookies one cart may span.
pub const MAX_CHUNKS: usize = 4;

/// Longest encoded blob a cart may occupy.
pub const MAX_ENCODED_BYTES: usize = CHUNK_BYTES * MAX_CHUNKS;

fn chunk_name(key: &str, index: usize) -> String {
    format!("{key}.{index}")
}

/// Request cookies viewed as a [`CartStorage`], plus the writes to send back.
#[derive(Debug, Clone, Default)]
pub struct CartCookies {
    incoming: HashMap<String, String>,
    pending: Vec<(String, String)>,
}

impl CartCookies {
    /// Parse every `Cookie` header in `headers`.
    ///
    /// When a name repeats, the first value wins.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let header_values = headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok());
        let mut incoming = HashMap::new();

        for header in header_values {
            for (name, value) in header
                .split(';')
                .filter_map(|pair| pair.trim().split_once('='))
            {
                incoming
                    .entry(name.trim().to_owned())
                    .or_insert_with(|| value.trim().trim_matches('"').to_owned());
            }
        }

        Self {
            incoming,
            pending: Vec::new(),
        }
    }

    /// The cookies a browser holds after applying `set_cookies` to an empty
    /// jar. Deletions are skipped.
    #[must_use]
    pub fn from_set_cookie<'a>(set_cookies: impl IntoIterator<Item = &'a str>) -> Self {
        let incoming = set_cookies
            .into_iter()
            .filter(|cookie| !cookie.contains("Max-Age=0"))
            .filter_map(|cookie| cookie.split(';').next()?.split_once('='))
            .map(|(name, value)| (name.trim().to_owned(), value.trim().to_owned()))
            .collect();

        Self {
            incoming,
            pending: Vec::new(),
        }
    }

    /// `Set-Cookie` values for every blob written since extraction, including
    /// deletions of chunks the new blob no longer needs.
    #[must_use]
    pub fn set_cookie_values(&self) -> Vec<String> {
        let mut values = Vec::new();

        for (key, blob) in &self.pending {
            let encoded = URL_SAFE_NO_PAD.encode(blob);
            let chunks: Vec<_> = encoded
                .as_bytes()
                .chunks(CHUNK_BYTES)
                .map(String::from_utf8_lossy)
                .collect();
            let count = chunks.len().max(1);

            for (index, chunk) in chunks.iter().enumerate() {
                values.push(if index == 0 {
                    format!("{key}={count}.{chunk}; {COOKIE_ATTRIBUTES}")
                } else {
                    format!("{}={chunk}; {COOKIE_ATTRIBUTES}", chunk_name(key, index))
                });
            }
            if chunks.is_empty() {
                values.push(format!("{key}=1.; {COOKIE_ATTRIBUTES}"));
            }

            let mut stale: Vec<usize> = self
                .incoming
                .keys()
                .filter_map(|name| name.strip_prefix(key)?.strip_prefix('.')?.parse().ok())
                .filter(|index| *index >= count)
                .collect();
            stale.sort_unstable();
            for index in stale {
                values.push(format!("{}=; {DELETE_ATTRIBUTES}", chunk_name(key, index)));
            }
        }

        values
    }

    /// Reassemble and decode the chunked blob stored under `key`.
    ///
    /// A bad count, a missing chunk or undecodable content reads as no blob.
    fn read_incoming(&self, key: &str) -> Option<String> {
        let (count, first) = self.incoming.get(key)?.split_once('.')?;
        let count = count
            .parse::<usize>()
            .ok()
            .filter(|count| (1..=MAX_CHUNKS).contains(count))?;

        let mut encoded = first.to_owned();
        for index in 1..count {
            encoded.push_str(self.incoming.get(&chunk_name(key, index))?);
        }

        let bytes = URL_SAFE_NO_PAD.decode(encoded).ok()?;
        String::from_utf8(bytes).ok()
    }
}

impl CartStorage for CartCookies {
    fn read(&self, key: &str) -> Option<String> {
        self.pending
            .iter()
            .rev()
            .find(|(name, _)| name == key)
            .map(|(_, blob)| blob.clone())
            .or_else(|| self.read_incoming(key))
    }

    fn write(&mut self, key: &str, blob: String) -> Result<(), CartStorageError> {
        let size = base64::encoded_len(blob.len(), false).unwrap_or(usize::MAX);
        if size > MAX_ENCODED_BYTES {
            return Err(CartStorageError::TooLarge {
                size,
                limit: MAX_ENCODED_BYTES,
            });
        }

        self.pending.retain(|(name, _)| name != key);
        self.pending.push((key.to_owned(), blob));
        Ok(())
    }
}

impl<S> FromRequestParts<S> for CartCookies
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

impl IntoResponseParts for CartCookies {
    type Error = Infallible;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        for cookie in self.set_cookie_values() {
            match HeaderValue::from_str(&cookie) {
                Ok(value) => {
                    res.headers_mut().append(SET_COOKIE, value);
                }
                Err(e) => tracing::error!("Failed to encode cart cookie: {e}"),
            }
        }
        Ok(res)
    }
}
