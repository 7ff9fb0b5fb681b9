// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Exchange request signer.
//!
//! Every authenticated call carries three headers computed with a two-round
//! HMAC-SHA256:
//!
//! ```text
//! expires     = now in epoch milliseconds
//! time_bucket = floor(expires / 30000)
//! derived_key = hex(HMAC-SHA256(api_secret, time_bucket))
//! signature   = hex(HMAC-SHA256(derived_key, query_string + body))
//! ```
//!
//! The derived key is used as the bytes of its hex text, not decoded. The
//! payload is the raw query string immediately followed by the raw body,
//! without sorting, separators or decoding.

use std::fmt::{Debug, Formatter};

use http::header::{HeaderName, CONTENT_TYPE};
use http::{HeaderMap, HeaderValue};
use log::debug;

use super::constants::*;
use super::credential::Credential;
use exsign_core::hash::{hex_hmac_sha256, hex_hmac_sha256_parts};
use exsign_core::time::{now, timestamp_millis, DateTime};
use exsign_core::utils::Redact;
use exsign_core::{Context, Error, Result, SignRequest};

/// The bytes covered by a signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SigningInput<'a> {
    /// Exact characters after `?` in the request url, without the `?`.
    ///
    /// Empty if the request has no query.
    pub query: &'a str,
    /// Exact bytes of the transmitted body. Empty if no body is sent.
    pub body: &'a [u8],
}

impl<'a> SigningInput<'a> {
    /// Create a new signing input.
    pub fn new(query: &'a str, body: &'a [u8]) -> Self {
        Self { query, body }
    }

    /// The signed payload: query immediately followed by body.
    pub fn payload(&self) -> Vec<u8> {
        [self.query.as_bytes(), self.body].concat()
    }
}

/// Header values for one signed request.
#[derive(Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    /// Api key, verbatim.
    pub api_key: String,
    /// Decimal epoch milliseconds the signature was derived from.
    ///
    /// The server rebuilds the time bucket from this value.
    pub expires: String,
    /// Lowercase hex signature.
    pub sign: String,
    /// Always `application/json`.
    pub content_type: &'static str,
}

impl Debug for SignedHeaders {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignedHeaders")
            .field("api_key", &Redact::from(&self.api_key))
            .field("expires", &self.expires)
            .field("sign", &self.sign)
            .field("content_type", &self.content_type)
            .finish()
    }
}

impl SignedHeaders {
    /// Insert the signed headers into `headers`, replacing existing values.
    pub fn apply(self, headers: &mut HeaderMap, names: &HeaderNames) -> Result<()> {
        headers.insert(names.api_key.clone(), {
            let mut value = HeaderValue::from_str(&self.api_key)?;
            value.set_sensitive(true);
            value
        });
        headers.insert(names.expires.clone(), HeaderValue::from_str(&self.expires)?);
        headers.insert(names.sign.clone(), {
            let mut value = HeaderValue::from_str(&self.sign)?;
            value.set_sensitive(true);
            value
        });
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(self.content_type));

        Ok(())
    }
}

/// Names of the headers carrying the signing values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderNames {
    /// Header carrying the api key. Defaults to [`X_API_KEY`].
    pub api_key: HeaderName,
    /// Header carrying the expires timestamp. Defaults to [`X_API_EXPIRES`].
    pub expires: HeaderName,
    /// Header carrying the signature. Defaults to [`X_API_SIGN`].
    pub sign: HeaderName,
}

impl Default for HeaderNames {
    fn default() -> Self {
        Self {
            api_key: HeaderName::from_static(X_API_KEY),
            expires: HeaderName::from_static(X_API_EXPIRES),
            sign: HeaderName::from_static(X_API_SIGN),
        }
    }
}

/// Time bucket for the given epoch milliseconds.
pub fn time_bucket(millis: u64) -> u64 {
    millis / TIME_BUCKET_MILLIS
}

/// Hex HMAC-SHA256 of the decimal time bucket keyed by the api secret.
///
/// Changes every bucket, independent of request content.
pub fn derive_signing_key(api_secret: &str, bucket: u64) -> String {
    hex_hmac_sha256(api_secret.as_bytes(), bucket.to_string().as_bytes())
}

/// Compute the signed headers for one request.
///
/// Pure: the same credential, input and `now_millis` always produce the same
/// headers. Returns a [`ErrorKind::ConfigInvalid`](exsign_core::ErrorKind::ConfigInvalid)
/// error if the api key or api secret is empty.
pub fn compute_signed_headers(
    cred: &Credential,
    input: &SigningInput<'_>,
    now_millis: u64,
) -> Result<SignedHeaders> {
    if cred.api_key.is_empty() {
        return Err(Error::config_invalid("api key is empty"));
    }
    if cred.api_secret.is_empty() {
        return Err(Error::config_invalid("api secret is empty"));
    }

    let expires = now_millis.to_string();
    let bucket = time_bucket(now_millis);
    let derived_key = derive_signing_key(&cred.api_secret, bucket);
    let sign = hex_hmac_sha256_parts(derived_key.as_bytes(), &[input.query.as_bytes(), input.body]);

    debug!(
        "signed request for {:?}: expires={expires}, bucket={bucket}, query_len={}, body_len={}",
        Redact::from(&cred.api_key),
        input.query.len(),
        input.body.len()
    );

    Ok(SignedHeaders {
        api_key: cred.api_key.clone(),
        expires,
        sign,
        content_type: CONTENT_TYPE_JSON,
    })
}

/// RequestSigner signs `http::request::Parts` for the exchange.
///
/// The query is taken verbatim from the request uri, so it is byte-identical
/// to what goes on the wire.
#[derive(Debug, Default)]
pub struct RequestSigner {
    header_names: HeaderNames,
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new request signer with the default header names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom header names.
    pub fn with_header_names(mut self, header_names: HeaderNames) -> Self {
        self.header_names = header_names;
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }
}

#[async_trait::async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _: &Context,
        req: &mut http::request::Parts,
        body: &[u8],
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let cred = credential.ok_or_else(|| Error::config_invalid("missing credential"))?;
        let now_millis = timestamp_millis(self.time.unwrap_or_else(now))?;

        let input = SigningInput::new(req.uri.query().unwrap_or_default(), body);
        let signed = compute_signed_headers(cred, &input, now_millis)?;
        signed.apply(&mut req.headers, &self.header_names)
    }
}
