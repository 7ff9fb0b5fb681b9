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

//! Client sending signed requests to the exchange.

use bytes::Bytes;
use http::StatusCode;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::constants::SYMBOL_PARAM;
use crate::endpoint::Endpoint;
use crate::{Config, Credential};
use exsign_core::{Error, Result, Signer};

/// Client builds, signs and sends exchange requests.
///
/// The transport is the [`HttpSend`](exsign_core::HttpSend) configured on the
/// signer's [`Context`](exsign_core::Context). The client never retries,
/// apart from walking an endpoint's fallback paths on `404 Not Found`.
#[derive(Clone, Debug)]
pub struct Client {
    base_url: String,
    default_symbol: Option<String>,
    signer: Signer<Credential>,
}

impl Client {
    /// Create a new client.
    ///
    /// Returns a config error if `config.base_url` is missing or empty.
    pub fn new(config: &Config, signer: Signer<Credential>) -> Result<Self> {
        let base_url = config
            .base_url
            .as_deref()
            .map(|v| v.trim_end_matches('/'))
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::config_invalid("base url is not configured"))?;

        Ok(Self {
            base_url: base_url.to_string(),
            default_symbol: config.default_symbol.clone().filter(|v| !v.is_empty()),
            signer,
        })
    }

    /// Base url without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the query string for `endpoint`.
    ///
    /// Pairs are `key=value` joined by `&` in the given order, form-urlencoded,
    /// with no leading `?`. This exact string is both placed in the url and
    /// signed.
    pub fn build_query(&self, endpoint: &Endpoint, params: &[(&str, &str)]) -> Result<String> {
        let mut query = form_urlencoded::Serializer::new(String::new());

        if endpoint.requires_symbol() && !params.iter().any(|(k, _)| *k == SYMBOL_PARAM) {
            let symbol = self.default_symbol.as_deref().ok_or_else(|| {
                Error::config_invalid("symbol is required but no default symbol is configured")
            })?;
            query.append_pair(SYMBOL_PARAM, symbol);
        }
        query.extend_pairs(params.iter().copied());

        Ok(query.finish())
    }

    /// Sign and send a request to `endpoint`.
    ///
    /// `body` must already be serialized exactly as it should be sent. When it
    /// is `None`, the endpoint's [`EmptyBody`](crate::EmptyBody) convention decides
    /// what is signed and sent.
    ///
    /// Candidate paths are tried in order. A `404 Not Found` moves on to the
    /// next candidate; any other response is returned as is. If every
    /// candidate answers 404, the last response is returned.
    pub async fn send(
        &self,
        endpoint: &Endpoint,
        params: &[(&str, &str)],
        body: Option<&[u8]>,
    ) -> Result<http::Response<Bytes>> {
        let (_, resp) = self.send_with_path(endpoint, params, body).await?;
        Ok(resp)
    }

    /// Sign and send a request, then decode a successful json response.
    ///
    /// Non-2xx responses become [`ErrorKind::Unexpected`](exsign_core::ErrorKind::Unexpected)
    /// errors carrying the path that answered, the status and the body text.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        params: &[(&str, &str)],
        body: Option<&[u8]>,
    ) -> Result<T> {
        let (path, resp) = self.send_with_path(endpoint, params, body).await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::unexpected(format!(
                "{} {path} failed with status {status}: {}",
                endpoint.method(),
                String::from_utf8_lossy(resp.body())
            )));
        }

        Ok(serde_json::from_slice(resp.body())?)
    }

    /// Url for `path`, with exactly one `/` between base url and path.
    fn url(&self, path: &str, query: &str) -> String {
        let sep = if path.starts_with('/') { "" } else { "/" };
        if query.is_empty() {
            format!("{}{sep}{path}", self.base_url)
        } else {
            format!("{}{sep}{path}?{query}", self.base_url)
        }
    }

    /// Walk the candidate paths, returning the path that answered with its
    /// response.
    async fn send_with_path<'e>(
        &self,
        endpoint: &'e Endpoint,
        params: &[(&str, &str)],
        body: Option<&[u8]>,
    ) -> Result<(&'e str, http::Response<Bytes>)> {
        let query = self.build_query(endpoint, params)?;
        let body = Bytes::copy_from_slice(body.unwrap_or_else(|| endpoint.empty_body().as_bytes()));

        let mut last = None;
        for path in endpoint.paths() {
            let (mut parts, _) = http::Request::builder()
                .method(endpoint.method().clone())
                .uri(self.url(path, &query))
                .body(())?
                .into_parts();
            self.signer.sign(&mut parts, &body).await?;

            debug!("sending {} {path}", endpoint.method());
            let resp = self
                .signer
                .context()
                .http_send(http::Request::from_parts(parts, body.clone()))
                .await?;

            if resp.status() == StatusCode::NOT_FOUND {
                warn!("{} {path} returned 404, trying next candidate", endpoint.method());
                last = Some((path.as_str(), resp));
                continue;
            }
            return Ok((path.as_str(), resp));
        }

        last.ok_or_else(|| Error::config_invalid("endpoint has no candidate paths"))
    }
}

/// Serialize `value` as compact json, keeping the field order of the type.
///
/// Use the returned bytes as the `body` of [`Client::send`] so that signed and
/// sent bytes are the same.
pub fn json_body<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(value)?)
}
