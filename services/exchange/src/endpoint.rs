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

//! Endpoint definitions used by [`Client`](crate::Client).

use http::Method;

/// How an endpoint expects a missing body to be signed and sent.
///
/// Endpoints of the exchange disagree here, so every [`Endpoint`] names its
/// convention explicitly.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum EmptyBody {
    /// Sign and send an empty body.
    #[default]
    Empty,
    /// Sign and send the literal `{}`.
    EmptyObject,
}

impl EmptyBody {
    /// Bytes used as the body when the caller passes none.
    pub fn as_bytes(&self) -> &'static [u8] {
        match self {
            EmptyBody::Empty => b"",
            EmptyBody::EmptyObject => b"{}",
        }
    }
}

/// A remote API operation.
///
/// `paths` is an ordered list of candidates. The client moves on to the next
/// candidate only when the previous one answered `404 Not Found`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    method: Method,
    paths: Vec<String>,
    empty_body: EmptyBody,
    requires_symbol: bool,
}

impl Endpoint {
    /// Create an endpoint with a single path.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            paths: vec![path.into()],
            empty_body: EmptyBody::default(),
            requires_symbol: false,
        }
    }

    /// Shorthand for a `GET` endpoint.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Shorthand for a `POST` endpoint.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Shorthand for a `DELETE` endpoint.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append a fallback path tried after a `404 Not Found`.
    pub fn with_fallback(mut self, path: impl Into<String>) -> Self {
        self.paths.push(path.into());
        self
    }

    /// Set the empty body convention.
    pub fn with_empty_body(mut self, empty_body: EmptyBody) -> Self {
        self.empty_body = empty_body;
        self
    }

    /// Require a `symbol` query parameter, filled from the configured
    /// default symbol when the caller passes none.
    pub fn with_required_symbol(mut self) -> Self {
        self.requires_symbol = true;
        self
    }

    /// HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Candidate paths in the order they are tried.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Empty body convention.
    pub fn empty_body(&self) -> EmptyBody {
        self.empty_body
    }

    /// Whether the endpoint needs a `symbol` parameter.
    pub fn requires_symbol(&self) -> bool {
        self.requires_symbol
    }
}
