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

use std::fmt::{Debug, Formatter};

use crate::constants::*;
use exsign_core::{utils::Redact, Context};

/// Config carries all the configuration for the exchange client.
///
/// Config is an explicit value handed to providers and the client at
/// construction time. Nothing reads process state behind its back.
#[derive(Clone, Default)]
pub struct Config {
    /// `api_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`EXCHANGE_API_KEY`]
    pub api_key: Option<String>,
    /// `api_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`EXCHANGE_API_SECRET`]
    pub api_secret: Option<String>,
    /// `base_url` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`EXCHANGE_BASE_URL`]
    pub base_url: Option<String>,
    /// `default_symbol` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`EXCHANGE_DEFAULT_SYMBOL`]
    pub default_symbol: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set api_key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set api_secret
    pub fn with_api_secret(mut self, api_secret: impl Into<String>) -> Self {
        self.api_secret = Some(api_secret.into());
        self
    }

    /// Set base_url
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set default_symbol
    pub fn with_default_symbol(mut self, default_symbol: impl Into<String>) -> Self {
        self.default_symbol = Some(default_symbol.into());
        self
    }

    /// Load config from env.
    ///
    /// Values already set on this config win over env values.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(EXCHANGE_API_KEY) {
            self.api_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(EXCHANGE_API_SECRET) {
            self.api_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(EXCHANGE_BASE_URL) {
            self.base_url.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(EXCHANGE_DEFAULT_SYMBOL) {
            self.default_symbol.get_or_insert(v);
        }

        self
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(Redact::from))
            .field(
                "api_secret",
                &self.api_secret.as_deref().map(Redact::secret),
            )
            .field("base_url", &self.base_url)
            .field("default_symbol", &self.default_symbol)
            .finish()
    }
}
