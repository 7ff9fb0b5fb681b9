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

use crate::{constants::*, Credential};
use async_trait::async_trait;
use exsign_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads exchange credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `EXCHANGE_API_KEY`: The exchange api key
/// - `EXCHANGE_API_SECRET`: The exchange api secret
///
/// Empty values are treated as missing.
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let api_key = ctx.env_var(EXCHANGE_API_KEY).filter(|v| !v.is_empty());
        let api_secret = ctx.env_var(EXCHANGE_API_SECRET).filter(|v| !v.is_empty());

        match (api_key, api_secret) {
            (Some(api_key), Some(api_secret)) => Ok(Some(Credential {
                api_key,
                api_secret,
            })),
            _ => Ok(None),
        }
    }
}
