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

use crate::{Config, Credential};
use async_trait::async_trait;
use exsign_core::{Context, ProvideCredential, Result};

/// ConfigCredentialProvider takes the credential from an explicit [`Config`].
///
/// Returns `None` unless both `api_key` and `api_secret` are set and non-empty.
#[derive(Debug, Clone)]
pub struct ConfigCredentialProvider {
    config: Config,
}

impl ConfigCredentialProvider {
    /// Create a new ConfigCredentialProvider
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        match (&self.config.api_key, &self.config.api_secret) {
            (Some(ak), Some(sk)) if !ak.is_empty() && !sk.is_empty() => {
                Ok(Some(Credential::new(ak, sk)))
            }
            _ => Ok(None),
        }
    }
}
