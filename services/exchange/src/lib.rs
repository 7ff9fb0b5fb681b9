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

//! Signer and client for an exchange REST API using time-bucketed HMAC signing.
//!
//! ## Example
//!
//! ```no_run
//! use exsign_core::{Context, OsEnv, Result, Signer};
//! use exsign_exchange::{Client, Config, DefaultCredentialProvider, Endpoint, RequestSigner};
//! use exsign_http_send_reqwest::ReqwestHttpSend;
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new()
//!     .with_http_send(ReqwestHttpSend::default())
//!     .with_env(OsEnv);
//! let config = Config::new().from_env(&ctx);
//!
//! let signer = Signer::new(ctx, DefaultCredentialProvider::new(), RequestSigner::new());
//! let client = Client::new(&config, signer)?;
//!
//! let balances: serde_json::Value = client
//!     .send_json(&Endpoint::get("/api/v1/account/balance"), &[], None)
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod sign_request;
pub use sign_request::{
    compute_signed_headers, derive_signing_key, time_bucket, HeaderNames, RequestSigner,
    SignedHeaders, SigningInput,
};

mod provide_credential;
pub use provide_credential::*;

mod endpoint;
pub use endpoint::{EmptyBody, Endpoint};

mod client;
pub use client::{json_body, Client};

mod constants;
pub use constants::{
    CONTENT_TYPE_JSON, EXCHANGE_API_KEY, EXCHANGE_API_SECRET, EXCHANGE_BASE_URL,
    EXCHANGE_DEFAULT_SYMBOL, TIME_BUCKET_MILLIS, X_API_EXPIRES, X_API_KEY, X_API_SIGN,
};
