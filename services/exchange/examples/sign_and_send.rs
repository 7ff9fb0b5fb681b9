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

use anyhow::Result;
use exsign_core::{Context, OsEnv, ProvideCredential, Signer};
use exsign_exchange::{
    compute_signed_headers, Client, Config, Credential, DefaultCredentialProvider, Endpoint,
    RequestSigner, SigningInput,
};
use exsign_http_send_reqwest::ReqwestHttpSend;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let _ = dotenv::dotenv();

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let config = Config::new().from_env(&ctx);

    let loader = DefaultCredentialProvider::new();
    if loader.provide_credential(&ctx).await?.is_none() || config.base_url.is_none() {
        println!("No exchange credentials or base url found, signing with demo values");

        let headers = compute_signed_headers(
            &Credential::new("demo-api-key", "demo-api-secret"),
            &SigningInput::new("symbol=BTCUSDT", b""),
            1_700_000_000_000,
        )?;
        println!("{headers:#?}");
        return Ok(());
    }

    let signer = Signer::new(ctx, loader, RequestSigner::new());
    let client = Client::new(&config, signer)?;

    // Pass the path of a read-only endpoint, e.g. the account balance.
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/api/v1/account/balance".to_string());
    let resp = client.send(&Endpoint::get(path), &[], None).await?;

    println!("Response status: {}", resp.status());
    println!("{}", String::from_utf8_lossy(resp.body()));
    Ok(())
}
