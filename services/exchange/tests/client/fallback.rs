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

use exsign_core::ErrorKind;
use exsign_exchange::{Config, Endpoint, X_API_SIGN};
use http::StatusCode;
use pretty_assertions::assert_eq;

use super::mock::{client, MockHttpSend};

#[tokio::test]
async fn test_fallback_on_not_found() -> anyhow::Result<()> {
    let mock = MockHttpSend::new([("/api/v2/trades", StatusCode::OK, "[]")]);
    let c = client(&mock, Config::new());

    let ep = Endpoint::get("/api/v1/trades").with_fallback("/api/v2/trades");
    let resp = c.send(&ep, &[("symbol", "BTCUSDT")], None).await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let reqs = mock.requests();
    let paths: Vec<_> = reqs.iter().map(|r| r.uri.path().to_string()).collect();
    assert_eq!(paths, vec!["/api/v1/trades", "/api/v2/trades"]);
    // The path is not signed, so both attempts carry the same signature.
    assert_eq!(reqs[0].headers[X_API_SIGN], reqs[1].headers[X_API_SIGN]);
    Ok(())
}

#[tokio::test]
async fn test_no_fallback_on_other_errors() -> anyhow::Result<()> {
    let mock = MockHttpSend::new([
        ("/api/v1/trades", StatusCode::INTERNAL_SERVER_ERROR, "{}"),
        ("/api/v2/trades", StatusCode::OK, "[]"),
    ]);
    let c = client(&mock, Config::new());

    let ep = Endpoint::get("/api/v1/trades").with_fallback("/api/v2/trades");
    let resp = c.send(&ep, &[], None).await?;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(mock.requests().len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_all_candidates_not_found() -> anyhow::Result<()> {
    let mock = MockHttpSend::default();
    let c = client(&mock, Config::new());

    let ep = Endpoint::get("/a").with_fallback("/b").with_fallback("/c");
    let resp = c.send(&ep, &[], None).await?;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(mock.requests().len(), 3);
    Ok(())
}

#[tokio::test]
async fn test_error_names_the_answering_path() -> anyhow::Result<()> {
    let mock = MockHttpSend::new([
        ("/api/v1/balance", StatusCode::INTERNAL_SERVER_ERROR, "boom"),
        ("/api/v2/balance", StatusCode::OK, "[]"),
    ]);
    let c = client(&mock, Config::new());

    let ep = Endpoint::get("/api/v1/balance").with_fallback("/api/v2/balance");
    let err = c
        .send_json::<serde_json::Value>(&ep, &[], None)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unexpected);
    assert!(err.to_string().contains("GET /api/v1/balance failed"));
    assert!(!err.to_string().contains("/api/v2/balance"));
    Ok(())
}

#[tokio::test]
async fn test_error_after_fallback_names_last_path() -> anyhow::Result<()> {
    let mock = MockHttpSend::new([("/api/v2/balance", StatusCode::UNAUTHORIZED, "denied")]);
    let c = client(&mock, Config::new());

    let ep = Endpoint::get("/api/v1/balance").with_fallback("/api/v2/balance");
    let err = c
        .send_json::<serde_json::Value>(&ep, &[], None)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("GET /api/v2/balance failed"));
    assert_eq!(mock.requests().len(), 2);
    Ok(())
}
