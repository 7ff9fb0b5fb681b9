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
use exsign_exchange::{json_body, Config, EmptyBody, Endpoint, X_API_EXPIRES, X_API_KEY, X_API_SIGN};
use http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};

use super::mock::{client, MockHttpSend};

#[derive(Debug, Deserialize, PartialEq)]
struct Balance {
    asset: String,
    free: String,
}

#[tokio::test]
async fn test_send_signs_query() -> anyhow::Result<()> {
    let mock = MockHttpSend::new([(
        "/api/v1/orders/open",
        StatusCode::OK,
        r#"[]"#,
    )]);
    let c = client(&mock, Config::new());

    let resp = c
        .send(
            &Endpoint::get("/api/v1/orders/open"),
            &[("symbol", "BTCUSDT")],
            None,
        )
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let reqs = mock.requests();
    assert_eq!(reqs.len(), 1);
    let req = &reqs[0];
    assert_eq!(req.method, Method::GET);
    assert_eq!(
        req.uri.to_string(),
        "https://api.example.com/api/v1/orders/open?symbol=BTCUSDT"
    );
    assert!(req.body.is_empty());
    assert_eq!(req.headers[X_API_KEY], "k");
    assert_eq!(req.headers[X_API_EXPIRES], "1700000000000");
    assert_eq!(
        req.headers[X_API_SIGN],
        "31d9b6ff037830390264d7a2e5f4d73533ff329e062f6dea6285bfcb9eba02f3"
    );
    assert_eq!(req.headers[http::header::CONTENT_TYPE], "application/json");
    Ok(())
}

#[tokio::test]
async fn test_send_json_decodes_success() -> anyhow::Result<()> {
    let mock = MockHttpSend::new([(
        "/api/v1/account/balance",
        StatusCode::OK,
        r#"[{"asset":"USDT","free":"12.5"}]"#,
    )]);
    let c = client(&mock, Config::new());

    let balances: Vec<Balance> = c
        .send_json(&Endpoint::get("/api/v1/account/balance"), &[], None)
        .await?;
    assert_eq!(
        balances,
        vec![Balance {
            asset: "USDT".to_string(),
            free: "12.5".to_string()
        }]
    );

    let uri = mock.requests()[0].uri.clone();
    assert_eq!(uri.query(), None);
    Ok(())
}

#[tokio::test]
async fn test_send_json_surfaces_error_status() -> anyhow::Result<()> {
    let mock = MockHttpSend::new([(
        "/api/v1/order",
        StatusCode::UNAUTHORIZED,
        r#"{"error":"signature mismatch"}"#,
    )]);
    let c = client(&mock, Config::new());

    let err = c
        .send_json::<serde_json::Value>(&Endpoint::delete("/api/v1/order"), &[("orderId", "1")], None)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unexpected);
    assert!(err.to_string().contains("401"));
    assert!(err.to_string().contains("signature mismatch"));
    assert_eq!(mock.requests().len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_send_body_is_signed_and_sent() -> anyhow::Result<()> {
    #[derive(Serialize)]
    struct PlaceOrder<'a> {
        symbol: &'a str,
        side: &'a str,
        price: &'a str,
    }

    let mock = MockHttpSend::new([("/api/v1/order", StatusCode::OK, r#"{"orderId":"1"}"#)]);
    let c = client(&mock, Config::new());

    let body = json_body(&PlaceOrder {
        symbol: "PPOUSDT",
        side: "BUY",
        price: "0.5",
    })?;
    c.send(&Endpoint::post("/api/v1/order"), &[], Some(body.as_slice()))
        .await?;

    let reqs = mock.requests();
    let req = &reqs[0];
    assert_eq!(req.body.as_ref(), body.as_slice());

    let expected = exsign_exchange::compute_signed_headers(
        &exsign_exchange::Credential::new("k", "s"),
        &exsign_exchange::SigningInput::new("", &body),
        super::mock::NOW,
    )?;
    assert_eq!(req.headers[X_API_SIGN], expected.sign.as_str());
    Ok(())
}

#[tokio::test]
async fn test_empty_body_conventions() -> anyhow::Result<()> {
    let mock = MockHttpSend::new([
        ("/api/v1/trades", StatusCode::OK, "[]"),
        ("/api/v1/order/cancel", StatusCode::OK, "{}"),
    ]);
    let c = client(&mock, Config::new());

    c.send(&Endpoint::get("/api/v1/trades"), &[("symbol", "BTCUSDT")], None)
        .await?;
    c.send(
        &Endpoint::post("/api/v1/order/cancel").with_empty_body(EmptyBody::EmptyObject),
        &[("symbol", "BTCUSDT")],
        None,
    )
    .await?;

    let reqs = mock.requests();
    assert!(reqs[0].body.is_empty());
    assert_eq!(reqs[1].body.as_ref(), b"{}");
    // Same query, same bucket: only the body convention separates the two.
    assert_ne!(reqs[0].headers[X_API_SIGN], reqs[1].headers[X_API_SIGN]);
    assert_eq!(
        reqs[1].headers[X_API_SIGN],
        exsign_core::hash::hex_hmac_sha256(
            exsign_exchange::derive_signing_key("s", 56_666_666).as_bytes(),
            b"symbol=BTCUSDT{}"
        )
        .as_str()
    );
    Ok(())
}

#[tokio::test]
async fn test_default_symbol_is_injected() -> anyhow::Result<()> {
    let mock = MockHttpSend::new([("/api/v1/orders/open", StatusCode::OK, "[]")]);
    let c = client(&mock, Config::new().with_default_symbol("PPOUSDT"));

    c.send(
        &Endpoint::get("/api/v1/orders/open").with_required_symbol(),
        &[],
        None,
    )
    .await?;

    assert_eq!(mock.requests()[0].uri.query(), Some("symbol=PPOUSDT"));
    Ok(())
}

#[tokio::test]
async fn test_path_without_leading_slash() -> anyhow::Result<()> {
    let mock = MockHttpSend::new([("/api/v1/trades", StatusCode::OK, "[]")]);
    let c = client(&mock, Config::new());

    let resp = c
        .send(&Endpoint::get("api/v1/trades"), &[("symbol", "BTCUSDT")], None)
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        mock.requests()[0].uri.to_string(),
        "https://api.example.com/api/v1/trades?symbol=BTCUSDT"
    );
    Ok(())
}
