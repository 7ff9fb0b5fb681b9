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

use std::sync::Arc;

use exsign_exchange::{compute_signed_headers, Credential, SigningInput};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_signing_is_independent() -> anyhow::Result<()> {
    let cred = Arc::new(Credential::new("k", "s"));
    let expected = compute_signed_headers(&cred, &SigningInput::new("symbol=BTCUSDT", b""), 1_700_000_000_000)?;

    let mut handles = Vec::new();
    for i in 0..16u64 {
        let cred = cred.clone();
        handles.push(tokio::spawn(async move {
            compute_signed_headers(
                &cred,
                &SigningInput::new("symbol=BTCUSDT", b""),
                1_700_000_000_000 + i,
            )
        }));
    }

    for (i, handle) in handles.into_iter().enumerate() {
        let headers = handle.await??;
        assert_eq!(headers.expires, (1_700_000_000_000 + i as u64).to_string());
        // All timestamps share one bucket, so the signature is identical.
        assert_eq!(headers.sign, expected.sign);
    }
    Ok(())
}
