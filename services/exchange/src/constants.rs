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

// Env values used by the exchange service.
pub const EXCHANGE_API_KEY: &str = "EXCHANGE_API_KEY";
pub const EXCHANGE_API_SECRET: &str = "EXCHANGE_API_SECRET";
pub const EXCHANGE_BASE_URL: &str = "EXCHANGE_BASE_URL";
pub const EXCHANGE_DEFAULT_SYMBOL: &str = "EXCHANGE_DEFAULT_SYMBOL";

// Headers attached to every signed request.
pub const X_API_KEY: &str = "x-api-key";
pub const X_API_EXPIRES: &str = "x-api-expires";
pub const X_API_SIGN: &str = "x-api-sign";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Width of a signing time bucket in milliseconds.
///
/// A signature stays valid for the bucket its `expires` timestamp falls in.
pub const TIME_BUCKET_MILLIS: u64 = 30_000;

/// Query parameter carrying the trading pair.
pub const SYMBOL_PARAM: &str = "symbol";
