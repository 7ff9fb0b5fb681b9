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

//! Time related utils.

use crate::{Error, Result};
use chrono::Utc;

/// DateTime is the alias of `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Milliseconds since the unix epoch.
///
/// Times before the epoch can't be carried by signing headers and are
/// rejected.
pub fn timestamp_millis(t: DateTime) -> Result<u64> {
    let millis = t.timestamp_millis();
    u64::try_from(millis)
        .map_err(|_| Error::unexpected(format!("time {t} is before unix epoch")))
}

/// Build a datetime from milliseconds since the unix epoch.
pub fn from_timestamp_millis(millis: u64) -> Result<DateTime> {
    i64::try_from(millis)
        .ok()
        .and_then(DateTime::from_timestamp_millis)
        .ok_or_else(|| Error::unexpected(format!("timestamp {millis} is out of range")))
}
