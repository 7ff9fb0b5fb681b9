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

//! Utility functions and types.

use std::fmt::{Debug, Display};

/// Redacts a value for logging.
///
/// - Empty input is rendered as `EMPTY`.
/// - Input built with [`Redact::secret`] is always rendered as `***`.
/// - Input shorter than 12 characters is rendered as `***`.
/// - Otherwise only the first three and the last three characters are kept.
///
/// Keeping the edges lets users tell two api keys apart in logs. Secrets
/// never keep any character.
pub struct Redact<'a> {
    value: &'a str,
    opaque: bool,
}

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact {
            value,
            opaque: false,
        }
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact::from(value.as_str())
    }
}

impl<'a> Redact<'a> {
    /// Redact a secret without keeping any of its characters.
    pub fn secret(value: &'a str) -> Self {
        Redact {
            value,
            opaque: true,
        }
    }

    fn write(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let v = self.value;
        let length = v.len();
        if length == 0 {
            f.write_str("EMPTY")
        } else if self.opaque
            || length < 12
            || !v.is_char_boundary(3)
            || !v.is_char_boundary(length - 3)
        {
            f.write_str("***")
        } else {
            f.write_str(&v[..3])?;
            f.write_str("***")?;
            f.write_str(&v[length - 3..])
        }
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write(f)
    }
}

impl Display for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write(f)
    }
}
