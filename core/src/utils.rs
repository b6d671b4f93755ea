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

use crate::{Error, Result};
use std::fmt::Debug;

/// Redacts secrets such as app keys and PEM encoded private keys in `Debug` output.
///
/// - Values shorter than 12 characters are fully hidden.
/// - Longer values keep their first and last three characters, so two
///   different merchants can still be told apart in logs.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        Redact(value.as_deref().unwrap_or_default())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = self.0;
        let length = value.len();
        if length == 0 {
            f.write_str("EMPTY")
        } else if length < 12 || !value.is_char_boundary(3) || !value.is_char_boundary(length - 3)
        {
            f.write_str("***")
        } else {
            f.write_str(&value[..3])?;
            f.write_str("***")?;
            f.write_str(&value[length - 3..])
        }
    }
}

/// Build a string of `n` random decimal digits.
pub fn random_digits(n: usize) -> String {
    use rand::Rng;

    let mut rng = rand::thread_rng();
    (0..n)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

/// Parse a boolean switch such as `PAYSIGN_IS_PROD=on`.
///
/// Accepts `true`/`false`, `1`/`0`, `on`/`off` and `yes`/`no`, case-insensitive.
pub fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Ok(true),
        "false" | "0" | "off" | "no" => Ok(false),
        _ => Err(Error::config_invalid(format!(
            "{key} must be a boolean, got {value}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact() {
        let cases = vec![
            ("Short", "***"),
            ("775481e2556e4564985f5439a5e6a277", "775***277"),
            ("", "EMPTY"),
            ("HelloWorld", "***"),
            ("商户通讯密钥不可泄露", "商***露"),
        ];

        for (input, expected) in cases {
            assert_eq!(
                format!("{:?}", Redact(input)),
                expected,
                "Failed on input: {}",
                input
            );
        }
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("ICBC_IS_PROD", "ON").unwrap());
        assert!(!parse_bool("ICBC_IS_PROD", " false ").unwrap());

        let err = parse_bool("ICBC_IS_PROD", "maybe").unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::ConfigInvalid);
    }

    #[test]
    fn test_random_digits() {
        let digits = random_digits(7);
        assert_eq!(digits.len(), 7);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }
}
