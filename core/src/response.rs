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

//! Helpers shared by every client when handling gateway responses.

use bytes::Bytes;
use http::StatusCode;
use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::{Error, Result};

/// Ensure the gateway answered with `200 OK` and return the body.
///
/// Any other status becomes a [`crate::ErrorKind::Transport`] error carrying
/// both the status and the raw body.
pub fn check_status(resp: http::Response<Bytes>) -> Result<Bytes> {
    let (parts, body) = resp.into_parts();
    if parts.status == StatusCode::OK {
        return Ok(body);
    }

    let body = String::from_utf8_lossy(&body).to_string();
    warn!("gateway responded with status {}: {}", parts.status, body);
    Err(Error::transport(format!(
        "gateway responded with unexpected status {}",
        parts.status
    ))
    .with_status(parts.status)
    .with_body(body))
}

/// Decode a JSON body, keeping the raw text on failure.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| {
        Error::decode(
            format!("failed to decode gateway response: {e}"),
            String::from_utf8_lossy(body),
        )
        .with_source(e)
    })
}

/// Deserialize a field that gateways send either as a string or as a number.
///
/// `null` becomes an empty string.
///
/// ```
/// #[derive(serde::Deserialize)]
/// struct Reply {
///     #[serde(deserialize_with = "paysign_core::response::string_or_number")]
///     total_amount: String,
/// }
///
/// let reply: Reply = serde_json::from_str(r#"{"total_amount":100}"#).unwrap();
/// assert_eq!(reply.total_amount, "100");
/// ```
pub fn string_or_number<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<String, D::Error> {
    match Value::deserialize(d)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        v => Ok(v.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[derive(Debug, Deserialize)]
    struct Reply {
        #[serde(rename = "errCode")]
        err_code: String,
        #[serde(default, deserialize_with = "string_or_number")]
        amount: String,
    }

    #[test]
    fn test_check_status() {
        let ok = http::Response::new(Bytes::from_static(b"{}"));
        assert_eq!(check_status(ok).unwrap(), Bytes::from_static(b"{}"));

        let bad = http::Response::builder()
            .status(StatusCode::BAD_GATEWAY)
            .body(Bytes::from_static(b"upstream down"))
            .unwrap();
        let err = check_status(bad).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.status(), Some(StatusCode::BAD_GATEWAY));
        assert_eq!(err.body(), Some("upstream down"));
    }

    #[test]
    fn test_decode_json() {
        let reply: Reply = decode_json(br#"{"errCode":"SUCCESS","extra":1}"#).unwrap();
        assert_eq!(reply.err_code, "SUCCESS");
        assert_eq!(reply.amount, "");

        let reply: Reply = decode_json(br#"{"errCode":"0000","amount":100}"#).unwrap();
        assert_eq!(reply.amount, "100");
        let reply: Reply = decode_json(br#"{"errCode":"0000","amount":"100"}"#).unwrap();
        assert_eq!(reply.amount, "100");
        let reply: Reply = decode_json(br#"{"errCode":"0000","amount":null}"#).unwrap();
        assert_eq!(reply.amount, "");

        let err = decode_json::<Reply>(b"<html></html>").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert_eq!(err.body(), Some("<html></html>"));
    }
}
