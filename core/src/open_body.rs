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

//! China UMS open platform HMAC authorization.
//!
//! ## Format
//!
//! ```text
//! string_to_sign = AppId + Timestamp + Nonce + hex(sha256(body))
//! Signature      = base64(hmac_sha256(AppKey, string_to_sign))
//! ```
//!
//! The result is carried either in the `Authorization` header
//! (`OPEN-BODY-SIG`) or as query parameters (`OPEN-FORM-PARAM`).

use std::fmt::Write;

use log::debug;

use crate::hash::{base64_decode, base64_hmac_sha256, hex_sha256, verify_hmac_sha256};
use crate::{BodyMap, Error, Result};

/// Scheme name of the header based authorization.
pub const OPEN_BODY_SIG: &str = "OPEN-BODY-SIG";
/// Scheme name of the query based authorization.
pub const OPEN_FORM_PARAM: &str = "OPEN-FORM-PARAM";

/// Construct string to sign for the open platform.
pub fn open_body_string_to_sign(app_id: &str, timestamp: &str, nonce: &str, body: &[u8]) -> String {
    let mut s = String::with_capacity(app_id.len() + timestamp.len() + nonce.len() + 64);
    s.push_str(app_id);
    s.push_str(timestamp);
    s.push_str(nonce);
    s.push_str(&hex_sha256(body));
    s
}

/// Compute the base64 encoded HMAC-SHA256 signature over `body`.
pub fn open_body_signature(
    app_key: &str,
    app_id: &str,
    timestamp: &str,
    nonce: &str,
    body: &[u8],
) -> String {
    let string_to_sign = open_body_string_to_sign(app_id, timestamp, nonce, body);
    debug!("open body string to sign: {string_to_sign}");

    base64_hmac_sha256(app_key.as_bytes(), string_to_sign.as_bytes())
}

/// OpenBodySig is one computed open platform authorization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenBodySig {
    /// AppId issued by the open platform.
    pub app_id: String,
    /// Timestamp in the format agreed with the gateway.
    pub timestamp: String,
    /// Nonce, unique per request.
    pub nonce: String,
    /// Base64 encoded HMAC-SHA256 signature.
    pub signature: String,
}

impl OpenBodySig {
    /// Sign `body` with the shared `app_key`.
    pub fn sign(
        app_id: &str,
        app_key: &str,
        timestamp: &str,
        nonce: &str,
        body: &[u8],
    ) -> Self {
        Self {
            app_id: app_id.to_string(),
            timestamp: timestamp.to_string(),
            nonce: nonce.to_string(),
            signature: open_body_signature(app_key, app_id, timestamp, nonce, body),
        }
    }

    /// Render the `Authorization` header value.
    ///
    /// `separator` sits between the fields; gateways accept both `","` and `", "`.
    pub fn to_header(&self, separator: &str) -> String {
        let mut s = String::new();
        // Writing into a String never fails.
        let _ = write!(
            s,
            r#"{OPEN_BODY_SIG} AppId="{}"{separator}Timestamp="{}"{separator}Nonce="{}"{separator}Signature="{}""#,
            self.app_id, self.timestamp, self.nonce, self.signature
        );
        s
    }

    /// Render the `OPEN-FORM-PARAM` query parameters for `content`.
    pub fn to_form_params(&self, content: &str) -> BodyMap {
        BodyMap::new()
            .with("authorization", OPEN_FORM_PARAM)
            .with("appId", self.app_id.as_str())
            .with("timestamp", self.timestamp.as_str())
            .with("nonce", self.nonce.as_str())
            .with("content", content)
            .with("signature", self.signature.as_str())
    }

    /// Parse an `OPEN-BODY-SIG` header value.
    pub fn parse(header: &str) -> Result<Self> {
        let fields = header
            .trim()
            .strip_prefix(OPEN_BODY_SIG)
            .ok_or_else(|| Error::signature_invalid("authorization is not OPEN-BODY-SIG"))?;

        let (mut app_id, mut timestamp, mut nonce, mut signature) = (None, None, None, None);
        for field in fields.split(',') {
            let Some((k, v)) = field.trim().split_once('=') else {
                continue;
            };
            let v = v.trim().trim_matches('"').to_string();
            match k.trim() {
                "AppId" => app_id = Some(v),
                "Timestamp" => timestamp = Some(v),
                "Nonce" => nonce = Some(v),
                "Signature" => signature = Some(v),
                _ => {}
            }
        }

        match (app_id, timestamp, nonce, signature) {
            (Some(app_id), Some(timestamp), Some(nonce), Some(signature)) => Ok(Self {
                app_id,
                timestamp,
                nonce,
                signature,
            }),
            _ => Err(Error::signature_invalid(
                "OPEN-BODY-SIG authorization misses required fields",
            )),
        }
    }

    /// Verify that this authorization was computed over `body` with `app_key`.
    pub fn verify(&self, app_key: &str, body: &[u8]) -> Result<()> {
        let expected = base64_decode(&self.signature).map_err(|e| {
            Error::signature_invalid("signature is not valid base64").with_source(e)
        })?;
        let string_to_sign =
            open_body_string_to_sign(&self.app_id, &self.timestamp, &self.nonce, body);

        if verify_hmac_sha256(app_key.as_bytes(), string_to_sign.as_bytes(), &expected) {
            Ok(())
        } else {
            Err(Error::signature_invalid("OPEN-BODY-SIG signature mismatch"))
        }
    }
}
