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

//! Digest signatures carried by China UMS asynchronous notifications.
//!
//! ```text
//! sign = upper_hex(digest(sorted_params_without_sign + secret_key))
//! ```
//!
//! `digest` is MD5 unless the notification says `signType=SHA256`.

use log::{debug, warn};

use crate::hash::{hex_md5, hex_sha256};
use crate::{BodyMap, Error, Result};

/// Digest used by a notification signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifySignType {
    /// MD5, used when `signType` is absent.
    #[default]
    Md5,
    /// SHA256.
    Sha256,
}

impl NotifySignType {
    /// Pick the digest named by a notification's `signType`.
    pub fn from_params(params: &BodyMap) -> Self {
        if params.get_string("signType").eq_ignore_ascii_case("SHA256") {
            NotifySignType::Sha256
        } else {
            NotifySignType::Md5
        }
    }
}

/// Compute the uppercase hex signature of `params` with `secret_key`.
///
/// `sign` is never part of the signed content.
pub fn notify_sign(params: &BodyMap, secret_key: &str, sign_type: NotifySignType) -> String {
    let mut params = params.clone();
    params.remove("sign");

    let mut content = params.encode_sign_params();
    debug!("notify string to sign: {content}");
    content.push_str(secret_key);

    let digest = match sign_type {
        NotifySignType::Md5 => hex_md5(content.as_bytes()),
        NotifySignType::Sha256 => hex_sha256(content.as_bytes()),
    };
    digest.to_ascii_uppercase()
}

/// Verify the `sign` carried by a notification.
pub fn verify_notify_sign(params: &BodyMap, secret_key: &str) -> Result<()> {
    let sign = params.get_string("sign");
    if sign.is_empty() {
        return Err(Error::signature_invalid("notification carries no sign"));
    }

    let expected = notify_sign(params, secret_key, NotifySignType::from_params(params));
    if expected.eq_ignore_ascii_case(&sign) {
        Ok(())
    } else {
        warn!("notify signature rejected");
        Err(Error::signature_invalid("notification sign mismatch"))
    }
}
