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

use paysign_core::utils::Redact;
use paysign_core::SigningCredential;
use std::fmt::{Debug, Formatter};

/// Credential for UnionPay netpay.
#[derive(Default, Clone)]
pub struct Credential {
    /// AppId of the open platform.
    pub app_id: String,
    /// AppKey of the open platform.
    pub app_key: String,
    /// Merchant number, sent as `mid`.
    pub merchant_no: String,
    /// Terminal number, sent as `tid`.
    pub terminal_no: String,
    /// Communication key used to sign notifications.
    pub secret_key: String,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("app_id", &Redact::from(&self.app_id))
            .field("app_key", &Redact::from(&self.app_key))
            .field("merchant_no", &self.merchant_no)
            .field("terminal_no", &self.terminal_no)
            .field("secret_key", &Redact::from(&self.secret_key))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.app_id.is_empty()
            && !self.app_key.is_empty()
            && !self.merchant_no.is_empty()
            && !self.terminal_no.is_empty()
    }
}
