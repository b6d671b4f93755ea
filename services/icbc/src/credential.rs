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

/// Credential for the ICBC aggregate payment gateway.
#[derive(Default, Clone)]
pub struct Credential {
    /// Merchant number.
    pub mer_id: String,
    /// APPID issued by ICBC to the merchant.
    pub app_id: String,
    /// Acquiring protocol number.
    pub mer_prtcl_no: String,
    /// Clearing account of the merchant.
    pub mer_acct: String,
    /// Merchant RSA private key, PEM or bare base64 DER.
    pub private_key: String,
    /// ICBC gateway RSA public key, PEM or bare base64 DER.
    pub icbc_public_key: String,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("mer_id", &self.mer_id)
            .field("app_id", &Redact::from(&self.app_id))
            .field("mer_prtcl_no", &self.mer_prtcl_no)
            .field("mer_acct", &Redact::from(&self.mer_acct))
            .field("private_key", &Redact::from(&self.private_key))
            .field("icbc_public_key", &Redact::from(&self.icbc_public_key))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.mer_id.is_empty()
            && !self.app_id.is_empty()
            && !self.mer_prtcl_no.is_empty()
            && !self.mer_acct.is_empty()
            && !self.private_key.is_empty()
            && !self.icbc_public_key.is_empty()
    }
}
