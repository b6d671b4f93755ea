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

use crate::{constants::*, Credential};
use async_trait::async_trait;
use paysign_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads the credential from `UNIONPAY_*` env values.
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let envs = ctx.env_vars();

        let (Some(app_id), Some(app_key), Some(merchant_no), Some(terminal_no)) = (
            envs.get(UNIONPAY_APP_ID),
            envs.get(UNIONPAY_APP_KEY),
            envs.get(UNIONPAY_MERCHANT_NO),
            envs.get(UNIONPAY_TERMINAL_NO),
        ) else {
            return Ok(None);
        };

        Ok(Some(Credential {
            app_id: app_id.clone(),
            app_key: app_key.clone(),
            merchant_no: merchant_no.clone(),
            terminal_no: terminal_no.clone(),
            secret_key: envs.get(UNIONPAY_SECRET_KEY).cloned().unwrap_or_default(),
        }))
    }
}
