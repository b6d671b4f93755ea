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

use crate::Credential;
use async_trait::async_trait;
use paysign_core::{Context, ProvideCredential, Result};

/// StaticCredentialProvider hands out a credential fixed at construction.
#[derive(Debug)]
pub struct StaticCredentialProvider {
    credential: Credential,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider.
    pub fn new(app_id: &str, app_key: &str, merchant_no: &str, terminal_no: &str) -> Self {
        Self {
            credential: Credential {
                app_id: app_id.to_string(),
                app_key: app_key.to_string(),
                merchant_no: merchant_no.to_string(),
                terminal_no: terminal_no.to_string(),
                secret_key: String::new(),
            },
        }
    }

    /// Set the communication key used to verify notifications.
    pub fn with_secret_key(mut self, secret_key: &str) -> Self {
        self.credential.secret_key = secret_key.to_string();
        self
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _ctx: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(self.credential.clone()))
    }
}
