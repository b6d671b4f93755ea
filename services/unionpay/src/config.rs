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

use crate::constants::*;
use paysign_core::utils::parse_bool;
use paysign_core::{Context, Result};

/// Config carries the gateway settings of the UnionPay client.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// `is_prod` selects the production gateway, will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`UNIONPAY_IS_PROD`]
    ///
    /// Defaults to the sandbox gateway.
    pub is_prod: Option<bool>,
    /// `endpoint` overrides the gateway base url, will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`UNIONPAY_ENDPOINT`]
    pub endpoint: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set is_prod
    pub fn with_is_prod(mut self, is_prod: bool) -> Self {
        self.is_prod = Some(is_prod);
        self
    }

    /// Set endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Result<Self> {
        if let Some(v) = ctx.env_var(UNIONPAY_IS_PROD) {
            self.is_prod.get_or_insert(parse_bool(UNIONPAY_IS_PROD, &v)?);
        }
        if let Some(v) = ctx.env_var(UNIONPAY_ENDPOINT) {
            self.endpoint.get_or_insert(v);
        }

        Ok(self)
    }

    /// Gateway base url without trailing slash.
    pub fn base_url(&self) -> &str {
        match (&self.endpoint, self.is_prod) {
            (Some(endpoint), _) => endpoint.trim_end_matches('/'),
            (None, Some(true)) => BASE_URL,
            (None, _) => SANDBOX_BASE_URL,
        }
    }
}
