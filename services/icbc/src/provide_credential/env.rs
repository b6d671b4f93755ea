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
use log::debug;
use paysign_core::{Context, Error, ProvideCredential, Result};

/// EnvCredentialProvider loads ICBC credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `ICBC_MER_ID`, `ICBC_APP_ID`, `ICBC_MER_PRTCL_NO`, `ICBC_MER_ACCT`: merchant identity
/// - `ICBC_PRIVATE_KEY` or `ICBC_PRIVATE_KEY_FILE`: the merchant private key, inline or as a path
/// - `ICBC_PUBLIC_KEY` or `ICBC_PUBLIC_KEY_FILE`: the gateway public key, inline or as a path
///
/// Inline keys win over files. Paths may start with `~/`.
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

async fn load_key(ctx: &Context, inline: &str, file: &str) -> Result<Option<String>> {
    if let Some(v) = ctx.env_var(inline).filter(|v| !v.is_empty()) {
        return Ok(Some(v));
    }
    let Some(path) = ctx.env_var(file).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    let path = ctx
        .expand_home_dir(&path)
        .ok_or_else(|| Error::config_invalid(format!("{file} needs a home dir to expand: {path}")))?;
    debug!("loading icbc key from {path}");
    Ok(Some(ctx.file_read_as_string(&path).await?))
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let envs = ctx.env_vars();

        let (Some(mer_id), Some(app_id), Some(mer_prtcl_no), Some(mer_acct)) = (
            envs.get(ICBC_MER_ID),
            envs.get(ICBC_APP_ID),
            envs.get(ICBC_MER_PRTCL_NO),
            envs.get(ICBC_MER_ACCT),
        ) else {
            return Ok(None);
        };

        let Some(private_key) = load_key(ctx, ICBC_PRIVATE_KEY, ICBC_PRIVATE_KEY_FILE).await? else {
            return Ok(None);
        };
        let Some(icbc_public_key) = load_key(ctx, ICBC_PUBLIC_KEY, ICBC_PUBLIC_KEY_FILE).await?
        else {
            return Ok(None);
        };

        Ok(Some(Credential {
            mer_id: mer_id.clone(),
            app_id: app_id.clone(),
            mer_prtcl_no: mer_prtcl_no.clone(),
            mer_acct: mer_acct.clone(),
            private_key,
            icbc_public_key,
        }))
    }
}
