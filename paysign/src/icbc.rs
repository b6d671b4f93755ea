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

//! ICBC client, see [`paysign_icbc`].

pub use paysign_icbc::*;

#[cfg(feature = "default-context")]
use crate::{default_context, Result};

/// Build a client on [`default_context`] with config and credential loaded
/// from `ICBC_*` env values.
#[cfg(feature = "default-context")]
pub async fn default_client() -> Result<Client> {
    let ctx = default_context();
    let config = Config::new().from_env(&ctx)?;

    Client::from_provider(ctx, config, EnvCredentialProvider::new()).await
}
