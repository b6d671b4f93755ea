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

//! ICBC aggregate payment client.
//!
//! Requests are sent as `application/x-www-form-urlencoded` forms signed with
//! RSA over `path?sorted_params`. Replies are verified with the ICBC gateway
//! public key over the raw `response_biz_content` text.
//!
//! ## Example
//!
//! ```no_run
//! use paysign_core::{BodyMap, Context, Result};
//! use paysign_icbc::{Client, Config, EnvCredentialProvider};
//!
//! # async fn example(ctx: Context) -> Result<()> {
//! let config = Config::new().from_env(&ctx)?;
//! let client = Client::from_provider(ctx, config, EnvCredentialProvider::new()).await?;
//!
//! let rsp = client
//!     .pay(
//!         BodyMap::new()
//!             .with("out_trade_no", "T20240501001")
//!             .with("pay_mode", "9")
//!             .with("access_type", "7")
//!             .with("order_amt", "100"),
//!     )
//!     .await?;
//! println!("icbc order: {}", rsp.order_id);
//! # Ok(())
//! # }
//! ```

mod constants;
pub use constants::{
    ICBC_APP_ID, ICBC_ENDPOINT, ICBC_IS_PROD, ICBC_MER_ACCT, ICBC_MER_ID, ICBC_MER_PRTCL_NO,
    ICBC_PRIVATE_KEY, ICBC_PRIVATE_KEY_FILE, ICBC_PUBLIC_KEY, ICBC_PUBLIC_KEY_FILE, ICBC_SIGN_TYPE,
};

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::*;

mod model;
pub use model::{
    IcbcResponse, NotifyRequest, NotifyResponse, PayResponse, QueryResponse, RefundResponse,
    ResponseBase,
};

mod client;
pub use client::Client;
