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

//! UnionPay netpay client.
//!
//! UnionPay merchants are served by the China UMS open platform: requests are
//! JSON bodies with `msgId`, `mid`, `tid` and `requestTimestamp` injected and
//! authorized with `OPEN-BODY-SIG`. Unlike [China UMS](paysign_chinaums), the
//! authorization timestamp is `yyyyMMddHHmmss` and the business type
//! (`instMid`) is filled in per product.
//!
//! ## Example
//!
//! ```no_run
//! use paysign_core::{BodyMap, Context, Result};
//! use paysign_unionpay::{Client, Config, EnvCredentialProvider};
//!
//! # async fn example(ctx: Context) -> Result<()> {
//! let config = Config::new().from_env(&ctx)?;
//! let client = Client::from_provider(ctx, config, EnvCredentialProvider::new()).await?;
//!
//! let url = client.web_pay(
//!     BodyMap::new()
//!         .with("merOrderId", "101720240501060509123456")
//!         .with("totalAmount", 1)
//!         .with("notifyUrl", "https://merchant.example/notify"),
//! )?;
//! println!("redirect to {url}");
//! # Ok(())
//! # }
//! ```

mod constants;
pub use constants::{
    UNIONPAY_APP_ID, UNIONPAY_APP_KEY, UNIONPAY_ENDPOINT, UNIONPAY_IS_PROD, UNIONPAY_MERCHANT_NO,
    UNIONPAY_SECRET_KEY, UNIONPAY_TERMINAL_NO,
};

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::*;

pub use paysign_chinaums::{PayResponse, RefundResponse, ResponseBase, UmsResponse};

mod client;
pub use client::Client;
