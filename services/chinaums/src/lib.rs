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

//! China UMS netpay client.
//!
//! Every call carries a JSON body with `msgId`, `mid`, `tid` and
//! `requestTimestamp` injected, authorized with `OPEN-BODY-SIG` (POST) or
//! `OPEN-FORM-PARAM` query parameters (GET).
//!
//! ## Example
//!
//! ```no_run
//! use paysign_chinaums::{Client, Config, EnvCredentialProvider};
//! use paysign_core::{BodyMap, Context, Result};
//!
//! # async fn example(ctx: Context) -> Result<()> {
//! let config = Config::new().from_env(&ctx)?;
//! let client = Client::from_provider(ctx, config, EnvCredentialProvider::new()).await?;
//!
//! let order_id = client.new_order_id()?;
//! let rsp = client
//!     .mini_wechat_pay(
//!         BodyMap::new()
//!             .with("merOrderId", order_id)
//!             .with("totalAmount", 1)
//!             .with("tradeType", "MINI")
//!             .with("subOpenId", "o7RQJ5ZyM0xOSrYfkMY7m1Mn-bVE")
//!             .with("notifyUrl", "https://merchant.example/notify"),
//!     )
//!     .await?;
//! println!("wx.requestPayment: {}", rsp.mini_pay_request);
//! # Ok(())
//! # }
//! ```

mod constants;
pub use constants::{
    CHINAUMS_APP_ID, CHINAUMS_APP_KEY, CHINAUMS_ENDPOINT, CHINAUMS_IS_PROD, CHINAUMS_MERCHANT_NO,
    CHINAUMS_MSG_SRC, CHINAUMS_MSG_SRC_ID, CHINAUMS_SECRET_KEY, CHINAUMS_TERMINAL_NO,
};

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::*;

mod model;
pub use model::{PayResponse, RefundResponse, ResponseBase, UmsResponse};

mod open_api;
pub use open_api::{AuthStyle, OpenApi};

mod client;
pub use client::Client;
