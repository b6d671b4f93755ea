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

//! Signed request clients for ICBC, China UMS and UnionPay payment gateways.
//!
//! This crate re-exports [`paysign_core`] and, behind features, one module
//! per gateway:
//!
//! | Feature    | Module       | Flow                                   |
//! |------------|--------------|----------------------------------------|
//! | `icbc`     | [`icbc`]     | RSA signed form, RSA verified reply    |
//! | `chinaums` | [`chinaums`] | `OPEN-BODY-SIG` HMAC over a JSON body  |
//! | `unionpay` | [`unionpay`] | `OPEN-BODY-SIG` HMAC over a JSON body  |
//!
//! The `default-context` feature (enabled by default) provides
//! [`default_context`], which reads files with tokio, sends requests with
//! reqwest and loads settings from the process environment.
//!
//! ## Example
//!
//! ```no_run
//! # #[cfg(all(feature = "default-context", feature = "icbc"))]
//! # async fn example() -> paysign::Result<()> {
//! use paysign::BodyMap;
//!
//! let client = paysign::icbc::default_client().await?;
//! let rsp = client
//!     .query(BodyMap::new().with("out_trade_no", "T20240501001"))
//!     .await?;
//! println!("pay status: {}", rsp.pay_status);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use paysign_core::*;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::default_context;

#[cfg(feature = "icbc")]
pub mod icbc;

#[cfg(feature = "chinaums")]
pub mod chinaums;

#[cfg(feature = "unionpay")]
pub mod unionpay;
