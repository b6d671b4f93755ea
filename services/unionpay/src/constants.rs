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

// Env values used in unionpay services.
pub const UNIONPAY_APP_ID: &str = "UNIONPAY_APP_ID";
pub const UNIONPAY_APP_KEY: &str = "UNIONPAY_APP_KEY";
pub const UNIONPAY_MERCHANT_NO: &str = "UNIONPAY_MERCHANT_NO";
pub const UNIONPAY_TERMINAL_NO: &str = "UNIONPAY_TERMINAL_NO";
pub const UNIONPAY_SECRET_KEY: &str = "UNIONPAY_SECRET_KEY";
pub const UNIONPAY_IS_PROD: &str = "UNIONPAY_IS_PROD";
pub const UNIONPAY_ENDPOINT: &str = "UNIONPAY_ENDPOINT";

// Gateways.
pub const BASE_URL: &str = "https://api-mop.chinaums.com";
pub const SANDBOX_BASE_URL: &str = "https://test-api-open.chinaums.com";

// Netpay paths.
pub const MINI_WECHAT_PAY_PATH: &str = "/v1/netpay/wx/unified-order";
pub const WEB_PAY_PATH: &str = "/v1/netpay/webpay/pay";
pub const H5_WECHAT_PAY_PATH: &str = "/v1/netpay/wxpay/h5-pay";
pub const H5_ALI_PAY_PATH: &str = "/v1/netpay/trade/h5-pay";
pub const REFUND_PATH: &str = "/v1/netpay/refund";

// Business types injected per product.
pub const INST_MID_MINI: &str = "MINIDEFAULT";
pub const INST_MID_WEB: &str = "YUEDANDEFAULT";
pub const INST_MID_H5: &str = "H5DEFAULT";
pub const TRADE_TYPE_MINI: &str = "MINI";

pub const AUTHORIZATION_SEPARATOR: &str = ", ";
