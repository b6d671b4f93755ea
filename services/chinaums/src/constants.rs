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

// Env values used in chinaums services.
pub const CHINAUMS_APP_ID: &str = "CHINAUMS_APP_ID";
pub const CHINAUMS_APP_KEY: &str = "CHINAUMS_APP_KEY";
pub const CHINAUMS_MERCHANT_NO: &str = "CHINAUMS_MERCHANT_NO";
pub const CHINAUMS_TERMINAL_NO: &str = "CHINAUMS_TERMINAL_NO";
pub const CHINAUMS_MSG_SRC: &str = "CHINAUMS_MSG_SRC";
pub const CHINAUMS_MSG_SRC_ID: &str = "CHINAUMS_MSG_SRC_ID";
pub const CHINAUMS_SECRET_KEY: &str = "CHINAUMS_SECRET_KEY";
pub const CHINAUMS_IS_PROD: &str = "CHINAUMS_IS_PROD";
pub const CHINAUMS_ENDPOINT: &str = "CHINAUMS_ENDPOINT";

// Gateways.
pub const BASE_URL: &str = "https://api-mop.chinaums.com";
pub const SANDBOX_BASE_URL: &str = "https://test-api-open.chinaums.com";

// Netpay paths.
pub const MINI_WECHAT_PAY_PATH: &str = "/v1/netpay/wx/unified-order";
pub const H5_WECHAT_PAY_PATH: &str = "/v1/netpay/wxpay/h5-pay";
pub const H5_ALI_PAY_PATH: &str = "/v1/netpay/trade/h5-pay";
pub const REFUND_PATH: &str = "/v1/netpay/refund";

pub const CONTENT_TYPE_JSON: &str = "application/json;charset=UTF-8";

// Success sentinels of `errCode`.
pub const SUCCESS_CODES: [&str; 2] = ["0000", "SUCCESS"];

// Order ids must be longer than 6 and shorter than 28 characters.
pub const ORDER_ID_MAX_LEN: usize = 27;
