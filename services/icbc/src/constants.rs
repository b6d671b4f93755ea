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

// Env values used in icbc services.
pub const ICBC_MER_ID: &str = "ICBC_MER_ID";
pub const ICBC_APP_ID: &str = "ICBC_APP_ID";
pub const ICBC_MER_PRTCL_NO: &str = "ICBC_MER_PRTCL_NO";
pub const ICBC_MER_ACCT: &str = "ICBC_MER_ACCT";
pub const ICBC_PRIVATE_KEY: &str = "ICBC_PRIVATE_KEY";
pub const ICBC_PRIVATE_KEY_FILE: &str = "ICBC_PRIVATE_KEY_FILE";
pub const ICBC_PUBLIC_KEY: &str = "ICBC_PUBLIC_KEY";
pub const ICBC_PUBLIC_KEY_FILE: &str = "ICBC_PUBLIC_KEY_FILE";
pub const ICBC_IS_PROD: &str = "ICBC_IS_PROD";
pub const ICBC_ENDPOINT: &str = "ICBC_ENDPOINT";
pub const ICBC_SIGN_TYPE: &str = "ICBC_SIGN_TYPE";

// Gateways.
pub const BASE_URL: &str = "https://gw.open.icbc.com.cn";
pub const SANDBOX_BASE_URL: &str = "https://syb-test.allinpay.com/apiweb";

// Aggregate payment paths.
pub const PAY_PATH: &str = "/api/cardbusiness/aggregatepay/b2c/online/consumepurchase/V1";
pub const QUERY_PATH: &str = "/api/cardbusiness/aggregatepay/b2c/online/orderqry/V1";
pub const REFUND_PATH: &str = "/api/cardbusiness/aggregatepay/b2c/online/merrefund/V1";

pub const FORMAT_JSON: &str = "json";
pub const CHARSET_UTF8: &str = "UTF-8";
pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded;charset=UTF-8";
