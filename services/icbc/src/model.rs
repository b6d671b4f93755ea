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

//! Request and response payloads of the ICBC aggregate payment gateway.

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

/// Outer envelope of every gateway reply.
///
/// `response_biz_content` is kept as raw JSON text since the signature is
/// computed over its exact bytes.
#[derive(Debug, Deserialize)]
pub(crate) struct ResponseEnvelope {
    pub response_biz_content: Box<RawValue>,
    #[serde(default)]
    pub sign: String,
}

/// Fields shared by every business payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseBase {
    /// `0` on success.
    pub return_code: i64,
    /// Message describing `return_code`.
    pub return_msg: String,
    /// Echo of the request `msg_id`.
    pub msg_id: String,
    /// Error code returned by the third party channel, if any.
    pub third_party_return_code: String,
    /// Error message returned by the third party channel, if any.
    pub third_party_return_msg: String,
}

/// Business payloads that carry a [`ResponseBase`].
pub trait IcbcResponse {
    /// The shared return fields.
    fn base(&self) -> &ResponseBase;
}

macro_rules! impl_icbc_response {
    ($($t:ty),*) => {
        $(impl IcbcResponse for $t {
            fn base(&self) -> &ResponseBase {
                &self.base
            }
        })*
    };
}

impl_icbc_response!(PayResponse, QueryResponse, RefundResponse, NotifyRequest);

/// Reply of the aggregate pay call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayResponse {
    /// Shared return fields.
    #[serde(flatten)]
    pub base: ResponseBase,
    /// Total order amount in cents.
    pub total_amt: String,
    /// Merchant order number, echoed.
    pub out_trade_no: String,
    /// ICBC order number.
    pub order_id: String,
    /// Payment time, `yyyyMMdd`.
    pub pay_time: String,
    /// Merchant number.
    pub mer_id: String,
    /// Payment mode.
    pub pay_mode: String,
    /// Acquiring access type.
    pub access_type: String,
    /// Card kind.
    pub card_kind: String,
    /// WeChat trade type.
    pub trade_type: String,
    /// WeChat data package used to invoke the WeChat cashier.
    pub wx_data_package: String,
    /// Alipay data package used to invoke the Alipay cashier.
    pub zfb_data_package: String,
    /// UnionPay QuickPass order number.
    pub union_data_package: String,
}

/// Reply of the order query call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryResponse {
    /// Shared return fields.
    #[serde(flatten)]
    pub base: ResponseBase,
    /// Payment status as reported by ICBC.
    pub pay_status: String,
    /// Card number, masked.
    pub card_no: String,
    /// Merchant number.
    pub mer_id: String,
    /// Total order amount in cents.
    pub total_amt: String,
    /// Amount actually paid by the customer.
    pub payment_amt: String,
    /// Merchant order number.
    pub out_trade_no: String,
    /// ICBC order number.
    pub order_id: String,
    /// Payment time.
    pub pay_time: String,
    /// Third party trade number.
    pub third_trade_no: String,
    /// Payment type.
    pub pay_type: String,
    /// Attachment echoed from the pay call.
    pub attach: String,
}

/// Reply of the refund call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefundResponse {
    /// Shared return fields.
    #[serde(flatten)]
    pub base: ResponseBase,
    /// ICBC serial number of the refund.
    pub intrx_serial_no: String,
}

/// Business content of an asynchronous payment notification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifyRequest {
    /// Shared return fields.
    #[serde(flatten)]
    pub base: ResponseBase,
    /// Masked payer card number.
    pub card_no: String,
    /// Merchant number.
    pub mer_id: String,
    /// Total order amount in cents.
    pub total_amt: String,
    /// Amount paid with ICBC points, in cents.
    pub point_amt: String,
    /// Amount paid with e-coupons, in cents.
    pub ecoupon_amt: String,
    /// Discount granted by the merchant, in cents.
    pub mer_disc_amt: String,
    /// Coupon deduction, in cents.
    pub coupon_amt: String,
    /// Discount granted by the bank, in cents.
    pub bank_disc_amt: String,
    /// Amount actually paid by the payer, in cents.
    pub payment_amt: String,
    /// Merchant order number.
    pub out_trade_no: String,
    /// ICBC order number.
    pub order_id: String,
    /// Payment time, `yyyyMMdd`.
    pub pay_time: String,
    /// Sum of all discounts, in cents.
    pub total_disc_amt: String,
    /// Merchant data attached to the order, echoed.
    pub attach: String,
    /// Trade number of the third party wallet.
    pub third_trade_no: String,
    /// Card flag.
    pub card_flag: String,
    /// Whether the card number is encrypted.
    pub decr_flag: String,
    /// Payer open id in the wallet app.
    pub open_id: String,
    /// Payment type.
    pub pay_type: String,
    /// Acquiring access type.
    pub access_type: String,
    /// Card kind.
    pub card_kind: String,
}

/// Signed reply the merchant returns to an ICBC notification.
#[derive(Debug, Clone, Serialize)]
pub struct NotifyResponse {
    /// JSON object with `return_code`, `return_msg` and `msg_id`.
    pub response_biz_content: Box<RawValue>,
    /// Always `RSA2`.
    pub sign_type: String,
    /// Signature over `response_biz_content=<json>&sign_type=RSA2`.
    pub sign: String,
}
