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

use log::warn;
use paysign_core::response::string_or_number;
use paysign_core::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fields shared by every China UMS reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResponseBase {
    /// Platform error code, `0000` or `SUCCESS` on success.
    pub err_code: String,
    /// Platform error message.
    pub err_msg: String,
    /// Echo of the request `msgId`.
    pub msg_id: String,
    /// Reserved field of the requesting system.
    pub src_reserve: String,
    /// Reply time, `yyyy-MM-dd HH:mm:ss`.
    pub response_timestamp: String,
}

impl ResponseBase {
    /// Returns true if `errCode` is a success sentinel.
    pub fn is_success(&self) -> bool {
        crate::constants::SUCCESS_CODES.contains(&self.err_code.as_str())
    }

    /// Turn a failed reply into a business error.
    pub fn check(&self) -> Result<()> {
        if self.is_success() {
            return Ok(());
        }

        warn!(
            "open platform business error: errCode={}, errMsg={}",
            self.err_code, self.err_msg
        );
        Err(Error::business_error(
            self.err_code.as_str(),
            self.err_msg.as_str(),
        ))
    }
}

/// Replies that carry a [`ResponseBase`].
pub trait UmsResponse {
    /// The shared return fields.
    fn base(&self) -> &ResponseBase;
}

impl UmsResponse for PayResponse {
    fn base(&self) -> &ResponseBase {
        &self.base
    }
}

impl UmsResponse for RefundResponse {
    fn base(&self) -> &ResponseBase {
        &self.base
    }
}

/// Reply of the WeChat mini program unified order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PayResponse {
    /// Shared return fields.
    #[serde(flatten)]
    pub base: ResponseBase,
    /// Payment channel the order was routed to.
    pub connect_sys: String,
    /// Whether the order was placed on behalf of another merchant.
    pub delegated_flag: String,
    /// Merchant name.
    pub mer_name: String,
    /// Merchant number.
    pub mid: String,
    /// Settlement reference id.
    pub settle_ref_id: String,
    /// Terminal number.
    pub tid: String,
    /// Total amount in cents.
    #[serde(deserialize_with = "string_or_number")]
    pub total_amount: String,
    /// Merchant number at the payment channel.
    pub target_mid: String,
    /// Parameters handed to `wx.requestPayment` by the mini program.
    pub mini_pay_request: Value,
    /// Order status at the payment channel.
    pub target_status: String,
    /// Platform serial number.
    pub seq_id: String,
    /// Merchant order id.
    pub mer_order_id: String,
    /// Order status, `NEW_ORDER` right after creation.
    pub status: String,
    /// Payment channel, such as `WXPay`.
    pub target_sys: String,
}

/// Reply of the refund call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RefundResponse {
    /// Shared return fields.
    #[serde(flatten)]
    pub base: ResponseBase,
    /// Merchant number.
    pub mid: String,
    /// Terminal number.
    pub tid: String,
    /// Merchant order id of the refunded order.
    pub mer_order_id: String,
    /// Merchant name.
    pub mer_name: String,
    /// Platform serial number.
    pub seq_id: String,
    /// Order status after the refund.
    pub status: String,
    /// Merchant number at the payment channel.
    pub target_mid: String,
    /// Order id at the payment channel.
    pub target_order_id: String,
    /// Order status at the payment channel.
    pub target_status: String,
    /// Payment channel, such as `WXPay`.
    pub target_sys: String,
    /// Total order amount in cents.
    #[serde(deserialize_with = "string_or_number")]
    pub total_amount: String,
    /// Refunded amount in cents.
    #[serde(deserialize_with = "string_or_number")]
    pub refund_amount: String,
    /// Funding source of the refund.
    pub refund_funds: String,
    /// Human readable funding source.
    pub refund_funds_desc: String,
    /// Refunded amount that can be invoiced, in cents.
    #[serde(deserialize_with = "string_or_number")]
    pub refund_invoice_amount: String,
    /// Merchant refund order id.
    pub refund_order_id: String,
    /// Refund id at the payment channel.
    pub refund_target_order_id: String,
    /// Marketing alliance discount refunded, in cents.
    #[serde(deserialize_with = "string_or_number")]
    pub yxlm_amount: String,
    /// Refund status, `SUCCESS` once settled.
    pub refund_status: String,
    /// Discount refunded by the merchant, in cents.
    #[serde(deserialize_with = "string_or_number")]
    pub refund_merchant_contribute: String,
    /// Discount refunded by other parties, in cents.
    #[serde(deserialize_with = "string_or_number")]
    pub refund_other_contribute: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode_refund_with_numeric_amounts() {
        let rsp: RefundResponse = serde_json::from_str(
            r#"{"errCode":"SUCCESS","msgId":"1","merOrderId":"31942024050106050900012345","totalAmount":100,"refundAmount":"100","refundStatus":"SUCCESS"}"#,
        )
        .unwrap();

        assert!(rsp.base.is_success());
        assert_eq!(rsp.total_amount, "100");
        assert_eq!(rsp.refund_amount, "100");
        assert_eq!(rsp.refund_status, "SUCCESS");
        assert_eq!(rsp.yxlm_amount, "");
        rsp.base.check().unwrap();
    }

    #[test]
    fn test_check_failed_reply() {
        let base = ResponseBase {
            err_code: "TARGET_FAIL".to_string(),
            err_msg: "refund rejected".to_string(),
            ..Default::default()
        };

        let err = base.check().unwrap_err();
        assert!(err.is_business_error());
        assert_eq!(err.business().unwrap().msg, "refund rejected");
    }
}
