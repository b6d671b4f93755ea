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

//! Time related utils.
//!
//! All bank gateways expect wall clock time in China Standard Time (UTC+8)
//! regardless of where the client runs.

use chrono::FixedOffset;
use chrono::Utc;

/// DateTime is the alias for `chrono::DateTime<chrono::Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

const CHINA_OFFSET_SECS: i32 = 8 * 3600;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

fn china_time(t: DateTime) -> chrono::DateTime<FixedOffset> {
    // `east_opt` only rejects offsets of a day or more.
    match FixedOffset::east_opt(CHINA_OFFSET_SECS) {
        Some(offset) => t.with_timezone(&offset),
        None => t.fixed_offset(),
    }
}

/// Format time into `yyyy-MM-dd HH:mm:ss` in UTC+8: `2024-05-01 08:30:00`
pub fn format_timestamp(t: DateTime) -> String {
    china_time(t).format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Format time into `yyyyMMddHHmmss` in UTC+8: `20240501083000`
pub fn format_compact_timestamp(t: DateTime) -> String {
    china_time(t).format("%Y%m%d%H%M%S").to_string()
}

/// Format time into `yyyyMMddHHmmssSSS` in UTC+8: `20240501083000123`
pub fn format_compact_millis(t: DateTime) -> String {
    china_time(t).format("%Y%m%d%H%M%S%3f").to_string()
}

/// Unix timestamp in seconds, as used by the OPEN-BODY-SIG `Timestamp` field.
pub fn unix_seconds(t: DateTime) -> String {
    t.timestamp().to_string()
}

/// Unix timestamp in nanoseconds, used for message ids and nonces.
pub fn unix_nanos(t: DateTime) -> String {
    t.timestamp_nanos_opt()
        .map(|v| v.to_string())
        .unwrap_or_else(|| format!("{}{:09}", t.timestamp(), t.timestamp_subsec_nanos()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn test_time() -> DateTime {
        Utc.with_ymd_and_hms(2024, 4, 30, 22, 5, 9)
            .single()
            .expect("valid time")
    }

    #[test]
    fn test_format_timestamp_in_china_time() {
        assert_eq!(format_timestamp(test_time()), "2024-05-01 06:05:09");
        assert_eq!(format_compact_timestamp(test_time()), "20240501060509");
        assert_eq!(format_compact_millis(test_time()), "20240501060509000");
    }

    #[test]
    fn test_china_time_carries_offset() {
        let t = china_time(test_time());
        assert_eq!(t.offset().local_minus_utc(), CHINA_OFFSET_SECS);
        assert_eq!(t.to_rfc3339(), "2024-05-01T06:05:09+08:00");
    }

    #[test]
    fn test_unix_formats() {
        assert_eq!(unix_seconds(test_time()), "1714514709");
        assert_eq!(unix_nanos(test_time()), "1714514709000000000");
    }
}
