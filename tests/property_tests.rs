//! Property-based tests for pagelog using proptest

use chrono::NaiveDate;
use pagelog::core::format::{format_entry, pad_left};
use pagelog::prelude::*;

fn any_level() -> impl proptest::strategy::Strategy<Value = LogLevel> {
    use proptest::prelude::*;
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
    ]
}

mod padding {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Padded output is never shorter than the target width.
        #[test]
        fn test_pad_reaches_width(width in 0usize..8, value in 0u32..1_000_000) {
            let padded = pad_left(width, '0', value);
            prop_assert!(padded.len() >= width);
        }

        /// Values at or above the target width come back unmodified.
        #[test]
        fn test_pad_is_idempotent_on_wide_values(value in 100u32..1_000_000) {
            prop_assert_eq!(pad_left(2, '0', value), value.to_string());
        }

        /// Padding only adds pad characters; the value's digits survive.
        #[test]
        fn test_pad_preserves_value(width in 0usize..8, value in 0u32..1_000_000) {
            let padded = pad_left(width, '0', value);
            prop_assert!(padded.ends_with(&value.to_string()));
            let prefix = &padded[..padded.len() - value.to_string().len()];
            prop_assert!(prefix.chars().all(|c| c == '0'));
        }
    }
}

mod formatting {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every valid timestamp renders into the fixed separator layout
        /// with each field padded to its width and never truncated.
        #[test]
        fn test_format_layout(
            year in 1970i32..2100,
            month in 1u32..=12,
            day in 1u32..=28,
            hour in 0u32..24,
            minute in 0u32..60,
            second in 0u32..60,
            milli in 0u32..1000,
            message in "[^\r\n]{0,64}",
        ) {
            let timestamp = NaiveDate::from_ymd_opt(year, month, day)
                .expect("valid date")
                .and_hms_milli_opt(hour, minute, second, milli)
                .expect("valid time");

            let line = format_entry(&message, &timestamp);
            let expected_millis = if milli < 10 {
                format!("0{}", milli)
            } else {
                milli.to_string()
            };
            let expected = format!(
                "{:02}/{:02}/{:04} {:02}:{:02}:{:02}.{} {}",
                month, day, year, hour, minute, second, expected_millis, message
            );
            prop_assert_eq!(line, expected);
        }

        /// The formatter is a pure function of its inputs.
        #[test]
        fn test_format_deterministic(milli in 0u32..1000, message in "[^\r\n]{0,32}") {
            let timestamp = NaiveDate::from_ymd_opt(2025, 8, 25)
                .expect("valid date")
                .and_hms_milli_opt(10, 30, 45, milli)
                .expect("valid time");
            prop_assert_eq!(
                format_entry(&message, &timestamp),
                format_entry(&message, &timestamp)
            );
        }
    }
}

mod filtering {
    use super::*;
    use parking_lot::Mutex;
    use proptest::prelude::*;
    use std::sync::Arc;

    fn emitted(configured: LogLevel, mode: FilterMode, call: LogLevel) -> bool {
        let count = Arc::new(Mutex::new(0usize));
        let counter = Arc::clone(&count);
        let logger = Logger::builder()
            .level(configured)
            .filter_mode(mode)
            .appender(Box::new(FnAppender::new(
                move |_: &str, _: &AppenderOptions| *counter.lock() += 1,
            )))
            .build();

        logger.log(call, "probe");
        let n = *count.lock();
        n == 1
    }

    proptest! {
        /// Threshold mode: the appender runs iff call >= configured.
        #[test]
        fn test_threshold_law(configured in any_level(), call in any_level()) {
            prop_assert_eq!(
                emitted(configured, FilterMode::Threshold, call),
                call >= configured
            );
        }

        /// Exact mode: the appender runs iff call == configured.
        #[test]
        fn test_exact_law(configured in any_level(), call in any_level()) {
            prop_assert_eq!(
                emitted(configured, FilterMode::Exact, call),
                call == configured
            );
        }
    }
}

mod levels {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// String conversions round-trip.
        #[test]
        fn test_level_str_roundtrip(level in any_level()) {
            let parsed: LogLevel = level.to_str().parse().unwrap();
            prop_assert_eq!(level, parsed);
        }

        /// Level ordering agrees with the numeric constants.
        #[test]
        fn test_level_ordering(a in any_level(), b in any_level()) {
            prop_assert_eq!(a <= b, (a as u8) <= (b as u8));
            prop_assert_eq!(a < b, (a as u8) < (b as u8));
        }
    }
}
