//! Resampling acceptance tests.
//!
//! Tests cover:
//! - The weekly / monthly / yearly reference scenarios
//! - Anchor preference for month end and December 31
//! - Fallback to the latest observation in a bucket
//! - Shape guard and malformed-date policies
//! - Multi-year business-day series

mod common;

use carbondash::domain::calendar_date::CalendarDate;
use carbondash::domain::error::CarbondashError;
use carbondash::domain::resample::{MalformedDatePolicy, resample, try_resample};
use carbondash::domain::series::Series;
use carbondash::domain::timeframe::{Category, Timeframe};
use common::*;

fn by_label(label: &str) -> Category {
    Timeframe::from_label(label).unwrap().category
}

mod scenarios {
    use super::*;

    #[test]
    fn weekly_keeps_only_fridays() {
        let out = resample(
            &["2024-01-05", "2024-01-06", "2024-01-08", "2024-01-12"],
            &[10.0, 11.0, 12.0, 13.0],
            by_label("1주"),
        );
        assert_eq!(out.dates, strs(&["2024-01-05", "2024-01-12"]));
        assert_eq!(out.values, vec![10.0, 13.0]);
    }

    #[test]
    fn monthly_prefers_exact_month_end() {
        let out = resample(&["2024-01-15", "2024-01-31"], &[50.0, 55.0], by_label("1개월"));
        assert_eq!(out.dates, strs(&["2024-01-31"]));
        assert_eq!(out.values, vec![55.0]);
    }

    #[test]
    fn monthly_falls_back_to_latest_in_month() {
        let out = resample(&["2024-01-15"], &[50.0], by_label("1개월"));
        assert_eq!(out.dates, strs(&["2024-01-15"]));
        assert_eq!(out.values, vec![50.0]);
    }

    #[test]
    fn yearly_mixes_anchor_and_fallback() {
        let out = resample(&["2023-12-31", "2024-06-15"], &[100.0, 120.0], by_label("1년"));
        assert_eq!(out.dates, strs(&["2023-12-31", "2024-06-15"]));
        assert_eq!(out.values, vec![100.0, 120.0]);
    }

    #[test]
    fn mismatched_lengths_give_empty_result_for_every_timeframe() {
        for label in ["1주", "1개월", "3개월", "6개월", "1년", "3년", "5년"] {
            let out = resample(&["2024-01-01"], &[], by_label(label));
            assert_eq!(out, Series::empty(), "{label}");
        }
    }

    #[test]
    fn out_of_order_input_is_sorted_first() {
        let out = resample(&["2024-01-12", "2024-01-05"], &[13.0, 10.0], by_label("1주"));
        assert_eq!(out.dates, strs(&["2024-01-05", "2024-01-12"]));
        assert_eq!(out.values, vec![10.0, 13.0]);
    }
}

mod anchors {
    use super::*;

    #[test]
    fn month_end_wins_over_later_entry_in_input_order() {
        // the month-end point comes first in the input, a mid-month point after it
        let out = resample(
            &["2024-04-30", "2024-04-29", "2024-04-10"],
            &[3.0, 2.0, 1.0],
            Category::Month,
        );
        assert_eq!(out.dates, strs(&["2024-04-30"]));
        assert_eq!(out.values, vec![3.0]);
    }

    #[test]
    fn dec_31_wins_for_its_year() {
        let out = resample(
            &["2022-12-31", "2022-06-30", "2022-12-30"],
            &[31.0, 6.0, 30.0],
            Category::Year,
        );
        assert_eq!(out.dates, strs(&["2022-12-31"]));
    }

    #[test]
    fn month_end_of_december_is_not_enough_for_yearly_without_dec_31() {
        let out = resample(&["2022-11-30", "2022-12-30"], &[1.0, 2.0], Category::Year);
        assert_eq!(out.dates, strs(&["2022-12-30"]));
    }

    #[test]
    fn february_month_end_depends_on_leap_year() {
        let out = resample(
            &["2023-02-28", "2024-02-28", "2024-02-27"],
            &[1.0, 2.0, 3.0],
            Category::Month,
        );
        // 2023-02-28 is an anchor; 2024-02-28 is only the latest
        assert_eq!(out.dates, strs(&["2023-02-28", "2024-02-28"]));
        assert_eq!(out.values, vec![1.0, 2.0]);
    }
}

mod business_days {
    use super::*;

    #[test]
    fn one_year_of_weekdays() {
        let raw = business_day_series("2023-01-02", 364);

        let weekly = raw.resample(Category::Week);
        assert_eq!(weekly.len(), 52);
        assert!(
            weekly
                .dates
                .iter()
                .all(|d| CalendarDate::parse(d).unwrap().is_friday())
        );

        let monthly = raw.resample(Category::Month);
        assert_eq!(monthly.len(), 12);
        // weekend month ends fall back to the last weekday
        assert_eq!(monthly.dates[3], "2023-04-28");
        assert_eq!(monthly.dates[4], "2023-05-31");
        assert_eq!(monthly.dates[11], "2023-12-29");

        let yearly = raw.resample(Category::Year);
        assert_eq!(yearly.dates, strs(&["2023-12-29"]));
    }

    #[test]
    fn full_history_is_kept() {
        let raw = daily_series("2019-01-01", 5 * 365 + 1);
        let yearly = raw.resample(Category::Year);
        assert_eq!(
            yearly.dates,
            strs(&["2019-12-31", "2020-12-31", "2021-12-31", "2022-12-31", "2023-12-31"])
        );
        let monthly = raw.resample(Category::Month);
        assert_eq!(monthly.len(), 60);
    }
}

mod malformed {
    use super::*;

    #[test]
    fn dropped_entries_do_not_shift_values() {
        let out = resample(
            &["2024-01-05", "05/01/2024", "2024-01-12", ""],
            &[1.0, 2.0, 3.0, 4.0],
            Category::Week,
        );
        assert_eq!(out.dates, strs(&["2024-01-05", "2024-01-12"]));
        assert_eq!(out.values, vec![1.0, 3.0]);
    }

    #[test]
    fn reject_reports_first_bad_index() {
        let err = try_resample(
            &["2024-01-05", "2024-01-32", "nope"],
            &[1.0, 2.0, 3.0],
            Category::Month,
            MalformedDatePolicy::Reject,
        )
        .unwrap_err();
        match err {
            CarbondashError::MalformedDate { index, value, source } => {
                assert_eq!(index, 1);
                assert_eq!(value, "2024-01-32");
                assert_eq!(source.position, 8);
            }
            other => panic!("expected MalformedDate, got {other:?}"),
        }
    }

    #[test]
    fn reject_accepts_clean_input() {
        let out = try_resample(
            &["2024-01-31"],
            &[1.0],
            Category::Month,
            MalformedDatePolicy::Reject,
        )
        .unwrap();
        assert_eq!(out.values, vec![1.0]);
    }
}
