//! Time & date tools: get_time, calculate_age, days_until

use chrono::{Datelike, Local, NaiveDate};
use toolchat_domain::tool::{
    category::ToolCategory,
    entities::{ToolCall, ToolDefinition, ToolParameter},
    names::{CALCULATE_AGE, DAYS_UNTIL, GET_TIME},
    value_objects::{ToolError, ToolResult},
};

const CLOCK: &str = "Clock ⏰";
const AGE_CALCULATOR: &str = "Age Calculator 🎂";
const COUNTDOWN: &str = "Countdown ⏳";

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn get_time_definition() -> ToolDefinition {
    ToolDefinition::new(GET_TIME, "Get current date and time", ToolCategory::TimeDate)
}

pub fn calculate_age_definition() -> ToolDefinition {
    ToolDefinition::new(
        CALCULATE_AGE,
        "Calculate age from birth date",
        ToolCategory::TimeDate,
    )
    .with_parameter(ToolParameter::new(
        "birth_date",
        "Birth date in YYYY-MM-DD format",
        true,
    ))
}

pub fn days_until_definition() -> ToolDefinition {
    ToolDefinition::new(
        DAYS_UNTIL,
        "Calculate days until a future date",
        ToolCategory::TimeDate,
    )
    .with_parameter(ToolParameter::new(
        "date",
        "Target date in YYYY-MM-DD format",
        true,
    ))
}

pub fn execute_get_time(_call: &ToolCall) -> ToolResult {
    let now = Local::now();
    ToolResult::success(
        CLOCK,
        "Current time",
        now.format("%A, %B %d, %Y at %I:%M:%S %p").to_string(),
    )
}

pub fn execute_calculate_age(call: &ToolCall) -> ToolResult {
    let raw = match call.require_string("birth_date") {
        Ok(s) => s,
        Err(e) => return ToolResult::from_error(AGE_CALCULATOR, "", &e),
    };
    let Ok(birth) = NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT) else {
        return ToolResult::failure(AGE_CALCULATOR, raw, "Invalid date format");
    };

    match age_on(birth, Local::now().date_naive()) {
        Some(age) => ToolResult::success(AGE_CALCULATOR, raw, format!("You are {} years old", age)),
        None => ToolResult::from_error(
            AGE_CALCULATOR,
            raw,
            &ToolError::invalid_argument("Birth date is in the future"),
        ),
    }
}

pub fn execute_days_until(call: &ToolCall) -> ToolResult {
    let raw = match call.require_string("date") {
        Ok(s) => s,
        Err(e) => return ToolResult::from_error(COUNTDOWN, "", &e),
    };
    let Ok(target) = NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT) else {
        return ToolResult::failure(COUNTDOWN, raw, "Invalid date");
    };

    let days = (target - Local::now().date_naive()).num_days();
    ToolResult::success(COUNTDOWN, raw, countdown_text(days, raw))
}

/// Completed years between `birth` and `today`, or `None` if `birth` lies
/// after `today`.
fn age_on(birth: NaiveDate, today: NaiveDate) -> Option<i32> {
    if birth > today {
        return None;
    }
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    Some(age)
}

fn countdown_text(days: i64, date: &str) -> String {
    if days >= 0 {
        format!("{} days until {}", days, date)
    } else {
        format!("{} days ago", days.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_age_before_and_after_birthday() {
        let birth = date("1990-06-15");
        assert_eq!(age_on(birth, date("2024-06-14")), Some(33));
        assert_eq!(age_on(birth, date("2024-06-15")), Some(34));
        assert_eq!(age_on(birth, date("2024-12-31")), Some(34));
        assert_eq!(age_on(date("2030-01-01"), date("2024-01-01")), None);
    }

    #[test]
    fn test_countdown_text() {
        assert_eq!(countdown_text(10, "2030-01-01"), "10 days until 2030-01-01");
        assert_eq!(countdown_text(0, "2030-01-01"), "0 days until 2030-01-01");
        assert_eq!(countdown_text(-3, "2020-01-01"), "3 days ago");
    }

    #[test]
    fn test_invalid_dates_are_failures() {
        let result = execute_calculate_age(&ToolCall::new(CALCULATE_AGE).with_arg("birth_date", "15/06/1990"));
        assert!(!result.success);
        assert_eq!(result.output, "Invalid date format");
        assert_eq!(result.input, "15/06/1990");

        let result = execute_days_until(&ToolCall::new(DAYS_UNTIL).with_arg("date", "tomorrow"));
        assert!(!result.success);
        assert_eq!(result.output, "Invalid date");
    }

    #[test]
    fn test_missing_argument_is_failure() {
        let result = execute_calculate_age(&ToolCall::new(CALCULATE_AGE));
        assert!(!result.success);
        assert!(result.output.contains("birth_date"));
    }

    #[test]
    fn test_get_time_format() {
        let result = execute_get_time(&ToolCall::new(GET_TIME));
        assert!(result.success);
        assert_eq!(result.label, CLOCK);
        assert!(result.output.contains(" at "));
        assert!(result.output.ends_with("AM") || result.output.ends_with("PM"));
    }

    #[test]
    fn test_days_until_far_future() {
        let result = execute_days_until(&ToolCall::new(DAYS_UNTIL).with_arg("date", "2999-01-01"));
        assert!(result.success);
        assert!(result.output.ends_with("days until 2999-01-01"));
    }
}
