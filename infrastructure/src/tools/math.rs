//! Math tools: calculator, is_prime, factorial, fibonacci

use toolchat_domain::calc::{evaluate, format_number};
use toolchat_domain::tool::{
    category::ToolCategory,
    entities::{ParamType, ToolCall, ToolDefinition, ToolParameter},
    names::{CALCULATOR, FACTORIAL, FIBONACCI, IS_PRIME},
    value_objects::ToolResult,
};

const CALCULATOR_LABEL: &str = "Calculator 🧮";
const PRIME_LABEL: &str = "Prime Checker 🔢";
const FACTORIAL_LABEL: &str = "Factorial ❗";
const FIBONACCI_LABEL: &str = "Fibonacci 🔢";

/// Terms are never generated past this many.
const FIBONACCI_CAP: usize = 20;

pub fn calculator_definition() -> ToolDefinition {
    ToolDefinition::new(
        CALCULATOR,
        "Calculate mathematical expressions",
        ToolCategory::Math,
    )
    .with_parameter(ToolParameter::new(
        "expression",
        "Math expression like '2+2' or '10*5'",
        true,
    ))
}

pub fn is_prime_definition() -> ToolDefinition {
    ToolDefinition::new(IS_PRIME, "Check if a number is prime", ToolCategory::Math).with_parameter(
        ToolParameter::new("number", "Number to check", true).with_type(ParamType::Integer),
    )
}

pub fn factorial_definition() -> ToolDefinition {
    ToolDefinition::new(FACTORIAL, "Calculate factorial of a number", ToolCategory::Math)
        .with_parameter(
            ToolParameter::new("number", "Number for factorial", true)
                .with_type(ParamType::Integer),
        )
}

pub fn fibonacci_definition() -> ToolDefinition {
    ToolDefinition::new(FIBONACCI, "Generate Fibonacci sequence", ToolCategory::Math)
        .with_parameter(
            ToolParameter::new("count", "How many numbers to generate", true)
                .with_type(ParamType::Integer),
        )
}

pub fn execute_calculator(call: &ToolCall) -> ToolResult {
    let expression = match call.require_string("expression") {
        Ok(e) => e,
        Err(e) => return ToolResult::from_error(CALCULATOR_LABEL, "", &e),
    };

    match evaluate(expression) {
        Ok(value) => ToolResult::success(
            CALCULATOR_LABEL,
            expression,
            format!("{} = {}", expression, format_number(value)),
        ),
        Err(e) => ToolResult::failure(CALCULATOR_LABEL, expression, format!("Error: {}", e)),
    }
}

pub fn execute_is_prime(call: &ToolCall) -> ToolResult {
    let number = match call.require_i64("number") {
        Ok(n) => n,
        Err(e) => return ToolResult::from_error(PRIME_LABEL, "", &e),
    };
    let verdict = if is_prime(number) { "Yes" } else { "No" };
    ToolResult::success(
        PRIME_LABEL,
        number.to_string(),
        format!("{} is prime: {}", number, verdict),
    )
}

pub fn execute_factorial(call: &ToolCall) -> ToolResult {
    let number = match call.require_i64("number") {
        Ok(n) => n,
        Err(e) => return ToolResult::from_error(FACTORIAL_LABEL, "", &e),
    };
    if number < 0 {
        return ToolResult::failure(FACTORIAL_LABEL, number.to_string(), "Error: Negative number");
    }
    match factorial(number as u64) {
        Some(value) => ToolResult::success(
            FACTORIAL_LABEL,
            number.to_string(),
            format!("{}! = {}", number, value),
        ),
        None => ToolResult::failure(
            FACTORIAL_LABEL,
            number.to_string(),
            format!("Error: {}! is too large", number),
        ),
    }
}

pub fn execute_fibonacci(call: &ToolCall) -> ToolResult {
    let count = match call.require_i64("count") {
        Ok(n) => n,
        Err(e) => return ToolResult::from_error(FIBONACCI_LABEL, "", &e),
    };
    if count <= 0 {
        return ToolResult::failure(FIBONACCI_LABEL, count.to_string(), "Count must be positive");
    }

    let terms = fibonacci(count as usize);
    let rendered: Vec<String> = terms.iter().map(u64::to_string).collect();
    ToolResult::success(
        FIBONACCI_LABEL,
        count.to_string(),
        format!("[{}]", rendered.join(", ")),
    )
}

/// Trial division up to the square root.
fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut i = 3;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// `None` once the result no longer fits in a `u128`.
fn factorial(n: u64) -> Option<u128> {
    (1..=n as u128).try_fold(1u128, |acc, i| acc.checked_mul(i))
}

/// First `count` terms, never more than [`FIBONACCI_CAP`].
fn fibonacci(count: usize) -> Vec<u64> {
    let mut seq: Vec<u64> = vec![0, 1];
    while seq.len() < count.min(FIBONACCI_CAP) {
        let next = seq[seq.len() - 1] + seq[seq.len() - 2];
        seq.push(next);
    }
    seq.truncate(count);
    seq
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculator_reports_integral_results_plainly() {
        let result = execute_calculator(&ToolCall::new(CALCULATOR).with_arg("expression", "12*4"));
        assert!(result.success);
        assert_eq!(result.output, "12*4 = 48");
        assert_eq!(result.input, "12*4");
    }

    #[test]
    fn test_calculator_errors() {
        let result = execute_calculator(&ToolCall::new(CALCULATOR).with_arg("expression", "1/0"));
        assert!(!result.success);
        assert_eq!(result.output, "Error: division by zero");

        let result = execute_calculator(&ToolCall::new(CALCULATOR).with_arg("expression", "rm -rf"));
        assert!(!result.success);
        assert!(result.output.starts_with("Error: "));
    }

    #[test]
    fn test_deeply_nested_message_fails_cleanly() {
        let message = format!(
            "calculate {}1+1{}",
            "(".repeat(100_000),
            ")".repeat(100_000)
        );
        let detected = toolchat_domain::IntentDetector::default()
            .detect(&message)
            .unwrap();
        assert_eq!(detected.call.tool_name, CALCULATOR);

        let result = execute_calculator(&detected.call);
        assert!(!result.success);
        assert_eq!(result.output, "Error: expression nested too deeply");
    }

    #[test]
    fn test_prime_policy() {
        for n in [-7, 0, 1] {
            assert!(!is_prime(n), "{} should not be prime", n);
        }
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(is_prime(97));
        for n in [4, 6, 100, 1_000_000] {
            assert!(!is_prime(n));
        }
        assert!(!is_prime(91));
    }

    #[test]
    fn test_is_prime_output() {
        let result = execute_is_prime(&ToolCall::new(IS_PRIME).with_arg("number", 17));
        assert_eq!(result.output, "17 is prime: Yes");
        assert_eq!(result.input, "17");

        let result = execute_is_prime(&ToolCall::new(IS_PRIME).with_arg("number", "1"));
        assert_eq!(result.output, "1 is prime: No");
    }

    #[test]
    fn test_factorial() {
        let result = execute_factorial(&ToolCall::new(FACTORIAL).with_arg("number", 0));
        assert_eq!(result.output, "0! = 1");

        let result = execute_factorial(&ToolCall::new(FACTORIAL).with_arg("number", 5));
        assert_eq!(result.output, "5! = 120");

        let result = execute_factorial(&ToolCall::new(FACTORIAL).with_arg("number", -1));
        assert!(!result.success);
        assert_eq!(result.output, "Error: Negative number");

        let result = execute_factorial(&ToolCall::new(FACTORIAL).with_arg("number", 200));
        assert!(!result.success);
    }

    #[test]
    fn test_fibonacci_bounds() {
        assert_eq!(fibonacci(1), vec![0]);
        assert_eq!(fibonacci(5), vec![0, 1, 1, 2, 3]);
        assert_eq!(fibonacci(20).len(), 20);
        assert_eq!(fibonacci(50).len(), 20);

        let result = execute_fibonacci(&ToolCall::new(FIBONACCI).with_arg("count", 7));
        assert_eq!(result.output, "[0, 1, 1, 2, 3, 5, 8]");

        let result = execute_fibonacci(&ToolCall::new(FIBONACCI).with_arg("count", 0));
        assert!(!result.success);
        assert_eq!(result.output, "Count must be positive");
    }
}
