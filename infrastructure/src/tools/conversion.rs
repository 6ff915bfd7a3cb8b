//! Conversion tools: convert_currency, convert_temperature, encode_base64, decode_base64

use base64::{Engine, engine::general_purpose::STANDARD};
use toolchat_domain::calc::format_number;
use toolchat_domain::tool::{
    category::ToolCategory,
    entities::{ParamType, ToolCall, ToolDefinition, ToolParameter},
    names::{CONVERT_CURRENCY, CONVERT_TEMPERATURE, DECODE_BASE64, ENCODE_BASE64},
    value_objects::ToolResult,
};

const CURRENCY_LABEL: &str = "Currency Converter 💱";
const TEMPERATURE_LABEL: &str = "Temperature Converter 🌡️";
const ENCODER_LABEL: &str = "Base64 Encoder 🔐";
const DECODER_LABEL: &str = "Base64 Decoder 🔓";

/// Mock exchange rates against USD. Unknown codes convert at 1.0.
const RATES: &[(&str, f64)] = &[
    ("USD", 1.0),
    ("EUR", 0.85),
    ("GBP", 0.73),
    ("INR", 83.0),
    ("JPY", 110.0),
    ("AUD", 1.35),
    ("CAD", 1.25),
    ("CNY", 6.5),
];

pub fn convert_currency_definition() -> ToolDefinition {
    ToolDefinition::new(
        CONVERT_CURRENCY,
        "Convert currency (mock exchange rates)",
        ToolCategory::Conversion,
    )
    .with_parameter(
        ToolParameter::new("amount", "Amount to convert", true).with_type(ParamType::Number),
    )
    .with_parameter(ToolParameter::new(
        "from_currency",
        "Source currency (USD, EUR, INR, etc)",
        true,
    ))
    .with_parameter(ToolParameter::new("to_currency", "Target currency", true))
}

pub fn convert_temperature_definition() -> ToolDefinition {
    ToolDefinition::new(
        CONVERT_TEMPERATURE,
        "Convert temperature between units",
        ToolCategory::Conversion,
    )
    .with_parameter(
        ToolParameter::new("value", "Temperature value", true).with_type(ParamType::Number),
    )
    .with_parameter(ToolParameter::new("from_unit", "Source unit (C, F, K)", true))
    .with_parameter(ToolParameter::new("to_unit", "Target unit (C, F, K)", true))
}

pub fn encode_base64_definition() -> ToolDefinition {
    ToolDefinition::new(ENCODE_BASE64, "Encode text to Base64", ToolCategory::Conversion)
        .with_parameter(ToolParameter::new("text", "Text to encode", true))
}

pub fn decode_base64_definition() -> ToolDefinition {
    ToolDefinition::new(DECODE_BASE64, "Decode Base64 to text", ToolCategory::Conversion)
        .with_parameter(ToolParameter::new("encoded", "Base64 encoded string", true))
}

pub fn execute_convert_currency(call: &ToolCall) -> ToolResult {
    let (amount, from, to) = match (
        call.require_f64("amount"),
        call.require_string("from_currency"),
        call.require_string("to_currency"),
    ) {
        (Ok(a), Ok(f), Ok(t)) => (a, f, t),
        (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
            return ToolResult::from_error(CURRENCY_LABEL, "", &e);
        }
    };

    let result = amount / rate(from) * rate(to);
    let amount = format_number(amount);
    ToolResult::success(
        CURRENCY_LABEL,
        format!("{} {}", amount, from),
        format!("{} {} = {:.2} {}", amount, from, result, to),
    )
}

pub fn execute_convert_temperature(call: &ToolCall) -> ToolResult {
    let (value, from, to) = match (
        call.require_f64("value"),
        call.require_string("from_unit"),
        call.require_string("to_unit"),
    ) {
        (Ok(v), Ok(f), Ok(t)) => (v, f.trim().to_uppercase(), t.trim().to_uppercase()),
        (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
            return ToolResult::from_error(TEMPERATURE_LABEL, "", &e);
        }
    };

    let result = from_celsius(to_celsius(value, &from), &to);
    let value = format_number(value);
    ToolResult::success(
        TEMPERATURE_LABEL,
        format!("{}°{}", value, from),
        format!("{}°{} = {:.2}°{}", value, from, result, to),
    )
}

pub fn execute_encode_base64(call: &ToolCall) -> ToolResult {
    match call.require_string("text") {
        Ok(text) => ToolResult::success(ENCODER_LABEL, text, STANDARD.encode(text.as_bytes())),
        Err(e) => ToolResult::from_error(ENCODER_LABEL, "", &e),
    }
}

pub fn execute_decode_base64(call: &ToolCall) -> ToolResult {
    let encoded = match call.require_string("encoded") {
        Ok(s) => s,
        Err(e) => return ToolResult::from_error(DECODER_LABEL, "", &e),
    };

    let decoded = STANDARD
        .decode(encoded.trim())
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok());
    match decoded {
        Some(text) => ToolResult::success(DECODER_LABEL, encoded, text),
        None => ToolResult::failure(DECODER_LABEL, encoded, "Invalid Base64"),
    }
}

fn rate(code: &str) -> f64 {
    let code = code.trim().to_uppercase();
    RATES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, r)| *r)
        .unwrap_or(1.0)
}

/// Unrecognized units are read as Celsius.
fn to_celsius(value: f64, unit: &str) -> f64 {
    match unit {
        "F" => (value - 32.0) * 5.0 / 9.0,
        "K" => value - 273.15,
        _ => value,
    }
}

fn from_celsius(celsius: f64, unit: &str) -> f64 {
    match unit {
        "F" => celsius * 9.0 / 5.0 + 32.0,
        "K" => celsius + 273.15,
        _ => celsius,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn currency(amount: f64, from: &str, to: &str) -> ToolResult {
        execute_convert_currency(
            &ToolCall::new(CONVERT_CURRENCY)
                .with_arg("amount", amount)
                .with_arg("from_currency", from)
                .with_arg("to_currency", to),
        )
    }

    fn temperature(value: f64, from: &str, to: &str) -> ToolResult {
        execute_convert_temperature(
            &ToolCall::new(CONVERT_TEMPERATURE)
                .with_arg("value", value)
                .with_arg("from_unit", from)
                .with_arg("to_unit", to),
        )
    }

    #[test]
    fn test_currency_conversion() {
        let result = currency(100.0, "USD", "INR");
        assert_eq!(result.output, "100 USD = 8300.00 INR");
        assert_eq!(result.input, "100 USD");

        let result = currency(85.0, "eur", "usd");
        assert_eq!(result.output, "85 eur = 100.00 usd");
    }

    #[test]
    fn test_unknown_currency_uses_unit_rate() {
        let result = currency(10.0, "XYZ", "USD");
        assert!(result.success);
        assert_eq!(result.output, "10 XYZ = 10.00 USD");
    }

    #[test]
    fn test_currency_accepts_string_amount() {
        let result = execute_convert_currency(
            &ToolCall::new(CONVERT_CURRENCY)
                .with_arg("amount", "50")
                .with_arg("from_currency", "USD")
                .with_arg("to_currency", "JPY"),
        );
        assert_eq!(result.output, "50 USD = 5500.00 JPY");
    }

    #[test]
    fn test_temperature_reference_points() {
        assert_eq!(temperature(0.0, "C", "F").output, "0°C = 32.00°F");
        assert_eq!(temperature(32.0, "F", "K").output, "32°F = 273.15°K");
        assert_eq!(temperature(273.15, "K", "C").output, "273.15°K = 0.00°C");
        assert_eq!(temperature(21.5, "c", "c").output, "21.5°C = 21.50°C");
    }

    #[test]
    fn test_base64_round_trip() {
        let encoded = execute_encode_base64(&ToolCall::new(ENCODE_BASE64).with_arg("text", "hello wörld"));
        assert_eq!(encoded.output, "aGVsbG8gd8O2cmxk");
        let decoded =
            execute_decode_base64(&ToolCall::new(DECODE_BASE64).with_arg("encoded", encoded.output));
        assert_eq!(decoded.output, "hello wörld");
    }

    #[test]
    fn test_invalid_base64() {
        let result = execute_decode_base64(&ToolCall::new(DECODE_BASE64).with_arg("encoded", "not base64!"));
        assert!(!result.success);
        assert_eq!(result.output, "Invalid Base64");

        // Valid base64 that is not UTF-8.
        let result = execute_decode_base64(&ToolCall::new(DECODE_BASE64).with_arg("encoded", "/w=="));
        assert!(!result.success);
    }

    #[test]
    fn test_missing_arguments() {
        let result = execute_convert_currency(&ToolCall::new(CONVERT_CURRENCY).with_arg("amount", 1));
        assert!(!result.success);
        assert!(result.output.contains("from_currency"));
    }
}
