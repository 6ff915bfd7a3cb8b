//! Random / fun tools: roll_dice, flip_coin, generate_password, random_number, magic_8ball

use super::info::pick;
use rand::Rng;
use toolchat_domain::tool::{
    category::ToolCategory,
    entities::{ParamType, ToolCall, ToolDefinition, ToolParameter},
    names::{FLIP_COIN, GENERATE_PASSWORD, MAGIC_8BALL, RANDOM_NUMBER, ROLL_DICE},
    value_objects::{ToolError, ToolResult},
};

const DICE_LABEL: &str = "Dice Roller 🎲";
const COIN_LABEL: &str = "Coin Flip 🪙";
const PASSWORD_LABEL: &str = "Password Generator 🔑";
const RANDOM_LABEL: &str = "Random Number 🎰";
const EIGHT_BALL_LABEL: &str = "Magic 8-Ball 🎱";

const DEFAULT_SIDES: i64 = 6;
const DEFAULT_PASSWORD_LENGTH: i64 = 12;
const MAX_PASSWORD_LENGTH: i64 = 256;

const PASSWORD_ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*";

const EIGHT_BALL_ANSWERS: &[&str] = &[
    "Yes, definitely!",
    "It is certain.",
    "Without a doubt.",
    "You may rely on it.",
    "As I see it, yes.",
    "Most likely.",
    "Outlook good.",
    "Signs point to yes.",
    "Reply hazy, try again.",
    "Ask again later.",
    "Better not tell you now.",
    "Cannot predict now.",
    "Concentrate and ask again.",
    "Don't count on it.",
    "My reply is no.",
    "My sources say no.",
    "Outlook not so good.",
    "Very doubtful.",
];

pub fn roll_dice_definition() -> ToolDefinition {
    ToolDefinition::new(ROLL_DICE, "Roll dice", ToolCategory::RandomFun).with_parameter(
        ToolParameter::new("sides", "Number of sides on the dice (default 6)", false)
            .with_type(ParamType::Integer),
    )
}

pub fn flip_coin_definition() -> ToolDefinition {
    ToolDefinition::new(FLIP_COIN, "Flip a coin", ToolCategory::RandomFun)
}

pub fn generate_password_definition() -> ToolDefinition {
    ToolDefinition::new(
        GENERATE_PASSWORD,
        "Generate a random password",
        ToolCategory::RandomFun,
    )
    .with_parameter(
        ToolParameter::new("length", "Password length (default 12)", false)
            .with_type(ParamType::Integer),
    )
}

pub fn random_number_definition() -> ToolDefinition {
    ToolDefinition::new(
        RANDOM_NUMBER,
        "Generate random number in range",
        ToolCategory::RandomFun,
    )
    .with_parameter(ToolParameter::new("min", "Minimum value", true).with_type(ParamType::Integer))
    .with_parameter(ToolParameter::new("max", "Maximum value", true).with_type(ParamType::Integer))
}

pub fn magic_8ball_definition() -> ToolDefinition {
    ToolDefinition::new(MAGIC_8BALL, "Get a Magic 8-Ball answer", ToolCategory::RandomFun)
}

pub fn execute_roll_dice(call: &ToolCall) -> ToolResult {
    let sides = match optional_i64(call, "sides", DEFAULT_SIDES) {
        Ok(s) => s,
        Err(e) => return ToolResult::from_error(DICE_LABEL, "", &e),
    };
    let input = format!("{}-sided dice", sides);
    if sides < 1 {
        return ToolResult::failure(DICE_LABEL, input, "A dice needs at least one side");
    }

    let roll = rand::thread_rng().gen_range(1..=sides);
    ToolResult::success(DICE_LABEL, input, format!("You rolled: {}", roll))
}

pub fn execute_flip_coin(_call: &ToolCall) -> ToolResult {
    let side = pick(&["Heads", "Tails"]);
    ToolResult::success(COIN_LABEL, "Flip coin", format!("Result: {}", side))
}

pub fn execute_generate_password(call: &ToolCall) -> ToolResult {
    let length = match optional_i64(call, "length", DEFAULT_PASSWORD_LENGTH) {
        Ok(l) => l,
        Err(e) => return ToolResult::from_error(PASSWORD_LABEL, "", &e),
    };
    let input = format!("Length: {}", length);
    if !(1..=MAX_PASSWORD_LENGTH).contains(&length) {
        return ToolResult::failure(
            PASSWORD_LABEL,
            input,
            format!("Length must be between 1 and {}", MAX_PASSWORD_LENGTH),
        );
    }

    let mut rng = rand::thread_rng();
    let password: String = (0..length)
        .map(|_| PASSWORD_ALPHABET[rng.gen_range(0..PASSWORD_ALPHABET.len())] as char)
        .collect();
    ToolResult::success(PASSWORD_LABEL, input, password)
}

pub fn execute_random_number(call: &ToolCall) -> ToolResult {
    let (min, max) = match (call.require_i64("min"), call.require_i64("max")) {
        (Ok(min), Ok(max)) => (min, max),
        (Err(e), _) | (_, Err(e)) => return ToolResult::from_error(RANDOM_LABEL, "", &e),
    };
    let input = format!("{} to {}", min, max);
    if min > max {
        return ToolResult::failure(RANDOM_LABEL, input, "Minimum must not exceed maximum");
    }

    let n = rand::thread_rng().gen_range(min..=max);
    ToolResult::success(RANDOM_LABEL, input, format!("Random number: {}", n))
}

pub fn execute_magic_8ball(_call: &ToolCall) -> ToolResult {
    ToolResult::success(EIGHT_BALL_LABEL, "Shake", pick(EIGHT_BALL_ANSWERS))
}

/// Absent means default; present but not an integer is an error.
fn optional_i64(call: &ToolCall, key: &str, default: i64) -> Result<i64, ToolError> {
    if call.arguments.get(key).is_none_or(serde_json::Value::is_null) {
        Ok(default)
    } else {
        call.require_i64(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roll_value(result: &ToolResult) -> i64 {
        result
            .output
            .strip_prefix("You rolled: ")
            .and_then(|n| n.parse().ok())
            .unwrap()
    }

    #[test]
    fn test_dice_stays_in_range() {
        let call = ToolCall::new(ROLL_DICE).with_arg("sides", 20);
        for _ in 0..200 {
            let result = execute_roll_dice(&call);
            assert_eq!(result.input, "20-sided dice");
            let n = roll_value(&result);
            assert!((1..=20).contains(&n));
        }
    }

    #[test]
    fn test_dice_defaults_and_lenient_sides() {
        let result = execute_roll_dice(&ToolCall::new(ROLL_DICE));
        assert_eq!(result.input, "6-sided dice");

        let result = execute_roll_dice(&ToolCall::new(ROLL_DICE).with_arg("sides", "12"));
        assert_eq!(result.input, "12-sided dice");

        let result = execute_roll_dice(&ToolCall::new(ROLL_DICE).with_arg("sides", 0));
        assert!(!result.success);
    }

    #[test]
    fn test_coin_flip() {
        let result = execute_flip_coin(&ToolCall::new(FLIP_COIN));
        assert!(result.output == "Result: Heads" || result.output == "Result: Tails");
    }

    #[test]
    fn test_password_length_and_alphabet() {
        let result = execute_generate_password(&ToolCall::new(GENERATE_PASSWORD).with_arg("length", 8));
        assert!(result.success);
        assert_eq!(result.output.chars().count(), 8);
        assert_eq!(result.input, "Length: 8");
        assert!(result.output.bytes().all(|b| PASSWORD_ALPHABET.contains(&b)));

        let result = execute_generate_password(&ToolCall::new(GENERATE_PASSWORD));
        assert_eq!(result.output.len(), 12);

        let result = execute_generate_password(&ToolCall::new(GENERATE_PASSWORD).with_arg("length", 8.0));
        assert_eq!(result.output.len(), 8);
    }

    #[test]
    fn test_password_rejects_bad_length() {
        let result = execute_generate_password(&ToolCall::new(GENERATE_PASSWORD).with_arg("length", 0));
        assert!(!result.success);
        let result = execute_generate_password(&ToolCall::new(GENERATE_PASSWORD).with_arg("length", "long"));
        assert!(!result.success);
    }

    #[test]
    fn test_random_number_inclusive_range() {
        let call = ToolCall::new(RANDOM_NUMBER).with_arg("min", 3).with_arg("max", 3);
        assert_eq!(execute_random_number(&call).output, "Random number: 3");

        let call = ToolCall::new(RANDOM_NUMBER).with_arg("min", 5).with_arg("max", 1);
        assert!(!execute_random_number(&call).success);

        let call = ToolCall::new(RANDOM_NUMBER).with_arg("min", 1);
        assert!(!execute_random_number(&call).success);
    }

    #[test]
    fn test_magic_8ball() {
        let result = execute_magic_8ball(&ToolCall::new(MAGIC_8BALL));
        assert!(EIGHT_BALL_ANSWERS.contains(&result.output.as_str()));
        assert_eq!(result.input, "Shake");
    }
}
