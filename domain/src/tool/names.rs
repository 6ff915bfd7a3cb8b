//! Canonical tool names.
//!
//! These are the identifiers advertised to the backend and matched by the
//! heuristic intent detector. Executors in the infrastructure layer register
//! under exactly these names.

// Time & Date
pub const GET_TIME: &str = "get_time";
pub const CALCULATE_AGE: &str = "calculate_age";
pub const DAYS_UNTIL: &str = "days_until";

// Math
pub const CALCULATOR: &str = "calculator";
pub const IS_PRIME: &str = "is_prime";
pub const FACTORIAL: &str = "factorial";
pub const FIBONACCI: &str = "fibonacci";

// Information
pub const GET_WEATHER: &str = "get_weather";
pub const SEARCH_WIKIPEDIA: &str = "search_wikipedia";
pub const GET_RANDOM_FACT: &str = "get_random_fact";
pub const GET_JOKE: &str = "get_joke";
pub const GET_QUOTE: &str = "get_quote";

// Text
pub const COUNT_WORDS: &str = "count_words";
pub const REVERSE_TEXT: &str = "reverse_text";
pub const TEXT_TO_UPPERCASE: &str = "text_to_uppercase";
pub const TEXT_TO_LOWERCASE: &str = "text_to_lowercase";

// Conversion
pub const CONVERT_CURRENCY: &str = "convert_currency";
pub const CONVERT_TEMPERATURE: &str = "convert_temperature";
pub const ENCODE_BASE64: &str = "encode_base64";
pub const DECODE_BASE64: &str = "decode_base64";

// Random / Fun
pub const ROLL_DICE: &str = "roll_dice";
pub const FLIP_COIN: &str = "flip_coin";
pub const GENERATE_PASSWORD: &str = "generate_password";
pub const RANDOM_NUMBER: &str = "random_number";
pub const MAGIC_8BALL: &str = "magic_8ball";
