//! The standard detection rules, in priority order.
//!
//! Keyword tests run against the lowercased message. Argument extraction
//! runs against the original text so that extracted queries keep their
//! casing.

use super::detector::IntentRule;
use crate::tool::entities::ToolCall;
use crate::tool::names;
use crate::util::title_case;
use regex::Regex;
use std::sync::LazyLock;

static LOOKUP_PHRASES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(who is|who are|what is|what are|tell me about|search for|search|wikipedia|on wikipedia|\?)",
    )
    .expect("lookup phrase pattern is valid")
});

static ARITHMETIC_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\d+\-*/().\s]+").expect("arithmetic run pattern is valid")
});

static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("integer pattern is valid"));

const LOOKUP_TRIGGERS: &[&str] = &[
    "who is",
    "what is",
    "tell me about",
    "search for",
    "wikipedia",
    "who are",
];
const WEATHER_TRIGGERS: &[&str] = &["weather", "temperature"];
const KNOWN_CITIES: &[&str] = &[
    "chennai",
    "mumbai",
    "delhi",
    "bangalore",
    "kolkata",
    "hyderabad",
    "new york",
    "london",
    "tokyo",
    "paris",
];
const DEFAULT_CITY: &str = "Chennai";
const ARITHMETIC_TRIGGERS: &[&str] = &["calculate", "compute", "what is", "what's", "solve"];
const TIME_WORDS: &[&str] = &["time", "date", "today", "now", "hi", "hello", "hey"];
const JOKE_TRIGGERS: &[&str] = &["joke", "funny", "laugh", "humor"];
const FACT_WORDS: &[&str] = &["fact", "facts", "interesting", "trivia"];
const QUOTE_TRIGGERS: &[&str] = &["quote", "inspire", "motivation", "motivate"];
const DICE_TRIGGERS: &[&str] = &["dice", "roll"];
const COIN_TRIGGERS: &[&str] = &["coin", "flip", "heads", "tails"];
const EIGHT_BALL_TRIGGERS: &[&str] = &["8 ball", "magic 8", "8ball"];
const DEFAULT_PASSWORD_LENGTH: i64 = 12;
const DEFAULT_FIBONACCI_COUNT: i64 = 10;

/// A user message prepared for rule matching.
#[derive(Debug, Clone)]
pub struct Utterance<'a> {
    raw: &'a str,
    lower: String,
    words: Vec<String>,
}

impl<'a> Utterance<'a> {
    pub fn new(raw: &'a str) -> Self {
        let lower = raw.to_lowercase();
        let words = lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();
        Self { raw, lower, words }
    }

    pub fn raw(&self) -> &str {
        self.raw
    }

    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Substring match of any keyword against the lowercased text.
    pub fn mentions_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.lower.contains(k))
    }

    /// Whole-word match of any keyword.
    pub fn has_word(&self, keywords: &[&str]) -> bool {
        self.words.iter().any(|w| keywords.contains(&w.as_str()))
    }

    /// First run of digits in the text, if it fits an `i64`.
    pub fn first_integer(&self) -> Option<i64> {
        INTEGER
            .find(self.raw)
            .and_then(|m| m.as_str().parse().ok())
    }
}

/// The standard rule list.
///
/// Priority: encyclopedic lookup, weather, arithmetic, time/greeting,
/// joke, fact, quote, dice, coin flip, password, magic 8-ball, prime,
/// factorial, Fibonacci.
pub fn standard_rules() -> Vec<IntentRule> {
    vec![
        IntentRule::new("encyclopedia", encyclopedia),
        IntentRule::new("weather", weather),
        IntentRule::new("arithmetic", arithmetic),
        IntentRule::new("time_greeting", time_greeting),
        IntentRule::new("joke", joke),
        IntentRule::new("fact", fact),
        IntentRule::new("quote", quote),
        IntentRule::new("dice", dice),
        IntentRule::new("coin", coin),
        IntentRule::new("password", password),
        IntentRule::new("magic_8ball", magic_8ball),
        IntentRule::new("prime", prime),
        IntentRule::new("factorial", factorial),
        IntentRule::new("fibonacci", fibonacci),
    ]
}

fn encyclopedia(u: &Utterance) -> Option<ToolCall> {
    if !u.mentions_any(LOOKUP_TRIGGERS) {
        return None;
    }
    let stripped = LOOKUP_PHRASES.replace_all(u.raw(), "");
    let query = stripped.trim();
    // "what is 12*4" has no subject to look up.
    if !query.chars().any(char::is_alphabetic) {
        return None;
    }
    Some(ToolCall::new(names::SEARCH_WIKIPEDIA).with_arg("query", query))
}

fn weather(u: &Utterance) -> Option<ToolCall> {
    if !u.mentions_any(WEATHER_TRIGGERS) {
        return None;
    }
    let city = KNOWN_CITIES
        .iter()
        .find(|city| u.lower().contains(*city))
        .map(|city| title_case(city))
        .unwrap_or_else(|| DEFAULT_CITY.to_string());
    Some(ToolCall::new(names::GET_WEATHER).with_arg("city", city))
}

fn arithmetic(u: &Utterance) -> Option<ToolCall> {
    if !u.mentions_any(ARITHMETIC_TRIGGERS) {
        return None;
    }
    // Longest run wins; ties go to the earliest.
    let longest = ARITHMETIC_RUN
        .find_iter(u.raw())
        .map(|m| m.as_str())
        .fold("", |best, run| if run.len() > best.len() { run } else { best });
    let expression = longest.trim();
    if expression.is_empty() || !expression.contains(['+', '-', '*', '/']) {
        return None;
    }
    Some(ToolCall::new(names::CALCULATOR).with_arg("expression", expression))
}

fn time_greeting(u: &Utterance) -> Option<ToolCall> {
    u.has_word(TIME_WORDS).then(|| ToolCall::new(names::GET_TIME))
}

fn joke(u: &Utterance) -> Option<ToolCall> {
    u.mentions_any(JOKE_TRIGGERS)
        .then(|| ToolCall::new(names::GET_JOKE))
}

fn fact(u: &Utterance) -> Option<ToolCall> {
    u.has_word(FACT_WORDS)
        .then(|| ToolCall::new(names::GET_RANDOM_FACT))
}

fn quote(u: &Utterance) -> Option<ToolCall> {
    u.mentions_any(QUOTE_TRIGGERS)
        .then(|| ToolCall::new(names::GET_QUOTE))
}

fn dice(u: &Utterance) -> Option<ToolCall> {
    if !u.mentions_any(DICE_TRIGGERS) {
        return None;
    }
    let sides = if u.lower().contains("20") {
        20
    } else if u.lower().contains("12") {
        12
    } else {
        6
    };
    Some(ToolCall::new(names::ROLL_DICE).with_arg("sides", sides))
}

fn coin(u: &Utterance) -> Option<ToolCall> {
    u.mentions_any(COIN_TRIGGERS)
        .then(|| ToolCall::new(names::FLIP_COIN))
}

fn password(u: &Utterance) -> Option<ToolCall> {
    if !u.lower().contains("password") {
        return None;
    }
    let length = u.first_integer().unwrap_or(DEFAULT_PASSWORD_LENGTH);
    Some(ToolCall::new(names::GENERATE_PASSWORD).with_arg("length", length))
}

fn magic_8ball(u: &Utterance) -> Option<ToolCall> {
    u.mentions_any(EIGHT_BALL_TRIGGERS)
        .then(|| ToolCall::new(names::MAGIC_8BALL))
}

fn prime(u: &Utterance) -> Option<ToolCall> {
    if !u.lower().contains("prime") {
        return None;
    }
    let number = u.first_integer()?;
    Some(ToolCall::new(names::IS_PRIME).with_arg("number", number))
}

fn factorial(u: &Utterance) -> Option<ToolCall> {
    if !u.lower().contains("factorial") {
        return None;
    }
    let number = u.first_integer()?;
    Some(ToolCall::new(names::FACTORIAL).with_arg("number", number))
}

fn fibonacci(u: &Utterance) -> Option<ToolCall> {
    if !u.lower().contains("fib") {
        return None;
    }
    let count = u.first_integer().unwrap_or(DEFAULT_FIBONACCI_COUNT);
    Some(ToolCall::new(names::FIBONACCI).with_arg("count", count))
}
