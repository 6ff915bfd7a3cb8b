//! Information tools: get_weather, get_random_fact, get_joke, get_quote
//!
//! The encyclopedia lookup lives in [`super::encyclopedia`] since it is the
//! only tool that talks to the network.

use rand::seq::SliceRandom;
use toolchat_domain::tool::{
    category::ToolCategory,
    entities::{ToolCall, ToolDefinition, ToolParameter},
    names::{GET_JOKE, GET_QUOTE, GET_RANDOM_FACT, GET_WEATHER},
    value_objects::ToolResult,
};
use toolchat_domain::util::title_case;

const WEATHER_LABEL: &str = "Weather Service 🌤️";
const FACT_LABEL: &str = "Random Fact 🤓";
const JOKE_LABEL: &str = "Joke Machine 😂";
const QUOTE_LABEL: &str = "Quote Generator 💭";

struct Conditions {
    temp: &'static str,
    condition: &'static str,
    humidity: &'static str,
}

const WEATHER_TABLE: &[(&str, Conditions)] = &[
    ("Chennai", Conditions { temp: "32°C", condition: "Sunny ☀️", humidity: "70%" }),
    ("Mumbai", Conditions { temp: "28°C", condition: "Cloudy ☁️", humidity: "80%" }),
    ("Delhi", Conditions { temp: "25°C", condition: "Clear 🌤️", humidity: "45%" }),
    ("Bangalore", Conditions { temp: "26°C", condition: "Partly Cloudy ⛅", humidity: "60%" }),
    ("New York", Conditions { temp: "15°C", condition: "Rainy 🌧️", humidity: "65%" }),
    ("London", Conditions { temp: "12°C", condition: "Foggy 🌫️", humidity: "85%" }),
    ("Tokyo", Conditions { temp: "20°C", condition: "Clear 🌤️", humidity: "55%" }),
];

const UNKNOWN_CONDITIONS: Conditions = Conditions {
    temp: "25°C",
    condition: "Unknown ❓",
    humidity: "60%",
};

const FACTS: &[&str] = &[
    "Honey never spoils. Archaeologists have found 3000-year-old honey in Egyptian tombs that's still edible!",
    "Octopuses have three hearts and blue blood.",
    "A day on Venus is longer than its year.",
    "Bananas are berries, but strawberries aren't.",
    "The human brain uses 20% of the body's energy despite being only 2% of its weight.",
    "There are more stars in the universe than grains of sand on all Earth's beaches.",
    "A group of flamingos is called a 'flamboyance'.",
    "Sharks existed before trees. Sharks: 400M years, Trees: 350M years.",
];

const JOKES: &[&str] = &[
    "Why don't scientists trust atoms? Because they make up everything!",
    "Why did the scarecrow win an award? He was outstanding in his field!",
    "What do you call a fake noodle? An impasta!",
    "Why don't eggs tell jokes? They'd crack each other up!",
    "What did the ocean say to the beach? Nothing, it just waved!",
    "Why did the math book look sad? Because it had too many problems!",
    "What do you call a bear with no teeth? A gummy bear!",
];

const QUOTES: &[&str] = &[
    "The only way to do great work is to love what you do. - Steve Jobs",
    "Innovation distinguishes between a leader and a follower. - Steve Jobs",
    "Life is 10% what happens to you and 90% how you react to it. - Charles R. Swindoll",
    "The best time to plant a tree was 20 years ago. The second best time is now. - Chinese Proverb",
    "Don't watch the clock; do what it does. Keep going. - Sam Levenson",
    "Success is not final, failure is not fatal: It is the courage to continue that counts. - Winston Churchill",
];

pub fn get_weather_definition() -> ToolDefinition {
    ToolDefinition::new(GET_WEATHER, "Get weather for a city", ToolCategory::Information)
        .with_parameter(ToolParameter::new("city", "City name", true))
}

pub fn get_random_fact_definition() -> ToolDefinition {
    ToolDefinition::new(
        GET_RANDOM_FACT,
        "Get a random interesting fact",
        ToolCategory::Information,
    )
}

pub fn get_joke_definition() -> ToolDefinition {
    ToolDefinition::new(GET_JOKE, "Get a random joke", ToolCategory::Information)
}

pub fn get_quote_definition() -> ToolDefinition {
    ToolDefinition::new(GET_QUOTE, "Get an inspirational quote", ToolCategory::Information)
}

pub fn execute_get_weather(call: &ToolCall) -> ToolResult {
    let city = match call.require_string("city") {
        Ok(c) => c,
        Err(e) => return ToolResult::from_error(WEATHER_LABEL, "", &e),
    };
    let key = title_case(city.trim());
    let data = WEATHER_TABLE
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, conditions)| conditions)
        .unwrap_or(&UNKNOWN_CONDITIONS);

    ToolResult::success(
        WEATHER_LABEL,
        city,
        format!(
            "{}: {}, {}, Humidity: {}",
            key, data.temp, data.condition, data.humidity
        ),
    )
}

pub fn execute_get_random_fact(_call: &ToolCall) -> ToolResult {
    ToolResult::success(FACT_LABEL, "Get fact", pick(FACTS))
}

pub fn execute_get_joke(_call: &ToolCall) -> ToolResult {
    ToolResult::success(JOKE_LABEL, "Tell joke", pick(JOKES))
}

pub fn execute_get_quote(_call: &ToolCall) -> ToolResult {
    ToolResult::success(QUOTE_LABEL, "Get quote", pick(QUOTES))
}

pub(super) fn pick(items: &[&'static str]) -> &'static str {
    items
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_known_city_any_casing() {
        let result = execute_get_weather(&ToolCall::new(GET_WEATHER).with_arg("city", "new york"));
        assert!(result.success);
        assert_eq!(result.input, "new york");
        assert_eq!(result.output, "New York: 15°C, Rainy 🌧️, Humidity: 65%");
    }

    #[test]
    fn test_weather_unknown_city_uses_placeholder() {
        let result = execute_get_weather(&ToolCall::new(GET_WEATHER).with_arg("city", "paris"));
        assert!(result.success);
        assert_eq!(result.output, "Paris: 25°C, Unknown ❓, Humidity: 60%");
    }

    #[test]
    fn test_canned_content_comes_from_tables() {
        let fact = execute_get_random_fact(&ToolCall::new(GET_RANDOM_FACT));
        assert!(FACTS.contains(&fact.output.as_str()));
        assert_eq!(fact.label, FACT_LABEL);

        let joke = execute_get_joke(&ToolCall::new(GET_JOKE));
        assert!(JOKES.contains(&joke.output.as_str()));

        let quote = execute_get_quote(&ToolCall::new(GET_QUOTE));
        assert!(QUOTES.contains(&quote.output.as_str()));
    }
}
