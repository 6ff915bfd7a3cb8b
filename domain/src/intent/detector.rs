//! Ordered, first-match-wins intent detection.

use super::rules::{self, Utterance};
use crate::tool::entities::ToolCall;

/// One detection rule: a named predicate+extractor pair.
///
/// The matcher returns `Some(call)` when the rule applies and it could
/// extract the arguments it needs. A matcher that recognizes its keywords
/// but cannot extract arguments returns `None`, letting later rules try.
#[derive(Clone)]
pub struct IntentRule {
    pub name: &'static str,
    matcher: fn(&Utterance) -> Option<ToolCall>,
}

impl IntentRule {
    pub fn new(name: &'static str, matcher: fn(&Utterance) -> Option<ToolCall>) -> Self {
        Self { name, matcher }
    }

    pub fn apply(&self, utterance: &Utterance) -> Option<ToolCall> {
        (self.matcher)(utterance)
    }
}

impl std::fmt::Debug for IntentRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntentRule").field("name", &self.name).finish()
    }
}

/// A tool guess produced without backend involvement.
#[derive(Debug, Clone, PartialEq)]
pub struct HeuristicMatch {
    /// Name of the rule that fired
    pub rule: &'static str,
    /// Tool and arguments to dispatch
    pub call: ToolCall,
}

/// Rule-based detector used when the backend cannot be reached.
///
/// Rules are evaluated in order and the first one that produces a call
/// wins. No match is a valid outcome.
///
/// # Examples
///
/// ```
/// use toolchat_domain::intent::IntentDetector;
///
/// let detector = IntentDetector::default();
/// let hit = detector.detect("roll a 20 sided dice").unwrap();
/// assert_eq!(hit.call.tool_name, "roll_dice");
/// assert_eq!(hit.call.get_i64("sides"), Some(20));
///
/// assert!(detector.detect("blorp").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct IntentDetector {
    rules: Vec<IntentRule>,
}

impl IntentDetector {
    pub fn new(rules: Vec<IntentRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }

    pub fn detect(&self, text: &str) -> Option<HeuristicMatch> {
        let utterance = Utterance::new(text);
        self.rules.iter().find_map(|rule| {
            rule.apply(&utterance).map(|call| HeuristicMatch {
                rule: rule.name,
                call,
            })
        })
    }
}

impl Default for IntentDetector {
    fn default() -> Self {
        Self::new(rules::standard_rules())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::names;

    fn detect(text: &str) -> Option<HeuristicMatch> {
        IntentDetector::default().detect(text)
    }

    fn tool_of(text: &str) -> Option<String> {
        detect(text).map(|m| m.call.tool_name)
    }

    #[test]
    fn test_rule_priority_order() {
        let names: Vec<&str> = IntentDetector::default()
            .rules()
            .iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "encyclopedia",
                "weather",
                "arithmetic",
                "time_greeting",
                "joke",
                "fact",
                "quote",
                "dice",
                "coin",
                "password",
                "magic_8ball",
                "prime",
                "factorial",
                "fibonacci",
            ]
        );
    }

    #[test]
    fn test_dice_with_twenty_sides() {
        let hit = detect("roll a 20 sided dice").unwrap();
        assert_eq!(hit.rule, "dice");
        assert_eq!(hit.call.tool_name, names::ROLL_DICE);
        assert_eq!(hit.call.get_i64("sides"), Some(20));
    }

    #[test]
    fn test_dice_side_selection() {
        assert_eq!(detect("roll a d12").unwrap().call.get_i64("sides"), Some(12));
        assert_eq!(detect("roll the dice").unwrap().call.get_i64("sides"), Some(6));
    }

    #[test]
    fn test_arithmetic_extracts_expression() {
        let hit = detect("what is 12*4").unwrap();
        assert_eq!(hit.rule, "arithmetic");
        assert_eq!(hit.call.tool_name, names::CALCULATOR);
        assert_eq!(hit.call.get_string("expression"), Some("12*4"));

        let hit = detect("calculate (3 + 5) / 2 please").unwrap();
        assert_eq!(hit.call.get_string("expression"), Some("(3 + 5) / 2"));
    }

    #[test]
    fn test_arithmetic_requires_operator() {
        // A bare number is not an expression.
        assert_ne!(tool_of("calculate 42").as_deref(), Some(names::CALCULATOR));
    }

    #[test]
    fn test_password_length() {
        let hit = detect("generate a password of length 8").unwrap();
        assert_eq!(hit.call.tool_name, names::GENERATE_PASSWORD);
        assert_eq!(hit.call.get_i64("length"), Some(8));

        let hit = detect("I need a new password").unwrap();
        assert_eq!(hit.call.get_i64("length"), Some(12));
    }

    #[test]
    fn test_weather_beats_arithmetic() {
        let hit = detect("weather in london and 3+4").unwrap();
        assert_eq!(hit.rule, "weather");
        assert_eq!(hit.call.get_string("city"), Some("London"));
    }

    #[test]
    fn test_weather_city_and_default() {
        let hit = detect("What's the temperature in New York?").unwrap();
        assert_eq!(hit.call.get_string("city"), Some("New York"));

        let hit = detect("how is the weather").unwrap();
        assert_eq!(hit.call.get_string("city"), Some("Chennai"));
    }

    #[test]
    fn test_lookup_phrasing_outranks_weather() {
        let hit = detect("what is the weather in Tokyo").unwrap();
        assert_eq!(hit.rule, "encyclopedia");
        assert_eq!(hit.call.get_string("query"), Some("the weather in Tokyo"));

        let hit = detect("weather in Tokyo").unwrap();
        assert_eq!(hit.rule, "weather");
        assert_eq!(hit.call.get_string("city"), Some("Tokyo"));
    }

    #[test]
    fn test_encyclopedia_query_extraction() {
        let hit = detect("Who is Ada Lovelace?").unwrap();
        assert_eq!(hit.rule, "encyclopedia");
        assert_eq!(hit.call.tool_name, names::SEARCH_WIKIPEDIA);
        assert_eq!(hit.call.get_string("query"), Some("Ada Lovelace"));

        let hit = detect("tell me about black holes").unwrap();
        assert_eq!(hit.call.get_string("query"), Some("black holes"));
    }

    #[test]
    fn test_encyclopedia_empty_query_falls_through() {
        // Nothing left after stripping the trigger phrase.
        let hit = detect("who is?");
        assert!(hit.map(|m| m.rule != "encyclopedia").unwrap_or(true));
    }

    #[test]
    fn test_greetings_and_time() {
        assert_eq!(tool_of("hello there").as_deref(), Some(names::GET_TIME));
        assert_eq!(tool_of("what time is it").as_deref(), Some(names::GET_TIME));
        assert_eq!(tool_of("hey").as_deref(), Some(names::GET_TIME));
        // Greeting words only match whole words.
        assert_ne!(tool_of("this is nothing").as_deref(), Some(names::GET_TIME));
    }

    #[test]
    fn test_novelty_rules() {
        assert_eq!(tool_of("tell a joke").as_deref(), Some(names::GET_JOKE));
        assert_eq!(tool_of("some trivia please").as_deref(), Some(names::GET_RANDOM_FACT));
        assert_eq!(tool_of("I need motivation").as_deref(), Some(names::GET_QUOTE));
        assert_eq!(tool_of("flip a coin").as_deref(), Some(names::FLIP_COIN));
        assert_eq!(tool_of("shake the magic 8 ball").as_deref(), Some(names::MAGIC_8BALL));
    }

    #[test]
    fn test_number_rules() {
        let hit = detect("is 17 prime").unwrap();
        assert_eq!(hit.call.tool_name, names::IS_PRIME);
        assert_eq!(hit.call.get_i64("number"), Some(17));

        let hit = detect("factorial of 5").unwrap();
        assert_eq!(hit.call.tool_name, names::FACTORIAL);
        assert_eq!(hit.call.get_i64("number"), Some(5));

        let hit = detect("fibonacci 7").unwrap();
        assert_eq!(hit.call.tool_name, names::FIBONACCI);
        assert_eq!(hit.call.get_i64("count"), Some(7));

        let hit = detect("show me fib numbers").unwrap();
        assert_eq!(hit.call.get_i64("count"), Some(10));
    }

    #[test]
    fn test_prime_without_number_falls_through() {
        assert!(detect("prime").is_none());
    }

    #[test]
    fn test_no_match() {
        assert!(detect("blorp").is_none());
        assert!(detect("").is_none());
    }
}
