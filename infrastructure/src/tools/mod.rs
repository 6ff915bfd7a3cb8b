//! Tool implementations
//!
//! Each module holds the definitions and executors of one catalog category.
//! Executors have the shape `fn(&ToolCall) -> ToolResult` and never fail:
//! bad input comes back as a result with `success = false`.
//!
//! | Module | Tools |
//! |--------|-------|
//! | `time` | get_time, calculate_age, days_until |
//! | `math` | calculator, is_prime, factorial, fibonacci |
//! | `info` | get_weather, get_random_fact, get_joke, get_quote |
//! | `encyclopedia` | search_wikipedia (HTTP) |
//! | `text` | count_words, reverse_text, text_to_uppercase, text_to_lowercase |
//! | `conversion` | convert_currency, convert_temperature, encode_base64, decode_base64 |
//! | `random` | roll_dice, flip_coin, generate_password, random_number, magic_8ball |

pub mod conversion;
pub mod encyclopedia;
pub mod info;
pub mod math;
pub mod random;
pub mod text;
pub mod time;

mod registry;
mod schema;

pub use encyclopedia::{EncyclopediaClient, EncyclopediaError, EncyclopediaSettings};
pub use registry::ToolRegistry;
pub use schema::JsonSchemaToolConverter;
