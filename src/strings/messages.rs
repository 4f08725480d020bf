//! # Messages
//!
//! Contains constant strings and format functions for user-facing replies.

pub fn greeting(first_name: &str) -> String {
    format!("Привет, {first_name}! Это бот Forbes Billionaires. Вызов доступных команд - /help")
}

pub const FETCH_FAILED: &str = "Не удалось получить данные о миллиардерах.";

pub fn country_fetch_failed(country: &str) -> String {
    format!("Не удалось получить данные для страны {country}.")
}

pub const INFO_USAGE: &str = "Укажите имя миллиардера: /billionaire_info [имя]";
pub const RICHEST_USAGE: &str = "Укажите страну: /richest_in_country [страна]";

pub fn billionaire_not_found(name: &str) -> String {
    format!("Миллиардер с именем {name} не найден.")
}

pub fn country_not_found(country: &str) -> String {
    format!("В стране {country} не найдено миллиардеров.")
}

pub const TOP_HEADER: &str = "Топ 10 миллиардеров мира:";

pub fn richest_header(country: &str) -> String {
    format!("Самый богатый человек в {country}:")
}
