//! # Help Text
//!
//! Command overview displayed to the user via the `/help` command.

pub const MAIN: &str = concat!(
    "Этот бот выполняет команды:\n",
    "/top_billionaires – Топ 10 миллиардеров\n",
    "/billionaire_info [имя] – Информация о миллиардере\n",
    "/richest_in_country [страна] – Самый богатый человек в стране\n",
    "Страна и Имя - на английском. Имя - Имя и Фамилия"
);
