//! # Response Formatter
//!
//! Pure functions rendering ranking records into the plain text replies
//! sent back by the command handlers.

use crate::domain::types::Billionaire;
use crate::strings::messages;
use std::fmt::Write;

/// Header line followed by one `"{idx}. {name} – ${worth}B ({country})"` line per record.
pub fn top_list(records: &[Billionaire]) -> String {
    let mut out = format!("{}\n", messages::TOP_HEADER);
    for (idx, b) in records.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} – ${}B ({})",
            idx + 1,
            b.name,
            b.current_worth,
            b.country
        );
    }
    out
}

pub fn billionaire_card(b: &Billionaire) -> String {
    format!(
        "Имя: {}\nСостояние: ${}B\nСтрана: {}\nИсточник дохода: {}\nВозраст: {}\nСсылка на фото: {}",
        b.name, b.current_worth, b.country, b.source, b.age, b.image
    )
}

pub fn richest_card(b: &Billionaire) -> String {
    format!(
        "{}\n{} – ${}B\nИсточник дохода: {}\nВозраст: {}\nСсылка на фото: {}",
        messages::richest_header(&b.country),
        b.name,
        b.current_worth,
        b.source,
        b.age,
        b.image
    )
}
