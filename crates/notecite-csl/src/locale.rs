/*
 * locale.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Static locale definitions for term and date lookup.
//!
//! Only English is built in. Terms are looked up by their CSL term name.

/// Language-specific terms and month names.
#[derive(Debug)]
pub struct Locale {
    pub lang: &'static str,
    months: [&'static str; 12],
    seasons: [&'static str; 4],
    terms: &'static [(&'static str, &'static str)],
}

pub static EN_US: Locale = Locale {
    lang: "en-US",
    months: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    seasons: ["Spring", "Summer", "Autumn", "Winter"],
    terms: &[
        ("accessed", "accessed"),
        ("and", "and"),
        ("edition", "ed."),
        ("editor", "ed."),
        ("editors", "eds."),
        ("edited-by", "edited by"),
        ("et-al", "et al."),
        ("in", "in"),
        ("issue", "no."),
        ("no-date", "n.d."),
        ("translated-by", "translated by"),
    ],
};

impl Locale {
    pub fn en_us() -> &'static Locale {
        &EN_US
    }

    /// Look up a term. Unknown terms render as their own name.
    pub fn term<'a>(&self, name: &'a str) -> &'a str {
        self.terms
            .iter()
            .find(|(key, _)| *key == name)
            .map_or(name, |(_, value)| *value)
    }

    /// Month name for 1-12, season name for 13-16.
    pub fn month(&self, month: u32) -> Option<&'static str> {
        match month {
            1..=12 => Some(self.months[(month - 1) as usize]),
            13..=16 => Some(self.seasons[(month - 13) as usize]),
            _ => None,
        }
    }

    /// English ordinal suffix: 1st, 2nd, 3rd, 4th, 11th, 21st...
    pub fn ordinal(&self, n: i64) -> String {
        let suffix = match (n % 10, n % 100) {
            (_, 11..=13) => "th",
            (1, _) => "st",
            (2, _) => "nd",
            (3, _) => "rd",
            _ => "th",
        };
        format!("{}{}", n, suffix)
    }
}
