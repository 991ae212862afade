/*
 * style.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Built-in citation styles.
//!
//! Each style turns one [`Reference`] into one bibliography entry: a string
//! of inline HTML (`<i>` for italics, curly quotes for quoted titles) with
//! all reference text escaped. URLs and DOIs are escaped too but left
//! unlinked, so the caller decides how to link them.

use crate::error::Result;
use crate::locale::Locale;
use crate::reference::{DateParts, Name, Reference, ResolvedDate, StringOrNumber};

/// Chicago lists at most this many names before truncating to `FIRST_NAMES`.
const MAX_NAMES: usize = 10;
const FIRST_NAMES: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuiltinStyle {
    /// Chicago Manual of Style, full note with bibliography.
    #[default]
    ChicagoFullNoteBibliography,
}

impl BuiltinStyle {
    pub fn name(&self) -> &'static str {
        match self {
            BuiltinStyle::ChicagoFullNoteBibliography => "chicago-fullnote-bibliography",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "chicago-fullnote-bibliography" | "chicago" => {
                Some(BuiltinStyle::ChicagoFullNoteBibliography)
            }
            _ => None,
        }
    }

    /// Format one bibliography entry.
    pub fn format_entry(&self, reference: &Reference, locale: &Locale) -> Result<String> {
        match self {
            BuiltinStyle::ChicagoFullNoteBibliography => chicago_entry(reference, locale),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Book,
    Chapter,
    Journal,
    Other,
}

impl EntryKind {
    fn of(ref_type: &str) -> Self {
        match ref_type {
            "book" | "report" | "manuscript" | "software" | "dataset" | "motion_picture" => {
                EntryKind::Book
            }
            "chapter" | "paper-conference" | "entry-encyclopedia" | "entry-dictionary" => {
                EntryKind::Chapter
            }
            "article-journal" => EntryKind::Journal,
            _ => EntryKind::Other,
        }
    }
}

fn chicago_entry(reference: &Reference, locale: &Locale) -> Result<String> {
    let kind = EntryKind::of(&reference.ref_type);
    let issued = match reference.issued {
        Some(ref date) => date.resolve(&reference.id, "issued")?,
        None => None,
    };
    let accessed = match reference.accessed {
        Some(ref date) => date.resolve(&reference.id, "accessed")?,
        None => None,
    };

    let mut entry = Entry::default();
    entry.push(contributors(reference, locale));

    match (kind, reference.title.as_deref()) {
        (EntryKind::Book, Some(title)) => entry.push(italic(title)),
        (_, Some(title)) => entry.push_quoted(&escape_html(title)),
        (_, None) => {}
    }

    if kind == EntryKind::Book || kind == EntryKind::Chapter {
        if kind == EntryKind::Book && reference.author.is_some() {
            entry.push(capitalize(&role_phrase(
                locale.term("edited-by"),
                reference.editor.as_deref(),
                locale,
            )));
        }
        entry.push(capitalize(&role_phrase(
            locale.term("translated-by"),
            reference.translator.as_deref(),
            locale,
        )));
    }

    match kind {
        EntryKind::Book => {
            entry.push(edition(reference.edition.as_ref(), locale));
            entry.push(opt_escaped(reference.collection_title.as_deref()));
            entry.push(publication(reference, issued.as_ref(), locale));
        }
        EntryKind::Chapter => {
            let mut container = Vec::new();
            if let Some(ref title) = reference.container_title {
                container.push(format!("{} {}", capitalize(locale.term("in")), italic(title)));
            }
            if reference.author.is_some() {
                container.push(role_phrase(
                    locale.term("edited-by"),
                    reference.editor.as_deref(),
                    locale,
                ));
            }
            container.push(pages(reference.page.as_deref()));
            entry.push(join_nonempty(&container, ", "));
            entry.push(publication(reference, issued.as_ref(), locale));
        }
        EntryKind::Journal => {
            let mut journal = String::new();
            if let Some(ref title) = reference.container_title {
                journal.push_str(&italic(title));
            }
            if let Some(ref volume) = reference.volume {
                journal.push(' ');
                journal.push_str(&escape_html(&volume.as_str()));
            }
            if let Some(ref issue) = reference.issue {
                journal.push_str(&format!(
                    ", {} {}",
                    locale.term("issue"),
                    escape_html(&issue.as_str())
                ));
            }
            journal.push_str(&format!(" ({})", year(issued.as_ref(), locale)));
            let page = pages(reference.page.as_deref());
            if !page.is_empty() {
                journal.push_str(": ");
                journal.push_str(&page);
            }
            entry.push(journal.trim_start().to_string());
        }
        EntryKind::Other => {
            let parts = vec![
                reference.container_title.as_deref().map(italic).unwrap_or_default(),
                opt_escaped(reference.genre.as_deref()),
                opt_escaped(reference.publisher.as_deref()),
                issued
                    .as_ref()
                    .map(|d| full_date(d, locale))
                    .unwrap_or_else(|| locale.term("no-date").to_string()),
            ];
            entry.push(join_nonempty(&parts, ", "));
        }
    }

    let link = link(reference);
    if issued.is_none() && !link.is_empty() {
        if let Some(ref date) = accessed {
            entry.push(format!(
                "{} {}",
                capitalize(locale.term("accessed")),
                full_date(date, locale)
            ));
        }
    }
    entry.push(link);

    Ok(entry.finish())
}

/// Sentences of an entry, each closed with a period when rendered.
#[derive(Debug, Default)]
struct Entry {
    sentences: Vec<String>,
}

impl Entry {
    fn push(&mut self, sentence: String) {
        let sentence = sentence.trim();
        if !sentence.is_empty() {
            self.sentences.push(sentence.to_string());
        }
    }

    /// A quoted title carries its period inside the closing quote.
    fn push_quoted(&mut self, title: &str) {
        if title.is_empty() {
            return;
        }
        if ends_with_terminal(title) {
            self.sentences.push(format!("“{}”", title));
        } else {
            self.sentences.push(format!("“{}.”", title));
        }
    }

    fn finish(self) -> String {
        self.sentences
            .into_iter()
            .map(|s| {
                if ends_with_terminal(&s) || s.ends_with(".”") || s.ends_with("?”") {
                    s
                } else {
                    format!("{}.", s)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn ends_with_terminal(s: &str) -> bool {
    s.ends_with('.') || s.ends_with('?') || s.ends_with('!')
}

/// Authors, or editors standing in for missing authors.
fn contributors(reference: &Reference, locale: &Locale) -> String {
    if let Some(ref authors) = reference.author {
        return name_list(authors, true, locale);
    }
    match reference.editor.as_deref() {
        Some(editors) if !editors.is_empty() => {
            let role = if editors.len() == 1 {
                locale.term("editor")
            } else {
                locale.term("editors")
            };
            format!("{}, {}", name_list(editors, true, locale), role)
        }
        _ => String::new(),
    }
}

/// Join names Chicago-style. With `invert_first`, the first name is
/// "Family, Given" and a serial comma precedes "and" even for two names.
fn name_list(names: &[Name], invert_first: bool, locale: &Locale) -> String {
    let rendered: Vec<String> = names
        .iter()
        .enumerate()
        .map(|(i, n)| {
            let name = if i == 0 && invert_first {
                n.inverted()
            } else {
                n.direct()
            };
            escape_html(&name)
        })
        .collect();

    if rendered.len() > MAX_NAMES {
        return format!(
            "{}, {}",
            rendered[..FIRST_NAMES].join(", "),
            locale.term("et-al")
        );
    }

    let and = locale.term("and");
    match rendered.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] if !invert_first => format!("{} {} {}", first, and, second),
        [init @ .., last] => format!("{}, {} {}", init.join(", "), and, last),
    }
}

/// "edited by A and B"; empty when there is nobody in the role.
fn role_phrase(term: &str, names: Option<&[Name]>, locale: &Locale) -> String {
    match names {
        Some(names) if !names.is_empty() => {
            format!("{} {}", term, name_list(names, false, locale))
        }
        _ => String::new(),
    }
}

fn edition(edition: Option<&StringOrNumber>, locale: &Locale) -> String {
    match edition {
        Some(e) => match e.as_number() {
            Some(n) if n > 1 => format!("{} {}", locale.ordinal(n), locale.term("edition")),
            Some(_) => String::new(),
            None => escape_html(&e.as_str()),
        },
        None => String::new(),
    }
}

/// "Place: Publisher, Year".
fn publication(reference: &Reference, issued: Option<&ResolvedDate>, locale: &Locale) -> String {
    let place_publisher = match (
        reference.publisher_place.as_deref(),
        reference.publisher.as_deref(),
    ) {
        (Some(place), Some(publisher)) => {
            format!("{}: {}", escape_html(place), escape_html(publisher))
        }
        (Some(only), None) | (None, Some(only)) => escape_html(only),
        (None, None) => String::new(),
    };
    join_nonempty(&[place_publisher, year(issued, locale)], ", ")
}

fn year(date: Option<&ResolvedDate>, locale: &Locale) -> String {
    match date {
        Some(ResolvedDate::Parts(parts)) => parts.year.to_string(),
        Some(ResolvedDate::Literal(text)) => escape_html(text),
        None => locale.term("no-date").to_string(),
    }
}

/// "May 1, 2020", "May 2020", "Spring 2020" or "2020".
fn full_date(date: &ResolvedDate, locale: &Locale) -> String {
    match date {
        ResolvedDate::Literal(text) => escape_html(text),
        ResolvedDate::Parts(DateParts { year, month, day }) => {
            match (month.and_then(|m| locale.month(m)), day) {
                (Some(month), Some(day)) => format!("{} {}, {}", month, day, year),
                (Some(month), None) => format!("{} {}", month, year),
                (None, _) => year.to_string(),
            }
        }
    }
}

fn pages(page: Option<&str>) -> String {
    page.map(|p| escape_html(&p.replace('-', "–")))
        .unwrap_or_default()
}

fn link(reference: &Reference) -> String {
    if let Some(ref doi) = reference.doi {
        if doi.starts_with("http://") || doi.starts_with("https://") {
            return escape_html(doi);
        }
        return escape_html(&format!("https://doi.org/{}", doi));
    }
    opt_escaped(reference.url.as_deref())
}

fn italic(text: &str) -> String {
    format!("<i>{}</i>", escape_html(text))
}

fn opt_escaped(text: Option<&str>) -> String {
    text.map(escape_html).unwrap_or_default()
}

fn join_nonempty(parts: &[String], delimiter: &str) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(delimiter)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape_html(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(family: &str, given: &str) -> Name {
        Name {
            family: Some(family.into()),
            given: Some(given.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_name_list_forms() {
        let locale = Locale::en_us();
        let one = vec![name("Doe", "Jane")];
        let two = vec![name("Doe", "Jane"), name("Roe", "John")];
        let three = vec![name("Doe", "Jane"), name("Roe", "John"), name("Poe", "Ed")];
        assert_eq!(name_list(&one, true, locale), "Doe, Jane");
        assert_eq!(name_list(&two, true, locale), "Doe, Jane, and John Roe");
        assert_eq!(name_list(&two, false, locale), "Jane Doe and John Roe");
        assert_eq!(
            name_list(&three, true, locale),
            "Doe, Jane, John Roe, and Ed Poe"
        );
    }

    #[test]
    fn test_name_list_truncates_long_lists() {
        let locale = Locale::en_us();
        let names: Vec<Name> = (0..11).map(|i| name(&format!("F{}", i), "G")).collect();
        let rendered = name_list(&names, true, locale);
        assert!(rendered.starts_with("F0, G, G F1"), "Got: {}", rendered);
        assert!(rendered.ends_with("G F6, et al."), "Got: {}", rendered);
    }

    #[test]
    fn test_entry_punctuation() {
        let mut entry = Entry::default();
        entry.push("Doe, Jane".into());
        entry.push_quoted("Is It?");
        entry.push_quoted("Plain Title");
        entry.push("   ".into());
        entry.push("Already closed.".into());
        assert_eq!(
            entry.finish(),
            "Doe, Jane. “Is It?” “Plain Title.” Already closed."
        );
    }

    #[test]
    fn test_edition_forms() {
        let locale = Locale::en_us();
        assert_eq!(edition(Some(&StringOrNumber::Number(2)), locale), "2nd ed.");
        assert_eq!(edition(Some(&StringOrNumber::Number(1)), locale), "");
        assert_eq!(
            edition(Some(&StringOrNumber::String("Rev. ed".into())), locale),
            "Rev. ed"
        );
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("A & B <c>"), "A &amp; B &lt;c&gt;");
        assert_eq!(escape_html("say \"hi\""), "say &quot;hi&quot;");
    }

    #[test]
    fn test_link_is_escaped() {
        let mut reference = Reference::placeholder("u");
        reference.url = Some("http://e.com/?a=1&b=\"2\"".into());
        assert_eq!(link(&reference), "http://e.com/?a=1&amp;b=&quot;2&quot;");

        reference.doi = Some("10.1/a<b>".into());
        assert_eq!(link(&reference), "https://doi.org/10.1/a&lt;b&gt;");
    }

    #[test]
    fn test_style_names() {
        assert_eq!(
            BuiltinStyle::from_name("chicago-fullnote-bibliography"),
            Some(BuiltinStyle::ChicagoFullNoteBibliography)
        );
        assert_eq!(BuiltinStyle::from_name("apa"), None);
        assert_eq!(
            BuiltinStyle::default().name(),
            "chicago-fullnote-bibliography"
        );
    }
}
