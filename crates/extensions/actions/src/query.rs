//! Query-string manipulation shared by the value action handlers.

use serde_json::Value;

/// Render a value so the query language parses it back to the same value.
///
/// Strings containing reserved characters are quoted with embedded quotes
/// and backslashes escaped; everything else renders as its JSON literal.
#[must_use]
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(text) => quote(text),
        other => other.to_string(),
    }
}

/// Build a `field:value` term.
#[must_use]
pub fn term(field: &str, value: &Value) -> String {
    format!("{field}:{}", format_value(value))
}

/// Append a term with `AND`, leaving the query unchanged when the term is
/// already present. An empty or match-all query is replaced outright.
#[must_use]
pub fn append_term(query: &str, term: &str) -> String {
    let trimmed = query.trim();
    if trimmed.is_empty() || trimmed == "*" {
        return term.to_string();
    }
    if split_terms(trimmed).contains(&term) {
        return trimmed.to_string();
    }
    format!("{trimmed} AND {term}")
}

/// Append a negated term, replacing an empty or match-all query with the
/// negation alone.
#[must_use]
pub fn exclude_term(query: &str, term: &str) -> String {
    let trimmed = query.trim();
    if trimmed.is_empty() || trimmed == "*" {
        return format!("NOT {term}");
    }
    format!("{trimmed} AND NOT {term}")
}

fn quote(text: &str) -> String {
    if !text.is_empty() && !text.chars().any(is_reserved) {
        return text.to_string();
    }
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

fn is_reserved(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            '&' | '|'
                | '!'
                | '('
                | ')'
                | '{'
                | '}'
                | '['
                | ']'
                | '^'
                | '"'
                | '~'
                | '*'
                | '?'
                | ':'
                | '\\'
                | '/'
                | '+'
                | '-'
                | '='
        )
}

/// Split a query into whitespace-separated terms, keeping quoted phrases
/// intact.
fn split_terms(query: &str) -> Vec<&str> {
    let mut terms = Vec::new();
    let mut start = None;
    let mut in_quotes = false;
    for (index, c) in query.char_indices() {
        if c == '"' {
            in_quotes = !in_quotes;
        }
        if c.is_whitespace() && !in_quotes {
            if let Some(term_start) = start.take() {
                terms.push(&query[term_start..index]);
            }
        } else if start.is_none() {
            start = Some(index);
        }
    }
    if let Some(term_start) = start {
        terms.push(&query[term_start..]);
    }
    terms
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn plain_values_render_unquoted() {
        assert_eq!(format_value(&json!("nginx")), "nginx");
        assert_eq!(format_value(&json!(42)), "42");
        assert_eq!(format_value(&json!(true)), "true");
    }

    #[test]
    fn reserved_values_are_quoted_and_escaped() {
        assert_eq!(format_value(&json!("two words")), "\"two words\"");
        assert_eq!(format_value(&json!("a:b")), "\"a:b\"");
        assert_eq!(format_value(&json!("say \"hi\"")), "\"say \\\"hi\\\"\"");
        assert_eq!(format_value(&json!("")), "\"\"");
    }

    #[test]
    fn append_replaces_an_empty_or_match_all_query() {
        assert_eq!(append_term("", "source:nginx"), "source:nginx");
        assert_eq!(append_term("  ", "source:nginx"), "source:nginx");
        assert_eq!(append_term("*", "source:nginx"), "source:nginx");
    }

    #[test]
    fn append_joins_with_and() {
        assert_eq!(
            append_term("level:error", "source:nginx"),
            "level:error AND source:nginx"
        );
    }

    #[test]
    fn append_is_idempotent() {
        let once = append_term("*", "source:nginx");
        let twice = append_term(&once, "source:nginx");
        assert_eq!(once, twice);

        let quoted = term("message", &json!("disk full"));
        let once = append_term("level:error", &quoted);
        assert_eq!(append_term(&once, &quoted), once);
    }

    #[test]
    fn exclude_negates_the_term() {
        assert_eq!(exclude_term("*", "source:nginx"), "NOT source:nginx");
        assert_eq!(
            exclude_term("level:error", "source:nginx"),
            "level:error AND NOT source:nginx"
        );
    }

    #[test]
    fn terms_split_outside_quotes_only() {
        assert_eq!(
            split_terms("level:error message:\"disk full\""),
            vec!["level:error", "message:\"disk full\""]
        );
    }
}
