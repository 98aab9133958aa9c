/// Quote a string as a single-quoted SQL literal:
/// - internal `'` becomes `''`
/// - `\` becomes `\\` since MySQL-mode servers treat backslash as an escape
pub fn quote_string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');

    for ch in s.chars() {
        match ch {
            '\'' => out.push_str("''"),
            '\\' => out.push_str(r"\\"),
            _ => out.push(ch),
        }
    }

    out.push('\'');
    out
}

/// Wrap an identifier in `quote`, doubling any embedded quote character.
pub fn quote_identifier_with(ident: &str, quote: char) -> String {
    let mut out = String::with_capacity(ident.len() + 2);
    out.push(quote);
    for ch in ident.chars() {
        if ch == quote {
            out.push(quote);
        }
        out.push(ch);
    }
    out.push(quote);
    out
}
