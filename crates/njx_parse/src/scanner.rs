//! The signature scanner.
//!
//! A small scanner in two passes: comment stripping over the whole
//! signature text, then shape detection and parameter-list splitting.

use njx_ast::{CompileError, Param, String};

/// Parse a parameter list out of template-function source text.
pub fn parse_params(signature: &str) -> Result<Vec<Param>, CompileError> {
    let source = strip_comments(signature);
    let list = extract_list(source.trim())?;
    split_list(&list)
}

/// Flat declared-name list; destructured fields appear in order as if they
/// were top-level parameters.
pub fn param_names(signature: &str) -> Result<Vec<String>, CompileError> {
    Ok(parse_params(signature)?
        .iter()
        .flat_map(|param| param.names())
        .collect())
}

/// Remove `//` and `/* */` comments, replacing each with a single space so
/// token boundaries survive. Non-comment text is copied through verbatim.
fn strip_comments(source: &str) -> std::string::String {
    // Signatures never contain string literals, so no quote handling
    let mut out = std::string::String::with_capacity(source.len());
    let mut rest = source;
    loop {
        let line = rest.find("//");
        let block = rest.find("/*");
        match (line, block) {
            (Some(at), block) if block.map_or(true, |b| at < b) => {
                out.push_str(&rest[..at]);
                out.push(' ');
                rest = match rest[at..].find('\n') {
                    Some(end) => &rest[at + end..],
                    None => "",
                };
            }
            (_, Some(at)) => {
                out.push_str(&rest[..at]);
                out.push(' ');
                rest = match rest[at + 2..].find("*/") {
                    Some(end) => &rest[at + 2 + end + 2..],
                    None => "",
                };
            }
            _ => {
                out.push_str(rest);
                return out;
            }
        }
    }
}

/// Locate the parameter-list text for one of the supported shapes.
fn extract_list(source: &str) -> Result<std::string::String, CompileError> {
    if source.is_empty() {
        return Err(CompileError::Parse("empty signature".into()));
    }

    let rest = if let Some(rest) = after_function_keyword(source) {
        // `function name(a, b)` or anonymous `function (a, b)`
        let rest = rest.trim_start();
        let rest = rest.trim_start_matches(is_ident_char);
        let rest = rest.trim_start();
        if !rest.starts_with('(') {
            return Err(CompileError::Parse(
                "expected '(' after function declaration".into(),
            ));
        }
        rest
    } else if source.starts_with('(') {
        source
    } else {
        // Single bare parameter: `item => ...` (the arrow may be omitted
        // when the signature is just the name)
        let end = source
            .find(|c: char| !is_ident_char(c))
            .unwrap_or(source.len());
        let (name, rest) = source.split_at(end);
        if !is_identifier(name) {
            return Err(CompileError::Parse(
                format!("unsupported declaration shape: `{source}`").into(),
            ));
        }
        let rest = rest.trim_start();
        if !rest.is_empty() && !rest.starts_with("=>") {
            return Err(CompileError::Parse(
                format!("unsupported declaration shape: `{source}`").into(),
            ));
        }
        return Ok(name.to_string());
    };

    // Take the text inside the outermost parentheses
    let mut depth = 0usize;
    for (i, c) in rest.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(rest[1..i].to_string());
                }
            }
            _ => {}
        }
    }
    Err(CompileError::Parse("missing ')' in parameter list".into()))
}

/// The text after a leading `function` keyword, or `None` when the source
/// starts with an identifier that merely begins with those letters
/// (`functional => ...` is a bare parameter, not a declaration).
fn after_function_keyword(source: &str) -> Option<&str> {
    let rest = source.strip_prefix("function")?;
    if rest.starts_with(is_ident_char) {
        return None;
    }
    Some(rest)
}

/// Split a parameter list into simple names and one-level destructuring
/// groups.
fn split_list(list: &str) -> Result<Vec<Param>, CompileError> {
    let mut params = Vec::new();
    let mut rest = list.trim();

    while !rest.is_empty() {
        if let Some(after_brace) = rest.strip_prefix('{') {
            let close = after_brace
                .find('}')
                .ok_or_else(|| CompileError::Parse("missing '}' in destructuring pattern".into()))?;
            let inner = &after_brace[..close];
            if inner.contains('{') {
                return Err(CompileError::Parse(
                    "nested destructuring patterns are not supported".into(),
                ));
            }
            let fields = inner
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(parse_name)
                .collect::<Result<Vec<String>, _>>()?;
            params.push(Param::Destructured(fields));
            rest = skip_separator(&after_brace[close + 1..])?;
        } else {
            let end = rest.find([',', '{']).unwrap_or(rest.len());
            if rest[end..].starts_with('{') {
                return Err(CompileError::Parse(
                    format!("unexpected '{{' after `{}`", rest[..end].trim()).into(),
                ));
            }
            let name = rest[..end].trim();
            if !name.is_empty() {
                params.push(Param::Name(parse_name(name)?));
            }
            rest = match rest[end..].strip_prefix(',') {
                Some(after) => after.trim_start(),
                None => "",
            };
        }
    }

    Ok(params)
}

/// After a destructuring group: either the end of the list or a comma.
fn skip_separator(rest: &str) -> Result<&str, CompileError> {
    let rest = rest.trim_start();
    if rest.is_empty() {
        return Ok(rest);
    }
    rest.strip_prefix(',')
        .map(str::trim_start)
        .ok_or_else(|| CompileError::Parse(format!("expected ',' before `{rest}`").into()))
}

fn parse_name(raw: &str) -> Result<String, CompileError> {
    if is_identifier(raw) {
        Ok(raw.into())
    } else {
        Err(CompileError::Parse(
            format!("invalid parameter name: `{raw}`").into(),
        ))
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(is_ident_char)
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}
