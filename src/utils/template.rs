use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TemplateError {
    #[error("Unknown placeholder `{{{0}}}`")]
    UnknownPlaceholder(String),
    #[error("Unbalanced `{{` or `}}` at byte {0}")]
    Unbalanced(usize),
    #[error("Format spec or conversion not supported in `{{{0}}}`")]
    FormatSpec(String),
}

/// Render a message template with `{name}` placeholders.
///
/// `{{` and `}}` produce literal braces. Values are inserted as given, so
/// `:spec` and `!conversion` suffixes are refused rather than silently dropped.
pub fn render(template: &str, values: &[(&str, &str)]) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        match c {
            '{' => {
                if let Some((_, '{')) = chars.peek() {
                    chars.next();
                    out.push('{');
                    continue;
                }

                let mut field = String::new();
                let mut closed = false;
                for (_, c) in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    field.push(c);
                }
                if !closed {
                    return Err(TemplateError::Unbalanced(pos));
                }

                if field.contains(|c: char| c == ':' || c == '!') {
                    return Err(TemplateError::FormatSpec(field));
                }
                let name = field.trim();
                let value = values
                    .iter()
                    .find(|(key, _)| *key == name)
                    .map(|(_, value)| *value)
                    .ok_or_else(|| TemplateError::UnknownPlaceholder(name.to_string()))?;
                out.push_str(value);
            }
            '}' => {
                if let Some((_, '}')) = chars.peek() {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(TemplateError::Unbalanced(pos));
                }
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}

/// Check that a template only uses the given placeholder names
pub fn validate(template: &str, names: &[&str]) -> Result<(), TemplateError> {
    let values: Vec<(&str, &str)> = names.iter().map(|name| (*name, "")).collect();
    render(template, &values).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_named_placeholders() {
        let rendered = render(
            "{sender} tipped {receiver} {ltc_amount} LTC (${usd})",
            &[("sender", "<@1>"), ("receiver", "<@2>"), ("ltc_amount", "0.1176"), ("usd", "10.00")],
        )
        .unwrap();
        assert_eq!(rendered, "<@1> tipped <@2> 0.1176 LTC ($10.00)");
    }

    #[test]
    fn test_render_escapes_and_reuse() {
        let rendered = render("{{{usd}}} {usd}", &[("usd", "5")]).unwrap();
        assert_eq!(rendered, "{5} 5");
    }

    #[test]
    fn test_render_rejects_format_spec() {
        assert_eq!(
            render("**{ltc:>10}** LTC", &[("ltc", "1.0000")]),
            Err(TemplateError::FormatSpec("ltc:>10".to_string()))
        );
        assert_eq!(
            render("{username!r}", &[("username", "bob")]),
            Err(TemplateError::FormatSpec("username!r".to_string()))
        );
    }

    #[test]
    fn test_unknown_placeholder() {
        assert_eq!(
            render("hi {user}", &[("username", "bob")]),
            Err(TemplateError::UnknownPlaceholder("user".to_string()))
        );
    }

    #[test]
    fn test_unbalanced_braces() {
        assert_eq!(render("oops {ltc", &[("ltc", "1")]), Err(TemplateError::Unbalanced(5)));
        assert_eq!(render("oops }", &[]), Err(TemplateError::Unbalanced(5)));
    }

    #[test]
    fn test_validate() {
        assert!(validate("{ltc} / {usd} for {username}", &["ltc", "usd", "username"]).is_ok());
        assert!(validate("{balance}", &["ltc", "usd", "username"]).is_err());
        assert!(matches!(
            validate("{usd:.2f}", &["ltc", "usd", "username"]),
            Err(TemplateError::FormatSpec(_))
        ));
    }
}
