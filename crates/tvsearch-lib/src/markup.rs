/// Reduce an HTML fragment to its text content.
///
/// Tags and comments are dropped, the bodies of `script` and `style`
/// elements are skipped and entities are decoded. A `<` that does not open a
/// tag is kept as text.
pub fn strip_markup(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(start) = rest.find('<') {
        text.push_str(&rest[..start]);
        let tail = &rest[start..];

        if let Some(comment) = tail.strip_prefix("<!--") {
            rest = match comment.find("-->") {
                Some(end) => &comment[end + 3..],
                None => "",
            };
            continue;
        }

        if !opens_tag(tail) {
            text.push('<');
            rest = &tail[1..];
            continue;
        }

        let Some(end) = tag_end(tail) else {
            // unterminated tag swallows the remainder
            rest = "";
            break;
        };

        let tag = &tail[1..end];
        rest = &tail[end + 1..];

        if let Some(name) = raw_text_element(tag) {
            rest = skip_raw_text(rest, name);
        }
    }
    text.push_str(rest);

    html_escape::decode_html_entities(&text).trim().to_string()
}

fn opens_tag(tail: &str) -> bool {
    matches!(
        tail[1..].chars().next(),
        Some(c) if c.is_ascii_alphabetic() || c == '/' || c == '!' || c == '?'
    )
}

/// Byte offset of the `>` closing the tag at the start of `tail`,
/// ignoring any `>` inside quoted attribute values.
fn tag_end(tail: &str) -> Option<usize> {
    let mut quote = None;
    for (i, c) in tail.char_indices().skip(1) {
        match (quote, c) {
            (None, '"' | '\'') => quote = Some(c),
            (Some(q), c) if q == c => quote = None,
            (None, '>') => return Some(i),
            _ => {}
        }
    }
    None
}

fn raw_text_element(tag: &str) -> Option<&'static str> {
    if tag.starts_with('/') || tag.ends_with('/') {
        return None;
    }
    let name = tag
        .split(|c: char| c.is_whitespace())
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    match name.as_str() {
        "script" => Some("script"),
        "style" => Some("style"),
        _ => None,
    }
}

fn skip_raw_text<'a>(rest: &'a str, name: &str) -> &'a str {
    let closing = format!("</{}", name);
    match rest.to_ascii_lowercase().find(&closing) {
        Some(start) => match rest[start..].find('>') {
            Some(end) => &rest[start + end + 1..],
            None => "",
        },
        None => "",
    }
}
