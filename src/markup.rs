/// Escape text for use inside HTML element content or a quoted attribute.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("/p?a=1&b=2"), "/p?a=1&amp;b=2");
        assert_eq!(escape(r#"<b class="x">O'Neil</b>"#), "&lt;b class=&quot;x&quot;&gt;O&#39;Neil&lt;/b&gt;");
    }
}
