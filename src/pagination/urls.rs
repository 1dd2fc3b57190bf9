/// Build paginated URL with &page= or ?page= based on existing params.
/// The first page (index 0) is addressed by the bare URL.
pub fn build_paginated_url(base_url: &str, page: usize) -> String {
    if is_first_page(page) {
        base_url.to_string()
    } else {
        append_param(base_url, "page", &page.to_string())
    }
}

/// Append one percent-encoded `key=value` pair to a URL
pub fn append_param(url: &str, key: &str, value: &str) -> String {
    let separator = determine_separator(url);
    format!(
        "{}{}{}={}",
        url,
        separator,
        urlencoding::encode(key),
        urlencoding::encode(value)
    )
}

fn is_first_page(page: usize) -> bool {
    page == 0
}

fn determine_separator(url: &str) -> char {
    if url.contains('?') { '&' } else { '?' }
}
