use crate::markup::escape;

const TURBO_SCRIPT: &str =
    "https://cdn.jsdelivr.net/npm/@hotwired/turbo@8.0.4/dist/turbo.es2017-esm.min.js";

const STYLE: &str = "\
body { font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 56rem; }
nav a { margin-right: 1rem; }
table.players { border-collapse: collapse; width: 100%; }
table.players th, table.players td { padding: .4rem .6rem; border-bottom: 1px solid #ddd; text-align: left; }
.grid .row { display: grid; grid-template-columns: 4rem 1fr 6rem 6rem 8rem 8rem; padding: .4rem .6rem; border-bottom: 1px solid #ddd; }
.grid .head { font-weight: bold; }
.loading, .load-more { display: block; padding: 1rem; color: #777; }
";

/// Full HTML document with the page chrome shared by every listing.
pub fn document(title: &str, content: &str) -> String {
    let title = escape(title);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<script type="module" src="{TURBO_SCRIPT}"></script>
<style>{STYLE}</style>
</head>
<body>
<h1>{title}</h1>
<nav><a href="/players/frames">Frames</a><a href="/players/stream">Stream</a><a href="/api/players">JSON</a></nav>
{content}
</body>
</html>
"#
    )
}
