//! Built in and user supplied page templates

use tracing::debug;

use crate::language::Screenplay;

use super::template::apply;
use super::Template;

static PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8" />
<title>{{ if title }}{title}{{ else }}Untitled{{ endif }}</title>
<style>
body \{ font-family: "Courier Prime", "Courier New", monospace; max-width: 40em; margin: 2em auto; }
h1, .credit, .authors, .source, .notes, .draft-date, .date, .contact, .copyright \{ text-align: center; }
h2 \{ text-align: right; }
h4, .parenthetical \{ margin: 0 0 0 12em; }
.dialogue p \{ margin: 0 8em 1em 6em; }
.dual-dialogue \{ display: flex; }
.dual-dialogue .dialogue \{ flex: 1; }
.dual-dialogue h4 \{ margin-left: 4em; }
.dual-dialogue .dialogue p \{ margin: 0 1em 1em 1em; }
.centered \{ text-align: center; }
.section, .synopsis \{ color: #888888; }
.bold \{ font-weight: bold; }
.italic \{ font-style: italic; }
.underline \{ text-decoration: underline; }
</style>
</head>
<body>
<section class="title-page">{title_page | unescaped}</section>
<section class="script">{body | unescaped}</section>
</body>
</html>
"#;

/// The built in standalone HTML page.
pub struct Page;

impl Template for Page {
    fn render(&self, screenplay: &Screenplay) -> Result<String, tinytemplate::error::Error> {
        apply(PAGE, screenplay)
    }
}

/// A template supplied by the user, with the same variables as [`Page`]:
/// `title`, `title_page`, and `body`.
pub struct Custom<'t> {
    text: &'t str,
}

impl<'t> Custom<'t> {
    pub fn new(text: &'t str) -> Custom<'t> {
        Custom { text }
    }
}

impl Template for Custom<'_> {
    fn render(&self, screenplay: &Screenplay) -> Result<String, tinytemplate::error::Error> {
        debug!("Using custom template, {} bytes", self.text.len());
        apply(self.text, screenplay)
    }
}
