//! Template trait for wrapping rendered screenplays

use serde::Serialize;
use tinytemplate::TinyTemplate;

use crate::language::Screenplay;

/// Trait for templates that place a screenplay's markup into a document
pub trait Template {
    fn render(&self, screenplay: &Screenplay) -> Result<String, tinytemplate::error::Error>;
}

/// Values made available to a template. The markup fields are already HTML
/// and have to be used with the `unescaped` formatter; the title is plain
/// text.
#[derive(Serialize)]
pub(crate) struct Context<'a> {
    pub title: Option<&'a str>,
    pub title_page: &'a str,
    pub body: &'a str,
}

impl<'a> Context<'a> {
    pub(crate) fn new(screenplay: &'a Screenplay) -> Context<'a> {
        Context {
            title: screenplay
                .title
                .as_deref(),
            title_page: &screenplay.title_page,
            body: &screenplay.body,
        }
    }
}

pub(crate) fn apply(text: &str, screenplay: &Screenplay) -> Result<String, tinytemplate::error::Error> {
    let mut tt = TinyTemplate::new();
    tt.add_template("screenplay", text)?;

    let context = Context::new(screenplay);
    tt.render("screenplay", &context)
}
