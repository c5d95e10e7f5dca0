//! Templates for wrapping rendered screenplays into standalone documents

mod page;
mod template;

pub use page::{Custom, Page};
pub use template::Template;

use crate::language::Screenplay;

/// Render a screenplay using the specified template
pub fn fill(
    template: &impl Template,
    screenplay: &Screenplay,
) -> Result<String, tinytemplate::error::Error> {
    template.render(screenplay)
}
