//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use crate::core::catalog::Catalog;
use crate::core::state::App;
use crate::core::theme::{Appearance, ThemePreference, ThemeState};

/// A small catalog with a known shape, independent of the shipped one.
///
/// - css: Properties (background w/ detail, background-clip, display w/o detail), Selectors
/// - html: Elements (Forms w/ detail, Text Content)
/// - javascript: Built-ins (Array w/ full detail, Math w/ methods only)
/// - angular: disabled
pub const SAMPLE_CATALOG: &str = r#"
[[documents]]
key = "css"
name = "CSS"
language = "css"
enabled = true

[documents.overview]
title = "CSS Documentation"
description = "Cascading Style Sheets."

[[documents.overview.sections]]
title = "Getting Started"
content = "Selectors pick elements."

[[documents.overview.sections.links]]
name = "Selectors"
url = "https://developer.mozilla.org/en-US/docs/Web/CSS/CSS_selectors"

[[documents.sections]]
name = "Properties"

[[documents.sections.items]]
id = "css-background"
name = "background"

[[documents.sections.items]]
id = "css-background-clip"
name = "background-clip"

[[documents.sections.items]]
id = "css-display"
name = "display"
count = 12

[[documents.sections]]
name = "Selectors"

[[documents.sections.items]]
id = "css-class-selector"
name = "class"

[documents.details.css-background]
title = "background"
description = "Shorthand for all background properties."
syntax = "background: <bg-layer>#"

[[documents.details.css-background.properties]]
name = "background-color"
description = "Sets the background color."
example = "background-color: red;"

[[documents]]
key = "html"
name = "HTML"
language = "html"
enabled = true

[documents.overview]
title = "HTML Documentation"
description = "HyperText Markup Language."

[[documents.sections]]
name = "Elements"

[[documents.sections.items]]
id = "html-forms"
name = "Forms"

[[documents.sections.items]]
id = "html-text"
name = "Text Content"

[documents.details.html-forms]
title = "Forms"
description = "Collect user input."

[[documents.details.html-forms.properties]]
name = "action"
description = "URL that processes the submission."

[[documents]]
key = "javascript"
name = "JavaScript"
language = "js"
enabled = true

[documents.overview]
title = "JavaScript Documentation"
description = "The language of the web."
note = "Examples target ES2020."

[[documents.sections]]
name = "Built-ins"

[[documents.sections.items]]
id = "js-array"
name = "Array"

[[documents.sections.items]]
id = "js-math"
name = "Math"

[documents.details.js-array]
title = "Array"
description = "Ordered list of values."
syntax = "new Array(length)"

[[documents.details.js-array.examples]]
title = "Literal"
code = "const xs = [1, 2, 3];"

[[documents.details.js-array.methods]]
name = "push()"
description = "Appends elements."
example = "xs.push(4);"
returns = "New length"

[[documents.details.js-array.properties]]
name = "length"
description = "Number of elements."

[documents.details.js-math]
title = "Math"
description = "Mathematical constants and functions."

[[documents.details.js-math.methods]]
name = "Math.max()"
description = "Largest of the arguments."

[[documents]]
key = "angular"
name = "Angular"
enabled = false
"#;

pub fn sample_catalog() -> Catalog {
    Catalog::from_toml_str(SAMPLE_CATALOG).expect("sample catalog is valid")
}

/// Creates a test App over the sample catalog with a dark system appearance.
pub fn test_app() -> App {
    App::new(
        Arc::new(sample_catalog()),
        ThemeState::new(ThemePreference::Auto, Appearance::Dark),
    )
}
