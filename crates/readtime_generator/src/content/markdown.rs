use std::path::{Path, PathBuf};

use anyhow::Context as _;
use pulldown_cmark::{html, Parser};
use tokio::fs;

use crate::Context;

pub const TEMPLATE_FILE_NAME: &str = "_template.html";

const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>{{link}}</title></head>
<body><article>{{md_content}}</article></body>
</html>
"#;

pub fn render(markdown: &str) -> String {
    let parser = Parser::new(markdown);

    let mut html = String::new();
    html::push_html(&mut html, parser);
    html
}

/// Nearest `_template.html` in the directories between `path` and the project root.
pub fn find_template(project: &Path, path: &Path) -> Option<PathBuf> {
    path.ancestors()
        .skip(1)
        .take_while(|directory| directory.starts_with(project))
        .map(|directory| directory.join(TEMPLATE_FILE_NAME))
        .find(|template| template.exists())
}

pub async fn load_template(context: &Context, path: &Path) -> anyhow::Result<String> {
    let Some(template_path) = find_template(Path::new(&context.args.project), path) else {
        tracing::trace!(
            "Template not found for file '{}', using the default one.",
            path.display()
        );
        return Ok(DEFAULT_TEMPLATE.to_owned());
    };

    fs::read_to_string(&template_path)
        .await
        .with_context(|| format!("Unable to read template '{}'.", template_path.display()))
}
