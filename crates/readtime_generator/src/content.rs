use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context as _;
use tokio::{fs, io::AsyncWriteExt, task::JoinSet};
use walkdir::WalkDir;

use crate::{content::content_variables::ContentVariables, Context};

pub mod content_variables;
pub mod front_matter;
pub mod markdown;
pub mod word_counter;

/// Renders every markdown document of the project, returns how many were written.
///
/// A document that fails is logged and skipped, the others are still generated.
pub async fn process_content(context: &Arc<Context>) -> anyhow::Result<usize> {
    let mut set = JoinSet::new();
    for file in collect_files_for_processing(&context.args.project_content()) {
        let context = context.clone();
        set.spawn(async move { process_file(context, file).await });
    }

    let mut written = 0;
    while let Some(result) = set.join_next().await {
        let result = match result {
            Ok(result) => result,
            Err(error) => {
                tracing::error!("Error in processing content: {}", error);
                continue;
            }
        };

        match result {
            Ok(()) => written += 1,
            Err(error) => {
                tracing::error!("Error in processing content: {:#}", error);
                continue;
            }
        }
    }

    Ok(written)
}

fn collect_files_for_processing(path: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for file in WalkDir::new(path).into_iter().filter_map(|file| file.ok()) {
        if !file.file_type().is_file() {
            continue;
        }

        if file.path().extension().and_then(|ext| ext.to_str()) != Some("md") {
            continue;
        }

        files.push(file.path().to_path_buf());
        tracing::trace!(
            "Added file '{}' to processing tasks.",
            file.path().display()
        );
    }

    files
}

async fn process_file(context: Arc<Context>, path: PathBuf) -> anyhow::Result<()> {
    tracing::trace!("Processing file '{}'.", path.display());

    let mut file_content = fs::read_to_string(&path)
        .await
        .with_context(|| format!("Unable to read file '{}'.", path.display()))?;
    let front_matter = front_matter::extract(&mut file_content);

    let mut variables = ContentVariables::new();
    variables.insert("link".to_owned(), context.get_file_link(&path)?);
    front_matter.export(&mut variables);

    word_counter::compute_read_time(&context.settings, &file_content, &front_matter, &mut variables)?;
    variables.insert("md_content".to_owned(), markdown::render(&file_content));

    let template = markdown::load_template(&context, &path).await?;
    let html = create_html_file(&template, &variables)
        .with_context(|| format!("Unable to fill template for '{}'.", path.display()))?;

    let mut output_path = Path::new(&context.args.output).join(
        path.strip_prefix(&context.args.project)
            .context("Unable to strip prefix.")?,
    );
    output_path.set_extension("html");

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).await?;
    }
    fs::File::create(&output_path)
        .await
        .with_context(|| format!("Unable to create file '{}'.", output_path.display()))?
        .write_all(html.as_bytes())
        .await?;

    tracing::info!("Generated '{}'.", output_path.display());
    Ok(())
}

fn create_html_file(template: &str, variables: &ContentVariables) -> anyhow::Result<String> {
    let html = set_variables(template, variables)?;

    #[cfg(not(debug_assertions))]
    let html = String::from_utf8(minify_html::minify(
        html.as_bytes(),
        &minify_html::Cfg::spec_compliant(),
    ))?;

    Ok(html)
}

/// Replaces `{{key}}` placeholders with known variables.
///
/// Unknown keys are left in place so a template can tell a missing value from an
/// empty one. Substituted values are not scanned again.
fn set_variables(template: &str, variables: &ContentVariables) -> anyhow::Result<String> {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        let end = match rest[start..].find("}}") {
            Some(end) => start + end + 2,
            None => anyhow::bail!(
                "Unable to find end of variable. In position {}.",
                template.len() - rest.len() + start
            ),
        };

        result.push_str(&rest[..start]);
        let key = rest[start + 2..end - 2].trim();
        match variables.get(key) {
            Some(value) => result.push_str(value),
            None => {
                tracing::trace!("Variable '{}' is not set.", key);
                result.push_str(&rest[start..end]);
            }
        }

        rest = &rest[end..];
    }

    result.push_str(rest);
    Ok(result)
}
