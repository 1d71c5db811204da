//! Shell scripts run inside the attended terminal session.

use std::path::Path;

use include_dir::{Dir, include_dir};
use minijinja::{Environment, context};

use crate::domain::AppError;

static SCRIPT_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/scripts");

const CHOICE_TEMPLATE: &str = "choice.sh.j2";
const TEXT_TEMPLATE: &str = "text.sh.j2";

/// Wrap `value` in single quotes so bash reads it back literally.
pub fn sh_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r#"'"'"'"#))
}

/// Numbered menu over `choices`; re-prompts until a listed entry is picked.
pub fn choice_script(
    message: &str,
    choices: &[String],
    answer_path: &Path,
) -> Result<String, AppError> {
    render(
        CHOICE_TEMPLATE,
        context! {
            banner => format!("{message} (^C to abort)"),
            choices => choices,
            answer_path => answer_path.display().to_string(),
        },
    )
}

/// Single-line read; any reply, including an empty one, is recorded.
pub fn text_script(message: &str, answer_path: &Path) -> Result<String, AppError> {
    render(
        TEXT_TEMPLATE,
        context! {
            prompt => format!("{message} "),
            answer_path => answer_path.display().to_string(),
        },
    )
}

/// argv that runs `script` under bash.
pub fn bash_command(script: String) -> Vec<String> {
    vec!["bash".to_string(), "-c".to_string(), script]
}

fn render(name: &str, ctx: minijinja::Value) -> Result<String, AppError> {
    let source = SCRIPT_DIR
        .get_file(name)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| AppError::Template(format!("script template '{name}' is missing")))?;

    let mut env = Environment::new();
    env.add_filter("sh_quote", |value: String| sh_quote(&value));

    let template = env
        .template_from_str(source)
        .map_err(|e| AppError::Template(format!("failed to parse '{name}': {e}")))?;
    template
        .render(ctx)
        .map_err(|e| AppError::Template(format!("failed to render '{name}': {e}")))
}
