//! Output Rendering
//!
//! Config warnings and fatal errors. Progress and summaries go through the
//! event sinks; this module covers what happens outside a deploy run.

use crate::config::ConfigWarning;
use crate::error::{DeployError, EXIT_FAILURE};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::UiContext;

/// Exit code for an error returned from `run`
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<DeployError>()
        .map(DeployError::exit_code)
        .unwrap_or(EXIT_FAILURE)
}

/// One line per unknown config key
pub fn render_config_warning(warning: &ConfigWarning, ui: &UiContext) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    let mut text = format!("unknown config key '{}' in {}", warning.key, location);
    if let Some(suggestion) = &warning.suggestion {
        text.push_str(&format!(" (did you mean '{}'?)", suggestion));
    }
    format!(
        "{} {}",
        Icon::Warning.colored(ui.color, ui.unicode),
        ColoredText::warning(text).render(ui.color)
    )
}

pub fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    for warning in warnings {
        if ui.json {
            let json = serde_json::json!({
                "event": "config_warning",
                "key": warning.key,
                "file": warning.file.display().to_string(),
                "line": warning.line,
                "suggestion": warning.suggestion,
            });
            println!("{}", json);
        } else {
            eprintln!("{}", render_config_warning(warning, ui));
        }
    }
}

/// Human-readable form of a fatal error
pub fn render_error(err: &anyhow::Error, ui: &UiContext) -> String {
    format!(
        "{} {}",
        Icon::Error.colored(ui.color, ui.unicode),
        ColoredText::error(format!("Error: {:#}", err)).render(ui.color)
    )
}

/// Report a fatal error in the active output mode
pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let json = serde_json::json!({
            "event": "error",
            "message": format!("{:#}", err),
            "exit_code": exit_code_for(err),
        });
        println!("{}", json);
    } else {
        eprintln!("{}", render_error(err, ui));
    }
}
