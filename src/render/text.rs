//! Indented tree output for terminals.

use super::{AppRow, ConfigView, OutputFormat, RenderError, RenderOptions, ViewRenderer};
use crate::model::ConfigNode;
use crate::state::DisplayDirective;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Text renderer for shell output
#[derive(Debug, Default)]
pub struct TextRenderer;

impl TextRenderer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn write_node(
        &self,
        node: &ConfigNode,
        depth: usize,
        options: &RenderOptions,
        lines: &mut Vec<String>,
    ) {
        let pad = " ".repeat(depth * options.indent);
        let colored = options.colored;

        match node.children() {
            Some(children) => {
                let label = if node.is_anonymous {
                    ansi_color(&format!("[{}]", node.display_label()), "dim", colored)
                } else {
                    ansi_color(&format!("[{}]", node.display_label()), "cyan", colored)
                };
                lines.push(format!("{pad}{label}"));
                self.write_help(node, depth + 1, options, lines);
                for child in children {
                    self.write_node(child, depth + 1, options, lines);
                }
            }
            None => {
                let value = node.value().unwrap_or("");
                let mut line = format!(
                    "{pad}{} = {}",
                    ansi_color(&node.key, "bold", colored),
                    ansi_color(value, "green", colored)
                );
                if options.show_defaults {
                    if let Some(default) = node.default_value() {
                        if default != value {
                            line.push_str(&ansi_color(
                                &format!("  (default: {default})"),
                                "dim",
                                colored,
                            ));
                        }
                    }
                }
                lines.push(line);
                self.write_help(node, depth + 1, options, lines);
            }
        }
    }

    fn write_help(
        &self,
        node: &ConfigNode,
        depth: usize,
        options: &RenderOptions,
        lines: &mut Vec<String>,
    ) {
        if !options.show_help {
            return;
        }
        let pad = " ".repeat(depth * options.indent);
        for help_line in node.help_text().lines().map(str::trim).filter(|l| !l.is_empty()) {
            lines.push(format!(
                "{pad}{}",
                ansi_color(&format!("# {help_line}"), "dim", options.colored)
            ));
        }
    }
}

impl ViewRenderer for TextRenderer {
    fn render_view(
        &self,
        view: &ConfigView<'_>,
        options: &RenderOptions,
    ) -> Result<String, RenderError> {
        let mut lines = Vec::new();

        match view.directive {
            DisplayDirective::Nothing => {
                if view.filter.is_empty() {
                    lines.push(format!("No configuration found for '{}'", view.app));
                } else {
                    lines.push(format!(
                        "No configuration found for '{}' matching \"{}\"",
                        view.app, view.filter
                    ));
                }
            }
            DisplayDirective::EmptySection(root) => {
                lines.push(ansi_color(root.display_label(), "bold", options.colored));
                lines.push(ansi_color(
                    "(no configuration entries)",
                    "yellow",
                    options.colored,
                ));
            }
            DisplayDirective::Tree(root) => {
                lines.push(ansi_color(root.display_label(), "bold", options.colored));
                if let Some(conf_dir) = view.conf_dir.filter(|d| !d.is_empty()) {
                    lines.push(ansi_color(
                        &format!("conf_dir: {conf_dir}"),
                        "dim",
                        options.colored,
                    ));
                }
                self.write_help(root, 1, options, &mut lines);
                for child in root.children().unwrap_or_default() {
                    self.write_node(child, 1, options, &mut lines);
                }
            }
        }

        Ok(lines.join("\n"))
    }

    fn render_apps(
        &self,
        rows: &[AppRow<'_>],
        conf_dir: &str,
        options: &RenderOptions,
    ) -> Result<String, RenderError> {
        let mut lines = Vec::new();
        let name_width = rows
            .iter()
            .map(|r| r.app.name.chars().count())
            .max()
            .unwrap_or(0)
            .max("APP".len());
        let display_width = rows
            .iter()
            .map(|r| r.app.display_name.chars().count())
            .max()
            .unwrap_or(0)
            .max("NAME".len());

        lines.push(ansi_color(
            &format!(
                "{:<name_width$}  {:<display_width$}  {:<3}  CONFIG",
                "APP", "NAME", "UI"
            ),
            "bold",
            options.colored,
        ));
        for row in rows {
            lines.push(format!(
                "{:<name_width$}  {:<display_width$}  {:<3}  {}",
                row.app.name,
                row.app.display_name,
                if row.app.has_ui { "yes" } else { "no" },
                if row.has_config { "yes" } else { "no" },
            ));
        }
        if !conf_dir.is_empty() {
            lines.push(String::new());
            lines.push(ansi_color(
                &format!("conf_dir: {conf_dir}"),
                "dim",
                options.colored,
            ));
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Text
    }
}
