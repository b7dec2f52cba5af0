use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::{Map, Value, json};
use std::collections::BTreeMap;

use super::traits::{Notifier, Panel, Renderer, Surface};
use crate::app::forms::FormKind;
use crate::app::navigator::{Container, Section};
use crate::presentation::presenters::{SubmitFrom, present_form};
use crate::presentation::view_models::{
    CommandResultViewModel, CreateView, Notice, OutputFormat,
};

fn stdout_has_color() -> bool {
    std::io::stdout().is_terminal()
}

pub struct ConsoleRenderer {
    json_mode: bool,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool) -> Self {
        Self {
            json_mode,
            color: stdout_has_color(),
        }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView + Send + Sync,
    {
        if self.json_mode {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            if self.color {
                println!("{} {}", badge.icon(), badge.label.bold());
            } else {
                println!("{} {}", badge.icon(), badge.label);
            }
            println!();
        }

        print!("{}", result.content.create_view());

        if !result.suggestions.is_empty() {
            if self.color {
                println!("\n{}", "💡 Tips:".yellow().bold());
            } else {
                println!("\n💡 Tips:");
            }
            for tip in &result.suggestions {
                print!("  • {}", tip.description);
                if let Some(cmd) = &tip.command {
                    if self.color {
                        print!(": {}", cmd.cyan());
                    } else {
                        print!(": {}", cmd);
                    }
                }
                println!();
            }
        }

        Ok(())
    }
}

/// Paints the active section to stdout on every commit.
///
/// Panels are kept per container, so a section shows the last content
/// filled into its containers even if it was filled while another section
/// was active (the dropdowns work this way).
pub struct ConsoleSurface {
    format: OutputFormat,
    submit_from: SubmitFrom,
    color: bool,
    panels: BTreeMap<Container, Panel>,
    active: Option<Section>,
}

impl ConsoleSurface {
    pub fn new(format: OutputFormat, submit_from: SubmitFrom) -> Self {
        Self {
            format,
            submit_from,
            color: stdout_has_color(),
            panels: BTreeMap::new(),
            active: None,
        }
    }

    pub fn panel(&self, container: Container) -> Option<&Panel> {
        self.panels.get(&container)
    }

    /// Plain-text rendering of a section with whatever its containers hold.
    pub fn render_text(&self, section: Section) -> String {
        let heading = format!("== {} ==", section.title());
        let mut blocks = vec![if self.color {
            heading.bold().to_string()
        } else {
            heading
        }];

        if let Some(form) = section.form() {
            blocks.push(present_form(form, self.submit_from).to_string());
        }

        for container in section.containers() {
            let Some(panel) = self.panels.get(container) else {
                continue;
            };
            match section.form().and_then(|form| choice_field(form, *container)) {
                Some(field) => blocks.push(format!("Choices for {}:\n{}", field, panel.text)),
                None => blocks.push(panel.text.clone()),
            }
        }

        let mut text = blocks
            .iter()
            .map(|b| b.trim_end_matches('\n'))
            .collect::<Vec<_>>()
            .join("\n\n");
        text.push('\n');
        text
    }

    /// Machine-readable rendering: `{"section", "containers", "form"?}`.
    pub fn render_json(&self, section: Section) -> Value {
        let containers: Map<String, Value> = section
            .containers()
            .iter()
            .filter_map(|c| {
                self.panels
                    .get(c)
                    .map(|p| (c.as_str().to_string(), p.data.clone()))
            })
            .collect();

        let mut document = json!({
            "section": section.as_str(),
            "containers": containers,
        });
        if let Some(form) = section.form() {
            document["form"] = serde_json::to_value(present_form(form, self.submit_from))
                .unwrap_or(Value::Null);
        }
        document
    }
}

fn choice_field(form: FormKind, container: Container) -> Option<&'static str> {
    form.fields()
        .iter()
        .find(|spec| spec.choices == Some(container))
        .map(|spec| spec.name)
}

impl Surface for ConsoleSurface {
    fn fill(&mut self, container: Container, panel: Panel) {
        self.panels.insert(container, panel);
    }

    fn activate(&mut self, section: Section) {
        self.active = Some(section);
    }

    fn reset_form(&mut self, form: FormKind) {
        // Fields are passed per submission; there is no draft to clear.
        tracing::debug!(form = %form, "form reset");
    }

    fn commit(&mut self) {
        let Some(section) = self.active else {
            return;
        };
        match self.format {
            OutputFormat::Text => print!("{}", self.render_text(section)),
            OutputFormat::Json => match serde_json::to_string_pretty(&self.render_json(section)) {
                Ok(json) => println!("{}", json),
                Err(e) => tracing::error!(error = %e, "cannot encode section"),
            },
        }
    }
}

pub struct ConsoleNotifier {
    format: OutputFormat,
    color: bool,
}

impl ConsoleNotifier {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: stdout_has_color(),
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, notice: Notice) {
        match self.format {
            OutputFormat::Text => {
                let badge = notice.badge();
                if self.color {
                    println!("{} {}", badge.icon(), badge.label.bold());
                } else {
                    println!("{} {}", badge.icon(), badge.label);
                }
            }
            OutputFormat::Json => {
                match serde_json::to_string_pretty(&json!({ "notice": notice })) {
                    Ok(json) => println!("{}", json),
                    Err(e) => tracing::error!(error = %e, "cannot encode notice"),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{SelectOption, SelectViewModel};

    fn surface() -> ConsoleSurface {
        ConsoleSurface {
            format: OutputFormat::Text,
            submit_from: SubmitFrom::Shell,
            color: false,
            panels: BTreeMap::new(),
            active: None,
        }
    }

    fn owner_choices() -> Panel {
        Panel::from_view_model(&SelectViewModel {
            options: vec![SelectOption {
                value: "1".to_string(),
                label: "Anna Petrova".to_string(),
            }],
        })
    }

    #[test]
    fn test_form_section_lists_choices() {
        let mut surface = surface();
        surface.fill(Container::OwnerSelect, owner_choices());

        let text = surface.render_text(Section::AddPet);
        assert!(text.starts_with("== Add pet ==\n\n"));
        assert!(text.contains("Submit with: add-pet name=<Name>"));
        assert!(text.ends_with("Choices for owner_id:\n  1  Anna Petrova\n"));
    }

    #[test]
    fn test_json_document_holds_only_section_containers() {
        let mut surface = surface();
        surface.fill(Container::OwnerSelect, owner_choices());
        surface.fill(
            Container::PetsList,
            Panel::new("#3 Rex\n", json!({"cards": []})),
        );

        let document = surface.render_json(Section::PetList);
        assert_eq!(document["section"], "pet-list");
        assert_eq!(document["containers"]["pets-list"], json!({"cards": []}));
        assert!(document["containers"].get("owner-select").is_none());
        assert!(document.get("form").is_none());
    }

    #[test]
    fn test_unfilled_section_shows_heading_only() {
        let text = surface().render_text(Section::OwnerDetail);
        assert_eq!(text, "== Owner ==\n");
    }
}
