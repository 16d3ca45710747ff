//! Text frames for the console.

use std::fmt::Write as _;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use wf_core::{CommandHelp, Participant, Point3D, Region};
use wf_fiction::{ConversationView, FrameBuilder, GameInfo, SceneView};

/// Builds plain or coloured text frames. Colour is switched globally through
/// [`colored::control`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFrameBuilder;

impl TextFrameBuilder {
    /// Create a builder.
    pub fn new() -> Self {
        Self
    }
}

/// A table of commands and what they do.
pub fn command_table(commands: &[CommandHelp]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Command", "Description"]);
    for help in commands {
        table.add_row(vec![&help.command, &help.description]);
    }
    table
}

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}", format!("== {title} ==").bold().cyan());
}

fn message(out: &mut String, message: Option<&str>) {
    if let Some(text) = message.filter(|m| !m.is_empty()) {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", text.yellow());
    }
}

fn commands(out: &mut String, commands: &[CommandHelp]) {
    if commands.is_empty() {
        return;
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", command_table(commands));
}

fn list(out: &mut String, label: &str, names: &[String]) {
    if !names.is_empty() {
        let _ = writeln!(out, "{} {}", format!("{label}:").bold(), names.join(", "));
    }
}

impl FrameBuilder for TextFrameBuilder {
    type Frame = String;

    fn build_scene(&self, view: &SceneView<'_>) -> String {
        let mut out = String::new();
        heading(&mut out, view.room.identifier.name());
        let _ = writeln!(out, "{}", view.description);
        let _ = writeln!(out);

        let exits: Vec<String> = view
            .room
            .exits()
            .iter()
            .filter(|e| e.is_player_visible)
            .map(|e| {
                if e.is_locked() {
                    format!("{} (locked)", e.direction)
                } else {
                    e.direction.to_string()
                }
            })
            .collect();
        list(&mut out, "Exits", &exits);

        let items: Vec<String> = view
            .room
            .items()
            .iter()
            .filter(|i| i.is_player_visible)
            .map(|i| i.identifier.to_string())
            .collect();
        list(&mut out, "Items", &items);

        let people: Vec<String> = view
            .room
            .characters()
            .iter()
            .filter(|c| c.is_player_visible)
            .map(|c| c.identifier.to_string())
            .collect();
        list(&mut out, "People", &people);

        let nearby: Vec<String> = view
            .view_point
            .iter()
            .filter(|(d, _)| view.room.find_exit(*d).is_some_and(|e| e.is_player_visible))
            .map(|(d, room)| {
                if room.has_been_visited {
                    format!("{} ({d})", room.identifier)
                } else {
                    format!("somewhere unexplored ({d})")
                }
            })
            .collect();
        list(&mut out, "Nearby", &nearby);

        message(&mut out, view.message);
        commands(&mut out, &view.commands);
        out
    }

    fn build_conversation(&self, view: &ConversationView<'_>) -> String {
        let mut out = String::new();
        heading(&mut out, &format!("Talking to {}", view.character));

        for entry in view.conversation.log() {
            let speaker = match entry.participant {
                Participant::Player => "You".green().to_string(),
                Participant::Other => view.character.to_string().magenta().to_string(),
            };
            let _ = writeln!(out, "{speaker}: {}", entry.line);
        }

        if let Some(paragraph) = view.conversation.current_paragraph() {
            if !paragraph.responses.is_empty() {
                let _ = writeln!(out);
                for (n, response) in paragraph.responses.iter().enumerate() {
                    let _ = writeln!(out, "  {}. {}", n + 1, response.line);
                }
            }
        }

        // The latest line is already in the transcript.
        let last = view.conversation.log().last().map(|e| e.line.as_str());
        let repeated = |m: &&str| last.is_some_and(|line| m.ends_with(line));
        message(&mut out, view.message.filter(|m| !repeated(m)));
        commands(&mut out, &view.commands);
        out
    }

    fn build_end(&self, title: &str, description: &str) -> String {
        let mut out = String::new();
        heading(&mut out, title);
        let _ = writeln!(out, "{description}");
        out
    }

    fn build_about(&self, info: &GameInfo) -> String {
        let mut out = String::new();
        heading(&mut out, &info.name);
        if !info.description.is_empty() {
            let _ = writeln!(out, "{}", info.description);
        }
        let _ = writeln!(out, "{}", format!("by {}", info.author).dimmed());
        out
    }

    fn build_help(&self, commands: &[CommandHelp]) -> String {
        let mut out = String::new();
        heading(&mut out, "Help");
        let _ = writeln!(out, "{}", command_table(commands));
        out
    }

    fn build_map(&self, region: &Region, show_key: bool) -> String {
        let mut out = String::new();
        heading(&mut out, region.identifier.name());

        let Some(here) = region.current_position() else {
            let _ = writeln!(out, "Nothing to show.");
            return out;
        };
        let level: Vec<(Point3D, bool)> = region
            .rooms()
            .filter(|(p, _)| p.z == here.z)
            .map(|(p, room)| (p, room.has_been_visited))
            .collect();

        // Only rows and columns holding a room are drawn.
        let mut xs: Vec<i32> = level.iter().map(|(p, _)| p.x).chain([here.x]).collect();
        let mut ys: Vec<i32> = level.iter().map(|(p, _)| p.y).chain([here.y]).collect();
        xs.sort_unstable();
        xs.dedup();
        ys.sort_unstable();
        ys.dedup();

        // North is up, so rows run from the highest y down.
        for &y in ys.iter().rev() {
            let mut row = String::new();
            for &x in &xs {
                let point = Point3D::new(x, y, here.z);
                let cell = match level.iter().find(|(p, _)| *p == point) {
                    _ if point == here => "[@]".green().bold().to_string(),
                    Some((_, true)) => "[ ]".to_string(),
                    Some((_, false)) => "[?]".dimmed().to_string(),
                    None => "   ".to_string(),
                };
                row.push_str(&cell);
            }
            let _ = writeln!(out, "{}", row.trim_end());
        }

        if show_key {
            let _ = writeln!(out);
            let _ = writeln!(out, "[@] you   [ ] visited   [?] unexplored");
            let _ = writeln!(out, "Level {}", here.z);
        }
        out
    }
}
