use chrono::{DateTime, Utc};
use colored::Colorize;
use notekeep::api::{CmdMessage, MessageLevel};
use notekeep::model::Note;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const PIN_MARKER: &str = "⚲";
const ARCHIVE_MARKER: &str = "▣";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

/// One line per note. `searching` picks the empty-list wording.
pub fn print_notes(notes: &[Note], preview_length: usize, searching: bool) {
    if notes.is_empty() {
        if searching {
            println!("No notes match your search.");
        } else {
            println!("No notes found. Use `notekeep create` to add a new note.");
        }
        return;
    }

    for note in notes {
        let idx_str = format!("{}. ", note.id);
        let left_prefix = if note.pinned {
            format!("  {} ", PIN_MARKER)
        } else {
            "    ".to_string()
        };
        let right_suffix = if note.archived {
            format!("{} ", ARCHIVE_MARKER)
        } else {
            "  ".to_string()
        };

        let preview: String = note
            .plain_content()
            .chars()
            .take(preview_length)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let mut title_content = if preview.trim().is_empty() {
            note.title.clone()
        } else {
            format!("{} {}", note.title, preview.trim())
        };
        if !note.tags.is_empty() {
            let tags: Vec<String> = note.tags.iter().map(|t| format!("#{}", t)).collect();
            title_content = format!("{} {}", title_content, tags.join(" "));
        }

        let fixed_width = left_prefix.width() + idx_str.width() + right_suffix.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let title_display = truncate_to_width(&title_content, available);
        let padding = available.saturating_sub(title_display.width());

        let idx_colored = if note.pinned {
            idx_str.yellow()
        } else if note.archived {
            idx_str.dimmed()
        } else {
            idx_str.normal()
        };

        println!(
            "{}{}{}{}{}{}",
            left_prefix,
            idx_colored,
            title_display,
            " ".repeat(padding),
            right_suffix,
            format_time_ago(note.timestamp).dimmed()
        );
    }
}

pub fn print_full_notes(notes: &[Note]) {
    for (i, note) in notes.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!("{} {}", note.id.to_string().yellow(), note.title.bold());
        let mut details = vec![format!("category: {}", note.category)];
        if !note.tags.is_empty() {
            details.push(format!("tags: {}", note.tags.join(", ")));
        }
        if note.pinned {
            details.push("pinned".to_string());
        }
        if note.archived {
            details.push("archived".to_string());
        }
        println!("{}", details.join(" | ").dimmed());
        println!(
            "{}",
            format!(
                "created {} | edited {}",
                note.timestamp.format("%b %-d, %Y %H:%M"),
                note.last_edited.format("%b %-d, %Y %H:%M")
            )
            .dimmed()
        );
        println!("--------------------------------");
        println!("{}", note.plain_content());
        if let Some(image) = &note.image {
            let kind = image
                .strip_prefix("data:")
                .and_then(|rest| rest.split(';').next())
                .unwrap_or("image");
            println!("{}", format!("[{} attached, {} bytes encoded]", kind, image.len()).dimmed());
        }
    }
}

pub fn print_categories(categories: &[String]) {
    for category in categories {
        println!("{}", category);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
