use colored::*;
use cssref::api::{CmdMessage, MessageLevel};
use cssref::config::CssRefConfig;
use cssref::model::{Category, CssProperty, Difficulty};
use cssref::search::SearchStats;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 22;
const DIFFICULTY_MARKER: &str = "●";

pub struct ListStyle {
    pub line_width: usize,
    pub show_icons: bool,
}

impl From<&CssRefConfig> for ListStyle {
    fn from(config: &CssRefConfig) -> Self {
        Self {
            line_width: config.line_width,
            show_icons: config.show_icons,
        }
    }
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

fn difficulty_marker(difficulty: Difficulty) -> ColoredString {
    match difficulty {
        Difficulty::Beginner => DIFFICULTY_MARKER.green(),
        Difficulty::Intermediate => DIFFICULTY_MARKER.yellow(),
        Difficulty::Advanced => DIFFICULTY_MARKER.red(),
    }
}

fn icon_for<'a>(categories: &'a [Category], property: &CssProperty) -> &'a str {
    categories
        .iter()
        .find(|c| c.id == property.category)
        .map(|c| c.icon.as_str())
        .unwrap_or("")
}

pub fn print_properties(properties: &[CssProperty], categories: &[Category], style: &ListStyle) {
    if properties.is_empty() {
        println!("No properties found.");
        return;
    }

    for property in properties {
        let icon = if style.show_icons {
            format!("{} ", icon_for(categories, property))
        } else {
            String::new()
        };
        let prefix = format!("  {}", icon);
        let id = pad_to_width(&truncate_to_width(&property.id, ID_WIDTH), ID_WIDTH);

        // prefix + marker + space + id + space
        let fixed = prefix.width() + DIFFICULTY_MARKER.width() + 1 + ID_WIDTH + 1;
        let available = style.line_width.saturating_sub(fixed);
        let description = truncate_to_width(&property.description, available);

        println!(
            "{}{} {} {}",
            prefix,
            difficulty_marker(property.difficulty),
            id.bold(),
            description.dimmed()
        );
    }
}

pub fn print_stats(stats: &SearchStats) {
    let mut line = format!(
        "Found {} of {} · {} categories · {} difficulty levels",
        stats.found, stats.total, stats.categories, stats.difficulties
    );
    if stats.has_query || stats.has_filters {
        line.push_str(" (filtered)");
    }
    println!();
    println!("{}", line.dimmed());
}

pub fn print_property(property: &CssProperty, category: Option<&Category>) {
    println!("{}", property.title.bold());
    println!("{}", property.description);
    println!();

    let category_label = match category {
        Some(c) => format!("{} {}", c.icon, c.name),
        None => property.category.clone(),
    };
    println!("  {:<12}{}", "category", category_label);
    println!(
        "  {:<12}{} {}",
        "difficulty",
        difficulty_marker(property.difficulty),
        property.difficulty
    );
    println!("  {:<12}{}", "path", property.path);
    if !property.tags.is_empty() {
        println!("  {:<12}{}", "tags", property.tags.join(", "));
    }
    let support = &property.browser_support;
    let mut engines = format!(
        "chrome {} · firefox {} · safari {} · edge {}",
        support.chrome, support.firefox, support.safari, support.edge
    );
    if let Some(ie) = &support.ie {
        engines.push_str(&format!(" · ie {}", ie));
    }
    println!("  {:<12}{}", "support", engines);

    if !property.examples.is_empty() {
        println!();
        println!("{}", "Examples".bold());
        for example in &property.examples {
            println!("  {}", example.title.underline());
            println!("    {}", example.code.cyan());
            if !example.description.is_empty() {
                println!("    {}", example.description.dimmed());
            }
        }
    }

    if let Some(task) = &property.task {
        println!();
        println!("{}", "Task".bold());
        println!("  {}", task.description);
        println!("  {} {}", "solution:".dimmed(), task.solution.cyan());
    }

    if !property.related_properties.is_empty() {
        println!();
        println!(
            "{} {}",
            "Related:".dimmed(),
            property.related_properties.join(", ")
        );
    }
}

pub fn print_categories(categories: &[Category], properties: &[CssProperty]) {
    if categories.is_empty() {
        println!("No categories.");
        return;
    }

    for category in categories {
        let count = properties
            .iter()
            .filter(|p| p.category == category.id)
            .count();
        println!(
            "  {} {} {} {}",
            category.icon,
            pad_to_width(&category.id, 10).bold(),
            pad_to_width(&format!("({})", count), 5),
            category.description.dimmed()
        );
    }
}

pub fn print_config(config: &CssRefConfig) {
    for (key, value) in config.entries() {
        println!("{} = {}", key, value);
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

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
