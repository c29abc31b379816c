//! Terminal output helpers

use colored::*;
use std::fmt::Display;

/// Print a section header with an underline
pub fn section_header_with_line(title: &str) {
    println!("\n{}", format!("▶ {}", title).bold().cyan());
    println!("{}", "═".repeat(60).dimmed());
}

/// Print a subsection header
pub fn subsection_header(title: &str) {
    println!("{}", title.bold());
}

/// Print a single tree item, optionally with a value
pub fn tree_item(last: bool, key: &str, value: Option<&str>) {
    let prefix = if last { "└─" } else { "├─" };
    match value {
        Some(value) => println!("{} {}: {}", prefix, key, value),
        None => println!("{} {}", prefix, key),
    }
}

/// Print a titled tree section with nested items
pub fn tree_section(title: &str, items: Vec<(&str, String)>, last: bool) {
    let prefix = if last { "└─" } else { "├─" };
    println!("{} {}", prefix, title.bold());

    let indent = if last { "   " } else { "│  " };
    for (i, (key, value)) in items.iter().enumerate() {
        let item_prefix = if i == items.len() - 1 { "└─" } else { "├─" };
        if key.is_empty() {
            println!("{}  {} {}", indent, item_prefix, value);
        } else {
            println!("{}  {} {}: {}", indent, item_prefix, key, value);
        }
    }
}

/// Print a success message
pub fn success(msg: &str) {
    eprintln!("{} {}", "✓".green(), msg.green());
}

/// Format a number with thousands separators
pub fn format_number<T: Display>(n: T) -> String {
    let s = n.to_string();

    let (is_negative, digits) = if let Some(stripped) = s.strip_prefix('-') {
        (true, stripped)
    } else {
        (false, s.as_str())
    };

    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    if is_negative {
        result.push('-');
    }

    result.chars().rev().collect()
}
