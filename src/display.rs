use crate::errors::Result;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password};
use loginradius_core::{Event, UserProfile};

/// Table formatting utilities
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    max_widths: Vec<usize>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        let max_widths = headers.iter().map(|h| h.len()).collect();
        Self {
            headers,
            rows: Vec::new(),
            max_widths,
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        // Update max widths
        for (i, cell) in row.iter().enumerate() {
            if i < self.max_widths.len() {
                self.max_widths[i] = self.max_widths[i].max(cell.len());
            }
        }
        self.rows.push(row);
    }

    pub fn print(&self) {
        self.print_separator();
        self.print_header();
        self.print_separator();

        for row in &self.rows {
            self.print_row(row);
        }

        self.print_separator();
    }

    fn print_separator(&self) {
        print!("+");
        for &width in &self.max_widths {
            print!("{}", "-".repeat(width + 2));
            print!("+");
        }
        println!();
    }

    fn print_header(&self) {
        print!("|");
        for (i, header) in self.headers.iter().enumerate() {
            print!(" {:<width$} ", header.bold(), width = self.max_widths[i]);
            print!("|");
        }
        println!();
    }

    fn print_row(&self, row: &[String]) {
        print!("|");
        for (i, cell) in row.iter().enumerate() {
            let width = if i < self.max_widths.len() {
                self.max_widths[i]
            } else {
                0
            };
            print!(" {:<width$} ", cell, width = width);
            print!("|");
        }
        println!();
    }
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

pub fn print_info(message: &str) {
    println!("{} {}", "→".blue(), message);
}

pub fn print_warning(message: &str) {
    println!("{} {}", "!".yellow().bold(), message);
}

pub fn prompt_input(prompt: &str, default: Option<&str>) -> Result<String> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme).with_prompt(prompt);
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    Ok(input.interact_text()?)
}

pub fn prompt_password(prompt: &str) -> Result<String> {
    Ok(Password::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact()?)
}

pub fn prompt_confirm(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Render a profile as aligned key/value lines, skipping absent fields.
pub fn display_profile(profile: &UserProfile) {
    let mut rows: Vec<(&str, String)> = Vec::new();

    if let Some(uid) = &profile.uid {
        rows.push(("Uid", uid.clone()));
    }
    if let Some(email) = profile.primary_email() {
        rows.push(("Email", email.to_string()));
    }
    if let Some(username) = &profile.user_name {
        rows.push(("Username", username.clone()));
    }
    if let Some(name) = &profile.full_name {
        rows.push(("Name", name.clone()));
    } else {
        match (&profile.first_name, &profile.last_name) {
            (Some(first), Some(last)) => rows.push(("Name", format!("{} {}", first, last))),
            (Some(first), None) => rows.push(("Name", first.clone())),
            _ => {}
        }
    }
    if let Some(provider) = &profile.provider {
        rows.push(("Provider", provider.clone()));
    }
    if let Some(city) = &profile.city {
        rows.push(("City", city.clone()));
    }
    if let Some(created) = &profile.created_date {
        rows.push(("Created", created.clone()));
    }

    if rows.is_empty() {
        println!("{}", "Profile has no displayable fields.".yellow());
        return;
    }

    let key_width = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    for (key, value) in rows {
        println!("{:>width$}: {}", key.bold(), value, width = key_width);
    }
}

/// Display events in a formatted table
pub fn display_events_table(events: &[Event]) {
    if events.is_empty() {
        println!("{}", "No events found.".yellow());
        return;
    }

    let mut table = Table::new(vec![
        "Time".to_string(),
        "Name".to_string(),
        "Provider".to_string(),
        "Value".to_string(),
    ]);

    for event in events {
        let time = event
            .created_at()
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
            .or_else(|| event.created_date.clone())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            time,
            event.name.clone().unwrap_or_else(|| "-".to_string()),
            event.provider.clone().unwrap_or_else(|| "-".to_string()),
            event.value.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }

    table.print();
    println!("{} event(s)", events.len());
}
