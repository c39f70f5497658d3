//! Terminal rendering of view models.
//!
//! Everything here only prints; the decisions were made by the controllers.
//! Failures are not rendered here, they end the command as errors.

use colored::Colorize;
use portal_application::{PageChrome, Panel, Submitted};
use portal_core::model::FeatureStatus;
use portal_core::view::{FeatureMapView, FeedView, ModuleGridView, NavLink, TaskPill, TaskSelector};

pub fn chrome(chrome: &PageChrome) {
    let links: Vec<String> = chrome
        .navigation
        .links
        .iter()
        .map(|link| {
            let label = nav_label(link);
            if link.active {
                label.bold().underline().to_string()
            } else {
                label
            }
        })
        .collect();
    println!(
        "{}  {}",
        links.join("  "),
        format!(
            "[{}] [{}]",
            chrome.navigation.language_toggle, chrome.navigation.logout
        )
        .dimmed()
    );
    println!("{}", chrome.user_info.cyan());
    if let Some(header) = &chrome.header {
        println!();
        println!("{}", header.title.bright_magenta().bold());
        println!("{}", header.description.dimmed());
    }
    println!();
}

pub fn notice(text: &str) {
    eprintln!("{}", text.red());
}

pub fn panel(panel: &Panel) {
    println!("{}", panel.status.green());
    if let Some(output) = &panel.output {
        for line in output.lines() {
            println!("  {line}");
        }
    }
}

pub fn submitted(submitted: &Submitted) {
    panel(&submitted.panel);
    if let Some(view) = &submitted.feed {
        println!();
        feed(view);
    }
}

pub fn feed(view: &FeedView) {
    match view {
        FeedView::Empty(message) => println!("{}", message.dimmed()),
        FeedView::Cards(cards) => {
            for card in cards {
                println!("{}", card.title.bold());
                println!("  {}", card.body);
            }
        }
    }
}

pub fn section(title: &str, hint: &str) {
    println!("{}", title.bold());
    if !hint.is_empty() {
        println!("{}", hint.dimmed());
    }
}

pub fn grid(view: &ModuleGridView) {
    for card in &view.cards {
        println!("{}  {}", card.title.bold(), card.href.dimmed());
        if !card.description.is_empty() {
            println!("  {}", card.description);
        }
        println!("  {}", format!("{} -> portal open {}", card.call_to_action, card.key).cyan());
    }
}

pub fn selector(selector: &TaskSelector) {
    for pill in selector.pills() {
        let label = pill_label(pill);
        if pill.selected {
            println!("  {}", label.green());
        } else {
            println!("  {label}");
        }
    }
}

pub fn features(view: &FeatureMapView, error: Option<&str>) {
    if let Some(error) = error {
        eprintln!("{}", error.red());
        return;
    }
    for group in &view.groups {
        println!("{}", group.title.bold());
        for row in &group.rows {
            let badge = match row.status {
                FeatureStatus::Ready => row.badge.green(),
                FeatureStatus::InProgress => row.badge.yellow(),
                FeatureStatus::Planned => row.badge.blue(),
                FeatureStatus::Unknown => row.badge.normal(),
            };
            println!("  {}  {}", row.name, badge);
        }
    }
}

fn nav_label(link: &NavLink) -> String {
    format!("{} ({})", link.label, link.key)
}

fn pill_label(pill: &TaskPill) -> String {
    let mark = if pill.selected { "x" } else { " " };
    format!("[{mark}] {} ({})", pill.label, pill.id)
}
