//! Subcommands and their handlers.
//!
//! Each handler calls one store operation and renders the result as plain
//! text; errors from the store carry a user-facing message.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Subcommand;
use linkbox_core::{
    Bookmark, BookmarkStore, LinkboxError, NewBookmark, Outcome, Theme, NEUTRAL_COLOR,
};

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Save a new link
    Add {
        url: String,
        title: String,
        /// Existing category to file the link under
        #[arg(long, default_value = "")]
        category: String,
        /// Create (if needed) and use this category instead
        #[arg(long, default_value = "")]
        new_category: String,
        /// Comma-separated tags
        #[arg(long, default_value = "")]
        tags: String,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// List all links, newest first
    List,
    /// Find links by title, url, notes, category or tag
    Search { query: String },
    /// Count a visit and print the link's url
    Open { id: i64 },
    /// Star or unstar a link
    Favorite { id: i64 },
    /// Delete a link
    Delete { id: i64 },
    /// Show categories with link counts
    Categories,
    /// Create a category
    AddCategory {
        name: String,
        #[arg(long, default_value = NEUTRAL_COLOR)]
        color: String,
    },
    /// Show link, category and tag totals
    Stats,
    /// Show how much of the storage quota is used
    Storage,
    /// Switch the color theme
    Theme { theme: Theme },
    /// Write all data to a dated JSON file
    Export {
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    /// Replace data from an export file
    Import { file: PathBuf },
    /// Delete all links and restore default categories
    Clear,
    /// Restore default settings
    ResetSettings,
}

pub fn run(store: &mut BookmarkStore, command: Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Add {
            url,
            title,
            category,
            new_category,
            tags,
            notes,
        } => {
            let input = NewBookmark {
                url,
                title,
                category,
                new_category,
                tags,
                notes,
            };
            let bookmark = store.add_bookmark(input).map_err(user_error)?;
            writeln!(out, "Link saved successfully! (id {})", bookmark.id)?;
        }
        Command::List => {
            let all: Vec<&Bookmark> = store.bookmarks().iter().collect();
            if all.is_empty() {
                writeln!(out, "No bookmarks yet. Add your first link to get started.")?;
            }
            print_bookmarks(store, &all, out)?;
        }
        Command::Search { query } => {
            let found = store.search(&query);
            if found.is_empty() {
                writeln!(out, "No results found.")?;
            }
            print_bookmarks(store, &found, out)?;
        }
        Command::Open { id } => match store.open_bookmark(id)? {
            Some(url) => writeln!(out, "{url}")?,
            None => return Err(anyhow!("No bookmark with id {id}")),
        },
        Command::Favorite { id } => match store.toggle_favorite(id)? {
            Some(true) => writeln!(out, "Added to favorites")?,
            Some(false) => writeln!(out, "Removed from favorites")?,
            None => return Err(anyhow!("No bookmark with id {id}")),
        },
        Command::Delete { id } => {
            report(store.delete_bookmark(id)?, "Bookmark deleted", out)?;
        }
        Command::Categories => {
            for summary in store.category_summaries() {
                let count = summary.bookmark_count;
                writeln!(
                    out,
                    "{:<20} {:<8} {} link{}",
                    summary.category.name,
                    summary.category.color,
                    count,
                    if count == 1 { "" } else { "s" }
                )?;
            }
        }
        Command::AddCategory { name, color } => {
            store.add_category(&name, &color).map_err(user_error)?;
            writeln!(out, "Category added successfully!")?;
        }
        Command::Stats => {
            let stats = store.compute_stats();
            writeln!(out, "Links:      {}", stats.total_links)?;
            writeln!(out, "Categories: {}", stats.total_categories)?;
            writeln!(out, "Tags:       {}", stats.total_tags)?;
        }
        Command::Storage => {
            let footprint = store.storage_footprint()?;
            writeln!(out, "Used:      {:.2} KB", footprint.used_kb())?;
            writeln!(out, "Available: {:.2} KB", footprint.available_kb())?;
            writeln!(out, "Filled:    {:.1}%", footprint.percent_used())?;
        }
        Command::Theme { theme } => {
            store.set_theme(theme)?;
            writeln!(out, "Theme changed to {theme}")?;
        }
        Command::Export { dir } => {
            let path = store
                .export_to_dir(&dir)
                .with_context(|| format!("Failed to export to {}", dir.display()))?;
            writeln!(out, "Data exported to {}", path.display())?;
        }
        Command::Import { file } => {
            let outcome = store.import_from_file(&file).map_err(user_error)?;
            report(outcome, "Data imported successfully!", out)?;
        }
        Command::Clear => {
            report(store.clear_all()?, "All data cleared", out)?;
        }
        Command::ResetSettings => {
            report(store.reset_settings()?, "Settings reset to default", out)?;
        }
    }
    Ok(())
}

fn report(outcome: Outcome, done: &str, out: &mut impl Write) -> Result<()> {
    match outcome {
        Outcome::Applied => writeln!(out, "{done}")?,
        Outcome::Cancelled => writeln!(out, "Cancelled")?,
    }
    Ok(())
}

fn print_bookmarks(store: &BookmarkStore, bookmarks: &[&Bookmark], out: &mut impl Write) -> Result<()> {
    for b in bookmarks {
        let star = if b.favorite { "*" } else { " " };
        writeln!(out, "{star} [{}] {}", b.id, b.title)?;
        writeln!(out, "    {}", b.url)?;
        writeln!(
            out,
            "    {} ({})  clicks: {}",
            b.display_category(),
            store.category_color(&b.category),
            b.clicks
        )?;
        if !b.tags.is_empty() {
            writeln!(out, "    tags: {}", b.tags.join(", "))?;
        }
        if !b.notes.is_empty() {
            writeln!(out, "    {}", b.notes)?;
        }
    }
    Ok(())
}

fn user_error(e: LinkboxError) -> anyhow::Error {
    anyhow!(e.user_message())
}
