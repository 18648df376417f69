use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

use super::truncate_for_display;
use crate::display_model::PageDisplay;

const TITLE_WIDTH: usize = 42;

pub fn print_page(page: &PageDisplay) {
    if page.previews.is_empty() {
        println!("No books match the current filter.");
        return;
    }

    let color = std::io::stdout().is_terminal();

    println!("{:>3}  {:<width$}  AUTHOR", "#", "TITLE", width = TITLE_WIDTH);
    println!("{}", "-".repeat(76));

    for (index, preview) in page.previews.iter().enumerate() {
        let title = format!(
            "{:<width$}",
            truncate_for_display(&preview.title, TITLE_WIDTH),
            width = TITLE_WIDTH
        );
        if color {
            println!("{:>3}  {}  {}", index + 1, title.bold(), preview.author);
        } else {
            println!("{:>3}  {}  {}", index + 1, title, preview.author);
        }
    }

    println!();
    println!(
        "Showing {} of {} matching book(s). {}",
        page.shown,
        page.total,
        page.more_label()
    );
}
