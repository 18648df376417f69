use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

use crate::display_model::BookDetail;

pub fn print_detail(detail: &BookDetail) {
    let color = std::io::stdout().is_terminal();

    if color {
        println!("{}", detail.title.bold());
    } else {
        println!("{}", detail.title);
    }
    println!("{}", detail.subtitle);

    if !detail.genres.is_empty() {
        println!("Genres: {}", detail.genres.join(", "));
    }

    println!();
    println!("{}", detail.description);
    println!();
    println!("Cover: {}", detail.image);
}
