use crate::display_model::OptionRow;

pub fn print_options(kind: &str, rows: &[OptionRow]) {
    if rows.is_empty() {
        println!("No {}s in the catalog.", kind);
        return;
    }

    println!("{:<28} NAME", "ID");
    println!("{}", "-".repeat(64));
    for row in rows {
        println!("{:<28} {}", row.id, row.name);
    }
    println!();
    println!("{} {}(s)", rows.len(), kind);
}
