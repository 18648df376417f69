use bookdeck_types::Catalog;
use serde::Serialize;

/// One row of the author or genre table
#[derive(Debug, Clone, Serialize)]
pub struct OptionRow {
    pub id: String,
    pub name: String,
}

pub fn author_rows(catalog: &Catalog) -> Vec<OptionRow> {
    catalog
        .author_options()
        .into_iter()
        .map(|(id, name)| OptionRow {
            id: id.to_string(),
            name: name.to_string(),
        })
        .collect()
}

pub fn genre_rows(catalog: &Catalog) -> Vec<OptionRow> {
    catalog
        .genre_options()
        .into_iter()
        .map(|(id, name)| OptionRow {
            id: id.to_string(),
            name: name.to_string(),
        })
        .collect()
}
