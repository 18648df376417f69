use anyhow::Result;
use bookdeck_types::{Catalog, Theme};

use crate::ui;

pub fn handle(catalog: Catalog, page_size: usize, theme: Theme) -> Result<()> {
    ui::run(catalog, page_size, theme)
}
