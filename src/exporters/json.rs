use crate::error::ScrapeError;
use crate::model::Recipe;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Dump the recipes as pretty-printed JSON
pub fn export_to_json(recipes: &[Recipe], path: impl AsRef<Path>) -> Result<(), ScrapeError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, recipes)?;
    writer.flush()?;

    info!("Wrote {} recipes to {}", recipes.len(), path.display());
    Ok(())
}
