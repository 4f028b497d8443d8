pub mod add_letter;
pub mod add_media;
pub mod delete;
pub mod gallery;
pub mod letters;
pub mod tags;
pub mod timeline;

use anyhow::{Context, Result};
use uuid::Uuid;

/// Parse an item ID given on the command line
fn parse_id(id: &str) -> Result<Uuid> {
    Uuid::parse_str(id.trim()).with_context(|| format!("'{}' is not a valid ID", id))
}
