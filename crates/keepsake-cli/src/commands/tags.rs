use anyhow::Result;

use keepsake_core::storage::{Database, MediaRepository};

pub async fn run(db: &Database) -> Result<()> {
    let tags = MediaRepository::new(db).list_tags().await?;

    if tags.is_empty() {
        println!("No tags yet.");
        return Ok(());
    }

    println!("Tags ({}):", tags.len());
    for tag in &tags {
        println!("  #{}", tag.name);
    }

    Ok(())
}
