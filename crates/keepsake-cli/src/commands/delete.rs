use anyhow::Result;

use keepsake_core::storage::{Database, LetterRepository, MediaRepository};

use super::parse_id;

pub async fn media(db: &Database, id: &str) -> Result<()> {
    let id = parse_id(id)?;

    match MediaRepository::new(db).delete(id).await? {
        Some(media) => {
            println!("Removed '{}' from the gallery.", media.title);
            println!("The file itself was left in place: {}", media.file_path);
        }
        None => println!("No media with ID {}.", id),
    }

    Ok(())
}

pub async fn letter(db: &Database, id: &str) -> Result<()> {
    let id = parse_id(id)?;

    if LetterRepository::new(db).delete(id).await? {
        println!("Letter {} removed.", id);
    } else {
        println!("No letter with ID {}.", id);
    }

    Ok(())
}
