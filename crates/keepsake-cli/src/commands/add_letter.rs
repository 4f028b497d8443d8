use anyhow::{bail, Result};

use keepsake_core::{
    memory::{parse_date, NewLetter},
    storage::{Database, LetterRepository},
};

pub async fn run(db: &Database, title: String, content: String, date: &str) -> Result<()> {
    if title.trim().is_empty() || content.trim().is_empty() {
        bail!("A letter needs both a title and some content");
    }

    let new_letter = NewLetter {
        title,
        content,
        date: parse_date(date)?,
    };

    let letter = LetterRepository::new(db).create(&new_letter).await?;
    println!(
        "Saved letter '{}' dated {} ({})",
        letter.title,
        letter.date.format("%Y-%m-%d"),
        letter.id
    );

    Ok(())
}
