use std::path::Path;

use anyhow::{bail, Result};

use keepsake_core::{
    memory::{parse_date, MediaKind, NewMedia},
    storage::{Database, MediaRepository},
};

pub async fn run(
    db: &Database,
    title: String,
    file: &str,
    date: &str,
    description: Option<String>,
    tags: Vec<String>,
) -> Result<()> {
    check_title(&title)?;

    let path = Path::new(file);
    let kind = MediaKind::from_path(path)?;
    let date = parse_date(date)?;

    if !path.exists() {
        tracing::warn!("File does not exist (yet): {}", path.display());
    }

    // Keep an absolute reference when the file is reachable
    let file_path = std::fs::canonicalize(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string();

    let new_media = NewMedia {
        title,
        description: description.filter(|d| !d.trim().is_empty()),
        date,
        file_path,
        kind,
        tags,
    };

    let repo = MediaRepository::new(db);
    let media = repo.create(&new_media).await?;

    println!("Added {} '{}' ({})", media.kind.as_str(), media.title, media.id);
    if !media.tags.is_empty() {
        let names: Vec<&str> = media.tags.iter().map(|t| t.name.as_str()).collect();
        println!("Tags: {}", names.join(", "));
    }

    Ok(())
}

fn check_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        bail!("Media needs a title");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_title_rejected() {
        assert!(check_title("").is_err());
        assert!(check_title("   ").is_err());
        assert!(check_title("Beach day").is_ok());
    }
}
