use anyhow::Result;

use keepsake_core::{
    memory::{MediaQuery, SortOrder},
    storage::{Database, MediaRepository},
};

pub async fn run(db: &Database, search: Option<String>, sort: SortOrder) -> Result<()> {
    let media = MediaRepository::new(db).list_all().await?;

    if media.is_empty() {
        println!("The gallery is empty.");
        println!("\nTo add a photo, run:");
        println!("  keepsake add-media -t <title> -f <file> -d <YYYY-MM-DD>");
        return Ok(());
    }

    let query = MediaQuery::new(search, sort);
    let shown = query.arrange(&media);

    if shown.is_empty() {
        println!("Nothing matches '{}'.", query.search.as_deref().unwrap_or_default());
        return Ok(());
    }

    println!("Gallery ({} of {}), {}:\n", shown.len(), media.len(), sort.label());

    for item in shown {
        println!(
            "  {} [{}] {}",
            item.date.format("%Y-%m-%d"),
            item.kind.as_str(),
            item.title
        );
        if let Some(description) = &item.description {
            println!("    {}", description);
        }
        if !item.tags.is_empty() {
            let names: Vec<String> = item.tags.iter().map(|t| format!("#{}", t.name)).collect();
            println!("    {}", names.join(" "));
        }
        println!("    File: {}", item.file_path);
        println!("    ID:   {}", item.id);
        println!();
    }

    Ok(())
}
