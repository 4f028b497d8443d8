use anyhow::Result;
use chrono::{Local, TimeZone};

use keepsake_core::{
    memory::{journal_order, letters_dated_on, LetterItem},
    storage::{Database, LetterRepository},
};

pub async fn run(db: &Database) -> Result<()> {
    let letters = LetterRepository::new(db).list_all().await?;

    if letters.is_empty() {
        println!("No letters yet.");
        println!("\nTo write one, run:");
        println!("  keepsake add-letter -t <title> -c <text> -d <YYYY-MM-DD>");
        return Ok(());
    }

    let today = letters_dated_on(&letters, Local::now().date_naive(), &Local);

    println!("Letters ({}):\n", letters.len());

    for letter in journal_order(&letters) {
        let dated_today = today.iter().any(|l| l.id == letter.id);
        println!("{}", heading(letter, &Local, dated_today));
        for line in letter.content.lines() {
            println!("    {}", line);
        }
        println!("    ID: {}", letter.id);
        println!();
    }

    Ok(())
}

/// Date and title line, with the date shown in the reader's timezone
fn heading<Tz: TimeZone>(letter: &LetterItem, tz: &Tz, dated_today: bool) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let marker = if dated_today { " <3 today" } else { "" };
    format!(
        "  {} - {}{}",
        letter.date.with_timezone(tz).format("%Y-%m-%d"),
        letter.title,
        marker
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use keepsake_core::memory::parse_date;
    use uuid::Uuid;

    #[test]
    fn test_heading_uses_reader_timezone() {
        let letter = LetterItem {
            id: Uuid::new_v4(),
            title: "Valentine".to_string(),
            content: String::new(),
            date: parse_date("2024-02-14T01:00:00+02:00").unwrap(),
            created_at: Utc::now(),
        };
        let paris = FixedOffset::east_opt(2 * 3600).unwrap();

        assert_eq!(heading(&letter, &paris, true), "  2024-02-14 - Valentine <3 today");
        assert_eq!(heading(&letter, &Utc, false), "  2024-02-13 - Valentine");

        let day = chrono::NaiveDate::from_ymd_opt(2024, 2, 14).unwrap();
        let letters = vec![letter];
        assert_eq!(letters_dated_on(&letters, day, &paris).len(), 1);
        assert!(letters_dated_on(&letters, day, &Utc).is_empty());
    }
}
