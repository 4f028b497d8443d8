use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::Database;
use crate::memory::{LetterItem, NewLetter};
use crate::{Error, Result};

/// Repository for love letters
pub struct LetterRepository<'a> {
    db: &'a Database,
}

#[derive(FromRow)]
struct LetterRow {
    id: String,
    title: String,
    content: String,
    date: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl From<LetterRow> for LetterItem {
    fn from(row: LetterRow) -> Self {
        LetterItem {
            id: Uuid::parse_str(&row.id).unwrap_or_default(),
            title: row.title,
            content: row.content,
            date: row.date,
            created_at: row.created_at,
        }
    }
}

impl<'a> LetterRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Write a new letter
    pub async fn create(&self, new_letter: &NewLetter) -> Result<LetterItem> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO love_letters (id, title, content, date, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(id.to_string())
        .bind(&new_letter.title)
        .bind(&new_letter.content)
        .bind(new_letter.date)
        .bind(now)
        .execute(self.db.pool())
        .await?;

        tracing::debug!(%id, title = %new_letter.title, "Added letter");

        self.find_by_id(id)
            .await?
            .ok_or_else(|| Error::LetterNotFound(id.to_string()))
    }

    /// Find a letter by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<LetterItem>> {
        let row: Option<LetterRow> = sqlx::query_as(
            r#"
            SELECT id, title, content, date, created_at
            FROM love_letters
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.map(LetterItem::from))
    }

    /// All letters, oldest first
    pub async fn list_all(&self) -> Result<Vec<LetterItem>> {
        let rows: Vec<LetterRow> = sqlx::query_as(
            r#"
            SELECT id, title, content, date, created_at
            FROM love_letters
            ORDER BY date ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows.into_iter().map(LetterItem::from).collect())
    }

    /// Delete a letter
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM love_letters WHERE id = ?")
            .bind(id.to_string())
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn new_letter(title: &str, year: i32) -> NewLetter {
        NewLetter {
            title: title.to_string(),
            content: format!("Dear you, {}", title),
            date: Utc.with_ymd_and_hms(year, 2, 14, 0, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_create_list_delete() {
        let db = Database::new_in_memory().await.unwrap();
        let repo = LetterRepository::new(&db);

        let second = repo.create(&new_letter("second", 2023)).await.unwrap();
        let first = repo.create(&new_letter("first", 2021)).await.unwrap();
        assert_eq!(first.content, "Dear you, first");

        let titles: Vec<String> = repo.list_all().await.unwrap().into_iter().map(|l| l.title).collect();
        assert_eq!(titles, vec!["first", "second"]);

        assert!(repo.delete(second.id).await.unwrap());
        assert!(!repo.delete(second.id).await.unwrap());
        assert!(repo.find_by_id(second.id).await.unwrap().is_none());
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }
}
