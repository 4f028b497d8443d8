use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::Database;
use crate::memory::{MediaItem, MediaKind, NewMedia, Tag};
use crate::{Error, Result};

/// Repository for gallery media and their tags
pub struct MediaRepository<'a> {
    db: &'a Database,
}

#[derive(FromRow)]
struct MediaRow {
    id: String,
    title: String,
    description: Option<String>,
    date: DateTime<Utc>,
    file_path: String,
    kind: String,
    created_at: DateTime<Utc>,
}

impl From<MediaRow> for MediaItem {
    fn from(row: MediaRow) -> Self {
        let kind = row.kind.parse().unwrap_or_else(|_| {
            tracing::warn!(id = %row.id, kind = %row.kind, "Unknown media kind, treating as image");
            MediaKind::Image
        });

        MediaItem {
            id: Uuid::parse_str(&row.id).unwrap_or_default(),
            title: row.title,
            description: row.description,
            date: row.date,
            file_path: row.file_path,
            kind,
            created_at: row.created_at,
            tags: Vec::new(),
        }
    }
}

#[derive(FromRow)]
struct TagRow {
    id: String,
    name: String,
}

impl From<TagRow> for Tag {
    fn from(row: TagRow) -> Self {
        Tag {
            id: Uuid::parse_str(&row.id).unwrap_or_default(),
            name: row.name,
        }
    }
}

impl<'a> MediaRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Add media and link its tags, creating tags that don't exist yet
    pub async fn create(&self, new_media: &NewMedia) -> Result<MediaItem> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let mut tx = self.db.pool().begin().await?;

        sqlx::query(
            r#"
            INSERT INTO media (id, title, description, date, file_path, kind, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id.to_string())
        .bind(&new_media.title)
        .bind(&new_media.description)
        .bind(new_media.date)
        .bind(&new_media.file_path)
        .bind(new_media.kind.as_str())
        .bind(now)
        .execute(&mut *tx)
        .await?;

        for (position, name) in new_media.normalized_tags().iter().enumerate() {
            sqlx::query("INSERT OR IGNORE INTO tags (id, name) VALUES (?, ?)")
                .bind(Uuid::new_v4().to_string())
                .bind(name)
                .execute(&mut *tx)
                .await?;

            let (tag_id,): (String,) = sqlx::query_as("SELECT id FROM tags WHERE name = ?")
                .bind(name)
                .fetch_one(&mut *tx)
                .await?;

            sqlx::query(
                r#"
                INSERT OR IGNORE INTO media_tags (media_id, tag_id, position)
                VALUES (?, ?, ?)
                "#,
            )
            .bind(id.to_string())
            .bind(tag_id)
            .bind(position as i64)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::debug!(%id, title = %new_media.title, "Added media");

        self.find_by_id(id)
            .await?
            .ok_or_else(|| Error::MediaNotFound(id.to_string()))
    }

    /// Find media by ID, tags included
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<MediaItem>> {
        let row: Option<MediaRow> = sqlx::query_as(
            r#"
            SELECT id, title, description, date, file_path, kind, created_at
            FROM media
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(self.db.pool())
        .await?;

        match row {
            Some(row) => {
                let mut media = MediaItem::from(row);
                media.tags = self.get_tags(media.id).await?;
                Ok(Some(media))
            }
            None => Ok(None),
        }
    }

    /// All media, oldest moment first, tags included
    pub async fn list_all(&self) -> Result<Vec<MediaItem>> {
        let rows: Vec<MediaRow> = sqlx::query_as(
            r#"
            SELECT id, title, description, date, file_path, kind, created_at
            FROM media
            ORDER BY date ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        let mut media: Vec<MediaItem> = rows.into_iter().map(MediaItem::from).collect();

        for item in &mut media {
            item.tags = self.get_tags(item.id).await?;
        }

        Ok(media)
    }

    /// Tags linked to a media item, in the order they were entered
    pub async fn get_tags(&self, media_id: Uuid) -> Result<Vec<Tag>> {
        let rows: Vec<TagRow> = sqlx::query_as(
            r#"
            SELECT t.id, t.name
            FROM tags t
            JOIN media_tags mt ON mt.tag_id = t.id
            WHERE mt.media_id = ?
            ORDER BY mt.position ASC
            "#,
        )
        .bind(media_id.to_string())
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows.into_iter().map(Tag::from).collect())
    }

    /// Every known tag, by name
    pub async fn list_tags(&self) -> Result<Vec<Tag>> {
        let rows: Vec<TagRow> = sqlx::query_as("SELECT id, name FROM tags ORDER BY name ASC")
            .fetch_all(self.db.pool())
            .await?;

        Ok(rows.into_iter().map(Tag::from).collect())
    }

    /// Delete media and its tag links
    ///
    /// Returns the removed item so the caller can deal with the file it
    /// points to, or `None` when nothing matched.
    pub async fn delete(&self, id: Uuid) -> Result<Option<MediaItem>> {
        let Some(media) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut tx = self.db.pool().begin().await?;

        sqlx::query("DELETE FROM media_tags WHERE media_id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM media WHERE id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        tracing::debug!(%id, "Deleted media");
        Ok(Some(media))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn new_media(title: &str, year: i32, tags: &[&str]) -> NewMedia {
        NewMedia {
            title: title.to_string(),
            description: Some(format!("{} description", title)),
            date: Utc.with_ymd_and_hms(year, 4, 12, 10, 0, 0).unwrap(),
            file_path: format!("/photos/{}.jpg", title),
            kind: MediaKind::Image,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find_with_tags() {
        let db = Database::new_in_memory().await.unwrap();
        let repo = MediaRepository::new(&db);

        let created = repo
            .create(&new_media("lisbon", 2022, &["travel", " sea ", "travel"]))
            .await
            .unwrap();

        assert_eq!(created.title, "lisbon");
        assert_eq!(created.kind, MediaKind::Image);
        assert_eq!(created.date, Utc.with_ymd_and_hms(2022, 4, 12, 10, 0, 0).unwrap());
        let names: Vec<&str> = created.tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["travel", "sea"]);

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.tags, created.tags);
    }

    #[tokio::test]
    async fn test_tags_are_shared_by_name() {
        let db = Database::new_in_memory().await.unwrap();
        let repo = MediaRepository::new(&db);

        let a = repo.create(&new_media("a", 2020, &["family"])).await.unwrap();
        let b = repo.create(&new_media("b", 2021, &["family", "snow"])).await.unwrap();

        assert_eq!(a.tags[0].id, b.tags[0].id);
        let all: Vec<String> = repo.list_tags().await.unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(all, vec!["family", "snow"]);
    }

    #[tokio::test]
    async fn test_list_all_ascending_by_date() {
        let db = Database::new_in_memory().await.unwrap();
        let repo = MediaRepository::new(&db);

        repo.create(&new_media("later", 2024, &[])).await.unwrap();
        repo.create(&new_media("earlier", 2019, &[])).await.unwrap();

        let titles: Vec<String> = repo.list_all().await.unwrap().into_iter().map(|m| m.title).collect();
        assert_eq!(titles, vec!["earlier", "later"]);
    }

    #[tokio::test]
    async fn test_delete_removes_row_and_links() {
        let db = Database::new_in_memory().await.unwrap();
        let repo = MediaRepository::new(&db);

        let created = repo.create(&new_media("gone", 2021, &["tmp"])).await.unwrap();
        let deleted = repo.delete(created.id).await.unwrap().unwrap();
        assert_eq!(deleted.file_path, "/photos/gone.jpg");

        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
        assert!(repo.get_tags(created.id).await.unwrap().is_empty());
        assert!(repo.delete(created.id).await.unwrap().is_none());
    }
}
