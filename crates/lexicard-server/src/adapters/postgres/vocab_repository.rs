//! PostgreSQL implementation of VocabRepository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use lexicard::{DomainError, Subject, SubjectFilter, VocabEntry, VocabRepository};

/// PostgreSQL implementation of VocabRepository
pub struct PgVocabRepository {
    pool: PgPool,
}

impl PgVocabRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct VocabRow {
    id: Uuid,
    word: String,
    meaning: String,
    example: Option<String>,
    subject: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl TryFrom<VocabRow> for VocabEntry {
    type Error = DomainError;

    fn try_from(row: VocabRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            word: row.word,
            meaning: row.meaning,
            example: row.example,
            subject: Subject::parse(&row.subject)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl VocabRepository for PgVocabRepository {
    async fn insert(&self, entry: &VocabEntry) -> Result<VocabEntry, DomainError> {
        let row = sqlx::query_as::<_, VocabRow>(
            r#"
            INSERT INTO vocab_entries (id, word, meaning, example, subject, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(entry.id)
        .bind(&entry.word)
        .bind(&entry.meaning)
        .bind(&entry.example)
        .bind(entry.subject.as_str())
        .bind(entry.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        row.try_into()
    }

    async fn list(&self, filter: &SubjectFilter) -> Result<Vec<VocabEntry>, DomainError> {
        let rows = match filter.subject() {
            Some(subject) => {
                sqlx::query_as::<_, VocabRow>(
                    "SELECT * FROM vocab_entries WHERE subject = $1 ORDER BY created_at DESC, id",
                )
                .bind(subject.as_str())
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, VocabRow>(
                    "SELECT * FROM vocab_entries ORDER BY created_at DESC, id",
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        rows.into_iter().map(TryInto::try_into).collect()
    }
}
