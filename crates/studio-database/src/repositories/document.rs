//! Generic JSONB repository.
//!
//! Every collection table has the same four columns:
//! `(id uuid primary key, doc jsonb, created_at timestamptz, updated_at timestamptz)`.
//! The table name comes from [`Document::COLLECTION`] and the searchable
//! JSON key from [`Document::TITLE_FIELD`], so one implementation serves
//! all entity types.

use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use studio_core::error::{AppError, ErrorKind};
use studio_core::result::AppResult;
use studio_core::traits::{Document, DocumentRepository};
use studio_core::types::{PageRequest, PageResponse};

/// Repository for one document collection stored as JSONB.
#[derive(Debug)]
pub struct PgDocumentRepository<T> {
    pool: PgPool,
    _doc: PhantomData<fn() -> T>,
}

impl<T> Clone for PgDocumentRepository<T> {
    fn clone(&self) -> Self {
        Self::new(self.pool.clone())
    }
}

impl<T> PgDocumentRepository<T> {
    /// Create a new repository over a shared pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _doc: PhantomData,
        }
    }
}

fn db_err<T: Document>(action: &str) -> impl FnOnce(sqlx::Error) -> AppError + '_ {
    move |e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to {action} {}", T::COLLECTION),
            e,
        )
    }
}

/// Escape `%`, `_` and `\` so user input matches literally inside `ILIKE`.
pub(crate) fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl<T: Document> DocumentRepository<T> for PgDocumentRepository<T> {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<T>> {
        let sql = format!("SELECT doc FROM {} WHERE id = $1", T::COLLECTION);
        let row = sqlx::query_scalar::<_, Json<T>>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err::<T>("find"))?;
        Ok(row.map(|Json(doc)| doc))
    }

    async fn find_page(&self, page: &PageRequest) -> AppResult<PageResponse<T>> {
        let total = self.count().await?;

        let sql = format!(
            "SELECT doc FROM {} ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2",
            T::COLLECTION
        );
        let rows = sqlx::query_scalar::<_, Json<T>>(&sql)
            .bind(i64::try_from(page.limit()).unwrap_or(i64::MAX))
            .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await
            .map_err(db_err::<T>("list"))?;

        Ok(PageResponse::new(
            rows.into_iter().map(|Json(doc)| doc).collect(),
            page.page,
            page.page_size,
            total,
        ))
    }

    async fn find_first(&self) -> AppResult<Option<T>> {
        let sql = format!(
            "SELECT doc FROM {} ORDER BY created_at ASC, id ASC LIMIT 1",
            T::COLLECTION
        );
        let row = sqlx::query_scalar::<_, Json<T>>(&sql)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err::<T>("find first of"))?;
        Ok(row.map(|Json(doc)| doc))
    }

    async fn insert(&self, doc: &T) -> AppResult<()> {
        let sql = format!(
            "INSERT INTO {} (id, doc, created_at, updated_at) VALUES ($1, $2, $3, $4)",
            T::COLLECTION
        );
        sqlx::query(&sql)
            .bind(doc.id())
            .bind(Json(doc))
            .bind(doc.created_at())
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(db_err::<T>("insert into"))?;
        Ok(())
    }

    async fn update(&self, doc: &T) -> AppResult<bool> {
        let sql = format!(
            "UPDATE {} SET doc = $2, updated_at = NOW() WHERE id = $1",
            T::COLLECTION
        );
        let result = sqlx::query(&sql)
            .bind(doc.id())
            .bind(Json(doc))
            .execute(&self.pool)
            .await
            .map_err(db_err::<T>("update"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let sql = format!("DELETE FROM {} WHERE id = $1", T::COLLECTION);
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_err::<T>("delete from"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn search_title(&self, needle: &str) -> AppResult<Vec<T>> {
        let Some(field) = T::TITLE_FIELD else {
            return Ok(Vec::new());
        };

        let sql = format!(
            "SELECT doc FROM {} WHERE doc->>'{field}' ILIKE '%' || $1 || '%' ESCAPE '\\' \
             ORDER BY created_at DESC, id DESC",
            T::COLLECTION
        );
        let rows = sqlx::query_scalar::<_, Json<T>>(&sql)
            .bind(escape_like(needle))
            .fetch_all(&self.pool)
            .await
            .map_err(db_err::<T>("search"))?;
        Ok(rows.into_iter().map(|Json(doc)| doc).collect())
    }

    async fn count(&self) -> AppResult<u64> {
        let sql = format!("SELECT COUNT(*) FROM {}", T::COLLECTION);
        let total: i64 = sqlx::query_scalar(&sql)
            .fetch_one(&self.pool)
            .await
            .map_err(db_err::<T>("count"))?;
        Ok(total as u64)
    }
}
