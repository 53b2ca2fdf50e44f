//! Journal posts.

use chrono::Utc;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use studio_core::result::AppResult;
use studio_core::types::{PageRequest, PageResponse, PostId, UploadedFile};
use studio_entity::Post;
use studio_storage::RemovalReport;

use crate::content::ContentService;
use crate::validation::{check, not_blank, require_file, supplied};

fn paragraphs(values: &[String]) -> Result<(), ValidationError> {
    if values.is_empty() || values.iter().any(|p| p.trim().is_empty()) {
        Err(ValidationError::new("paragraphs"))
    } else {
        Ok(())
    }
}

/// Form fields for a post.
#[derive(Debug, Clone, Default, Validate)]
pub struct PostInput {
    #[validate(custom(function = "not_blank", message = "Title is required."))]
    pub title: String,
    #[validate(custom(function = "not_blank", message = "Topic is required."))]
    pub topic: String,
    #[validate(custom(
        function = "paragraphs",
        message = "Description must have at least one paragraph and none may be blank."
    ))]
    pub description: Vec<String>,
    pub cover: Option<UploadedFile>,
}

/// Journal operations.
#[derive(Debug, Clone)]
pub struct PostService {
    content: ContentService<Post>,
}

impl PostService {
    /// Creates a new post service.
    pub fn new(content: ContentService<Post>) -> Self {
        Self { content }
    }

    /// One page of posts, newest first.
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Post>> {
        self.content.list(page).await
    }

    /// A single post.
    pub async fn get(&self, id: Uuid) -> AppResult<Post> {
        self.content.get(id).await
    }

    /// Publish a post with its cover image.
    pub async fn create(&self, input: PostInput) -> AppResult<Post> {
        check(&input)?;
        let cover = require_file(input.cover, "Cover")?;

        let mut staged = self.content.stage();
        let stored = staged.store(&cover).await?;

        let now = Utc::now();
        let post = Post {
            id: PostId::new(),
            title: input.title.trim().to_string(),
            cover: stored.path,
            description: input.description,
            topic: input.topic.trim().to_string(),
            created_at: now,
            updated_at: now,
        };

        self.content.create(post, staged).await
    }

    /// Edit a post. A new cover overwrites the current file in place.
    pub async fn update(&self, id: Uuid, input: PostInput) -> AppResult<Post> {
        let before = self.content.get(id).await?;
        check(&input)?;

        let mut after = before.clone();
        after.title = input.title.trim().to_string();
        after.topic = input.topic.trim().to_string();
        after.description = input.description;

        let mut staged = self.content.stage();
        if let Some(cover) = supplied(input.cover) {
            staged.overwrite(&before.cover, &cover).await?;
        }

        self.content.update(&before, after, staged).await
    }

    /// Delete a post and its cover.
    pub async fn delete(&self, id: Uuid) -> AppResult<RemovalReport> {
        self.content.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use studio_core::error::ErrorKind;

    use super::*;
    use crate::testing::{Fixture, image};

    fn service(fx: &Fixture) -> PostService {
        PostService::new(ContentService::new(
            fx.store.posts.clone(),
            Arc::clone(&fx.assets),
        ))
    }

    fn input(description: &[&str]) -> PostInput {
        PostInput {
            title: "Opening".to_string(),
            topic: "News".to_string(),
            description: description.iter().map(|s| s.to_string()).collect(),
            cover: Some(image("cover.jpg")),
        }
    }

    #[tokio::test]
    async fn test_blank_paragraph_rejected() {
        let fx = Fixture::new().await;
        let posts = service(&fx);

        for bad in [&[][..], &["First", " "][..]] {
            let err = posts.create(input(bad)).await.unwrap_err();
            assert_eq!(err.kind, ErrorKind::Validation);
        }
        assert_eq!(fx.file_count(), 0);
    }

    #[tokio::test]
    async fn test_update_keeps_cover_path() {
        let fx = Fixture::new().await;
        let posts = service(&fx);
        let post = posts.create(input(&["One", "Two"])).await.unwrap();

        let mut edit = input(&["Only"]);
        edit.cover = None;
        let updated = posts.update(post.id.into_uuid(), edit).await.unwrap();
        assert_eq!(updated.cover, post.cover);
        assert_eq!(updated.description, vec!["Only"]);
        assert!(updated.updated_at >= post.updated_at);
    }
}
