//! Team members.

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use studio_core::error::AppError;
use studio_core::result::AppResult;
use studio_core::types::{PageRequest, PageResponse, PersonId, UploadedFile};
use studio_entity::Person;
use studio_storage::RemovalReport;

use crate::content::ContentService;
use crate::validation::{check, not_blank, require_file, supplied};

/// Form fields for a person.
#[derive(Debug, Clone, Default, Validate)]
pub struct PersonInput {
    #[validate(custom(function = "not_blank", message = "Name is required."))]
    pub name: String,
    #[validate(custom(function = "not_blank", message = "Role is required."))]
    pub role: String,
    #[validate(custom(function = "not_blank", message = "Category is required."))]
    pub category: String,
    /// Portrait. Required on create; on update replaces the current one.
    pub image: Option<UploadedFile>,
    /// On update, discard the current portrait file. Only valid together
    /// with a new `image`, which is then stored under a fresh path.
    pub remove_image: bool,
}

/// People page operations.
#[derive(Debug, Clone)]
pub struct PersonService {
    content: ContentService<Person>,
}

impl PersonService {
    /// Creates a new person service.
    pub fn new(content: ContentService<Person>) -> Self {
        Self { content }
    }

    /// One page of people, newest first.
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Person>> {
        self.content.list(page).await
    }

    /// A single person.
    pub async fn get(&self, id: Uuid) -> AppResult<Person> {
        self.content.get(id).await
    }

    /// Add a person with a portrait.
    pub async fn create(&self, input: PersonInput) -> AppResult<Person> {
        check(&input)?;
        let image = require_file(input.image, "Image")?;

        let mut staged = self.content.stage();
        let stored = staged.store(&image).await?;

        let now = Utc::now();
        let person = Person {
            id: PersonId::new(),
            name: input.name.trim().to_string(),
            role: input.role.trim().to_string(),
            image: stored.path,
            category: input.category.trim().to_string(),
            created_at: now,
            updated_at: now,
        };

        self.content.create(person, staged).await
    }

    /// Edit a person.
    ///
    /// A new portrait overwrites the current file in place, unless
    /// `remove_image` is set, in which case the old file is released and
    /// the new one gets its own path. A person always keeps a portrait, so
    /// `remove_image` without a replacement is rejected.
    pub async fn update(&self, id: Uuid, input: PersonInput) -> AppResult<Person> {
        let before = self.content.get(id).await?;
        check(&input)?;

        let mut after = before.clone();
        after.name = input.name.trim().to_string();
        after.role = input.role.trim().to_string();
        after.category = input.category.trim().to_string();

        let image = supplied(input.image);
        if input.remove_image && image.is_none() {
            return Err(AppError::validation("Image is required."));
        }

        let mut staged = self.content.stage();
        match image {
            Some(file) if input.remove_image => {
                after.image = staged.store(&file).await?.path;
            }
            Some(file) => {
                staged.overwrite(&before.image, &file).await?;
            }
            None => {}
        }

        self.content.update(&before, after, staged).await
    }

    /// Delete a person and their portrait.
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

    fn service(fx: &Fixture) -> PersonService {
        PersonService::new(ContentService::new(
            fx.store.people.clone(),
            Arc::clone(&fx.assets),
        ))
    }

    fn jane(image_file: Option<UploadedFile>) -> PersonInput {
        PersonInput {
            name: "Jane".to_string(),
            role: "Architect".to_string(),
            category: "Director".to_string(),
            image: image_file,
            remove_image: false,
        }
    }

    #[tokio::test]
    async fn test_create_then_delete_removes_portrait() {
        let fx = Fixture::new().await;
        let people = service(&fx);

        let person = people.create(jane(Some(image("a.jpg")))).await.unwrap();
        let path = person.image.clone();
        assert!(fx.on_disk(&path));

        let report = people.delete(person.id.into_uuid()).await.unwrap();
        assert!(report.is_clean());
        assert!(!fx.on_disk(&path));
        let err = people.get(person.id.into_uuid()).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_missing_fields_write_nothing() {
        let fx = Fixture::new().await;
        let people = service(&fx);

        let mut input = jane(Some(image("a.jpg")));
        input.role = "   ".to_string();
        let err = people.create(input).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "Role is required.");

        let err = people.create(jane(None)).await.unwrap_err();
        assert_eq!(err.message, "Image is required.");

        assert_eq!(fx.file_count(), 0);
        assert_eq!(fx.store.people.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_image_modes() {
        let fx = Fixture::new().await;
        let people = service(&fx);
        let person = people.create(jane(Some(image("a.jpg")))).await.unwrap();
        let id = person.id.into_uuid();
        let path = person.image.clone();

        let mut edit = jane(None);
        edit.role = "Partner".to_string();
        let updated = people.update(id, edit).await.unwrap();
        assert_eq!(updated.image, path);
        assert_eq!(updated.role, "Partner");

        let updated = people.update(id, jane(Some(image("b.jpg")))).await.unwrap();
        assert_eq!(updated.image, path);
        assert_eq!(fx.file_count(), 1);

        let mut replace = jane(Some(image("c.jpg")));
        replace.remove_image = true;
        let updated = people.update(id, replace).await.unwrap();
        assert_ne!(updated.image, path);
        assert!(updated.image.ends_with("-c.jpg"));
        assert!(fx.on_disk(&updated.image));
        assert!(!fx.on_disk(&path));
        assert_eq!(fx.file_count(), 1);
    }

    #[tokio::test]
    async fn test_remove_image_without_replacement_is_rejected() {
        let fx = Fixture::new().await;
        let people = service(&fx);
        let person = people.create(jane(Some(image("a.jpg")))).await.unwrap();
        let id = person.id.into_uuid();

        let mut remove = jane(None);
        remove.remove_image = true;
        let err = people.update(id, remove).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "Image is required.");

        let stored = people.get(id).await.unwrap();
        assert_eq!(stored.image, person.image);
        assert!(fx.on_disk(&stored.image));
    }
}
