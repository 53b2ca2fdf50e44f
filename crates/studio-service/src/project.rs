//! Architecture projects.

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use studio_core::error::AppError;
use studio_core::result::AppResult;
use studio_core::types::{PageRequest, PageResponse, ProjectId, UploadedFile};
use studio_entity::{ImageRef, Project, ProjectDetails};
use studio_storage::RemovalReport;

use crate::content::{ContentService, StagedAssets};
use crate::validation::{check, not_blank, optional_text, supplied, supplied_all};

/// Form fields for a project.
#[derive(Debug, Clone, Default, Validate)]
pub struct ProjectInput {
    #[validate(custom(function = "not_blank", message = "Title is required."))]
    pub title: String,
    #[validate(custom(function = "not_blank", message = "Category is required."))]
    pub category: String,
    pub description: Option<String>,
    pub map_location: Option<String>,
    /// JSON object with `AppointmentYear`, `CompletionYear`, `Client`, `Location`.
    pub details: Option<String>,
    pub cover: Option<UploadedFile>,
    pub cover_alt: Option<String>,
    pub cover_name: Option<String>,
    /// New gallery images with parallel captions.
    pub images: Vec<UploadedFile>,
    pub image_alts: Vec<String>,
    pub image_names: Vec<String>,
    /// On update, gallery image paths to drop.
    pub images_to_remove: Vec<String>,
}

fn parse_details(raw: Option<&str>) -> AppResult<Option<ProjectDetails>> {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return Ok(None);
    };
    let details: ProjectDetails = serde_json::from_str(raw)
        .map_err(|_| AppError::validation("Project details must be a JSON object."))?;
    Ok(Some(ProjectDetails {
        appointment_year: optional_text(details.appointment_year),
        completion_year: optional_text(details.completion_year),
        client: optional_text(details.client),
        location: optional_text(details.location),
    }))
}

/// Caption `i` of a parallel list, falling back to the file name.
fn caption(values: &[String], i: usize, file: &UploadedFile) -> String {
    values
        .get(i)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .unwrap_or(&file.file_name)
        .to_string()
}

/// Project operations.
#[derive(Debug, Clone)]
pub struct ProjectService {
    content: ContentService<Project>,
}

impl ProjectService {
    /// Creates a new project service.
    pub fn new(content: ContentService<Project>) -> Self {
        Self { content }
    }

    /// One page of projects, newest first.
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Project>> {
        self.content.list(page).await
    }

    /// A single project.
    pub async fn get(&self, id: Uuid) -> AppResult<Project> {
        self.content.get(id).await
    }

    /// Add a project with its cover and optional gallery.
    pub async fn create(&self, input: ProjectInput) -> AppResult<Project> {
        check(&input)?;
        let details = parse_details(input.details.as_deref())?.unwrap_or_default();

        let cover_alt = optional_text(input.cover_alt);
        let cover_name = optional_text(input.cover_name);
        let (Some(cover), Some(cover_alt), Some(cover_name)) =
            (supplied(input.cover), cover_alt, cover_name)
        else {
            return Err(AppError::validation(
                "Cover image, cover alt text and cover name are required.",
            ));
        };
        let images = supplied_all(input.images);

        let mut staged = self.content.stage();
        let stored = staged.store(&cover).await?.path;
        let gallery =
            Self::store_gallery(&mut staged, &images, &input.image_alts, &input.image_names).await;
        let gallery = staged.settle(gallery).await?;

        let now = Utc::now();
        let project = Project {
            id: ProjectId::new(),
            title: input.title.trim().to_string(),
            category: input.category.trim().to_string(),
            cover: ImageRef {
                url: stored,
                alt: cover_alt,
                name: cover_name,
            },
            images: gallery,
            description: optional_text(input.description),
            map_location: optional_text(input.map_location),
            details,
            created_at: now,
            updated_at: now,
        };

        self.content.create(project, staged).await
    }

    /// Edit a project.
    ///
    /// A new cover is written to a new path and the old file is released.
    /// Gallery images follow the kept-then-new ordering.
    pub async fn update(&self, id: Uuid, input: ProjectInput) -> AppResult<Project> {
        let before = self.content.get(id).await?;
        check(&input)?;
        let details = parse_details(input.details.as_deref())?;

        let mut after = before.clone();
        after.title = input.title.trim().to_string();
        after.category = input.category.trim().to_string();
        after.description = optional_text(input.description);
        after.map_location = optional_text(input.map_location);
        if let Some(details) = details {
            after.details = details;
        }
        if let Some(alt) = optional_text(input.cover_alt) {
            after.cover.alt = alt;
        }
        if let Some(name) = optional_text(input.cover_name) {
            after.cover.name = name;
        }

        let images = supplied_all(input.images);
        let mut staged = self.content.stage();
        if let Some(cover) = supplied(input.cover) {
            after.cover.url = staged.store(&cover).await?.path;
        }
        let added =
            Self::store_gallery(&mut staged, &images, &input.image_alts, &input.image_names).await;
        let added = staged.settle(added).await?;

        after.images = before
            .images
            .iter()
            .filter(|img| !input.images_to_remove.contains(&img.url))
            .cloned()
            .chain(added)
            .collect();

        self.content.update(&before, after, staged).await
    }

    /// Delete a project with its cover and gallery.
    pub async fn delete(&self, id: Uuid) -> AppResult<RemovalReport> {
        self.content.delete(id).await
    }

    async fn store_gallery(
        staged: &mut StagedAssets,
        images: &[UploadedFile],
        alts: &[String],
        names: &[String],
    ) -> AppResult<Vec<ImageRef>> {
        let paths = staged.store_all(images).await?;
        Ok(paths
            .into_iter()
            .zip(images)
            .enumerate()
            .map(|(i, (url, file))| ImageRef {
                url,
                alt: caption(alts, i, file),
                name: caption(names, i, file),
            })
            .collect())
    }
}
