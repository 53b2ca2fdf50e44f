//! Site information: the de facto singleton holding branding and contact
//! data.
//!
//! Nothing enforces a single document. Reads and updates target the oldest
//! one; a second create is logged and allowed. Concurrent updates are last
//! write wins.

use std::collections::HashMap;

use chrono::Utc;
use tracing::warn;
use uuid::Uuid;
use validator::Validate;

use studio_core::error::AppError;
use studio_core::result::AppResult;
use studio_core::types::{SiteInfoId, UploadedFile};
use studio_entity::{NavbarImages, NavbarSection, SiteInfo, SocialLinks};
use studio_storage::RemovalReport;

use crate::content::{ContentService, StagedAssets};
use crate::validation::{check, merge_kept, not_blank, not_found, optional_text, supplied, supplied_all};

/// Form fields for the site information.
#[derive(Debug, Clone, Default, Validate)]
pub struct SiteInput {
    #[validate(custom(function = "not_blank", message = "Name is required."))]
    pub name: String,
    #[validate(custom(function = "not_blank", message = "Description is required."))]
    pub description: String,
    #[validate(email(message = "A valid email is required."))]
    pub email: String,
    pub contact_number: Option<String>,
    pub map_location: Option<String>,
    #[validate(nested)]
    pub social: SocialLinks,
    pub logo: Option<UploadedFile>,
    /// New studio page images, appended after the kept ones.
    pub studio_images: Vec<UploadedFile>,
    /// On update, studio image paths to drop.
    pub studio_images_to_remove: Vec<String>,
    /// Navigation images by section. All six on create; any subset on update.
    pub navbar: HashMap<NavbarSection, UploadedFile>,
}

impl SiteInput {
    /// Trim text and drop blank optional values before validation.
    fn normalized(mut self) -> Self {
        self.email = self.email.trim().to_string();
        self.social = SocialLinks {
            facebook: optional_text(self.social.facebook),
            instagram: optional_text(self.social.instagram),
            youtube: optional_text(self.social.youtube),
            twitter: optional_text(self.social.twitter),
            linkedin: optional_text(self.social.linkedin),
        };
        self.navbar.retain(|_, file| !file.is_empty());
        self
    }
}

/// Site information operations.
#[derive(Debug, Clone)]
pub struct SiteService {
    content: ContentService<SiteInfo>,
}

impl SiteService {
    /// Creates a new site service.
    pub fn new(content: ContentService<SiteInfo>) -> Self {
        Self { content }
    }

    /// The current site information.
    pub async fn get(&self) -> AppResult<SiteInfo> {
        self.content.first().await?.ok_or_else(not_found::<SiteInfo>)
    }

    /// Create the site information with every required image.
    pub async fn create(&self, input: SiteInput) -> AppResult<SiteInfo> {
        let mut input = input.normalized();
        check(&input)?;

        let logo = supplied(input.logo.take())
            .ok_or_else(|| AppError::validation("Logo is required."))?;
        let studio_images = supplied_all(std::mem::take(&mut input.studio_images));
        if studio_images.is_empty() {
            return Err(AppError::validation(
                "At least one studio image is required.",
            ));
        }
        let missing: Vec<&str> = NavbarSection::ALL
            .iter()
            .filter(|s| !input.navbar.contains_key(*s))
            .map(|s| s.as_str())
            .collect();
        if !missing.is_empty() {
            return Err(AppError::validation(format!(
                "Navbar images are required for: {}.",
                missing.join(", ")
            )));
        }

        if let Some(existing) = self.content.first().await? {
            warn!(existing_id = %existing.id, "Site info already exists; creating another");
        }

        let mut staged = self.content.stage();
        let logo = staged.store(&logo).await?.path;
        let studio = staged.store_all(&studio_images).await;
        let studio = staged.settle(studio).await?;
        let navbar = Self::store_navbar(&mut staged, &input.navbar).await;
        let navbar = staged.settle(navbar).await?;
        let navbar_images = NavbarImages::try_from_fn(|section| {
            navbar
                .get(&section)
                .cloned()
                .ok_or_else(|| AppError::internal(format!("Navbar image for {} missing", section.as_str())))
        });
        let navbar_images = staged.settle(navbar_images).await?;

        let now = Utc::now();
        let site = SiteInfo {
            id: SiteInfoId::new(),
            logo,
            name: input.name.trim().to_string(),
            description: input.description.trim().to_string(),
            contact_number: optional_text(input.contact_number),
            email: input.email,
            map_location: optional_text(input.map_location),
            social: input.social,
            studio_images: studio,
            navbar_images,
            created_at: now,
            updated_at: now,
        };

        self.content.create(site, staged).await
    }

    /// Update the current site information.
    ///
    /// A new logo or navbar image goes to a new path and the file it
    /// replaces is released; studio images follow the kept-then-new order.
    pub async fn update(&self, input: SiteInput) -> AppResult<SiteInfo> {
        let before = self.get().await?;
        let mut input = input.normalized();
        check(&input)?;

        let studio_images = supplied_all(std::mem::take(&mut input.studio_images));
        let kept = before
            .studio_images
            .iter()
            .filter(|p| !input.studio_images_to_remove.contains(p))
            .count();
        if kept + studio_images.len() == 0 {
            return Err(AppError::validation(
                "At least one studio image is required.",
            ));
        }

        let mut after = before.clone();
        after.name = input.name.trim().to_string();
        after.description = input.description.trim().to_string();
        after.email = input.email;
        after.contact_number = optional_text(input.contact_number);
        after.map_location = optional_text(input.map_location);
        after.social = input.social;

        let mut staged = self.content.stage();
        if let Some(logo) = supplied(input.logo) {
            after.logo = staged.store(&logo).await?.path;
        }
        let added = staged.store_all(&studio_images).await;
        let added = staged.settle(added).await?;
        after.studio_images =
            merge_kept(&before.studio_images, &input.studio_images_to_remove, added);

        let navbar = Self::store_navbar(&mut staged, &input.navbar).await;
        for (section, path) in staged.settle(navbar).await? {
            after.navbar_images.get_mut(section).image = path;
        }

        self.content.update(&before, after, staged).await
    }

    /// Delete a site information document and every file it references.
    pub async fn delete(&self, id: Uuid) -> AppResult<RemovalReport> {
        self.content.delete(id).await
    }

    async fn store_navbar(
        staged: &mut StagedAssets,
        files: &HashMap<NavbarSection, UploadedFile>,
    ) -> AppResult<HashMap<NavbarSection, String>> {
        let mut stored = HashMap::with_capacity(files.len());
        for section in NavbarSection::ALL {
            if let Some(file) = files.get(&section) {
                stored.insert(section, staged.store(file).await?.path);
            }
        }
        Ok(stored)
    }
}
