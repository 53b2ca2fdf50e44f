//! The site information singleton: branding, contact data, and the images
//! used by the studio page and the navigation bar.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use studio_core::traits::Document;
use studio_core::types::SiteInfoId;

/// Optional social profile links. Each must look like a web address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SocialLinks {
    /// Facebook page.
    #[validate(custom(function = "validate_social_url", message = "Invalid Facebook URL."))]
    pub facebook: Option<String>,
    /// Instagram profile.
    #[validate(custom(function = "validate_social_url", message = "Invalid Instagram URL."))]
    pub instagram: Option<String>,
    /// YouTube channel.
    #[validate(custom(function = "validate_social_url", message = "Invalid YouTube URL."))]
    pub youtube: Option<String>,
    /// Twitter profile.
    #[validate(custom(function = "validate_social_url", message = "Invalid Twitter URL."))]
    pub twitter: Option<String>,
    /// LinkedIn page.
    #[validate(custom(function = "validate_social_url", message = "Invalid LinkedIn URL."))]
    pub linkedin: Option<String>,
}

/// Accepts `[http(s)://]label.label.tld[/anything]` with a 2–6 letter TLD.
fn validate_social_url(value: &str) -> Result<(), ValidationError> {
    if is_web_address(value) {
        Ok(())
    } else {
        Err(ValidationError::new("social_url"))
    }
}

fn is_web_address(value: &str) -> bool {
    let lower = value.trim().to_ascii_lowercase();
    let rest = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))
        .unwrap_or(&lower);
    let host = rest.split('/').next().unwrap_or_default();

    let labels: Vec<&str> = host.split('.').collect();
    let Some((tld, names)) = labels.split_last() else {
        return false;
    };
    if names.is_empty() || !(2..=6).contains(&tld.len()) {
        return false;
    }
    tld.chars().all(|c| c.is_ascii_lowercase())
        && names.iter().all(|label| {
            !label.is_empty()
                && label
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        })
}

/// One navigation bar slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavbarImage {
    /// Stored asset path.
    pub image: String,
}

/// The six navigation sections, each with exactly one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavbarSection {
    Studio,
    Work,
    Product,
    People,
    Journal,
    Contact,
}

impl NavbarSection {
    /// Every section, in menu order.
    pub const ALL: [NavbarSection; 6] = [
        Self::Studio,
        Self::Work,
        Self::Product,
        Self::People,
        Self::Journal,
        Self::Contact,
    ];

    /// Section name as used in JSON keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Studio => "Studio",
            Self::Work => "Work",
            Self::Product => "Product",
            Self::People => "People",
            Self::Journal => "Journal",
            Self::Contact => "Contact",
        }
    }

    /// Multipart field carrying this section's image, e.g. `StudioImage`.
    pub fn form_field(&self) -> String {
        format!("{}Image", self.as_str())
    }
}

/// Fixed-shape navigation images. All six slots are mandatory, so a
/// partial object fails to deserialize instead of reaching storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavbarImages {
    #[serde(rename = "Studio")]
    pub studio: NavbarImage,
    #[serde(rename = "Work")]
    pub work: NavbarImage,
    #[serde(rename = "Product")]
    pub product: NavbarImage,
    #[serde(rename = "People")]
    pub people: NavbarImage,
    #[serde(rename = "Journal")]
    pub journal: NavbarImage,
    #[serde(rename = "Contact")]
    pub contact: NavbarImage,
}

impl NavbarImages {
    /// Borrow the slot for a section.
    pub fn get(&self, section: NavbarSection) -> &NavbarImage {
        match section {
            NavbarSection::Studio => &self.studio,
            NavbarSection::Work => &self.work,
            NavbarSection::Product => &self.product,
            NavbarSection::People => &self.people,
            NavbarSection::Journal => &self.journal,
            NavbarSection::Contact => &self.contact,
        }
    }

    /// Mutably borrow the slot for a section.
    pub fn get_mut(&mut self, section: NavbarSection) -> &mut NavbarImage {
        match section {
            NavbarSection::Studio => &mut self.studio,
            NavbarSection::Work => &mut self.work,
            NavbarSection::Product => &mut self.product,
            NavbarSection::People => &mut self.people,
            NavbarSection::Journal => &mut self.journal,
            NavbarSection::Contact => &mut self.contact,
        }
    }

    /// Build from a lookup that must yield a path for every section.
    pub fn try_from_fn<E>(
        mut f: impl FnMut(NavbarSection) -> Result<String, E>,
    ) -> Result<Self, E> {
        let mut slot = |section| f(section).map(|image| NavbarImage { image });
        Ok(Self {
            studio: slot(NavbarSection::Studio)?,
            work: slot(NavbarSection::Work)?,
            product: slot(NavbarSection::Product)?,
            people: slot(NavbarSection::People)?,
            journal: slot(NavbarSection::Journal)?,
            contact: slot(NavbarSection::Contact)?,
        })
    }

    /// All six paths in menu order.
    pub fn paths(&self) -> Vec<String> {
        NavbarSection::ALL
            .iter()
            .map(|s| self.get(*s).image.clone())
            .collect()
    }
}

/// Branding and contact information for the whole site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteInfo {
    /// Unique identifier.
    pub id: SiteInfoId,
    /// Logo path.
    pub logo: String,
    /// Studio name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Phone number.
    pub contact_number: Option<String>,
    /// Contact email.
    pub email: String,
    /// Embedded map reference.
    pub map_location: Option<String>,
    /// Social profile links.
    #[serde(default)]
    pub social: SocialLinks,
    /// Studio page images; at least one.
    pub studio_images: Vec<String>,
    /// Navigation bar images.
    pub navbar_images: NavbarImages,
    /// When the document was created.
    pub created_at: DateTime<Utc>,
    /// When the document was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Document for SiteInfo {
    const COLLECTION: &'static str = "site_info";
    const LABEL: &'static str = "Site info";

    fn id(&self) -> Uuid {
        self.id.into_uuid()
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    fn owned_files(&self) -> Vec<String> {
        let mut files = vec![self.logo.clone()];
        files.extend(self.studio_images.iter().cloned());
        files.extend(self.navbar_images.paths());
        files
    }
}
