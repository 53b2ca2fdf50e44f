//! Products in the shop.

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use studio_core::error::AppError;
use studio_core::result::AppResult;
use studio_core::types::{PageRequest, PageResponse, ProductId, UploadedFile};
use studio_entity::Product;
use studio_storage::RemovalReport;

use crate::content::ContentService;
use crate::validation::{check, merge_kept, not_blank, supplied_all};

/// Form fields for a product.
#[derive(Debug, Clone, Default, Validate)]
pub struct ProductInput {
    #[validate(custom(function = "not_blank", message = "Name is required."))]
    pub name: String,
    /// Price as entered; must parse to a number ≥ 0.
    #[validate(custom(function = "not_blank", message = "Price is required."))]
    pub price: String,
    #[validate(custom(function = "not_blank", message = "Description is required."))]
    pub description: String,
    /// New images, appended after the kept ones.
    pub images: Vec<UploadedFile>,
    /// On update, current image paths to drop.
    pub images_to_remove: Vec<String>,
}

impl ProductInput {
    fn parsed_price(&self) -> AppResult<f64> {
        self.price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p >= 0.0)
            .ok_or_else(|| AppError::validation("Price must be a number of at least 0."))
    }
}

/// Product operations.
#[derive(Debug, Clone)]
pub struct ProductService {
    content: ContentService<Product>,
}

impl ProductService {
    /// Creates a new product service.
    pub fn new(content: ContentService<Product>) -> Self {
        Self { content }
    }

    /// One page of products, newest first.
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Product>> {
        self.content.list(page).await
    }

    /// A single product.
    pub async fn get(&self, id: Uuid) -> AppResult<Product> {
        self.content.get(id).await
    }

    /// Add a product with at least one image.
    pub async fn create(&self, input: ProductInput) -> AppResult<Product> {
        check(&input)?;
        let price = input.parsed_price()?;
        let images = supplied_all(input.images);
        if images.is_empty() {
            return Err(AppError::validation("At least one image is required."));
        }

        let mut staged = self.content.stage();
        let paths = staged.store_all(&images).await?;

        let now = Utc::now();
        let product = Product {
            id: ProductId::new(),
            name: input.name.trim().to_string(),
            images: paths,
            price,
            description: input.description.trim().to_string(),
            created_at: now,
            updated_at: now,
        };

        self.content.create(product, staged).await
    }

    /// Edit a product: kept images stay in order, new ones follow.
    ///
    /// Removed images are unlinked once the change is saved.
    pub async fn update(&self, id: Uuid, input: ProductInput) -> AppResult<Product> {
        let before = self.content.get(id).await?;
        check(&input)?;
        let price = input.parsed_price()?;

        let images = supplied_all(input.images);
        let kept = before
            .images
            .iter()
            .filter(|p| !input.images_to_remove.contains(p))
            .count();
        if kept + images.len() == 0 {
            return Err(AppError::validation("At least one image is required."));
        }

        let mut staged = self.content.stage();
        let added = staged.store_all(&images).await?;

        let mut after = before.clone();
        after.name = input.name.trim().to_string();
        after.price = price;
        after.description = input.description.trim().to_string();
        after.images = merge_kept(&before.images, &input.images_to_remove, added);

        self.content.update(&before, after, staged).await
    }

    /// Delete a product and all its images.
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

    fn service(fx: &Fixture) -> ProductService {
        ProductService::new(ContentService::new(
            fx.store.products.clone(),
            Arc::clone(&fx.assets),
        ))
    }

    fn input(price: &str, images: Vec<UploadedFile>) -> ProductInput {
        ProductInput {
            name: "Oak Stool".to_string(),
            price: price.to_string(),
            description: "Solid oak.".to_string(),
            images,
            images_to_remove: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_write_failure_mid_create_leaves_nothing() {
        let fx = Fixture::with_write_limit(2).await;
        let products = service(&fx);

        let images = vec![image("a.jpg"), image("b.jpg"), image("c.jpg")];
        let err = products.create(input("120", images)).await.unwrap_err();

        assert_eq!(err.kind, ErrorKind::Storage);
        assert_eq!(fx.store.products.count().await.unwrap(), 0);
        assert_eq!(fx.file_count(), 0);
    }

    #[tokio::test]
    async fn test_price_rules() {
        let fx = Fixture::new().await;
        let products = service(&fx);

        for bad in ["-1", "abc", "NaN"] {
            let err = products
                .create(input(bad, vec![image("a.jpg")]))
                .await
                .unwrap_err();
            assert_eq!(err.kind, ErrorKind::Validation, "price {bad}");
        }
        let free = products.create(input("0", vec![image("a.jpg")])).await.unwrap();
        assert_eq!(free.price, 0.0);
    }

    #[tokio::test]
    async fn test_update_orders_kept_then_new() {
        let fx = Fixture::new().await;
        let products = service(&fx);
        let product = products
            .create(input(
                "120",
                vec![image("a.jpg"), image("b.jpg"), image("c.jpg")],
            ))
            .await
            .unwrap();
        let [a, b, c] = [0, 1, 2].map(|i| product.images[i].clone());

        let mut edit = input("150", vec![image("d.jpg"), image("e.jpg")]);
        edit.images_to_remove = vec![b.clone()];
        let updated = products
            .update(product.id.into_uuid(), edit)
            .await
            .unwrap();

        assert_eq!(updated.images.len(), 4);
        assert_eq!(updated.images[..2], [a.clone(), c.clone()]);
        assert!(updated.images[2].ends_with("-d.jpg"));
        assert!(updated.images[3].ends_with("-e.jpg"));
        assert!(!fx.on_disk(&b));
        assert!(fx.on_disk(&a));
        assert_eq!(updated.price, 150.0);
    }

    #[tokio::test]
    async fn test_cannot_remove_every_image() {
        let fx = Fixture::new().await;
        let products = service(&fx);
        let product = products.create(input("1", vec![image("a.jpg")])).await.unwrap();

        let mut edit = input("1", Vec::new());
        edit.images_to_remove = product.images.clone();
        let err = products
            .update(product.id.into_uuid(), edit)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(fx.on_disk(&product.images[0]));
    }
}
