use serde::Serialize;
use tracing::instrument;

use crate::app::context::ApiContext;
use crate::constants::{item_path, PRODUCTS, RAW_MATERIALS, RAW_MATERIAL_BASES, RAW_MATERIAL_CATEGORIES, SUPPLIERS};
use crate::domain::materials::{Product, RawMaterial, RawMaterialBase, RawMaterialCategory, Supplier};
use crate::error::Result;

/// Base materials, received lots and material categories.
pub struct RawMaterialsApi {
    ctx: ApiContext,
}

impl RawMaterialsApi {
    pub fn new(ctx: ApiContext) -> Self {
        Self { ctx }
    }

    // Raw material bases

    pub async fn list_bases(&self) -> Result<Vec<RawMaterialBase>> {
        self.ctx.list(RAW_MATERIAL_BASES).await
    }

    pub async fn get_base(&self, id: i64) -> Result<RawMaterialBase> {
        self.ctx.get(&item_path(RAW_MATERIAL_BASES, id)).await
    }

    pub async fn create_base<B: Serialize + ?Sized>(&self, data: &B) -> Result<RawMaterialBase> {
        self.ctx.post(RAW_MATERIAL_BASES, data).await
    }

    pub async fn update_base<B: Serialize + ?Sized>(&self, id: i64, data: &B) -> Result<RawMaterialBase> {
        self.ctx.put(&item_path(RAW_MATERIAL_BASES, id), data).await
    }

    pub async fn delete_base(&self, id: i64) -> Result<()> {
        self.ctx.delete(&item_path(RAW_MATERIAL_BASES, id)).await
    }

    // Raw materials (lots)

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<RawMaterial>> {
        self.ctx.list(RAW_MATERIALS).await
    }

    pub async fn get(&self, id: i64) -> Result<RawMaterial> {
        self.ctx.get(&item_path(RAW_MATERIALS, id)).await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, data: &B) -> Result<RawMaterial> {
        self.ctx.post(RAW_MATERIALS, data).await
    }

    pub async fn update<B: Serialize + ?Sized>(&self, id: i64, data: &B) -> Result<RawMaterial> {
        self.ctx.put(&item_path(RAW_MATERIALS, id), data).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.ctx.delete(&item_path(RAW_MATERIALS, id)).await
    }

    // Categories

    pub async fn list_categories(&self) -> Result<Vec<RawMaterialCategory>> {
        self.ctx.list(RAW_MATERIAL_CATEGORIES).await
    }

    pub async fn get_category(&self, id: i64) -> Result<RawMaterialCategory> {
        self.ctx.get(&item_path(RAW_MATERIAL_CATEGORIES, id)).await
    }

    pub async fn create_category<B: Serialize + ?Sized>(&self, data: &B) -> Result<RawMaterialCategory> {
        self.ctx.post(RAW_MATERIAL_CATEGORIES, data).await
    }

    pub async fn update_category<B: Serialize + ?Sized>(
        &self,
        id: i64,
        data: &B,
    ) -> Result<RawMaterialCategory> {
        self.ctx.put(&item_path(RAW_MATERIAL_CATEGORIES, id), data).await
    }

    pub async fn delete_category(&self, id: i64) -> Result<()> {
        self.ctx.delete(&item_path(RAW_MATERIAL_CATEGORIES, id)).await
    }
}

/// Read-only product catalogue.
pub struct ProductsApi {
    ctx: ApiContext,
}

impl ProductsApi {
    pub fn new(ctx: ApiContext) -> Self {
        Self { ctx }
    }

    pub async fn list(&self) -> Result<Vec<Product>> {
        self.ctx.list(PRODUCTS).await
    }

    pub async fn get(&self, id: i64) -> Result<Product> {
        self.ctx.get(&item_path(PRODUCTS, id)).await
    }
}

pub struct SuppliersApi {
    ctx: ApiContext,
}

impl SuppliersApi {
    pub fn new(ctx: ApiContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Supplier>> {
        self.ctx.list(SUPPLIERS).await
    }

    pub async fn get(&self, id: i64) -> Result<Supplier> {
        self.ctx.get(&item_path(SUPPLIERS, id)).await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, data: &B) -> Result<Supplier> {
        self.ctx.post(SUPPLIERS, data).await
    }

    pub async fn update<B: Serialize + ?Sized>(&self, id: i64, data: &B) -> Result<Supplier> {
        self.ctx.put(&item_path(SUPPLIERS, id), data).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.ctx.delete(&item_path(SUPPLIERS, id)).await
    }
}
