//! # Inventory State
//!
//! The single owner of the product collection and the form that edits it.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Inventory Store Operations                           │
//! │                                                                         │
//! │  User Action              Store Method            State Change          │
//! │  ───────────              ────────────            ────────────          │
//! │                                                                         │
//! │  App start ──────────────► initialize() ────────► products = load()    │
//! │                                                                         │
//! │  Type in a field ────────► stage_field() ───────► form text, flag      │
//! │                                                                         │
//! │  Click Add ──────────────► add_product() ───────► products.push(p) ★   │
//! │                                                                         │
//! │  Click Edit on a card ───► begin_edit() ────────► form = p, edit mode  │
//! │                                                                         │
//! │  Click Save ─────────────► save_edit() ─────────► products[i] = p' ★   │
//! │                                                                         │
//! │  Click Delete ───────────► delete_product() ────► products.remove ★    │
//! │                                                                         │
//! │  Click Cancel ───────────► cancel_edit() ───────► form reset           │
//! │                                                                         │
//! │  ★ = ends with persist(): the whole collection is written once.        │
//! │      A failed write is logged; memory stays authoritative.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//! Every method takes `&self` or `&mut self`, so the borrow checker enforces
//! the one-mutator rule. `persist` is awaited inside the mutating call, which
//! keeps writes in the same order as the mutations they reflect.

use stockroom_core::{
    generate_product_id, CoreError, CoreResult, FieldErrors, FormField, FormStaging, Product,
};
use stockroom_db::ProductRepository;
use tracing::{debug, error, info};

/// Product collection plus form staging, synchronized with storage.
#[derive(Debug)]
pub struct InventoryStore {
    /// Insertion order, ids unique
    products: Vec<Product>,

    form: FormStaging,

    repo: ProductRepository,
}

impl InventoryStore {
    /// Loads the persisted collection and starts with a blank form.
    ///
    /// Nothing stored, or a load that fails, both give an empty collection.
    /// The failure is logged, not returned.
    pub async fn initialize(repo: ProductRepository) -> Self {
        let products = match repo.load().await {
            Ok(Some(products)) => {
                info!(count = products.len(), key = %repo.key(), "Loaded inventory");
                products
            }
            Ok(None) => {
                info!(key = %repo.key(), "No stored inventory, starting empty");
                Vec::new()
            }
            Err(e) => {
                error!(error = %e, key = %repo.key(), "Failed to load inventory, starting empty");
                Vec::new()
            }
        };

        InventoryStore {
            products,
            form: FormStaging::new(),
            repo,
        }
    }

    // =========================================================================
    // Read access
    // =========================================================================

    /// The collection, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id.
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn form(&self) -> &FormStaging {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        self.form.errors()
    }

    pub fn is_editing(&self) -> bool {
        self.form.is_editing()
    }

    // =========================================================================
    // Form
    // =========================================================================

    /// Sanitizes and stages one field.
    pub fn stage_field(&mut self, field: FormField, raw: &str) {
        self.form.stage(field, raw);
    }

    /// Rewrites every error flag; true iff nothing is flagged.
    pub fn validate(&mut self) -> bool {
        self.form.validate()
    }

    /// Clears the form and leaves edit mode. The collection is untouched.
    pub fn cancel_edit(&mut self) {
        debug!("Form reset");
        self.form.reset();
    }

    /// Same as [`cancel_edit`](Self::cancel_edit).
    pub fn reset_form(&mut self) {
        self.cancel_edit();
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Appends a product built from the form.
    ///
    /// ## Behavior
    /// - Validation fails: flags stay raised, nothing else changes
    /// - Otherwise: new id, append, form reset, persist
    ///
    /// Called in edit mode it still creates a new product, and the edit is
    /// abandoned with the rest of the form.
    pub async fn add_product(&mut self) -> CoreResult<&Product> {
        if !self.form.validate() {
            return Err(self.form.invalid_fields_error().into());
        }
        let draft = self.form.draft()?;

        let id = self.fresh_id();
        debug!(id = %id, name = %draft.name, "Adding product");

        self.products.push(draft.into_product(id));
        let index = self.products.len() - 1;

        self.form.reset();
        self.persist().await;

        Ok(&self.products[index])
    }

    /// Enters edit mode for `product` and stages its fields.
    pub fn begin_edit(&mut self, product: &Product) {
        debug!(id = %product.id, "Editing product");
        self.form.load_product(product);
    }

    /// Enters edit mode for the product with `id`.
    pub fn begin_edit_by_id(&mut self, id: &str) -> CoreResult<()> {
        let product = self
            .product(id)
            .cloned()
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;
        self.begin_edit(&product);
        Ok(())
    }

    /// Writes the form back onto the product being edited.
    ///
    /// ## Behavior
    /// - Validation fails: flags stay raised, nothing else changes
    /// - Not in edit mode: [`CoreError::NotEditing`]
    /// - Target no longer in the collection: [`CoreError::ProductNotFound`],
    ///   form kept as-is
    /// - Otherwise: fields replaced in place (same position, same id),
    ///   form reset, persist
    pub async fn save_edit(&mut self) -> CoreResult<&Product> {
        if !self.form.validate() {
            return Err(self.form.invalid_fields_error().into());
        }

        let target = self
            .form
            .editing_id()
            .map(str::to_owned)
            .ok_or(CoreError::NotEditing)?;

        let index = self
            .products
            .iter()
            .position(|p| p.id == target)
            .ok_or_else(|| CoreError::ProductNotFound(target.clone()))?;

        let draft = self.form.draft()?;
        debug!(id = %target, "Saving product edit");
        draft.apply_to(&mut self.products[index]);

        self.form.reset();
        self.persist().await;

        Ok(&self.products[index])
    }

    /// Removes the product with `id`, if present.
    ///
    /// A missing id is not an error. If the removed id was being edited, the
    /// form is reset as well. Returns whether a product was removed.
    pub async fn delete_product(&mut self, id: &str) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        let removed = self.products.len() != before;

        if self.form.editing_id() == Some(id) {
            debug!(id = %id, "Deleted the product being edited, leaving edit mode");
            self.form.reset();
        }

        debug!(id = %id, removed, "Delete product");
        self.persist().await;

        removed
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Writes the whole collection; failures are logged and swallowed.
    async fn persist(&self) {
        if let Err(e) = self.repo.save(&self.products).await {
            error!(
                error = %e,
                count = self.products.len(),
                "Failed to persist inventory, keeping in-memory state"
            );
        }
    }

    /// A UUID v4 not already used in the collection.
    fn fresh_id(&self) -> String {
        loop {
            let id = generate_product_id();
            if self.product(&id).is_none() {
                return id;
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
