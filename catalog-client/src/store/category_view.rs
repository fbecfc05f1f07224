//! Category list view: snapshot, create draft, edit selection, commands

use std::sync::Arc;

use shared::models::{Category, CategoryCreate, CategoryUpdate};
use tokio::sync::broadcast;

use super::{CommandOutcome, CommandPhase, StoreEvent, ViewStatus};
use crate::client::HttpClient;
use crate::repository::{CategoryRepository, EntityKind, Repository};
use crate::{ClientResult, validation};

const LOAD_FAILED: &str = "Failed to load categories";
const ADD_FAILED: &str = "Failed to add category";
const UPDATE_FAILED: &str = "Failed to update category";
const DELETE_FAILED: &str = "Failed to delete category";

/// Category management view
///
/// `categories` is always the full list from the last successful fetch.
/// The selection is an owned copy, so edits stay invisible in the list
/// until the update is confirmed and the list re-fetched.
pub struct CategoryView<H> {
    repo: CategoryRepository<H>,
    categories: Vec<Category>,
    selected: Option<Category>,
    draft: CategoryCreate,
    status: ViewStatus,
}

impl<H: HttpClient> CategoryView<H> {
    pub fn new(client: Arc<H>) -> Self {
        Self {
            repo: CategoryRepository::new(client),
            categories: Vec::new(),
            selected: None,
            draft: CategoryCreate::default(),
            status: ViewStatus::new(),
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Category currently being edited
    pub fn selected(&self) -> Option<&Category> {
        self.selected.as_ref()
    }

    /// Create form contents
    pub fn draft(&self) -> &CategoryCreate {
        &self.draft
    }

    pub fn status(&self) -> &ViewStatus {
        &self.status
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.status.subscribe()
    }

    // ========== Loading ==========

    /// Initial load when the view opens
    pub async fn init(&mut self) {
        self.load_categories().await;
    }

    /// Re-fetch the list; on failure the previous snapshot is kept
    pub async fn load_categories(&mut self) -> bool {
        let _loading = self.status.enter_loading();
        self.status.clear_messages();

        match self.refresh_after_write(EntityKind::Category).await {
            Ok(()) => true,
            Err(_) => {
                self.status.set_error(LOAD_FAILED);
                false
            }
        }
    }

    /// Replace the affected snapshot in full with the server's list
    pub async fn refresh_after_write(&mut self, kind: EntityKind) -> ClientResult<()> {
        match kind {
            EntityKind::Category => {
                let categories = self.repo.find_all().await?;
                self.categories = categories;
                self.status.emit(StoreEvent::CategoriesReplaced);
            }
            EntityKind::Product => {
                tracing::debug!("Category view holds no products, nothing to refresh");
            }
        }
        Ok(())
    }

    // ========== Draft ==========

    /// Edit the create form
    pub fn edit_draft(&mut self, edit: impl FnOnce(&mut CategoryCreate)) {
        edit(&mut self.draft);
        self.status.emit(StoreEvent::DraftChanged);
    }

    // ========== Commands ==========

    /// Create a category from the draft
    pub async fn add_category(&mut self) -> CommandOutcome {
        self.status.clear_messages();
        self.status.set_phase(CommandPhase::Validating);
        if let Err(e) = validation::validate_category_draft(&self.draft) {
            return self.status.reject(&e);
        }

        let _loading = self.status.enter_loading();
        self.status.set_phase(CommandPhase::Submitting);
        if self.repo.create(&self.draft).await.is_err() {
            return self.status.fail(ADD_FAILED);
        }

        self.draft = CategoryCreate::default();
        self.status.emit(StoreEvent::DraftChanged);
        self.finish_write("Category added").await
    }

    /// Start editing a copy of the category with `id`
    pub fn begin_edit(&mut self, id: i64) -> bool {
        let Some(category) = self.categories.iter().find(|c| c.id == id) else {
            tracing::warn!(category_id = id, "Cannot edit unknown category");
            return false;
        };
        self.selected = Some(category.clone());
        self.status.emit(StoreEvent::SelectionChanged);
        true
    }

    /// Mutate the selection only; the list is untouched
    pub fn edit_selection(&mut self, edit: impl FnOnce(&mut Category)) {
        if let Some(selected) = self.selected.as_mut() {
            edit(selected);
            self.status.emit(StoreEvent::SelectionChanged);
        }
    }

    /// Submit the selection as a full update
    ///
    /// On failure the selection is kept so the user can retry.
    pub async fn update_category(&mut self) -> CommandOutcome {
        let Some(selected) = self.selected.as_ref() else {
            return CommandOutcome::Cancelled;
        };
        self.status.clear_messages();
        self.status.set_phase(CommandPhase::Validating);
        if let Err(e) = validation::validate_category(&selected.category_name, &selected.description)
        {
            return self.status.reject(&e);
        }
        let payload = CategoryUpdate::from(selected);

        let _loading = self.status.enter_loading();
        self.status.set_phase(CommandPhase::Submitting);
        if self.repo.update(&payload).await.is_err() {
            return self.status.fail(UPDATE_FAILED);
        }

        self.selected = None;
        self.status.emit(StoreEvent::SelectionChanged);
        self.finish_write("Category updated").await
    }

    /// Discard the selection
    pub fn cancel_edit(&mut self) {
        if self.selected.take().is_some() {
            self.status.emit(StoreEvent::SelectionChanged);
        }
    }

    /// Soft-delete a category; without confirmation nothing is sent
    pub async fn delete_category(&mut self, id: i64, confirmed: bool) -> CommandOutcome {
        if !confirmed {
            tracing::debug!(category_id = id, "Delete not confirmed");
            return CommandOutcome::Cancelled;
        }
        self.status.clear_messages();

        let _loading = self.status.enter_loading();
        self.status.set_phase(CommandPhase::Submitting);
        if self.repo.delete(id).await.is_err() {
            return self.status.fail(DELETE_FAILED);
        }

        if self.selected.as_ref().is_some_and(|c| c.id == id) {
            self.cancel_edit();
        }
        self.finish_write("Category deleted").await
    }

    /// Refresh after a confirmed write
    ///
    /// The write already succeeded, so a failed refresh is reported through
    /// the error message but the command still completes.
    async fn finish_write(&mut self, notice: &str) -> CommandOutcome {
        self.status.set_phase(CommandPhase::Refreshing);
        if self.refresh_after_write(EntityKind::Category).await.is_err() {
            self.status.set_error(LOAD_FAILED);
        }
        self.status.set_notice(notice);
        self.status.set_phase(CommandPhase::Idle);
        tracing::info!("{}", notice);
        CommandOutcome::Completed
    }
}
