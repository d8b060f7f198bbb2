//! The generic list-screen controller.

use std::marker::PhantomData;
use std::sync::Arc;

use tracing::{debug, instrument, warn};

use vetclinic_core::error::InvalidInputError;
use vetclinic_core::{
    Confirm, Error, FilterSet, Form, Notice, Notifier, PageRequest, PageResult, Resource,
    ResourceClient, ResourceId, Result,
};

use crate::config::ScreenConfig;
use crate::state::{LoadState, LoadTicket, Modal, Pagination};

/// List, filter, paginate, create, edit and delete records of one entity.
///
/// All methods take `&mut self`: a screen is owned by one task. Responses
/// that arrive for a superseded load, or after [`unmount`](Self::unmount),
/// are discarded.
pub struct ListScreen<R, C> {
    client: C,
    notifier: Arc<dyn Notifier>,
    config: ScreenConfig,
    records: Vec<R>,
    load_state: LoadState,
    filters: FilterSet,
    pagination: Pagination,
    modal: Modal<R>,
    form: Option<Form>,
    issued: u64,
    mounted: bool,
    _resource: PhantomData<fn() -> R>,
}

impl<R, C> ListScreen<R, C>
where
    R: Resource,
    C: ResourceClient<R>,
{
    pub fn new(client: C, notifier: Arc<dyn Notifier>, config: ScreenConfig) -> Self {
        let pagination = Pagination::new(config.page_size);
        Self {
            client,
            notifier,
            config,
            records: Vec::new(),
            load_state: LoadState::Idle,
            filters: FilterSet::new(),
            pagination,
            modal: Modal::Closed,
            form: None,
            issued: 0,
            mounted: true,
            _resource: PhantomData,
        }
    }

    /// Start with these filters instead of none. Does not load.
    pub fn with_filters(mut self, filters: FilterSet) -> Self {
        self.filters = filters;
        self
    }

    /// Start on this page instead of the first. Does not load.
    pub fn with_page(mut self, page: u32) -> Self {
        self.pagination.current_page = page.max(1);
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn modal(&self) -> &Modal<R> {
        &self.modal
    }

    pub fn form(&self) -> Option<&Form> {
        self.form.as_ref()
    }

    /// The open form, for editing field values.
    pub fn form_mut(&mut self) -> Option<&mut Form> {
        self.form.as_mut()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Show the screen and load its first view.
    pub async fn mount(&mut self) -> Result<()> {
        self.mounted = true;
        self.load().await
    }

    /// Leave the screen; responses still in flight will be ignored.
    pub fn unmount(&mut self) {
        debug!(resource = R::PATH, "unmounted");
        self.mounted = false;
    }

    /// Issue a load for the current page and filters.
    ///
    /// The list keeps its previous contents while the load is in flight.
    pub fn begin_load(&mut self) -> Result<LoadTicket> {
        let page = PageRequest::new(self.pagination.current_page, self.pagination.page_size)?;
        self.issued += 1;
        self.load_state = LoadState::Loading;
        Ok(LoadTicket {
            seq: self.issued,
            page,
            filters: self.filters.clone(),
        })
    }

    /// Apply the response to a ticket from [`begin_load`](Self::begin_load).
    ///
    /// Returns `Ok(false)` when the ticket is stale or the screen is
    /// unmounted; the response is then dropped without touching any state.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<PageResult<R>>) -> Result<bool> {
        if !self.accepts(ticket.seq) {
            debug!(
                resource = R::PATH,
                seq = ticket.seq,
                latest = self.issued,
                mounted = self.mounted,
                "discarding stale list response"
            );
            return Ok(false);
        }

        match result {
            Ok(page) => {
                self.pagination.total_pages = page.pages();
                self.pagination.estimated = page.total_pages.is_estimated();
                self.records = page.data;
                self.load_state = LoadState::Loaded;
                Ok(true)
            }
            Err(err) => {
                self.fail(&err);
                Err(err)
            }
        }
    }

    /// Fetch the current page with the current filters.
    #[instrument(skip(self), fields(resource = R::PATH, page = self.pagination.current_page))]
    pub async fn load(&mut self) -> Result<()> {
        let ticket = self.begin_load()?;
        let result = self.client.list(&ticket.page, &ticket.filters).await;
        self.finish_load(ticket, result).map(|_| ())
    }

    /// Move to page `page` and load it.
    ///
    /// Pages outside `[1, total_pages]` are ignored and `Ok(false)` returned.
    pub async fn go_to_page(&mut self, page: u32) -> Result<bool> {
        if !self.pagination.contains(page) {
            debug!(page, total = self.pagination.total_pages, "page out of range");
            return Ok(false);
        }
        self.pagination.current_page = page;
        self.load().await?;
        Ok(true)
    }

    /// Set one filter, go back to the first page and reload.
    pub async fn set_filter(&mut self, field: &str, value: impl ToString) -> Result<()> {
        self.filters.set(field, value);
        self.pagination.current_page = 1;
        self.load().await
    }

    /// Blank every filter, go back to the first page and reload.
    pub async fn clear_filters(&mut self) -> Result<()> {
        self.filters.clear();
        self.pagination.current_page = 1;
        self.load().await
    }

    /// Open an empty create form, replacing any open modal.
    pub fn open_create(&mut self) {
        self.form = Some(Form::for_create::<R>(self.config.acting_user.as_deref()));
        self.modal = Modal::Creating;
    }

    /// Open an edit form pre-filled from `record`, replacing any open modal.
    pub fn open_edit(&mut self, record: R) {
        self.form = Some(Form::for_edit(&record));
        self.modal = Modal::Editing(record);
    }

    pub fn close_modal(&mut self) {
        self.modal = Modal::Closed;
        self.form = None;
    }

    /// Submit the open form.
    ///
    /// Invalid forms are reported and never reach the client. On success the
    /// modal closes and the list reloads with the current page and filters.
    #[instrument(skip(self), fields(resource = R::PATH))]
    pub async fn save(&mut self) -> Result<R> {
        let Some(form) = self.form.as_ref() else {
            return Err(InvalidInputError::Other {
                message: "no form is open".to_string(),
            }
            .into());
        };

        if let Err(err) = form.validate(R::AUDITED) {
            debug!(%err, "form rejected");
            self.notifier
                .notify(Notice::warning(self.config.locale.validation_failed()));
            return Err(err.into());
        }

        let locale = self.config.locale;
        let result = match &self.modal {
            Modal::Closed => {
                return Err(InvalidInputError::Other {
                    message: "no form is open".to_string(),
                }
                .into());
            }
            Modal::Creating => {
                let payload = form.create_payload(R::AUDITED)?;
                self.client
                    .create(&payload)
                    .await
                    .map(|saved| (saved, locale.created(&R::LABELS)))
            }
            Modal::Editing(record) => {
                let payload =
                    form.update_payload(R::AUDITED, self.config.acting_user.as_deref())?;
                debug!(fields = payload.len(), "sending changed fields");
                self.client
                    .update(record.id(), &payload)
                    .await
                    .map(|saved| (saved, locale.updated(&R::LABELS)))
            }
        };

        match result {
            Ok((saved, message)) => {
                self.close_modal();
                self.notifier.notify(Notice::success(message));
                self.reload().await;
                Ok(saved)
            }
            Err(err) => {
                warn!(%err, "save failed");
                self.notifier.notify(Notice::error(err.to_string()));
                Err(err)
            }
        }
    }

    /// Delete `record` once the user confirms.
    ///
    /// Returns `Ok(false)` if the user declined or the server reported the
    /// delete as unsuccessful.
    #[instrument(skip(self, record, confirm), fields(resource = R::PATH, id = %record.id()))]
    pub async fn delete(&mut self, record: &R, confirm: &dyn Confirm) -> Result<bool> {
        let prompt = self
            .config
            .locale
            .delete_prompt(&R::LABELS, &record.display_name());
        if !confirm.confirm(&prompt).await {
            debug!("delete declined");
            return Ok(false);
        }

        match self.client.delete(record.id()).await {
            Ok(envelope) if envelope.success => {
                self.notifier.notify(Notice::success(envelope.message));
                self.reload().await;
                Ok(true)
            }
            Ok(envelope) => {
                warn!(message = %envelope.message, "server refused delete");
                self.notifier.notify(Notice::error(envelope.message));
                Ok(false)
            }
            Err(err) => {
                warn!(%err, "delete failed");
                self.notifier.notify(Notice::error(err.to_string()));
                Err(err)
            }
        }
    }

    /// Show only the record with this id; a blank id restores the list.
    ///
    /// An unknown id empties the list and leaves the screen in the error
    /// state without failing the call.
    #[instrument(skip(self), fields(resource = R::PATH))]
    pub async fn search_by_id(&mut self, id: &str) -> Result<()> {
        let id = id.trim();
        if id.is_empty() {
            return self.load().await;
        }
        let id = ResourceId::new(id)?;

        self.issued += 1;
        let seq = self.issued;
        self.load_state = LoadState::Loading;
        let result = self.client.get(&id).await;

        if !self.accepts(seq) {
            debug!(seq, latest = self.issued, "discarding stale search response");
            return Ok(());
        }

        match result {
            Ok(record) => {
                self.records = vec![record];
                self.pagination.current_page = 1;
                self.pagination.total_pages = 1;
                self.pagination.estimated = false;
                self.load_state = LoadState::Loaded;
                Ok(())
            }
            Err(err) if err.is_not_found() => {
                self.records.clear();
                self.pagination.current_page = 1;
                self.pagination.total_pages = 1;
                self.pagination.estimated = false;
                self.fail(&err);
                Ok(())
            }
            Err(err) => {
                self.fail(&err);
                Err(err)
            }
        }
    }

    /// Reload after a mutation. Failures are already in the load state.
    async fn reload(&mut self) {
        if let Err(err) = self.load().await {
            debug!(%err, "reload after mutation failed");
        }
    }

    fn accepts(&self, seq: u64) -> bool {
        self.mounted && seq == self.issued
    }

    fn fail(&mut self, err: &Error) {
        warn!(resource = R::PATH, %err, "load failed");
        let message = err.to_string();
        self.notifier.notify(Notice::error(message.clone()));
        self.load_state = LoadState::Error(message);
    }
}
