use std::marker::PhantomData;

use reqwest::Method;
use tracing::{debug, warn};

use backoffice_core::Record;

use crate::modules::auth::{AuthSession, RequestOptions, RequestOutcome};
use crate::modules::shared::args::OutputFormat;
use crate::modules::shared::confirm::Confirm;
use crate::modules::shared::render::{render_json, render_table};
use crate::modules::shared::types::{DeleteOutcome, DeleteState, Notification, ViewOutcome};
use crate::modules::system::http::error_message;

/// List/create/update/delete for one resource collection, routed through the session.
pub struct ResourceController<'s, R: Record> {
    session: &'s mut AuthSession,
    format: OutputFormat,
    delete_state: DeleteState,
    _record: PhantomData<R>,
}

impl<'s, R: Record> ResourceController<'s, R> {
    pub fn new(session: &'s mut AuthSession) -> Self {
        Self {
            session,
            format: OutputFormat::Table,
            delete_state: DeleteState::Idle,
            _record: PhantomData,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    #[cfg(test)]
    pub fn delete_state(&self) -> DeleteState {
        self.delete_state
    }

    pub async fn load_collection(&mut self) -> anyhow::Result<ViewOutcome> {
        self.load_from(&R::KIND.collection_path()).await
    }

    /// Loads any endpoint that answers with an array of this resource.
    pub async fn load_from(&mut self, endpoint: &str) -> anyhow::Result<ViewOutcome> {
        let operation = format!("Failed to load {}", R::KIND);
        self.request_view(endpoint, RequestOptions::get(), Shape::Many, operation)
            .await
    }

    pub async fn get_item(&mut self, id: i64) -> anyhow::Result<ViewOutcome> {
        let operation = format!("Failed to load {} {id}", R::KIND.singular());
        self.request_view(&R::KIND.item_path(id), RequestOptions::get(), Shape::One, operation)
            .await
    }

    /// Sends a request whose answer is one record, and renders it.
    pub async fn apply_one(
        &mut self,
        endpoint: &str,
        options: RequestOptions,
        operation: &str,
    ) -> anyhow::Result<ViewOutcome> {
        self.request_view(endpoint, options, Shape::One, format!("{operation} failed"))
            .await
    }

    /// Sends a request whose answer is an array of records, and renders it.
    pub async fn apply_many(
        &mut self,
        endpoint: &str,
        options: RequestOptions,
        operation: &str,
    ) -> anyhow::Result<ViewOutcome> {
        self.request_view(endpoint, options, Shape::Many, format!("{operation} failed"))
            .await
    }

    pub async fn create_item(&mut self, data: &R::Create) -> anyhow::Result<RequestOutcome> {
        let options = RequestOptions::json(Method::POST, data)?;
        self.session
            .authorized_request(&R::KIND.collection_path(), options)
            .await
    }

    pub async fn update_item(
        &mut self,
        id: i64,
        data: &R::Update,
    ) -> anyhow::Result<RequestOutcome> {
        let options = RequestOptions::json(Method::PUT, data)?;
        self.session
            .authorized_request(&R::KIND.item_path(id), options)
            .await
    }

    /// Nothing is sent unless `confirm` answers yes; a successful delete reloads the collection.
    pub async fn delete_item(
        &mut self,
        id: i64,
        prompt: &str,
        confirm: &mut dyn Confirm,
    ) -> anyhow::Result<DeleteOutcome> {
        self.transition(id, DeleteState::ConfirmationPending);
        if !confirm.confirm(prompt)? {
            self.transition(id, DeleteState::Cancelled);
            self.transition(id, DeleteState::Idle);
            return Ok(DeleteOutcome::Cancelled);
        }
        self.transition(id, DeleteState::Confirmed);

        self.transition(id, DeleteState::RequestInFlight);
        let outcome = self
            .session
            .authorized_request(&R::KIND.item_path(id), RequestOptions::new(Method::DELETE))
            .await?;
        let response = match outcome {
            RequestOutcome::Response(response) => response,
            RequestOutcome::Redirect(redirect) => {
                self.transition(id, DeleteState::Failure);
                return Ok(DeleteOutcome::Redirect(redirect));
            }
        };
        if !response.status().is_success() {
            let status = response.status();
            let message = error_message(response).await;
            self.transition(id, DeleteState::Failure);
            let notification = failure(
                format!("Failed to delete {} {id}", R::KIND.singular()),
                status,
                &message,
            );
            self.transition(id, DeleteState::NotificationShown);
            return Ok(DeleteOutcome::Failed(notification));
        }

        self.transition(id, DeleteState::Success);
        self.transition(id, DeleteState::ReloadTriggered);
        let view = self.load_collection().await?;
        Ok(DeleteOutcome::Reloaded(view))
    }

    async fn request_view(
        &mut self,
        endpoint: &str,
        options: RequestOptions,
        shape: Shape,
        operation: String,
    ) -> anyhow::Result<ViewOutcome> {
        let outcome = self.session.authorized_request(endpoint, options).await?;
        let response = match outcome {
            RequestOutcome::Response(response) => response,
            RequestOutcome::Redirect(redirect) => return Ok(ViewOutcome::Redirect(redirect)),
        };
        if !response.status().is_success() {
            let status = response.status();
            let message = error_message(response).await;
            warn!(resource = %R::KIND, endpoint, status = %status, "request failed");
            return Ok(ViewOutcome::Notice(failure(operation, status, &message)));
        }
        let body = response.bytes().await?;
        let parsed = match shape {
            Shape::Many => serde_json::from_slice::<Vec<R>>(&body),
            Shape::One => serde_json::from_slice::<R>(&body).map(|record| vec![record]),
        };
        let records = match parsed {
            Ok(records) => records,
            Err(err) => {
                warn!(resource = %R::KIND, endpoint, "response body invalid: {err}");
                return Ok(ViewOutcome::Notice(Notification::new(format!(
                    "{operation}: invalid response"
                ))));
            }
        };
        debug!(resource = %R::KIND, endpoint, count = records.len(), "records loaded");
        Ok(ViewOutcome::Rendered(self.render(&records)?))
    }

    fn render(&self, records: &[R]) -> anyhow::Result<String> {
        match self.format {
            OutputFormat::Table => Ok(render_table(records)),
            OutputFormat::Json => render_json(records),
        }
    }

    fn transition(&mut self, id: i64, next: DeleteState) {
        debug!(
            resource = %R::KIND,
            id,
            from = self.delete_state.as_str(),
            to = next.as_str(),
            "delete state"
        );
        self.delete_state = next;
    }
}

#[derive(Clone, Copy)]
enum Shape {
    One,
    Many,
}

fn failure(prefix: String, status: reqwest::StatusCode, message: &str) -> Notification {
    let message = message.trim();
    if message.is_empty() {
        Notification::new(format!("{prefix}: {status}"))
    } else {
        Notification::new(format!("{prefix}: {status} {message}"))
    }
}
