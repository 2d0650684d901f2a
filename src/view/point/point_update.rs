use std::sync::Arc;

use anyhow::Result;
use thiserror::Error;
use tracing::{debug, warn};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::core::client::point_client::{ClientError, PointApi};
use crate::core::persistence::point::point_entity::Point;
use crate::view::i18n::Translator;
use crate::view::locale::LocaleSubscription;
use crate::view::navigation::Navigator;
use crate::view::notification::{Notification, Notifier, Variant};
use crate::view::router::entities::POINT_ID_PARAM;
use crate::view::router::RouteParams;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("Point form is invalid: {0}")]
    Invalid(#[from] ValidationErrors),

    #[error(transparent)]
    Request(#[from] anyhow::Error),
}

/// Create/edit form for a point.
pub struct PointUpdate {
    point_service: Arc<dyn PointApi>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    translator: Arc<Translator>,
    locale: LocaleSubscription,
    pub point: Point,
    is_saving: bool,
}

impl PointUpdate {
    pub fn new(
        point_service: Arc<dyn PointApi>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
        translator: Arc<Translator>,
        locale: LocaleSubscription,
    ) -> Self {
        Self {
            point_service,
            navigator,
            notifier,
            translator,
            locale,
            point: Point::default(),
            is_saving: false,
        }
    }

    /// Edit mode when `pointId` is present, create mode otherwise.
    pub async fn on_enter(&mut self, params: &RouteParams) -> Result<()> {
        if let Some(id) = params.id(POINT_ID_PARAM)? {
            self.retrieve_point(id).await?;
        }
        Ok(())
    }

    pub async fn retrieve_point(&mut self, point_id: i64) -> Result<()> {
        match self.point_service.find(point_id).await {
            Ok(point) => {
                self.point = point;
                Ok(())
            }
            Err(err) => {
                warn!(point_id, error = %err, "Failed to retrieve Point");
                Err(err)
            }
        }
    }

    pub fn is_saving(&self) -> bool {
        self.is_saving
    }

    pub fn current_language(&self) -> String {
        self.locale.current_language()
    }

    /// Record rules plus the form's own: `title` and `description` must not be empty.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = self.point.validate().err().unwrap_or_default();
        for (field, value) in [("title", &self.point.title), ("description", &self.point.description)] {
            if value.as_deref().is_some_and(str::is_empty) {
                errors.add(field, ValidationError::new("required"));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Updates when the point has an id, creates it otherwise.
    ///
    /// On success navigates back and toasts the outcome. On failure the saving
    /// flag is cleared, an error toast is shown and the error is returned.
    pub async fn save(&mut self) -> Result<Point, SaveError> {
        self.validate()?;
        self.is_saving = true;

        let outcome = match self.point.id {
            Some(_) => self.point_service.update(&self.point).await,
            None => self.point_service.create(&self.point).await,
        };
        let updated = self.point.id.is_some();
        self.is_saving = false;

        match outcome {
            Ok(saved) => {
                debug!(id = ?saved.id, updated, "Point saved");
                self.navigator.go(-1);
                let param = saved.id.map(|id| id.to_string());
                let notification = if updated {
                    self.notification("Info", Variant::Info, self.translator.point_key("updated"), param)
                } else {
                    self.notification("Success", Variant::Success, self.translator.point_key("created"), param)
                };
                self.notifier.toast(notification);
                Ok(saved)
            }
            Err(err) => {
                warn!(error = %err, "Failed to save Point");
                let key = match err.downcast_ref::<ClientError>() {
                    Some(ClientError::Status { status, .. }) => format!("error.http.{}", status.as_u16()),
                    _ => "error.unexpected".to_string(),
                };
                self.notifier.toast(self.notification("Error", Variant::Danger, key, None));
                Err(SaveError::Request(err))
            }
        }
    }

    pub fn previous_state(&self) {
        self.navigator.go(-1);
    }

    /// Point has no related entities to load.
    pub fn init_relationships(&mut self) {}

    fn notification(&self, title: &'static str, variant: Variant, key: String, param: Option<String>) -> Notification {
        let message = self
            .translator
            .translate(&self.current_language(), &key, param.as_deref());
        Notification::new(title, variant, key, param, message)
    }
}
