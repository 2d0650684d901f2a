pub mod point_details;
pub mod point_list;
pub mod point_update;

use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::core::client::point_client::PointApi;
use crate::view::i18n::Translator;
use crate::view::locale::LocaleStore;
use crate::view::navigation::Navigator;
use crate::view::notification::Notifier;
use crate::view::router::entities::{POINT_ID_PARAM, POINT_ROUTES};
use crate::view::router::{authorize, resolve, AuthorityChecker, RouteError, ViewKind};

use point_details::PointDetails;
use point_list::PointList;
use point_update::PointUpdate;

/// An activated Point view.
pub enum PointView {
    List(PointList),
    Update(PointUpdate),
    Details(PointDetails),
}

impl PointView {
    pub fn kind(&self) -> ViewKind {
        match self {
            PointView::List(_) => ViewKind::PointList,
            PointView::Update(_) => ViewKind::PointUpdate,
            PointView::Details(_) => ViewKind::PointDetails,
        }
    }
}

/// Collaborators shared by every Point view, and the entry point that turns
/// a path into an entered view.
#[derive(Clone)]
pub struct PointViews {
    pub point_service: Arc<dyn PointApi>,
    pub navigator: Arc<dyn Navigator>,
    pub notifier: Arc<dyn Notifier>,
    pub translator: Arc<Translator>,
    pub locale: Arc<LocaleStore>,
}

impl PointViews {
    /// Matches `path`, checks authorities, builds the view and runs its enter hook.
    ///
    /// Route errors (unknown path, missing authority, malformed `pointId`) are
    /// returned before history moves. A failed enter fetch does not: the view
    /// is still returned, showing whatever data it had.
    pub async fn open(&self, path: &str, checker: &dyn AuthorityChecker) -> Result<PointView> {
        let matched =
            resolve(&POINT_ROUTES, path).ok_or_else(|| RouteError::NotFound(path.to_string()))?;
        authorize(&matched, checker)?;
        matched.params.id(POINT_ID_PARAM)?;
        debug!(route = matched.route.name, path, "Entering Point view");

        self.navigator.push(path);

        let view = match matched.route.component {
            ViewKind::PointList => {
                let mut view = PointList::new(
                    self.point_service.clone(),
                    self.notifier.clone(),
                    self.translator.clone(),
                    self.locale.subscribe(),
                );
                entered(matched.route.name, view.on_enter().await);
                PointView::List(view)
            }
            ViewKind::PointUpdate => {
                let mut view = PointUpdate::new(
                    self.point_service.clone(),
                    self.navigator.clone(),
                    self.notifier.clone(),
                    self.translator.clone(),
                    self.locale.subscribe(),
                );
                entered(matched.route.name, view.on_enter(&matched.params).await);
                view.init_relationships();
                PointView::Update(view)
            }
            ViewKind::PointDetails => {
                let mut view = PointDetails::new(self.point_service.clone(), self.navigator.clone());
                entered(matched.route.name, view.on_enter(&matched.params).await);
                PointView::Details(view)
            }
        };

        Ok(view)
    }
}

fn entered(route: &str, outcome: Result<()>) {
    if let Err(err) = outcome {
        debug!(route, error = %err, "Point view opened without fresh data");
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Mutex;

    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use reqwest::StatusCode;

    use crate::core::client::point_client::{ClientError, PointApi};
    use crate::core::persistence::point::point_entity::Point;
    use crate::domain::point::dto::page_request::PageRequest;
    use crate::domain::point::dto::point_page::PointPage;

    pub const CREATED_ID: i64 = 42;

    enum Failure {
        Status(u16),
        Unexpected(&'static str),
    }

    #[derive(Default)]
    struct StubState {
        found: Option<Point>,
        page: PointPage,
        failure: Option<Failure>,
        calls: Vec<String>,
    }

    /// Records every call and answers from canned values.
    #[derive(Default)]
    pub struct StubPointApi {
        state: Mutex<StubState>,
    }

    impl StubPointApi {
        pub fn set_found(&self, point: Point) {
            self.state.lock().unwrap().found = Some(point);
        }

        pub fn set_page(&self, page: PointPage) {
            self.state.lock().unwrap().page = page;
        }

        /// Every later call fails with an HTTP status.
        pub fn fail_with(&self, status: u16) {
            self.state.lock().unwrap().failure = Some(Failure::Status(status));
        }

        /// Every later call fails without reaching the server.
        pub fn fail_unexpectedly(&self, message: &'static str) {
            self.state.lock().unwrap().failure = Some(Failure::Unexpected(message));
        }

        pub fn calls(&self) -> Vec<String> {
            self.state.lock().unwrap().calls.clone()
        }

        fn record(&self, call: String) -> Result<()> {
            let mut state = self.state.lock().unwrap();
            state.calls.push(call);
            match state.failure {
                Some(Failure::Status(code)) => Err(ClientError::Status {
                    status: StatusCode::from_u16(code).unwrap(),
                    error_key: None,
                }
                .into()),
                Some(Failure::Unexpected(message)) => Err(anyhow!(message)),
                None => Ok(()),
            }
        }
    }

    fn sort_param(page: &PageRequest) -> String {
        page.sort
            .iter()
            .map(|s| s.to_param())
            .collect::<Vec<_>>()
            .join(";")
    }

    #[async_trait]
    impl PointApi for StubPointApi {
        async fn find(&self, id: i64) -> Result<Point> {
            self.record(format!("find:{id}"))?;
            let found = self.state.lock().unwrap().found.clone();
            Ok(found.unwrap_or_else(|| Point::new(Some(id), None, None)))
        }

        async fn retrieve(&self, page: &PageRequest) -> Result<PointPage> {
            self.record(format!("retrieve:{}:{}:{}", page.page, page.size, sort_param(page)))?;
            Ok(self.state.lock().unwrap().page.clone())
        }

        async fn search(&self, query: &str, page: &PageRequest) -> Result<PointPage> {
            self.record(format!("search:{query}:{}", page.page))?;
            Ok(self.state.lock().unwrap().page.clone())
        }

        async fn create(&self, point: &Point) -> Result<Point> {
            self.record("create".to_string())?;
            Ok(Point {
                id: Some(CREATED_ID),
                ..point.clone()
            })
        }

        async fn update(&self, point: &Point) -> Result<Point> {
            self.record(format!("update:{}", point.id.unwrap_or_default()))?;
            Ok(point.clone())
        }

        async fn partial_update(&self, point: &Point) -> Result<Point> {
            self.record(format!("partial_update:{}", point.id.unwrap_or_default()))?;
            Ok(point.clone())
        }

        async fn delete(&self, id: i64) -> Result<()> {
            self.record(format!("delete:{id}"))
        }
    }
}
