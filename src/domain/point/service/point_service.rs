use tracing::debug;
use validator::Validate;

use crate::core::persistence::point::point_entity::Point;
use crate::core::persistence::point::point_repository::PointRepository;
use crate::domain::point::dto::page_request::PageRequest;
use crate::domain::point::dto::point_page::PointPage;
use crate::errors::{internal_error, AppError};

pub const ENTITY_NAME: &str = "point";

/// Server-side rules for managing points.
pub struct PointService<R: PointRepository> {
    repo: R,
}

impl<R: PointRepository> PointService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create(&self, point: Point) -> Result<Point, AppError> {
        debug!(?point, "REST request to save Point");
        if point.id.is_some() {
            return Err(AppError::bad_request_alert(
                "A new point cannot already have an ID",
                ENTITY_NAME,
                "idexists",
            ));
        }
        point.validate()?;

        self.repo.save(point).map_err(internal_error)
    }

    pub fn update(&self, id: i64, point: Point) -> Result<Point, AppError> {
        debug!(id, ?point, "REST request to update Point");
        self.check_target(id, &point)?;
        point.validate()?;

        self.repo.save(point).map_err(internal_error)
    }

    /// Applies only the fields present on `patch`.
    pub fn partial_update(&self, id: i64, patch: Point) -> Result<Point, AppError> {
        debug!(id, ?patch, "REST request to partial update Point partially");
        self.check_target(id, &patch)?;

        let mut existing = self
            .repo
            .find_by_id(id)
            .map_err(internal_error)?
            .ok_or_else(|| AppError::NotFound(format!("point {id}")))?;
        existing.merge(patch);
        existing.validate()?;

        self.repo.save(existing).map_err(internal_error)
    }

    pub fn find_all(&self, page: &PageRequest) -> Result<PointPage, AppError> {
        debug!("REST request to get a page of Points");
        self.repo.find_all(page).map_err(internal_error)
    }

    pub fn find_one(&self, id: i64) -> Result<Point, AppError> {
        debug!(id, "REST request to get Point");
        self.repo
            .find_by_id(id)
            .map_err(internal_error)?
            .ok_or_else(|| AppError::NotFound(format!("point {id}")))
    }

    pub fn delete(&self, id: i64) -> Result<(), AppError> {
        debug!(id, "REST request to delete Point");
        self.repo.delete_by_id(id).map_err(internal_error)
    }

    pub fn search(&self, query: &str, page: &PageRequest) -> Result<PointPage, AppError> {
        debug!(query, "REST request to search for a page of Points");
        self.repo.search(query, page).map_err(internal_error)
    }

    fn check_target(&self, id: i64, point: &Point) -> Result<(), AppError> {
        let Some(body_id) = point.id else {
            return Err(AppError::bad_request_alert("Invalid id", ENTITY_NAME, "idnull"));
        };
        if body_id != id {
            return Err(AppError::bad_request_alert("Invalid ID", ENTITY_NAME, "idinvalid"));
        }
        if !self.repo.exists_by_id(id).map_err(internal_error)? {
            return Err(AppError::bad_request_alert(
                "Entity not found",
                ENTITY_NAME,
                "idnotfound",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::persistence::point::point_repository::InMemoryPointRepository;

    fn service() -> PointService<InMemoryPointRepository> {
        PointService::new(InMemoryPointRepository::new())
    }

    fn draft(title: &str) -> Point {
        Point::new(None, Some(title.into()), Some("somewhere".into()))
    }

    fn error_key(err: AppError) -> String {
        match err {
            AppError::BadRequestAlert { error_key, .. } => error_key,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn create_assigns_id() {
        let created = service().create(draft("dock")).unwrap();
        assert_eq!(created.id, Some(1));
    }

    #[test]
    fn create_rejects_existing_id() {
        let mut p = draft("dock");
        p.id = Some(4);
        assert_eq!(error_key(service().create(p).unwrap_err()), "idexists");
    }

    #[test]
    fn create_rejects_invalid_point() {
        let err = service().create(draft(&"x".repeat(21))).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn update_checks_ids() {
        let svc = service();
        let created = svc.create(draft("dock")).unwrap();

        assert_eq!(error_key(svc.update(1, draft("x")).unwrap_err()), "idnull");
        assert_eq!(error_key(svc.update(2, created.clone()).unwrap_err()), "idinvalid");

        let mut ghost = created.clone();
        ghost.id = Some(9);
        assert_eq!(error_key(svc.update(9, ghost).unwrap_err()), "idnotfound");

        let mut renamed = created;
        renamed.title = Some("pier".into());
        let updated = svc.update(1, renamed).unwrap();
        assert_eq!(updated.title.as_deref(), Some("pier"));
    }

    #[test]
    fn partial_update_merges_fields() {
        let svc = service();
        svc.create(draft("dock")).unwrap();

        let patched = svc
            .partial_update(1, Point::new(Some(1), None, Some("east side".into())))
            .unwrap();
        assert_eq!(patched.title.as_deref(), Some("dock"));
        assert_eq!(patched.description.as_deref(), Some("east side"));
    }

    #[test]
    fn find_one_missing_is_not_found() {
        assert!(matches!(service().find_one(3), Err(AppError::NotFound(_))));
    }

    #[test]
    fn delete_then_search() {
        let svc = service();
        svc.create(draft("dock")).unwrap();
        svc.create(draft("hill")).unwrap();
        svc.delete(1).unwrap();

        let page = svc.search("dock", &PageRequest::default()).unwrap();
        assert_eq!(page.total_count, 0);
        assert_eq!(svc.find_all(&PageRequest::default()).unwrap().total_count, 1);
    }
}
