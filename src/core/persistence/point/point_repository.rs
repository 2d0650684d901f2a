use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use anyhow::{anyhow, Result};

use super::point_entity::Point;
use crate::domain::point::dto::page_request::{PageRequest, SortDirection};
use crate::domain::point::dto::point_page::PointPage;

/// Storage abstraction behind the Point REST resource.
pub trait PointRepository: Send + Sync {
    /// Stores `point`, assigning an id when it has none. Returns the stored value.
    fn save(&self, point: Point) -> Result<Point>;

    fn find_by_id(&self, id: i64) -> Result<Option<Point>>;

    fn exists_by_id(&self, id: i64) -> Result<bool> {
        Ok(self.find_by_id(id)?.is_some())
    }

    fn find_all(&self, page: &PageRequest) -> Result<PointPage>;

    fn search(&self, query: &str, page: &PageRequest) -> Result<PointPage>;

    fn delete_by_id(&self, id: i64) -> Result<()>;
}

/// Process-local repository keyed by id, backed by a sequence generator.
#[derive(Debug)]
pub struct InMemoryPointRepository {
    points: RwLock<BTreeMap<i64, Point>>,
    sequence: AtomicI64,
}

impl Default for InMemoryPointRepository {
    fn default() -> Self {
        Self {
            points: RwLock::new(BTreeMap::new()),
            sequence: AtomicI64::new(1),
        }
    }
}

impl InMemoryPointRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn page_of<'a>(matching: impl Iterator<Item = &'a Point>, page: &PageRequest) -> PointPage {
        let mut items: Vec<Point> = matching.cloned().collect();
        sort_points(&mut items, page);

        let total_count = items.len() as u64;
        let items = items
            .into_iter()
            .skip(page.offset())
            .take(page.size)
            .collect();

        PointPage { items, total_count }
    }
}

impl PointRepository for InMemoryPointRepository {
    fn save(&self, mut point: Point) -> Result<Point> {
        let id = match point.id {
            Some(id) => id,
            None => self.sequence.fetch_add(1, Ordering::SeqCst),
        };
        point.id = Some(id);

        let mut points = self
            .points
            .write()
            .map_err(|_| anyhow!("point store lock poisoned"))?;
        points.insert(id, point.clone());
        Ok(point)
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Point>> {
        let points = self
            .points
            .read()
            .map_err(|_| anyhow!("point store lock poisoned"))?;
        Ok(points.get(&id).cloned())
    }

    fn find_all(&self, page: &PageRequest) -> Result<PointPage> {
        let points = self
            .points
            .read()
            .map_err(|_| anyhow!("point store lock poisoned"))?;
        Ok(Self::page_of(points.values(), page))
    }

    fn search(&self, query: &str, page: &PageRequest) -> Result<PointPage> {
        let points = self
            .points
            .read()
            .map_err(|_| anyhow!("point store lock poisoned"))?;
        Ok(Self::page_of(points.values().filter(|p| p.matches(query)), page))
    }

    fn delete_by_id(&self, id: i64) -> Result<()> {
        let mut points = self
            .points
            .write()
            .map_err(|_| anyhow!("point store lock poisoned"))?;
        points.remove(&id);
        Ok(())
    }
}

fn sort_points(items: &mut [Point], page: &PageRequest) {
    for order in page.sort.iter().rev() {
        items.sort_by(|a, b| {
            let ord = match order.property.as_str() {
                "title" => a.title.cmp(&b.title),
                "description" => a.description.cmp(&b.description),
                _ => a.id.cmp(&b.id),
            };
            match order.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(title: &str) -> Point {
        Point::new(None, Some(title.into()), Some("d".into()))
    }

    #[test]
    fn save_assigns_sequential_ids() {
        let repo = InMemoryPointRepository::new();
        let a = repo.save(titled("a")).unwrap();
        let b = repo.save(titled("b")).unwrap();
        assert_eq!(a.id, Some(1));
        assert_eq!(b.id, Some(2));
        assert!(repo.exists_by_id(2).unwrap());
    }

    #[test]
    fn save_with_id_overwrites() {
        let repo = InMemoryPointRepository::new();
        let mut a = repo.save(titled("a")).unwrap();
        a.title = Some("renamed".into());
        repo.save(a).unwrap();

        let stored = repo.find_by_id(1).unwrap().unwrap();
        assert_eq!(stored.title.as_deref(), Some("renamed"));
        assert_eq!(repo.find_all(&PageRequest::default()).unwrap().total_count, 1);
    }

    #[test]
    fn find_all_pages_and_sorts() {
        let repo = InMemoryPointRepository::new();
        for t in ["c", "a", "b"] {
            repo.save(titled(t)).unwrap();
        }

        let page = PageRequest::parse(Some(0), Some(2), &["title,desc".to_string()]);
        let result = repo.find_all(&page).unwrap();
        assert_eq!(result.total_count, 3);
        let titles: Vec<_> = result.items.iter().filter_map(|p| p.title.as_deref()).collect();
        assert_eq!(titles, vec!["c", "b"]);
    }

    #[test]
    fn search_filters_before_paging() {
        let repo = InMemoryPointRepository::new();
        repo.save(titled("harbor")).unwrap();
        repo.save(titled("hill")).unwrap();
        repo.save(titled("lake")).unwrap();

        let result = repo.search("h", &PageRequest::default()).unwrap();
        assert_eq!(result.total_count, 2);
    }

    #[test]
    fn delete_removes_point() {
        let repo = InMemoryPointRepository::new();
        repo.save(titled("a")).unwrap();
        repo.delete_by_id(1).unwrap();
        assert!(repo.find_by_id(1).unwrap().is_none());
    }
}
