use std::sync::Arc;

use anyhow::{anyhow, Result};
use tracing::warn;

use crate::core::client::point_client::PointApi;
use crate::core::persistence::point::point_entity::Point;
use crate::domain::point::dto::page_request::{PageRequest, SortDirection, SortOrder};
use crate::view::i18n::Translator;
use crate::view::locale::LocaleSubscription;
use crate::view::notification::{Notification, Notifier, Variant};

pub const ITEMS_PER_PAGE: usize = 20;

/// Paged, sortable and searchable listing of points.
pub struct PointList {
    point_service: Arc<dyn PointApi>,
    notifier: Arc<dyn Notifier>,
    translator: Arc<Translator>,
    locale: LocaleSubscription,
    pub points: Vec<Point>,
    /// 1-based.
    pub page: usize,
    pub items_per_page: usize,
    pub total_items: u64,
    pub current_search: String,
    pub prop_order: String,
    pub reverse: bool,
    pub remove_id: Option<i64>,
    pub is_fetching: bool,
}

impl PointList {
    pub fn new(
        point_service: Arc<dyn PointApi>,
        notifier: Arc<dyn Notifier>,
        translator: Arc<Translator>,
        locale: LocaleSubscription,
    ) -> Self {
        Self {
            point_service,
            notifier,
            translator,
            locale,
            points: Vec::new(),
            page: 1,
            items_per_page: ITEMS_PER_PAGE,
            total_items: 0,
            current_search: String::new(),
            prop_order: "id".into(),
            reverse: false,
            remove_id: None,
            is_fetching: false,
        }
    }

    pub async fn on_enter(&mut self) -> Result<()> {
        self.retrieve_all_points().await
    }

    /// Sort parameters: the chosen property, then `id` as a tiebreaker.
    pub fn sort(&self) -> Vec<SortOrder> {
        let direction = if self.reverse {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        let mut orders = vec![SortOrder {
            property: self.prop_order.clone(),
            direction,
        }];
        if self.prop_order != "id" {
            orders.push(SortOrder {
                property: "id".into(),
                direction: SortDirection::Asc,
            });
        }
        orders
    }

    fn page_request(&self) -> PageRequest {
        PageRequest {
            page: self.page.saturating_sub(1),
            size: self.items_per_page,
            sort: self.sort(),
        }
    }

    pub async fn retrieve_all_points(&mut self) -> Result<()> {
        self.is_fetching = true;
        let page = self.page_request();

        let result = if self.current_search.is_empty() {
            self.point_service.retrieve(&page).await
        } else {
            self.point_service.search(&self.current_search, &page).await
        };
        self.is_fetching = false;

        match result {
            Ok(found) => {
                self.points = found.items;
                self.total_items = found.total_count;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "Failed to retrieve Points");
                Err(err)
            }
        }
    }

    pub async fn search(&mut self, query: &str) -> Result<()> {
        let query = query.trim();
        if query.is_empty() {
            return self.clear().await;
        }
        self.current_search = query.to_string();
        self.page = 1;
        self.retrieve_all_points().await
    }

    pub async fn clear(&mut self) -> Result<()> {
        self.current_search.clear();
        self.page = 1;
        self.retrieve_all_points().await
    }

    pub async fn load_page(&mut self, page: usize) -> Result<()> {
        if page == 0 || page == self.page {
            return Ok(());
        }
        self.page = page;
        self.retrieve_all_points().await
    }

    /// Selects `prop_order` and flips the direction on every call, whatever the
    /// previous property was.
    pub async fn change_order(&mut self, prop_order: &str) -> Result<()> {
        self.prop_order = prop_order.to_string();
        self.reverse = !self.reverse;
        self.retrieve_all_points().await
    }

    pub fn prepare_remove(&mut self, id: i64) {
        self.remove_id = Some(id);
    }

    pub async fn remove_point(&mut self) -> Result<()> {
        let id = self
            .remove_id
            .ok_or_else(|| anyhow!("No Point selected for removal"))?;

        self.point_service.delete(id).await?;

        let key = self.translator.point_key("deleted");
        let param = id.to_string();
        let message = self
            .translator
            .translate(&self.locale.current_language(), &key, Some(param.as_str()));
        self.notifier
            .toast(Notification::new("Info", Variant::Danger, key, Some(param), message));

        self.remove_id = None;
        self.retrieve_all_points().await
    }
}
