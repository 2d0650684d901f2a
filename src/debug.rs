use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::config::AppConfig;
use crate::core::client::point_client::RestPointClient;
use crate::core::persistence::point::point_entity::Point;
use crate::view::i18n::Translator;
use crate::view::locale::LocaleStore;
use crate::view::navigation::HistoryNavigator;
use crate::view::notification::ChannelNotifier;
use crate::view::point::{PointView, PointViews};
use crate::view::router::{Authority, GrantedAuthorities};

/// Runs only when in POINT_DEBUG_MODE: drives the views against the live API once.
pub async fn run_debug(config: &AppConfig) -> Result<()> {
    info!("🔧 Debug mode: running Point view smoke test...");

    let (notifier, mut toasts) = ChannelNotifier::channel();
    let views = PointViews {
        point_service: Arc::new(RestPointClient::new(
            reqwest::Client::new(),
            &config.api_base_url,
            &config.app_name,
        )),
        navigator: Arc::new(HistoryNavigator::new()),
        notifier: Arc::new(notifier),
        translator: Arc::new(Translator::with_defaults(&config.app_name)),
        locale: Arc::new(LocaleStore::new(&config.default_language)),
    };
    let user = GrantedAuthorities(vec![Authority::User]);

    if let PointView::Update(mut form) = views.open("/point/new", &user).await? {
        form.point = Point::new(None, Some("debug".into()), Some("created by debug mode".into()));
        let saved = form.save().await?;
        info!(id = ?saved.id, "Created Point");

        if let Some(id) = saved.id {
            if let PointView::Details(details) = views.open(&format!("/point/{id}/view"), &user).await? {
                info!(point = ?details.point, "Loaded Point");
            }
        }
    }

    while let Ok(toast) = toasts.try_recv() {
        info!(variant = ?toast.variant, "{}", toast.message);
    }

    info!("Debug tasks completed.");
    Ok(())
}
