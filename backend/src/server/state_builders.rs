//! Builders wiring driving-port services over the configured store.

use std::sync::Arc;

use actix_web::web;

use folio::domain::ports::{
    AboutRepository, CollectionProbe, MessageRepository, ProjectRepository,
    SecretOwnerAuthenticator, VisitorRepository,
};
use folio::domain::{
    AboutService, ContactService, ProjectService, SetupStatusService, VisitorLogService,
};
use folio::inbound::http::state::HttpState;
use folio::outbound::memory::InMemoryStore;
use folio::outbound::persistence::{
    DbPool, DieselAboutRepository, DieselCollectionProbe, DieselMessageRepository,
    DieselProjectRepository, DieselVisitorRepository,
};

use super::ServerConfig;

/// The driven adapters one store provides.
struct Stores<V, A, P, M, C> {
    visitors: Arc<V>,
    about: Arc<A>,
    projects: Arc<P>,
    messages: Arc<M>,
    probe: Arc<C>,
}

fn diesel_stores(
    pool: &DbPool,
) -> Stores<
    DieselVisitorRepository,
    DieselAboutRepository,
    DieselProjectRepository,
    DieselMessageRepository,
    DieselCollectionProbe,
> {
    Stores {
        visitors: Arc::new(DieselVisitorRepository::new(pool.clone())),
        about: Arc::new(DieselAboutRepository::new(pool.clone())),
        projects: Arc::new(DieselProjectRepository::new(pool.clone())),
        messages: Arc::new(DieselMessageRepository::new(pool.clone())),
        probe: Arc::new(DieselCollectionProbe::new(pool.clone())),
    }
}

fn memory_stores(
    store: Arc<InMemoryStore>,
) -> Stores<InMemoryStore, InMemoryStore, InMemoryStore, InMemoryStore, InMemoryStore> {
    Stores {
        visitors: store.clone(),
        about: store.clone(),
        projects: store.clone(),
        messages: store.clone(),
        probe: store,
    }
}

fn http_state_over<V, A, P, M, C>(
    stores: Stores<V, A, P, M, C>,
    config: &ServerConfig,
) -> HttpState
where
    V: VisitorRepository + 'static,
    A: AboutRepository + 'static,
    P: ProjectRepository + 'static,
    M: MessageRepository + 'static,
    C: CollectionProbe + 'static,
{
    HttpState {
        owner_auth: Arc::new(SecretOwnerAuthenticator::new(config.owner.clone())),
        visitors: Arc::new(VisitorLogService::new(
            stores.visitors,
            config.clock.clone(),
            config.display_offset,
        )),
        about: Arc::new(AboutService::new(stores.about)),
        projects: Arc::new(ProjectService::new(stores.projects)),
        contact: Arc::new(ContactService::new(stores.messages)),
        setup: Arc::new(SetupStatusService::new(stores.probe)),
    }
}

/// Build HTTP state over PostgreSQL when a pool is configured, otherwise over
/// a fresh in-memory store.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => http_state_over(diesel_stores(pool), config),
        None => http_state_over(
            memory_stores(Arc::new(InMemoryStore::new(config.clock.clone()))),
            config,
        ),
    };
    web::Data::new(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::{Key, SameSite};
    use chrono::{FixedOffset, TimeZone, Utc};
    use folio::domain::{NewVisitor, OwnerCredentials, OwnerSecret};
    use folio::test_support::MutableClock;
    use rstest::rstest;

    fn config() -> ServerConfig {
        ServerConfig::new(
            Key::generate(),
            false,
            SameSite::Lax,
            "127.0.0.1:0".parse().expect("socket addr"),
        )
    }

    #[tokio::test]
    async fn memory_state_starts_provisioned_and_empty() {
        let state = build_http_state(&config());
        let missing = state.setup.missing_collections().await.expect("probe");
        assert!(missing.is_empty());
        assert!(state.visitors.list_visitors().await.expect("list").is_empty());
        assert!(state.about.get_about().await.expect("about").is_none());
    }

    #[tokio::test]
    async fn visits_use_configured_clock_and_offset() {
        // 20:00 UTC is already the next day at +05:30.
        let now = Utc
            .with_ymd_and_hms(2024, 3, 9, 20, 0, 0)
            .single()
            .expect("timestamp");
        let offset = FixedOffset::east_opt(19_800).expect("offset");
        let config = config()
            .with_clock(Arc::new(MutableClock::new(now)))
            .with_display_offset(offset);
        let state = build_http_state(&config);

        let visitor = NewVisitor::try_from_parts("Ada", "Recruiter").expect("visitor");
        let stored = state.visitors.add_visitor(&visitor).await.expect("insert");
        assert_eq!(stored.visit_time, now);

        let stats = state.visitors.visitor_stats().await.expect("stats");
        let days: Vec<String> = stats.daily.iter().map(|day| day.date.to_string()).collect();
        assert_eq!(days, ["2024-03-10"]);
    }

    #[rstest]
    #[case(None, false)]
    #[case(Some(OwnerSecret::from_password("Owner", "pw").expect("secret")), true)]
    #[tokio::test]
    async fn owner_login_follows_configuration(
        #[case] owner: Option<OwnerSecret>,
        #[case] accepted: bool,
    ) {
        let state = build_http_state(&config().with_owner(owner));
        let credentials = OwnerCredentials::try_from_parts("Owner", "pw").expect("shape");
        assert_eq!(
            state.owner_auth.authenticate(&credentials).await.is_ok(),
            accepted
        );
    }
}
