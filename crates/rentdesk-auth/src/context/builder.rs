//! Assembles a [`TenantContext`] from a resolved slug and a session identity.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use moka::future::Cache;
use tracing::{debug, warn};

use rentdesk_core::config::TenancyConfig;
use rentdesk_database::store::TenantDirectory;
use rentdesk_entity::identity::SessionIdentity;
use rentdesk_entity::tenant::TenantSlug;

use super::error::ContextError;
use super::model::{TenantContext, TenantRef, TenantRelationship};

/// Builds tenant contexts, caching positive slug lookups.
#[derive(Clone)]
pub struct TenantContextBuilder {
    /// Tenant, ownership and membership lookups.
    directory: Arc<dyn TenantDirectory>,
    /// Active tenants by slug. `None` when caching is disabled.
    cache: Option<Cache<TenantSlug, TenantRef>>,
    /// Bumped by every invalidation; lets a lookup detect one it raced.
    invalidations: Arc<AtomicU64>,
    /// Upper bound for all lookups of one request.
    lookup_timeout: Duration,
}

impl std::fmt::Debug for TenantContextBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TenantContextBuilder")
            .field("cache_enabled", &self.cache.is_some())
            .field("lookup_timeout", &self.lookup_timeout)
            .finish()
    }
}

impl TenantContextBuilder {
    /// Create a builder from the tenancy configuration.
    pub fn new(directory: Arc<dyn TenantDirectory>, config: &TenancyConfig) -> Self {
        let cache = (config.cache_ttl_seconds > 0).then(|| {
            Cache::builder()
                .max_capacity(config.cache_capacity)
                .time_to_live(config.cache_ttl())
                .build()
        });

        Self {
            directory,
            cache,
            invalidations: Arc::new(AtomicU64::new(0)),
            lookup_timeout: config.lookup_timeout(),
        }
    }

    /// Assemble the context for one request.
    ///
    /// With no slug the context is the root context. With a slug, the tenant
    /// must exist and be active, otherwise the request is terminally
    /// [`ContextError::TenantNotFound`]. For an authenticated caller the
    /// ownership and membership lookups are resolved here so that the guard
    /// never needs to perform I/O.
    pub async fn build(
        &self,
        slug: Option<&TenantSlug>,
        identity: Option<SessionIdentity>,
    ) -> Result<TenantContext, ContextError> {
        let identity = identity.unwrap_or_else(SessionIdentity::anonymous);

        let Some(slug) = slug else {
            return Ok(TenantContext::root(identity));
        };

        match tokio::time::timeout(self.lookup_timeout, self.assemble(slug, identity)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(
                    slug = %slug,
                    timeout_ms = self.lookup_timeout.as_millis() as u64,
                    "Tenant context lookup timed out"
                );
                Err(ContextError::Timeout)
            }
        }
    }

    /// Drop a cached slug, e.g. after the tenant was disabled.
    ///
    /// Only this process's cache is affected. Other processes keep serving
    /// their cached entry for up to `cache_ttl_seconds`.
    pub async fn invalidate(&self, slug: &TenantSlug) {
        if let Some(cache) = &self.cache {
            // Bump before evicting so a concurrent lookup either sees the
            // bump or has its insert evicted here.
            self.invalidations.fetch_add(1, Ordering::AcqRel);
            cache.invalidate(slug).await;
            debug!(slug = %slug, "Invalidated cached tenant");
        }
    }

    async fn assemble(
        &self,
        slug: &TenantSlug,
        identity: SessionIdentity,
    ) -> Result<TenantContext, ContextError> {
        let tenant = self.find_tenant(slug).await?;

        let relationship = match identity.user_id {
            Some(user_id) => {
                let (is_owner, membership) = tokio::try_join!(
                    self.directory.is_owner(tenant.id, user_id),
                    self.directory.find_membership(tenant.id, user_id),
                )
                .map_err(ContextError::Store)?;
                TenantRelationship {
                    is_owner,
                    membership,
                }
            }
            None => TenantRelationship::none(),
        };

        debug!(
            tenant_id = %tenant.id,
            slug = %tenant.slug,
            role = %identity.role,
            is_owner = relationship.is_owner,
            membership = ?relationship.membership,
            "Assembled tenant context"
        );

        Ok(TenantContext::for_tenant(tenant, identity, relationship))
    }

    async fn find_tenant(&self, slug: &TenantSlug) -> Result<TenantRef, ContextError> {
        if let Some(cache) = &self.cache {
            if let Some(tenant) = cache.get(slug).await {
                return Ok(tenant);
            }
        }

        let seen = self.invalidations.load(Ordering::Acquire);
        let tenant = self
            .directory
            .find_tenant_by_slug(slug)
            .await
            .map_err(ContextError::Store)?
            .filter(|t| t.is_active())
            .ok_or_else(|| ContextError::TenantNotFound(slug.clone()))?;

        let tenant = TenantRef::from(&tenant);
        if let Some(cache) = &self.cache {
            cache.insert(slug.clone(), tenant.clone()).await;
            if self.invalidations.load(Ordering::Acquire) != seen {
                cache.invalidate(slug).await;
            }
        }
        Ok(tenant)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;

    use async_trait::async_trait;
    use tokio::sync::oneshot;

    use rentdesk_core::result::AppResult;
    use rentdesk_core::types::{TenantId, UserId};
    use rentdesk_database::MemoryStore;
    use rentdesk_database::store::{TeamStore, TenantStore};
    use rentdesk_entity::identity::SessionRole;
    use rentdesk_entity::membership::{MemberRole, NewMembership};
    use rentdesk_entity::tenant::{CreateTenant, Tenant};

    use super::*;

    const ROOT: &str = "rentals.app";

    /// Counts slug lookups before delegating.
    struct Counting {
        inner: Arc<MemoryStore>,
        slug_lookups: AtomicUsize,
    }

    #[async_trait]
    impl TenantDirectory for Counting {
        async fn find_tenant_by_slug(&self, slug: &TenantSlug) -> AppResult<Option<Tenant>> {
            self.slug_lookups.fetch_add(1, Ordering::SeqCst);
            self.inner.find_tenant_by_slug(slug).await
        }

        async fn find_membership(
            &self,
            tenant_id: TenantId,
            user_id: UserId,
        ) -> AppResult<Option<MemberRole>> {
            self.inner.find_membership(tenant_id, user_id).await
        }

        async fn is_owner(&self, tenant_id: TenantId, user_id: UserId) -> AppResult<bool> {
            self.inner.is_owner(tenant_id, user_id).await
        }
    }

    /// Holds the first slug lookup, after it has read the store, until
    /// released.
    struct Gated {
        inner: Arc<MemoryStore>,
        gate: Mutex<Option<(oneshot::Sender<()>, oneshot::Receiver<()>)>>,
    }

    #[async_trait]
    impl TenantDirectory for Gated {
        async fn find_tenant_by_slug(&self, slug: &TenantSlug) -> AppResult<Option<Tenant>> {
            let found = self.inner.find_tenant_by_slug(slug).await;
            let gate = self.gate.lock().unwrap().take();
            if let Some((entered, release)) = gate {
                let _ = entered.send(());
                let _ = release.await;
            }
            found
        }

        async fn find_membership(
            &self,
            tenant_id: TenantId,
            user_id: UserId,
        ) -> AppResult<Option<MemberRole>> {
            self.inner.find_membership(tenant_id, user_id).await
        }

        async fn is_owner(&self, tenant_id: TenantId, user_id: UserId) -> AppResult<bool> {
            self.inner.is_owner(tenant_id, user_id).await
        }
    }

    /// Never answers in time.
    struct Stalled;

    #[async_trait]
    impl TenantDirectory for Stalled {
        async fn find_tenant_by_slug(&self, _slug: &TenantSlug) -> AppResult<Option<Tenant>> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(None)
        }

        async fn find_membership(
            &self,
            _tenant_id: TenantId,
            _user_id: UserId,
        ) -> AppResult<Option<MemberRole>> {
            Ok(None)
        }

        async fn is_owner(&self, _tenant_id: TenantId, _user_id: UserId) -> AppResult<bool> {
            Ok(false)
        }
    }

    async fn seeded() -> (Arc<MemoryStore>, Tenant) {
        let store = Arc::new(MemoryStore::new());
        let tenant = store
            .create_tenant(&CreateTenant {
                slug: TenantSlug::new("acme"),
                name: "Acme Rentals".to_string(),
                owner_id: UserId::new(),
            })
            .await
            .unwrap();
        (store, tenant)
    }

    fn builder(directory: Arc<dyn TenantDirectory>) -> TenantContextBuilder {
        TenantContextBuilder::new(directory, &TenancyConfig::for_root(ROOT))
    }

    #[tokio::test]
    async fn test_no_slug_builds_root_context() {
        let (store, _) = seeded().await;
        let ctx = builder(store).build(None, None).await.unwrap();
        assert!(ctx.is_root());
        assert_eq!(*ctx.identity(), SessionIdentity::anonymous());
    }

    #[tokio::test]
    async fn test_unknown_slug_is_terminal() {
        let (store, _) = seeded().await;
        let err = builder(store)
            .build(Some(&TenantSlug::new("unknown")), None)
            .await
            .unwrap_err();
        assert!(matches!(err, ContextError::TenantNotFound(slug) if slug.as_str() == "unknown"));
    }

    #[tokio::test]
    async fn test_disabled_tenant_is_not_found() {
        let (store, tenant) = seeded().await;
        store.disable_tenant(tenant.id).await.unwrap();
        let err = builder(store)
            .build(Some(&tenant.slug), None)
            .await
            .unwrap_err();
        assert!(matches!(err, ContextError::TenantNotFound(_)));
    }

    #[tokio::test]
    async fn test_owner_relationship_is_resolved() {
        let (store, tenant) = seeded().await;
        let identity = SessionIdentity::user(tenant.owner_id, SessionRole::LandlordOwner);
        let ctx = builder(store)
            .build(Some(&tenant.slug), Some(identity))
            .await
            .unwrap();

        assert_eq!(ctx.tenant_id(), Some(tenant.id));
        assert!(ctx.relationship().is_owner);
        assert!(ctx.relationship().is_admin());
    }

    #[tokio::test]
    async fn test_membership_is_resolved() {
        let (store, tenant) = seeded().await;
        let user = UserId::new();
        store
            .add_member(&NewMembership {
                tenant_id: tenant.id,
                user_id: user,
                role: MemberRole::Member,
                invited_by: tenant.owner_id,
            })
            .await
            .unwrap();

        let ctx = builder(store)
            .build(
                Some(&tenant.slug),
                Some(SessionIdentity::user(user, SessionRole::TeamMember)),
            )
            .await
            .unwrap();

        assert!(!ctx.relationship().is_owner);
        assert_eq!(ctx.relationship().membership, Some(MemberRole::Member));
    }

    #[tokio::test]
    async fn test_positive_lookups_are_cached_until_invalidated() {
        let (store, tenant) = seeded().await;
        let counting = Arc::new(Counting {
            inner: store,
            slug_lookups: AtomicUsize::new(0),
        });
        let builder = builder(counting.clone());

        builder.build(Some(&tenant.slug), None).await.unwrap();
        builder.build(Some(&tenant.slug), None).await.unwrap();
        assert_eq!(counting.slug_lookups.load(Ordering::SeqCst), 1);

        builder.invalidate(&tenant.slug).await;
        builder.build(Some(&tenant.slug), None).await.unwrap();
        assert_eq!(counting.slug_lookups.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_negative_lookups_are_not_cached() {
        let (store, _) = seeded().await;
        let counting = Arc::new(Counting {
            inner: store,
            slug_lookups: AtomicUsize::new(0),
        });
        let builder = builder(counting.clone());
        let missing = TenantSlug::new("missing");

        assert!(builder.build(Some(&missing), None).await.is_err());
        assert!(builder.build(Some(&missing), None).await.is_err());
        assert_eq!(counting.slug_lookups.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_invalidation_during_lookup_is_not_lost() {
        let (store, tenant) = seeded().await;
        let (entered_tx, entered_rx) = oneshot::channel();
        let (release_tx, release_rx) = oneshot::channel();
        let builder = builder(Arc::new(Gated {
            inner: store.clone(),
            gate: Mutex::new(Some((entered_tx, release_rx))),
        }));

        let lookup = tokio::spawn({
            let builder = builder.clone();
            let slug = tenant.slug.clone();
            async move { builder.build(Some(&slug), None).await }
        });

        // The lookup has read the still-active row; now disable it.
        entered_rx.await.unwrap();
        store.disable_tenant(tenant.id).await.unwrap();
        builder.invalidate(&tenant.slug).await;
        release_tx.send(()).unwrap();

        assert!(lookup.await.unwrap().is_ok());
        let err = builder
            .build(Some(&tenant.slug), None)
            .await
            .unwrap_err();
        assert!(matches!(err, ContextError::TenantNotFound(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_lookup_times_out() {
        let builder = builder(Arc::new(Stalled));
        let err = builder
            .build(Some(&TenantSlug::new("acme")), None)
            .await
            .unwrap_err();
        assert!(matches!(err, ContextError::Timeout));
    }
}
