use anyhow::Result;
use log::{debug, info, warn};
use std::sync::Arc;

use crate::api::parsers::shape_record;
use crate::api::{IdentityLookup, PlayerDataSource};
use crate::domain::{ObservableResult, PlayerIdentity, PlayerStatsRecord};

/// Resolves a username to its Bedwars stats: identity lookup, then stats lookup.
///
/// Lookups never fail from the caller's point of view. Anything that goes
/// wrong on the way is logged and the player is shown as nicked. There are
/// no retries.
pub struct StatsResolver<S> {
    source: Arc<S>,
}

impl<S> Clone for StatsResolver<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<S: PlayerDataSource + 'static> StatsResolver<S> {
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// Start a lookup in the background; the result is set once it finishes.
    ///
    /// Must be called from inside a tokio runtime.
    pub fn resolve(
        &self,
        player: &str,
        api_key: Option<&str>,
    ) -> ObservableResult<PlayerStatsRecord> {
        let result = ObservableResult::new(PlayerStatsRecord::placeholder(player));

        let resolver = self.clone();
        let slot = result.clone();
        let player = player.to_string();
        let api_key = api_key.map(str::to_string);

        tokio::spawn(async move {
            let lookup = {
                let player = player.clone();
                tokio::spawn(async move { resolver.fetch(&player, api_key.as_deref()).await })
            };

            let record = match lookup.await {
                Ok(record) => record,
                Err(e) => {
                    warn!("Lookup task for {} died, showing as nicked: {}", player, e);
                    PlayerStatsRecord::placeholder(&player)
                }
            };
            slot.set(record);
        });

        result
    }

    /// Run the whole lookup in place
    pub async fn fetch(&self, player: &str, api_key: Option<&str>) -> PlayerStatsRecord {
        match self.try_fetch(player, api_key).await {
            Ok(record) => record,
            Err(e) => {
                warn!("Lookup for {} failed, showing as nicked: {:#}", player, e);
                PlayerStatsRecord::placeholder(player)
            }
        }
    }

    async fn try_fetch(&self, player: &str, api_key: Option<&str>) -> Result<PlayerStatsRecord> {
        let identity = self.resolve_identity(player).await?;
        debug!("Resolved {} to {}", player, identity.uuid);

        let payload = self.source.fetch_stats(&identity.uuid, api_key).await?;
        let record = shape_record(identity, &payload);

        info!(
            "Fetched stats for {} (nicked: {})",
            record.identity.name,
            record.is_nicked()
        );
        Ok(record)
    }

    async fn resolve_identity(&self, player: &str) -> Result<PlayerIdentity> {
        let identity = match self.source.lookup_identity(player).await? {
            IdentityLookup::Found(Some(profile)) if !profile.id.is_empty() => {
                PlayerIdentity::resolved(player, &profile.id)
            }
            IdentityLookup::Found(_) | IdentityLookup::Unavailable(_) => {
                PlayerIdentity::unresolved(player, false)
            }
            IdentityLookup::NotFound => PlayerIdentity::unresolved(player, true),
        };
        Ok(identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MojangProfile;
    use crate::domain::{Star, StatValue, UNKNOWN_UUID};
    use crate::format::ratio;
    use anyhow::bail;
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::sync::Semaphore;

    struct FakeSource {
        identity: IdentityLookup,
        stats: Option<Value>,
        requested_uuids: Mutex<Vec<String>>,
        /// When set, stats lookups block until a permit is added
        gate: Option<Arc<Semaphore>>,
    }

    impl FakeSource {
        fn new(identity: IdentityLookup, stats: Option<Value>) -> Self {
            Self {
                identity,
                stats,
                requested_uuids: Mutex::new(Vec::new()),
                gate: None,
            }
        }

        fn gated(mut self, gate: Arc<Semaphore>) -> Self {
            self.gate = Some(gate);
            self
        }
    }

    struct PanickingSource;

    #[async_trait]
    impl PlayerDataSource for PanickingSource {
        async fn lookup_identity(&self, _name: &str) -> Result<IdentityLookup> {
            Ok(found("abc123"))
        }

        async fn fetch_stats(&self, _uuid: &str, _api_key: Option<&str>) -> Result<Value> {
            panic!("stats source blew up");
        }
    }

    #[async_trait]
    impl PlayerDataSource for FakeSource {
        async fn lookup_identity(&self, _name: &str) -> Result<IdentityLookup> {
            Ok(self.identity.clone())
        }

        async fn fetch_stats(&self, uuid: &str, _api_key: Option<&str>) -> Result<Value> {
            self.requested_uuids.lock().unwrap().push(uuid.to_string());
            if let Some(gate) = &self.gate {
                let _permit = gate.acquire().await?;
            }
            match &self.stats {
                Some(stats) => Ok(stats.clone()),
                None => bail!("connection reset"),
            }
        }
    }

    fn found(id: &str) -> IdentityLookup {
        IdentityLookup::Found(Some(MojangProfile {
            id: id.to_string(),
            name: None,
        }))
    }

    fn bedwars_payload(bedwars: Value) -> Value {
        json!({
            "success": true,
            "player": {
                "newPackageRank": "MVP",
                "achievements": {"bedwars_level": 211},
                "stats": {"Bedwars": bedwars}
            }
        })
    }

    #[tokio::test]
    async fn test_not_found_identity_is_nicked() {
        let source = FakeSource::new(IdentityLookup::NotFound, Some(json!({"player": null})));
        let resolver = StatsResolver::new(source);

        let record = resolver.resolve("Ghost123", Some("key")).wait().await;

        assert!(record.is_nicked());
        assert_eq!(record.bw_stats.star, Star::Nicked);
        assert_eq!(record.identity.uuid, UNKNOWN_UUID);
        assert_eq!(record.rank, "NULL");
        assert_eq!(record.paid_rank, "NON");
    }

    #[tokio::test]
    async fn test_unresolved_uuid_is_passed_through() {
        let source = Arc::new(FakeSource::new(
            IdentityLookup::Unavailable(429),
            Some(json!({"success": false})),
        ));
        let resolver = StatsResolver {
            source: Arc::clone(&source),
        };

        let record = resolver.fetch("Steve", None).await;

        assert_eq!(*source.requested_uuids.lock().unwrap(), vec![UNKNOWN_UUID]);
        assert!(record.is_nicked());
    }

    #[tokio::test]
    async fn test_unreadable_profile_uses_unknown_uuid() {
        let source = Arc::new(FakeSource::new(
            IdentityLookup::Found(None),
            Some(json!({"player": null})),
        ));
        let resolver = StatsResolver {
            source: Arc::clone(&source),
        };

        resolver.fetch("Steve", None).await;

        assert_eq!(*source.requested_uuids.lock().unwrap(), vec![UNKNOWN_UUID]);
    }

    #[tokio::test]
    async fn test_resolved_player_stats() {
        let payload = bedwars_payload(json!({
            "wins_bedwars": 100,
            "losses_bedwars": 0,
            "final_kills_bedwars": 40,
            "final_deaths_bedwars": 8
        }));
        let resolver = StatsResolver::new(FakeSource::new(found("abc123"), Some(payload)));

        let record = resolver.resolve("Alex", Some("key")).wait().await;

        assert!(!record.is_nicked());
        assert_eq!(record.identity.uuid, "abc123");
        assert_eq!(record.paid_rank, "MVP");
        assert_eq!(record.bw_stats.star, Star::Level(211));
        assert_eq!(record.bw_stats.wins, StatValue::Known(100));
        assert_eq!(ratio(record.bw_stats.wins, record.bw_stats.losses), 0.0);
        assert_eq!(ratio(record.bw_stats.final_kills, record.bw_stats.final_deaths), 5.0);
    }

    #[tokio::test]
    async fn test_stats_failure_degrades_to_nicked() {
        let resolver = StatsResolver::new(FakeSource::new(found("abc123"), None));

        let record = resolver.fetch("Alex", Some("key")).await;

        assert_eq!(record, PlayerStatsRecord::placeholder("Alex"));
    }

    #[tokio::test]
    async fn test_listener_receives_record() {
        let gate = Arc::new(Semaphore::new(0));
        let payload = bedwars_payload(json!({"kills_bedwars": 5}));
        let source = FakeSource::new(found("abc123"), Some(payload)).gated(Arc::clone(&gate));
        let resolver = StatsResolver::new(source);
        let (tx, rx) = tokio::sync::oneshot::channel();
        let tx = Mutex::new(Some(tx));

        let result = resolver.resolve("Alex", None);
        result.register_listener(move |record: &PlayerStatsRecord| {
            if let Some(tx) = tx.lock().unwrap().take() {
                let _ = tx.send(record.bw_stats.kills);
            }
        });
        assert!(!result.is_set());

        gate.add_permits(1);
        let kills = tokio::time::timeout(Duration::from_secs(5), rx)
            .await
            .expect("listener was not called")
            .unwrap();
        assert_eq!(kills, StatValue::Known(5));
    }

    #[tokio::test]
    async fn test_huge_counter_still_resolves() {
        let payload = json!({
            "player": {"stats": {"Bedwars": {"wins_bedwars": i64::MAX, "kills_bedwars": 1}}}
        });
        let resolver = StatsResolver::new(FakeSource::new(found("abc123"), Some(payload)));

        let pending = resolver.resolve("Alex", None);
        let record = tokio::time::timeout(Duration::from_secs(5), pending.wait())
            .await
            .expect("lookup never finished");

        assert_eq!(record.bw_stats.wins, StatValue::Known(i64::MAX));
        assert_eq!(record.bw_stats.kills, StatValue::Known(1));
    }

    #[tokio::test]
    async fn test_panicking_lookup_still_sets_nicked_record() {
        let resolver = StatsResolver::new(PanickingSource);

        let pending = resolver.resolve("Alex", None);
        let record = tokio::time::timeout(Duration::from_secs(5), pending.wait())
            .await
            .expect("lookup never finished");

        assert_eq!(record, PlayerStatsRecord::placeholder("Alex"));
    }
}
