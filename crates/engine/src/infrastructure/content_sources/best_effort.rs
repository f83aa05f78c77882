//! Best-effort wrapper around a content provider.
//!
//! Remote content only enriches a character, so every failure collapses to an
//! empty answer. Successful answers are cached for the configured TTL.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::infrastructure::cache::TtlCache;
use crate::infrastructure::ports::{
    ClockPort, ContentError, ContentProviderPort, MonsterSummary, SpellSummary,
};

pub struct BestEffortContent {
    inner: Arc<dyn ContentProviderPort>,
    timeout: Duration,
    spells: TtlCache<String, Vec<SpellSummary>>,
    monsters: TtlCache<String, Option<MonsterSummary>>,
}

impl BestEffortContent {
    pub fn new(
        inner: Arc<dyn ContentProviderPort>,
        timeout: Duration,
        cache_ttl: Duration,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            inner,
            timeout,
            spells: TtlCache::new(cache_ttl, clock.clone()),
            monsters: TtlCache::new(cache_ttl, clock),
        }
    }

    fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }
}

#[async_trait]
impl ContentProviderPort for BestEffortContent {
    async fn spells_for_class(&self, class_index: &str) -> Result<Vec<SpellSummary>, ContentError> {
        let key = class_index.to_string();
        if let Some(cached) = self.spells.get(&key).await {
            tracing::debug!(class = class_index, "Spell list cache hit");
            return Ok(cached);
        }

        match tokio::time::timeout(self.timeout, self.inner.spells_for_class(class_index)).await {
            Ok(Ok(spells)) => {
                self.spells.insert(key, spells.clone()).await;
                Ok(spells)
            }
            Ok(Err(e)) => {
                tracing::warn!(class = class_index, error = %e, "Spell list unavailable");
                Ok(Vec::new())
            }
            Err(_) => {
                tracing::warn!(
                    class = class_index,
                    timeout_ms = self.timeout_ms(),
                    "Spell list request timed out"
                );
                Ok(Vec::new())
            }
        }
    }

    async fn monster(&self, index: &str) -> Result<Option<MonsterSummary>, ContentError> {
        let key = index.to_string();
        if let Some(cached) = self.monsters.get(&key).await {
            tracing::debug!(monster = index, "Monster cache hit");
            return Ok(cached);
        }

        match tokio::time::timeout(self.timeout, self.inner.monster(index)).await {
            Ok(Ok(monster)) => {
                self.monsters.insert(key, monster.clone()).await;
                Ok(monster)
            }
            Ok(Err(e)) => {
                tracing::warn!(monster = index, error = %e, "Monster lookup failed");
                Ok(None)
            }
            Err(_) => {
                tracing::warn!(
                    monster = index,
                    timeout_ms = self.timeout_ms(),
                    "Monster lookup timed out"
                );
                Ok(None)
            }
        }
    }
}

/// Provider used when remote content is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoContent;

#[async_trait]
impl ContentProviderPort for NoContent {
    async fn spells_for_class(&self, _class_index: &str) -> Result<Vec<SpellSummary>, ContentError> {
        Ok(Vec::new())
    }

    async fn monster(&self, _index: &str) -> Result<Option<MonsterSummary>, ContentError> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::SystemClock;
    use crate::infrastructure::ports::MockContentProviderPort;

    fn spell(name: &str) -> SpellSummary {
        SpellSummary {
            index: name.to_lowercase(),
            name: name.to_string(),
            level: 0,
        }
    }

    fn wrap(inner: impl ContentProviderPort + 'static, timeout: Duration) -> BestEffortContent {
        BestEffortContent::new(
            Arc::new(inner),
            timeout,
            Duration::from_secs(3_600),
            Arc::new(SystemClock::new()),
        )
    }

    #[tokio::test]
    async fn successful_answers_are_cached() {
        let mut inner = MockContentProviderPort::new();
        inner
            .expect_spells_for_class()
            .times(1)
            .returning(|_| Ok(vec![spell("Light")]));
        let content = wrap(inner, Duration::from_secs(1));

        let first = content.spells_for_class("wizard").await.expect("best effort");
        let second = content.spells_for_class("wizard").await.expect("best effort");
        assert_eq!(first, vec![spell("Light")]);
        assert_eq!(second, first);
    }

    #[tokio::test]
    async fn provider_errors_become_empty_and_are_not_cached() {
        let mut inner = MockContentProviderPort::new();
        inner
            .expect_spells_for_class()
            .times(2)
            .returning(|_| Err(ContentError::request("connection refused")));
        let content = wrap(inner, Duration::from_secs(1));

        assert!(content.spells_for_class("cleric").await.expect("best effort").is_empty());
        assert!(content.spells_for_class("cleric").await.expect("best effort").is_empty());
    }

    struct SlowProvider;

    #[async_trait]
    impl ContentProviderPort for SlowProvider {
        async fn spells_for_class(&self, _: &str) -> Result<Vec<SpellSummary>, ContentError> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(vec![spell("Too Late")])
        }

        async fn monster(&self, _: &str) -> Result<Option<MonsterSummary>, ContentError> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(None)
        }
    }

    #[tokio::test]
    async fn slow_provider_times_out_to_empty() {
        let content = wrap(SlowProvider, Duration::from_millis(20));
        assert!(content.spells_for_class("bard").await.expect("best effort").is_empty());
        assert_eq!(content.monster("goblin").await.expect("best effort"), None);
    }

    #[tokio::test]
    async fn no_content_is_always_empty() {
        assert!(NoContent.spells_for_class("wizard").await.expect("empty").is_empty());
        assert_eq!(NoContent.monster("lich").await.expect("empty"), None);
    }
}
