use crate::errors::ReportResult;
use crate::model::{Dataset, MetricDomain, ThresholdPair};
use crate::source::MeasurementSource;

/// Looks up configured yellow/red boundaries, falling back to the defaults
/// of the metric's domain.
pub struct ThresholdResolver<'a, S: MeasurementSource + ?Sized> {
    source: &'a S,
    dataset: &'a Dataset,
}

impl<'a, S: MeasurementSource + ?Sized> ThresholdResolver<'a, S> {
    pub fn new(source: &'a S, dataset: &'a Dataset) -> Self {
        Self { source, dataset }
    }

    /// A miss is normal and resolves to `domain.default_thresholds()`; only
    /// store failures are returned as errors.
    pub fn resolve(
        &self,
        name: &str,
        group_key: &str,
        domain: MetricDomain,
    ) -> ReportResult<ThresholdPair> {
        match self.source.latest_threshold(self.dataset, name, group_key)? {
            Some(pair) => Ok(pair),
            None => {
                let pair = domain.default_thresholds();
                tracing::debug!(
                    metric = name,
                    group = group_key,
                    yellow = pair.yellow,
                    red = pair.red,
                    "no threshold configured; using defaults"
                );
                Ok(pair)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Store;

    fn store_with_thresholds() -> (Store, Dataset) {
        let store = Store::memory().unwrap();
        let thresholds = Dataset::new("thresholds").unwrap();
        store.attach_memory(&thresholds).unwrap();
        store
            .execute_sql(
                r#"INSERT INTO "thresholds".threshold(time, request_name, simulation, yellow, red)
                   VALUES (1, 'Login', 'checkout', 1000, 2000)"#,
                [],
            )
            .unwrap();
        (store, thresholds)
    }

    #[test]
    fn configured_pair_wins() {
        let (store, thresholds) = store_with_thresholds();
        let resolver = ThresholdResolver::new(&store, &thresholds);
        let pair = resolver
            .resolve("Login", "checkout", MetricDomain::Api)
            .unwrap();
        assert_eq!(pair, ThresholdPair::new(1000, 2000));
    }

    #[test]
    fn miss_falls_back_to_domain_defaults() {
        let (store, thresholds) = store_with_thresholds();
        let resolver = ThresholdResolver::new(&store, &thresholds);
        assert_eq!(
            resolver
                .resolve("Search", "checkout", MetricDomain::Api)
                .unwrap(),
            ThresholdPair::new(2000, 3000)
        );
        assert_eq!(
            resolver.resolve("Home", "browse", MetricDomain::Page).unwrap(),
            ThresholdPair::new(150, 1000)
        );
    }
}
