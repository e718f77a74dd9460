//! Tests for the interface filtering module.

use super::filter::*;
use super::{AdapterSnapshot, AddressFetcher, FetchError};

// ============================================================================
// Test Fixtures
// ============================================================================

fn zerotier_adapter() -> AdapterSnapshot {
    AdapterSnapshot::new(
        "ztabcdef12",
        vec!["10.147.17.5".parse().unwrap()],
        vec!["fe80::1".parse().unwrap()],
    )
}

fn ethernet_adapter() -> AdapterSnapshot {
    AdapterSnapshot::new("eth0", vec!["192.168.1.5".parse().unwrap()], vec![])
}

fn loopback_adapter() -> AdapterSnapshot {
    AdapterSnapshot::new(
        "lo",
        vec!["127.0.0.1".parse().unwrap()],
        vec!["::1".parse().unwrap()],
    )
}

struct StaticFetcher(Vec<AdapterSnapshot>);

impl AddressFetcher for StaticFetcher {
    fn fetch(&self) -> Result<Vec<AdapterSnapshot>, FetchError> {
        Ok(self.0.clone())
    }
}

struct FailingFetcher;

impl AddressFetcher for FailingFetcher {
    fn fetch(&self) -> Result<Vec<AdapterSnapshot>, FetchError> {
        Err(FetchError::Io(std::io::Error::other("no interfaces for you")))
    }
}

fn accepts<A: AdapterFilter>(filter: A, adapter: &AdapterSnapshot) -> bool {
    filter.matches(adapter)
}

// ============================================================================
// NameContainsFilter Tests
// ============================================================================

mod name_contains_filter {
    use super::*;

    #[test]
    fn rejects_empty_needle() {
        assert_eq!(NameContainsFilter::new(""), Err(FilterError::Empty));
    }

    #[test]
    fn needle_accessor_returns_substring() {
        let filter = NameContainsFilter::new("zt").unwrap();
        assert_eq!(filter.needle(), "zt");
    }

    #[test]
    fn matches_prefix_suffix_and_infix() {
        let filter = NameContainsFilter::new("zt").unwrap();
        assert!(filter.matches(&AdapterSnapshot::empty("zt0")));
        assert!(filter.matches(&AdapterSnapshot::empty("ztabc")));
        assert!(filter.matches(&AdapterSnapshot::empty("tun-zt")));
        assert!(filter.matches(&AdapterSnapshot::empty("vzt1")));
    }

    #[test]
    fn does_not_match_unrelated_names() {
        let filter = NameContainsFilter::new("zt").unwrap();
        assert!(!filter.matches(&ethernet_adapter()));
        assert!(!filter.matches(&loopback_adapter()));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let filter = NameContainsFilter::new("zt").unwrap();
        assert!(!filter.matches(&AdapterSnapshot::empty("ZT0")));
        assert!(!filter.matches(&AdapterSnapshot::empty("ZeroTier One")));
    }

    #[test]
    fn exact_name_matches() {
        let filter = NameContainsFilter::new("eth0").unwrap();
        assert!(filter.matches(&ethernet_adapter()));
    }

    #[test]
    fn works_through_reference_and_box() {
        let filter = NameContainsFilter::new("zt").unwrap();
        let by_ref: &dyn AdapterFilter = &filter;
        let boxed: Box<dyn AdapterFilter> = Box::new(filter.clone());

        assert!(accepts(by_ref, &zerotier_adapter()));
        assert!(accepts(&boxed, &zerotier_adapter()));
        assert!(!accepts(boxed, &ethernet_adapter()));
    }
}

// ============================================================================
// FilteredFetcher Tests
// ============================================================================

mod filtered_fetcher {
    use super::*;

    #[test]
    fn keeps_only_matching_adapters_in_order() {
        let inner = StaticFetcher(vec![
            AdapterSnapshot::empty("zt1"),
            ethernet_adapter(),
            zerotier_adapter(),
            loopback_adapter(),
        ]);
        let fetcher = FilteredFetcher::new(inner, NameContainsFilter::new("zt").unwrap());

        let names: Vec<String> = fetcher
            .fetch()
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();

        assert_eq!(names, vec!["zt1", "ztabcdef12"]);
    }

    #[test]
    fn wraps_a_borrowed_fetcher() {
        let inner = StaticFetcher(vec![ethernet_adapter(), zerotier_adapter()]);
        let fetcher = FilteredFetcher::new(&inner, NameContainsFilter::new("eth").unwrap());

        assert_eq!(fetcher.fetch().unwrap(), vec![ethernet_adapter()]);
        assert_eq!(inner.0.len(), 2);
    }

    #[test]
    fn returns_empty_when_nothing_matches() {
        let inner = StaticFetcher(vec![ethernet_adapter(), loopback_adapter()]);
        let fetcher = FilteredFetcher::new(inner, NameContainsFilter::new("zt").unwrap());

        assert!(fetcher.fetch().unwrap().is_empty());
    }

    #[test]
    fn propagates_inner_errors() {
        let fetcher = FilteredFetcher::new(FailingFetcher, NameContainsFilter::new("zt").unwrap());

        let error = fetcher.fetch().unwrap_err();
        assert!(error.to_string().contains("no interfaces for you"));
    }

    #[test]
    fn accessors_expose_parts() {
        let fetcher = FilteredFetcher::new(
            StaticFetcher(vec![]),
            NameContainsFilter::new("zt").unwrap(),
        );

        assert_eq!(fetcher.filter().needle(), "zt");
        assert!(fetcher.inner().0.is_empty());
    }
}
