//! Endpoint URL validation and decomposition.
//!
//! Both run exactly once, when the client is constructed. Validation decides
//! whether REST calls are permitted at all; decomposition extracts the origin
//! and the API-key path segment that every request URL is built from.

/// Whether the configured URL may serve Alchemy REST calls.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ValidationOutcome {
    /// REST calls are permitted.
    Valid,
    /// REST calls are rejected with a human-readable reason.
    Invalid(String),
}

impl ValidationOutcome {
    /// Returns the rejection reason, if any.
    pub fn rejection(&self) -> Option<&str> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid(reason) => Some(reason),
        }
    }
}

/// Origin and API-key segment of a configured endpoint URL.
///
/// Either part may be empty when the URL is malformed; the client sends no
/// traffic in that case.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EndpointParts {
    /// Scheme + host + optional port, without path or query.
    pub origin: String,
    /// Final path component of the configured URL.
    pub api_key: String,
}

/// Classifies a configured URL for Alchemy REST usage.
///
/// Checks run in order and a later match overwrites an earlier reason, so the
/// most specific classification wins.
pub fn validate_rest_endpoint(url: &str) -> ValidationOutcome {
    let mut reason = None;
    if url.starts_with("ws://") || url.starts_with("wss://") {
        reason = Some("Alchemy REST endpoints are not available via websockets".to_owned());
    }
    if !url.contains("alchemy") {
        reason = Some(
            "Alchemy-specific REST endpoints are not available with a non-Alchemy provider"
                .to_owned(),
        );
    }
    if url.contains("alchemyapi.io") && !url.contains("eth-") {
        reason = Some(
            "Alchemy-specific REST endpoints on L2 networks are not available with the \
             legacy alchemyapi.io domain; switch over to alchemy.com"
                .to_owned(),
        );
    }
    match reason {
        Some(reason) => ValidationOutcome::Invalid(reason),
        None => ValidationOutcome::Valid,
    }
}

/// Splits a URL into origin and API-key segment.
///
/// Plain string scanning, no URL parser: the split must behave identically in
/// restricted runtimes that lack a standard URL facility.
pub fn split_endpoint(url: &str) -> EndpointParts {
    let Some(scheme_end) = url.find("://") else {
        return EndpointParts {
            origin: String::new(),
            api_key: String::new(),
        };
    };
    let authority_start = scheme_end + 3;
    let rest = &url[authority_start..];
    let rest = &rest[..rest.find(['?', '#']).unwrap_or(rest.len())];

    match rest.find('/') {
        Some(slash) => {
            let path = &rest[slash..];
            let key_start = path.rfind('/').map_or(0, |index| index + 1);
            EndpointParts {
                origin: url[..authority_start + slash].to_owned(),
                api_key: path[key_start..].to_owned(),
            }
        }
        None => EndpointParts {
            origin: url[..authority_start + rest.len()].to_owned(),
            api_key: String::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{split_endpoint, validate_rest_endpoint, EndpointParts, ValidationOutcome};

    #[test]
    fn https_alchemy_url_is_valid() {
        assert_eq!(
            validate_rest_endpoint("https://eth-mainnet.alchemy.com/v2/demo-key"),
            ValidationOutcome::Valid
        );
    }

    #[test]
    fn websocket_scheme_is_rejected() {
        for url in [
            "ws://eth-mainnet.alchemy.com/v2/demo-key",
            "wss://eth-mainnet.alchemy.com/v2/demo-key",
        ] {
            let outcome = validate_rest_endpoint(url);
            let reason = outcome.rejection().expect("must be rejected");
            assert!(reason.contains("websockets"), "unexpected reason: {reason}");
        }
    }

    #[test]
    fn non_alchemy_provider_is_rejected() {
        let outcome = validate_rest_endpoint("https://mainnet.infura.io/v3/demo-key");
        let reason = outcome.rejection().expect("must be rejected");
        assert!(
            reason.contains("non-Alchemy provider"),
            "unexpected reason: {reason}"
        );
    }

    #[test]
    fn legacy_domain_without_eth_marker_is_rejected() {
        let outcome = validate_rest_endpoint("https://polygon-mainnet.alchemyapi.io/v2/demo-key");
        let reason = outcome.rejection().expect("must be rejected");
        assert!(
            reason.contains("alchemyapi.io"),
            "unexpected reason: {reason}"
        );
    }

    #[test]
    fn legacy_domain_on_eth_mainnet_is_valid() {
        assert_eq!(
            validate_rest_endpoint("https://eth-mainnet.alchemyapi.io/v2/demo-key"),
            ValidationOutcome::Valid
        );
    }

    #[test]
    fn later_check_overwrites_earlier_rejection_reason() {
        // Matches both the websocket rule and the legacy-domain rule; the
        // legacy-domain reason must win.
        let outcome = validate_rest_endpoint("wss://polygon-mainnet.alchemyapi.io/v2/demo-key");
        let reason = outcome.rejection().expect("must be rejected");
        assert!(
            reason.contains("alchemyapi.io"),
            "unexpected reason: {reason}"
        );

        // Matches both the websocket rule and the provider rule; the provider
        // reason must win.
        let outcome = validate_rest_endpoint("wss://mainnet.infura.io/v3/demo-key");
        let reason = outcome.rejection().expect("must be rejected");
        assert!(
            reason.contains("non-Alchemy provider"),
            "unexpected reason: {reason}"
        );
    }

    #[test]
    fn split_extracts_origin_and_key() {
        assert_eq!(
            split_endpoint("https://eth-mainnet.alchemy.com/v2/demo-key"),
            EndpointParts {
                origin: "https://eth-mainnet.alchemy.com".to_owned(),
                api_key: "demo-key".to_owned(),
            }
        );
    }

    #[test]
    fn split_keeps_explicit_port_in_origin() {
        assert_eq!(
            split_endpoint("http://localhost:8545/v2/demo-key"),
            EndpointParts {
                origin: "http://localhost:8545".to_owned(),
                api_key: "demo-key".to_owned(),
            }
        );
    }

    #[test]
    fn split_ignores_query_and_fragment() {
        assert_eq!(
            split_endpoint("https://eth-mainnet.alchemy.com/v2/demo-key?tier=free#top"),
            EndpointParts {
                origin: "https://eth-mainnet.alchemy.com".to_owned(),
                api_key: "demo-key".to_owned(),
            }
        );
    }

    #[test]
    fn split_without_path_yields_empty_key() {
        assert_eq!(
            split_endpoint("https://eth-mainnet.alchemy.com"),
            EndpointParts {
                origin: "https://eth-mainnet.alchemy.com".to_owned(),
                api_key: String::new(),
            }
        );
    }

    #[test]
    fn split_with_trailing_slash_yields_empty_key() {
        assert_eq!(
            split_endpoint("https://eth-mainnet.alchemy.com/"),
            EndpointParts {
                origin: "https://eth-mainnet.alchemy.com".to_owned(),
                api_key: String::new(),
            }
        );
    }

    #[test]
    fn split_without_scheme_yields_empty_parts() {
        assert_eq!(
            split_endpoint("eth-mainnet.alchemy.com/v2/demo-key"),
            EndpointParts {
                origin: String::new(),
                api_key: String::new(),
            }
        );
    }
}
