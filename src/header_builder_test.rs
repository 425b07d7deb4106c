use super::*;

fn request<'a>(method: &'a str, origin: &'a str, acrm: &'a str, acrh: &'a str) -> RequestContext<'a> {
    RequestContext {
        method,
        path: "/",
        origin,
        access_control_request_method: acrm,
        access_control_request_headers: acrh,
    }
}

fn allowed(outcome: OriginOutcome) -> HeaderCollection {
    match outcome {
        OriginOutcome::Allow(headers) => headers,
        OriginOutcome::Disallow(_) => panic!("expected allow, got disallow"),
        OriginOutcome::Skip => panic!("expected allow, got skip"),
    }
}

mod build_origin_headers {
    use super::*;

    #[test]
    fn should_emit_wildcard_without_vary_for_default_config() {
        // Arrange
        let config = CorsConfig::default();
        let builder = HeaderBuilder::new(&config);

        // Act
        let headers = allowed(builder.build_origin_headers(&request("GET", "https://a.test", "", "")));

        // Assert
        assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN), Some("*"));
        assert_eq!(headers.get(header::VARY), None);
    }

    #[test]
    fn should_mirror_origin_for_wildcard_when_credentials_enabled() {
        // Arrange
        let config = CorsConfig {
            allow_credentials: Some(true),
            ..CorsConfig::default()
        };
        let builder = HeaderBuilder::new(&config);

        // Act
        let headers = allowed(builder.build_origin_headers(&request("GET", "https://a.test", "", "")));

        // Assert
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some("https://a.test")
        );
        assert_eq!(headers.get(header::VARY), Some("Origin"));
    }

    #[test]
    fn should_mirror_request_spelling_for_literal_match() {
        // Arrange
        let config = CorsConfig {
            allowed_origins: vec!["https://app.test".into()],
            ..CorsConfig::default()
        };
        let builder = HeaderBuilder::new(&config);

        // Act
        let headers = allowed(builder.build_origin_headers(&request("GET", "https://APP.test", "", "")));

        // Assert
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some("https://APP.test")
        );
    }

    #[test]
    fn should_only_vary_when_origin_disallowed() {
        // Arrange
        let config = CorsConfig {
            allowed_origins: vec!["https://app.test".into()],
            ..CorsConfig::default()
        };
        let builder = HeaderBuilder::new(&config);

        // Act
        let outcome = builder.build_origin_headers(&request("GET", "https://evil.test", "", ""));

        // Assert
        match outcome {
            OriginOutcome::Disallow(headers) => {
                assert_eq!(headers.get(header::VARY), Some("Origin"));
                assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN), None);
            }
            _ => panic!("expected disallow"),
        }
    }

    #[test]
    fn should_skip_without_origin() {
        let config = CorsConfig::default();
        let builder = HeaderBuilder::new(&config);

        let outcome = builder.build_origin_headers(&request("GET", "", "", ""));

        assert!(matches!(outcome, OriginOutcome::Skip));
    }
}

mod build_credentials_header {
    use super::*;

    #[test]
    fn should_emit_only_when_explicitly_true() {
        // Arrange
        let disabled = CorsConfig {
            allow_credentials: Some(false),
            ..CorsConfig::default()
        };
        let enabled = CorsConfig {
            allow_credentials: Some(true),
            ..CorsConfig::default()
        };

        // Act & Assert
        assert!(HeaderBuilder::new(&disabled).build_credentials_header().is_empty());
        assert_eq!(
            HeaderBuilder::new(&enabled)
                .build_credentials_header()
                .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS),
            Some("true")
        );
    }
}

mod build_methods_header {
    use super::*;

    #[test]
    fn should_emit_configured_value_verbatim() {
        // Arrange
        let config = CorsConfig {
            allowed_methods: "GET,POST".into(),
            ..CorsConfig::default()
        };

        // Act
        let headers = HeaderBuilder::new(&config).build_methods_header(&request("OPTIONS", "o", "PUT", ""));

        // Assert
        assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_METHODS), Some("GET,POST"));
    }

    #[test]
    fn should_echo_requested_method_when_unconfigured() {
        // Arrange
        let config = CorsConfig {
            allowed_methods: String::new(),
            ..CorsConfig::default()
        };

        // Act
        let headers = HeaderBuilder::new(&config).build_methods_header(&request("OPTIONS", "o", "PATCH", ""));

        // Assert
        assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_METHODS), Some("PATCH"));
    }
}

mod build_allowed_headers {
    use super::*;

    #[test]
    fn should_emit_configured_value_without_vary() {
        // Arrange
        let config = CorsConfig {
            allowed_headers: "*".into(),
            ..CorsConfig::default()
        };

        // Act
        let headers = HeaderBuilder::new(&config).build_allowed_headers(&request("OPTIONS", "o", "GET", "X-A"));

        // Assert
        assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS), Some("*"));
        assert_eq!(headers.get(header::VARY), None);
    }

    #[test]
    fn should_mirror_request_headers_when_unconfigured() {
        // Arrange
        let config = CorsConfig::default();

        // Act
        let headers = HeaderBuilder::new(&config)
            .build_allowed_headers(&request("OPTIONS", "o", "GET", "X-A, X-B"));

        // Assert
        assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS), Some("X-A, X-B"));
        assert_eq!(headers.get(header::VARY), Some("Access-Control-Request-Headers"));
    }

    #[test]
    fn should_vary_without_value_when_nothing_requested() {
        // Arrange
        let config = CorsConfig::default();

        // Act
        let headers = HeaderBuilder::new(&config).build_allowed_headers(&request("OPTIONS", "o", "GET", ""));

        // Assert
        assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS), None);
        assert_eq!(headers.get(header::VARY), Some("Access-Control-Request-Headers"));
    }
}

mod build_max_age_header {
    use super::*;

    #[test]
    fn should_emit_positive_values_only() {
        for (max_age, expected) in [(600, Some("600")), (0, None), (-1, None)] {
            let config = CorsConfig {
                max_age,
                ..CorsConfig::default()
            };

            let headers = HeaderBuilder::new(&config).build_max_age_header();

            assert_eq!(headers.get(header::ACCESS_CONTROL_MAX_AGE), expected);
        }
    }
}

mod build_exposed_headers {
    use super::*;

    #[test]
    fn should_skip_blank_value() {
        let config = CorsConfig {
            exposed_headers: "   ".into(),
            ..CorsConfig::default()
        };

        assert!(HeaderBuilder::new(&config).build_exposed_headers().is_empty());
    }

    #[test]
    fn should_emit_trimmed_value() {
        let config = CorsConfig {
            exposed_headers: " X-Total-Count ".into(),
            ..CorsConfig::default()
        };

        let headers = HeaderBuilder::new(&config).build_exposed_headers();

        assert_eq!(headers.get(header::ACCESS_CONTROL_EXPOSE_HEADERS), Some("X-Total-Count"));
    }
}
