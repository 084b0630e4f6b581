// tests/unit/types.rs
//! Unit tests for domain types

use prismic2site::types::*;

mod uid_tests {
    use super::*;

    #[test]
    fn valid_slugs_parse() {
        for input in ["como-utilizar-hooks", "post_01", "X9", "a"] {
            let uid = Uid::parse(input);
            assert!(uid.is_ok(), "uid '{}' should be valid", input);
            assert_eq!(uid.unwrap().as_str(), input);
        }
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(Uid::parse("  my-post  ").unwrap().as_str(), "my-post");
    }

    #[test]
    fn empty_uid_is_rejected() {
        assert!(matches!(
            Uid::parse(""),
            Err(ValidationError::EmptyField("uid"))
        ));
    }

    #[test]
    fn non_slug_characters_are_rejected() {
        for input in ["has spaces", "-leading-dash", "acentuação", "a/b"] {
            assert!(
                matches!(Uid::parse(input), Err(ValidationError::InvalidUid { .. })),
                "uid '{}' should be rejected",
                input
            );
        }
    }
}

mod document_type_tests {
    use super::*;

    #[test]
    fn valid_type_names() {
        assert_eq!(DocumentType::new("posts").unwrap().as_str(), "posts");
        assert_eq!(DocumentType::new("blog_post").unwrap().as_str(), "blog_post");
    }

    #[test]
    fn empty_type_is_rejected() {
        assert!(matches!(
            DocumentType::new(""),
            Err(ValidationError::EmptyField(_))
        ));
    }

    #[test]
    fn predicate_breaking_characters_are_rejected() {
        assert!(matches!(
            DocumentType::new("posts\")]]"),
            Err(ValidationError::InvalidDocumentType { .. })
        ));
    }
}

mod cursor_tests {
    use super::*;

    #[test]
    fn http_and_https_cursors_parse() {
        let cursor =
            Cursor::parse("https://demo.cdn.prismic.io/api/v2/documents/search?page=2").unwrap();
        assert!(cursor.as_str().contains("page=2"));
    }

    #[test]
    fn non_http_schemes_are_rejected() {
        assert!(matches!(
            Cursor::parse("ftp://example.com/page/2"),
            Err(ValidationError::InvalidCursor { .. })
        ));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(
            Cursor::parse("not a url"),
            Err(ValidationError::InvalidCursor { .. })
        ));
    }
}

mod endpoint_tests {
    use super::*;

    #[test]
    fn endpoint_strips_the_trailing_slash() {
        let endpoint = ApiEndpoint::parse("https://demo.cdn.prismic.io/api/v2/").unwrap();
        assert_eq!(endpoint.as_str(), "https://demo.cdn.prismic.io/api/v2");
    }

    #[test]
    fn non_http_endpoints_are_rejected() {
        assert!(matches!(
            ApiEndpoint::parse("file:///etc/passwd"),
            Err(ValidationError::InvalidEndpoint { .. })
        ));
    }
}

mod access_token_tests {
    use super::*;

    #[test]
    fn empty_token_is_rejected() {
        assert!(matches!(
            AccessToken::new(""),
            Err(ValidationError::InvalidAccessToken { .. })
        ));
    }

    #[test]
    fn display_redacts_the_token() {
        let token = AccessToken::new("MC5ZQ2VEbWhBQUFDVUFoWk94supersecret").unwrap();
        let display = format!("{}", token);
        assert_eq!(display, "MC5ZQ2...");
        assert!(!display.contains("supersecret"));
    }
}

mod rendered_page_tests {
    use super::*;

    #[test]
    fn rendered_page_round_trips_its_content() {
        let page = RenderedPage::new("<html></html>".to_string());
        assert_eq!(page.len(), 13);
        assert!(!page.is_empty());
        assert_eq!(page.into_string(), "<html></html>");
    }
}
