//! Identifier validation
//!
//! Checks run on caller-supplied identifiers before any store I/O, so that
//! malformed input never reaches a query.

use crate::error::{CatalogError, Result};
use crate::types::{DocumentId, DOCUMENT_ID_HEX_LEN};

/// Whether `candidate` is a well-formed store-native identifier
pub fn is_document_id(candidate: &str) -> bool {
    candidate.len() == DOCUMENT_ID_HEX_LEN && candidate.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Parse `candidate`, failing with `InvalidRequest` naming the parameter
pub fn validate_document_id(candidate: &str, what: &str) -> Result<DocumentId> {
    candidate
        .parse()
        .map_err(|_| CatalogError::invalid_request(format!("invalid {what} id: '{candidate}'")))
}

/// Every entry of a reference list must be a well-formed identifier
pub fn validate_track_ids(ids: &[String]) -> Result<()> {
    match ids.iter().position(|id| !is_document_id(id)) {
        Some(index) => Err(CatalogError::invalid_request(format!(
            "invalid track id at position {index}: '{}'",
            ids[index]
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use proptest::prelude::*;

    #[test]
    fn accepts_generated_ids() {
        let id = DocumentId::generate();
        assert!(is_document_id(&id.to_string()));
    }

    #[test]
    fn rejects_wrong_length_and_non_hex() {
        assert!(!is_document_id(""));
        assert!(!is_document_id("123"));
        assert!(!is_document_id("zzzzzzzzzzzzzzzzzzzzzzzz"));
        assert!(!is_document_id(" 65f1c0ffee0000000000abc"));
        // Multi-byte characters must not slip through a length check
        assert!(!is_document_id("ééééééééééééé"));
    }

    #[test]
    fn validate_document_id_names_parameter() {
        let err = validate_document_id("nope", "playlist").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
        assert!(err.to_string().contains("playlist"));
    }

    #[test]
    fn validate_track_ids_reports_position() {
        let ids = vec![
            "65f1c0ffee0000000000abcd".to_string(),
            "bad".to_string(),
        ];
        let err = validate_track_ids(&ids).unwrap_err();
        assert!(err.to_string().contains("position 1"));
        assert!(validate_track_ids(&[]).is_ok());
    }

    proptest! {
        #[test]
        fn any_24_hex_digits_are_valid(s in "[0-9a-fA-F]{24}") {
            prop_assert!(is_document_id(&s));
            prop_assert!(validate_document_id(&s, "track").is_ok());
        }

        #[test]
        fn validator_agrees_with_parser(s in "\\PC{0,30}") {
            prop_assert_eq!(is_document_id(&s), s.parse::<DocumentId>().is_ok());
        }
    }
}
