//! Shared validation helpers for inbound HTTP adapters.

use actix_web::web;
use serde_json::json;

use crate::domain::{Error, ParticipantId, PaymentValidationError};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValidationCode {
    BlankField,
    MalformedBody,
    MalformedPath,
}

impl ValidationCode {
    const fn as_str(self) -> &'static str {
        match self {
            Self::BlankField => "blank_field",
            Self::MalformedBody => "malformed_body",
            Self::MalformedPath => "malformed_path",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    const fn as_str(self) -> &'static str {
        self.0
    }
}

/// Parse a participant identifier, reporting the offending field on failure.
pub(crate) fn parse_participant_id(value: String, field: FieldName) -> Result<ParticipantId, Error> {
    ParticipantId::new(value).map_err(|err| match err {
        PaymentValidationError::EmptyParticipantId => {
            Error::invalid_request(format!("{} must not be empty", field.as_str())).with_details(
                json!({
                    "field": field.as_str(),
                    "code": ValidationCode::BlankField.as_str(),
                }),
            )
        }
    })
}

/// JSON extractor configuration reporting malformed bodies as
/// `invalid_request` errors.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use payments::inbound::http::validation::json_config;
///
/// let _app = App::new().app_data(json_config());
/// ```
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        Error::invalid_request("request body is not a valid payment payload")
            .with_details(json!({
                "reason": err.to_string(),
                "code": ValidationCode::MalformedBody.as_str(),
            }))
            .into()
    })
}

/// Path extractor configuration reporting unparsable segments as
/// `invalid_request` errors.
#[must_use]
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        Error::invalid_request("path parameter is malformed")
            .with_details(json!({
                "reason": err.to_string(),
                "code": ValidationCode::MalformedPath.as_str(),
            }))
            .into()
    })
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;
    use crate::domain::ErrorCode;

    #[rstest]
    fn blank_participant_names_the_field() {
        let err = parse_participant_id("  ".to_owned(), FieldName::new("payeeId"))
            .expect_err("blank id is rejected");

        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.message(), "payeeId must not be empty");
        assert_eq!(
            err.details(),
            Some(&json!({ "field": "payeeId", "code": "blank_field" }))
        );
    }

    #[rstest]
    fn non_blank_participant_is_accepted() {
        let id = parse_participant_id("p1".to_owned(), FieldName::new("payerId"))
            .expect("valid id");
        assert_eq!(id.as_ref(), "p1");
    }
}
