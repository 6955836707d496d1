//! Declarative endpoint descriptors.
//!
//! Every remote endpoint is described by one [`EndpointSpec`] static: its
//! HTTP method, path template, declared parameter set and media types. The
//! descriptors are consumed by [`RequestBuilder`](crate::request::RequestBuilder),
//! which implements the one parameter-shaping algorithm shared by all
//! endpoints instead of repeating it per method.

use crate::method::HttpMethod;

/// Response media type used across the API.
pub const MEDIA_JSON: &str = "application/json";

/// Request media type for endpoints accepting a body.
pub const MEDIA_MULTIPART: &str = "multipart/form-data";

/// The bucket a declared parameter is routed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamLocation {
    /// Substituted into the path template.
    Path,
    /// Appended to the query string.
    Query,
    /// Sent as a form-encoded body entry.
    Form,
    /// Sent as a multipart file attachment.
    File,
}

/// One declared parameter of an endpoint.
///
/// `name` is the caller-facing identifier; `wire_name` is the key used on
/// the wire. The two differ only where the generated API renames an input
/// to avoid a collision (see the connection-logs endpoint, whose
/// `id_connection2` argument is sent under the query key `id_connection`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub wire_name: &'static str,
    pub location: ParamLocation,
    pub required: bool,
}

impl ParamSpec {
    /// A path parameter. Path parameters are always required.
    pub const fn path(name: &'static str) -> Self {
        Self {
            name,
            wire_name: name,
            location: ParamLocation::Path,
            required: true,
        }
    }

    /// An optional query parameter.
    pub const fn query(name: &'static str) -> Self {
        Self {
            name,
            wire_name: name,
            location: ParamLocation::Query,
            required: false,
        }
    }

    /// An optional form-body parameter.
    pub const fn form(name: &'static str) -> Self {
        Self {
            name,
            wire_name: name,
            location: ParamLocation::Form,
            required: false,
        }
    }

    /// A multipart file attachment.
    pub const fn file(name: &'static str) -> Self {
        Self {
            name,
            wire_name: name,
            location: ParamLocation::File,
            required: false,
        }
    }

    /// Marks the parameter as required.
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Overrides the key used on the wire.
    pub const fn wire(mut self, wire_name: &'static str) -> Self {
        self.wire_name = wire_name;
        self
    }
}

/// Static description of one remote endpoint.
#[derive(Debug)]
pub struct EndpointSpec {
    /// Endpoint identifier used in diagnostics and validation errors.
    pub id: &'static str,
    pub method: HttpMethod,
    /// Path template with `{name}` placeholders.
    pub path: &'static str,
    /// The declared parameter set; anything else is an unexpected parameter.
    pub params: &'static [ParamSpec],
    /// Declared response media type (`Accept`).
    pub accept: &'static str,
    /// Declared request media type, set on endpoints accepting a body.
    pub content_type: Option<&'static str>,
}

impl EndpointSpec {
    pub const fn new(
        id: &'static str,
        method: HttpMethod,
        path: &'static str,
        params: &'static [ParamSpec],
    ) -> Self {
        Self {
            id,
            method,
            path,
            params,
            accept: MEDIA_JSON,
            content_type: None,
        }
    }

    /// Declares that this endpoint accepts a `multipart/form-data` body.
    pub const fn with_form_body(mut self) -> Self {
        self.content_type = Some(MEDIA_MULTIPART);
        self
    }

    /// Looks up a declared parameter by its caller-facing name.
    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static FIXTURE: EndpointSpec = EndpointSpec::new(
        "widgets_id_widget_put",
        HttpMethod::Put,
        "/widgets/{id_widget}",
        &[
            ParamSpec::path("id_widget"),
            ParamSpec::query("expand"),
            ParamSpec::form("name").required(),
            ParamSpec::query("id_widget2").wire("id_widget"),
        ],
    )
    .with_form_body();

    #[test]
    fn path_params_are_required() {
        let p = FIXTURE.param("id_widget").unwrap();
        assert_eq!(p.location, ParamLocation::Path);
        assert!(p.required);
    }

    #[test]
    fn query_params_default_optional() {
        let p = FIXTURE.param("expand").unwrap();
        assert_eq!(p.location, ParamLocation::Query);
        assert!(!p.required);
    }

    #[test]
    fn required_flag_upgrades_form_param() {
        let p = FIXTURE.param("name").unwrap();
        assert_eq!(p.location, ParamLocation::Form);
        assert!(p.required);
    }

    #[test]
    fn wire_override_diverges_from_name() {
        let p = FIXTURE.param("id_widget2").unwrap();
        assert_eq!(p.wire_name, "id_widget");
        assert_eq!(p.location, ParamLocation::Query);
    }

    #[test]
    fn unknown_param_lookup_is_none() {
        assert!(FIXTURE.param("nope").is_none());
    }

    #[test]
    fn media_types() {
        assert_eq!(FIXTURE.accept, MEDIA_JSON);
        assert_eq!(FIXTURE.content_type, Some(MEDIA_MULTIPART));
    }
}
