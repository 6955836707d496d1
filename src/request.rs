//! Generic request shaping.
//!
//! [`RequestBuilder`] is the single algorithm behind every endpoint method:
//! it validates supplied names against the endpoint's declared parameter
//! set, checks required parameters are present, and routes each value into
//! its declared bucket. Both validation failures are raised here, before
//! the transport is ever invoked.

use std::fmt;

use bytes::Bytes;

use crate::endpoint::{EndpointSpec, ParamLocation, ParamSpec};
use crate::error::ParamError;
use crate::method::HttpMethod;

/// A file attached to a multipart request.
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    pub file_name: String,
    pub content: Bytes,
}

impl FilePart {
    pub fn new(file_name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }
}

/// A fully shaped request, ready to hand to the transport.
///
/// Keys are the wire names from the endpoint descriptor; omitted optional
/// parameters have no entry.
#[derive(Debug, Clone)]
pub struct RequestPlan {
    /// Id of the endpoint this plan was built for.
    pub endpoint: &'static str,
    pub method: HttpMethod,
    /// Path with placeholders substituted.
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub form: Vec<(&'static str, String)>,
    pub files: Vec<(&'static str, FilePart)>,
    pub accept: &'static str,
    pub content_type: Option<&'static str>,
}

/// Builds a [`RequestPlan`] from an [`EndpointSpec`] and supplied values.
#[derive(Debug)]
pub struct RequestBuilder {
    spec: &'static EndpointSpec,
    values: Vec<(&'static ParamSpec, String)>,
    files: Vec<(&'static ParamSpec, FilePart)>,
}

impl RequestBuilder {
    pub fn new(spec: &'static EndpointSpec) -> Self {
        Self {
            spec,
            values: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Supplies a value for a declared parameter.
    ///
    /// Setting the same parameter twice replaces the earlier value, so a
    /// parameter never produces more than one bucket entry.
    ///
    /// ## Errors
    ///
    /// [`ParamError::Unexpected`] if `name` is not in the endpoint's
    /// declared parameter set, or names a file attachment (use
    /// [`attach`](Self::attach) for those).
    pub fn set(&mut self, name: &str, value: impl fmt::Display) -> Result<&mut Self, ParamError> {
        let param = self.lookup(name)?;
        if param.location == ParamLocation::File {
            return Err(ParamError::Unexpected {
                parameter: name.to_string(),
                endpoint: self.spec.id,
            });
        }
        let value = value.to_string();
        match self.values.iter_mut().find(|(p, _)| p.name == param.name) {
            Some(slot) => slot.1 = value,
            None => self.values.push((param, value)),
        }
        Ok(self)
    }

    /// Attaches a file to a declared file parameter.
    pub fn attach(&mut self, name: &str, file: FilePart) -> Result<&mut Self, ParamError> {
        let param = self.lookup(name)?;
        if param.location != ParamLocation::File {
            return Err(ParamError::Unexpected {
                parameter: name.to_string(),
                endpoint: self.spec.id,
            });
        }
        match self.files.iter_mut().find(|(p, _)| p.name == param.name) {
            Some(slot) => slot.1 = file,
            None => self.files.push((param, file)),
        }
        Ok(self)
    }

    fn lookup(&self, name: &str) -> Result<&'static ParamSpec, ParamError> {
        self.spec.param(name).ok_or_else(|| ParamError::Unexpected {
            parameter: name.to_string(),
            endpoint: self.spec.id,
        })
    }

    /// Validates required parameters and routes values into their buckets.
    ///
    /// ## Errors
    ///
    /// [`ParamError::Missing`] when a required parameter was not supplied.
    /// An empty string counts as absent.
    pub fn build(self) -> Result<RequestPlan, ParamError> {
        for param in self.spec.params.iter().filter(|p| p.required) {
            let present = match param.location {
                ParamLocation::File => self.files.iter().any(|(p, _)| p.name == param.name),
                _ => self
                    .values
                    .iter()
                    .any(|(p, v)| p.name == param.name && !v.is_empty()),
            };
            if !present {
                return Err(ParamError::Missing {
                    parameter: param.name,
                    endpoint: self.spec.id,
                });
            }
        }

        let mut path = self.spec.path.to_string();
        let mut query = Vec::new();
        let mut form = Vec::new();

        for (param, value) in self.values {
            match param.location {
                ParamLocation::Path => {
                    path = path.replace(&format!("{{{}}}", param.wire_name), &value);
                }
                ParamLocation::Query => query.push((param.wire_name, value)),
                ParamLocation::Form => form.push((param.wire_name, value)),
                ParamLocation::File => unreachable!("set() rejects file parameters"),
            }
        }

        let files = self
            .files
            .into_iter()
            .map(|(param, file)| (param.wire_name, file))
            .collect();

        Ok(RequestPlan {
            endpoint: self.spec.id,
            method: self.spec.method,
            path,
            query,
            form,
            files,
            accept: self.spec.accept,
            content_type: self.spec.content_type,
        })
    }
}
