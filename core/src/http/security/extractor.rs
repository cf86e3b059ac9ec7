//! Extractors exposing the principals attached by the authentication layer.
//!
//! # Spring Equivalent
//! `@AuthenticationPrincipal` annotation

use futures_util::future::{ok, Ready};
use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::http::security::Identity;

/// The authenticated principals of the current request.
///
/// Authentication middleware inserts either a `Principals` value or a single
/// [`Identity`] into the request extensions. Extraction never fails: when
/// nothing was attached the list is empty and the authorizer denies.
///
/// # Usage
/// ```ignore
/// use actix_authz_core::http::security::Principals;
///
/// async fn handler(principals: Principals) -> impl Responder {
///     match principals.first() {
///         Some(identity) => format!("Hello, {}!", identity.get_name()),
///         None => "Hello, guest!".to_string(),
///     }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Principals(Vec<Identity>);

impl Principals {
    pub fn new(principals: Vec<Identity>) -> Self {
        Principals(principals)
    }

    /// Returns the inner list.
    pub fn into_inner(self) -> Vec<Identity> {
        self.0
    }

    /// Returns true if at least one principal is present.
    pub fn is_authenticated(&self) -> bool {
        !self.0.is_empty()
    }

    fn from_extensions(req: &HttpRequest) -> Self {
        let extensions = req.extensions();
        if let Some(principals) = extensions.get::<Principals>() {
            return principals.clone();
        }
        match extensions.get::<Identity>() {
            Some(identity) => Principals(vec![identity.clone()]),
            None => Principals::default(),
        }
    }
}

impl From<Identity> for Principals {
    fn from(identity: Identity) -> Self {
        Principals(vec![identity])
    }
}

impl Deref for Principals {
    type Target = [Identity];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for Principals {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ok(Principals::from_extensions(req))
    }
}

/// Extension trait for HttpRequest to inspect the attached principals.
pub trait SecurityExt {
    /// Returns the principals attached to the request.
    fn principals(&self) -> Principals;

    /// Returns true if a principal is attached.
    fn is_authenticated(&self) -> bool;
}

impl SecurityExt for HttpRequest {
    fn principals(&self) -> Principals {
        Principals::from_extensions(self)
    }

    fn is_authenticated(&self) -> bool {
        Principals::from_extensions(self).is_authenticated()
    }
}
