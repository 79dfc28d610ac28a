//! Builds the hypermedia links returned when an account is created.

use std::fmt;

use crate::{
    account::AccountId,
    endpoints::{self, format_endpoint},
};

/// The relation of a [Link] to the account it was created for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkRelation {
    /// Fetch the account with `GET`.
    SelfLink,
    /// Update the account with `PUT`.
    Update,
    /// Delete the account with `DELETE`.
    Delete,
}

impl LinkRelation {
    /// The relation name used in the `rel` parameter of a `Link` header.
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkRelation::SelfLink => "self",
            LinkRelation::Update => "update",
            LinkRelation::Delete => "delete",
        }
    }
}

impl fmt::Display for LinkRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A target URL and how it relates to the account.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    /// The URL of the account.
    pub href: String,
    /// What the link is for.
    pub rel: LinkRelation,
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>; rel=\"{}\"", self.href, self.rel)
    }
}

/// The self, update and delete links for a newly created account, in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkSet(Vec<Link>);

impl LinkSet {
    /// The links in order.
    pub fn links(&self) -> &[Link] {
        &self.0
    }

    /// Render the links as the value of an HTTP `Link` header, e.g.
    /// `</api/accounts/3>; rel="self", </api/accounts/3>; rel="update", ...`.
    pub fn to_header_value(&self) -> String {
        self.0
            .iter()
            .map(Link::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Build the link set for the account `id`.
///
/// `host` is prepended to the account path as is, minus any trailing slash.
/// When there is no host the links are relative paths.
pub fn build_link_set(host: Option<&str>, id: AccountId) -> LinkSet {
    let host = host.unwrap_or_default().trim_end_matches('/');
    let href = format!("{host}{}", format_endpoint(endpoints::ACCOUNT, id));

    LinkSet(
        [
            LinkRelation::SelfLink,
            LinkRelation::Update,
            LinkRelation::Delete,
        ]
        .into_iter()
        .map(|rel| Link {
            href: href.clone(),
            rel,
        })
        .collect(),
    )
}
