//! Navigation links and the builder producing canonical resource URIs.

use serde::{
    ser::{SerializeMap, SerializeStruct},
    Serialize, Serializer,
};
use url::form_urlencoded;

use crate::server::{
    error::assembly::AssemblyError,
    hypermedia::{affordance::Affordance, resource::ResourceType},
};

pub const SELF_REL: &str = "self";
pub const PAGE_REL: &str = "page";

/// Relations always rendered as JSON arrays, even with a single link.
const ARRAY_RELS: &[&str] = &["trainingSessionsList", "roleCoachesList"];

/// A named navigation link, optionally templated, carrying the affordances reachable
/// through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub rel: String,
    pub href: String,
    pub templated: bool,
    pub affordances: Vec<Affordance>,
}

impl Link {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
            templated: false,
            affordances: Vec::new(),
        }
    }

    pub fn with_rel(mut self, rel: impl Into<String>) -> Self {
        self.rel = rel.into();
        self
    }

    pub fn with_affordances(mut self, affordances: Vec<Affordance>) -> Self {
        self.affordances = affordances;
        self
    }

    fn templated(mut self) -> Self {
        self.templated = true;
        self
    }
}

impl Serialize for Link {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.templated { 2 } else { 1 };
        let mut state = serializer.serialize_struct("Link", len)?;
        state.serialize_field("href", &self.href)?;
        if self.templated {
            state.serialize_field("templated", &true)?;
        }
        state.end()
    }
}

/// Ordered link set of a representation.
///
/// Several links may share a relation name (e.g. one `trainingSessionsList` link per
/// session); insertion order is preserved for stable output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Links(Vec<Link>);

impl Links {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, link: Link) {
        self.0.push(link);
    }

    /// First link registered under `rel`.
    pub fn get(&self, rel: &str) -> Option<&Link> {
        self.0.iter().find(|link| link.rel == rel)
    }

    pub fn get_all<'a>(&'a self, rel: &'a str) -> impl Iterator<Item = &'a Link> + 'a {
        self.0.iter().filter(move |link| link.rel == rel)
    }

    pub fn has(&self, rel: &str) -> bool {
        self.get(rel).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Link> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Distinct relation names in first-appearance order.
    pub fn rels(&self) -> Vec<&str> {
        let mut rels: Vec<&str> = Vec::new();
        for link in &self.0 {
            if !rels.contains(&link.rel.as_str()) {
                rels.push(&link.rel);
            }
        }
        rels
    }

    /// Every affordance attached to any link, in link order.
    pub fn affordances(&self) -> impl Iterator<Item = &Affordance> {
        self.0.iter().flat_map(|link| link.affordances.iter())
    }
}

impl From<Vec<Link>> for Links {
    fn from(links: Vec<Link>) -> Self {
        Self(links)
    }
}

impl Serialize for Links {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let rels = self.rels();
        let mut map = serializer.serialize_map(Some(rels.len()))?;
        for rel in rels {
            let links: Vec<&Link> = self.get_all(rel).collect();
            if links.len() == 1 && !ARRAY_RELS.contains(&rel) {
                map.serialize_entry(rel, links[0])?;
            } else {
                map.serialize_entry(rel, &links)?;
            }
        }
        map.end()
    }
}

/// Builds canonical links for resource types without an HTTP request context.
///
/// Every href is the configured base URL followed by the resource route, so output is
/// byte-identical for identical input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkBuilder {
    base_url: String,
}

impl LinkBuilder {
    /// Creates a builder prefixing every href with `base_url`.
    ///
    /// An empty base URL yields root-relative hrefs such as `/api/halls/1`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn href(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Route of one instance, failing when the instance was never persisted.
    pub fn item_path(resource: ResourceType, id: Option<i32>) -> Result<String, AssemblyError> {
        let id = id.ok_or(AssemblyError::InvalidResourceReference { resource })?;
        Ok(format!("{}/{}", resource.path(), id))
    }

    /// `self` link of one instance.
    ///
    /// # Returns
    /// - `Ok(Link)` - Link to `{path}/{id}`
    /// - `Err(AssemblyError::InvalidResourceReference)` - `id` is absent
    pub fn item_link(&self, resource: ResourceType, id: Option<i32>) -> Result<Link, AssemblyError> {
        let path = Self::item_path(resource, id)?;
        Ok(Link::new(SELF_REL, self.href(&path)))
    }

    /// Link to the paged collection under the type's collection relation.
    pub fn collection_link(&self, resource: ResourceType) -> Link {
        Link::new(resource.collection_rel(), self.href(resource.path()))
    }

    /// Templated `page` link exposing `page`, `size` and `sort` request parameters.
    pub fn paged_templated_link(&self, resource: ResourceType) -> Link {
        self.templated_page_link(resource.path(), true)
    }

    /// Templated `page` link rooted at an arbitrary collection route.
    ///
    /// Routes paging a fixed in-memory order pass `sortable = false` and only expose
    /// `page` and `size`.
    pub fn templated_page_link(&self, path: &str, sortable: bool) -> Link {
        let variables = if sortable { "page,size,sort" } else { "page,size" };
        Link::new(PAGE_REL, format!("{}{{?{}}}", self.href(path), variables)).templated()
    }

    /// Untemplated link to the full, unpaged collection.
    pub fn all_items_link(&self, resource: ResourceType) -> Link {
        Link::new(
            resource.all_rel(),
            format!("{}/all", self.href(resource.path())),
        )
    }

    /// Link to one concrete page of a collection route, repeating `sort` when the
    /// page was requested with one.
    pub fn page_link(
        &self,
        path: &str,
        rel: &str,
        number: u64,
        size: u64,
        sort: Option<&str>,
    ) -> Link {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query
            .append_pair("page", &number.to_string())
            .append_pair("size", &size.to_string());
        if let Some(sort) = sort {
            query.append_pair("sort", sort);
        }

        Link::new(rel, format!("{}?{}", self.href(path), query.finish()))
    }

    /// Plain link to any route of the API.
    pub fn link_to(&self, rel: &str, path: &str) -> Link {
        Link::new(rel, self.href(path))
    }
}
