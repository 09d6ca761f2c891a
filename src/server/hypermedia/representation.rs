//! Representation models and their HAL-FORMS serialization.
//!
//! Content is flattened at the top level, followed by `_embedded`, `_links` and
//! `_templates`. Templates are gathered from the affordances of every link, first
//! occurrence of a name winning.

use serde::{ser::SerializeMap, Serialize, Serializer};
use serde_json::Value;

use crate::server::{
    error::assembly::AssemblyError,
    hypermedia::{
        affordance::Affordance,
        link::{Link, Links},
        page::PageMetadata,
        resource::ResourceType,
    },
};

/// Media type of every hypermedia response body.
pub const HAL_FORMS_MEDIA_TYPE: &str = "application/prs.hal-forms+json";

/// Embedded child representations under one relation.
#[derive(Debug, Clone, PartialEq)]
pub enum EmbeddedValue {
    One(Box<EntityModel<Value>>),
    Many(Vec<EntityModel<Value>>),
    /// Declared relation with no members.
    Empty(ResourceType),
}

impl EmbeddedValue {
    pub fn models(&self) -> Vec<&EntityModel<Value>> {
        match self {
            Self::One(model) => vec![model.as_ref()],
            Self::Many(models) => models.iter().collect(),
            Self::Empty(_) => Vec::new(),
        }
    }
}

impl Serialize for EmbeddedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::One(model) => model.serialize(serializer),
            Self::Many(models) => models.serialize(serializer),
            Self::Empty(_) => serializer.collect_seq(std::iter::empty::<()>()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Embedded {
    rel: String,
    resource: ResourceType,
    value: EmbeddedValue,
}

/// Representation of a single resource instance.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityModel<T> {
    pub resource: ResourceType,
    pub content: T,
    pub links: Links,
    embedded: Vec<Embedded>,
}

impl<T> EntityModel<T> {
    pub fn new(resource: ResourceType, content: T) -> Self {
        Self {
            resource,
            content,
            links: Links::new(),
            embedded: Vec::new(),
        }
    }

    pub fn add_link(&mut self, link: Link) {
        self.links.push(link);
    }

    /// Embeds a single child representation under `rel`.
    ///
    /// # Returns
    /// - `Ok(())` - Child embedded
    /// - `Err(AssemblyError::UndeclaredEmbedding)` - This resource type does not declare
    ///   the child type as embeddable
    /// - `Err(AssemblyError::Content)` - Child content failed to serialize
    pub fn embed_one<C: Serialize>(
        &mut self,
        rel: &str,
        child: EntityModel<C>,
    ) -> Result<(), AssemblyError> {
        self.check_declared(child.resource)?;
        let resource = child.resource;
        self.embedded.push(Embedded {
            rel: rel.to_string(),
            resource,
            value: EmbeddedValue::One(Box::new(child.erase()?)),
        });
        Ok(())
    }

    /// Embeds a homogeneous list of children under `rel`; an empty list is recorded as
    /// the typed empty marker.
    pub fn embed_many<C: Serialize>(
        &mut self,
        rel: &str,
        resource: ResourceType,
        children: Vec<EntityModel<C>>,
    ) -> Result<(), AssemblyError> {
        self.check_declared(resource)?;
        let value = if children.is_empty() {
            EmbeddedValue::Empty(resource)
        } else {
            EmbeddedValue::Many(
                children
                    .into_iter()
                    .map(|child| {
                        if child.resource != resource {
                            return Err(AssemblyError::UndeclaredEmbedding {
                                parent: self.resource,
                                child: child.resource,
                            });
                        }
                        child.erase()
                    })
                    .collect::<Result<_, _>>()?,
            )
        };
        self.embedded.push(Embedded {
            rel: rel.to_string(),
            resource,
            value,
        });
        Ok(())
    }

    pub fn embedded(&self, rel: &str) -> Option<&EmbeddedValue> {
        self.embedded
            .iter()
            .find(|embedded| embedded.rel == rel)
            .map(|embedded| &embedded.value)
    }

    /// Resource types embedded in this representation, in insertion order.
    pub fn embedded_types(&self) -> Vec<ResourceType> {
        self.embedded.iter().map(|embedded| embedded.resource).collect()
    }

    /// Every affordance reachable from this representation's links.
    pub fn affordances(&self) -> impl Iterator<Item = &Affordance> {
        self.links.affordances()
    }

    fn check_declared(&self, child: ResourceType) -> Result<(), AssemblyError> {
        if self.resource.declares_embedding_of(child) {
            Ok(())
        } else {
            Err(AssemblyError::UndeclaredEmbedding {
                parent: self.resource,
                child,
            })
        }
    }
}

impl<T: Serialize> EntityModel<T> {
    /// Replaces typed content by its JSON value so heterogeneous children can be stored
    /// together.
    pub fn erase(self) -> Result<EntityModel<Value>, AssemblyError> {
        let content = serde_json::to_value(&self.content).map_err(|source| {
            AssemblyError::Content {
                resource: self.resource,
                source,
            }
        })?;

        Ok(EntityModel {
            resource: self.resource,
            content,
            links: self.links,
            embedded: self.embedded,
        })
    }
}

impl<T: Serialize> Serialize for EntityModel<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Wire<'a, T> {
            #[serde(flatten)]
            content: &'a T,
            #[serde(rename = "_embedded", skip_serializing_if = "EmbeddedMap::is_empty")]
            embedded: EmbeddedMap<'a>,
            #[serde(rename = "_links")]
            links: &'a Links,
            #[serde(rename = "_templates", skip_serializing_if = "Templates::is_empty")]
            templates: Templates<'a>,
        }

        Wire {
            content: &self.content,
            embedded: EmbeddedMap(&self.embedded),
            links: &self.links,
            templates: Templates(&self.links),
        }
        .serialize(serializer)
    }
}

struct EmbeddedMap<'a>(&'a [Embedded]);

impl EmbeddedMap<'_> {
    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for EmbeddedMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|e| (e.rel.as_str(), &e.value)))
    }
}

struct Templates<'a>(&'a Links);

impl Templates<'_> {
    fn is_empty(&self) -> bool {
        self.0.affordances().next().is_none()
    }
}

impl Serialize for Templates<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seen: Vec<&str> = Vec::new();
        let mut map = serializer.serialize_map(None)?;
        for affordance in self.0.affordances() {
            if !seen.contains(&affordance.name) {
                seen.push(affordance.name);
                map.serialize_entry(affordance.name, affordance)?;
            }
        }
        map.end()
    }
}

/// Members of a collection wrapper.
///
/// `Empty` is the typed marker for a collection without members; it is distinct from a
/// collection holding one item whose content happens to be empty.
#[derive(Debug, Clone, PartialEq)]
pub enum Members<T> {
    Empty(ResourceType),
    Items(Vec<EntityModel<T>>),
}

impl<T> Members<T> {
    pub fn items(&self) -> &[EntityModel<T>] {
        match self {
            Self::Empty(_) => &[],
            Self::Items(items) => items,
        }
    }

    pub fn is_empty_marker(&self) -> bool {
        matches!(self, Self::Empty(_))
    }
}

struct MembersMap<'a, T>(ResourceType, &'a Members<T>);

impl<T: Serialize> Serialize for MembersMap<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.0.collection_rel(), self.1.items())?;
        map.end()
    }
}

#[derive(Serialize)]
struct WrapperWire<'a, T> {
    #[serde(rename = "_embedded")]
    embedded: MembersMap<'a, T>,
    #[serde(rename = "_links")]
    links: &'a Links,
    #[serde(rename = "_templates", skip_serializing_if = "Templates::is_empty")]
    templates: Templates<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<&'a PageMetadata>,
}

/// Representation of a homogeneous, unpaged collection.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionModel<T> {
    pub resource: ResourceType,
    pub members: Members<T>,
    pub links: Links,
}

impl<T: Serialize> Serialize for CollectionModel<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WrapperWire {
            embedded: MembersMap(self.resource, &self.members),
            links: &self.links,
            templates: Templates(&self.links),
            page: None,
        }
        .serialize(serializer)
    }
}

/// Representation of one page of a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedModel<T> {
    pub resource: ResourceType,
    pub members: Members<T>,
    pub links: Links,
    pub page: PageMetadata,
}

impl<T: Serialize> Serialize for PagedModel<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WrapperWire {
            embedded: MembersMap(self.resource, &self.members),
            links: &self.links,
            templates: Templates(&self.links),
            page: Some(&self.page),
        }
        .serialize(serializer)
    }
}

/// Link-only representation, used by the API index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepresentationModel {
    #[serde(rename = "_links")]
    pub links: Links,
}
