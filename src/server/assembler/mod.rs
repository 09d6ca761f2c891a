//! Resource assemblers turning domain models into hypermedia representations.
//!
//! Each resource type has one assembler implementing [`Assembler`]. The single-item
//! entry point `to_model` is type-specific; the collection and page entry points are
//! provided by the trait and map every member through the same `to_model`, so per-item
//! content, links and affordances are identical whichever wrapper is used.
//!
//! Assemblers are cheap per-request structs borrowing an [`AssemblyContext`], which
//! carries the link builder and the caller's capabilities. Child representations are
//! produced by constructing the child's assembler on the same context.

pub mod coach;
pub mod hall;
pub mod role_coach;
pub mod team;
pub mod training_session;

#[cfg(test)]
mod test;

use serde::Serialize;

use crate::server::{
    error::assembly::AssemblyError,
    hypermedia::{
        affordance::{Affordance, AffordanceScope, AffordanceSelector, OperationTable},
        capability::AuthorizationOracle,
        link::{Link, LinkBuilder, Links, SELF_REL},
        page::Page,
        representation::{CollectionModel, EntityModel, Members, PagedModel},
        resource::ResourceType,
    },
};

/// Inputs shared by every assembler during one request.
#[derive(Clone, Copy)]
pub struct AssemblyContext<'a> {
    pub links: &'a LinkBuilder,
    pub oracle: &'a dyn AuthorizationOracle,
}

impl<'a> AssemblyContext<'a> {
    pub fn new(links: &'a LinkBuilder, oracle: &'a dyn AuthorizationOracle) -> Self {
        Self { links, oracle }
    }

    pub fn selector(&self) -> AffordanceSelector<'a> {
        AffordanceSelector::new(self.links, self.oracle)
    }

    /// `self` link of an instance carrying its item-level affordances.
    pub fn self_link(&self, table: &OperationTable, id: Option<i32>) -> Result<Link, AssemblyError> {
        let link = self.links.item_link(table.resource, id)?;
        let affordances = self.selector().select(table, AffordanceScope::Item, id)?;
        Ok(link.with_affordances(affordances))
    }

    /// Collection relation link carrying the collection-level (create) affordances.
    pub fn collection_link(&self, table: &OperationTable) -> Result<Link, AssemblyError> {
        let affordances = self.selector().select(table, AffordanceScope::Collection, None)?;
        Ok(self
            .links
            .collection_link(table.resource)
            .with_affordances(affordances))
    }

    /// Link to another instance under a custom relation, without affordances.
    pub fn related_link(
        &self,
        rel: &str,
        resource: ResourceType,
        id: Option<i32>,
    ) -> Result<Link, AssemblyError> {
        Ok(self.links.item_link(resource, id)?.with_rel(rel))
    }
}

pub trait Assembler {
    /// Domain model read by the assembler.
    type Domain;
    /// Translated content of one representation.
    type Dto: Serialize;

    /// Mutating operations of the resource type, in declared order.
    const OPERATIONS: &'static OperationTable;

    fn context(&self) -> AssemblyContext<'_>;

    /// Assembles one instance: content, `self` and collection links, relation links
    /// and declared embedded children.
    fn to_model(&self, instance: &Self::Domain) -> Result<EntityModel<Self::Dto>, AssemblyError>;

    /// Route of the collection the wrappers describe.
    fn collection_path(&self) -> String {
        Self::OPERATIONS.resource.path().to_string()
    }

    /// Whether the wrapper route honours a `sort` parameter.
    fn sortable(&self) -> bool {
        true
    }

    /// Affordances carried by the wrapper's `self` link: the create operations of the
    /// resource type unless the wrapper is scoped to a parent.
    fn wrapper_affordances(&self) -> Result<Vec<Affordance>, AssemblyError> {
        self.context()
            .selector()
            .select(Self::OPERATIONS, AffordanceScope::Collection, None)
    }

    /// Members of a wrapper, or the typed empty marker when there are none.
    fn to_members(
        &self,
        instances: &[Self::Domain],
    ) -> Result<Members<Self::Dto>, AssemblyError> {
        if instances.is_empty() {
            return Ok(Members::Empty(Self::OPERATIONS.resource));
        }

        instances
            .iter()
            .map(|instance| self.to_model(instance))
            .collect::<Result<Vec<_>, _>>()
            .map(Members::Items)
    }

    /// Assembles an unpaged collection.
    ///
    /// The wrapper's `self` link points at the full collection and carries the create
    /// affordances; a templated `page` link leads to the paged view.
    fn to_collection_model(
        &self,
        instances: &[Self::Domain],
    ) -> Result<CollectionModel<Self::Dto>, AssemblyError> {
        let ctx = self.context();
        let resource = Self::OPERATIONS.resource;
        let create = self.wrapper_affordances()?;

        let links = Links::from(vec![
            ctx.links
                .all_items_link(resource)
                .with_rel(SELF_REL)
                .with_affordances(create),
            ctx.links
                .templated_page_link(&self.collection_path(), self.sortable()),
        ]);

        tracing::debug!(
            "Assembled {} collection with {} members",
            resource,
            instances.len()
        );

        Ok(CollectionModel {
            resource,
            members: self.to_members(instances)?,
            links,
        })
    }

    /// Assembles one page, with metadata copied verbatim from `page`.
    ///
    /// Links: `self` for this page (with create affordances), `first`/`prev`/`next`/
    /// `last` where they exist, the templated `page` link and the full-collection link.
    /// Page links repeat the sort the page was fetched with.
    fn to_paged_model(
        &self,
        page: &Page<Self::Domain>,
    ) -> Result<PagedModel<Self::Dto>, AssemblyError> {
        let ctx = self.context();
        let resource = Self::OPERATIONS.resource;
        let path = self.collection_path();
        let size = page.size();
        let sort = page.sort();
        let create = self.wrapper_affordances()?;
        let page_link =
            |rel: &str, number: u64| ctx.links.page_link(&path, rel, number, size, sort);

        let mut links = Links::new();
        links.push(page_link(SELF_REL, page.number()).with_affordances(create));
        let last = page.total_pages().checked_sub(1);
        if last.is_some() {
            links.push(page_link("first", 0));
        }
        if page.has_previous() {
            links.push(page_link("prev", page.number().saturating_sub(1)));
        }
        if page.has_next() {
            links.push(page_link("next", page.number().saturating_add(1)));
        }
        if let Some(last) = last {
            links.push(page_link("last", last));
        }
        links.push(ctx.links.templated_page_link(&path, self.sortable()));
        links.push(ctx.links.all_items_link(resource));

        tracing::debug!(
            "Assembled {} page {} ({} of {} elements)",
            resource,
            page.number(),
            page.content().len(),
            page.total_elements()
        );

        Ok(PagedModel {
            resource,
            members: self.to_members(page.content())?,
            links,
            page: page.metadata(),
        })
    }
}
