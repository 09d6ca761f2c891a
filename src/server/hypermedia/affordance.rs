//! Capability-gated affordances and the static operation tables they are selected from.
//!
//! Each resource type declares its mutating operations once, as a const
//! [`OperationTable`]. The [`AffordanceSelector`] walks that table in declared order and
//! keeps every operation whose required capability the caller holds. Field schemas are
//! plain metadata: nothing here executes validation.

use serde::{ser::SerializeStruct, Serialize, Serializer};

use crate::server::{
    error::assembly::AssemblyError,
    hypermedia::{capability::AuthorizationOracle, link::LinkBuilder, resource::ResourceType},
};

/// Pattern published for non-blank text fields.
pub const NOT_BLANK_PATTERN: &str = r"^(?=\s*\S).*$";

/// Media type of affordance request bodies.
pub const CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Input hint rendered as the HAL-FORMS property `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    Text,
    Number,
    Email,
    Time,
    Range,
    Select,
}

impl FieldFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Email => "email",
            Self::Time => "time",
            Self::Range => "range",
            Self::Select => "select",
        }
    }
}

/// Declared constraints of one editable input field.
///
/// Nested request bodies use dotted names (`address.street`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub format: FieldFormat,
    pub required: bool,
    pub non_blank: bool,
    pub pattern: Option<&'static str>,
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub max_length: Option<usize>,
    pub options: &'static [&'static str],
}

impl FieldDescriptor {
    const fn of(name: &'static str, format: FieldFormat) -> Self {
        Self {
            name,
            format,
            required: false,
            non_blank: false,
            pattern: None,
            min: None,
            max: None,
            max_length: None,
            options: &[],
        }
    }

    pub const fn text(name: &'static str) -> Self {
        Self::of(name, FieldFormat::Text)
    }

    pub const fn number(name: &'static str) -> Self {
        Self::of(name, FieldFormat::Number)
    }

    pub const fn email(name: &'static str) -> Self {
        Self::of(name, FieldFormat::Email)
    }

    pub const fn time(name: &'static str) -> Self {
        Self::of(name, FieldFormat::Time)
    }

    pub const fn range(name: &'static str) -> Self {
        Self::of(name, FieldFormat::Range)
    }

    pub const fn select(name: &'static str, options: &'static [&'static str]) -> Self {
        let mut field = Self::of(name, FieldFormat::Select);
        field.options = options;
        field
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Required, and must contain at least one non-whitespace character.
    pub const fn non_blank(mut self) -> Self {
        self.required = true;
        self.non_blank = true;
        self
    }

    pub const fn pattern(mut self, pattern: &'static str) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub const fn min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    pub const fn max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }

    pub const fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Pattern published to clients: the explicit one, else the non-blank pattern.
    pub fn published_pattern(&self) -> Option<&'static str> {
        match (self.pattern, self.non_blank) {
            (Some(pattern), _) => Some(pattern),
            (None, true) => Some(NOT_BLANK_PATTERN),
            (None, false) => None,
        }
    }
}

impl Serialize for FieldDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Inline {
            inline: &'static [&'static str],
        }

        let mut state = serializer.serialize_struct("Property", 8)?;
        state.serialize_field("name", self.name)?;
        state.serialize_field("type", self.format.as_str())?;
        if self.required {
            state.serialize_field("required", &true)?;
        }
        if let Some(regex) = self.published_pattern() {
            state.serialize_field("regex", regex)?;
        }
        if let Some(min) = self.min {
            state.serialize_field("min", &min)?;
        }
        if let Some(max) = self.max {
            state.serialize_field("max", &max)?;
        }
        if let Some(max_length) = self.max_length {
            state.serialize_field("maxLength", &max_length)?;
        }
        if !self.options.is_empty() {
            state.serialize_field(
                "options",
                &Inline {
                    inline: self.options,
                },
            )?;
        }
        state.end()
    }
}

/// Whether an operation acts on one instance or on the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffordanceScope {
    Item,
    Collection,
}

/// Route an operation targets, resolved against the resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// `{path}/{id}`
    Item,
    /// `{path}`
    Collection,
    /// `{path}/{id}/{segment}`
    ItemAction(&'static str),
}

/// One mutating operation as declared in a resource's operation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationDescriptor {
    pub name: &'static str,
    pub method: HttpMethod,
    pub capability: &'static str,
    pub scope: AffordanceScope,
    pub target: Target,
    pub fields: &'static [FieldDescriptor],
}

/// Ordered operations of one resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationTable {
    pub resource: ResourceType,
    pub operations: &'static [OperationDescriptor],
}

impl OperationTable {
    pub fn find(&self, name: &str) -> Option<&OperationDescriptor> {
        self.operations.iter().find(|op| op.name == name)
    }
}

/// An operation the caller may invoke, resolved to a concrete target URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affordance {
    pub name: &'static str,
    pub method: HttpMethod,
    pub target: String,
    pub fields: &'static [FieldDescriptor],
}

impl Affordance {
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }
}

impl Serialize for Affordance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Template", 4)?;
        state.serialize_field("method", self.method.as_str())?;
        state.serialize_field("target", &self.target)?;
        state.serialize_field("contentType", CONTENT_TYPE)?;
        if !self.fields.is_empty() {
            state.serialize_field("properties", self.fields)?;
        }
        state.end()
    }
}

/// Selects the affordances a caller may see for one instance or collection.
#[derive(Clone, Copy)]
pub struct AffordanceSelector<'a> {
    links: &'a LinkBuilder,
    oracle: &'a dyn AuthorizationOracle,
}

impl<'a> AffordanceSelector<'a> {
    pub fn new(links: &'a LinkBuilder, oracle: &'a dyn AuthorizationOracle) -> Self {
        Self { links, oracle }
    }

    /// Returns the affordances of `scope` granted to the caller, in declared order.
    ///
    /// A caller holding no matching capability receives an empty list.
    ///
    /// # Arguments
    /// - `table` - Operation table of the resource type
    /// - `scope` - Item-level or collection-level operations
    /// - `id` - Identifier of the instance, required for item-level targets
    ///
    /// # Returns
    /// - `Ok(Vec<Affordance>)` - Granted affordances, possibly empty
    /// - `Err(AssemblyError::InvalidResourceReference)` - An item target needs an id and
    ///   none was given
    pub fn select(
        &self,
        table: &OperationTable,
        scope: AffordanceScope,
        id: Option<i32>,
    ) -> Result<Vec<Affordance>, AssemblyError> {
        table
            .operations
            .iter()
            .filter(|op| op.scope == scope && self.oracle.has_capability(op.capability))
            .map(|op| self.resolve(table, op, id))
            .collect()
    }

    /// Returns the single operation `name` of `table` when the caller holds its
    /// capability, for wrappers that reuse another resource's operation.
    ///
    /// # Returns
    /// - `Ok(Vec<Affordance>)` - The granted operation, or an empty list
    /// - `Err(AssemblyError::InvalidResourceReference)` - The operation targets an item
    ///   and `id` is absent
    pub fn select_named(
        &self,
        table: &OperationTable,
        name: &str,
        id: Option<i32>,
    ) -> Result<Vec<Affordance>, AssemblyError> {
        table
            .find(name)
            .filter(|op| self.oracle.has_capability(op.capability))
            .map(|op| self.resolve(table, op, id))
            .into_iter()
            .collect()
    }

    fn resolve(
        &self,
        table: &OperationTable,
        op: &OperationDescriptor,
        id: Option<i32>,
    ) -> Result<Affordance, AssemblyError> {
        let path = match op.target {
            Target::Collection => table.resource.path().to_string(),
            Target::Item => LinkBuilder::item_path(table.resource, id)?,
            Target::ItemAction(segment) => {
                format!("{}/{}", LinkBuilder::item_path(table.resource, id)?, segment)
            }
        };

        Ok(Affordance {
            name: op.name,
            method: op.method,
            target: self.links.href(&path),
            fields: op.fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::hypermedia::capability::{CapabilitySet, ADMIN};

    const NAME: &[FieldDescriptor] = &[FieldDescriptor::text("name").non_blank().max_length(50)];

    const TEAM_FIELDS: &[FieldDescriptor] = &[
        FieldDescriptor::text("name").non_blank().max_length(50),
        FieldDescriptor::number("teamNumber").required().min(1),
        FieldDescriptor::select("gender", &["F", "M"]).required(),
    ];

    const TABLE: OperationTable = OperationTable {
        resource: ResourceType::Team,
        operations: &[
            OperationDescriptor {
                name: "createThing",
                method: HttpMethod::Post,
                capability: ADMIN,
                scope: AffordanceScope::Collection,
                target: Target::Collection,
                fields: NAME,
            },
            OperationDescriptor {
                name: "deleteThing",
                method: HttpMethod::Delete,
                capability: ADMIN,
                scope: AffordanceScope::Item,
                target: Target::Item,
                fields: &[],
            },
            OperationDescriptor {
                name: "updateThing",
                method: HttpMethod::Put,
                capability: ADMIN,
                scope: AffordanceScope::Item,
                target: Target::Item,
                fields: NAME,
            },
            OperationDescriptor {
                name: "renameThing",
                method: HttpMethod::Post,
                capability: "COACH",
                scope: AffordanceScope::Item,
                target: Target::ItemAction("name"),
                fields: NAME,
            },
        ],
    };

    fn names(affordances: &[Affordance]) -> Vec<&'static str> {
        affordances.iter().map(|a| a.name).collect()
    }

    #[test]
    fn selects_item_operations_in_declared_order() -> Result<(), AssemblyError> {
        let links = LinkBuilder::new("");
        let caller = CapabilitySet::admin().with("COACH");
        let selector = AffordanceSelector::new(&links, &caller);

        let affordances = selector.select(&TABLE, AffordanceScope::Item, Some(3))?;

        assert_eq!(names(&affordances), vec!["deleteThing", "updateThing", "renameThing"]);
        assert_eq!(affordances[0].target, "/api/teams/3");
        assert_eq!(affordances[2].target, "/api/teams/3/name");

        Ok(())
    }

    /// Expected: only operations whose capability is held are returned
    #[test]
    fn omits_operations_without_capability() -> Result<(), AssemblyError> {
        let links = LinkBuilder::new("");
        let caller = CapabilitySet::anonymous().with("COACH");
        let selector = AffordanceSelector::new(&links, &caller);

        let affordances = selector.select(&TABLE, AffordanceScope::Item, Some(3))?;

        assert_eq!(names(&affordances), vec!["renameThing"]);

        Ok(())
    }

    /// Expected: Ok with an empty list, never an error
    #[test]
    fn anonymous_caller_gets_no_affordances() -> Result<(), AssemblyError> {
        let links = LinkBuilder::new("");
        let caller = CapabilitySet::anonymous();
        let selector = AffordanceSelector::new(&links, &caller);

        assert!(selector.select(&TABLE, AffordanceScope::Item, Some(3))?.is_empty());
        assert!(selector.select(&TABLE, AffordanceScope::Collection, None)?.is_empty());

        Ok(())
    }

    #[test]
    fn collection_scope_targets_collection_route() -> Result<(), AssemblyError> {
        let links = LinkBuilder::new("http://club.test");
        let caller = CapabilitySet::admin();
        let selector = AffordanceSelector::new(&links, &caller);

        let affordances = selector.select(&TABLE, AffordanceScope::Collection, None)?;

        assert_eq!(names(&affordances), vec!["createThing"]);
        assert_eq!(affordances[0].target, "http://club.test/api/teams");
        assert_eq!(affordances[0].method, HttpMethod::Post);

        Ok(())
    }

    #[test]
    fn selects_single_named_operation() -> Result<(), AssemblyError> {
        let links = LinkBuilder::new("");
        let admin = CapabilitySet::admin().with("COACH");
        let anonymous = CapabilitySet::anonymous();

        let granted =
            AffordanceSelector::new(&links, &admin).select_named(&TABLE, "renameThing", Some(4))?;
        let denied = AffordanceSelector::new(&links, &anonymous)
            .select_named(&TABLE, "renameThing", Some(4))?;
        let unknown =
            AffordanceSelector::new(&links, &admin).select_named(&TABLE, "missing", Some(4))?;

        assert_eq!(names(&granted), vec!["renameThing"]);
        assert_eq!(granted[0].target, "/api/teams/4/name");
        assert!(denied.is_empty());
        assert!(unknown.is_empty());

        Ok(())
    }

    #[test]
    fn item_scope_without_id_fails() {
        let links = LinkBuilder::new("");
        let caller = CapabilitySet::admin();
        let selector = AffordanceSelector::new(&links, &caller);

        let result = selector.select(&TABLE, AffordanceScope::Item, None);

        assert!(matches!(
            result,
            Err(AssemblyError::InvalidResourceReference { .. })
        ));
    }

    #[test]
    fn serializes_hal_forms_template() {
        let affordance = Affordance {
            name: "updateThing",
            method: HttpMethod::Put,
            target: "/api/teams/1".to_string(),
            fields: TEAM_FIELDS,
        };

        let json = serde_json::to_value(&affordance).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "method": "PUT",
                "target": "/api/teams/1",
                "contentType": "application/json",
                "properties": [
                    {
                        "name": "name",
                        "type": "text",
                        "required": true,
                        "regex": NOT_BLANK_PATTERN,
                        "maxLength": 50
                    },
                    { "name": "teamNumber", "type": "number", "required": true, "min": 1 },
                    {
                        "name": "gender",
                        "type": "select",
                        "required": true,
                        "options": { "inline": ["F", "M"] }
                    }
                ]
            })
        );
    }

    #[test]
    fn explicit_pattern_wins_over_non_blank() {
        let field = FieldDescriptor::text("postalCode").non_blank().pattern(r"\d{5}");

        assert_eq!(field.published_pattern(), Some(r"\d{5}"));
        assert_eq!(
            FieldDescriptor::text("name").non_blank().published_pattern(),
            Some(NOT_BLANK_PATTERN)
        );
        assert_eq!(FieldDescriptor::email("email").published_pattern(), None);
    }
}
