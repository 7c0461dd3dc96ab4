use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

/// Property bag attached to entities and links.
///
/// Keys are free-form; values are arbitrary JSON (scalar, sequence, or
/// nested mapping). A BTreeMap keeps iteration deterministic.
pub type Properties = BTreeMap<String, Value>;

/// Category label assigned to entities whose input record carries none.
pub const UNKNOWN_ENTITY_KIND: &str = "Unknown";

/// Relation label assigned to links whose input record carries none.
pub const DEFAULT_RELATION: &str = "related";

/// A canonical graph vertex: an observed artifact such as a domain, email,
/// username, or module finding.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Unique id within the graph. Never empty once inside a [`Graph`].
    pub id: String,
    /// Free-form category label ("Domain", "Email", "module", ...).
    pub kind: String,
    /// Human-readable display value.
    pub value: String,
    pub properties: Properties,
}

impl Entity {
    pub fn new(
        id: impl Into<String>,
        kind: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            value: value.into(),
            properties: Properties::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }
}

/// A canonical graph edge between two entity ids, carrying a relation type.
///
/// Source/target are stored verbatim; they may be empty or reference ids
/// that never materialized as entities. Exporters decide what to do with
/// such dangling links, the model keeps them.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub source: String,
    pub target: String,
    /// Relation label ("resolves_to", "related", ...).
    pub relation: String,
    pub properties: Properties,
}

impl Link {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        relation: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            relation: relation.into(),
            properties: Properties::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    /// True when both endpoint fields are non-empty. Says nothing about
    /// whether the referenced entities exist; see [`Graph::resolves`].
    pub fn has_endpoints(&self) -> bool {
        !self.source.is_empty() && !self.target.is_empty()
    }
}

/// The canonical entity/link graph produced by one normalization pass.
///
/// Built once by a graph builder, then handed to exporters as a shared
/// read-only view; nothing mutates it afterwards. An id → position index
/// gives O(1) resolution checks so exporters can exclude dangling links
/// without the model having validated anything eagerly.
#[derive(Debug, Default)]
pub struct Graph {
    entities: Vec<Entity>,
    links: Vec<Link>,
    id_index: HashMap<String, usize>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity to the graph.
    ///
    /// Entities with an empty id are invalid and refused. A duplicate id
    /// is also refused, keeping the first occurrence; ids must be unique
    /// within a graph. Returns whether the entity was added.
    pub fn push_entity(&mut self, entity: Entity) -> bool {
        if entity.id.is_empty() || self.id_index.contains_key(&entity.id) {
            return false;
        }
        self.id_index.insert(entity.id.clone(), self.entities.len());
        self.entities.push(entity);
        true
    }

    /// Add a link to the graph. Dangling or endpoint-less links are kept;
    /// referential validity is an export-time concern.
    pub fn push_link(&mut self, link: Link) {
        self.links.push(link);
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.links.is_empty()
    }

    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.id_index.get(id).map(|&pos| &self.entities[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.id_index.contains_key(id)
    }

    /// True when both of the link's endpoints reference existing entities.
    pub fn resolves(&self, link: &Link) -> bool {
        self.contains(&link.source) && self.contains(&link.target)
    }
}
