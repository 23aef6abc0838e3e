//! Response-schema descriptor.
//!
//! Models the OpenAPI subset accepted by the generation service for
//! structured output. Properties keep their declaration order, which is also
//! sent as `propertyOrdering` so the model emits fields in a stable order.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// Type of a schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaType {
    /// UTF-8 string.
    String,
    /// Ordered list of `items`.
    Array,
    /// Object with named `properties`.
    Object,
}

impl SchemaType {
    /// Returns the wire name of the type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "STRING",
            Self::Array => "ARRAY",
            Self::Object => "OBJECT",
        }
    }
}

impl std::fmt::Display for SchemaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named property of an object schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    name: String,
    schema: Schema,
}

impl Property {
    /// Returns the property name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the property schema.
    #[must_use]
    pub const fn schema(&self) -> &Schema {
        &self.schema
    }
}

/// A schema node.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    schema_type: SchemaType,
    properties: Vec<Property>,
    required: Vec<String>,
    items: Option<Box<Schema>>,
}

impl Schema {
    const fn leaf(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            properties: Vec::new(),
            required: Vec::new(),
            items: None,
        }
    }

    /// Creates a string schema.
    #[must_use]
    pub const fn string() -> Self {
        Self::leaf(SchemaType::String)
    }

    /// Creates an array schema whose elements follow `items`.
    #[must_use]
    pub fn array(items: Self) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::leaf(SchemaType::Array)
        }
    }

    /// Creates an object schema with the given properties, in order.
    #[must_use]
    pub fn object<N, I>(properties: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Self)>,
    {
        Self {
            properties: properties
                .into_iter()
                .map(|(name, schema)| Property {
                    name: name.into(),
                    schema,
                })
                .collect(),
            ..Self::leaf(SchemaType::Object)
        }
    }

    /// Marks the named properties as required.
    #[must_use]
    pub fn with_required<N, I>(mut self, names: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = N>,
    {
        self.required = names.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the node type.
    #[must_use]
    pub const fn schema_type(&self) -> SchemaType {
        self.schema_type
    }

    /// Returns the object properties in declaration order.
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Looks up a property by name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Self> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.schema)
    }

    /// Returns the names of the required properties.
    #[must_use]
    pub fn required(&self) -> &[String] {
        &self.required
    }

    /// Returns the element schema of an array node.
    #[must_use]
    pub fn items(&self) -> Option<&Self> {
        self.items.as_deref()
    }
}

struct Properties<'a>(&'a [Property]);

impl Serialize for Properties<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for property in self.0 {
            map.serialize_entry(&property.name, &property.schema)?;
        }
        map.end()
    }
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", self.schema_type.as_str())?;
        if !self.properties.is_empty() {
            map.serialize_entry("properties", &Properties(&self.properties))?;
            let ordering: Vec<&str> = self.properties.iter().map(|p| p.name.as_str()).collect();
            map.serialize_entry("propertyOrdering", &ordering)?;
        }
        if !self.required.is_empty() {
            map.serialize_entry("required", &self.required)?;
        }
        if let Some(items) = &self.items {
            map.serialize_entry("items", items)?;
        }
        map.end()
    }
}
