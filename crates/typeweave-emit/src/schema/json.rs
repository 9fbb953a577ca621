//! JSON Schema (draft 2020-12) rendering.

use std::collections::HashSet;

use serde_json::{Map, Value, json};
use typeweave_core::{Error, Literal, Result};

use super::graph::{LazyId, Schema, SchemaGraph, SchemaId};

const TARGET: &str = "JSON Schema";
const DIALECT: &str = "https://json-schema.org/draft/2020-12/schema";

impl SchemaGraph {
    /// Render `root` as a standalone JSON Schema document.
    ///
    /// Every lazy handle becomes a `$ref` into `$defs`, keyed by the lazy slot's
    /// name. Schemas with no JSON counterpart (`undefined`, `date`, `map`, ...)
    /// are an [`Error::UnsupportedFeature`].
    pub fn to_json_schema(&self, root: SchemaId) -> Result<Value> {
        let mut renderer = JsonRenderer {
            graph: self,
            seen: HashSet::new(),
            pending: Vec::new(),
        };
        let body = renderer.render(root)?;

        let mut defs = Map::new();
        let mut next = 0;
        while let Some(&lazy) = renderer.pending.get(next) {
            next += 1;
            let target = self.lazy_target(lazy)?;
            let rendered = renderer.render(target)?;
            defs.insert(self.lazy_name(lazy).to_string(), rendered);
        }

        let mut document = Map::new();
        document.insert("$schema".to_string(), Value::from(DIALECT));
        if let Value::Object(fields) = body {
            document.extend(fields);
        }
        if !defs.is_empty() {
            document.insert("$defs".to_string(), Value::Object(defs));
        }
        Ok(Value::Object(document))
    }
}

struct JsonRenderer<'g> {
    graph: &'g SchemaGraph,
    seen: HashSet<LazyId>,
    /// Lazies in first-referenced order.
    pending: Vec<LazyId>,
}

impl JsonRenderer<'_> {
    fn render(&mut self, id: SchemaId) -> Result<Value> {
        let graph = self.graph;
        let schema = graph.get(id);
        Ok(match schema {
            Schema::String => json!({ "type": "string" }),
            Schema::Number => json!({ "type": "number" }),
            Schema::Boolean => json!({ "type": "boolean" }),
            Schema::Null => json!({ "type": "null" }),
            Schema::Any | Schema::Unknown => json!({}),
            Schema::Never => json!({ "not": {} }),
            Schema::Undefined
            | Schema::Void
            | Schema::BigInt
            | Schema::Date
            | Schema::RegExp
            | Schema::Map { .. }
            | Schema::Function { .. } => {
                return Err(Error::unsupported(TARGET, schema.kind_name()));
            }
            Schema::Literal(literal) => json!({ "const": literal_value(literal)? }),
            Schema::Array(element) => json!({ "type": "array", "items": self.render(*element)? }),
            Schema::Set(element) => json!({
                "type": "array",
                "items": self.render(*element)?,
                "uniqueItems": true
            }),
            Schema::Record { key, value } => {
                let mut out = Map::new();
                out.insert("type".to_string(), Value::from("object"));
                if !matches!(graph.resolve(*key)?, Schema::String | Schema::Number) {
                    out.insert("propertyNames".to_string(), self.render(*key)?);
                }
                out.insert("additionalProperties".to_string(), self.render(*value)?);
                Value::Object(out)
            }
            Schema::Object(properties) => {
                let mut rendered = Map::new();
                let mut required = Vec::new();
                for (name, &property) in properties {
                    let (inner, optional) = self.unwrap_optional(property);
                    rendered.insert(name.clone(), self.render(inner)?);
                    if !optional {
                        required.push(Value::from(name.as_str()));
                    }
                }
                let mut out = Map::new();
                out.insert("type".to_string(), Value::from("object"));
                out.insert("properties".to_string(), Value::Object(rendered));
                if !required.is_empty() {
                    out.insert("required".to_string(), Value::Array(required));
                }
                Value::Object(out)
            }
            // Object properties and tuple slots unwrap `Optional` themselves.
            Schema::Optional(_) => return Err(Error::unsupported(TARGET, "undefined")),
            Schema::Union(members) => json!({ "anyOf": self.render_all(members)? }),
            Schema::Intersection(members) => json!({ "allOf": self.render_all(members)? }),
            Schema::Tuple(elements) => {
                let mut items = Vec::with_capacity(elements.len());
                let mut min_items = 0;
                for (i, &element) in elements.iter().enumerate() {
                    let (inner, optional) = self.unwrap_optional(element);
                    items.push(self.render(inner)?);
                    if !optional {
                        min_items = i + 1;
                    }
                }
                json!({
                    "type": "array",
                    "prefixItems": items,
                    "items": false,
                    "minItems": min_items
                })
            }
            Schema::Lazy(lazy) => {
                if self.seen.insert(*lazy) {
                    self.pending.push(*lazy);
                }
                json!({ "$ref": format!("#/$defs/{}", pointer_escape(graph.lazy_name(*lazy))) })
            }
        })
    }

    fn render_all(&mut self, ids: &[SchemaId]) -> Result<Vec<Value>> {
        let mut out = Vec::with_capacity(ids.len());
        for &id in ids {
            out.push(self.render(id)?);
        }
        Ok(out)
    }

    fn unwrap_optional(&self, id: SchemaId) -> (SchemaId, bool) {
        match self.graph.get(id) {
            Schema::Optional(inner) => (*inner, true),
            _ => (id, false),
        }
    }
}

fn literal_value(literal: &Literal) -> Result<Value> {
    Ok(match literal {
        Literal::String(s) => Value::from(s.as_str()),
        Literal::Number(n) => serde_json::Number::from_f64(*n)
            .map(Value::Number)
            .ok_or_else(|| Error::unsupported(TARGET, "non-finite number literal"))?,
        Literal::Boolean(b) => Value::from(*b),
        Literal::Null => Value::Null,
        Literal::BigInt(_) => return Err(Error::unsupported(TARGET, literal.kind_name())),
    })
}

/// Escape a `$defs` key for use in a JSON pointer.
fn pointer_escape(name: &str) -> String {
    name.replace('~', "~0").replace('/', "~1")
}
