//! JSON/JSONC network description loader.

use jsonc_parser::ParseOptions;
use rulegraph_ast::{
    AddFactNode, AlphaNode, CompareNode, Comparator, ConditionNode, ConstantNode,
    DelegateProductionNode, EachNode, EqualNode, ExistsNode, JoinNode, LeftJoinNode, LiteralValue,
    NetworkArena, NodeKind, NotNullNode, OuterJoinNode, PropertyNode, RuntimeNode, TypeToken,
    UnknownNode, ValueNode, WidenTypeNode,
};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{LoadError, NetworkLoader};

/// Deepest `{`/`[` nesting accepted in a document.
pub const MAX_NESTING: usize = 512;

/// One node of a network description document.
#[derive(Debug, Deserialize)]
struct NodeDescription {
    kind: String,
    #[serde(default)]
    types: Vec<TokenDescription>,
    #[serde(default)]
    property: Option<String>,
    #[serde(default)]
    comparator: Option<String>,
    #[serde(default)]
    value: serde_json::Value,
    #[serde(default)]
    children: Vec<NodeDescription>,
}

/// A type token: a name, or an array of tokens for a tuple.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TokenDescription {
    Named(String),
    Tuple(Vec<TokenDescription>),
}

/// Loads networks from JSON documents. Comments and trailing commas (JSONC)
/// are accepted.
///
/// ```rust
/// use rulegraph_ast::NetworkArena;
/// use rulegraph_loader::{JsonNetworkLoader, NetworkLoader};
///
/// let arena = NetworkArena::new();
/// let root = JsonNetworkLoader::new()
///     .load(&arena, r#"{ "kind": "Alpha", "types": ["int"] }"#)
///     .unwrap();
/// assert_eq!(root.name(), "Alpha");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonNetworkLoader;

impl JsonNetworkLoader {
    pub fn new() -> Self {
        Self
    }
}

impl NetworkLoader for JsonNetworkLoader {
    fn name(&self) -> &str {
        "json"
    }

    fn extensions(&self) -> &[&str] {
        &["json", "jsonc"]
    }

    fn load<'a>(
        &self,
        arena: &'a NetworkArena,
        source: &str,
    ) -> Result<RuntimeNode<'a>, LoadError> {
        if exceeds_nesting(source, MAX_NESTING) {
            return Err(LoadError::invalid_document(format!(
                "document is nested deeper than {MAX_NESTING} levels"
            )));
        }

        let value = jsonc_parser::parse_to_serde_value(source, &ParseOptions::default())
            .map_err(|e| LoadError::invalid_document(e.to_string()))?
            .ok_or(LoadError::EmptyDocument)?;

        let description: NodeDescription = serde_json::from_value(value)
            .map_err(|e| LoadError::invalid_document(e.to_string()))?;

        let root = NodeBuilder { arena }.build(&description, "$")?;
        debug!(
            loader = self.name(),
            nodes = root.node_count(),
            "loaded network"
        );
        Ok(root)
    }
}

/// Returns true if brackets outside strings and comments nest deeper than
/// `limit`.
fn exceeds_nesting(source: &str, limit: usize) -> bool {
    let mut depth = 0usize;
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' | '\'' => {
                while let Some(inner) = chars.next() {
                    match inner {
                        '\\' => {
                            chars.next();
                        }
                        _ if inner == c => break,
                        _ => {}
                    }
                }
            }
            '/' if chars.peek() == Some(&'/') => {
                for inner in chars.by_ref() {
                    if inner == '\n' {
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut previous = None;
                for inner in chars.by_ref() {
                    if previous == Some('*') && inner == '/' {
                        break;
                    }
                    previous = Some(inner);
                }
            }
            '{' | '[' => {
                depth += 1;
                if depth > limit {
                    return true;
                }
            }
            '}' | ']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    false
}

/// Lowercases a kind name, drops `_`, `-` and spaces, and strips a trailing
/// `Node`.
fn normalize_kind(kind: &str) -> String {
    let compact: String = kind
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect();

    match compact.strip_suffix("node") {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => compact,
    }
}

struct NodeBuilder<'a> {
    arena: &'a NetworkArena,
}

impl<'a> NodeBuilder<'a> {
    fn build(&self, description: &NodeDescription, path: &str) -> Result<RuntimeNode<'a>, LoadError> {
        let mut children = Vec::with_capacity(description.children.len());
        for (index, child) in description.children.iter().enumerate() {
            children.push(self.build(child, &format!("{path}.children[{index}]"))?);
        }

        let kind = self.build_kind(description, path)?;
        Ok(RuntimeNode::new_parent(
            kind,
            self.arena.alloc_slice_copy(&children),
        ))
    }

    fn build_kind(
        &self,
        description: &NodeDescription,
        path: &str,
    ) -> Result<NodeKind<'a>, LoadError> {
        let kind = match normalize_kind(&description.kind).as_str() {
            "rulesengine" | "engine" | "root" => {
                let [] = self.tokens::<0>("RulesEngine", description, path)?;
                NodeKind::RulesEngine
            }
            "join" => {
                let [fact] = self.tokens::<1>("Join", description, path)?;
                NodeKind::Join(JoinNode { fact })
            }
            "leftjoin" => {
                let [input, output] = self.tokens::<2>("LeftJoin", description, path)?;
                NodeKind::LeftJoin(LeftJoinNode { input, output })
            }
            "outerjoin" => {
                let [left, right] = self.tokens::<2>("OuterJoin", description, path)?;
                NodeKind::OuterJoin(OuterJoinNode::new(self.arena, left, right))
            }
            "alpha" | "filter" => {
                let [fact] = self.tokens::<1>("Alpha", description, path)?;
                NodeKind::Alpha(AlphaNode { fact })
            }
            "widentype" | "widen" | "convert" => {
                let [input, output] = self.tokens::<2>("WidenType", description, path)?;
                NodeKind::WidenType(WidenTypeNode { input, output })
            }
            "delegateproduction" | "delegate" | "production" => {
                let [fact] = self.tokens::<1>("DelegateProduction", description, path)?;
                NodeKind::DelegateProduction(DelegateProductionNode { fact })
            }
            "addfact" | "addfactproduction" => {
                let [source, fact] = self.tokens::<2>("AddFact", description, path)?;
                NodeKind::AddFact(AddFactNode { source, fact })
            }
            "property" => {
                let [source, property, value] = self.tokens::<3>("Property", description, path)?;
                let name = description
                    .property
                    .as_deref()
                    .ok_or_else(|| LoadError::missing_attribute("Property", path, "property"))?;
                NodeKind::Property(PropertyNode {
                    source,
                    property,
                    value,
                    name: self.arena.alloc_str(name),
                })
            }
            "constant" => {
                let [fact] = self.tokens::<1>("Constant", description, path)?;
                NodeKind::Constant(ConstantNode { fact })
            }
            "condition" => {
                let [fact] = self.tokens::<1>("Condition", description, path)?;
                NodeKind::Condition(ConditionNode { fact })
            }
            "equal" | "equality" => {
                let [source, property] = self.tokens::<2>("Equal", description, path)?;
                NodeKind::Equal(EqualNode { source, property })
            }
            "value" => {
                let [source, property] = self.tokens::<2>("Value", description, path)?;
                let value = self.literal("Value", description, path)?;
                NodeKind::Value(ValueNode {
                    source,
                    property,
                    value,
                })
            }
            "compare" | "comparison" => {
                let [source, property] = self.tokens::<2>("Compare", description, path)?;
                let symbol = description
                    .comparator
                    .as_deref()
                    .ok_or_else(|| LoadError::missing_attribute("Compare", path, "comparator"))?;
                let comparator = symbol.parse::<Comparator>().map_err(|e| {
                    LoadError::invalid_attribute("Compare", path, "comparator", e.to_string())
                })?;
                let value = self.literal("Compare", description, path)?;
                NodeKind::Compare(CompareNode {
                    source,
                    property,
                    comparator,
                    value,
                })
            }
            "notnull" => {
                let [source, property] = self.tokens::<2>("NotNull", description, path)?;
                NodeKind::NotNull(NotNullNode { source, property })
            }
            "exists" => {
                let [source, property] = self.tokens::<2>("Exists", description, path)?;
                NodeKind::Exists(ExistsNode { source, property })
            }
            "each" => {
                let [source, property, element] = self.tokens::<3>("Each", description, path)?;
                NodeKind::Each(EachNode {
                    source,
                    property,
                    element,
                })
            }
            _ => {
                warn!(kind = %description.kind, path, "unknown node kind");
                let types: Vec<TypeToken<'a>> =
                    description.types.iter().map(|t| self.token(t)).collect();
                NodeKind::Unknown(UnknownNode {
                    name: self.arena.alloc_str(&description.kind),
                    types: self.arena.alloc_slice_copy(&types),
                })
            }
        };
        Ok(kind)
    }

    fn tokens<const N: usize>(
        &self,
        kind: &'static str,
        description: &NodeDescription,
        path: &str,
    ) -> Result<[TypeToken<'a>; N], LoadError> {
        let found = description.types.len();
        let tokens: Vec<TypeToken<'a>> = description.types.iter().map(|t| self.token(t)).collect();
        tokens
            .try_into()
            .map_err(|_| LoadError::arity(kind, path, N, found))
    }

    fn token(&self, description: &TokenDescription) -> TypeToken<'a> {
        match description {
            TokenDescription::Named(name) => TypeToken::Named(self.arena.alloc_str(name)),
            TokenDescription::Tuple(items) => {
                let items: Vec<TypeToken<'a>> = items.iter().map(|t| self.token(t)).collect();
                TypeToken::Tuple(self.arena.alloc_slice_copy(&items))
            }
        }
    }

    fn literal(
        &self,
        kind: &'static str,
        description: &NodeDescription,
        path: &str,
    ) -> Result<LiteralValue<'a>, LoadError> {
        use serde_json::Value;

        match &description.value {
            Value::Null => Ok(LiteralValue::Null),
            Value::Bool(value) => Ok(LiteralValue::Bool(*value)),
            Value::Number(number) => number
                .as_i64()
                .map(LiteralValue::Int)
                .or_else(|| number.as_f64().map(LiteralValue::Float))
                .ok_or_else(|| {
                    LoadError::invalid_attribute(kind, path, "value", "number out of range")
                }),
            Value::String(value) => Ok(LiteralValue::Str(self.arena.alloc_str(value))),
            Value::Array(_) | Value::Object(_) => Err(LoadError::invalid_attribute(
                kind,
                path,
                "value",
                "expected a scalar",
            )),
        }
    }
}
