use crate::{EmbedCategory, Node, NodeStore, RichTextLinkExtractor, rich_text};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::{error::Error as StdError, fmt, sync::Arc};
use thiserror::Error;

/// Owner recorded on nodes created by the Contentful source plugin.
pub const SOURCE_PLUGIN: &str = "gatsby-source-contentful";

/// Everything a resolver may read. Passed explicitly on every call.
#[derive(Clone)]
pub struct ResolveContext {
    pub node_store: Arc<dyn NodeStore>,
    pub link_extractor: Arc<dyn RichTextLinkExtractor>,
    /// Only nodes owned by this plugin are considered.
    pub owner: String,
}

impl ResolveContext {
    pub fn new(node_store: Arc<dyn NodeStore>, link_extractor: Arc<dyn RichTextLinkExtractor>) -> Self {
        ResolveContext {
            node_store,
            link_extractor,
            owner: SOURCE_PLUGIN.to_owned(),
        }
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }
}

/// A resolver implemented outside of this crate.
#[async_trait]
pub trait Resolve: Send + Sync {
    async fn resolve(
        &self,
        source: &Value,
        args: &Map<String, Value>,
        ctx: &ResolveContext,
    ) -> Result<Resolved, ResolveError>;
}

/// How a field computes its value at query time.
#[derive(Clone)]
pub enum FieldResolver {
    /// The parent value itself.
    Source,
    /// Nodes embedded in the parent rich-text document.
    RichTextLinks(EmbedCategory),
    External(Arc<dyn Resolve>),
}

impl FieldResolver {
    pub fn external(resolver: impl Resolve + 'static) -> Self {
        FieldResolver::External(Arc::new(resolver))
    }

    pub async fn resolve(
        &self,
        source: &Value,
        args: &Map<String, Value>,
        ctx: &ResolveContext,
    ) -> Result<Resolved, ResolveError> {
        match self {
            FieldResolver::Source => Ok(Resolved::Value(source.clone())),
            FieldResolver::RichTextLinks(category) => rich_text::linked_nodes(source, *category, ctx)
                .await
                .map(Resolved::Nodes),
            FieldResolver::External(resolver) => resolver.resolve(source, args, ctx).await,
        }
    }
}

impl fmt::Debug for FieldResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldResolver::Source => f.write_str("Source"),
            FieldResolver::RichTextLinks(category) => f.debug_tuple("RichTextLinks").field(category).finish(),
            FieldResolver::External(_) => f.write_str("External(..)"),
        }
    }
}

impl PartialEq for FieldResolver {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FieldResolver::Source, FieldResolver::Source) => true,
            (FieldResolver::RichTextLinks(a), FieldResolver::RichTextLinks(b)) => a == b,
            (FieldResolver::External(a), FieldResolver::External(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    Value(Value),
    Nodes(Vec<Node>),
}

impl Resolved {
    pub fn into_value(self) -> Result<Value, ResolveError> {
        match self {
            Resolved::Value(value) => Ok(value),
            Resolved::Nodes(nodes) => Ok(serde_json::to_value(nodes)?),
        }
    }
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Failed to query the node store: {0}")]
    NodeStore(Box<dyn StdError + Send + Sync>),

    #[error("Failed to serialize resolved nodes: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    External(Box<dyn StdError + Send + Sync>),
}
