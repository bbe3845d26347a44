use crate::{Node, ResolveContext, ResolveError};
use content_model::LinkType;
use serde::Deserialize;
use serde_json::Value;
use std::{collections::HashSet, fmt};

/// The ways a rich-text document can embed or link another entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmbedCategory {
    EmbeddedAssetBlock,
    AssetHyperlink,
    EmbeddedEntryInline,
    EmbeddedEntryBlock,
    EntryHyperlink,
}

impl EmbedCategory {
    pub const ALL: [EmbedCategory; 5] = [
        EmbedCategory::EmbeddedAssetBlock,
        EmbedCategory::AssetHyperlink,
        EmbedCategory::EmbeddedEntryInline,
        EmbedCategory::EmbeddedEntryBlock,
        EmbedCategory::EntryHyperlink,
    ];

    /// The rich-text node type of the category.
    pub const fn as_str(self) -> &'static str {
        match self {
            EmbedCategory::EmbeddedAssetBlock => "embedded-asset-block",
            EmbedCategory::AssetHyperlink => "asset-hyperlink",
            EmbedCategory::EmbeddedEntryInline => "embedded-entry-inline",
            EmbedCategory::EmbeddedEntryBlock => "embedded-entry-block",
            EmbedCategory::EntryHyperlink => "entry-hyperlink",
        }
    }

    pub const fn entity_kind(self) -> LinkType {
        match self {
            EmbedCategory::EmbeddedAssetBlock | EmbedCategory::AssetHyperlink => LinkType::Asset,
            EmbedCategory::EmbeddedEntryInline | EmbedCategory::EmbeddedEntryBlock | EmbedCategory::EntryHyperlink => {
                LinkType::Entry
            }
        }
    }
}

impl fmt::Display for EmbedCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entities referenced from a rich-text document, grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EntityLinks {
    #[serde(default, rename = "Asset")]
    pub asset: Vec<EntityLink>,
    #[serde(default, rename = "Entry")]
    pub entry: Vec<EntityLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EntityLink {
    pub id: String,
}

impl EntityLinks {
    pub fn ids(&self, kind: LinkType) -> impl Iterator<Item = &str> {
        let links = match kind {
            LinkType::Asset => &self.asset,
            LinkType::Entry => &self.entry,
        };

        links.iter().map(|link| link.id.as_str())
    }
}

/// Finds the entities a rich-text document embeds.
pub trait RichTextLinkExtractor: Send + Sync {
    fn entity_links(&self, document: &Value, category: EmbedCategory) -> EntityLinks;
}

/// Nodes of the source plugin embedded in `document` under `category`, in store order.
pub(crate) async fn linked_nodes(
    document: &Value,
    category: EmbedCategory,
    ctx: &ResolveContext,
) -> Result<Vec<Node>, ResolveError> {
    let kind = category.entity_kind().as_str();
    let links = ctx.link_extractor.entity_links(document, category);
    let ids: HashSet<&str> = links.ids(category.entity_kind()).collect();

    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let nodes = ctx.node_store.all_nodes().await?;

    Ok(nodes
        .into_iter()
        .filter(|node| node.internal.owner == ctx.owner)
        .filter(|node| node.sys_type() == Some(kind))
        .filter(|node| node.sys_id().is_some_and(|id| ids.contains(id)))
        .collect())
}
