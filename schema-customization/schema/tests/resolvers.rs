use async_trait::async_trait;
use pretty_assertions::assert_eq;
use schema::*;
use serde_json::{Map, Value, json};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

/// Walks the document the way the rich-text links helper does: every node of
/// the requested type contributes its `data.target.sys` reference.
struct DocumentWalker;

impl DocumentWalker {
    fn collect(node: &Value, category: EmbedCategory, links: &mut EntityLinks) {
        if node["nodeType"] == category.as_str() {
            let sys = &node["data"]["target"]["sys"];

            if let Some(id) = sys["id"].as_str() {
                let link = EntityLink { id: id.to_owned() };

                match sys["linkType"].as_str() {
                    Some("Asset") => links.asset.push(link),
                    Some("Entry") => links.entry.push(link),
                    _ => (),
                }
            }
        }

        if let Some(children) = node["content"].as_array() {
            for child in children {
                Self::collect(child, category, links);
            }
        }
    }
}

impl RichTextLinkExtractor for DocumentWalker {
    fn entity_links(&self, document: &Value, category: EmbedCategory) -> EntityLinks {
        let mut links = EntityLinks::default();
        Self::collect(document, category, &mut links);
        links
    }
}

#[derive(Default)]
struct MemoryStore {
    nodes: Vec<Node>,
    queries: AtomicUsize,
}

#[async_trait]
impl NodeStore for MemoryStore {
    async fn all_nodes(&self) -> Result<Vec<Node>, ResolveError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        Ok(self.nodes.clone())
    }
}

struct FailingStore;

#[async_trait]
impl NodeStore for FailingStore {
    async fn all_nodes(&self) -> Result<Vec<Node>, ResolveError> {
        Err(ResolveError::NodeStore("store is closed".into()))
    }
}

fn node(id: &str, owner: &str, sys_type: &str) -> Node {
    serde_json::from_value(json!({
        "id": format!("node-{id}"),
        "internal": { "type": format!("Contentful{sys_type}"), "owner": owner },
        "sys": { "id": id, "type": sys_type },
        "title": id,
    }))
    .unwrap()
}

fn embed(node_type: &str, id: &str, link_type: &str) -> Value {
    json!({
        "nodeType": node_type,
        "data": { "target": { "sys": { "id": id, "type": "Link", "linkType": link_type } } },
        "content": [],
    })
}

fn document() -> Value {
    json!({
        "nodeType": "document",
        "data": {},
        "content": [
            embed("embedded-asset-block", "hero", "Asset"),
            {
                "nodeType": "paragraph",
                "data": {},
                "content": [
                    embed("entry-hyperlink", "about", "Entry"),
                    embed("asset-hyperlink", "brochure", "Asset"),
                ],
            },
            embed("embedded-asset-block", "gallery", "Asset"),
            embed("embedded-entry-block", "hero", "Entry"),
        ],
    })
}

fn store() -> MemoryStore {
    MemoryStore {
        nodes: vec![
            node("gallery", SOURCE_PLUGIN, "Asset"),
            node("hero", SOURCE_PLUGIN, "Entry"),
            node("hero", SOURCE_PLUGIN, "Asset"),
            node("hero", "gatsby-source-filesystem", "Asset"),
            node("brochure", SOURCE_PLUGIN, "Asset"),
            node("unrelated", SOURCE_PLUGIN, "Asset"),
            node("about", SOURCE_PLUGIN, "Entry"),
        ],
        queries: AtomicUsize::new(0),
    }
}

fn context(store: Arc<dyn NodeStore>) -> ResolveContext {
    ResolveContext::new(store, Arc::new(DocumentWalker))
}

fn sys_ids(resolved: Resolved) -> Vec<(String, String)> {
    match resolved {
        Resolved::Nodes(nodes) => nodes
            .into_iter()
            .map(|node| (node.sys_id().unwrap().to_owned(), node.internal.owner))
            .collect(),
        other => panic!("expected nodes, got {other:?}"),
    }
}

fn owned(ids: &[&str]) -> Vec<(String, String)> {
    ids.iter().map(|id| (id.to_string(), SOURCE_PLUGIN.to_owned())).collect()
}

#[tokio::test]
async fn embedded_asset_blocks_resolve_to_owned_assets_only() {
    let ctx = context(Arc::new(store()));
    let resolver = FieldResolver::RichTextLinks(EmbedCategory::EmbeddedAssetBlock);

    let resolved = resolver.resolve(&document(), &Map::new(), &ctx).await.unwrap();

    assert_eq!(sys_ids(resolved), owned(&["gallery", "hero"]));
}

#[tokio::test]
async fn every_category_filters_by_its_entity_kind() {
    let ctx = context(Arc::new(store()));

    let expectations = [
        (EmbedCategory::EmbeddedAssetBlock, owned(&["gallery", "hero"])),
        (EmbedCategory::AssetHyperlink, owned(&["brochure"])),
        (EmbedCategory::EmbeddedEntryInline, owned(&[])),
        (EmbedCategory::EmbeddedEntryBlock, owned(&["hero"])),
        (EmbedCategory::EntryHyperlink, owned(&["about"])),
    ];

    for (category, expected) in expectations {
        let resolved = FieldResolver::RichTextLinks(category)
            .resolve(&document(), &Map::new(), &ctx)
            .await
            .unwrap();

        assert_eq!(sys_ids(resolved), expected, "{category}");
    }
}

#[tokio::test]
async fn owner_can_be_overridden() {
    let ctx = context(Arc::new(store())).with_owner("gatsby-source-filesystem");

    let resolved = FieldResolver::RichTextLinks(EmbedCategory::EmbeddedAssetBlock)
        .resolve(&document(), &Map::new(), &ctx)
        .await
        .unwrap();

    assert_eq!(
        sys_ids(resolved),
        vec![("hero".to_owned(), "gatsby-source-filesystem".to_owned())]
    );
}

#[tokio::test]
async fn documents_without_embeds_skip_the_store() {
    let store = Arc::new(store());
    let ctx = context(store.clone());
    let empty = json!({ "nodeType": "document", "data": {}, "content": [] });

    let resolved = FieldResolver::RichTextLinks(EmbedCategory::EntryHyperlink)
        .resolve(&empty, &Map::new(), &ctx)
        .await
        .unwrap();

    assert_eq!(resolved, Resolved::Nodes(Vec::new()));
    assert_eq!(store.queries.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn store_failures_propagate() {
    let ctx = context(Arc::new(FailingStore));

    let err = FieldResolver::RichTextLinks(EmbedCategory::EmbeddedAssetBlock)
        .resolve(&document(), &Map::new(), &ctx)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Failed to query the node store: store is closed");
}

#[tokio::test]
async fn resolvers_run_concurrently_against_one_context() {
    let store = Arc::new(store());
    let ctx = context(store.clone());
    let document = document();
    let args = Map::new();
    let resolver = FieldResolver::RichTextLinks(EmbedCategory::AssetHyperlink);

    let results = futures::future::join_all((0..8).map(|_| resolver.resolve(&document, &args, &ctx))).await;

    for result in results {
        assert_eq!(sys_ids(result.unwrap()), owned(&["brochure"]));
    }

    assert_eq!(store.queries.load(Ordering::SeqCst), 8);
}

#[tokio::test]
async fn source_resolver_passes_the_parent_through() {
    let ctx = context(Arc::new(store()));
    let parent = document();

    let resolved = FieldResolver::Source.resolve(&parent, &Map::new(), &ctx).await.unwrap();

    assert_eq!(resolved.into_value().unwrap(), parent);
}

struct Echo;

#[async_trait]
impl Resolve for Echo {
    async fn resolve(
        &self,
        source: &Value,
        args: &Map<String, Value>,
        _ctx: &ResolveContext,
    ) -> Result<Resolved, ResolveError> {
        Ok(Resolved::Value(json!({ "url": source["url"], "args": args })))
    }
}

#[tokio::test]
async fn external_resolvers_receive_arguments() {
    let ctx = context(Arc::new(store()));
    let resolver = FieldResolver::external(Echo);
    let mut args = Map::new();
    args.insert("quality".to_owned(), json!(80));

    let resolved = resolver
        .resolve(&json!({ "url": "//images.ctfassets.net/a.png" }), &args, &ctx)
        .await
        .unwrap();

    assert_eq!(
        resolved,
        Resolved::Value(json!({ "url": "//images.ctfassets.net/a.png", "args": { "quality": 80 } }))
    );
}

#[test]
fn resolvers_compare_by_identity() {
    let echo = FieldResolver::external(Echo);

    assert_eq!(echo, echo.clone());
    assert_ne!(echo, FieldResolver::external(Echo));
    assert_eq!(
        FieldResolver::RichTextLinks(EmbedCategory::EntryHyperlink),
        FieldResolver::RichTextLinks(EmbedCategory::EntryHyperlink)
    );
    assert_ne!(FieldResolver::Source, FieldResolver::RichTextLinks(EmbedCategory::EntryHyperlink));
}

#[test]
fn resolved_nodes_serialize_with_their_data() {
    let value = Resolved::Nodes(vec![node("logo", SOURCE_PLUGIN, "Asset")]).into_value().unwrap();

    assert_eq!(
        value,
        json!([{
            "id": "node-logo",
            "internal": { "type": "ContentfulAsset", "owner": SOURCE_PLUGIN },
            "sys": { "id": "logo", "type": "Asset" },
            "title": "logo",
        }])
    );
}
