use schema::{
    EmbedCategory, FieldResolver, ObjectTypeDefinition, OutputField, ScalarType, SharedType, TypeDefinition, TypeRef,
};

fn linked_nodes(target: SharedType, category: EmbedCategory) -> OutputField {
    OutputField::new(TypeRef::from(target).list().required()).resolved_by(FieldResolver::RichTextLinks(category))
}

fn passthrough(field_type: impl Into<TypeRef>) -> OutputField {
    OutputField::new(field_type).resolved_by(FieldResolver::Source)
}

/// Rich-text fields keep the raw document; links resolve lazily from it.
pub(crate) fn rich_text_types() -> Vec<TypeDefinition> {
    let assets = ObjectTypeDefinition::new(SharedType::RichTextAssets.name())
        .field("block", linked_nodes(SharedType::Asset, EmbedCategory::EmbeddedAssetBlock))
        .field("hyperlink", linked_nodes(SharedType::Asset, EmbedCategory::AssetHyperlink))
        .dont_infer();

    let entries = ObjectTypeDefinition::new(SharedType::RichTextEntries.name())
        .field("inline", linked_nodes(SharedType::Entry, EmbedCategory::EmbeddedEntryInline))
        .field("block", linked_nodes(SharedType::Entry, EmbedCategory::EmbeddedEntryBlock))
        .field("hyperlink", linked_nodes(SharedType::Entry, EmbedCategory::EntryHyperlink))
        .dont_infer();

    let links = ObjectTypeDefinition::new(SharedType::RichTextLinks.name())
        .field("assets", passthrough(SharedType::RichTextAssets))
        .field("entries", passthrough(SharedType::RichTextEntries))
        .dont_infer();

    let rich_text = ObjectTypeDefinition::new(SharedType::RichText.name())
        .field("json", passthrough(ScalarType::Json))
        .field("links", passthrough(SharedType::RichTextLinks))
        .dont_infer();

    [assets, entries, links, rich_text]
        .into_iter()
        .map(TypeDefinition::Object)
        .collect()
}
