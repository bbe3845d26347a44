use heck::ToUpperCamelCase;

pub const DEFAULT_TYPE_PREFIX: &str = "Contentful";

/// Keys reserved on every Contentful node. Model fields using one of them are
/// stored under a content-type specific key instead.
pub const RESTRICTED_NODE_FIELDS: &[&str] = &[
    "id",
    "sys",
    "metadata",
    "contentful_id",
    "children",
    "parent",
    "fields",
    "internal",
];

/// Builds a schema type name token, e.g. `Contentful` + `blog post` -> `ContentfulBlogPost`.
///
/// Word boundaries are whitespace, punctuation and lower to upper case
/// transitions. Characters that cannot appear in a GraphQL name are dropped.
pub fn make_type_name(prefix: &str, identifier: &str) -> String {
    format!("{prefix} {identifier}")
        .to_upper_camel_case()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The key a model field is exposed under on nodes of `content_type_id`.
pub fn field_key(content_type_id: &str, field_id: &str) -> String {
    if RESTRICTED_NODE_FIELDS.contains(&field_id) {
        format!("{content_type_id}{}", capitalize(field_id))
    } else {
        field_id.to_owned()
    }
}
