use crate::ResolveError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A node as stored by the host. Only the keys the resolvers look at are typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub internal: NodeInternal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sys: Option<NodeSys>,
    #[serde(flatten)]
    pub data: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeInternal {
    #[serde(rename = "type")]
    pub type_name: String,
    /// The plugin that created the node.
    pub owner: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSys {
    pub id: String,
    #[serde(rename = "type")]
    pub sys_type: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Node {
    pub fn sys_id(&self) -> Option<&str> {
        self.sys.as_ref().map(|sys| sys.id.as_str())
    }

    pub fn sys_type(&self) -> Option<&str> {
        self.sys.as_ref().map(|sys| sys.sys_type.as_str())
    }
}

/// Read access to every node the host stores.
#[async_trait]
pub trait NodeStore: Send + Sync {
    async fn all_nodes(&self) -> Result<Vec<Node>, ResolveError>;
}
