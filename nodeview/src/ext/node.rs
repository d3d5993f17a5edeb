use k8s_openapi::api::core::v1::{Node, NodeSystemInfo};

pub trait NodeExt {
    /// The node's reported system information, when its status carries one.
    fn system_info(&self) -> Option<&NodeSystemInfo>;

    /// The first network address reported for the node.
    fn first_address(&self) -> Option<&str>;
}

impl NodeExt for Node {
    fn system_info(&self) -> Option<&NodeSystemInfo> {
        self.status.as_ref()?.node_info.as_ref()
    }

    fn first_address(&self) -> Option<&str> {
        self.status.as_ref()?.addresses.as_ref()?.first().map(|addr| addr.address.as_str())
    }
}
