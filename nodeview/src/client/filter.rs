use std::fmt;

use kube::api::ListParams;

use crate::consts::k8s::fields;

/// A server-side selector restricting a listing call.
///
/// A filter is either empty (match everything) or a single field-equality
/// expression; compound selectors are never constructed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Filter {
    /// Match the whole collection.
    All,

    /// Match items whose `field` equals `value` exactly.
    FieldEquals { field: &'static str, value: String },
}

impl Filter {
    /// A filter selecting the single node with the given name.
    #[must_use]
    pub fn node_named<V>(name: V) -> Self
    where
        V: Into<String>,
    {
        Self::FieldEquals { field: fields::NODE_NAME, value: name.into() }
    }

    /// A filter selecting the pods scheduled to the named node.
    #[must_use]
    pub fn pods_on_node<V>(node_name: V) -> Self
    where
        V: Into<String>,
    {
        Self::FieldEquals { field: fields::POD_NODE_NAME, value: node_name.into() }
    }

    /// Translates the filter into listing parameters for the API server.
    pub(crate) fn to_list_params(&self) -> ListParams {
        match self {
            Self::All => ListParams::default(),
            Self::FieldEquals { field, value } => {
                ListParams::default().fields(&format!("{field}={value}"))
            }
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "<all>"),
            Self::FieldEquals { field, value } => write!(f, "{field}={value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_filter_has_no_field_selector() {
        let params = Filter::All.to_list_params();
        assert_eq!(params.field_selector, None);
    }

    #[test]
    fn test_node_name_filter_selects_on_identity_field() {
        let params = Filter::node_named("n1").to_list_params();
        assert_eq!(params.field_selector.as_deref(), Some("metadata.name=n1"));
    }

    #[test]
    fn test_pod_placement_filter_selects_on_node_name_field() {
        let params = Filter::pods_on_node("n2").to_list_params();
        assert_eq!(params.field_selector.as_deref(), Some("spec.nodeName=n2"));
    }

    #[test]
    fn test_display_renders_single_equality() {
        assert_eq!(Filter::All.to_string(), "<all>");
        assert_eq!(Filter::node_named("worker-0").to_string(), "metadata.name=worker-0");
    }
}
