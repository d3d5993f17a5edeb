use k8s_openapi::api::core::v1::{Container, Pod};

pub trait PodExt {
    /// The name of the node this pod is scheduled to, if it has been placed.
    fn placement(&self) -> Option<&str>;

    /// The pod's containers, in the order the API returned them.
    fn containers(&self) -> &[Container];
}

impl PodExt for Pod {
    fn placement(&self) -> Option<&str> { self.spec.as_ref()?.node_name.as_deref() }

    fn containers(&self) -> &[Container] {
        self.spec.as_ref().map_or(&[], |spec| spec.containers.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use k8s_openapi::api::core::v1::PodSpec;

    use super::*;

    #[test]
    fn test_placement_of_scheduled_pod() {
        let pod = Pod {
            spec: Some(PodSpec {
                node_name: Some("n1".to_string()),
                ..PodSpec::default()
            }),
            ..Pod::default()
        };
        assert_eq!(pod.placement(), Some("n1"));
    }

    #[test]
    fn test_placement_of_unscheduled_pod() {
        let pod = Pod::default();
        assert_eq!(pod.placement(), None);
        assert!(pod.containers().is_empty());
    }

    #[test]
    fn test_containers_preserve_api_order() {
        let pod = Pod {
            spec: Some(PodSpec {
                containers: vec![
                    Container { name: "b".to_string(), ..Container::default() },
                    Container { name: "a".to_string(), ..Container::default() },
                ],
                ..PodSpec::default()
            }),
            ..Pod::default()
        };
        let names = pod.containers().iter().map(|c| c.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, ["b", "a"]);
    }
}
