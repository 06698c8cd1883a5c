use uuid::Uuid;

/// Generate a fresh node id (UUID v4)
pub fn new_node_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<String> = (0..1000).map(|_| new_node_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_ids_are_uuids() {
        let id = new_node_id();
        assert!(Uuid::parse_str(&id).is_ok());
    }
}
