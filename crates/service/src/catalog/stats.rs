use std::collections::BTreeMap;

use models::ClassName;

use crate::storage::Storage;

/// Object count per resource collection, e.g. `{"states": 3, ...}`.
pub async fn counts(store: &dyn Storage) -> BTreeMap<&'static str, usize> {
    let mut counts = BTreeMap::new();
    for class in ClassName::ALL {
        counts.insert(class.collection(), store.count(Some(class)).await);
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{cleanup, temp_store};
    use models::{Amenity, State};

    #[tokio::test]
    async fn every_collection_is_reported() -> anyhow::Result<()> {
        let (store, path) = temp_store("stats").await;
        store.insert(State::new("Ohio").into()).await;
        store.insert(Amenity::new("Wifi").into()).await;
        store.insert(Amenity::new("Pool").into()).await;
        let counts = counts(store.as_ref()).await;
        assert_eq!(counts.len(), 6);
        assert_eq!(counts["states"], 1);
        assert_eq!(counts["amenities"], 2);
        assert_eq!(counts["users"], 0);
        cleanup(&path).await;
        Ok(())
    }
}
