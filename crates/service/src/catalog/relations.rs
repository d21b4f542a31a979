//! Derived relationships. Nothing is stored twice; children are found by
//! scanning their class for the parent reference.

use models::{Amenity, City, Model, Place, Review};

use crate::storage::{self, Storage};

pub async fn cities_of(store: &dyn Storage, state_id: &str) -> Vec<City> {
    storage::list::<City>(store).await.into_iter().filter(|c| c.state_id == state_id).collect()
}

pub async fn places_of(store: &dyn Storage, city_id: &str) -> Vec<Place> {
    storage::list::<Place>(store).await.into_iter().filter(|p| p.city_id == city_id).collect()
}

pub async fn reviews_of(store: &dyn Storage, place_id: &str) -> Vec<Review> {
    storage::list::<Review>(store).await.into_iter().filter(|r| r.place_id == place_id).collect()
}

/// Amenities linked to `place`, in link order. Ids that no longer resolve
/// are skipped.
pub async fn amenities_of(store: &dyn Storage, place: &Place) -> Vec<Amenity> {
    let mut linked = Vec::with_capacity(place.amenity_ids.len());
    for id in &place.amenity_ids {
        if let Some(amenity) = storage::find::<Amenity>(store, id).await {
            linked.push(amenity);
        }
    }
    linked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{cleanup, temp_store};
    use models::{Object, State};

    #[tokio::test]
    async fn children_are_filtered_by_parent_reference() -> anyhow::Result<()> {
        let (store, path) = temp_store("relations").await;
        let ca = State::new("California");
        let nv = State::new("Nevada");
        let sf = City::new(ca.id(), "San Francisco");
        let la = City::new(ca.id(), "Los Angeles");
        let reno = City::new(nv.id(), "Reno");
        let loft = Place::new(sf.id(), "u1", "Loft");
        let review = Review::new(loft.id(), "u1", "Lovely");
        let objs: [Object; 7] = [
            ca.clone().into(), nv.clone().into(), sf.clone().into(), la.into(), reno.into(),
            loft.clone().into(), review.into(),
        ];
        for obj in objs {
            store.insert(obj).await;
        }

        assert_eq!(cities_of(store.as_ref(), ca.id()).await.len(), 2);
        assert_eq!(cities_of(store.as_ref(), nv.id()).await.len(), 1);
        assert_eq!(places_of(store.as_ref(), sf.id()).await.len(), 1);
        assert_eq!(reviews_of(store.as_ref(), loft.id()).await[0].text, "Lovely");
        assert!(reviews_of(store.as_ref(), "nope").await.is_empty());
        cleanup(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn amenities_follow_link_order_and_skip_dangling_ids() -> anyhow::Result<()> {
        let (store, path) = temp_store("relations_amenities").await;
        let wifi = Amenity::new("Wifi");
        let pool = Amenity::new("Pool");
        store.insert(wifi.clone().into()).await;
        store.insert(pool.clone().into()).await;
        let mut place = Place::new("c1", "u1", "Loft");
        place.link_amenity(pool.id());
        place.link_amenity("gone");
        place.link_amenity(wifi.id());

        let names: Vec<String> = amenities_of(store.as_ref(), &place).await.into_iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["Pool".to_string(), "Wifi".to_string()]);
        cleanup(&path).await;
        Ok(())
    }
}
