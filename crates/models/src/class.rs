use std::fmt;
use std::str::FromStr;

use crate::errors::ModelError;

/// Type tag of every storable record. The string form is the `__class__`
/// value in the serialized representation and the prefix of composite keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClassName {
    Amenity,
    City,
    Place,
    Review,
    State,
    User,
}

impl ClassName {
    pub const ALL: [ClassName; 6] = [
        ClassName::Amenity,
        ClassName::City,
        ClassName::Place,
        ClassName::Review,
        ClassName::State,
        ClassName::User,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ClassName::Amenity => "Amenity",
            ClassName::City => "City",
            ClassName::Place => "Place",
            ClassName::Review => "Review",
            ClassName::State => "State",
            ClassName::User => "User",
        }
    }

    /// Plural resource name used by the stats endpoint.
    pub fn collection(self) -> &'static str {
        match self {
            ClassName::Amenity => "amenities",
            ClassName::City => "cities",
            ClassName::Place => "places",
            ClassName::Review => "reviews",
            ClassName::State => "states",
            ClassName::User => "users",
        }
    }

    /// Attributes a client update may not overwrite.
    pub fn immutable_fields(self) -> &'static [&'static str] {
        match self {
            ClassName::Amenity | ClassName::State => &["id", "created_at", "updated_at"],
            ClassName::City => &["id", "state_id", "created_at", "updated_at"],
            ClassName::User => &["id", "email", "password", "created_at", "updated_at"],
            ClassName::Place => &["id", "user_id", "city_id", "created_at", "updated_at"],
            ClassName::Review => &["id", "user_id", "place_id", "created_at", "updated_at"],
        }
    }

    /// `"<ClassName>.<id>"`
    pub fn key(self, id: &str) -> String {
        format!("{}.{}", self.as_str(), id)
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClassName {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClassName::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ModelError::Validation(format!("unknown class: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for class in ClassName::ALL {
            assert_eq!(class.as_str().parse::<ClassName>().ok(), Some(class));
        }
    }

    #[test]
    fn lookup_is_exact() {
        assert!("state".parse::<ClassName>().is_err());
        assert!("BaseModel".parse::<ClassName>().is_err());
        assert!("".parse::<ClassName>().is_err());
    }

    #[test]
    fn composite_key_joins_with_a_dot() {
        assert_eq!(ClassName::State.key("S1"), "State.S1");
    }

    #[test]
    fn id_and_timestamps_are_always_immutable() {
        for class in ClassName::ALL {
            let fields = class.immutable_fields();
            for f in ["id", "created_at", "updated_at"] {
                assert!(fields.contains(&f), "{class} must protect {f}");
            }
        }
    }
}
