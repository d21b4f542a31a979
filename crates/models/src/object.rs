use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    amenity::Amenity, base::BaseModel, city::City, class::ClassName, errors::ModelError, place::Place,
    review::Review, state::State, user::User,
};

/// Key carrying the type tag in the serialized form.
pub const CLASS_TAG: &str = "__class__";

/// Keys a client never supplies on creation; the record generates them.
const GENERATED_FIELDS: [&str; 4] = ["id", "created_at", "updated_at", CLASS_TAG];

/// Any storable record. Serializes to the flat key/value form with the
/// variant name under `__class__`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "__class__")]
pub enum Object {
    Amenity(Amenity),
    City(City),
    Place(Place),
    Review(Review),
    State(State),
    User(User),
}

/// Typed view over one `Object` variant.
pub trait Model: Clone + Into<Object> {
    const CLASS: ClassName;

    fn base(&self) -> &BaseModel;
    fn base_mut(&mut self) -> &mut BaseModel;
    fn from_object(obj: Object) -> Option<Self>;
    fn from_object_ref(obj: &Object) -> Option<&Self>;

    fn id(&self) -> &str {
        &self.base().id
    }

    fn key(&self) -> String {
        Self::CLASS.key(self.id())
    }
}

macro_rules! impl_model {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl Model for $ty {
                const CLASS: ClassName = ClassName::$ty;

                fn base(&self) -> &BaseModel { &self.base }
                fn base_mut(&mut self) -> &mut BaseModel { &mut self.base }

                fn from_object(obj: Object) -> Option<Self> {
                    match obj {
                        Object::$ty(inner) => Some(inner),
                        _ => None,
                    }
                }

                fn from_object_ref(obj: &Object) -> Option<&Self> {
                    match obj {
                        Object::$ty(inner) => Some(inner),
                        _ => None,
                    }
                }
            }

            impl From<$ty> for Object {
                fn from(inner: $ty) -> Self { Object::$ty(inner) }
            }
        )+

        impl Object {
            pub fn class(&self) -> ClassName {
                match self { $(Object::$ty(_) => ClassName::$ty,)+ }
            }

            pub fn base(&self) -> &BaseModel {
                match self { $(Object::$ty(inner) => &inner.base,)+ }
            }

            pub fn base_mut(&mut self) -> &mut BaseModel {
                match self { $(Object::$ty(inner) => &mut inner.base,)+ }
            }
        }
    };
}

impl_model!(Amenity, City, Place, Review, State, User);

impl Object {
    pub fn id(&self) -> &str {
        &self.base().id
    }

    /// Composite registry key, `"<ClassName>.<id>"`.
    pub fn key(&self) -> String {
        self.class().key(self.id())
    }

    pub fn touch(&mut self) {
        self.base_mut().touch();
    }

    /// Plain key/value representation, including `__class__`. This is what
    /// the backing file stores.
    pub fn to_dict(&self) -> Result<Map<String, Value>, ModelError> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(ModelError::Validation(format!("expected an object, serialized to {other}"))),
        }
    }

    /// Rebuild a record from its key/value form; `__class__` picks the variant.
    pub fn from_dict(dict: Map<String, Value>) -> Result<Self, ModelError> {
        Ok(serde_json::from_value(Value::Object(dict))?)
    }

    /// Construct a fresh record of `class` from client supplied attributes.
    /// Identifier, timestamps and class tag are always generated here.
    pub fn build(class: ClassName, attrs: Map<String, Value>) -> Result<Self, ModelError> {
        let mut dict: Map<String, Value> = attrs
            .into_iter()
            .filter(|(k, _)| !GENERATED_FIELDS.contains(&k.as_str()))
            .collect();
        dict.insert(CLASS_TAG.to_string(), Value::String(class.as_str().to_string()));
        Self::from_dict(dict)
    }

    /// Assign client supplied attributes onto this record, skipping the
    /// class's immutable fields, then bump `updated_at`. The record is left
    /// untouched if any value does not fit its field.
    pub fn apply_attributes(&mut self, attrs: &Map<String, Value>) -> Result<(), ModelError> {
        let immutable = self.class().immutable_fields();
        let mut dict = self.to_dict()?;
        for (k, v) in attrs {
            if k == CLASS_TAG || immutable.contains(&k.as_str()) {
                continue;
            }
            dict.insert(k.clone(), v.clone());
        }
        let mut updated = Self::from_dict(dict)?;
        updated.touch();
        *self = updated;
        Ok(())
    }

    /// Representation returned to API clients: `to_dict` without secrets.
    pub fn to_public_json(&self) -> Result<Value, ModelError> {
        let mut dict = self.to_dict()?;
        if let Object::User(_) = self {
            dict.remove("password");
        }
        Ok(Value::Object(dict))
    }
}
