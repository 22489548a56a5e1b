//! `record!` - implement [`Structure`](crate::Structure) for a plain struct

/// Implement [`Structure`](crate::Structure) for a struct as a record
///
/// Fields are listed as `"PathName" => field`, in the order they should be
/// visited and serialized. Every listed field type must itself implement
/// `Structure`.
///
/// ```
/// use std::collections::BTreeMap;
/// use shml_core::{build_index, record};
///
/// struct Event {
///     kind: String,
///     meta: BTreeMap<String, String>,
/// }
///
/// record!(Event {
///     "Type" => kind,
///     "Meta" => meta,
/// });
///
/// let event = Event {
///     kind: "begin".to_string(),
///     meta: BTreeMap::from([("host".to_string(), "a".to_string())]),
/// };
/// let index = build_index(&event).unwrap();
/// assert_eq!(index.keys(), vec!["Meta", "Meta.host", "Type"]);
/// ```
#[macro_export]
macro_rules! record {
    ($ty:ty { $($name:literal => $field:ident),* $(,)? }) => {
        impl $crate::Structure for $ty {
            fn shape(&self) -> $crate::Shape<'_> {
                $crate::Shape::Record(vec![
                    $(($name, &self.$field as &dyn $crate::Structure)),*
                ])
            }

            fn to_json(&self) -> $crate::__private::serde_json::Value {
                let mut object = $crate::__private::serde_json::Map::new();
                $(
                    object.insert(
                        $name.to_string(),
                        $crate::Structure::to_json(&self.$field),
                    );
                )*
                $crate::__private::serde_json::Value::Object(object)
            }
        }
    };
}
