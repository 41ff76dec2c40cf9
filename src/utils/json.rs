// Lenient JSON object decoding for request bodies
//
// Only the first JSON value of the body is read, anything after it is
// ignored. Object keys match field names exactly or, failing that, ignoring
// ASCII case. When several keys land on the same field the last one wins,
// and a `null` leaves the field as it was.

use serde::de::{self, DeserializeOwned, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;

/// Field names a body decoded with [`decode_object`] may set
pub trait JsonFields {
    const FIELDS: &'static [&'static str];
}

/// Object entries in the order they appear in the body, duplicates kept
struct Entries(Vec<(String, Value)>);

impl<'de> Deserialize<'de> for Entries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = Entries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a JSON object")
            }

            // top-level null sets nothing
            fn visit_unit<E: de::Error>(self) -> Result<Entries, E> {
                Ok(Entries(Vec::new()))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Entries, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    entries.push((key, value));
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_any(EntriesVisitor)
    }
}

fn canonical_field(fields: &'static [&'static str], key: &str) -> Option<&'static str> {
    fields
        .iter()
        .find(|field| **field == key)
        .or_else(|| fields.iter().find(|field| field.eq_ignore_ascii_case(key)))
        .copied()
}

/// Decode the first JSON value in `body` into `T`
pub fn decode_object<T>(body: &[u8]) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned + JsonFields,
{
    let entries = match serde_json::Deserializer::from_slice(body)
        .into_iter::<Entries>()
        .next()
    {
        Some(entries) => entries?,
        // empty or whitespace-only body, reported as EOF
        None => serde_json::from_slice::<Entries>(body)?,
    };

    let mut object = Map::new();
    for (key, value) in entries.0 {
        if value.is_null() {
            continue;
        }
        if let Some(field) = canonical_field(T::FIELDS, &key) {
            object.insert(field.to_string(), value);
        }
    }

    serde_json::from_value(Value::Object(object))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::admin::LoginRequest;
    use crate::models::product::Product;

    #[test]
    fn test_mixed_case_keys() {
        let product: Product =
            decode_object(br#"{"ID":2,"Name":"renamed","PRICE":5,"Img":"x.jpg"}"#).unwrap();

        assert_eq!(product, Product::new(2, "renamed", "", 5, "x.jpg"));
    }

    #[test]
    fn test_capitalized_login_key() {
        let login: LoginRequest = decode_object(br#"{"Password":"admin123"}"#).unwrap();
        assert_eq!(login.password, "admin123");
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let product: Product = decode_object(br#"{"id":1,"id":2}"#).unwrap();
        assert_eq!(product.id, 2);

        let product: Product = decode_object(br#"{"name":"a","NAME":"b","Name":"c"}"#).unwrap();
        assert_eq!(product.name, "c");
    }

    #[test]
    fn test_null_keeps_earlier_value() {
        let product: Product = decode_object(br#"{"price":10,"price":null}"#).unwrap();
        assert_eq!(product.price, 10);
    }

    #[test]
    fn test_trailing_data_ignored() {
        let product: Product = decode_object(b"{\"id\":0,\"name\":\"X\"}\n{}").unwrap();
        assert_eq!(product.name, "X");

        let product: Product = decode_object(br#"{"id":7} trailing garbage"#).unwrap();
        assert_eq!(product.id, 7);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let product: Product = decode_object(br#"{"id":3,"stock":9}"#).unwrap();
        assert_eq!(product.id, 3);
    }

    #[test]
    fn test_null_body_decodes_to_defaults() {
        let product: Product = decode_object(b"null").unwrap();
        assert_eq!(product, Product::default());
    }

    #[test]
    fn test_empty_body_is_error() {
        assert!(decode_object::<Product>(b"").is_err());
        assert!(decode_object::<Product>(b"  \n").is_err());
    }

    #[test]
    fn test_malformed_first_value_is_error() {
        assert!(decode_object::<Product>(b"{not json").is_err());
    }

    #[test]
    fn test_non_object_is_error() {
        assert!(decode_object::<Product>(b"[1,2]").is_err());
        assert!(decode_object::<Product>(b"\"text\"").is_err());
    }

    #[test]
    fn test_type_mismatch_is_error() {
        assert!(decode_object::<Product>(br#"{"Price":"cheap"}"#).is_err());
    }
}
