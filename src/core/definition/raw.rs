//! Serde shapes of the on-disk documents.
//!
//! Definition and vault files are parsed straight into these types, so
//! unknown keys, wrong types, and missing required fields surface as
//! `serde_yaml` errors carrying the element path and line.

use std::fmt;
use std::marker::PhantomData;

use indexmap::IndexMap;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use crate::core::types::{Nickname, Payload};

/// Nickname-keyed mapping that rejects duplicate keys.
#[derive(Debug)]
pub(crate) struct UniqueMap<V>(pub IndexMap<Nickname, V>);

impl<V> Default for UniqueMap<V> {
    fn default() -> Self {
        Self(IndexMap::new())
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for UniqueMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct UniqueMapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for UniqueMapVisitor<V> {
            type Value = UniqueMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping of nicknames")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = IndexMap::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<Nickname, V>()? {
                    if map.contains_key(&key) {
                        return Err(de::Error::custom(format_args!(
                            "duplicate nickname `{}`",
                            key
                        )));
                    }
                    map.insert(key, value);
                }
                Ok(UniqueMap(map))
            }
        }

        deserializer.deserialize_map(UniqueMapVisitor(PhantomData))
    }
}

/// String field that refuses YAML scalars of other types.
///
/// `serde_yaml` hands any plain scalar to `deserialize_str`, so `123` or
/// `true` would otherwise load as text.
struct Text(String);

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TextVisitor;

        impl<'de> Visitor<'de> for TextVisitor {
            type Value = Text;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Text, E> {
                Ok(Text(value.to_owned()))
            }

            fn visit_string<E: de::Error>(self, value: String) -> Result<Text, E> {
                Ok(Text(value))
            }
        }

        deserializer.deserialize_any(TextVisitor)
    }
}

fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Text::deserialize(deserializer).map(|text| text.0)
}

fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Text>::deserialize(deserializer).map(|text| text.map(|t| t.0))
}

fn strings<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Vec::<Text>::deserialize(deserializer)
        .map(|items| items.into_iter().map(|text| text.0).collect())
}

/// Definition file document.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawDefinition {
    pub servers: UniqueMap<RawServer>,
    #[serde(default)]
    pub server_groups: Option<UniqueMap<RawGroup>>,
    #[serde(default, deserialize_with = "optional_string")]
    pub default: Option<Nickname>,
    #[serde(default, deserialize_with = "optional_string")]
    pub vault_file: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawServer {
    #[serde(deserialize_with = "string")]
    pub description: String,
    #[serde(default, deserialize_with = "optional_string")]
    pub contact_name: Option<String>,
    #[serde(default, deserialize_with = "optional_string")]
    pub access_via: Option<String>,
    #[serde(default)]
    pub user_defined: Option<Payload>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawGroup {
    #[serde(deserialize_with = "string")]
    pub description: String,
    #[serde(deserialize_with = "strings")]
    pub members: Vec<Nickname>,
    #[serde(default)]
    pub user_defined: Option<Payload>,
}

/// Vault file document (after decryption).
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawVault {
    pub secrets: UniqueMap<Payload>,
}
