use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

use crate::decode::{decode_share, RawShare, Share};
use crate::error::ReconstructError;
use crate::interpolate::{reconstruct, Arithmetic, ConstantTerm};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keys {
    /// Number of shares the document claims to carry.
    pub n: usize,
    /// Threshold: shares needed, one more than the polynomial degree.
    pub k: usize,
}

/// One reconstruction problem: `keys` plus every other field as a share keyed by x.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    pub keys: Keys,
    #[serde(flatten)]
    pub shares: ShareMap,
}

/// Shares keyed by their x-coordinate text, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareMap(Vec<(String, RawShare)>);

impl ShareMap {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&RawShare> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, raw)| raw)
    }

    /// Replaces the share under `key` in place, or appends it.
    pub fn insert(&mut self, key: String, raw: RawShare) {
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = raw,
            None => self.0.push((key, raw)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &RawShare)> {
        self.0.iter().map(|(key, raw)| (key, raw))
    }

    /// Array-index keys ("0", "7", never "07" or "-1") in ascending order, then
    /// every other key in document order.
    pub fn enumeration_order(&self) -> Vec<(&String, &RawShare)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by_key(|(key, _)| match array_index(key) {
            Some(index) => (0, index),
            None => (1, 0),
        });
        entries
    }
}

fn array_index(key: &str) -> Option<u32> {
    key.parse::<u32>()
        .ok()
        .filter(|index| *index != u32::MAX && index.to_string() == key)
}

impl FromIterator<(String, RawShare)> for ShareMap {
    fn from_iter<I: IntoIterator<Item = (String, RawShare)>>(iter: I) -> Self {
        let mut shares = ShareMap::default();
        for (key, raw) in iter {
            shares.insert(key, raw);
        }
        shares
    }
}

impl Serialize for ShareMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for ShareMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ShareMapVisitor;

        impl<'de> Visitor<'de> for ShareMapVisitor {
            type Value = ShareMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map from x-coordinates to shares")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ShareMap, A::Error> {
                let mut shares = ShareMap::default();
                while let Some((key, raw)) = access.next_entry::<String, RawShare>()? {
                    shares.insert(key, raw);
                }
                Ok(shares)
            }
        }

        deserializer.deserialize_map(ShareMapVisitor)
    }
}

impl TestCase {
    pub fn from_json(value: serde_json::Value) -> Result<Self, ReconstructError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Decodes every share, in [`ShareMap::enumeration_order`].
    pub fn decode_shares(&self) -> Result<Vec<Share>, ReconstructError> {
        self.shares
            .enumeration_order()
            .into_iter()
            .map(|(key, raw)| {
                decode_share(key, raw).map_err(|source| ReconstructError::Decode {
                    key: key.clone(),
                    source,
                })
            })
            .collect()
    }

    pub fn find_constant_term(
        &self,
        arithmetic: Arithmetic,
    ) -> Result<ConstantTerm, ReconstructError> {
        let Keys { n, k } = self.keys;
        if k == 0 {
            return Err(ReconstructError::InvalidThreshold);
        }

        let shares = self.decode_shares()?;
        if shares.len() != n {
            warn!(declared = n, found = shares.len(), "share count differs from keys.n");
        }
        if shares.len() < k {
            return Err(ReconstructError::InsufficientPoints {
                needed: k,
                available: shares.len(),
            });
        }

        reconstruct(&shares, k, arithmetic)
    }
}
