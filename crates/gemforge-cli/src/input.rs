//! Request files read by `gemforge solve`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use gemforge::{AllocationRequest, Gem, Role, SlotKey, SlotSelection};
use serde::Deserialize;

/// JSON document holding the slot selections and the gem pool.
///
/// ```json
/// {
///   "role": "dealer",
///   "slots": {
///     "order_sun": { "grade": "legend", "target": { "point": 14, "priority": 1 } }
///   },
///   "gems": [
///     { "id": 1, "kind": "order_1", "willpower": 4, "core_point": 5,
///       "options": [{ "kind": "attack", "level": 3 }, { "kind": "boss_damage", "level": 0 }] }
///   ]
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct RequestFile {
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub slots: BTreeMap<SlotKey, SlotSelection>,
    #[serde(default)]
    pub gems: Vec<Gem>,
}

impl RequestFile {
    pub fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("failed to parse {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn request(&self) -> AllocationRequest {
        self.slots
            .iter()
            .fold(AllocationRequest::new(), |request, (&key, &selection)| {
                request.with_slot(key, selection)
            })
    }
}
