//! Tile configuration types
//!
//! A pattern is one complete grid of tiles, stored row-major. Each tile
//! carries the values the game reads when it spawns the platform.

use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};

/// Behaviour is an integer index into the game's behaviour table
pub const BEHAVIOUR_MAX: u8 = 10;
/// Delay in seconds before the platform acts
pub const DELAY_MAX: f32 = 10.0;
/// Platform movement speed
pub const SPEED_MAX: f32 = 100.0;

/// What kind of platform occupies a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum PlatformType {
    /// Empty slot, no platform spawned
    #[default]
    None,
    /// Platform that drops after its delay
    Drop,
    /// Platform carrying a pickup
    Item,
}

impl PlatformType {
    pub const ALL: [PlatformType; 3] = [PlatformType::None, PlatformType::Drop, PlatformType::Item];

    const NAMES: &'static [&'static str] = &["None", "Drop", "Item"];

    pub fn label(&self) -> &'static str {
        Self::NAMES[self.index()]
    }

    pub fn index(&self) -> usize {
        match self {
            PlatformType::None => 0,
            PlatformType::Drop => 1,
            PlatformType::Item => 2,
        }
    }

    pub fn from_index(i: usize) -> Option<PlatformType> {
        Self::ALL.get(i).copied()
    }

    pub fn from_name(name: &str) -> Option<PlatformType> {
        Self::NAMES
            .iter()
            .position(|n| n.eq_ignore_ascii_case(name))
            .and_then(Self::from_index)
    }
}

/// Older exports wrote the type as its enum discriminant
#[derive(Deserialize)]
#[serde(untagged)]
enum PlatformTypeRepr {
    Name(String),
    Index(u64),
}

impl<'de> Deserialize<'de> for PlatformType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match PlatformTypeRepr::deserialize(deserializer)? {
            PlatformTypeRepr::Name(name) => PlatformType::from_name(&name)
                .ok_or_else(|| de::Error::unknown_variant(&name, PlatformType::NAMES)),
            PlatformTypeRepr::Index(i) => usize::try_from(i)
                .ok()
                .and_then(PlatformType::from_index)
                .ok_or_else(|| {
                    de::Error::invalid_value(Unexpected::Unsigned(i), &"a platform type index 0-2")
                }),
        }
    }
}

/// Authored configuration of one tile
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlatformModel {
    #[serde(rename = "type")]
    pub platform_type: PlatformType,
    pub behaviour: u8,
    pub delay: f32,
    pub speed: f32,
}

impl PlatformModel {
    pub fn new(platform_type: PlatformType, behaviour: u8, delay: f32, speed: f32) -> Self {
        Self { platform_type, behaviour, delay, speed }
    }
}

/// A single-tile write addressed by linear index within the current pattern
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TileUpdate {
    pub id: usize,
    #[serde(flatten)]
    pub model: PlatformModel,
}

impl TileUpdate {
    pub fn new(id: usize, model: PlatformModel) -> Self {
        Self { id, model }
    }
}

/// One complete grid configuration, row-major
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pattern {
    tiles: Vec<PlatformModel>,
}

impl Pattern {
    /// Pattern with every tile defaulted
    pub fn new(tile_count: usize) -> Self {
        Self {
            tiles: vec![PlatformModel::default(); tile_count],
        }
    }

    pub fn from_tiles(tiles: Vec<PlatformModel>) -> Self {
        Self { tiles }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn get(&self, id: usize) -> Option<&PlatformModel> {
        self.tiles.get(id)
    }

    pub fn tiles(&self) -> &[PlatformModel] {
        &self.tiles
    }

    /// Overwrite the tile at `id`. Returns false when `id` is out of range.
    pub fn set(&mut self, id: usize, model: PlatformModel) -> bool {
        match self.tiles.get_mut(id) {
            Some(tile) => {
                *tile = model;
                true
            }
            None => false,
        }
    }

    /// Number of tiles that spawn a platform
    pub fn occupied(&self) -> usize {
        self.tiles
            .iter()
            .filter(|t| t.platform_type != PlatformType::None)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_serializes_as_name() {
        let json = serde_json::to_string(&PlatformType::Drop).unwrap();
        assert_eq!(json, "\"Drop\"");
    }

    #[test]
    fn test_type_accepts_index_and_name() {
        let by_index: PlatformType = serde_json::from_str("2").unwrap();
        assert_eq!(by_index, PlatformType::Item);

        let by_name: PlatformType = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(by_name, PlatformType::None);

        assert!(serde_json::from_str::<PlatformType>("7").is_err());
        assert!(serde_json::from_str::<PlatformType>("\"Lava\"").is_err());
    }

    #[test]
    fn test_model_json_keys() {
        let model = PlatformModel::new(PlatformType::Item, 3, 1.25, 10.5);
        let value = serde_json::to_value(model).unwrap();
        assert_eq!(value["type"], "Item");
        assert_eq!(value["behaviour"], 3);
        assert_eq!(value["delay"], 1.25);
        assert_eq!(value["speed"], 10.5);
    }

    #[test]
    fn test_model_ignores_id_key() {
        let json = r#"{"id":4,"type":"Drop","behaviour":1,"delay":0.5,"speed":20}"#;
        let model: PlatformModel = serde_json::from_str(json).unwrap();
        assert_eq!(model, PlatformModel::new(PlatformType::Drop, 1, 0.5, 20.0));
    }

    #[test]
    fn test_tile_update_is_flat() {
        let update = TileUpdate::new(4, PlatformModel::new(PlatformType::Drop, 0, 0.0, 10.0));
        let value = serde_json::to_value(update).unwrap();
        assert_eq!(value["id"], 4);
        assert_eq!(value["type"], "Drop");
    }

    #[test]
    fn test_pattern_set_bounds() {
        let mut pattern = Pattern::new(4);
        let model = PlatformModel::new(PlatformType::Drop, 2, 0.0, 5.0);
        assert!(pattern.set(3, model));
        assert!(!pattern.set(4, model));
        assert_eq!(pattern.get(3), Some(&model));
        assert_eq!(pattern.occupied(), 1);
    }
}
