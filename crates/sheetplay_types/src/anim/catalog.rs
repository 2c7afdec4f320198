//! Named collection of sprite sheet definitions.
//!
//! A catalog file is a single object mapping sprite names to definitions:
//!
//! ```text
//! {
//!     "Flame": { "image": "...", "animations": { ... }, "frames": { ... } },
//!     "TwilightSparkle": { ... }
//! }
//! ```
//!
//! Every entry is validated on load. Definitions are handed out as `Arc`s so any number of
//! controllers can share one without copying it.

use std::{collections::BTreeMap, io::Read, path::Path, sync::Arc};

use super::{
	definition::{AnimationDefinition, is_yaml_path},
	error::DefinitionError,
};

/// Validated definitions keyed by sprite name.
#[derive(Debug, Clone, Default)]
pub struct AnimationCatalog {
	entries: BTreeMap<String, Arc<AnimationDefinition>>,
}

impl AnimationCatalog {
	/// Creates an empty catalog.
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses a catalog from a JSON string.
	pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
		Self::from_entries(serde_json::from_str(json)?)
	}

	/// Parses a catalog from a YAML string.
	pub fn from_yaml(yaml: &str) -> Result<Self, DefinitionError> {
		Self::from_entries(serde_yaml::from_str(yaml)?)
	}

	/// Parses a catalog from JSON bytes.
	pub fn from_bytes(data: &[u8]) -> Result<Self, DefinitionError> {
		Self::from_entries(serde_json::from_slice(data)?)
	}

	/// Reads a JSON catalog from any reader.
	pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, DefinitionError> {
		let mut data = Vec::new();
		reader.read_to_end(&mut data)?;
		Self::from_bytes(&data)
	}

	/// Opens a catalog file, as YAML for `.yaml`/`.yml` and as JSON otherwise.
	pub fn open(path: impl AsRef<Path>) -> Result<Self, DefinitionError> {
		let path = path.as_ref();
		let text = std::fs::read_to_string(path)?;
		let catalog = if is_yaml_path(path) {
			Self::from_yaml(&text)?
		} else {
			Self::from_json(&text)?
		};
		log::info!("Loaded {} animation definitions from {}", catalog.len(), path.display());
		Ok(catalog)
	}

	fn from_entries(raw: BTreeMap<String, AnimationDefinition>) -> Result<Self, DefinitionError> {
		let mut entries = BTreeMap::new();
		for (name, definition) in raw {
			if let Err(e) = definition.validate() {
				return Err(DefinitionError::Entry {
					name,
					source: Box::new(e),
				});
			}
			log::debug!("Catalog entry '{name}': {definition}");
			entries.insert(name, Arc::new(definition));
		}
		Ok(Self {
			entries,
		})
	}

	/// Adds a definition after validating it, replacing any entry with the same name.
	pub fn insert(
		&mut self,
		name: impl Into<String>,
		definition: AnimationDefinition,
	) -> Result<Option<Arc<AnimationDefinition>>, DefinitionError> {
		let name = name.into();
		if let Err(e) = definition.validate() {
			return Err(DefinitionError::Entry {
				name,
				source: Box::new(e),
			});
		}
		Ok(self.entries.insert(name, Arc::new(definition)))
	}

	/// Looks up a definition by sprite name.
	pub fn get(&self, name: &str) -> Option<Arc<AnimationDefinition>> {
		self.entries.get(name).cloned()
	}

	/// Whether a sprite with this name exists.
	pub fn contains(&self, name: &str) -> bool {
		self.entries.contains_key(name)
	}

	/// Sprite names in sorted order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	/// Iterates over `(name, definition)` pairs in name order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<AnimationDefinition>)> {
		self.entries.iter().map(|(name, definition)| (name.as_str(), definition))
	}

	/// Number of definitions.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the catalog is empty.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
