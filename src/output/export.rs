use crate::attractor::AttractorKind;
use crate::error::VariantError;
use crate::model::LogicalModel;
use std::path::Path;

/// Which variants should be written to disk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExportPolicy {
    /// Export every variant.
    #[default]
    All,
    /// Export only variants with at least one attractor. Requires attractor computation.
    Survivors,
}

impl ExportPolicy {
    /// Decide whether a variant is exported, given the result of attractor computation
    /// (`None` if attractors were not computed).
    pub fn should_export(&self, has_attractors: Option<bool>) -> bool {
        match self {
            ExportPolicy::All => true,
            ExportPolicy::Survivors => has_attractors.unwrap_or(false),
        }
    }
}

/// A single variant, as handed over to a [`ModelExporter`]. It only lives for the
/// duration of the export call.
pub struct GeneratedVariant<'a> {
    /// Unique name of the variant (`<base>_<index>`). Same as the name of `model`.
    pub name: String,
    /// Global variant index.
    pub index: u64,
    /// The link-operator bit pattern of the variant.
    pub pattern: String,
    /// The model, already mutated into this variant.
    pub model: &'a LogicalModel,
    /// Attractor kind and result, if attractors were computed.
    pub attractors: Option<(AttractorKind, bool)>,
}

/// Persists variants in an output directory.
pub trait ModelExporter: Send + Sync {
    fn export(&self, variant: &GeneratedVariant, directory: &Path) -> Result<(), VariantError>;
}

/// Writes `<name>.model` and (optionally) `<name>.bnet` files.
#[derive(Clone, Debug)]
pub struct FileExporter {
    pub write_bnet: bool,
}

impl Default for FileExporter {
    fn default() -> Self {
        FileExporter { write_bnet: true }
    }
}

impl ModelExporter for FileExporter {
    fn export(&self, variant: &GeneratedVariant, directory: &Path) -> Result<(), VariantError> {
        let to_error = |source: std::io::Error| VariantError::Export {
            name: variant.name.clone(),
            source,
        };

        let mut metadata = vec![
            ("index", variant.index.to_string()),
            ("links", variant.pattern.clone()),
        ];
        if let Some((kind, found)) = variant.attractors {
            metadata.push(("attractortool", kind.to_string()));
            metadata.push(("attractors", if found { "found" } else { "none" }.to_string()));
        }

        let model_path = directory.join(format!("{}.model", variant.name));
        std::fs::write(&model_path, variant.model.to_model_file(&metadata)).map_err(to_error)?;

        if self.write_bnet {
            let bnet_path = directory.join(format!("{}.bnet", variant.name));
            std::fs::write(&bnet_path, variant.model.to_bnet()).map_err(to_error)?;
        }
        Ok(())
    }
}
