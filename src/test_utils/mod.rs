use crate::attractor::{AttractorKind, AttractorOracle};
use crate::enumeration::bit_to_operator;
use crate::error::VariantError;
use crate::model::{BooleanEquation, LinkOperators, LogicalModel};
use crate::output::{GeneratedVariant, ModelExporter};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Initialize env_logger for tests. Safe to call multiple times.
pub fn init_logger() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

/// Creates a model with one equation per item of `links`.
///
/// Equation `i` has target `v<i>`. `Some(bit)` creates an equation with both an activator
/// and an inhibitor and the link operator selected by `bit` (`false` = and, `true` = or).
/// `None` creates an equation with a single activator (no link operator).
///
/// # Example
///
/// `mk_model(&[Some(false), None])` creates
///  - `v0 *= ( v0 ) and not ( v1 )`
///  - `v1 *= ( v0 )`
pub fn mk_model(links: &[Option<bool>]) -> LogicalModel {
    let n = links.len();
    let equations = links
        .iter()
        .enumerate()
        .map(|(i, link)| {
            let target = format!("v{i}");
            match link {
                Some(bit) => BooleanEquation::with_link(
                    &target,
                    vec![target.clone()],
                    vec![format!("v{}", (i + 1) % n)],
                    bit_to_operator(*bit),
                ),
                None => {
                    let activator = format!("v{}", (i + n - 1) % n);
                    BooleanEquation::new(&target, vec![activator], Vec::new())
                }
            }
        })
        .collect();
    LogicalModel::new("test", equations)
}

/// One call of [`RecordingExporter::export`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportCall {
    pub name: String,
    pub index: u64,
    pub pattern: String,
    pub directory: PathBuf,
    pub has_attractors: Option<bool>,
}

/// An exporter that only remembers what it was asked to export. Fails for indices in
/// `fail_on`.
#[derive(Default)]
pub struct RecordingExporter {
    pub calls: Mutex<Vec<ExportCall>>,
    pub fail_on: HashSet<u64>,
}

impl RecordingExporter {
    pub fn failing_on(indices: &[u64]) -> RecordingExporter {
        RecordingExporter {
            calls: Mutex::new(Vec::new()),
            fail_on: indices.iter().copied().collect(),
        }
    }

    pub fn calls(&self) -> Vec<ExportCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl ModelExporter for RecordingExporter {
    fn export(&self, variant: &GeneratedVariant, directory: &Path) -> Result<(), VariantError> {
        if self.fail_on.contains(&variant.index) {
            return Err(VariantError::Export {
                name: variant.name.clone(),
                source: std::io::Error::other("simulated export failure"),
            });
        }
        self.calls.lock().unwrap().push(ExportCall {
            name: variant.name.clone(),
            index: variant.index,
            pattern: variant.pattern.clone(),
            directory: directory.to_path_buf(),
            has_attractors: variant.attractors.map(|(_, found)| found),
        });
        Ok(())
    }
}

/// Attractor oracle with a predictable answer: a variant "has attractors" iff its first
/// mutable equation uses `or` (i.e., the most significant bit of the index is set). Fails
/// for models named in `fail_on`.
pub struct LeadingBitOracle {
    pub fail_on: Vec<String>,
}

impl AttractorOracle for LeadingBitOracle {
    fn kind(&self) -> AttractorKind {
        AttractorKind::FixedPoints
    }

    fn has_attractors(&self, model: &LogicalModel, _directory: &Path) -> Result<bool, VariantError> {
        if self.fail_on.iter().any(|it| it == model.name()) {
            return Err(VariantError::AttractorComputation {
                name: model.name().to_string(),
                message: "simulated failure".to_string(),
            });
        }
        let first = (0..model.equation_count())
            .map(|it| model.link_operator(it))
            .find(|it| it.is_mutable());
        Ok(first == Some(bit_to_operator(true)))
    }
}
