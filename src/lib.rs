//! Generate all link-operator variants of a logical model.
//!
//! An equation of a [`LogicalModel`](model::LogicalModel) that has both activating and
//! inhibiting regulators combines them using a link operator (`and` or `or`). A model with
//! `k` such equations therefore has `2^k` structurally distinct variants. This crate
//! enumerates them (exhaustively or as a seeded random sample), optionally checks every
//! variant for attractors, and exports the variants into a sharded results directory using
//! a fixed pool of independent workers.
//!
//! The main entry point is [`VariantGenerator`](orchestrator::VariantGenerator):
//!
//! ```no_run
//! # use biodivine_algo_link_variants::model::LogicalModel;
//! # use biodivine_algo_link_variants::orchestrator::{GeneratorConfig, VariantGenerator, Workers};
//! # use std::path::Path;
//! let model = LogicalModel::try_from_sif_file("./models/toy.sif").unwrap();
//! let config = GeneratorConfig::default().with_workers(Workers::Auto);
//! let generator = VariantGenerator::new(model, config).unwrap();
//! let report = generator.run(Path::new("./results")).unwrap();
//! println!("{report}");
//! ```

#[cfg(test)]
mod test_utils;

pub mod attractor;
#[cfg(feature = "build-binary")]
pub mod cli;
pub mod enumeration;
pub mod error;
pub mod model;
pub mod orchestrator;
pub mod output;
pub mod sampling;
pub mod worker;
