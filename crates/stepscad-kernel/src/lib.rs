#![warn(missing_docs)]

//! STEP import and meshing for stepscad.
//!
//! Thin layer over the truck CAD kernel: `ruststep` parses the exchange file,
//! `truck-stepio` builds B-rep shells, `truck-meshalgo` triangulates every
//! face in place and `truck-polymesh` provides the reference STL writer.
//!
//! # Example
//!
//! ```no_run
//! use stepscad_kernel::{MeshSettings, StepModel};
//! use stepscad_tessellate::tessellate_shape;
//!
//! let model = StepModel::open("part.step").unwrap();
//! let meshed = model.mesh(&MeshSettings::with_tolerance(0.1)).unwrap();
//! let faces = tessellate_shape(&meshed);
//! println!("{} faces, {} triangles", faces.len(), faces.num_triangles());
//! ```

mod error;
mod explore;
mod mesh;
mod reader;

pub use error::{KernelError, Result};
pub use explore::ExploreEvent;
pub use mesh::{MeshSettings, MeshedFace, MeshedModel, MeshedShell, DEFAULT_LINEAR_TOLERANCE};
pub use reader::StepModel;
