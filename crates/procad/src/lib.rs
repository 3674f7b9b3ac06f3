#![warn(missing_docs)]

//! Parametric component mesh generation engine.
//!
//! Turns a [`ComponentSpec`] — family tag, sparse dimensions, material —
//! into a triangle [`Mesh`] and derived [`EngineeringProperties`]. The
//! [`Engine`] holds a read-only family→generator registry built once at
//! construction; generation is a pure function of the request, so one
//! engine instance can be shared across threads without locking, and
//! identical requests always produce identical output.
//!
//! # Example
//!
//! ```
//! use procad::Engine;
//! use procad_spec::{ComponentSpec, Dimensions};
//!
//! let engine = Engine::new();
//! let spec = ComponentSpec::new(
//!     "gear",
//!     Dimensions {
//!         diameter: Some(50.0),
//!         teeth: Some(20),
//!         values: vec![50.0, 10.0],
//!         ..Default::default()
//!     },
//!     "Steel",
//! );
//! let component = engine.generate(&spec).unwrap();
//! assert_eq!(component.mesh.parameters.module, Some(2.5));
//! assert!(component.properties.mass > 0.0);
//! ```

pub use procad_generators;
pub use procad_math;
pub use procad_mesh;
pub use procad_properties;
pub use procad_spec;

mod error;

pub use error::{GenerateError, Result};

use std::collections::HashMap;

use procad_generators as generators;
use procad_mesh::Mesh;
use procad_properties::EngineeringProperties;
use procad_spec::{ComponentFamily, ComponentSpec, Dimensions};
use serde::{Deserialize, Serialize};

/// A primitive generator: pure mapping from dimensions to mesh.
pub type GeneratorFn = fn(&Dimensions) -> Mesh;

/// A generated component: mesh, derived properties, and the diagnostic
/// feature checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// The generated triangle mesh.
    pub mesh: Mesh,
    /// Derived engineering properties.
    pub properties: EngineeringProperties,
    /// Ordered human-readable summary of the recognized inputs.
    /// Diagnostic only; not consumed programmatically.
    pub feature_checklist: Vec<String>,
}

/// The generation engine.
///
/// Construction builds the family→generator registry; afterwards the
/// engine is immutable.
pub struct Engine {
    registry: HashMap<ComponentFamily, GeneratorFn>,
}

impl Engine {
    /// Build an engine with all twelve family generators registered.
    pub fn new() -> Self {
        let mut registry: HashMap<ComponentFamily, GeneratorFn> = HashMap::new();
        registry.insert(ComponentFamily::Gear, generators::gear as GeneratorFn);
        registry.insert(ComponentFamily::Shaft, generators::shaft);
        registry.insert(ComponentFamily::Bearing, generators::bearing);
        registry.insert(ComponentFamily::Bracket, generators::bracket);
        registry.insert(ComponentFamily::Plate, generators::plate);
        registry.insert(ComponentFamily::Bolt, generators::bolt);
        registry.insert(ComponentFamily::Cube, generators::cube);
        registry.insert(ComponentFamily::Prism, generators::prism);
        registry.insert(ComponentFamily::Cylinder, generators::cylinder);
        registry.insert(ComponentFamily::Sphere, generators::sphere);
        registry.insert(ComponentFamily::Cone, generators::cone);
        registry.insert(ComponentFamily::Pyramid, generators::pyramid);
        Self { registry }
    }

    /// Generate a component for `spec`.
    ///
    /// Unknown family tags route to the generic-solid fallback rather
    /// than failing; the only error is a declared dimension outside the
    /// valid range.
    pub fn generate(&self, spec: &ComponentSpec) -> Result<Component> {
        validate_dimensions(&spec.dimensions)?;
        let mesh = match self.generator_for(&spec.family) {
            Some(generator) => generator(&spec.dimensions),
            None => generators::generic_solid(&spec.dimensions),
        };
        Ok(self.finish(spec, mesh))
    }

    /// Like [`generate`](Self::generate), but surfaces unknown family
    /// tags as [`GenerateError::UnknownFamily`] instead of falling back
    /// to the generic solid.
    pub fn generate_strict(&self, spec: &ComponentSpec) -> Result<Component> {
        validate_dimensions(&spec.dimensions)?;
        let generator = self
            .generator_for(&spec.family)
            .ok_or_else(|| GenerateError::UnknownFamily(spec.family.clone()))?;
        Ok(self.finish(spec, generator(&spec.dimensions)))
    }

    fn generator_for(&self, tag: &str) -> Option<GeneratorFn> {
        ComponentFamily::from_tag(tag).and_then(|family| self.registry.get(&family).copied())
    }

    fn finish(&self, spec: &ComponentSpec, mesh: Mesh) -> Component {
        let properties = procad_properties::compute(&mesh, &spec.material);
        let feature_checklist = feature_checklist(spec);
        Component {
            mesh,
            properties,
            feature_checklist,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

fn check(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(GenerateError::InvalidDimension {
            name: name.to_string(),
            value,
        });
    }
    Ok(())
}

/// Reject degenerate declared dimensions before dispatch, so no
/// generator divides by zero or emits NaN coordinates. Absent fields are
/// fine — they resolve to family defaults.
fn validate_dimensions(dims: &Dimensions) -> Result<()> {
    for (i, &v) in dims.values.iter().enumerate() {
        check(&format!("values[{i}]"), v)?;
    }
    let fields = [
        ("diameter", dims.diameter),
        ("radius", dims.radius),
        ("height", dims.height),
        ("length", dims.length),
        ("width", dims.width),
        ("size", dims.size),
        ("base_width", dims.base_width),
        ("base_depth", dims.base_depth),
        ("base_height", dims.base_height),
    ];
    for (name, field) in fields {
        if let Some(v) = field {
            check(name, v)?;
        }
    }
    if dims.teeth == Some(0) {
        return Err(GenerateError::InvalidDimension {
            name: "teeth".to_string(),
            value: 0.0,
        });
    }
    Ok(())
}

/// Ordered diagnostic summary of the recognized inputs: component type,
/// material, then whichever dimension details were declared.
pub fn feature_checklist(spec: &ComponentSpec) -> Vec<String> {
    let mut items = vec![
        format!("Component type: {}", spec.family),
        format!("Material: {}", spec.material),
    ];
    let dims = &spec.dimensions;
    if !dims.values.is_empty() {
        items.push(format!(
            "Dimensions: {} parameters extracted",
            dims.values.len()
        ));
    }
    if let Some(teeth) = dims.teeth {
        items.push(format!("Gear teeth: {teeth}"));
    }
    if let Some(diameter) = dims.diameter {
        items.push(format!("Diameter: {diameter} mm"));
    }
    items
}
