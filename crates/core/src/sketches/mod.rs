//! Bundled example sketches.

pub mod fractal_tree;
pub mod map_sketch;
pub mod mitosis;
pub mod noise_1d;
pub mod purple_rain;
pub mod spirograph;
pub mod star_patterns;

use std::fmt;
use std::str::FromStr;

pub use fractal_tree::FractalTree;
pub use map_sketch::MapSketch;
pub use mitosis::Mitosis;
pub use noise_1d::Noise1D;
pub use purple_rain::PurpleRain;
pub use spirograph::Spirograph;
pub use star_patterns::StarPatterns;

use crate::sketch::Sketch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SketchKind {
    PurpleRain,
    FractalTree,
    Spirograph,
    StarPatterns,
    Mitosis,
    Noise1D,
    Map,
}

impl SketchKind {
    pub const ALL: [SketchKind; 7] = [
        SketchKind::PurpleRain,
        SketchKind::FractalTree,
        SketchKind::Spirograph,
        SketchKind::StarPatterns,
        SketchKind::Mitosis,
        SketchKind::Noise1D,
        SketchKind::Map,
    ];

    /// Kebab-case name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            SketchKind::PurpleRain => "purple-rain",
            SketchKind::FractalTree => "fractal-tree",
            SketchKind::Spirograph => "spirograph",
            SketchKind::StarPatterns => "star-patterns",
            SketchKind::Mitosis => "mitosis",
            SketchKind::Noise1D => "noise-1d",
            SketchKind::Map => "map",
        }
    }

    /// Fresh instance of the sketch, ready for `setup`.
    pub fn build(self) -> Box<dyn Sketch> {
        match self {
            SketchKind::PurpleRain => Box::new(PurpleRain::default()),
            SketchKind::FractalTree => Box::new(FractalTree::default()),
            SketchKind::Spirograph => Box::new(Spirograph::default()),
            SketchKind::StarPatterns => Box::new(StarPatterns::default()),
            SketchKind::Mitosis => Box::new(Mitosis::default()),
            SketchKind::Noise1D => Box::new(Noise1D::default()),
            SketchKind::Map => Box::new(MapSketch),
        }
    }
}

impl fmt::Display for SketchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSketch(pub String);

impl fmt::Display for UnknownSketch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = SketchKind::ALL.iter().map(|k| k.name()).collect();
        write!(f, "Unknown sketch '{}' (expected one of: {})", self.0, names.join(", "))
    }
}

impl std::error::Error for UnknownSketch {}

impl FromStr for SketchKind {
    type Err = UnknownSketch;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        SketchKind::ALL
            .into_iter()
            .find(|k| k.name() == wanted)
            .ok_or_else(|| UnknownSketch(s.to_string()))
    }
}
