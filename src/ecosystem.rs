//! The external ecosystems whose cap/join vocabularies are catalogued.
//!
//! Each [`Ecosystem`] is one independent system with its own naming scheme
//! and (sometimes) numeric codes for stroke styles. Ecosystems parse from
//! short lowercase keys, and a key may have historical aliases: the Qt
//! toolkit appears in older material both as "qt" and as "pyqt", which name
//! the same underlying enumeration and therefore the same ecosystem here.

use serde::{Deserialize, Serialize};

use crate::RegistryError;

/// An external system that defines named line cap and join styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ecosystem {
    /// AutoCAD CTB/STB plot-style files (`END_STYLE_*` / `JOIN_STYLE_*`).
    PlotStyle,
    /// DXF drawing files, via the `$ENDCAPS` and `$JOINSTYLE` header
    /// variables.
    Dxf,
    /// The matplotlib plotting library (`capstyle` / `joinstyle` strings).
    Matplotlib,
    /// The Qt GUI toolkit (`Qt::PenCapStyle` / `Qt::PenJoinStyle` flags).
    /// Accepts the historical alias "pyqt".
    #[serde(alias = "pyqt")]
    Qt,
    /// SVG markup (`stroke-linecap` / `stroke-linejoin` keywords).
    Svg,
}

impl Ecosystem {
    /// All ecosystems, in a fixed order. Useful for exhaustive iteration.
    pub const ALL: [Ecosystem; 5] = [
        Ecosystem::PlotStyle,
        Ecosystem::Dxf,
        Ecosystem::Matplotlib,
        Ecosystem::Qt,
        Ecosystem::Svg,
    ];

    /// The canonical lowercase key for this ecosystem.
    pub fn label(self) -> &'static str {
        match self {
            Ecosystem::PlotStyle => "plot-style",
            Ecosystem::Dxf => "dxf",
            Ecosystem::Matplotlib => "matplotlib",
            Ecosystem::Qt => "qt",
            Ecosystem::Svg => "svg",
        }
    }

    /// Every key this ecosystem answers to, canonical label first.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Ecosystem::PlotStyle => &["plot-style", "ctb"],
            Ecosystem::Dxf => &["dxf"],
            Ecosystem::Matplotlib => &["matplotlib", "mpl"],
            Ecosystem::Qt => &["qt", "pyqt"],
            Ecosystem::Svg => &["svg"],
        }
    }
}

impl std::fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Ecosystem {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.to_ascii_lowercase();
        for eco in Ecosystem::ALL {
            if eco.aliases().contains(&key.as_str()) {
                return Ok(eco);
            }
        }
        Err(RegistryError::UnknownEcosystem {
            name: s.to_string(),
        })
    }
}
