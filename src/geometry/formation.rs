use super::Column;
use crate::base::{LayerKind, ParamPorosity};
use crate::material::Porosity;
use crate::StrError;

/// Holds one stratigraphic formation (layer) of the basin
///
/// A formation couples a representative [Column] with the porosity law of its
/// lithology and the [LayerKind] selecting the interpolation path used when
/// sample positions are reconstructed for past timesteps.
pub struct Formation {
    /// Name of the formation as used in sample bindings
    ///
    /// **(readonly)**
    pub name: String,

    /// Kind of geometry evolution (compaction-driven or prescribed)
    ///
    /// **(readonly)**
    pub kind: LayerKind,

    /// Porosity law of the formation's lithology
    pub porosity: Porosity,

    /// Representative vertical column of this formation
    pub column: Column,
}

impl Formation {
    /// Allocates a new instance
    pub fn new(name: &str, kind: LayerKind, param: &ParamPorosity, max_elements: usize) -> Result<Self, StrError> {
        Ok(Formation {
            name: name.to_string(),
            kind,
            porosity: Porosity::new(param)?,
            column: Column::new(max_elements)?,
        })
    }

    /// Returns true for layers whose geometry is prescribed (not compaction-driven)
    #[inline]
    pub fn is_mobile(&self) -> bool {
        self.kind.is_mobile()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Formation;
    use crate::base::{LayerKind, SampleParams};
    use crate::StrError;

    #[test]
    fn new_works() -> Result<(), StrError> {
        let shale = Formation::new("Ness", LayerKind::NonMobile, &SampleParams::param_standard_shale(), 4)?;
        assert_eq!(shale.name, "Ness");
        assert_eq!(shale.column.max_elements(), 4);
        assert!(!shale.is_mobile());

        let salt = Formation::new("Zechstein", LayerKind::Mobile, &SampleParams::param_mobile_salt(), 2)?;
        assert!(salt.is_mobile());
        Ok(())
    }
}
