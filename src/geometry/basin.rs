use super::Formation;
use crate::base::{LayerKind, ParamPorosity};
use crate::StrError;

/// Holds the stack of formations making up a sedimentary basin column
///
/// # Notation
///
/// Formations are stored in top-down stratigraphic order: index 0 is the
/// shallowest (youngest) formation, right below the sea bottom, and higher
/// indices go deeper. The formation id returned by [Basin::add_formation]
/// is the index into this stack.
pub struct Basin {
    /// Depth of the sea bottom (upper boundary of the uppermost formation) in m
    ///
    /// **(readonly)**
    pub sea_bottom_depth: f64,

    /// Stack of formations in top-down order
    formations: Vec<Formation>,
}

impl Basin {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `sea_bottom_depth` -- depth (m) of the sediment-water interface; must be ≥ 0
    pub fn new(sea_bottom_depth: f64) -> Result<Self, StrError> {
        if sea_bottom_depth < 0.0 {
            return Err("sea_bottom_depth must be ≥ 0");
        }
        Ok(Basin {
            sea_bottom_depth,
            formations: Vec::new(),
        })
    }

    /// Appends a formation below the ones already added and returns its id
    ///
    /// Formations must be added in top-down stratigraphic order.
    pub fn add_formation(
        &mut self,
        name: &str,
        kind: LayerKind,
        param: &ParamPorosity,
        max_elements: usize,
    ) -> Result<usize, StrError> {
        self.formations.push(Formation::new(name, kind, param, max_elements)?);
        Ok(self.formations.len() - 1)
    }

    /// Returns the number of formations
    #[inline]
    pub fn n_formations(&self) -> usize {
        self.formations.len()
    }

    /// Returns an access to a formation
    ///
    /// # Panics
    ///
    /// This function panics if the formation id is out of range.
    #[inline]
    pub fn formation(&self, formation_id: usize) -> &Formation {
        &self.formations[formation_id]
    }

    /// Returns a mutable access to a formation
    ///
    /// # Panics
    ///
    /// This function panics if the formation id is out of range.
    #[inline]
    pub fn formation_mut(&mut self, formation_id: usize) -> &mut Formation {
        &mut self.formations[formation_id]
    }

    /// Returns an access to the whole formation stack (top-down order)
    #[inline]
    pub fn formations(&self) -> &[Formation] {
        &self.formations
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Basin;
    use crate::base::{LayerKind, SampleParams};
    use crate::StrError;

    #[test]
    fn new_handles_wrong_input() {
        assert_eq!(Basin::new(-1.0).err(), Some("sea_bottom_depth must be ≥ 0"));
    }

    #[test]
    fn add_formation_works() -> Result<(), StrError> {
        let mut basin = Basin::new(100.0)?;
        assert_eq!(basin.n_formations(), 0);
        let top = basin.add_formation("Hordaland", LayerKind::NonMobile, &SampleParams::param_standard_shale(), 3)?;
        let bot = basin.add_formation("Zechstein", LayerKind::Mobile, &SampleParams::param_mobile_salt(), 2)?;
        assert_eq!(top, 0);
        assert_eq!(bot, 1);
        assert_eq!(basin.n_formations(), 2);
        assert_eq!(basin.formation(top).name, "Hordaland");
        assert!(basin.formation(bot).is_mobile());
        basin.formation_mut(top).column.add_solid_thickness_point(0, 0.0, 50.0)?;
        assert_eq!(basin.formations().len(), 2);
        Ok(())
    }
}
