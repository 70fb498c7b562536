/// Defines a trait for stateful kinetic transformation models
///
/// A kinetic model (fission-track annealing, vitrinite maturation, biomarker
/// isomerisation) accumulates transformation state while being advanced one
/// timestep at a time. The advancing order is significant: the models are
/// path-dependent and not commutative under reordering of timesteps.
pub trait KineticModel {
    /// Advances the internal kinetic state over one timestep
    ///
    /// # Input
    ///
    /// * `duration` -- size of the timestep in s (held at constant temperature)
    /// * `temperature` -- absolute temperature in K during the timestep
    fn advance_state(&mut self, duration: f64, temperature: f64);
}
