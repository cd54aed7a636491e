/// Immutable nominal footprint of a component, keyed by its identity.
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentSpec {
    /// Index of the component within its instance
    pub id: usize,
    /// External identity, e.g. `"USB"`
    pub name: String,
    /// Nominal width (unrotated)
    pub width: f64,
    /// Nominal height (unrotated)
    pub height: f64,
}

