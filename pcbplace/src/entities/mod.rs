mod board;
mod component;
mod constraint;
mod instance;
mod keepout;
mod layout;
mod placed_component;
mod placement_rule;
mod solution;

#[doc(inline)]
pub use board::Board;
#[doc(inline)]
pub use component::ComponentSpec;
#[doc(inline)]
pub use constraint::Constraint;
#[doc(inline)]
pub use instance::Instance;
#[doc(inline)]
pub use keepout::KeepoutShape;
#[doc(inline)]
pub use keepout::KeepoutZone;
#[doc(inline)]
pub use layout::Layout;
#[doc(inline)]
pub use placed_component::PlacedComponent;
#[doc(inline)]
pub use placed_component::Placement;
#[doc(inline)]
pub use placement_rule::PlacementRule;
#[doc(inline)]
pub use solution::Solution;
