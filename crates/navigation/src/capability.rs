//! Capability contracts implemented by application route and modal types.
//!
//! Applications usually implement these on closed enums and produce their
//! view by matching over the variants.

use std::{fmt::Debug, hash::Hash};

/// A page that can be pushed onto the navigation path.
pub trait CoordinatorScreen: Clone + Eq + Hash + Debug + 'static {
    type View;

    fn build(&self) -> Self::View;
}

/// An item that can be presented in the sheet slot.
pub trait CoordinatorSheet: Clone + Eq + Hash + Debug + 'static {
    type View;

    /// Stable identity, distinct from equality. Renderers compare ids to
    /// decide whether a presented sheet must be torn down and rebuilt.
    fn id(&self) -> String;

    fn build(&self) -> Self::View;
}

/// An item that can be presented in the full-screen cover slot.
pub trait CoordinatorFullScreenCover: Clone + Eq + Hash + Debug + 'static {
    type View;

    /// Stable identity, distinct from equality.
    fn id(&self) -> String;

    fn build(&self) -> Self::View;
}
