//! Typed identifiers for rooms, routes, and tokens.
//!
//! Each id wraps a `u32` index into the owning collection: `NodeId` into a
//! graph's rooms, `RouteId` into the discovered route list, `TokenId` into
//! the token numbering.  `Display` renders the label used in output, so a
//! token prints as `L4`.

use std::fmt;

macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident(u32) => $label:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            /// Marks an unset slot in id-indexed tables.
            pub const INVALID: $name = $name(u32::MAX);

            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, "{}"), self.0)
            }
        }
    };
}

typed_id! {
    /// Index of a room in a `Graph`, in node insertion order.
    pub struct NodeId(u32) => "room #";
}

typed_id! {
    /// Position of a route in the list produced by route discovery.
    pub struct RouteId(u32) => "route #";
}

typed_id! {
    /// Token (ant) number.  Assigned from 1 upward, route-major.
    pub struct TokenId(u32) => "L";
}

impl TokenId {
    /// The first id handed out by the simulator.
    pub const FIRST: TokenId = TokenId(1);
}
