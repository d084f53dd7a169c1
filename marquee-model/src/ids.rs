use crate::error::ModelError;
use std::fmt;
use std::str::FromStr;

macro_rules! define_catalog_id {
    ($(#[$meta:meta])* $name:ident($inner:ty), $kind:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash,
        )]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize)
        )]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(pub $inner);

        impl $name {
            pub const fn new(raw: $inner) -> Self {
                Self(raw)
            }

            pub const fn get(self) -> $inner {
                self.0
            }
        }

        impl From<$inner> for $name {
            fn from(raw: $inner) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ModelError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                raw.trim().parse::<$inner>().map(Self).map_err(|_| {
                    ModelError::InvalidId {
                        kind: $kind,
                        raw: raw.to_string(),
                    }
                })
            }
        }
    };
}

define_catalog_id!(
    /// Catalog identifier of a title.
    MovieId(u64),
    "movie"
);

define_catalog_id!(
    /// Catalog identifier of a genre. Selection sets hold these directly
    /// rather than their string forms.
    GenreId(u32),
    "genre"
);

define_catalog_id!(
    /// Catalog identifier of a cast member.
    PersonId(u64),
    "person"
);
