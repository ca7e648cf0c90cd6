// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use std::fmt;

/// Returned when a name does not belong to the enumeration it was
/// looked up in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownName {
    pub enum_name: &'static str,
    pub name: String
}

impl fmt::Display for UnknownName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} name `{}`", self.enum_name, self.name)
    }
}

impl std::error::Error for UnknownName {}

/// Declares a closed enumeration together with its name table.
///
/// Each variant is written next to its name, so the table and the
/// ordinals cannot drift apart. Ordinals follow declaration order and
/// index straight into `NAMES`.
///
/// ```
/// sassir_target::named_enum! {
///     pub enum Width {
///         Narrow => "NARROW",
///         Wide => "WIDE",
///     }
/// }
///
/// assert_eq!(Width::Wide.name(), "WIDE");
/// assert_eq!(Width::NAMES.len(), Width::COUNT);
/// assert_eq!("NARROW".parse::<Width>().ok(), Some(Width::Narrow));
/// ```
#[macro_export]
macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $label:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant
            ),+
        }

        impl $name {
            /// Every variant, in ordinal order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Name of every variant, in ordinal order.
            pub const NAMES: &'static [&'static str] = &[$($label),+];

            pub const COUNT: usize = Self::ALL.len();

            pub const fn name(self) -> &'static str {
                Self::NAMES[self as usize]
            }

            pub const fn ordinal(self) -> usize {
                self as usize
            }

            pub fn from_ordinal(ordinal: usize) -> Option<Self> {
                Self::ALL.get(ordinal).copied()
            }

            pub fn from_name(name: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|variant| variant.name() == name)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::names::UnknownName;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_name(s).ok_or_else(|| $crate::names::UnknownName {
                    enum_name: stringify!($name),
                    name: s.to_string()
                })
            }
        }
    };
}
