//! Closed garment vocabularies.
//!
//! Every attribute axis the scorer weighs is a fixed enumeration with a
//! dense `index()`, so weight tables can be fixed-size arrays and an
//! unknown key is impossible by construction.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Garment slot an outfit can fill. The declaration order is also the
/// fixed display order for output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Top,
    Bottom,
    Shoes,
    Mono,
}

impl Role {
    pub const COUNT: usize = 4;
    pub const ALL: [Role; Self::COUNT] = [Role::Top, Role::Bottom, Role::Shoes, Role::Mono];

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Top => "top",
            Role::Bottom => "bottom",
            Role::Shoes => "shoes",
            Role::Mono => "mono",
        };
        write!(f, "{s}")
    }
}

/// Fixed 11-colour palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colour {
    Black,
    White,
    Grey,
    Beige,
    Brown,
    Red,
    Blue,
    Green,
    Yellow,
    Pink,
    Purple,
}

impl Colour {
    pub const COUNT: usize = 11;
    pub const ALL: [Colour; Self::COUNT] = [
        Colour::Black,
        Colour::White,
        Colour::Grey,
        Colour::Beige,
        Colour::Brown,
        Colour::Red,
        Colour::Blue,
        Colour::Green,
        Colour::Yellow,
        Colour::Pink,
        Colour::Purple,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Broadly pairable colours: they sit next to almost anything.
    pub fn is_neutral(self) -> bool {
        matches!(
            self,
            Colour::Black | Colour::White | Colour::Grey | Colour::Beige | Colour::Brown
        )
    }
}

/// Coarse style tag from a fixed 9-member vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vibe {
    Streetwear,
    Sporty,
    Casual,
    Chic,
    Minimal,
    Vintage,
    Formal,
    Grunge,
    Y2k,
}

impl Vibe {
    pub const COUNT: usize = 9;
    pub const ALL: [Vibe; Self::COUNT] = [
        Vibe::Streetwear,
        Vibe::Sporty,
        Vibe::Casual,
        Vibe::Chic,
        Vibe::Minimal,
        Vibe::Vintage,
        Vibe::Formal,
        Vibe::Grunge,
        Vibe::Y2k,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Vibes that read well together across garments even though they differ.
    pub fn complements(self, other: Vibe) -> bool {
        matches!(
            (self, other),
            (Vibe::Streetwear, Vibe::Sporty)
                | (Vibe::Sporty, Vibe::Streetwear)
                | (Vibe::Chic, Vibe::Minimal)
                | (Vibe::Minimal, Vibe::Chic)
        )
    }
}

/// Garment cut. Meaningful only for top/bottom items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fit {
    Oversized,
    Regular,
    Slim,
    Cropped,
}

impl Fit {
    pub const COUNT: usize = 4;
    pub const ALL: [Fit; Self::COUNT] = [Fit::Oversized, Fit::Regular, Fit::Slim, Fit::Cropped];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Sport association. `None` means the garment carries no sport identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    #[default]
    None,
    Football,
    Basketball,
    Tennis,
    Running,
    Cycling,
    Motorsport,
}

impl Sport {
    pub const COUNT: usize = 7;
    pub const ALL: [Sport; Self::COUNT] = [
        Sport::None,
        Sport::Football,
        Sport::Basketball,
        Sport::Tennis,
        Sport::Running,
        Sport::Cycling,
        Sport::Motorsport,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_some(self) -> bool {
        self != Sport::None
    }
}

/// Gender a catalog item is cut for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Men,
    Women,
    Unisex,
}

/// Gender the request targets. `Any` imposes no restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetGender {
    #[default]
    Any,
    Men,
    Women,
    Unisex,
}

impl TargetGender {
    /// Whether an item cut for `gender` can serve this target.
    pub fn admits(self, gender: Gender) -> bool {
        match self {
            TargetGender::Any => true,
            TargetGender::Men => matches!(gender, Gender::Men | Gender::Unisex),
            TargetGender::Women => matches!(gender, Gender::Women | Gender::Unisex),
            TargetGender::Unisex => gender == Gender::Unisex,
        }
    }
}
