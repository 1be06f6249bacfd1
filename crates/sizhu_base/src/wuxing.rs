//! Wuxing (五行, five phases) and Yinyang (阴阳) polarity.
//!
//! The five phases follow the generating order 木 → 火 → 土 → 金 → 水 → 木.
//! Each phase controls the phase two steps ahead of it in that order
//! (木克土, 火克金, 土克水, 金克木, 水克火).

use std::fmt;

/// The five phases, in generating order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Wuxing {
    Mu,
    Huo,
    Tu,
    Jin,
    Shui,
}

/// All five phases in generating order (0 = 木).
pub const ALL_WUXINGS: [Wuxing; 5] = [Wuxing::Mu, Wuxing::Huo, Wuxing::Tu, Wuxing::Jin, Wuxing::Shui];

impl Wuxing {
    /// Chinese character of the phase.
    pub const fn hanzi(self) -> char {
        match self {
            Self::Mu => '木',
            Self::Huo => '火',
            Self::Tu => '土',
            Self::Jin => '金',
            Self::Shui => '水',
        }
    }

    /// English name of the phase.
    pub const fn english(self) -> &'static str {
        match self {
            Self::Mu => "wood",
            Self::Huo => "fire",
            Self::Tu => "earth",
            Self::Jin => "metal",
            Self::Shui => "water",
        }
    }

    /// 0-based index in generating order (木=0 .. 水=4).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The phase this one generates (我生).
    pub const fn generates(self) -> Wuxing {
        ALL_WUXINGS[(self.index() as usize + 1) % 5]
    }

    /// The phase this one controls (我克).
    pub const fn controls(self) -> Wuxing {
        ALL_WUXINGS[(self.index() as usize + 2) % 5]
    }

    /// How `other` relates to `self`, seen from `self`.
    pub const fn relation_to(self, other: Wuxing) -> WuxingRelation {
        match (other.index() as usize + 5 - self.index() as usize) % 5 {
            0 => WuxingRelation::Same,
            1 => WuxingRelation::Generates,
            2 => WuxingRelation::Controls,
            3 => WuxingRelation::ControlledBy,
            _ => WuxingRelation::GeneratedBy,
        }
    }
}

impl fmt::Display for Wuxing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hanzi())
    }
}

/// Relation of a second phase to a reference phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WuxingRelation {
    /// 同我
    Same,
    /// 我生
    Generates,
    /// 我克
    Controls,
    /// 克我
    ControlledBy,
    /// 生我
    GeneratedBy,
}

/// Polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Yinyang {
    Yang,
    Yin,
}

impl Yinyang {
    /// Chinese character of the polarity.
    pub const fn hanzi(self) -> char {
        match self {
            Self::Yang => '阳',
            Self::Yin => '阴',
        }
    }

    /// English name of the polarity.
    pub const fn english(self) -> &'static str {
        match self {
            Self::Yang => "yang",
            Self::Yin => "yin",
        }
    }

    /// Polarity of a cycle position: even indices are yang.
    pub const fn from_parity(index: u8) -> Yinyang {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }
}

impl fmt::Display for Yinyang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hanzi())
    }
}

/// Element and polarity of a stem or branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Traits {
    pub wuxing: Wuxing,
    pub yinyang: Yinyang,
}

impl Traits {
    pub const fn new(wuxing: Wuxing, yinyang: Yinyang) -> Self {
        Self { wuxing, yinyang }
    }
}

/// Renders as polarity followed by element, e.g. `阳木`.
impl fmt::Display for Traits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.yinyang, self.wuxing)
    }
}
