/*
MIT License

Copyright (c) 2023 Kagati Foundation

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::named_enum;

/// Register number as stored in a decoded operand.
pub type RegNum = u8;

/// All supported architectures have at most 255 general purpose registers.
/// The last one reads as zero and discards writes.
pub const RZ: RegNum = 255;

/// The always-true predicate is encoded as 7 on every architecture.
pub const PT: RegNum = 7;

/// The entire predicate register is encoded as 8.
pub const PR: RegNum = 8;

/// Uniform zero register.
pub const URZ: RegNum = 63;

/// Uniform always-true predicate.
pub const UPT: RegNum = 7;

/// Entire uniform predicate register.
pub const UPR: RegNum = 8;

pub const MAX_REG_NUM: RegNum = RZ;
pub const MAX_UREG_NUM: RegNum = URZ;
pub const MAX_PRED_NUM: RegNum = PR;
pub const MAX_UPRED_NUM: RegNum = UPR;

/// Ceiling on operand text, register property and generic buffers.
pub const MAX_CHARS: usize = 256;

/// Loads and stores carry one memory reference, LDGSTS carries two.
pub const MAX_NUM_MREF_PER_INSTR: usize = 2;

named_enum! {
    /// Register file a register or predicate number indexes into.
    pub enum RegFile {
        Gpr => "GPR",
        Ugpr => "UGPR",
        Pred => "PRED",
        UPred => "UPRED"
    }
}

impl RegFile {
    /// Largest number that is legal in this file.
    pub fn max_num(self) -> RegNum {
        match self {
            RegFile::Gpr => MAX_REG_NUM,
            RegFile::Ugpr => MAX_UREG_NUM,
            RegFile::Pred => MAX_PRED_NUM,
            RegFile::UPred => MAX_UPRED_NUM,
        }
    }

    /// Narrows a decoded number, or `None` when it is out of range.
    pub fn check(self, num: u32) -> Option<RegNum> {
        if num <= u32::from(self.max_num()) {
            RegNum::try_from(num).ok()
        } else {
            None
        }
    }

    pub fn is_uniform(self) -> bool {
        matches!(self, RegFile::Ugpr | RegFile::UPred)
    }

    pub fn is_predicate(self) -> bool {
        matches!(self, RegFile::Pred | RegFile::UPred)
    }

    /// `R`, `UR`, `P` or `UP`.
    pub fn prefix(self) -> &'static str {
        match self {
            RegFile::Gpr => "R",
            RegFile::Ugpr => "UR",
            RegFile::Pred => "P",
            RegFile::UPred => "UP",
        }
    }

    /// Name of the architecturally reserved number, if `num` is one.
    pub fn reserved_name(self, num: RegNum) -> Option<&'static str> {
        match (self, num) {
            (RegFile::Gpr, RZ) => Some("RZ"),
            (RegFile::Ugpr, URZ) => Some("URZ"),
            (RegFile::Pred, PT) => Some("PT"),
            (RegFile::Pred, PR) => Some("PR"),
            (RegFile::UPred, UPT) => Some("UPT"),
            (RegFile::UPred, UPR) => Some("UPR"),
            _ => None
        }
    }

    /// Debug label such as `R6`, `URZ` or `PT`.
    pub fn reg_name(self, num: RegNum) -> String {
        match self.reserved_name(num) {
            Some(name) => name.to_string(),
            None => format!("{}{}", self.prefix(), num)
        }
    }
}

named_enum! {
    /// Stride or size qualifier on a register reference.
    #[derive(Default)]
    pub enum RegModifier {
        #[default]
        NoMod => "NO_MOD",

        /* stride modifiers */
        X1 => "X1",
        X4 => "X4",
        X8 => "X8",
        X16 => "X16",

        /* size modifiers */
        U32 => "U32",
        U64 => "64"
    }
}

lazy_static! {
    static ref MODIFIER_SUFFIXES: HashMap<&'static str, RegModifier> = {
        let mut _suffixes: HashMap<&'static str, RegModifier> = HashMap::new();
        _suffixes.insert("X1", RegModifier::X1);
        _suffixes.insert("X4", RegModifier::X4);
        _suffixes.insert("X8", RegModifier::X8);
        _suffixes.insert("X16", RegModifier::X16);
        _suffixes.insert("U32", RegModifier::U32);
        _suffixes.insert("U64", RegModifier::U64);
        _suffixes.insert("64", RegModifier::U64);
        _suffixes
    };
}

impl RegModifier {
    pub fn is_stride(self) -> bool {
        self.stride().is_some()
    }

    pub fn is_size(self) -> bool {
        self.width_bytes().is_some()
    }

    /// Address multiplier applied by a stride modifier.
    pub fn stride(self) -> Option<u32> {
        match self {
            RegModifier::X1 => Some(1),
            RegModifier::X4 => Some(4),
            RegModifier::X8 => Some(8),
            RegModifier::X16 => Some(16),
            _ => None
        }
    }

    /// Access width of a size modifier.
    pub fn width_bytes(self) -> Option<u32> {
        match self {
            RegModifier::U32 => Some(4),
            RegModifier::U64 => Some(8),
            _ => None
        }
    }

    /// Recognizes a single property suffix, with or without its leading dot.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        let suffix = suffix.strip_prefix('.').unwrap_or(suffix);
        MODIFIER_SUFFIXES.get(suffix).copied()
    }
}
