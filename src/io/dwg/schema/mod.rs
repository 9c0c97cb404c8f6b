//! Declarative object layouts.
//!
//! Each object type is described by a static [`TypeSchema`]: an ordered list
//! of [`FieldSpec`] entries giving the field name, its bit encoding, the
//! versions it exists in, an optional default and an optional repeat count.
//! One interpreter, [`FieldWalker`], writes any schema against any
//! [`FieldSource`], so adding a type means adding a table, not code.

pub mod tables;
mod walker;

pub use walker::{FieldWalker, Pass};

use crate::document::{FieldMap, FieldValue, ObjectRef};
use crate::io::dwg::reference_type::{DwgReferenceType, ExpectedCode};
use crate::types::{Color, DxfVersion, Vector2, Vector3};
use std::borrow::Cow;

/// Bit encoding of a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Bit
    B,
    /// 2 bits
    BB,
    /// BitShort
    BS,
    /// BitLong
    BL,
    /// BitLongLong
    BLL,
    /// BitDouble
    BD,
    /// Raw char
    RC,
    /// Raw short
    RS,
    /// Raw long
    RL,
    /// Raw double
    RD,
    /// 2 raw doubles
    Rd2,
    /// 3 raw doubles
    Rd3,
    /// 2 BitDoubles
    Bd2,
    /// 3 BitDoubles
    Bd3,
    /// BitDouble relative to a default
    Dd(DdDefault),
    /// Thickness
    Bt,
    /// Extrusion
    Be,
    /// Color
    Cmc,
    /// Variable text
    Tv,
    /// Julian date as BL day + BL milliseconds
    TimeBl,
    /// Julian date as RL day + RL milliseconds
    TimeRl,
    /// The low `n` bits of an integer, most significant first
    Bits(u8),
    /// Handle reference, written in the handle stream
    H(ExpectedCode),
    /// Handle written inline in the data stream
    Hd,
    /// Raw bytes; the count comes from `repeat` when given
    Bytes,
    /// Exactly `n` raw bytes, zero padded
    FixedBytes(usize),
    /// 2D points: the first as 2 raw doubles, each following one as two
    /// DDs relative to its predecessor
    Rd2Chain,
    /// Repeated nested record
    Records(&'static [FieldSpec]),
    /// Fields shared between layouts, read from the same source
    Group(&'static [FieldSpec]),
}

/// Default a DD field is written relative to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DdDefault {
    Value(f64),
    /// Another field of the same record, already written
    Field(&'static str),
}

/// Inclusive lower and inclusive/exclusive upper version bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionRange {
    pub since: Option<DxfVersion>,
    pub upper: UpperBound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpperBound {
    Unbounded,
    Until(DxfVersion),
    Before(DxfVersion),
}

impl VersionRange {
    pub const ALL: VersionRange = VersionRange {
        since: None,
        upper: UpperBound::Unbounded,
    };

    pub fn contains(&self, version: DxfVersion) -> bool {
        let low = self.since.map_or(true, |s| version >= s);
        let high = match self.upper {
            UpperBound::Unbounded => true,
            UpperBound::Until(v) => version <= v,
            UpperBound::Before(v) => version < v,
        };
        low && high
    }
}

/// Value written when a field is absent from the payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldDefault {
    Bool(bool),
    Int(i64),
    Double(f64),
    Point2(f64, f64),
    Point3(f64, f64, f64),
    Text(&'static str),
    Color(Color),
}

impl FieldDefault {
    pub fn to_value(self) -> FieldValue {
        match self {
            FieldDefault::Bool(b) => FieldValue::Bool(b),
            FieldDefault::Int(i) => FieldValue::Int(i),
            FieldDefault::Double(d) => FieldValue::Double(d),
            FieldDefault::Point2(x, y) => FieldValue::Point2(Vector2::new(x, y)),
            FieldDefault::Point3(x, y, z) => FieldValue::Point3(Vector3::new(x, y, z)),
            FieldDefault::Text(t) => FieldValue::Text(t.to_string()),
            FieldDefault::Color(c) => FieldValue::Color(c),
        }
    }
}

/// Presence test on an earlier field of the same record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    IsTrue(&'static str),
    IsFalse(&'static str),
    FlagSet(&'static str, i64),
    FlagClear(&'static str, i64),
    Equals(&'static str, i64),
    NotEquals(&'static str, i64),
    NotNegative(&'static str),
}

impl Condition {
    pub fn field(&self) -> &'static str {
        match *self {
            Condition::IsTrue(f)
            | Condition::IsFalse(f)
            | Condition::FlagSet(f, _)
            | Condition::FlagClear(f, _)
            | Condition::Equals(f, _)
            | Condition::NotEquals(f, _)
            | Condition::NotNegative(f) => f,
        }
    }

    pub fn holds(&self, value: f64) -> bool {
        let int = value as i64;
        match *self {
            Condition::NotNegative(_) => value >= 0.0,
            Condition::IsTrue(_) => int != 0,
            Condition::IsFalse(_) => int == 0,
            Condition::FlagSet(_, mask) => int & mask != 0,
            Condition::FlagClear(_, mask) => int & mask == 0,
            Condition::Equals(_, v) => int == v,
            Condition::NotEquals(_, v) => int != v,
        }
    }
}

/// One field of a layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub versions: VersionRange,
    pub default: Option<FieldDefault>,
    /// Name of the earlier field holding the element count
    pub repeat: Option<&'static str>,
    pub condition: Option<Condition>,
}

/// Field present in every version.
pub const fn field(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        name,
        kind,
        versions: VersionRange::ALL,
        default: None,
        repeat: None,
        condition: None,
    }
}

impl FieldSpec {
    /// Present from `version` on.
    pub const fn since(mut self, version: DxfVersion) -> Self {
        self.versions.since = Some(version);
        self
    }

    /// Present up to and including `version`.
    pub const fn until(mut self, version: DxfVersion) -> Self {
        self.versions.upper = UpperBound::Until(version);
        self
    }

    /// Present in versions strictly before `version`.
    pub const fn before(mut self, version: DxfVersion) -> Self {
        self.versions.upper = UpperBound::Before(version);
        self
    }

    pub const fn default(mut self, default: FieldDefault) -> Self {
        self.default = Some(default);
        self
    }

    /// Repeated as many times as the value of `count`.
    pub const fn repeat(mut self, count: &'static str) -> Self {
        self.repeat = Some(count);
        self
    }

    pub const fn when(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Handle fields are written in the trailing handle pass.
    pub fn is_handle(&self) -> bool {
        matches!(self.kind, FieldKind::H(_))
    }
}

pub const SOFT_OWNER: FieldKind = FieldKind::H(ExpectedCode::Code(DwgReferenceType::SoftOwnership));
pub const HARD_OWNER: FieldKind = FieldKind::H(ExpectedCode::Code(DwgReferenceType::HardOwnership));
pub const SOFT_PTR: FieldKind = FieldKind::H(ExpectedCode::Code(DwgReferenceType::SoftPointer));
pub const HARD_PTR: FieldKind = FieldKind::H(ExpectedCode::Code(DwgReferenceType::HardPointer));
pub const ANY_HANDLE: FieldKind = FieldKind::H(ExpectedCode::Any);

/// Supertype a layout belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Supertype {
    Entity,
    Object,
}

/// Layout of one object type.
#[derive(Debug)]
pub struct TypeSchema {
    /// DXF-style type name used in diagnostics
    pub name: &'static str,
    pub supertype: Supertype,
    pub fields: &'static [FieldSpec],
}

/// Where the walker reads field values from.
pub trait FieldSource {
    fn field(&self, name: &str) -> Option<Cow<'_, FieldValue>>;
}

impl FieldSource for FieldMap {
    fn field(&self, name: &str) -> Option<Cow<'_, FieldValue>> {
        self.get(name).map(Cow::Borrowed)
    }
}

/// Zero value of a kind, written when neither payload nor schema supply one.
pub(crate) fn zero_value(kind: FieldKind) -> FieldValue {
    match kind {
        FieldKind::B => FieldValue::Bool(false),
        FieldKind::BB
        | FieldKind::BS
        | FieldKind::BL
        | FieldKind::BLL
        | FieldKind::RC
        | FieldKind::RS
        | FieldKind::RL
        | FieldKind::Bits(_) => FieldValue::Int(0),
        FieldKind::BD
        | FieldKind::RD
        | FieldKind::Dd(_)
        | FieldKind::Bt
        | FieldKind::TimeBl
        | FieldKind::TimeRl => FieldValue::Double(0.0),
        FieldKind::Rd2 | FieldKind::Bd2 => FieldValue::Point2(Vector2::ZERO),
        FieldKind::Rd3 | FieldKind::Bd3 => FieldValue::Point3(Vector3::ZERO),
        FieldKind::Be => FieldValue::Point3(Vector3::UNIT_Z),
        FieldKind::Cmc => FieldValue::Color(Color::ByLayer),
        FieldKind::Tv => FieldValue::Text(String::new()),
        FieldKind::H(expected) => {
            let code = match expected {
                ExpectedCode::Any => 0,
                ExpectedCode::Code(t) => t.code(),
            };
            FieldValue::Ref(ObjectRef::null(code))
        }
        FieldKind::Hd => FieldValue::Ref(ObjectRef::null(0)),
        FieldKind::Bytes | FieldKind::FixedBytes(_) => FieldValue::Bytes(Vec::new()),
        FieldKind::Rd2Chain => FieldValue::List(Vec::new()),
        FieldKind::Records(_) | FieldKind::Group(_) => FieldValue::Records(Vec::new()),
    }
}
