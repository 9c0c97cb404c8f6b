//! Schema interpreter.

use super::{zero_value, DdDefault, FieldKind, FieldSource, FieldSpec, TypeSchema};
use crate::document::{FieldValue, ObjectRef};
use crate::error::{DxfError, Result};
use crate::io::dwg::handle_resolver::{expected_code_matches, EncodedRef, HandleResolver};
use crate::io::dwg::reference_type::ExpectedCode;
use crate::io::dwg::writer::configuration::EncodeConfiguration;
use crate::io::dwg::writer::stream_writer::IDwgStreamWriter;
use crate::io::dwg::writer::stream_writer_base::DwgStreamWriterBase;
use crate::notification::NotificationCollection;
use crate::types::{Color, DxfVersion, Handle, Vector2, Vector3};
use std::borrow::Cow;
use tracing::trace;

/// Which fields of a layout a walk writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Every non-handle field
    Data,
    /// Only handle fields, for the trailing handle stream
    Handles,
    /// Everything in declaration order (header variables)
    Inline,
}

/// Writes fields described by a schema into a bit stream.
///
/// One walker encodes one object: it carries the handle of that object for
/// offset reference codes and the type name for diagnostics.
pub struct FieldWalker<'a> {
    writer: &'a mut DwgStreamWriterBase,
    config: &'a EncodeConfiguration,
    resolver: &'a HandleResolver<'a>,
    notifications: &'a mut NotificationCollection,
    type_name: &'static str,
    referencing: u64,
}

impl<'a> FieldWalker<'a> {
    pub fn new(
        writer: &'a mut DwgStreamWriterBase,
        config: &'a EncodeConfiguration,
        resolver: &'a HandleResolver<'a>,
        notifications: &'a mut NotificationCollection,
        type_name: &'static str,
        referencing: u64,
    ) -> Self {
        Self {
            writer,
            config,
            resolver,
            notifications,
            type_name,
            referencing,
        }
    }

    pub fn writer(&mut self) -> &mut DwgStreamWriterBase {
        self.writer
    }

    pub fn version(&self) -> DxfVersion {
        self.config.version
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn set_type_name(&mut self, name: &'static str) {
        self.type_name = name;
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.notifications.warn(message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.notifications.error(message);
    }

    /// Write the fields of `schema` selected by `pass`.
    pub fn write_schema(
        &mut self,
        schema: &'static TypeSchema,
        source: &dyn FieldSource,
        pass: Pass,
    ) -> Result<()> {
        self.walk(schema.fields, source, pass)
    }

    /// Write the fields of `fields` selected by `pass`, in order.
    ///
    /// Fields outside the target version are skipped silently. Nested
    /// records are visited in both passes so their handles land in the
    /// handle stream in record order.
    pub fn walk(
        &mut self,
        fields: &'static [FieldSpec],
        source: &dyn FieldSource,
        pass: Pass,
    ) -> Result<()> {
        self.walk_in(fields, fields, source, None, pass)
    }

    /// `scope` is the field list of the record being written, groups
    /// included; counts and conditions resolve against it. Conditions
    /// inside a record may also test a field of the enclosing record.
    fn walk_in(
        &mut self,
        fields: &'static [FieldSpec],
        scope: &'static [FieldSpec],
        source: &dyn FieldSource,
        parent: Option<&dyn FieldSource>,
        pass: Pass,
    ) -> Result<()> {
        for spec in fields {
            if !spec.versions.contains(self.config.version) {
                continue;
            }
            if let Some(condition) = spec.condition {
                let value = self.condition_value(condition.field(), scope, source, parent)?;
                if !condition.holds(value) {
                    continue;
                }
            }
            match spec.kind {
                FieldKind::Group(inner) => {
                    self.walk_in(inner, scope, source, parent, pass)?;
                    continue;
                }
                FieldKind::Records(inner) => {
                    let records = match self.value_of(spec, scope, source, false)? {
                        FieldValue::Records(records) => records,
                        other => return Err(self.invalid(spec, mismatch("records", &other))),
                    };
                    for record in &records {
                        self.walk_in(inner, inner, record, Some(source), pass)?;
                    }
                    continue;
                }
                _ => {}
            }
            let wanted = match pass {
                Pass::Data => !spec.is_handle(),
                Pass::Handles => spec.is_handle(),
                Pass::Inline => true,
            };
            if wanted {
                self.write_field(spec, scope, source)?;
            }
        }
        Ok(())
    }

    /// Write one reference, checking its code against the expectation.
    ///
    /// A mismatched code is reported and written as given. A reference to a
    /// missing object is reported and written as a null handle.
    pub fn write_ref(
        &mut self,
        field: &str,
        reference: &ObjectRef,
        expected: ExpectedCode,
    ) -> Result<()> {
        let encoded = match self.resolver.encode(reference, self.referencing) {
            Ok(encoded) => encoded,
            Err(DxfError::InvalidHandle(index)) => {
                self.warn(format!(
                    "{}.{}: reference to missing object #{}, written as a null handle",
                    self.type_name, field, index
                ));
                EncodedRef {
                    handle: Handle::new(reference.code, 0),
                    fell_back: false,
                }
            }
            Err(e) => return Err(e),
        };
        if !expected_code_matches(&Handle::new(reference.code, 0), expected) {
            self.warn(format!(
                "{}.{}: handle code {:#X} where {} was expected",
                self.type_name, field, reference.code, expected
            ));
        }
        if encoded.fell_back {
            self.warn(format!(
                "{}.{}: code {:#X} cannot reach handle {:#X} from {:#X}, written as code {}",
                self.type_name,
                field,
                reference.code,
                encoded.handle.value,
                self.referencing,
                encoded.handle.code
            ));
        }
        if !encoded.handle.is_null()
            && encoded.handle.code <= 5
            && !self.resolver.contains(encoded.handle.value)
        {
            trace!(
                target: "dwg_encoder::fields",
                "{}.{} points outside the document: {:#X}",
                self.type_name,
                field,
                encoded.handle.value
            );
        }
        self.writer.write_handle(encoded.handle)
    }

    fn write_field(
        &mut self,
        spec: &FieldSpec,
        fields: &[FieldSpec],
        source: &dyn FieldSource,
    ) -> Result<()> {
        let value = self.value_of(spec, fields, source, true)?;
        if self.config.trace_fields {
            trace!(
                target: "dwg_encoder::fields",
                type_name = self.type_name,
                field = spec.name,
                bit = self.writer.position_in_bits(),
                value = ?value,
                "field"
            );
        }
        match (spec.repeat, spec.kind) {
            (_, FieldKind::Rd2Chain) => match value {
                FieldValue::List(items) => self.write_point_chain(spec, &items),
                other => Err(self.invalid(spec, mismatch("list", &other))),
            },
            (None, _) | (Some(_), FieldKind::Bytes) => {
                self.write_value(spec, &value, fields, source)
            }
            (Some(_), _) => match value {
                FieldValue::List(items) => {
                    for item in &items {
                        self.write_value(spec, item, fields, source)?;
                    }
                    Ok(())
                }
                other => Err(self.invalid(spec, mismatch("list", &other))),
            },
        }
    }

    fn write_value(
        &mut self,
        spec: &FieldSpec,
        value: &FieldValue,
        fields: &[FieldSpec],
        source: &dyn FieldSource,
    ) -> Result<()> {
        match spec.kind {
            FieldKind::B => {
                let b = self.as_bool(spec, value)?;
                self.writer.write_bit(b)
            }
            FieldKind::BB => {
                let v = self.int_in(spec, value, 0, 3)?;
                self.writer.write_2bits(v as u8)
            }
            FieldKind::BS => {
                let v = self.int_in(spec, value, i16::MIN as i64, u16::MAX as i64)?;
                self.writer.write_bit_short(v as i16)
            }
            FieldKind::BL => {
                let v = self.int_in(spec, value, i32::MIN as i64, u32::MAX as i64)?;
                self.writer.write_bit_long(v as i32)
            }
            FieldKind::BLL => {
                let v = self.as_int(spec, value)?;
                self.writer.write_bit_long_long(v)
            }
            FieldKind::RC => {
                let v = self.int_in(spec, value, i8::MIN as i64, u8::MAX as i64)?;
                self.writer.write_byte(v as u8)
            }
            FieldKind::RS => {
                let v = self.int_in(spec, value, i16::MIN as i64, u16::MAX as i64)?;
                self.writer.write_raw_short(v as i16)
            }
            FieldKind::RL => {
                let v = self.int_in(spec, value, i32::MIN as i64, u32::MAX as i64)?;
                self.writer.write_raw_long(v as i32)
            }
            FieldKind::BD => {
                let v = self.as_double(spec, value)?;
                self.writer.write_bit_double(v)
            }
            FieldKind::RD => {
                let v = self.as_double(spec, value)?;
                self.writer.write_raw_double(v)
            }
            FieldKind::Rd2 => {
                let v = self.as_point2(spec, value)?;
                self.writer.write_2raw_double(v)
            }
            FieldKind::Rd3 => {
                let v = self.as_point3(spec, value)?;
                self.writer.write_3raw_double(v)
            }
            FieldKind::Bd2 => {
                let v = self.as_point2(spec, value)?;
                self.writer.write_2bit_double(v)
            }
            FieldKind::Bd3 => {
                let v = self.as_point3(spec, value)?;
                self.writer.write_3bit_double(v)
            }
            FieldKind::Dd(default) => {
                let def = match default {
                    DdDefault::Value(d) => d,
                    DdDefault::Field(name) => self.sibling_double(name, fields, source)?,
                };
                let v = self.as_double(spec, value)?;
                self.writer.write_bit_double_with_default(def, v)
            }
            FieldKind::Bt => {
                let v = self.as_double(spec, value)?;
                self.writer.write_bit_thickness(v)
            }
            FieldKind::Be => {
                let v = self.as_point3(spec, value)?;
                self.writer.write_bit_extrusion(v)
            }
            FieldKind::Cmc => {
                let color = match value {
                    FieldValue::Color(c) => *c,
                    FieldValue::Int(i) => Color::from_index(*i as i16),
                    other => return Err(self.invalid(spec, mismatch("color", other))),
                };
                self.writer.write_cm_color(color)
            }
            FieldKind::Tv => match value {
                FieldValue::Text(t) => self.writer.write_variable_text(t),
                other => Err(self.invalid(spec, mismatch("text", other))),
            },
            FieldKind::TimeBl => {
                let v = self.as_double(spec, value)?;
                self.writer.write_date_time(v)
            }
            FieldKind::TimeRl => {
                let v = self.as_double(spec, value)?;
                self.writer.write_raw_date_time(v)
            }
            FieldKind::Bits(n) => {
                let v = self.int_in(spec, value, 0, (1i64 << n) - 1)?;
                for i in (0..n).rev() {
                    self.writer.write_bit(v & (1 << i) != 0)?;
                }
                Ok(())
            }
            FieldKind::Hd => {
                let reference = self.as_ref(spec, value, ExpectedCode::Any)?;
                self.write_ref(spec.name, &reference, ExpectedCode::Any)
            }
            FieldKind::FixedBytes(n) => match value {
                FieldValue::Bytes(b) => {
                    if b.len() > n {
                        self.warn(format!(
                            "{}.{}: {} bytes truncated to {}",
                            self.type_name,
                            spec.name,
                            b.len(),
                            n
                        ));
                    }
                    let mut padded = b.clone();
                    padded.resize(n, 0);
                    self.writer.write_bytes(&padded)
                }
                other => Err(self.invalid(spec, mismatch("bytes", other))),
            },
            FieldKind::H(expected) => {
                let reference = self.as_ref(spec, value, expected)?;
                self.write_ref(spec.name, &reference, expected)
            }
            FieldKind::Bytes => match value {
                FieldValue::Bytes(b) => self.writer.write_bytes(b),
                other => Err(self.invalid(spec, mismatch("bytes", other))),
            },
            FieldKind::Rd2Chain | FieldKind::Records(_) | FieldKind::Group(_) => {
                Err(self.invalid(spec, "not a single value".into()))
            }
        }
    }

    /// Value a field is written with.
    ///
    /// Count fields are derived from the length of the field they count; a
    /// stored count that disagrees is reported when `report` is set. Fields
    /// introduced after the version being upgraded from take their default.
    fn value_of(
        &mut self,
        spec: &FieldSpec,
        fields: &[FieldSpec],
        source: &dyn FieldSource,
        report: bool,
    ) -> Result<FieldValue> {
        let version = self.config.version;
        let counted = find_spec(fields, &|f| {
            f.repeat == Some(spec.name) && f.versions.contains(version)
        });
        if let Some(counted) = counted {
            let count = lookup(source, counted.name)
                .map(|v| element_count(&v))
                .unwrap_or(0) as i64;
            if report {
                let stored = lookup(source, spec.name).and_then(|v| int_of(&v));
                if let Some(stored) = stored {
                    if stored != count {
                        self.warn(format!(
                            "{}.{}: stored count {} replaced by {} entries of `{}`",
                            self.type_name, spec.name, stored, count, counted.name
                        ));
                    }
                }
            }
            return Ok(FieldValue::Int(count));
        }

        if let Some(since) = spec.versions.since {
            if self.config.is_upgrade_of(since) {
                return Ok(default_of(spec));
            }
        }

        Ok(lookup(source, spec.name)
            .map(Cow::into_owned)
            .unwrap_or_else(|| default_of(spec)))
    }

    fn condition_value(
        &mut self,
        name: &str,
        fields: &[FieldSpec],
        source: &dyn FieldSource,
        parent: Option<&dyn FieldSource>,
    ) -> Result<f64> {
        let version = self.config.version;
        let value = match find_spec(fields, &|f| f.name == name && f.versions.contains(version)) {
            Some(spec) => self.value_of(spec, fields, source, false)?,
            None => match lookup(source, name).or_else(|| parent.and_then(|p| lookup(p, name))) {
                Some(v) => v.into_owned(),
                None => return Ok(0.0),
            },
        };
        Ok(int_of(&value)
            .map(|i| i as f64)
            .or_else(|| double_of(&value))
            .unwrap_or(0.0))
    }

    fn write_point_chain(&mut self, spec: &FieldSpec, items: &[FieldValue]) -> Result<()> {
        let mut previous: Option<Vector2> = None;
        for item in items {
            let p = self.as_point2(spec, item)?;
            match previous {
                None => self.writer.write_2raw_double(p)?,
                Some(prev) => {
                    self.writer.write_bit_double_with_default(prev.x, p.x)?;
                    self.writer.write_bit_double_with_default(prev.y, p.y)?;
                }
            }
            previous = Some(p);
        }
        Ok(())
    }

    fn sibling_double(
        &mut self,
        name: &str,
        fields: &[FieldSpec],
        source: &dyn FieldSource,
    ) -> Result<f64> {
        let version = self.config.version;
        let value = match find_spec(fields, &|f| f.name == name && f.versions.contains(version)) {
            Some(spec) => self.value_of(spec, fields, source, false)?,
            None => match lookup(source, name) {
                Some(v) => v.into_owned(),
                None => return Ok(0.0),
            },
        };
        Ok(double_of(&value).unwrap_or(0.0))
    }

    fn invalid(&self, spec: &FieldSpec, message: String) -> DxfError {
        DxfError::InvalidField {
            type_name: self.type_name,
            field: spec.name,
            message,
        }
    }

    fn as_bool(&self, spec: &FieldSpec, value: &FieldValue) -> Result<bool> {
        match value {
            FieldValue::Bool(b) => Ok(*b),
            FieldValue::Int(i) => Ok(*i != 0),
            other => Err(self.invalid(spec, mismatch("bool", other))),
        }
    }

    fn as_int(&self, spec: &FieldSpec, value: &FieldValue) -> Result<i64> {
        int_of(value).ok_or_else(|| self.invalid(spec, mismatch("integer", value)))
    }

    fn int_in(&self, spec: &FieldSpec, value: &FieldValue, min: i64, max: i64) -> Result<i64> {
        let v = self.as_int(spec, value)?;
        if v < min || v > max {
            return Err(self.invalid(spec, format!("{} is outside {}..={}", v, min, max)));
        }
        Ok(v)
    }

    fn as_double(&self, spec: &FieldSpec, value: &FieldValue) -> Result<f64> {
        double_of(value).ok_or_else(|| self.invalid(spec, mismatch("double", value)))
    }

    fn as_ref(&self, spec: &FieldSpec, value: &FieldValue, expected: ExpectedCode) -> Result<ObjectRef> {
        match value {
            FieldValue::Ref(r) => Ok(*r),
            FieldValue::Int(v) if *v >= 0 => {
                let code = match expected {
                    ExpectedCode::Any => 0,
                    ExpectedCode::Code(t) => t.code(),
                };
                Ok(ObjectRef::handle(code, *v as u64))
            }
            other => Err(self.invalid(spec, mismatch("reference", other))),
        }
    }

    fn as_point2(&self, spec: &FieldSpec, value: &FieldValue) -> Result<Vector2> {
        match value {
            FieldValue::Point2(p) => Ok(*p),
            FieldValue::Point3(p) => Ok(p.xy()),
            other => Err(self.invalid(spec, mismatch("2D point", other))),
        }
    }

    fn as_point3(&self, spec: &FieldSpec, value: &FieldValue) -> Result<Vector3> {
        match value {
            FieldValue::Point3(p) => Ok(*p),
            FieldValue::Point2(p) => Ok(Vector3::new(p.x, p.y, 0.0)),
            other => Err(self.invalid(spec, mismatch("3D point", other))),
        }
    }
}

/// First field of a record matching `pred`, looking through groups.
fn find_spec<'f>(
    fields: &'f [FieldSpec],
    pred: &dyn Fn(&FieldSpec) -> bool,
) -> Option<&'f FieldSpec> {
    for spec in fields {
        if pred(spec) {
            return Some(spec);
        }
        if let FieldKind::Group(inner) = spec.kind {
            if let Some(found) = find_spec(inner, pred) {
                return Some(found);
            }
        }
    }
    None
}

/// Look a field up, resolving `name.x` style component paths.
///
/// A component path whose base is not a point yields the base value itself,
/// so the type check of the field rejects it.
fn lookup<'s>(source: &'s dyn FieldSource, name: &str) -> Option<Cow<'s, FieldValue>> {
    if let Some(v) = source.field(name) {
        return Some(v);
    }
    let (base, component) = name.rsplit_once('.')?;
    let point = source.field(base)?;
    let v = match (point.as_ref(), component) {
        (FieldValue::Point2(p), "x") => p.x,
        (FieldValue::Point2(p), "y") => p.y,
        (FieldValue::Point3(p), "x") => p.x,
        (FieldValue::Point3(p), "y") => p.y,
        (FieldValue::Point3(p), "z") => p.z,
        _ => return Some(point),
    };
    Some(Cow::Owned(FieldValue::Double(v)))
}

fn default_of(spec: &FieldSpec) -> FieldValue {
    if spec.repeat.is_some() && !matches!(spec.kind, FieldKind::Bytes | FieldKind::Records(_)) {
        return FieldValue::List(Vec::new());
    }
    spec.default
        .map(|d| d.to_value())
        .unwrap_or_else(|| zero_value(spec.kind))
}

fn element_count(value: &FieldValue) -> usize {
    match value {
        FieldValue::List(items) => items.len(),
        FieldValue::Bytes(bytes) => bytes.len(),
        FieldValue::Records(records) => records.len(),
        _ => 0,
    }
}

fn int_of(value: &FieldValue) -> Option<i64> {
    match value {
        FieldValue::Int(i) => Some(*i),
        FieldValue::Bool(b) => Some(*b as i64),
        _ => None,
    }
}

fn double_of(value: &FieldValue) -> Option<f64> {
    match value {
        FieldValue::Double(d) => Some(*d),
        FieldValue::Int(i) => Some(*i as f64),
        _ => None,
    }
}

fn value_kind(value: &FieldValue) -> &'static str {
    match value {
        FieldValue::Bool(_) => "bool",
        FieldValue::Int(_) => "integer",
        FieldValue::Double(_) => "double",
        FieldValue::Text(_) => "text",
        FieldValue::Point2(_) => "2D point",
        FieldValue::Point3(_) => "3D point",
        FieldValue::Color(_) => "color",
        FieldValue::Ref(_) => "reference",
        FieldValue::Bytes(_) => "bytes",
        FieldValue::List(_) => "list",
        FieldValue::Records(_) => "records",
    }
}

fn mismatch(expected: &str, found: &FieldValue) -> String {
    format!("expected {}, found {}", expected, value_kind(found))
}
