//! Static layouts.
//!
//! `entities` and `objects` hold one [`TypeSchema`] per fixed type,
//! `classes` the layouts of named classes and their registry, `header` the
//! header variables and the auxiliary header.

pub mod classes;
pub mod entities;
pub mod header;
pub mod objects;

use super::Condition::*;
use super::FieldKind::*;
use super::{field, FieldSpec, TypeSchema, HARD_OWNER, HARD_PTR, SOFT_PTR};
use crate::io::dwg::object_type::DwgObjectType;
use crate::types::DxfVersion::{
    AC1014 as R14, AC1015 as R2000, AC1018 as R2004, AC1021 as R2007, AC1024 as R2010,
    AC1027 as R2013,
};

/// Entity header flags after the R13-R14 bitsize, and the entity handles
/// that open the handle stream.
pub static ENTITY_COMMON: &[FieldSpec] = &[
    field("entity_mode", BB),
    field("num_reactors", BL),
    field("xdic_missing", B).since(R2004),
    field("has_ds_binary_data", B).since(R2013),
    field("isbylayerlt", B).until(R14),
    field("nolinks", B),
    field("color", Cmc),
    field("linetype_scale", BD),
    field("linetype_flags", BB).since(R2000),
    field("plotstyle_flags", BB).since(R2000),
    field("material_flags", BB).since(R2007),
    field("shadow_flags", RC).since(R2007),
    field("has_full_visualstyle", B).since(R2010),
    field("has_face_visualstyle", B).since(R2010),
    field("has_edge_visualstyle", B).since(R2010),
    field("invisible", BS),
    field("lineweight", RC).since(R2000),
    // handle stream
    field("owner", SOFT_PTR).when(Equals("entity_mode", 0)),
    field("reactors", SOFT_PTR).repeat("num_reactors"),
    field("xdictionary", HARD_OWNER).before(R2004),
    field("xdictionary", HARD_OWNER)
        .since(R2004)
        .when(IsFalse("xdic_missing")),
    field("layer", HARD_PTR).until(R14),
    field("linetype", HARD_PTR)
        .until(R14)
        .when(IsFalse("isbylayerlt")),
    field("prev_entity", SOFT_PTR)
        .before(R2004)
        .when(IsFalse("nolinks")),
    field("next_entity", SOFT_PTR)
        .before(R2004)
        .when(IsFalse("nolinks")),
    field("layer", HARD_PTR).since(R2000),
    field("linetype", HARD_PTR)
        .since(R2000)
        .when(Equals("linetype_flags", 3)),
    field("material", HARD_PTR)
        .since(R2007)
        .when(Equals("material_flags", 3)),
    field("plotstyle", HARD_PTR)
        .since(R2000)
        .when(Equals("plotstyle_flags", 3)),
    field("full_visualstyle", HARD_PTR)
        .since(R2010)
        .when(IsTrue("has_full_visualstyle")),
    field("face_visualstyle", HARD_PTR)
        .since(R2010)
        .when(IsTrue("has_face_visualstyle")),
    field("edge_visualstyle", HARD_PTR)
        .since(R2010)
        .when(IsTrue("has_edge_visualstyle")),
];

/// Object header fields after the R13-R14 bitsize, and the object handles
/// that open the handle stream.
pub static OBJECT_COMMON: &[FieldSpec] = &[
    field("num_reactors", BL),
    field("xdic_missing", B).since(R2004),
    field("has_ds_binary_data", B).since(R2013),
    // handle stream
    field("owner", SOFT_PTR),
    field("reactors", SOFT_PTR).repeat("num_reactors"),
    field("xdictionary", HARD_OWNER).before(R2004),
    field("xdictionary", HARD_OWNER)
        .since(R2004)
        .when(IsFalse("xdic_missing")),
];

/// Layout of a fixed type, when one is modelled.
///
/// `VBA_PROJECT`, `DUMMY`, `LONG_TRANSACTION` and the unassigned numbers
/// have none.
pub fn fixed_schema(object_type: DwgObjectType) -> Option<&'static TypeSchema> {
    use entities as e;
    use objects as o;
    use DwgObjectType as T;

    let schema = match object_type {
        T::Text => &e::TEXT,
        T::Attrib => &e::ATTRIB,
        T::Attdef => &e::ATTDEF,
        T::Block => &e::BLOCK,
        T::Endblk => &e::ENDBLK,
        T::Seqend => &e::SEQEND,
        T::Insert => &e::INSERT,
        T::Minsert => &e::MINSERT,
        T::Vertex2D => &e::VERTEX_2D,
        T::Vertex3D => &e::VERTEX_3D,
        T::VertexMesh => &e::VERTEX_MESH,
        T::VertexPface => &e::VERTEX_PFACE,
        T::VertexPfaceFace => &e::VERTEX_PFACE_FACE,
        T::Polyline2D => &e::POLYLINE_2D,
        T::Polyline3D => &e::POLYLINE_3D,
        T::Arc => &e::ARC,
        T::Circle => &e::CIRCLE,
        T::Line => &e::LINE,
        T::DimensionOrdinate => &e::DIMENSION_ORDINATE,
        T::DimensionLinear => &e::DIMENSION_LINEAR,
        T::DimensionAligned => &e::DIMENSION_ALIGNED,
        T::DimensionAng3Pt => &e::DIMENSION_ANG3PT,
        T::DimensionAng2Ln => &e::DIMENSION_ANG2LN,
        T::DimensionRadius => &e::DIMENSION_RADIUS,
        T::DimensionDiameter => &e::DIMENSION_DIAMETER,
        T::Point => &e::POINT,
        T::Face3D => &e::FACE_3D,
        T::PolylinePface => &e::POLYLINE_PFACE,
        T::PolylineMesh => &e::POLYLINE_MESH,
        T::Solid => &e::SOLID,
        T::Trace => &e::TRACE,
        T::Shape => &e::SHAPE,
        T::Viewport => &e::VIEWPORT,
        T::Ellipse => &e::ELLIPSE,
        T::Spline => &e::SPLINE,
        T::Region => &e::REGION,
        T::Solid3D => &e::SOLID_3D,
        T::Body => &e::BODY,
        T::Ray => &e::RAY,
        T::Xline => &e::XLINE,
        T::OleFrame => &e::OLEFRAME,
        T::Mtext => &e::MTEXT,
        T::Leader => &e::LEADER,
        T::Tolerance => &e::TOLERANCE,
        T::Mline => &e::MLINE,
        T::Ole2Frame => &e::OLE2FRAME,
        T::LwPolyline => &e::LWPOLYLINE,
        T::Hatch => &e::HATCH,
        T::AcadProxyEntity => &e::PROXY_ENTITY,

        T::Dictionary => &o::DICTIONARY,
        T::BlockControlObj => &o::BLOCK_CONTROL,
        T::BlockHeader => &o::BLOCK_HEADER,
        T::LayerControlObj => &o::LAYER_CONTROL,
        T::Layer => &o::LAYER,
        T::StyleControlObj => &o::STYLE_CONTROL,
        T::Style => &o::STYLE,
        T::LtypeControlObj => &o::LTYPE_CONTROL,
        T::Ltype => &o::LTYPE,
        T::ViewControlObj => &o::VIEW_CONTROL,
        T::View => &o::VIEW,
        T::UcsControlObj => &o::UCS_CONTROL,
        T::Ucs => &o::UCS,
        T::VportControlObj => &o::VPORT_CONTROL,
        T::Vport => &o::VPORT,
        T::AppidControlObj => &o::APPID_CONTROL,
        T::Appid => &o::APPID,
        T::DimstyleControlObj => &o::DIMSTYLE_CONTROL,
        T::Dimstyle => &o::DIMSTYLE,
        T::VpEntHdrCtrlObj => &o::VX_CONTROL,
        T::VpEntHdr => &o::VX_TABLE_RECORD,
        T::Group => &o::GROUP,
        T::MlineStyle => &o::MLINESTYLE,
        T::XRecord => &o::XRECORD,
        T::AcDbPlaceholder => &o::PLACEHOLDER,
        T::Layout => &o::LAYOUT,
        T::AcadProxyObject => &o::PROXY_OBJECT,

        T::Unknown9
        | T::Unknown36
        | T::Unknown37
        | T::Unknown3A
        | T::Unknown3B
        | T::Dummy
        | T::LongTransaction
        | T::VbaProject => return None,
    };
    Some(schema)
}
