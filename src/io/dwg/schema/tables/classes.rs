//! Named classes: layouts for types numbered from 500 up, and the registry
//! that maps a class DXF name to how well its layout is supported.

use super::{entities, objects};
use crate::io::dwg::schema::Condition::*;
use crate::io::dwg::schema::FieldDefault as D;
use crate::io::dwg::schema::FieldKind::*;
use crate::io::dwg::schema::{
    field, FieldSpec, Supertype, TypeSchema, HARD_OWNER, HARD_PTR, SOFT_PTR,
};
use crate::types::DxfVersion::AC1024 as R2010;
use ahash::AHashMap;
use once_cell::sync::Lazy;

/// How a registered class is encoded.
#[derive(Debug, Clone, Copy)]
pub enum ClassSupport {
    /// Layout known and exercised
    Handled(&'static TypeSchema),
    /// Layout known but never checked against real files; encoded with a
    /// warning
    Untested(&'static TypeSchema),
    /// No layout; objects of this class are written from their raw bytes
    Unhandled,
}

impl ClassSupport {
    pub fn schema(&self) -> Option<&'static TypeSchema> {
        match self {
            ClassSupport::Handled(s) | ClassSupport::Untested(s) => Some(s),
            ClassSupport::Unhandled => None,
        }
    }
}

pub static ACDBDICTIONARYWDFLT: TypeSchema = TypeSchema {
    name: "ACDBDICTIONARYWDFLT",
    supertype: Supertype::Object,
    fields: &[
        field("dictionary", Group(objects::DICTIONARY_DATA)),
        field("default_entry", HARD_PTR),
    ],
};

pub static DICTIONARYVAR: TypeSchema = TypeSchema {
    name: "DICTIONARYVAR",
    supertype: Supertype::Object,
    fields: &[field("schema_version", RC), field("value", Tv)],
};

pub static IDBUFFER: TypeSchema = TypeSchema {
    name: "IDBUFFER",
    supertype: Supertype::Object,
    fields: &[
        field("unknown", RC),
        field("num_obj_ids", BL),
        field("obj_ids", SOFT_PTR).repeat("num_obj_ids"),
    ],
};

// Raster placement shared by IMAGE and WIPEOUT. A clip boundary of type 1
// is a rectangle given by two corners, type 2 a polygon.
static RASTER_ENTITY: &[FieldSpec] = &[
    field("class_version", BL),
    field("pt0", Bd3),
    field("uvec", Bd3).default(D::Point3(1.0, 0.0, 0.0)),
    field("vvec", Bd3).default(D::Point3(0.0, 1.0, 0.0)),
    field("image_size", Rd2),
    field("display_props", BS).default(D::Int(7)),
    field("clipping", B),
    field("brightness", RC).default(D::Int(50)),
    field("contrast", RC).default(D::Int(50)),
    field("fade", RC),
    field("clip_mode", B).since(R2010),
    field("clip_boundary_type", BS).default(D::Int(1)),
    field("clip_corner1", Rd2).when(Equals("clip_boundary_type", 1)),
    field("clip_corner2", Rd2).when(Equals("clip_boundary_type", 1)),
    field("num_clip_verts", BL).when(Equals("clip_boundary_type", 2)),
    field("clip_verts", Rd2)
        .repeat("num_clip_verts")
        .when(Equals("clip_boundary_type", 2)),
    field("imagedef", HARD_PTR),
    field("imagedef_reactor", HARD_OWNER),
];

pub static IMAGE: TypeSchema = TypeSchema {
    name: "IMAGE",
    supertype: Supertype::Entity,
    fields: RASTER_ENTITY,
};

pub static WIPEOUT: TypeSchema = TypeSchema {
    name: "WIPEOUT",
    supertype: Supertype::Entity,
    fields: RASTER_ENTITY,
};

pub static IMAGEDEF: TypeSchema = TypeSchema {
    name: "IMAGEDEF",
    supertype: Supertype::Object,
    fields: &[
        field("class_version", BL),
        field("image_size", Rd2),
        field("file_path", Tv),
        field("is_loaded", B).default(D::Bool(true)),
        field("resolution_units", RC),
        field("pixel_size", Rd2).default(D::Point2(1.0, 1.0)),
    ],
};

pub static IMAGEDEF_REACTOR: TypeSchema = TypeSchema {
    name: "IMAGEDEF_REACTOR",
    supertype: Supertype::Object,
    fields: &[field("class_version", BL).default(D::Int(2))],
};

static LAYER_INDEX_ENTRY: &[FieldSpec] = &[
    field("index_long", BL),
    field("name", Tv),
    field("entry", HARD_PTR),
];

pub static LAYER_INDEX: TypeSchema = TypeSchema {
    name: "LAYER_INDEX",
    supertype: Supertype::Object,
    fields: &[
        field("timestamp", TimeBl),
        field("num_entries", BL),
        field("entries", Records(LAYER_INDEX_ENTRY)).repeat("num_entries"),
    ],
};

pub static RASTERVARIABLES: TypeSchema = TypeSchema {
    name: "RASTERVARIABLES",
    supertype: Supertype::Object,
    fields: &[
        field("class_version", BL),
        field("display_frame", BS),
        field("display_quality", BS).default(D::Int(1)),
        field("units", BS),
    ],
};

// Sort handles sit in the data stream, entity handles in the handle stream.
static SORTENTS_ENTRY: &[FieldSpec] = &[field("sort_handle", Hd), field("entity", SOFT_PTR)];

pub static SORTENTSTABLE: TypeSchema = TypeSchema {
    name: "SORTENTSTABLE",
    supertype: Supertype::Object,
    fields: &[
        field("num_entries", BL),
        field("block_owner", SOFT_PTR),
        field("entries", Records(SORTENTS_ENTRY)).repeat("num_entries"),
    ],
};

pub static SPATIAL_FILTER: TypeSchema = TypeSchema {
    name: "SPATIAL_FILTER",
    supertype: Supertype::Object,
    fields: &[
        field("num_points", BS),
        field("points", Rd2).repeat("num_points"),
        field("extrusion", Bd3).default(D::Point3(0.0, 0.0, 1.0)),
        field("clip_bound_origin", Bd3),
        field("display_boundary", BS),
        field("front_clip_on", BS),
        field("front_clip_dist", BD).when(IsTrue("front_clip_on")),
        field("back_clip_on", BS),
        field("back_clip_dist", BD).when(IsTrue("back_clip_on")),
        // 4x3 matrices, row major
        field("inverse_block_transform", BD).repeat("inverse_block_transform_len"),
        field("clip_bound_transform", BD).repeat("clip_bound_transform_len"),
    ],
};

pub static WIPEOUTVARIABLES: TypeSchema = TypeSchema {
    name: "WIPEOUTVARIABLES",
    supertype: Supertype::Object,
    fields: &[field("display_frame", BS)],
};

pub static SCALE: TypeSchema = TypeSchema {
    name: "SCALE",
    supertype: Supertype::Object,
    fields: &[
        field("flag", BS),
        field("name", Tv),
        field("paper_units", BD).default(D::Double(1.0)),
        field("drawing_units", BD).default(D::Double(1.0)),
        field("is_unit_scale", B),
    ],
};

pub static DBCOLOR: TypeSchema = TypeSchema {
    name: "DBCOLOR",
    supertype: Supertype::Object,
    fields: &[field("color", Cmc)],
};

pub static FIELDLIST: TypeSchema = TypeSchema {
    name: "FIELDLIST",
    supertype: Supertype::Object,
    fields: &[
        field("num_fields", BL),
        field("unknown", B),
        field("fields", HARD_OWNER).repeat("num_fields"),
    ],
};

pub static SPATIAL_INDEX: TypeSchema = TypeSchema {
    name: "SPATIAL_INDEX",
    supertype: Supertype::Object,
    fields: &[field("timestamp", TimeBl), field("data", Bytes)],
};

pub static MLEADERSTYLE: TypeSchema = TypeSchema {
    name: "MLEADERSTYLE",
    supertype: Supertype::Object,
    fields: &[
        field("class_version", BS).since(R2010).default(D::Int(2)),
        field("content_type", BS).default(D::Int(2)),
        field("mleader_order", BS),
        field("leader_order", BS),
        field("max_points", BL).default(D::Int(2)),
        field("first_seg_angle", BD),
        field("second_seg_angle", BD),
        field("leader_type", BS).default(D::Int(1)),
        field("line_color", Cmc),
        field("line_type", HARD_PTR),
        field("line_weight", BL).default(D::Int(-2)),
        field("landing", B).default(D::Bool(true)),
        field("landing_gap", BD).default(D::Double(2.0)),
        field("dogleg", B).default(D::Bool(true)),
        field("landing_distance", BD).default(D::Double(8.0)),
        field("description", Tv),
        field("arrow_head", HARD_PTR),
        field("arrow_head_size", BD).default(D::Double(4.0)),
        field("text_default", Tv),
        field("text_style", HARD_PTR),
        field("left_attach", BS).default(D::Int(1)),
        field("right_attach", BS).default(D::Int(1)),
        field("text_angle_type", BS).default(D::Int(1)),
        field("text_align_type", BS),
        field("text_color", Cmc),
        field("text_height", BD).default(D::Double(4.0)),
        field("text_frame", B),
        field("text_always_left", B),
        field("align_space", BD).default(D::Double(4.0)),
        field("block", HARD_PTR),
        field("block_color", Cmc),
        field("block_scale", Bd3).default(D::Point3(1.0, 1.0, 1.0)),
        field("use_block_scale", B),
        field("block_rotation", BD),
        field("use_block_rotation", B),
        field("block_connection", BS),
        field("scale", BD).default(D::Double(1.0)),
        field("changed", B),
        field("is_annotative", B),
        field("break_size", BD).default(D::Double(3.75)),
        field("attach_dir", BS).since(R2010),
        field("attach_top", BS).since(R2010).default(D::Int(9)),
        field("attach_bottom", BS).since(R2010).default(D::Int(9)),
    ],
};

/// Every registered class name, keyed by DXF name.
pub static CLASS_REGISTRY: Lazy<AHashMap<&'static str, ClassSupport>> = Lazy::new(|| {
    use ClassSupport::*;
    let mut m = AHashMap::new();
    m.insert("ACDBDICTIONARYWDFLT", Handled(&ACDBDICTIONARYWDFLT));
    m.insert("DICTIONARYVAR", Handled(&DICTIONARYVAR));
    m.insert("HATCH", Handled(&entities::HATCH));
    m.insert("GROUP", Handled(&objects::GROUP));
    m.insert("IDBUFFER", Handled(&IDBUFFER));
    m.insert("IMAGE", Handled(&IMAGE));
    m.insert("IMAGEDEF", Handled(&IMAGEDEF));
    m.insert("IMAGEDEF_REACTOR", Handled(&IMAGEDEF_REACTOR));
    m.insert("LAYER_INDEX", Handled(&LAYER_INDEX));
    m.insert("LAYOUT", Handled(&objects::LAYOUT));
    m.insert("LWPLINE", Handled(&entities::LWPOLYLINE));
    m.insert("LWPOLYLINE", Handled(&entities::LWPOLYLINE));
    m.insert("OLE2FRAME", Handled(&entities::OLE2FRAME));
    m.insert("ACDBPLACEHOLDER", Handled(&objects::PLACEHOLDER));
    m.insert("RASTERVARIABLES", Handled(&RASTERVARIABLES));
    m.insert("SORTENTSTABLE", Handled(&SORTENTSTABLE));
    m.insert("SPATIAL_FILTER", Handled(&SPATIAL_FILTER));
    m.insert("XRECORD", Handled(&objects::XRECORD));
    m.insert("WIPEOUT", Handled(&WIPEOUT));
    m.insert("WIPEOUTVARIABLE", Handled(&WIPEOUTVARIABLES));
    m.insert("WIPEOUTVARIABLES", Handled(&WIPEOUTVARIABLES));
    m.insert("SCALE", Handled(&SCALE));
    m.insert("DBCOLOR", Handled(&DBCOLOR));

    m.insert("FIELDLIST", Untested(&FIELDLIST));
    m.insert("SPATIAL_INDEX", Untested(&SPATIAL_INDEX));
    m.insert("MLEADERSTYLE", Untested(&MLEADERSTYLE));

    for name in [
        "MLEADER",
        "MULTILEADER",
        "OBJECTCONTEXTDATA",
        "PROXY",
        "TABLE",
        "ACAD_TABLE",
        "FIELD",
        "CELLSTYLEMAP",
        "VBA_PROJECT",
        "VISUALSTYLE",
        "DIMASSOC",
        "MATERIAL",
        "TABLESTYLE",
        "ACDBSECTIONVIEWSTYLE",
        "ACDBDETAILVIEWSTYLE",
    ] {
        m.insert(name, Unhandled);
    }
    m
});

/// Registry entry for a class DXF name.
pub fn lookup_class(dxf_name: &str) -> Option<ClassSupport> {
    CLASS_REGISTRY.get(dxf_name).copied()
}
