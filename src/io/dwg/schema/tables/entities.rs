//! Entity layouts.

use crate::io::dwg::schema::Condition::*;
use crate::io::dwg::schema::DdDefault::{Field, Value};
use crate::io::dwg::schema::FieldDefault as D;
use crate::io::dwg::schema::FieldKind::*;
use crate::io::dwg::schema::{
    field, FieldSpec, Supertype, TypeSchema, ANY_HANDLE, HARD_OWNER, HARD_PTR, SOFT_PTR,
};
use crate::types::DxfVersion::{
    AC1014 as R14, AC1015 as R2000, AC1018 as R2004, AC1021 as R2007, AC1024 as R2010,
    AC1027 as R2013,
};

const fn entity(name: &'static str, fields: &'static [FieldSpec]) -> TypeSchema {
    TypeSchema {
        name,
        supertype: Supertype::Entity,
        fields,
    }
}

// Text body shared by TEXT, ATTRIB and ATTDEF. From R2000 on, each set bit
// of `dataflags` marks a field left at its default and omitted.
static TEXT_DATA: &[FieldSpec] = &[
    field("elevation", BD).until(R14),
    field("insertion", Rd2).until(R14),
    field("alignment", Rd2).until(R14),
    field("extrusion", Be).until(R14),
    field("thickness", Bt).until(R14),
    field("oblique_angle", BD).until(R14),
    field("rotation", BD).until(R14),
    field("height", BD).until(R14),
    field("width_factor", BD).until(R14).default(D::Double(1.0)),
    field("value", Tv).until(R14),
    field("generation", BS).until(R14),
    field("halign", BS).until(R14),
    field("valign", BS).until(R14),
    field("dataflags", RC).since(R2000),
    field("elevation", RD)
        .since(R2000)
        .when(FlagClear("dataflags", 0x01)),
    field("insertion", Rd2).since(R2000),
    field("alignment.x", Dd(Field("insertion.x")))
        .since(R2000)
        .when(FlagClear("dataflags", 0x02)),
    field("alignment.y", Dd(Field("insertion.y")))
        .since(R2000)
        .when(FlagClear("dataflags", 0x02)),
    field("extrusion", Be).since(R2000),
    field("thickness", Bt).since(R2000),
    field("oblique_angle", RD)
        .since(R2000)
        .when(FlagClear("dataflags", 0x04)),
    field("rotation", RD)
        .since(R2000)
        .when(FlagClear("dataflags", 0x08)),
    field("height", RD).since(R2000),
    field("width_factor", RD)
        .since(R2000)
        .default(D::Double(1.0))
        .when(FlagClear("dataflags", 0x10)),
    field("value", Tv).since(R2000),
    field("generation", BS)
        .since(R2000)
        .when(FlagClear("dataflags", 0x20)),
    field("halign", BS)
        .since(R2000)
        .when(FlagClear("dataflags", 0x40)),
    field("valign", BS)
        .since(R2000)
        .when(FlagClear("dataflags", 0x80)),
];

static ATTRIB_DATA: &[FieldSpec] = &[
    field("text", Group(TEXT_DATA)),
    field("class_version", RC).since(R2010),
    field("tag", Tv),
    field("field_length", BS),
    field("flags", RC),
    field("lock_position", B).since(R2007),
];

pub static TEXT: TypeSchema = entity(
    "TEXT",
    &[field("text", Group(TEXT_DATA)), field("style", HARD_PTR)],
);

pub static ATTRIB: TypeSchema = entity(
    "ATTRIB",
    &[field("attrib", Group(ATTRIB_DATA)), field("style", HARD_PTR)],
);

pub static ATTDEF: TypeSchema = entity(
    "ATTDEF",
    &[
        field("attrib", Group(ATTRIB_DATA)),
        field("attdef_version", RC).since(R2010),
        field("prompt", Tv),
        field("style", HARD_PTR),
    ],
);

pub static BLOCK: TypeSchema = entity("BLOCK", &[field("name", Tv)]);

pub static ENDBLK: TypeSchema = entity("ENDBLK", &[]);

pub static SEQEND: TypeSchema = entity("SEQEND", &[]);

// Block reference body shared by INSERT and MINSERT. From R2000 on the scale
// is packed: bit 0 of `scale_flags` means x is 1.0, bit 1 means y and z
// equal x.
static INSERT_DATA: &[FieldSpec] = &[
    field("insertion", Bd3),
    field("scale", Bd3)
        .until(R14)
        .default(D::Point3(1.0, 1.0, 1.0)),
    field("scale_flags", BB).since(R2000),
    field("scale.x", RD)
        .since(R2000)
        .default(D::Double(1.0))
        .when(FlagClear("scale_flags", 0x01)),
    field("scale.y", Dd(Field("scale.x")))
        .since(R2000)
        .default(D::Double(1.0))
        .when(Equals("scale_flags", 0)),
    field("scale.z", Dd(Field("scale.x")))
        .since(R2000)
        .default(D::Double(1.0))
        .when(Equals("scale_flags", 0)),
    field("scale.y", Dd(Value(1.0)))
        .since(R2000)
        .default(D::Double(1.0))
        .when(Equals("scale_flags", 1)),
    field("scale.z", Dd(Value(1.0)))
        .since(R2000)
        .default(D::Double(1.0))
        .when(Equals("scale_flags", 1)),
    field("rotation", BD),
    field("extrusion", Bd3).default(D::Point3(0.0, 0.0, 1.0)),
    field("has_attribs", B),
    field("owned_obj_count", BL)
        .since(R2004)
        .when(IsTrue("has_attribs")),
];

static INSERT_HANDLES: &[FieldSpec] = &[
    field("block_header", HARD_PTR),
    field("first_attrib", SOFT_PTR)
        .before(R2004)
        .when(IsTrue("has_attribs")),
    field("last_attrib", SOFT_PTR)
        .before(R2004)
        .when(IsTrue("has_attribs")),
    field("attribs", HARD_OWNER)
        .since(R2004)
        .repeat("owned_obj_count")
        .when(IsTrue("has_attribs")),
    field("seqend", HARD_OWNER).when(IsTrue("has_attribs")),
];

pub static INSERT: TypeSchema = entity(
    "INSERT",
    &[
        field("insert", Group(INSERT_DATA)),
        field("handles", Group(INSERT_HANDLES)),
    ],
);

pub static MINSERT: TypeSchema = entity(
    "MINSERT",
    &[
        field("insert", Group(INSERT_DATA)),
        field("num_cols", BS).default(D::Int(1)),
        field("num_rows", BS).default(D::Int(1)),
        field("col_spacing", BD),
        field("row_spacing", BD),
        field("handles", Group(INSERT_HANDLES)),
    ],
);

pub static VERTEX_2D: TypeSchema = entity(
    "VERTEX_2D",
    &[
        field("flags", RC),
        field("point", Bd3),
        field("start_width", BD),
        // a negative start width stands for both widths
        field("end_width", BD).when(NotNegative("start_width")),
        field("bulge", BD),
        field("vertex_id", BL).since(R2010),
        field("tangent_dir", BD),
    ],
);

static VERTEX_POINT: &[FieldSpec] = &[field("flags", RC), field("point", Bd3)];

pub static VERTEX_3D: TypeSchema = entity("VERTEX_3D", VERTEX_POINT);

pub static VERTEX_MESH: TypeSchema = entity("VERTEX_MESH", VERTEX_POINT);

pub static VERTEX_PFACE: TypeSchema = entity("VERTEX_PFACE", VERTEX_POINT);

pub static VERTEX_PFACE_FACE: TypeSchema = entity(
    "VERTEX_PFACE_FACE",
    &[
        field("index1", BS),
        field("index2", BS),
        field("index3", BS),
        field("index4", BS),
    ],
);

// Vertex ownership of the polyline family: first and last vertex before
// R2004, the full list after.
static POLYLINE_OWNED: &[FieldSpec] = &[
    field("first_vertex", SOFT_PTR).before(R2004),
    field("last_vertex", SOFT_PTR).before(R2004),
    field("vertices", HARD_OWNER).since(R2004).repeat("owned_obj_count"),
    field("seqend", HARD_OWNER),
];

pub static POLYLINE_2D: TypeSchema = entity(
    "POLYLINE_2D",
    &[
        field("flags", BS),
        field("curve_type", BS),
        field("start_width", BD),
        field("end_width", BD),
        field("thickness", Bt),
        field("elevation", BD),
        field("extrusion", Be),
        field("owned_obj_count", BL).since(R2004),
        field("owned", Group(POLYLINE_OWNED)),
    ],
);

pub static POLYLINE_3D: TypeSchema = entity(
    "POLYLINE_3D",
    &[
        field("curve_flags", RC),
        field("closed_flags", RC),
        field("owned_obj_count", BL).since(R2004),
        field("owned", Group(POLYLINE_OWNED)),
    ],
);

pub static POLYLINE_PFACE: TypeSchema = entity(
    "POLYLINE_PFACE",
    &[
        field("num_verts", BS),
        field("num_faces", BS),
        field("owned_obj_count", BL).since(R2004),
        field("owned", Group(POLYLINE_OWNED)),
    ],
);

pub static POLYLINE_MESH: TypeSchema = entity(
    "POLYLINE_MESH",
    &[
        field("flags", BS),
        field("curve_type", BS),
        field("num_m_verts", BS),
        field("num_n_verts", BS),
        field("m_density", BS),
        field("n_density", BS),
        field("owned_obj_count", BL).since(R2004),
        field("owned", Group(POLYLINE_OWNED)),
    ],
);

pub static ARC: TypeSchema = entity(
    "ARC",
    &[
        field("center", Bd3),
        field("radius", BD),
        field("thickness", Bt),
        field("extrusion", Be),
        field("start_angle", BD),
        field("end_angle", BD),
    ],
);

pub static CIRCLE: TypeSchema = entity(
    "CIRCLE",
    &[
        field("center", Bd3),
        field("radius", BD),
        field("thickness", Bt),
        field("extrusion", Be),
    ],
);

pub static LINE: TypeSchema = entity(
    "LINE",
    &[
        field("start", Bd3).until(R14),
        field("end", Bd3).until(R14),
        field("z_is_zero", B).since(R2000),
        field("start.x", RD).since(R2000),
        field("end.x", Dd(Field("start.x"))).since(R2000),
        field("start.y", RD).since(R2000),
        field("end.y", Dd(Field("start.y"))).since(R2000),
        field("start.z", RD)
            .since(R2000)
            .when(IsFalse("z_is_zero")),
        field("end.z", Dd(Field("start.z")))
            .since(R2000)
            .when(IsFalse("z_is_zero")),
        field("thickness", Bt),
        field("extrusion", Be),
    ],
);

static DIMENSION_COMMON: &[FieldSpec] = &[
    field("class_version", RC).since(R2010),
    field("extrusion", Bd3).default(D::Point3(0.0, 0.0, 1.0)),
    field("text_midpt", Rd2),
    field("elevation", BD),
    field("flags", RC),
    field("user_text", Tv),
    field("text_rotation", BD),
    field("horiz_dir", BD),
    field("ins_scale", Bd3).default(D::Point3(1.0, 1.0, 1.0)),
    field("ins_rotation", BD),
    field("attachment", BS).since(R2000),
    field("lspace_style", BS).since(R2000),
    field("lspace_factor", BD).since(R2000).default(D::Double(1.0)),
    field("act_measurement", BD).since(R2000),
    field("unknown", B).since(R2007),
    field("flip_arrow1", B).since(R2007),
    field("flip_arrow2", B).since(R2007),
    field("clone_ins_pt", Rd2),
];

static DIMENSION_HANDLES: &[FieldSpec] = &[
    field("dimstyle", HARD_PTR),
    field("block", HARD_PTR),
];

pub static DIMENSION_ORDINATE: TypeSchema = entity(
    "DIMENSION_ORDINATE",
    &[
        field("common", Group(DIMENSION_COMMON)),
        field("def_pt", Bd3),
        field("feature_location_pt", Bd3),
        field("leader_endpt", Bd3),
        field("flags2", RC),
        field("handles", Group(DIMENSION_HANDLES)),
    ],
);

pub static DIMENSION_LINEAR: TypeSchema = entity(
    "DIMENSION_LINEAR",
    &[
        field("common", Group(DIMENSION_COMMON)),
        field("xline1_pt", Bd3),
        field("xline2_pt", Bd3),
        field("def_pt", Bd3),
        field("oblique_angle", BD),
        field("dim_rotation", BD),
        field("handles", Group(DIMENSION_HANDLES)),
    ],
);

pub static DIMENSION_ALIGNED: TypeSchema = entity(
    "DIMENSION_ALIGNED",
    &[
        field("common", Group(DIMENSION_COMMON)),
        field("xline1_pt", Bd3),
        field("xline2_pt", Bd3),
        field("def_pt", Bd3),
        field("oblique_angle", BD),
        field("handles", Group(DIMENSION_HANDLES)),
    ],
);

pub static DIMENSION_ANG3PT: TypeSchema = entity(
    "DIMENSION_ANG3PT",
    &[
        field("common", Group(DIMENSION_COMMON)),
        field("def_pt", Bd3),
        field("xline1_pt", Bd3),
        field("xline2_pt", Bd3),
        field("center_pt", Bd3),
        field("handles", Group(DIMENSION_HANDLES)),
    ],
);

pub static DIMENSION_ANG2LN: TypeSchema = entity(
    "DIMENSION_ANG2LN",
    &[
        field("common", Group(DIMENSION_COMMON)),
        field("arc_pt", Rd2),
        field("xline1start_pt", Bd3),
        field("xline1end_pt", Bd3),
        field("xline2start_pt", Bd3),
        field("xline2end_pt", Bd3),
        field("handles", Group(DIMENSION_HANDLES)),
    ],
);

static DIMENSION_RADIAL: &[FieldSpec] = &[
    field("common", Group(DIMENSION_COMMON)),
    field("def_pt", Bd3),
    field("first_arc_pt", Bd3),
    field("leader_len", BD),
    field("handles", Group(DIMENSION_HANDLES)),
];

pub static DIMENSION_RADIUS: TypeSchema = entity("DIMENSION_RADIUS", DIMENSION_RADIAL);

pub static DIMENSION_DIAMETER: TypeSchema = entity("DIMENSION_DIAMETER", DIMENSION_RADIAL);

pub static POINT: TypeSchema = entity(
    "POINT",
    &[
        field("point", Bd3),
        field("thickness", Bt),
        field("extrusion", Be),
        field("x_ang", BD),
    ],
);

pub static FACE_3D: TypeSchema = entity(
    "3DFACE",
    &[
        field("corner1", Bd3).until(R14),
        field("corner2", Bd3).until(R14),
        field("corner3", Bd3).until(R14),
        field("corner4", Bd3).until(R14),
        field("invis_flags", BS).until(R14),
        field("has_no_flags", B).since(R2000),
        field("z_is_zero", B).since(R2000),
        field("corner1.x", RD).since(R2000),
        field("corner1.y", RD).since(R2000),
        field("corner1.z", RD)
            .since(R2000)
            .when(IsFalse("z_is_zero")),
        field("corner2.x", Dd(Field("corner1.x"))).since(R2000),
        field("corner2.y", Dd(Field("corner1.y"))).since(R2000),
        field("corner2.z", Dd(Field("corner1.z"))).since(R2000),
        field("corner3.x", Dd(Field("corner2.x"))).since(R2000),
        field("corner3.y", Dd(Field("corner2.y"))).since(R2000),
        field("corner3.z", Dd(Field("corner2.z"))).since(R2000),
        field("corner4.x", Dd(Field("corner3.x"))).since(R2000),
        field("corner4.y", Dd(Field("corner3.y"))).since(R2000),
        field("corner4.z", Dd(Field("corner3.z"))).since(R2000),
        field("invis_flags", BS)
            .since(R2000)
            .when(IsFalse("has_no_flags")),
    ],
);

static SOLID_DATA: &[FieldSpec] = &[
    field("thickness", Bt),
    field("elevation", BD),
    field("corner1", Rd2),
    field("corner2", Rd2),
    field("corner3", Rd2),
    field("corner4", Rd2),
    field("extrusion", Be),
];

pub static SOLID: TypeSchema = entity("SOLID", SOLID_DATA);

pub static TRACE: TypeSchema = entity("TRACE", SOLID_DATA);

pub static SHAPE: TypeSchema = entity(
    "SHAPE",
    &[
        field("insertion", Bd3),
        field("scale", BD).default(D::Double(1.0)),
        field("rotation", BD),
        field("width_factor", BD).default(D::Double(1.0)),
        field("oblique_angle", BD),
        field("thickness", BD),
        field("style_id", BS),
        field("extrusion", Bd3).default(D::Point3(0.0, 0.0, 1.0)),
        field("style", HARD_PTR),
    ],
);

pub static VIEWPORT: TypeSchema = entity(
    "VIEWPORT",
    &[
        field("center", Bd3),
        field("width", BD),
        field("height", BD),
        field("view_target", Bd3).since(R2000),
        field("view_direction", Bd3)
            .since(R2000)
            .default(D::Point3(0.0, 0.0, 1.0)),
        field("view_twist", BD).since(R2000),
        field("view_height", BD).since(R2000),
        field("lens_length", BD).since(R2000).default(D::Double(50.0)),
        field("front_clip", BD).since(R2000),
        field("back_clip", BD).since(R2000),
        field("snap_angle", BD).since(R2000),
        field("view_center", Rd2).since(R2000),
        field("snap_base", Rd2).since(R2000),
        field("snap_spacing", Rd2).since(R2000),
        field("grid_spacing", Rd2).since(R2000),
        field("circle_zoom", BS).since(R2000).default(D::Int(100)),
        field("grid_major", BS).since(R2007),
        field("num_frozen_layers", BL).since(R2000),
        field("status_flags", BL).since(R2000),
        field("style_sheet", Tv).since(R2000),
        field("render_mode", RC).since(R2000),
        field("ucs_at_origin", B).since(R2000),
        field("ucs_per_viewport", B).since(R2000),
        field("ucs_origin", Bd3).since(R2000),
        field("ucs_x_axis", Bd3)
            .since(R2000)
            .default(D::Point3(1.0, 0.0, 0.0)),
        field("ucs_y_axis", Bd3)
            .since(R2000)
            .default(D::Point3(0.0, 1.0, 0.0)),
        field("ucs_elevation", BD).since(R2000),
        field("ucs_ortho_type", BS).since(R2000),
        field("shadeplot_mode", BS).since(R2004),
        field("use_default_lights", B).since(R2007),
        field("default_lighting_type", RC).since(R2007),
        field("brightness", BD).since(R2007),
        field("contrast", BD).since(R2007),
        field("ambient_color", Cmc).since(R2007),
        // handle stream
        field("vport_entity_header", HARD_PTR).until(R14),
        field("frozen_layers", HARD_PTR)
            .since(R2000)
            .repeat("num_frozen_layers"),
        field("clip_boundary", HARD_PTR).since(R2000),
        field("vport_entity_header", HARD_PTR).since(R2000).until(R2000),
        field("named_ucs", HARD_PTR).since(R2000),
        field("base_ucs", HARD_PTR).since(R2000),
        field("background", SOFT_PTR).since(R2007),
        field("visual_style", HARD_PTR).since(R2007),
        field("shadeplot", SOFT_PTR).since(R2007),
        field("sun", HARD_OWNER).since(R2007),
    ],
);

pub static ELLIPSE: TypeSchema = entity(
    "ELLIPSE",
    &[
        field("center", Bd3),
        field("major_axis", Bd3),
        field("extrusion", Bd3).default(D::Point3(0.0, 0.0, 1.0)),
        field("axis_ratio", BD).default(D::Double(1.0)),
        field("start_angle", BD),
        field("end_angle", BD),
    ],
);

static SPLINE_CONTROL_POINT: &[FieldSpec] = &[
    field("point", Bd3),
    field("weight", BD).when(IsTrue("weighted")),
];

pub static SPLINE: TypeSchema = entity(
    "SPLINE",
    &[
        field("flags1", BL).since(R2013),
        field("knot_param", BL).since(R2013),
        // 1: control points, 2: fit points
        field("scenario", BL).default(D::Int(1)),
        field("degree", BL).default(D::Int(3)),
        field("fit_tol", BD).when(Equals("scenario", 2)),
        field("beg_tan_vec", Bd3).when(Equals("scenario", 2)),
        field("end_tan_vec", Bd3).when(Equals("scenario", 2)),
        field("num_fit_pts", BL).when(Equals("scenario", 2)),
        field("rational", B).when(Equals("scenario", 1)),
        field("closed", B).when(Equals("scenario", 1)),
        field("periodic", B).when(Equals("scenario", 1)),
        field("knot_tol", BD).when(Equals("scenario", 1)),
        field("ctrl_tol", BD).when(Equals("scenario", 1)),
        field("num_knots", BL).when(Equals("scenario", 1)),
        field("num_ctrl_pts", BL).when(Equals("scenario", 1)),
        field("weighted", B).when(Equals("scenario", 1)),
        field("knots", BD)
            .repeat("num_knots")
            .when(Equals("scenario", 1)),
        field("ctrl_pts", Records(SPLINE_CONTROL_POINT))
            .repeat("num_ctrl_pts")
            .when(Equals("scenario", 1)),
        field("fit_pts", Bd3)
            .repeat("num_fit_pts")
            .when(Equals("scenario", 2)),
    ],
);

static ACIS_BLOCK: &[FieldSpec] = &[
    field("size", BL),
    field("data", Bytes).repeat("size"),
];

// REGION, 3DSOLID and BODY. The SAT blocks are replayed as captured,
// including the terminating empty block.
static MODELER_GEOMETRY: &[FieldSpec] = &[
    field("acis_empty", B),
    field("version", BS)
        .default(D::Int(1))
        .when(IsFalse("acis_empty")),
    field("blocks", Records(ACIS_BLOCK)).when(IsFalse("acis_empty")),
    field("wireframe_data_present", B),
    field("point_present", B).when(IsTrue("wireframe_data_present")),
    field("point", Bd3).when(IsTrue("point_present")),
    field("num_isolines", BL).when(IsTrue("wireframe_data_present")),
    field("isoline_present", B).when(IsTrue("wireframe_data_present")),
    field("num_wires", BL).when(IsTrue("isoline_present")),
    field("num_silhouettes", BL).when(IsTrue("isoline_present")),
    field("acis_empty_bit", B),
    field("history", HARD_PTR).since(R2007),
];

pub static REGION: TypeSchema = entity("REGION", MODELER_GEOMETRY);

pub static SOLID_3D: TypeSchema = entity("3DSOLID", MODELER_GEOMETRY);

pub static BODY: TypeSchema = entity("BODY", MODELER_GEOMETRY);

static RAY_DATA: &[FieldSpec] = &[
    field("point", Bd3),
    field("vector", Bd3).default(D::Point3(1.0, 0.0, 0.0)),
];

pub static RAY: TypeSchema = entity("RAY", RAY_DATA);

pub static XLINE: TypeSchema = entity("XLINE", RAY_DATA);

pub static OLEFRAME: TypeSchema = entity(
    "OLEFRAME",
    &[
        field("flags", BS),
        field("mode", BS).since(R2000),
        field("data_length", BL),
        field("data", Bytes).repeat("data_length"),
    ],
);

pub static MTEXT: TypeSchema = entity(
    "MTEXT",
    &[
        field("insertion", Bd3),
        field("extrusion", Bd3).default(D::Point3(0.0, 0.0, 1.0)),
        field("x_axis_dir", Bd3).default(D::Point3(1.0, 0.0, 0.0)),
        field("rect_width", BD),
        field("rect_height", BD).since(R2007),
        field("text_height", BD),
        field("attachment", BS).default(D::Int(1)),
        field("drawing_dir", BS).default(D::Int(1)),
        field("extents_height", BD),
        field("extents_width", BD),
        field("text", Tv),
        field("linespacing_style", BS).since(R2000).default(D::Int(1)),
        field("linespacing_factor", BD)
            .since(R2000)
            .default(D::Double(1.0)),
        field("unknown_bit", B).since(R2000),
        field("bg_flags", BL).since(R2004),
        field("bg_scale_factor", BD)
            .since(R2004)
            .default(D::Double(1.5))
            .when(FlagSet("bg_flags", 0x01)),
        field("bg_color", Cmc)
            .since(R2004)
            .when(FlagSet("bg_flags", 0x01)),
        field("bg_transparency", BL)
            .since(R2004)
            .when(FlagSet("bg_flags", 0x01)),
        field("style", HARD_PTR),
    ],
);

pub static LEADER: TypeSchema = entity(
    "LEADER",
    &[
        field("unknown_bit", B),
        field("annot_type", BS),
        field("path_type", BS),
        field("num_points", BL),
        field("points", Bd3).repeat("num_points"),
        field("end_pt_proj", Bd3),
        field("extrusion", Bd3).default(D::Point3(0.0, 0.0, 1.0)),
        field("x_direction", Bd3).default(D::Point3(1.0, 0.0, 0.0)),
        field("offset_to_block_ins_pt", Bd3).since(R14),
        field("endpt_offset", Bd3).since(R2000),
        field("dimgap", BD).until(R14),
        field("box_height", BD),
        field("box_width", BD),
        field("hookline_on_x_dir", B),
        field("arrowhead_on", B),
        field("arrowhead_type", BS).until(R14),
        field("dimasz", BD).until(R14),
        field("unknown_bit1", B).until(R14),
        field("unknown_bit2", B).until(R14),
        field("unknown_short", BS).until(R14),
        field("byblock_color", BS).until(R14),
        field("unknown_bit3", B).until(R14),
        field("unknown_bit4", B).until(R14),
        field("unknown_short", BS).since(R2000),
        field("unknown_bit1", B).since(R2000),
        field("unknown_bit2", B).since(R2000),
        field("associated_annotation", HARD_PTR),
        field("dimstyle", HARD_PTR),
    ],
);

pub static TOLERANCE: TypeSchema = entity(
    "TOLERANCE",
    &[
        field("unknown_short", BS).until(R14),
        field("height", BD).until(R14),
        field("dimgap", BD).until(R14),
        field("insertion", Bd3),
        field("x_direction", Bd3).default(D::Point3(1.0, 0.0, 0.0)),
        field("extrusion", Bd3).default(D::Point3(0.0, 0.0, 1.0)),
        field("text", Tv),
        field("dimstyle", HARD_PTR),
    ],
);

static MLINE_LINE: &[FieldSpec] = &[
    field("num_segparms", BS),
    field("segparms", BD).repeat("num_segparms"),
    field("num_area_fill_parms", BS),
    field("area_fill_parms", BD).repeat("num_area_fill_parms"),
];

// One record per line of the style; the count is the style's.
static MLINE_VERTEX: &[FieldSpec] = &[
    field("vertex", Bd3),
    field("vertex_direction", Bd3),
    field("miter_direction", Bd3),
    field("lines", Records(MLINE_LINE)),
];

pub static MLINE: TypeSchema = entity(
    "MLINE",
    &[
        field("scale", BD).default(D::Double(1.0)),
        field("justification", RC),
        field("base_point", Bd3),
        field("extrusion", Bd3).default(D::Point3(0.0, 0.0, 1.0)),
        field("open_closed", BS).default(D::Int(1)),
        field("num_lines_in_style", RC),
        field("num_verts", BS),
        field("verts", Records(MLINE_VERTEX)).repeat("num_verts"),
        field("mlinestyle", HARD_PTR),
    ],
);

pub static OLE2FRAME: TypeSchema = entity(
    "OLE2FRAME",
    &[
        field("flags", BS),
        field("mode", BS).since(R2000),
        field("data_length", BL),
        field("data", Bytes).repeat("data_length"),
        field("lock_aspect", RC).since(R2000),
    ],
);

static LWPOLYLINE_WIDTH: &[FieldSpec] = &[field("start", BD), field("end", BD)];

pub static LWPOLYLINE: TypeSchema = entity(
    "LWPOLYLINE",
    &[
        field("flag", BS),
        field("const_width", BD).when(FlagSet("flag", 0x04)),
        field("elevation", BD).when(FlagSet("flag", 0x08)),
        field("thickness", BD).when(FlagSet("flag", 0x02)),
        field("extrusion", Bd3)
            .default(D::Point3(0.0, 0.0, 1.0))
            .when(FlagSet("flag", 0x01)),
        field("num_points", BL),
        field("num_bulges", BL).when(FlagSet("flag", 0x10)),
        field("num_vertex_ids", BL)
            .since(R2010)
            .when(FlagSet("flag", 0x400)),
        field("num_widths", BL).when(FlagSet("flag", 0x20)),
        field("points", Rd2).until(R14).repeat("num_points"),
        field("points", Rd2Chain).since(R2000).repeat("num_points"),
        field("bulges", BD)
            .repeat("num_bulges")
            .when(FlagSet("flag", 0x10)),
        field("vertex_ids", BL)
            .since(R2010)
            .repeat("num_vertex_ids")
            .when(FlagSet("flag", 0x400)),
        field("widths", Records(LWPOLYLINE_WIDTH))
            .repeat("num_widths")
            .when(FlagSet("flag", 0x20)),
    ],
);

static HATCH_GRADIENT_COLOR: &[FieldSpec] = &[
    field("shift", BD),
    field("unknown_short", BS),
    field("rgb", BL),
    field("ignored_color_byte", RC),
];

static HATCH_SPLINE_CONTROL_POINT: &[FieldSpec] = &[
    field("point", Rd2),
    field("weight", BD).when(IsTrue("rational")),
];

// Edge types: 1 line, 2 circular arc, 3 elliptic arc, 4 spline.
static HATCH_EDGE: &[FieldSpec] = &[
    field("type", RC),
    field("start", Rd2).when(Equals("type", 1)),
    field("end", Rd2).when(Equals("type", 1)),
    field("center", Rd2).when(Equals("type", 2)),
    field("radius", BD).when(Equals("type", 2)),
    field("start_angle", BD).when(Equals("type", 2)),
    field("end_angle", BD).when(Equals("type", 2)),
    field("is_ccw", B).when(Equals("type", 2)),
    field("center", Rd2).when(Equals("type", 3)),
    field("endpoint", Rd2).when(Equals("type", 3)),
    field("minor_major_ratio", BD).when(Equals("type", 3)),
    field("start_angle", BD).when(Equals("type", 3)),
    field("end_angle", BD).when(Equals("type", 3)),
    field("is_ccw", B).when(Equals("type", 3)),
    field("degree", BL).when(Equals("type", 4)),
    field("rational", B).when(Equals("type", 4)),
    field("periodic", B).when(Equals("type", 4)),
    field("num_knots", BL).when(Equals("type", 4)),
    field("num_ctrl_pts", BL).when(Equals("type", 4)),
    field("knots", BD)
        .repeat("num_knots")
        .when(Equals("type", 4)),
    field("ctrl_pts", Records(HATCH_SPLINE_CONTROL_POINT))
        .repeat("num_ctrl_pts")
        .when(Equals("type", 4)),
    field("num_fit_pts", BL)
        .since(R2010)
        .when(Equals("type", 4)),
    field("fit_pts", Rd2)
        .since(R2010)
        .repeat("num_fit_pts")
        .when(Equals("type", 4)),
    field("start_tangent", Rd2)
        .since(R2010)
        .when(Equals("type", 4)),
    field("end_tangent", Rd2)
        .since(R2010)
        .when(Equals("type", 4)),
];

static HATCH_POLYLINE_VERTEX: &[FieldSpec] = &[
    field("point", Rd2),
    field("bulge", BD).when(IsTrue("bulges_present")),
];

// Bit 1 of `flag` marks a polyline path.
static HATCH_PATH: &[FieldSpec] = &[
    field("flag", BL),
    field("num_segs", BL).when(FlagClear("flag", 0x02)),
    field("segs", Records(HATCH_EDGE))
        .repeat("num_segs")
        .when(FlagClear("flag", 0x02)),
    field("bulges_present", B).when(FlagSet("flag", 0x02)),
    field("closed", B).when(FlagSet("flag", 0x02)),
    field("num_verts", BL).when(FlagSet("flag", 0x02)),
    field("verts", Records(HATCH_POLYLINE_VERTEX))
        .repeat("num_verts")
        .when(FlagSet("flag", 0x02)),
    field("num_boundary_handles", BL),
    field("boundary_handles", SOFT_PTR).repeat("num_boundary_handles"),
];

static HATCH_DEFLINE: &[FieldSpec] = &[
    field("angle", BD),
    field("base", Rd2),
    field("offset", Rd2),
    field("num_dashes", BS),
    field("dashes", BD).repeat("num_dashes"),
];

pub static HATCH: TypeSchema = entity(
    "HATCH",
    &[
        field("is_gradient_fill", BL).since(R2004),
        field("reserved", BL).since(R2004),
        field("gradient_angle", BD).since(R2004),
        field("gradient_shift", BD).since(R2004),
        field("single_color_gradient", BL).since(R2004),
        field("gradient_tint", BD).since(R2004),
        field("num_colors", BL).since(R2004),
        field("colors", Records(HATCH_GRADIENT_COLOR))
            .since(R2004)
            .repeat("num_colors"),
        field("gradient_name", Tv).since(R2004),
        field("elevation", BD),
        field("extrusion", Bd3).default(D::Point3(0.0, 0.0, 1.0)),
        field("name", Tv),
        field("is_solid_fill", B),
        field("is_associative", B),
        field("num_paths", BL),
        field("paths", Records(HATCH_PATH)).repeat("num_paths"),
        field("style", BS),
        field("pattern_type", BS).default(D::Int(1)),
        field("angle", BD).when(IsFalse("is_solid_fill")),
        field("scale_spacing", BD)
            .default(D::Double(1.0))
            .when(IsFalse("is_solid_fill")),
        field("double_flag", B).when(IsFalse("is_solid_fill")),
        field("num_deflines", BS).when(IsFalse("is_solid_fill")),
        field("deflines", Records(HATCH_DEFLINE))
            .repeat("num_deflines")
            .when(IsFalse("is_solid_fill")),
        // present when any path is derived
        field("pixel_size", BD).when(IsTrue("has_derived")),
        field("num_seeds", BL),
        field("seeds", Rd2).repeat("num_seeds"),
    ],
);

pub static PROXY_ENTITY: TypeSchema = entity(
    "PROXY_ENTITY",
    &[
        field("class_id", BL),
        field("version", BL).since(R2000),
        field("maint_version", BL).since(R2000),
        field("data", Bytes),
        field("objids", ANY_HANDLE).repeat("num_objids"),
    ],
);
