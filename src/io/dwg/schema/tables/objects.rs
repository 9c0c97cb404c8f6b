//! Non-graphical object layouts: table controls, table records and the
//! fixed dictionary-held objects.

use crate::io::dwg::schema::Condition::*;
use crate::io::dwg::schema::FieldDefault as D;
use crate::io::dwg::schema::FieldKind::*;
use crate::io::dwg::schema::{
    field, FieldSpec, Supertype, TypeSchema, ANY_HANDLE, HARD_OWNER, HARD_PTR, SOFT_OWNER,
    SOFT_PTR,
};
use crate::types::Color;
use crate::types::DxfVersion::{
    AC1014 as R14, AC1015 as R2000, AC1018 as R2004, AC1021 as R2007, AC1024 as R2010,
    AC1027 as R2013,
};

const fn object(name: &'static str, fields: &'static [FieldSpec]) -> TypeSchema {
    TypeSchema {
        name,
        supertype: Supertype::Object,
        fields,
    }
}

const HALF_PI: f64 = std::f64::consts::FRAC_PI_2;

// ---------------------------------------------------------------------------
// Table controls
// ---------------------------------------------------------------------------

static CONTROL_ENTRIES: &[FieldSpec] = &[
    field("num_entries", BL),
    field("entries", SOFT_OWNER).repeat("num_entries"),
];

pub static BLOCK_CONTROL: TypeSchema = object(
    "BLOCK_CONTROL",
    &[
        field("control", Group(CONTROL_ENTRIES)),
        // *MODEL_SPACE and *PAPER_SPACE are not counted
        field("model_space", HARD_OWNER),
        field("paper_space", HARD_OWNER),
    ],
);

pub static LAYER_CONTROL: TypeSchema = object("LAYER_CONTROL", CONTROL_ENTRIES);

pub static STYLE_CONTROL: TypeSchema = object("STYLE_CONTROL", CONTROL_ENTRIES);

pub static LTYPE_CONTROL: TypeSchema = object(
    "LTYPE_CONTROL",
    &[
        field("control", Group(CONTROL_ENTRIES)),
        field("bylayer", HARD_OWNER),
        field("byblock", HARD_OWNER),
    ],
);

pub static VIEW_CONTROL: TypeSchema = object("VIEW_CONTROL", CONTROL_ENTRIES);

pub static UCS_CONTROL: TypeSchema = object("UCS_CONTROL", CONTROL_ENTRIES);

pub static VPORT_CONTROL: TypeSchema = object("VPORT_CONTROL", CONTROL_ENTRIES);

pub static APPID_CONTROL: TypeSchema = object("APPID_CONTROL", CONTROL_ENTRIES);

pub static DIMSTYLE_CONTROL: TypeSchema = object(
    "DIMSTYLE_CONTROL",
    &[
        field("num_entries", BL),
        field("num_morehandles", RC).since(R2000),
        field("entries", SOFT_OWNER).repeat("num_entries"),
        field("morehandles", HARD_OWNER)
            .since(R2000)
            .repeat("num_morehandles"),
    ],
);

pub static VX_CONTROL: TypeSchema = object("VX_CONTROL", CONTROL_ENTRIES);

// ---------------------------------------------------------------------------
// Table records
// ---------------------------------------------------------------------------

/// Name and xref state every table record starts with. The xref block
/// handle opens the record's own handles.
static TABLE_ENTRY: &[FieldSpec] = &[
    field("name", Tv),
    field("flag64", B),
    field("xrefindex_plus1", BS),
    field("xrefdep", B),
    field("xref_block", HARD_PTR),
];

pub static BLOCK_HEADER: TypeSchema = object(
    "BLOCK_HEADER",
    &[
        field("entry", Group(TABLE_ENTRY)),
        field("anonymous", B),
        field("hasattrs", B),
        field("blkisxref", B),
        field("xrefoverlaid", B),
        field("loaded_bit", B).since(R2000),
        field("num_owned", BL).since(R2004),
        field("base_pt", Bd3),
        field("xref_pname", Tv),
        // one non-zero byte per insert, then a zero byte
        field("insert_marks", RC).since(R2000).repeat("insert_mark_count"),
        field("insert_marks_end", RC).since(R2000),
        field("description", Tv).since(R2000),
        field("preview_size", BL).since(R2000),
        field("preview", Bytes).since(R2000).repeat("preview_size"),
        field("insert_units", BS).since(R2007),
        field("explodable", B).since(R2007).default(D::Bool(true)),
        field("block_scaling", RC).since(R2007),
        // handle stream
        field("block_entity", HARD_OWNER),
        field("first_entity", SOFT_PTR)
            .before(R2004)
            .when(IsFalse("blkisxref")),
        field("last_entity", SOFT_PTR)
            .before(R2004)
            .when(IsFalse("blkisxref")),
        field("entities", HARD_OWNER).since(R2004).repeat("num_owned"),
        field("endblk_entity", HARD_OWNER),
        field("inserts", SOFT_PTR).since(R2000).repeat("insert_count"),
        field("layout", HARD_PTR).since(R2000),
    ],
);

pub static LAYER: TypeSchema = object(
    "LAYER",
    &[
        field("entry", Group(TABLE_ENTRY)),
        field("frozen", B).until(R14),
        field("on", B).until(R14).default(D::Bool(true)),
        field("frozen_in_new", B).until(R14),
        field("locked", B).until(R14),
        // frozen 1, off 2, locked 8, plotflag 16, lineweight << 5
        field("flag_values", BS).since(R2000).default(D::Int(0x10 | (0x1D << 5))),
        field("color", Cmc).default(D::Color(Color::Index(7))),
        field("plotstyle", HARD_PTR).since(R2000),
        field("material", HARD_PTR).since(R2007),
        field("linetype", HARD_PTR),
        field("visualstyle", HARD_PTR).since(R2013),
    ],
);

pub static STYLE: TypeSchema = object(
    "STYLE",
    &[
        field("entry", Group(TABLE_ENTRY)),
        field("is_vertical", B),
        field("is_shape", B),
        field("fixed_height", BD),
        field("width_factor", BD).default(D::Double(1.0)),
        field("oblique_angle", BD),
        field("generation", RC),
        field("last_height", BD).default(D::Double(0.2)),
        field("font_file", Tv).default(D::Text("txt")),
        field("bigfont_file", Tv),
    ],
);

static LTYPE_DASH: &[FieldSpec] = &[
    field("length", BD),
    field("complex_shapecode", BS),
    field("x_offset", RD),
    field("y_offset", RD),
    field("scale", BD).default(D::Double(1.0)),
    field("rotation", BD),
    field("shape_flag", BS),
    field("style", HARD_PTR),
];

pub static LTYPE: TypeSchema = object(
    "LTYPE",
    &[
        field("entry", Group(TABLE_ENTRY)),
        field("description", Tv),
        field("pattern_len", BD),
        field("alignment", RC).default(D::Int(b'A' as i64)),
        field("num_dashes", RC),
        field("dashes", Records(LTYPE_DASH)).repeat("num_dashes"),
        field("strings_area", FixedBytes(256)).before(R2007),
        field("strings_area", FixedBytes(512))
            .since(R2007)
            .when(IsTrue("has_strings_area")),
    ],
);

/// View geometry shared by VIEW and VPORT.
static VIEW_GEOMETRY: &[FieldSpec] = &[
    field("view_target", Bd3),
    field("view_dir", Bd3).default(D::Point3(0.0, 0.0, 1.0)),
    field("view_twist", BD),
    field("lens_length", BD).default(D::Double(50.0)),
    field("front_clip", BD),
    field("back_clip", BD),
    field("view_mode", Bits(4)),
    field("render_mode", RC).since(R2000),
    field("use_default_lights", B).since(R2007).default(D::Bool(true)),
    field("default_lighting_type", RC).since(R2007).default(D::Int(1)),
    field("brightness", BD).since(R2007),
    field("contrast", BD).since(R2007),
    field("ambient_color", Cmc).since(R2007),
];

pub static VIEW: TypeSchema = object(
    "VIEW",
    &[
        field("entry", Group(TABLE_ENTRY)),
        field("view_height", BD).default(D::Double(1.0)),
        field("view_width", BD).default(D::Double(1.0)),
        field("view_center", Rd2),
        field("geometry", Group(VIEW_GEOMETRY)),
        field("pspace_flag", B),
        field("associated_ucs", B).since(R2000),
        field("ucs_origin", Bd3)
            .since(R2000)
            .when(IsTrue("associated_ucs")),
        field("ucs_x_axis", Bd3)
            .since(R2000)
            .default(D::Point3(1.0, 0.0, 0.0))
            .when(IsTrue("associated_ucs")),
        field("ucs_y_axis", Bd3)
            .since(R2000)
            .default(D::Point3(0.0, 1.0, 0.0))
            .when(IsTrue("associated_ucs")),
        field("ucs_elevation", BD)
            .since(R2000)
            .when(IsTrue("associated_ucs")),
        field("ucs_ortho_view_type", BS)
            .since(R2000)
            .when(IsTrue("associated_ucs")),
        field("is_camera_plottable", B).since(R2007),
        field("background", SOFT_PTR).since(R2007),
        field("visualstyle", HARD_PTR).since(R2007),
        field("sun", HARD_OWNER).since(R2007),
        field("base_ucs", HARD_PTR)
            .since(R2000)
            .when(IsTrue("associated_ucs")),
        field("named_ucs", HARD_PTR)
            .since(R2000)
            .when(IsTrue("associated_ucs")),
        field("livesection", SOFT_PTR).since(R2007),
    ],
);

pub static UCS: TypeSchema = object(
    "UCS",
    &[
        field("entry", Group(TABLE_ENTRY)),
        field("origin", Bd3),
        field("x_axis", Bd3).default(D::Point3(1.0, 0.0, 0.0)),
        field("y_axis", Bd3).default(D::Point3(0.0, 1.0, 0.0)),
        field("elevation", BD).since(R2000),
        field("ortho_view_type", BS).since(R2000),
        field("ortho_type", BS).since(R2000),
        field("base_ucs", HARD_PTR).since(R2000),
        field("named_ucs", HARD_PTR).since(R2000),
    ],
);

pub static VPORT: TypeSchema = object(
    "VPORT",
    &[
        field("entry", Group(TABLE_ENTRY)),
        field("view_height", BD).default(D::Double(1.0)),
        field("aspect_ratio", BD).default(D::Double(1.0)),
        field("view_center", Rd2),
        field("geometry", Group(VIEW_GEOMETRY)),
        field("lower_left", Rd2),
        field("upper_right", Rd2).default(D::Point2(1.0, 1.0)),
        field("ucsfollow", B),
        field("circle_zoom", BS).default(D::Int(1000)),
        field("fast_zoom", B).default(D::Bool(true)),
        field("ucsicon", Bits(2)),
        field("grid_on", B),
        field("grid_spacing", Rd2),
        field("snap_on", B),
        field("snap_style", B),
        field("snap_isopair", BS),
        field("snap_rotation", BD),
        field("snap_base", Rd2),
        field("snap_spacing", Rd2),
        field("unknown", B).since(R2000),
        field("ucs_per_viewport", B).since(R2000).default(D::Bool(true)),
        field("ucs_origin", Bd3).since(R2000),
        field("ucs_x_axis", Bd3)
            .since(R2000)
            .default(D::Point3(1.0, 0.0, 0.0)),
        field("ucs_y_axis", Bd3)
            .since(R2000)
            .default(D::Point3(0.0, 1.0, 0.0)),
        field("ucs_elevation", BD).since(R2000),
        field("ucs_ortho_view_type", BS).since(R2000),
        field("grid_flags", BS).since(R2007),
        field("grid_major", BS).since(R2007).default(D::Int(5)),
        field("background", SOFT_PTR).since(R2007),
        field("visualstyle", HARD_PTR).since(R2007),
        field("sun", HARD_OWNER).since(R2007),
        field("named_ucs", HARD_PTR).since(R2000),
        field("base_ucs", HARD_PTR).since(R2000),
    ],
);

pub static APPID: TypeSchema = object(
    "APPID",
    &[field("entry", Group(TABLE_ENTRY)), field("unknown", RC)],
);

// R13-R14 dimension variables, in stored order.
static DIMSTYLE_R13: &[FieldSpec] = &[
    field("dimtol", B),
    field("dimlim", B),
    field("dimtih", B).default(D::Bool(true)),
    field("dimtoh", B).default(D::Bool(true)),
    field("dimse1", B),
    field("dimse2", B),
    field("dimalt", B),
    field("dimtofl", B),
    field("dimsah", B),
    field("dimtix", B),
    field("dimsoxd", B),
    field("dimaltd", RC).default(D::Int(2)),
    field("dimzin", RC),
    field("dimsd1", B),
    field("dimsd2", B),
    field("dimtolj", RC).default(D::Int(1)),
    field("dimjust", RC),
    field("dimfit", RC).default(D::Int(3)),
    field("dimupt", B),
    field("dimtzin", RC),
    field("dimaltz", RC),
    field("dimalttz", RC),
    field("dimtad", RC),
    field("dimunit", BS).default(D::Int(2)),
    field("dimaunit", BS),
    field("dimdec", BS).default(D::Int(4)),
    field("dimtdec", BS).default(D::Int(4)),
    field("dimaltu", BS).default(D::Int(2)),
    field("dimalttd", BS).default(D::Int(2)),
    field("dimscale", BD).default(D::Double(1.0)),
    field("dimasz", BD).default(D::Double(0.18)),
    field("dimexo", BD).default(D::Double(0.0625)),
    field("dimdli", BD).default(D::Double(0.38)),
    field("dimexe", BD).default(D::Double(0.18)),
    field("dimrnd", BD),
    field("dimdle", BD),
    field("dimtp", BD),
    field("dimtm", BD),
    field("dimtxt", BD).default(D::Double(0.18)),
    field("dimcen", BD).default(D::Double(0.09)),
    field("dimtsz", BD),
    field("dimaltf", BD).default(D::Double(25.4)),
    field("dimlfac", BD).default(D::Double(1.0)),
    field("dimtvp", BD),
    field("dimtfac", BD).default(D::Double(1.0)),
    field("dimgap", BD).default(D::Double(0.09)),
    field("dimpost", Tv),
    field("dimapost", Tv),
    field("dimblk_name", Tv),
    field("dimblk1_name", Tv),
    field("dimblk2_name", Tv),
    field("dimclrd", BS),
    field("dimclre", BS),
    field("dimclrt", BS),
];

// R2000 and later dimension variables, in stored order.
static DIMSTYLE_R2000: &[FieldSpec] = &[
    field("dimpost", Tv),
    field("dimapost", Tv),
    field("dimscale", BD).default(D::Double(1.0)),
    field("dimasz", BD).default(D::Double(0.18)),
    field("dimexo", BD).default(D::Double(0.0625)),
    field("dimdli", BD).default(D::Double(0.38)),
    field("dimexe", BD).default(D::Double(0.18)),
    field("dimrnd", BD),
    field("dimdle", BD),
    field("dimtp", BD),
    field("dimtm", BD),
    field("dimfxl", BD).since(R2007).default(D::Double(1.0)),
    field("dimjogang", BD).since(R2007).default(D::Double(0.7853981633974483)),
    field("dimtfill", BS).since(R2007),
    field("dimtfillclr", Cmc).since(R2007).default(D::Color(Color::ByBlock)),
    field("dimtol", B),
    field("dimlim", B),
    field("dimtih", B).default(D::Bool(true)),
    field("dimtoh", B).default(D::Bool(true)),
    field("dimse1", B),
    field("dimse2", B),
    field("dimtad", BS),
    field("dimzin", BS),
    field("dimazin", BS),
    field("dimarcsym", BS).since(R2007),
    field("dimtxt", BD).default(D::Double(0.18)),
    field("dimcen", BD).default(D::Double(0.09)),
    field("dimtsz", BD),
    field("dimaltf", BD).default(D::Double(25.4)),
    field("dimlfac", BD).default(D::Double(1.0)),
    field("dimtvp", BD),
    field("dimtfac", BD).default(D::Double(1.0)),
    field("dimgap", BD).default(D::Double(0.09)),
    field("dimaltrnd", BD),
    field("dimalt", B),
    field("dimaltd", BS).default(D::Int(2)),
    field("dimtofl", B),
    field("dimsah", B),
    field("dimtix", B),
    field("dimsoxd", B),
    field("dimclrd", Cmc).default(D::Color(Color::ByBlock)),
    field("dimclre", Cmc).default(D::Color(Color::ByBlock)),
    field("dimclrt", Cmc).default(D::Color(Color::ByBlock)),
    field("dimadec", BS),
    field("dimdec", BS).default(D::Int(4)),
    field("dimtdec", BS).default(D::Int(4)),
    field("dimaltu", BS).default(D::Int(2)),
    field("dimalttd", BS).default(D::Int(2)),
    field("dimaunit", BS),
    field("dimfrac", BS),
    field("dimlunit", BS).default(D::Int(2)),
    field("dimdsep", BS).default(D::Int(b'.' as i64)),
    field("dimtmove", BS),
    field("dimjust", BS),
    field("dimsd1", B),
    field("dimsd2", B),
    field("dimtolj", BS).default(D::Int(1)),
    field("dimtzin", BS),
    field("dimaltz", BS),
    field("dimalttz", BS),
    field("dimupt", B),
    field("dimatfit", BS).default(D::Int(3)),
    field("dimfxlon", B).since(R2007),
    field("dimtxtdirection", B).since(R2010),
    field("dimaltmzf", BD).since(R2010),
    field("dimaltmzs", Tv).since(R2010),
    field("dimmzf", BD).since(R2010),
    field("dimmzs", Tv).since(R2010),
    field("dimlwd", BS).default(D::Int(-2)),
    field("dimlwe", BS).default(D::Int(-2)),
];

pub static DIMSTYLE: TypeSchema = object(
    "DIMSTYLE",
    &[
        field("entry", Group(TABLE_ENTRY)),
        field("r13", Group(DIMSTYLE_R13)).until(R14),
        field("r2000", Group(DIMSTYLE_R2000)).since(R2000),
        field("flag0", B),
        field("dimtxsty", HARD_PTR),
        field("dimldrblk", HARD_PTR).since(R2000),
        field("dimblk", HARD_PTR).since(R2000),
        field("dimblk1", HARD_PTR).since(R2000),
        field("dimblk2", HARD_PTR).since(R2000),
        field("dimltype", HARD_PTR).since(R2007),
        field("dimltex1", HARD_PTR).since(R2007),
        field("dimltex2", HARD_PTR).since(R2007),
    ],
);

pub static VX_TABLE_RECORD: TypeSchema = object(
    "VX_TABLE_RECORD",
    &[
        field("entry", Group(TABLE_ENTRY)),
        field("is_on", B).default(D::Bool(true)),
        field("viewport", SOFT_PTR),
        field("prev_entry", HARD_PTR),
    ],
);

// ---------------------------------------------------------------------------
// Objects
// ---------------------------------------------------------------------------

static DICTIONARY_ENTRY: &[FieldSpec] = &[field("name", Tv), field("item", SOFT_OWNER)];

pub(super) static DICTIONARY_DATA: &[FieldSpec] = &[
    field("num_items", BL),
    field("unknown_r14", RC).since(R14).until(R14),
    field("cloning", BS).since(R2000).default(D::Int(1)),
    field("is_hardowner", RC).since(R2000),
    field("entries", Records(DICTIONARY_ENTRY)).repeat("num_items"),
];

pub static DICTIONARY: TypeSchema = object("DICTIONARY", DICTIONARY_DATA);

pub static GROUP: TypeSchema = object(
    "GROUP",
    &[
        field("name", Tv),
        field("unnamed", BS),
        field("selectable", BS).default(D::Int(1)),
        field("num_groups", BL),
        field("groups", HARD_PTR).repeat("num_groups"),
    ],
);

static MLINESTYLE_LINE: &[FieldSpec] = &[
    field("offset", BD),
    field("color", Cmc),
    field("lt_index", BS),
];

pub static MLINESTYLE: TypeSchema = object(
    "MLINESTYLE",
    &[
        field("name", Tv).default(D::Text("STANDARD")),
        field("description", Tv),
        field("flag", BS),
        field("fill_color", Cmc).default(D::Color(Color::ByLayer)),
        field("start_angle", BD).default(D::Double(HALF_PI)),
        field("end_angle", BD).default(D::Double(HALF_PI)),
        field("num_lines", RC),
        field("lines", Records(MLINESTYLE_LINE)).repeat("num_lines"),
    ],
);

pub(super) static XRECORD_DATA: &[FieldSpec] = &[
    field("xdata_size", BL),
    // group-code/value stream, stored as captured
    field("xdata", Bytes).repeat("xdata_size"),
    field("cloning", BS).since(R2000).default(D::Int(1)),
    field("objids", ANY_HANDLE).repeat("num_objids"),
];

pub static XRECORD: TypeSchema = object("XRECORD", XRECORD_DATA);

pub static PLACEHOLDER: TypeSchema = object("PLACEHOLDER", &[]);

static PLOT_SETTINGS: &[FieldSpec] = &[
    field("page_setup_name", Tv),
    field("printer_cfg_file", Tv),
    field("plot_flags", BS),
    field("left_margin", BD),
    field("bottom_margin", BD),
    field("right_margin", BD),
    field("top_margin", BD),
    field("paper_width", BD),
    field("paper_height", BD),
    field("paper_size", Tv),
    field("plot_origin", Bd2),
    field("plot_paper_unit", BS),
    field("plot_rotation", BS),
    field("plot_type", BS),
    field("plot_window_ll", Bd2),
    field("plot_window_ur", Bd2),
    field("plot_view_name", Tv).before(R2004),
    field("paper_units", BD).default(D::Double(1.0)),
    field("drawing_units", BD).default(D::Double(1.0)),
    field("stylesheet", Tv),
    field("std_scale_type", BS),
    field("std_scale_factor", BD).default(D::Double(1.0)),
    field("paper_image_origin", Bd2),
    field("shadeplot_type", BS).since(R2004),
    field("shadeplot_reslevel", BS).since(R2004),
    field("shadeplot_customdpi", BS).since(R2004),
    field("plotview", HARD_PTR).since(R2004),
    field("shadeplot", HARD_PTR).since(R2007),
];

pub(super) static LAYOUT_DATA: &[FieldSpec] = &[
    field("plotsettings", Group(PLOT_SETTINGS)),
    field("layout_name", Tv),
    field("tab_order", BS),
    field("layout_flags", BS),
    field("ucs_origin", Bd3),
    field("minimum_limits", Rd2),
    field("maximum_limits", Rd2).default(D::Point2(12.0, 9.0)),
    field("ins_point", Bd3),
    field("ucs_x_axis", Bd3).default(D::Point3(1.0, 0.0, 0.0)),
    field("ucs_y_axis", Bd3).default(D::Point3(0.0, 1.0, 0.0)),
    field("ucs_elevation", BD),
    field("ucs_ortho_view_type", BS),
    field("extent_min", Bd3),
    field("extent_max", Bd3),
    field("num_viewports", BL).since(R2004),
    field("block_header", SOFT_PTR),
    field("active_viewport", HARD_PTR),
    field("base_ucs", HARD_PTR),
    field("named_ucs", HARD_PTR),
    field("viewports", SOFT_PTR).since(R2004).repeat("num_viewports"),
];

pub static LAYOUT: TypeSchema = object("LAYOUT", LAYOUT_DATA);

pub static PROXY_OBJECT: TypeSchema = object(
    "PROXY_OBJECT",
    &[
        field("class_id", BL),
        field("version", BL).since(R2000),
        field("maint_version", BL).since(R2000),
        field("data", Bytes),
        field("objids", ANY_HANDLE).repeat("num_objids"),
    ],
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{field_map, FieldMap, FieldValue, ObjectRef};
    use crate::io::dwg::handle_resolver::HandleResolver;
    use crate::io::dwg::reader::DwgStreamReaderBase;
    use crate::io::dwg::schema::{FieldWalker, Pass};
    use crate::io::dwg::writer::configuration::EncodeConfiguration;
    use crate::io::dwg::writer::stream_writer_base::DwgStreamWriterBase;
    use crate::notification::NotificationCollection;
    use crate::types::{DxfVersion, Handle};

    fn encode(
        version: DxfVersion,
        schema: &'static TypeSchema,
        source: &FieldMap,
        pass: Pass,
    ) -> (Vec<u8>, NotificationCollection) {
        let config = EncodeConfiguration::new(version);
        let mut writer = DwgStreamWriterBase::new(version);
        let mut notes = NotificationCollection::new();
        let resolver = HandleResolver::new(&[]);
        let mut walker =
            FieldWalker::new(&mut writer, &config, &resolver, &mut notes, schema.name, 0x40);
        walker.write_schema(schema, source, pass).unwrap();
        (writer.into_data(), notes)
    }

    fn dictionary() -> FieldMap {
        field_map([(
            "entries",
            FieldValue::Records(vec![
                field_map([
                    ("name", FieldValue::Text("ACAD_GROUP".into())),
                    ("item", ObjectRef::handle(2, 0x0D).into()),
                ]),
                field_map([
                    ("name", FieldValue::Text("ACAD_MLINESTYLE".into())),
                    ("item", ObjectRef::handle(2, 0x17).into()),
                ]),
            ]),
        )])
    }

    #[test]
    fn test_dictionary_names_in_data_items_in_handles() {
        let (data, _) = encode(DxfVersion::AC1015, &DICTIONARY, &dictionary(), Pass::Data);
        let mut r = DwgStreamReaderBase::new(data, DxfVersion::AC1015);
        assert_eq!(r.read_bit_long().unwrap(), 2);
        assert_eq!(r.read_bit_short().unwrap(), 1);
        assert_eq!(r.read_byte().unwrap(), 0);
        assert_eq!(r.read_variable_text().unwrap(), "ACAD_GROUP");
        assert_eq!(r.read_variable_text().unwrap(), "ACAD_MLINESTYLE");

        let (data, notes) = encode(DxfVersion::AC1015, &DICTIONARY, &dictionary(), Pass::Handles);
        assert!(notes.is_empty());
        let mut r = DwgStreamReaderBase::new(data, DxfVersion::AC1015);
        assert_eq!(r.read_handle().unwrap(), Handle::new(2, 0x0D));
        assert_eq!(r.read_handle().unwrap(), Handle::new(2, 0x17));
    }

    #[test]
    fn test_dictionary_r14_unknown_byte() {
        let (data, _) = encode(DxfVersion::AC1014, &DICTIONARY, &dictionary(), Pass::Data);
        let mut r = DwgStreamReaderBase::new(data, DxfVersion::AC1014);
        assert_eq!(r.read_bit_long().unwrap(), 2);
        assert_eq!(r.read_byte().unwrap(), 0);
        assert_eq!(r.read_variable_text().unwrap(), "ACAD_GROUP");
    }

    #[test]
    fn test_layer_r13_flags_as_bits() {
        let source = field_map([
            ("name", FieldValue::Text("0".into())),
            ("frozen", FieldValue::Bool(true)),
        ]);
        let (data, _) = encode(DxfVersion::AC1012, &LAYER, &source, Pass::Data);
        let mut r = DwgStreamReaderBase::new(data, DxfVersion::AC1012);
        assert_eq!(r.read_variable_text().unwrap(), "0");
        assert!(!r.read_bit().unwrap());
        assert_eq!(r.read_bit_short().unwrap(), 0);
        assert!(!r.read_bit().unwrap());
        assert!(r.read_bit().unwrap()); // frozen
        assert!(r.read_bit().unwrap()); // on
        assert!(!r.read_bit().unwrap());
        assert!(!r.read_bit().unwrap());
        assert_eq!(r.read_cm_color().unwrap(), Color::Index(7));
    }

    #[test]
    fn test_ltype_strings_area_is_padded() {
        let source = field_map([
            ("name", FieldValue::Text("DASHED".into())),
            ("strings_area", FieldValue::Bytes(vec![1, 2, 3])),
        ]);
        let (data, notes) = encode(DxfVersion::AC1015, &LTYPE, &source, Pass::Data);
        assert!(notes.is_empty());
        let mut r = DwgStreamReaderBase::new(data, DxfVersion::AC1015);
        r.read_variable_text().unwrap();
        r.read_bit().unwrap();
        r.read_bit_short().unwrap();
        r.read_bit().unwrap();
        assert_eq!(r.read_variable_text().unwrap(), "");
        assert_eq!(r.read_bit_double().unwrap(), 0.0);
        assert_eq!(r.read_byte().unwrap(), b'A');
        assert_eq!(r.read_byte().unwrap(), 0);
        let area = r.read_bytes(256).unwrap();
        assert_eq!(&area[..4], &[1, 2, 3, 0]);
    }

    #[test]
    fn test_block_control_handles() {
        let source = field_map([
            (
                "entries",
                FieldValue::List(vec![ObjectRef::handle(2, 0x30).into()]),
            ),
            ("model_space", ObjectRef::handle(3, 0x1F).into()),
            ("paper_space", ObjectRef::handle(3, 0x1B).into()),
        ]);
        let (data, _) = encode(DxfVersion::AC1015, &BLOCK_CONTROL, &source, Pass::Data);
        let mut r = DwgStreamReaderBase::new(data, DxfVersion::AC1015);
        assert_eq!(r.read_bit_long().unwrap(), 1);

        let (data, notes) = encode(DxfVersion::AC1015, &BLOCK_CONTROL, &source, Pass::Handles);
        assert!(notes.is_empty());
        let mut r = DwgStreamReaderBase::new(data, DxfVersion::AC1015);
        assert_eq!(r.read_handle().unwrap(), Handle::new(2, 0x30));
        assert_eq!(r.read_handle().unwrap(), Handle::new(3, 0x1F));
        assert_eq!(r.read_handle().unwrap(), Handle::new(3, 0x1B));
    }
}
