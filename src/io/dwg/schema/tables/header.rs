//! Header variables and auxiliary header layouts.
//!
//! Both are written with [`Pass::Inline`](crate::io::dwg::schema::Pass):
//! in R13-R2000 the header section is a single stream with its handles in
//! place. Field names are the lower-cased system variable names.

use crate::io::dwg::schema::Condition::*;
use crate::io::dwg::schema::FieldDefault as D;
use crate::io::dwg::schema::FieldKind::*;
use crate::io::dwg::schema::{field, FieldSpec, ANY_HANDLE, HARD_OWNER, HARD_PTR};
use crate::types::Color;
use crate::types::DxfVersion::{AC1014 as R14, AC1015 as R2000};

static PAPER_SPACE: &[FieldSpec] = &[
    field("psvpscale", BD).since(R2000),
    field("pinsbase", Bd3),
    field("pextmin", Bd3).default(D::Point3(1.0e20, 1.0e20, 1.0e20)),
    field("pextmax", Bd3).default(D::Point3(-1.0e20, -1.0e20, -1.0e20)),
    field("plimmin", Rd2),
    field("plimmax", Rd2).default(D::Point2(12.0, 9.0)),
    field("pelevation", BD),
    field("pucsorg", Bd3),
    field("pucsxdir", Bd3).default(D::Point3(1.0, 0.0, 0.0)),
    field("pucsydir", Bd3).default(D::Point3(0.0, 1.0, 0.0)),
    field("pucsname", HARD_PTR),
    field("pucsorthoref", HARD_PTR).since(R2000),
    field("pucsorthoview", BS).since(R2000),
    field("pucsbase", HARD_PTR).since(R2000),
    field("pucsorgtop", Bd3).since(R2000),
    field("pucsorgbottom", Bd3).since(R2000),
    field("pucsorgleft", Bd3).since(R2000),
    field("pucsorgright", Bd3).since(R2000),
    field("pucsorgfront", Bd3).since(R2000),
    field("pucsorgback", Bd3).since(R2000),
];

static MODEL_SPACE: &[FieldSpec] = &[
    field("insbase", Bd3),
    field("extmin", Bd3).default(D::Point3(1.0e20, 1.0e20, 1.0e20)),
    field("extmax", Bd3).default(D::Point3(-1.0e20, -1.0e20, -1.0e20)),
    field("limmin", Rd2),
    field("limmax", Rd2).default(D::Point2(12.0, 9.0)),
    field("elevation", BD),
    field("ucsorg", Bd3),
    field("ucsxdir", Bd3).default(D::Point3(1.0, 0.0, 0.0)),
    field("ucsydir", Bd3).default(D::Point3(0.0, 1.0, 0.0)),
    field("ucsname", HARD_PTR),
    field("ucsorthoref", HARD_PTR).since(R2000),
    field("ucsorthoview", BS).since(R2000),
    field("ucsbase", HARD_PTR).since(R2000),
    field("ucsorgtop", Bd3).since(R2000),
    field("ucsorgbottom", Bd3).since(R2000),
    field("ucsorgleft", Bd3).since(R2000),
    field("ucsorgright", Bd3).since(R2000),
    field("ucsorgfront", Bd3).since(R2000),
    field("ucsorgback", Bd3).since(R2000),
    field("dimpost", Tv).since(R2000),
    field("dimapost", Tv).since(R2000),
];

static DIMENSION_VARIABLES: &[FieldSpec] = &[
    field("dimtol", B).until(R14),
    field("dimlim", B).until(R14),
    field("dimtih", B).until(R14).default(D::Bool(true)),
    field("dimtoh", B).until(R14).default(D::Bool(true)),
    field("dimse1", B).until(R14),
    field("dimse2", B).until(R14),
    field("dimalt", B).until(R14),
    field("dimtofl", B).until(R14),
    field("dimsah", B).until(R14),
    field("dimtix", B).until(R14),
    field("dimsoxd", B).until(R14),
    field("dimaltd", RC).until(R14).default(D::Int(2)),
    field("dimzin", RC).until(R14),
    field("dimsd1", B).until(R14),
    field("dimsd2", B).until(R14),
    field("dimtolj", RC).until(R14).default(D::Int(1)),
    field("dimjust", RC).until(R14),
    field("dimfit", RC).until(R14).default(D::Int(3)),
    field("dimupt", B).until(R14),
    field("dimtzin", RC).until(R14),
    field("dimaltz", RC).until(R14),
    field("dimalttz", RC).until(R14),
    field("dimtad", RC).until(R14),
    field("dimunit", BS).until(R14).default(D::Int(2)),
    field("dimaunit", BS).until(R14),
    field("dimdec", BS).until(R14).default(D::Int(4)),
    field("dimtdec", BS).until(R14).default(D::Int(4)),
    field("dimaltu", BS).until(R14).default(D::Int(2)),
    field("dimalttd", BS).until(R14).default(D::Int(2)),
    field("dimtxsty", HARD_PTR).until(R14),
    field("dimscale", BD).default(D::Double(1.0)),
    field("dimasz", BD).default(D::Double(0.18)),
    field("dimexo", BD).default(D::Double(0.0625)),
    field("dimdli", BD).default(D::Double(0.38)),
    field("dimexe", BD).default(D::Double(0.18)),
    field("dimrnd", BD),
    field("dimdle", BD),
    field("dimtp", BD),
    field("dimtm", BD),
    field("dimtol", B).since(R2000),
    field("dimlim", B).since(R2000),
    field("dimtih", B).since(R2000).default(D::Bool(true)),
    field("dimtoh", B).since(R2000).default(D::Bool(true)),
    field("dimse1", B).since(R2000),
    field("dimse2", B).since(R2000),
    field("dimtad", BS).since(R2000),
    field("dimzin", BS).since(R2000),
    field("dimazin", BS).since(R2000),
    field("dimtxt", BD).default(D::Double(0.18)),
    field("dimcen", BD).default(D::Double(0.09)),
    field("dimtsz", BD),
    field("dimaltf", BD).default(D::Double(25.4)),
    field("dimlfac", BD).default(D::Double(1.0)),
    field("dimtvp", BD),
    field("dimtfac", BD).default(D::Double(1.0)),
    field("dimgap", BD).default(D::Double(0.09)),
    field("dimpost", Tv).until(R14),
    field("dimapost", Tv).until(R14),
    field("dimblk", Tv).until(R14),
    field("dimblk1", Tv).until(R14),
    field("dimblk2", Tv).until(R14),
    field("dimaltrnd", BD).since(R2000),
    field("dimalt", B).since(R2000),
    field("dimaltd", BS).since(R2000).default(D::Int(2)),
    field("dimtofl", B).since(R2000),
    field("dimsah", B).since(R2000),
    field("dimtix", B).since(R2000),
    field("dimsoxd", B).since(R2000),
    field("dimclrd", Cmc).default(D::Color(Color::ByBlock)),
    field("dimclre", Cmc).default(D::Color(Color::ByBlock)),
    field("dimclrt", Cmc).default(D::Color(Color::ByBlock)),
    field("dimadec", BS).since(R2000),
    field("dimdec", BS).since(R2000).default(D::Int(4)),
    field("dimtdec", BS).since(R2000).default(D::Int(4)),
    field("dimaltu", BS).since(R2000).default(D::Int(2)),
    field("dimalttd", BS).since(R2000).default(D::Int(2)),
    field("dimaunit", BS).since(R2000),
    field("dimfrac", BS).since(R2000),
    field("dimlunit", BS).since(R2000).default(D::Int(2)),
    field("dimdsep", BS).since(R2000).default(D::Int(b'.' as i64)),
    field("dimtmove", BS).since(R2000),
    field("dimjust", BS).since(R2000),
    field("dimsd1", B).since(R2000),
    field("dimsd2", B).since(R2000),
    field("dimtolj", BS).since(R2000).default(D::Int(1)),
    field("dimtzin", BS).since(R2000),
    field("dimaltz", BS).since(R2000),
    field("dimalttz", BS).since(R2000),
    field("dimupt", B).since(R2000),
    field("dimatfit", BS).since(R2000).default(D::Int(3)),
    field("dimtxsty", HARD_PTR).since(R2000),
    field("dimldrblk", HARD_PTR).since(R2000),
    field("dimblk", HARD_PTR).since(R2000),
    field("dimblk1", HARD_PTR).since(R2000),
    field("dimblk2", HARD_PTR).since(R2000),
    field("dimlwd", BS).since(R2000).default(D::Int(-2)),
    field("dimlwe", BS).since(R2000).default(D::Int(-2)),
];

static CONTROL_OBJECTS: &[FieldSpec] = &[
    field("block_control_object", HARD_OWNER),
    field("layer_control_object", HARD_OWNER),
    field("style_control_object", HARD_OWNER),
    field("linetype_control_object", HARD_OWNER),
    field("view_control_object", HARD_OWNER),
    field("ucs_control_object", HARD_OWNER),
    field("vport_control_object", HARD_OWNER),
    field("appid_control_object", HARD_OWNER),
    field("dimstyle_control_object", HARD_OWNER),
    field("vx_control_object", HARD_OWNER),
    field("dictionary_acad_group", HARD_PTR),
    field("dictionary_acad_mlinestyle", HARD_PTR),
    field("dictionary_named_objects", HARD_OWNER),
];

/// System variables of the header section, R13 through R2000.
pub static HEADER_VARIABLES: &[FieldSpec] = &[
    field("unknown_1", BD).default(D::Double(412148564080.0)),
    field("unknown_2", BD).default(D::Double(1.0)),
    field("unknown_3", BD).default(D::Double(1.0)),
    field("unknown_4", BD).default(D::Double(1.0)),
    field("unknown_text1", Tv).default(D::Text("m")),
    field("unknown_text2", Tv),
    field("unknown_text3", Tv),
    field("unknown_text4", Tv),
    field("unknown_5", BL).default(D::Int(24)),
    field("unknown_6", BL),
    field("unknown_7", BS).until(R14),
    field("current_viewport_entity_header", HARD_PTR),
    field("dimaso", B).default(D::Bool(true)),
    field("dimsho", B).default(D::Bool(true)),
    field("dimsav", B).until(R14),
    field("plinegen", B),
    field("orthomode", B),
    field("regenmode", B).default(D::Bool(true)),
    field("fillmode", B).default(D::Bool(true)),
    field("qtextmode", B),
    field("psltscale", B).default(D::Bool(true)),
    field("limcheck", B),
    field("blipmode", B).until(R14),
    field("usrtimer", B).default(D::Bool(true)),
    field("skpoly", B),
    field("angdir", B),
    field("splframe", B),
    field("attreq", B).until(R14).default(D::Bool(true)),
    field("attdia", B).until(R14),
    field("mirrtext", B),
    field("worldview", B).default(D::Bool(true)),
    field("wireframe", B).until(R14),
    field("tilemode", B).default(D::Bool(true)),
    field("plimcheck", B),
    field("visretain", B).default(D::Bool(true)),
    field("delobj", B).until(R14).default(D::Bool(true)),
    field("dispsilh", B),
    field("pellipse", B),
    field("proxygraphics", BS).default(D::Int(1)),
    field("dragmode", BS).until(R14).default(D::Int(2)),
    field("treedepth", BS).default(D::Int(3020)),
    field("lunits", BS).default(D::Int(2)),
    field("luprec", BS).default(D::Int(4)),
    field("aunits", BS),
    field("auprec", BS),
    field("osmode", BS).until(R14),
    field("attmode", BS).default(D::Int(1)),
    field("coords", BS).until(R14).default(D::Int(1)),
    field("pdmode", BS),
    field("pickstyle", BS).until(R14).default(D::Int(1)),
    field("useri1", BS),
    field("useri2", BS),
    field("useri3", BS),
    field("useri4", BS),
    field("useri5", BS),
    field("splinesegs", BS).default(D::Int(8)),
    field("surfu", BS).default(D::Int(6)),
    field("surfv", BS).default(D::Int(6)),
    field("surftype", BS).default(D::Int(6)),
    field("surftab1", BS).default(D::Int(6)),
    field("surftab2", BS).default(D::Int(6)),
    field("splinetype", BS).default(D::Int(6)),
    field("shadedge", BS).default(D::Int(3)),
    field("shadedif", BS).default(D::Int(70)),
    field("unitmode", BS),
    field("maxactvp", BS).default(D::Int(64)),
    field("isolines", BS).default(D::Int(4)),
    field("cmljust", BS),
    field("textqlty", BS).default(D::Int(50)),
    field("ltscale", BD).default(D::Double(1.0)),
    field("textsize", BD).default(D::Double(0.2)),
    field("tracewid", BD).default(D::Double(0.05)),
    field("sketchinc", BD).default(D::Double(0.1)),
    field("filletrad", BD),
    field("thickness", BD),
    field("angbase", BD),
    field("pdsize", BD),
    field("plinewid", BD),
    field("userr1", BD),
    field("userr2", BD),
    field("userr3", BD),
    field("userr4", BD),
    field("userr5", BD),
    field("chamfera", BD),
    field("chamferb", BD),
    field("chamferc", BD),
    field("chamferd", BD),
    field("facetres", BD).default(D::Double(0.5)),
    field("cmlscale", BD).default(D::Double(1.0)),
    field("celtscale", BD).default(D::Double(1.0)),
    field("menuname", Tv).default(D::Text("acad")),
    // Julian day and fraction
    field("tdcreate", TimeBl).default(D::Double(2451544.5)),
    field("tdupdate", TimeBl).default(D::Double(2451544.5)),
    // elapsed days and fraction
    field("tdindwg", TimeBl),
    field("tdusrtimer", TimeBl),
    field("cecolor", Cmc).default(D::Color(Color::ByLayer)),
    field("handseed", ANY_HANDLE),
    field("clayer", HARD_PTR),
    field("textstyle", HARD_PTR),
    field("celtype", HARD_PTR),
    field("dimstyle", HARD_PTR),
    field("cmlstyle", HARD_PTR),
    field("paper_space", Group(PAPER_SPACE)),
    field("model_space", Group(MODEL_SPACE)),
    field("dimension_variables", Group(DIMENSION_VARIABLES)),
    field("control_objects", Group(CONTROL_OBJECTS)),
    field("tstackalign", BS).since(R2000).default(D::Int(1)),
    field("tstacksize", BS).since(R2000).default(D::Int(70)),
    field("hyperlinkbase", Tv).since(R2000),
    field("stylesheet", Tv).since(R2000),
    field("dictionary_layouts", HARD_PTR).since(R2000),
    field("dictionary_plotsettings", HARD_PTR).since(R2000),
    field("dictionary_plotstyles", HARD_PTR).since(R2000),
    // celweight 0x1F, endcaps 0x60, joinstyle 0x180, lwdisplay off 0x200,
    // xedit off 0x400, extnames 0x800, pstylemode 0x2000, olestartup 0x4000
    field("flags", BL).since(R2000).default(D::Int(0x081F)),
    field("insunits", BS).since(R2000),
    field("cepsntype", BS).since(R2000),
    field("cpsnid", HARD_PTR)
        .since(R2000)
        .when(Equals("cepsntype", 3)),
    field("fingerprintguid", Tv).since(R2000),
    field("versionguid", Tv).since(R2000),
    field("block_record_paper_space", HARD_PTR),
    field("block_record_model_space", HARD_PTR),
    field("ltype_bylayer", HARD_PTR),
    field("ltype_byblock", HARD_PTR),
    field("ltype_continuous", HARD_PTR),
    field("unknown_8", BS).since(R14).default(D::Int(-1)),
    field("unknown_9", BS).since(R14).default(D::Int(-1)),
    field("unknown_10", BS).since(R14).default(D::Int(-1)),
    field("unknown_11", BS).since(R14).default(D::Int(-1)),
];

/// Auxiliary header (section 5).
pub static AUX_HEADER: &[FieldSpec] = &[
    field("marker_1", RC).default(D::Int(0xFF)),
    field("marker_2", RC).default(D::Int(0x77)),
    field("marker_3", RC).default(D::Int(0x01)),
    field("dwg_version", RS),
    field("maint_version", RS),
    field("numsaves", RL).default(D::Int(1)),
    field("minus_1", RL).default(D::Int(-1)),
    field("numsaves_1", RS).default(D::Int(1)),
    field("numsaves_2", RS),
    field("zero_1", RL),
    field("dwg_version_1", RS),
    field("maint_version_1", RS),
    field("dwg_version_2", RS),
    field("maint_version_2", RS),
    field("unknown_rs1", RS).default(D::Int(0x0005)),
    field("unknown_rs2", RS).default(D::Int(0x0893)),
    field("unknown_rs3", RS).default(D::Int(0x0005)),
    field("unknown_rs4", RS).default(D::Int(0x0893)),
    field("unknown_rs5", RS),
    field("unknown_rs6", RS).default(D::Int(0x0001)),
    field("unknown_rl1", RL),
    field("unknown_rl2", RL),
    field("unknown_rl3", RL),
    field("unknown_rl4", RL),
    field("unknown_rl5", RL),
    field("tdcreate", TimeRl).default(D::Double(2451544.5)),
    field("tdupdate", TimeRl).default(D::Double(2451544.5)),
    field("handseed", RL),
    field("plot_stamp", RL),
    field("zero_2", RS),
    field("numsaves_diff", RS).default(D::Int(1)),
    field("zero_3", RL),
    field("zero_4", RL),
    field("zero_5", RL),
    field("numsaves_3", RL).default(D::Int(1)),
    field("zero_6", RL),
    field("zero_7", RL),
    field("zero_8", RL),
    field("zero_9", RL),
];
