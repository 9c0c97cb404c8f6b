//! Fixed object type numbers.
//!
//! Types below 500 have a fixed meaning; from 500 on, `type - 500` indexes
//! the class table.

/// Fixed DWG object type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum DwgObjectType {
    Text = 1,
    Attrib = 2,
    Attdef = 3,
    Block = 4,
    Endblk = 5,
    Seqend = 6,
    Insert = 7,
    Minsert = 8,
    Unknown9 = 9,
    Vertex2D = 0x0A,
    Vertex3D = 0x0B,
    VertexMesh = 0x0C,
    VertexPface = 0x0D,
    VertexPfaceFace = 0x0E,
    Polyline2D = 0x0F,
    Polyline3D = 0x10,
    Arc = 0x11,
    Circle = 0x12,
    Line = 0x13,
    DimensionOrdinate = 0x14,
    DimensionLinear = 0x15,
    DimensionAligned = 0x16,
    DimensionAng3Pt = 0x17,
    DimensionAng2Ln = 0x18,
    DimensionRadius = 0x19,
    DimensionDiameter = 0x1A,
    Point = 0x1B,
    Face3D = 0x1C,
    PolylinePface = 0x1D,
    PolylineMesh = 0x1E,
    Solid = 0x1F,
    Trace = 0x20,
    Shape = 0x21,
    Viewport = 0x22,
    Ellipse = 0x23,
    Spline = 0x24,
    Region = 0x25,
    Solid3D = 0x26,
    Body = 0x27,
    Ray = 0x28,
    Xline = 0x29,
    Dictionary = 0x2A,
    OleFrame = 0x2B,
    Mtext = 0x2C,
    Leader = 0x2D,
    Tolerance = 0x2E,
    Mline = 0x2F,
    BlockControlObj = 0x30,
    BlockHeader = 0x31,
    LayerControlObj = 0x32,
    Layer = 0x33,
    StyleControlObj = 0x34,
    Style = 0x35,
    Unknown36 = 0x36,
    Unknown37 = 0x37,
    LtypeControlObj = 0x38,
    Ltype = 0x39,
    Unknown3A = 0x3A,
    Unknown3B = 0x3B,
    ViewControlObj = 0x3C,
    View = 0x3D,
    UcsControlObj = 0x3E,
    Ucs = 0x3F,
    VportControlObj = 0x40,
    Vport = 0x41,
    AppidControlObj = 0x42,
    Appid = 0x43,
    DimstyleControlObj = 0x44,
    Dimstyle = 0x45,
    VpEntHdrCtrlObj = 0x46,
    VpEntHdr = 0x47,
    Group = 0x48,
    MlineStyle = 0x49,
    Ole2Frame = 0x4A,
    Dummy = 0x4B,
    LongTransaction = 0x4C,
    LwPolyline = 0x4D,
    Hatch = 0x4E,
    XRecord = 0x4F,
    AcDbPlaceholder = 0x50,
    VbaProject = 0x51,
    Layout = 0x52,
    AcadProxyEntity = 0x1F2,
    AcadProxyObject = 0x1F3,
}

impl DwgObjectType {
    /// Every fixed type, in numeric order.
    pub const ALL: [DwgObjectType; 84] = [
        DwgObjectType::Text,
        DwgObjectType::Attrib,
        DwgObjectType::Attdef,
        DwgObjectType::Block,
        DwgObjectType::Endblk,
        DwgObjectType::Seqend,
        DwgObjectType::Insert,
        DwgObjectType::Minsert,
        DwgObjectType::Unknown9,
        DwgObjectType::Vertex2D,
        DwgObjectType::Vertex3D,
        DwgObjectType::VertexMesh,
        DwgObjectType::VertexPface,
        DwgObjectType::VertexPfaceFace,
        DwgObjectType::Polyline2D,
        DwgObjectType::Polyline3D,
        DwgObjectType::Arc,
        DwgObjectType::Circle,
        DwgObjectType::Line,
        DwgObjectType::DimensionOrdinate,
        DwgObjectType::DimensionLinear,
        DwgObjectType::DimensionAligned,
        DwgObjectType::DimensionAng3Pt,
        DwgObjectType::DimensionAng2Ln,
        DwgObjectType::DimensionRadius,
        DwgObjectType::DimensionDiameter,
        DwgObjectType::Point,
        DwgObjectType::Face3D,
        DwgObjectType::PolylinePface,
        DwgObjectType::PolylineMesh,
        DwgObjectType::Solid,
        DwgObjectType::Trace,
        DwgObjectType::Shape,
        DwgObjectType::Viewport,
        DwgObjectType::Ellipse,
        DwgObjectType::Spline,
        DwgObjectType::Region,
        DwgObjectType::Solid3D,
        DwgObjectType::Body,
        DwgObjectType::Ray,
        DwgObjectType::Xline,
        DwgObjectType::Dictionary,
        DwgObjectType::OleFrame,
        DwgObjectType::Mtext,
        DwgObjectType::Leader,
        DwgObjectType::Tolerance,
        DwgObjectType::Mline,
        DwgObjectType::BlockControlObj,
        DwgObjectType::BlockHeader,
        DwgObjectType::LayerControlObj,
        DwgObjectType::Layer,
        DwgObjectType::StyleControlObj,
        DwgObjectType::Style,
        DwgObjectType::Unknown36,
        DwgObjectType::Unknown37,
        DwgObjectType::LtypeControlObj,
        DwgObjectType::Ltype,
        DwgObjectType::Unknown3A,
        DwgObjectType::Unknown3B,
        DwgObjectType::ViewControlObj,
        DwgObjectType::View,
        DwgObjectType::UcsControlObj,
        DwgObjectType::Ucs,
        DwgObjectType::VportControlObj,
        DwgObjectType::Vport,
        DwgObjectType::AppidControlObj,
        DwgObjectType::Appid,
        DwgObjectType::DimstyleControlObj,
        DwgObjectType::Dimstyle,
        DwgObjectType::VpEntHdrCtrlObj,
        DwgObjectType::VpEntHdr,
        DwgObjectType::Group,
        DwgObjectType::MlineStyle,
        DwgObjectType::Ole2Frame,
        DwgObjectType::Dummy,
        DwgObjectType::LongTransaction,
        DwgObjectType::LwPolyline,
        DwgObjectType::Hatch,
        DwgObjectType::XRecord,
        DwgObjectType::AcDbPlaceholder,
        DwgObjectType::VbaProject,
        DwgObjectType::Layout,
        DwgObjectType::AcadProxyEntity,
        DwgObjectType::AcadProxyObject,
    ];

    /// Map a raw type number to a fixed type. Class-defined numbers and
    /// gaps in the fixed range return `None`.
    pub fn from_raw(value: u16) -> Option<Self> {
        match value {
            1 => Some(Self::Text),
            2 => Some(Self::Attrib),
            3 => Some(Self::Attdef),
            4 => Some(Self::Block),
            5 => Some(Self::Endblk),
            6 => Some(Self::Seqend),
            7 => Some(Self::Insert),
            8 => Some(Self::Minsert),
            9 => Some(Self::Unknown9),
            0x0A => Some(Self::Vertex2D),
            0x0B => Some(Self::Vertex3D),
            0x0C => Some(Self::VertexMesh),
            0x0D => Some(Self::VertexPface),
            0x0E => Some(Self::VertexPfaceFace),
            0x0F => Some(Self::Polyline2D),
            0x10 => Some(Self::Polyline3D),
            0x11 => Some(Self::Arc),
            0x12 => Some(Self::Circle),
            0x13 => Some(Self::Line),
            0x14 => Some(Self::DimensionOrdinate),
            0x15 => Some(Self::DimensionLinear),
            0x16 => Some(Self::DimensionAligned),
            0x17 => Some(Self::DimensionAng3Pt),
            0x18 => Some(Self::DimensionAng2Ln),
            0x19 => Some(Self::DimensionRadius),
            0x1A => Some(Self::DimensionDiameter),
            0x1B => Some(Self::Point),
            0x1C => Some(Self::Face3D),
            0x1D => Some(Self::PolylinePface),
            0x1E => Some(Self::PolylineMesh),
            0x1F => Some(Self::Solid),
            0x20 => Some(Self::Trace),
            0x21 => Some(Self::Shape),
            0x22 => Some(Self::Viewport),
            0x23 => Some(Self::Ellipse),
            0x24 => Some(Self::Spline),
            0x25 => Some(Self::Region),
            0x26 => Some(Self::Solid3D),
            0x27 => Some(Self::Body),
            0x28 => Some(Self::Ray),
            0x29 => Some(Self::Xline),
            0x2A => Some(Self::Dictionary),
            0x2B => Some(Self::OleFrame),
            0x2C => Some(Self::Mtext),
            0x2D => Some(Self::Leader),
            0x2E => Some(Self::Tolerance),
            0x2F => Some(Self::Mline),
            0x30 => Some(Self::BlockControlObj),
            0x31 => Some(Self::BlockHeader),
            0x32 => Some(Self::LayerControlObj),
            0x33 => Some(Self::Layer),
            0x34 => Some(Self::StyleControlObj),
            0x35 => Some(Self::Style),
            0x36 => Some(Self::Unknown36),
            0x37 => Some(Self::Unknown37),
            0x38 => Some(Self::LtypeControlObj),
            0x39 => Some(Self::Ltype),
            0x3A => Some(Self::Unknown3A),
            0x3B => Some(Self::Unknown3B),
            0x3C => Some(Self::ViewControlObj),
            0x3D => Some(Self::View),
            0x3E => Some(Self::UcsControlObj),
            0x3F => Some(Self::Ucs),
            0x40 => Some(Self::VportControlObj),
            0x41 => Some(Self::Vport),
            0x42 => Some(Self::AppidControlObj),
            0x43 => Some(Self::Appid),
            0x44 => Some(Self::DimstyleControlObj),
            0x45 => Some(Self::Dimstyle),
            0x46 => Some(Self::VpEntHdrCtrlObj),
            0x47 => Some(Self::VpEntHdr),
            0x48 => Some(Self::Group),
            0x49 => Some(Self::MlineStyle),
            0x4A => Some(Self::Ole2Frame),
            0x4B => Some(Self::Dummy),
            0x4C => Some(Self::LongTransaction),
            0x4D => Some(Self::LwPolyline),
            0x4E => Some(Self::Hatch),
            0x4F => Some(Self::XRecord),
            0x50 => Some(Self::AcDbPlaceholder),
            0x51 => Some(Self::VbaProject),
            0x52 => Some(Self::Layout),
            0x1F2 => Some(Self::AcadProxyEntity),
            0x1F3 => Some(Self::AcadProxyObject),
            _ => None,
        }
    }

    pub fn as_raw(self) -> u16 {
        self as u16
    }

    /// Name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Attrib => "ATTRIB",
            Self::Attdef => "ATTDEF",
            Self::Block => "BLOCK",
            Self::Endblk => "ENDBLK",
            Self::Seqend => "SEQEND",
            Self::Insert => "INSERT",
            Self::Minsert => "MINSERT",
            Self::Unknown9 => "UNKNOWN_9",
            Self::Vertex2D => "VERTEX_2D",
            Self::Vertex3D => "VERTEX_3D",
            Self::VertexMesh => "VERTEX_MESH",
            Self::VertexPface => "VERTEX_PFACE",
            Self::VertexPfaceFace => "VERTEX_PFACE_FACE",
            Self::Polyline2D => "POLYLINE_2D",
            Self::Polyline3D => "POLYLINE_3D",
            Self::Arc => "ARC",
            Self::Circle => "CIRCLE",
            Self::Line => "LINE",
            Self::DimensionOrdinate => "DIMENSION_ORDINATE",
            Self::DimensionLinear => "DIMENSION_LINEAR",
            Self::DimensionAligned => "DIMENSION_ALIGNED",
            Self::DimensionAng3Pt => "DIMENSION_ANG3PT",
            Self::DimensionAng2Ln => "DIMENSION_ANG2LN",
            Self::DimensionRadius => "DIMENSION_RADIUS",
            Self::DimensionDiameter => "DIMENSION_DIAMETER",
            Self::Point => "POINT",
            Self::Face3D => "3DFACE",
            Self::PolylinePface => "POLYLINE_PFACE",
            Self::PolylineMesh => "POLYLINE_MESH",
            Self::Solid => "SOLID",
            Self::Trace => "TRACE",
            Self::Shape => "SHAPE",
            Self::Viewport => "VIEWPORT",
            Self::Ellipse => "ELLIPSE",
            Self::Spline => "SPLINE",
            Self::Region => "REGION",
            Self::Solid3D => "3DSOLID",
            Self::Body => "BODY",
            Self::Ray => "RAY",
            Self::Xline => "XLINE",
            Self::Dictionary => "DICTIONARY",
            Self::OleFrame => "OLEFRAME",
            Self::Mtext => "MTEXT",
            Self::Leader => "LEADER",
            Self::Tolerance => "TOLERANCE",
            Self::Mline => "MLINE",
            Self::BlockControlObj => "BLOCK_CONTROL",
            Self::BlockHeader => "BLOCK_HEADER",
            Self::LayerControlObj => "LAYER_CONTROL",
            Self::Layer => "LAYER",
            Self::StyleControlObj => "STYLE_CONTROL",
            Self::Style => "STYLE",
            Self::Unknown36 => "UNKNOWN_36",
            Self::Unknown37 => "UNKNOWN_37",
            Self::LtypeControlObj => "LTYPE_CONTROL",
            Self::Ltype => "LTYPE",
            Self::Unknown3A => "UNKNOWN_3A",
            Self::Unknown3B => "UNKNOWN_3B",
            Self::ViewControlObj => "VIEW_CONTROL",
            Self::View => "VIEW",
            Self::UcsControlObj => "UCS_CONTROL",
            Self::Ucs => "UCS",
            Self::VportControlObj => "VPORT_CONTROL",
            Self::Vport => "VPORT",
            Self::AppidControlObj => "APPID_CONTROL",
            Self::Appid => "APPID",
            Self::DimstyleControlObj => "DIMSTYLE_CONTROL",
            Self::Dimstyle => "DIMSTYLE",
            Self::VpEntHdrCtrlObj => "VX_CONTROL",
            Self::VpEntHdr => "VX_TABLE_RECORD",
            Self::Group => "GROUP",
            Self::MlineStyle => "MLINESTYLE",
            Self::Ole2Frame => "OLE2FRAME",
            Self::Dummy => "DUMMY",
            Self::LongTransaction => "LONG_TRANSACTION",
            Self::LwPolyline => "LWPOLYLINE",
            Self::Hatch => "HATCH",
            Self::XRecord => "XRECORD",
            Self::AcDbPlaceholder => "PLACEHOLDER",
            Self::VbaProject => "VBA_PROJECT",
            Self::Layout => "LAYOUT",
            Self::AcadProxyEntity => "PROXY_ENTITY",
            Self::AcadProxyObject => "PROXY_OBJECT",
        }
    }

    /// Whether objects of this type carry the entity common header.
    pub fn is_entity(self) -> bool {
        matches!(
            self,
            Self::Text
                | Self::Attrib
                | Self::Attdef
                | Self::Block
                | Self::Endblk
                | Self::Seqend
                | Self::Insert
                | Self::Minsert
                | Self::Vertex2D
                | Self::Vertex3D
                | Self::VertexMesh
                | Self::VertexPface
                | Self::VertexPfaceFace
                | Self::Polyline2D
                | Self::Polyline3D
                | Self::Arc
                | Self::Circle
                | Self::Line
                | Self::DimensionOrdinate
                | Self::DimensionLinear
                | Self::DimensionAligned
                | Self::DimensionAng3Pt
                | Self::DimensionAng2Ln
                | Self::DimensionRadius
                | Self::DimensionDiameter
                | Self::Point
                | Self::Face3D
                | Self::PolylinePface
                | Self::PolylineMesh
                | Self::Solid
                | Self::Trace
                | Self::Shape
                | Self::Viewport
                | Self::Ellipse
                | Self::Spline
                | Self::Region
                | Self::Solid3D
                | Self::Body
                | Self::Ray
                | Self::Xline
                | Self::OleFrame
                | Self::Mtext
                | Self::Leader
                | Self::Tolerance
                | Self::Mline
                | Self::Ole2Frame
                | Self::LwPolyline
                | Self::Hatch
                | Self::AcadProxyEntity
        )
    }
}
