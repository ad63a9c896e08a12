// ==========================================
// 项目会议纪要助手 - 核心库
// ==========================================
// 职责: 根据项目表单生成三类会议纪要（商机评估/投标评估/项目交底），
//       并从外部系统复制的文本中识别字段回填表单
// 红线: 纪要生成与粘贴识别为纯函数，不做 I/O，不因缺失输入而失败
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 表单记录与类型
pub mod domain;

// 引擎层 - 纪要拼装规则
pub mod engine;

// 导入层 - 粘贴识别与数据文件
pub mod importer;

// 配置层 - 识别参数
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    BiddingMethod, DeliveryDetailRow, DeliveryRole, DeliveryTable, FieldRecord, MinutesKind,
    ProjectForm, RoleAssignment, YesNo,
};

// 引擎
pub use engine::{
    CommonFields, CommonFieldsCalculator, FieldMirror, MinutesComposer, MinutesDocument,
    MinutesProfile, RoleAssignmentParser,
};

// 导入
pub use importer::{FormPatch, ParsedPaste, PasteExtractor, PasteField, PasteSource, RecordIo};

// 配置
pub use config::{AppConfig, ExtractorConfig};

// API
pub use api::{ApiError, ApiResult, MinutesApi, PasteOutcome};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "项目会议纪要助手";
