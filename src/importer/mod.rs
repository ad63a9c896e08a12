// ==========================================
// 项目会议纪要助手 - 导入层
// ==========================================
// 职责: 粘贴文本识别 → 表单字段；纪要数据 JSON 导入/导出
// 支持: 标准输入、内存文本、JSON 文件
// ==========================================

// 模块声明
pub mod error;
pub mod line_classifier;
pub mod paste_extractor;
pub mod paste_source;
pub mod post_process;
pub mod record_io;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use line_classifier::{LineClass, LineClassifier};
pub use paste_extractor::{ParsedPaste, PasteExtractor, PasteField};
pub use paste_source::{PasteSource, StaticSource, StdinSource};
pub use post_process::{FormPatch, PatchBuilder};
pub use record_io::RecordIo;
