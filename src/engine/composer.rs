// ==========================================
// 项目会议纪要助手 - 纪要生成引擎
// ==========================================
// 职责: 表单记录 → 商机评估会 / 投标评估会 / 项目交底会 纪要文本
// 结构: 一个参数化的拼装器 + 每类纪要一份 MinutesProfile
// ==========================================

mod clauses;
mod core;
mod profiles;


pub use self::core::{
    ClauseContext, ClauseFn, MinutesComposer, MinutesDocument, MinutesProfile, Section,
    SectionBody,
};
pub use clauses::ProcurementStyle;
